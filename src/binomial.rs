//! Binomial coefficient C(n, k), three ways: a full DP table, a rolling
//! one-dimensional table, and the multiplicative formula. All return 0 for
//! k > n and 1 for k == 0.

/// Bottom-up DP over the full Pascal triangle, O(n * k) space.
pub fn binomial_table(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let (n, k) = (n as usize, k as usize);
    let mut table = vec![vec![0u64; k + 1]; n + 1];
    for i in 0..=n {
        for j in 0..=i.min(k) {
            table[i][j] = if j == 0 || j == i {
                1
            } else {
                table[i - 1][j - 1] + table[i - 1][j]
            };
        }
    }
    table[n][k]
}

/// Same recurrence over a single row, updated right to left, O(k) space.
pub fn binomial_rolling(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let (n, k) = (n as usize, k as usize);
    let mut row = vec![0u64; k + 1];
    row[0] = 1;
    for i in 1..=n {
        for j in (1..=i.min(k)).rev() {
            row[j] += row[j - 1];
        }
    }
    row[k]
}

/// Multiplicative formula, building the product so every intermediate
/// division is exact: C(n, k) = prod_{i=1..k} (n - k + i) / i.
pub fn binomial_multiplicative(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    if k == 0 {
        return 1;
    }
    let mut c = n - (k - 1);
    for i in 2..=k {
        c = c * (n - (k - i)) / i;
    }
    c
}
