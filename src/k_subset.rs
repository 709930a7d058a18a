//! Enumerates all k-element subsets of {0, .., n-1} as bit masks in
//! ascending order using only bit arithmetic (Gosper's hack): from one mask,
//! the lowest block of 1-bits is bumped up by one position and the leftover
//! bits of the block fall back to the bottom.

/// Iterator over the `u32` masks with exactly `k` bits set below bit `n`.
/// `k == 0` and `k > n` both yield nothing. `n` must be at most 31.
pub struct KSubsets {
    mask: u32,
    end: u32,
}

impl KSubsets {
    pub fn new(k: u32, n: u32) -> Self {
        assert!(n < 32, "mask enumeration is limited to 31 bits");
        let end = 1 << n;
        let mask = if k == 0 || k > n { end } else { (1 << k) - 1 };
        Self { mask, end }
    }
}

impl Iterator for KSubsets {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.mask & self.end != 0 {
            return None;
        }
        let current = self.mask;

        let lo = self.mask & self.mask.wrapping_neg(); // lowest one bit
        let lz = (self.mask + lo) & !self.mask; // lowest zero bit above lo
        self.mask |= lz; // bump the block up
        self.mask &= !(lz - 1); // clear everything below
        self.mask |= (lz >> (lo.trailing_zeros() + 1)) - 1; // refill at the bottom

        Some(current)
    }
}
