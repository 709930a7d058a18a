//! The bit-rearrangement game: every move takes one 1-bit and one 0-bit and
//! swaps them so the number decreases while the popcount stays the same.
//! The game ends when all 1-bits are packed at the low end. The move order
//! never changes the total, so counting moves answers who plays last: each
//! 0-bit below the highest 1-bit must travel left past every 1-bit above it.

/// Number of moves before the game on `n` ends, O(bits).
pub fn count_moves(n: u32) -> u32 {
    if n == 0 {
        return 0;
    }

    let mut x = 1u32 << 31; // bit pointer sliding from high to low
    let mut ones = 0;
    let mut moves = 0;

    // skip leading zeros
    while n & x == 0 {
        x >>= 1;
    }

    while x != 0 {
        // count 1-bits until the pointer lands on a 0-bit
        while x != 0 && n & x != 0 {
            ones += 1;
            x >>= 1;
        }
        if x != 0 && n & x == 0 {
            // this 0-bit is swapped past every 1-bit seen so far
            moves += ones;
        }
        x >>= 1;
    }
    moves
}
