//! Clockwise spiral traversal of a rectangular 2-D grid, starting at the
//! top-left corner. Two interchangeable implementations: one peeling rings
//! recursively, one shrinking the four bounds in a loop.

/// Visits every cell once as `(row, col, value)`, ring by ring, recursively.
pub fn spiral_recursive(grid: &[Vec<i32>], mut visit: impl FnMut(usize, usize, i32)) {
    if grid.is_empty() || grid[0].is_empty() {
        return;
    }
    walk_ring(grid, 0, 0, grid.len() - 1, grid[0].len() - 1, &mut visit);
}

fn walk_ring(
    grid: &[Vec<i32>],
    top: usize,
    left: usize,
    bottom: usize,
    right: usize,
    visit: &mut impl FnMut(usize, usize, i32),
) {
    if top > bottom || left > right {
        return;
    }

    // full top row, inner right column, then the bottom row and inner left
    // column only when the ring has more than one row / column
    for col in left..=right {
        visit(top, col, grid[top][col]);
    }
    for row in top + 1..bottom {
        visit(row, right, grid[row][right]);
    }
    if top < bottom {
        for col in (left..=right).rev() {
            visit(bottom, col, grid[bottom][col]);
        }
    }
    if left < right {
        for row in (top + 1..bottom).rev() {
            visit(row, left, grid[row][left]);
        }
    }

    if top < bottom && left < right {
        walk_ring(grid, top + 1, left + 1, bottom - 1, right - 1, visit);
    }
}

/// Same traversal without recursion: four sweeps per ring, bounds moving
/// inward after each full ring.
pub fn spiral_iterative(grid: &[Vec<i32>], mut visit: impl FnMut(usize, usize, i32)) {
    if grid.is_empty() || grid[0].is_empty() {
        return;
    }
    let mut top = 0;
    let mut left = 0;
    let mut bottom = grid.len() - 1;
    let mut right = grid[0].len() - 1;

    while top <= bottom && left <= right {
        for col in left..=right {
            visit(top, col, grid[top][col]);
        }
        for row in top + 1..bottom {
            visit(row, right, grid[row][right]);
        }
        if top < bottom {
            for col in (left..=right).rev() {
                visit(bottom, col, grid[bottom][col]);
            }
        }
        if left < right {
            for row in (top + 1..bottom).rev() {
                visit(row, left, grid[row][left]);
            }
        }

        if top == bottom || left == right {
            break;
        }
        top += 1;
        left += 1;
        bottom -= 1;
        right -= 1;
    }
}

/// The iterative traversal's values, collected in visiting order.
pub fn spiral_order(grid: &[Vec<i32>]) -> Vec<i32> {
    let mut values = Vec::new();
    spiral_iterative(grid, |_, _, value| values.push(value));
    values
}
