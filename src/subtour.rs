//! Sub-cycle detection over an assignment solution.
//!
//! An assignment solution induces a successor relation: node `i`'s successor
//! is the first column `j` with `x[i][j]` above the selection threshold.
//! Under the degree constraints an integral solution decomposes into disjoint
//! cycles; any cycle shorter than `n` is a subtour the DFJ formulation must
//! cut off.

use crate::matrix::SquareMatrix;

/// Threshold above which an edge variable counts as selected.
pub const SELECTED: f64 = 0.5;

/// Finds the shortest cycle in an assignment solution.
///
/// Traversal starts at the lowest-indexed unvisited node and follows
/// successor edges (first column above [`SELECTED`], scanned in increasing
/// order, restricted to unvisited nodes) until the path closes back on a
/// visited node or a row has no selected successor. Each such path is
/// recorded as one cycle; new traversals start from the remaining unvisited
/// nodes until all are consumed.
///
/// Returns the ordered node sequence of the shortest cycle found. The
/// comparison is strict, so among equal-length cycles the one discovered
/// first (lowest-indexed start) wins. A returned sequence of length `n`
/// means the solution is a single full tour.
///
/// # Examples
///
/// ```
/// use pareto_tsp::matrix::SquareMatrix;
/// use pareto_tsp::subtour::find_shortest_cycle;
///
/// // Two 2-cycles: 0 -> 1 -> 0 and 2 -> 3 -> 2.
/// let mut x = SquareMatrix::new(4);
/// x.set(0, 1, 1.0);
/// x.set(1, 0, 1.0);
/// x.set(2, 3, 1.0);
/// x.set(3, 2, 1.0);
/// assert_eq!(find_shortest_cycle(&x), vec![0, 1]);
/// ```
pub fn find_shortest_cycle(solution: &SquareMatrix) -> Vec<usize> {
    let n = solution.size();
    let mut seen = vec![false; n];
    let mut best: Vec<usize> = Vec::new();

    while let Some(start) = (0..n).find(|&i| !seen[i]) {
        let mut cycle = Vec::new();
        let mut node = start;
        loop {
            cycle.push(node);
            seen[node] = true;
            match (0..n).find(|&j| solution.get(node, j) > SELECTED && !seen[j]) {
                Some(next) => node = next,
                None => break,
            }
        }
        if best.is_empty() || cycle.len() < best.len() {
            best = cycle;
        }
    }
    best
}
