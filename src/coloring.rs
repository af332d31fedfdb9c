//! Sequential first-fit (greedy) vertex coloring over a dense adjacency matrix.
//!
//! Vertices are visited in index order `0..n`. Each vertex receives the smallest
//! positive color not already held by one of its colored neighbors. Neighbors that
//! have not been visited yet carry the unassigned sentinel and never block a color.
//!
//! The result is a proper coloring but not necessarily an optimal one: the number of
//! colors depends on the visiting order and can exceed the chromatic number.

use crate::graph::{AdjacencyMatrix, ValidationError};

/// Scratch value for a vertex that has not been colored yet. Real colors start at `1`.
const UNASSIGNED: usize = 0;

// ============================================================================
// Coloring
// ============================================================================

/// A vertex coloring with 1-indexed colors, one entry per vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coloring {
    colors: Vec<usize>,
}

impl Coloring {
    /// Wraps an explicit color assignment.
    pub fn from_colors(colors: Vec<usize>) -> Self {
        Self { colors }
    }

    /// Reads colors back from a matrix whose diagonal was filled by [`Coloring::apply_to`].
    ///
    /// Only 1-indexed colors round-trip. A diagonal `0` is a valid matrix entry but is
    /// read as unassigned here, so the result is `None` if any vertex is uncolored or
    /// holds `0`.
    pub fn from_diagonal(graph: &AdjacencyMatrix) -> Option<Self> {
        let colors = (0..graph.order())
            .map(|v| usize::try_from(graph.diagonal(v)).ok().filter(|&c| c != UNASSIGNED))
            .collect::<Option<Vec<_>>>()?;
        Some(Self { colors })
    }

    /// Returns the colors in vertex order.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.colors
    }

    /// Consumes the coloring and returns the color vector.
    pub fn into_vec(self) -> Vec<usize> {
        self.colors
    }

    /// Returns the color of vertex `v`.
    #[inline]
    pub fn color_of(&self, v: usize) -> usize {
        self.colors[v]
    }

    /// Returns the number of colored vertices.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if no vertex is colored.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the number of colors used, i.e. the largest color (`0` when empty).
    pub fn num_colors(&self) -> usize {
        self.colors.iter().copied().max().unwrap_or(0)
    }

    /// Returns every edge `(u, v)`, `u < v`, whose endpoints share a color.
    ///
    /// # Panics
    /// Panics if the coloring and the graph disagree on the vertex count.
    pub fn conflicts(&self, graph: &AdjacencyMatrix) -> Vec<(usize, usize)> {
        assert_eq!(self.colors.len(), graph.order(), "coloring/graph size mismatch");
        graph
            .edges()
            .into_iter()
            .filter(|&(u, v)| self.colors[u] == self.colors[v])
            .collect()
    }

    /// Counts the edges whose endpoints share a color.
    ///
    /// # Panics
    /// Panics if the coloring and the graph disagree on the vertex count.
    pub fn count_conflicts(&self, graph: &AdjacencyMatrix) -> usize {
        self.conflicts(graph).len()
    }

    /// Returns `true` if no two adjacent vertices share a color.
    pub fn is_proper(&self, graph: &AdjacencyMatrix) -> bool {
        self.colors.len() == graph.order() && self.count_conflicts(graph) == 0
    }

    /// Writes each vertex color onto the diagonal of `graph`.
    ///
    /// # Panics
    /// Panics if the coloring and the graph disagree on the vertex count.
    pub fn apply_to(&self, graph: &mut AdjacencyMatrix) {
        assert_eq!(self.colors.len(), graph.order(), "coloring/graph size mismatch");
        for (v, &c) in self.colors.iter().enumerate() {
            graph.set_diagonal(v, c as i64);
        }
    }
}

// ============================================================================
// First-fit
// ============================================================================

/// Colors `graph` with the first-fit heuristic, visiting vertices in index order.
///
/// Runs in `O(n^2)` time with `O(n)` scratch. The diagonal is ignored, so a matrix
/// that already stores colors on its diagonal is recolored from scratch.
pub fn first_fit(graph: &AdjacencyMatrix) -> Coloring {
    let n = graph.order();
    let mut colors = vec![UNASSIGNED; n];
    // Colors range over 1..=n+1 at most; index 0 is the sentinel and never marked.
    let mut color_used = vec![false; n + 2];

    for i in 0..n {
        for j in graph.neighbors(i) {
            if colors[j] != UNASSIGNED {
                color_used[colors[j]] = true;
            }
        }

        // A vertex has at most n - 1 neighbors, so some color in 1..=n is always free.
        let chosen = (1..color_used.len())
            .find(|&c| !color_used[c])
            .unwrap_or(n + 1);
        colors[i] = chosen;

        for j in graph.neighbors(i) {
            if colors[j] != UNASSIGNED {
                color_used[colors[j]] = false;
            }
        }
    }

    Coloring { colors }
}

/// Validates a raw matrix and colors it with [`first_fit`].
///
/// # Errors
/// Returns an error if `rows` is not square, not symmetric off the diagonal, or holds
/// values outside the adjacency alphabet.
pub fn color_rows(rows: &[Vec<i64>]) -> Result<Coloring, ValidationError> {
    let graph = AdjacencyMatrix::from_rows(rows)?;
    Ok(first_fit(&graph))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate;
    use rand::{Rng, SeedableRng};
    use rand_xorshift::XorShiftRng;

    // -------------------------------------------------------------------------
    // Known graphs
    // -------------------------------------------------------------------------

    #[test]
    fn empty_graph_has_empty_coloring() {
        let coloring = first_fit(&AdjacencyMatrix::empty(0));
        assert!(coloring.is_empty());
        assert_eq!(coloring.num_colors(), 0);
    }

    #[test]
    fn single_vertex_gets_color_one() {
        let coloring = first_fit(&AdjacencyMatrix::empty(1));
        assert_eq!(coloring.as_slice(), &[1]);
    }

    #[test]
    fn isolated_vertices_all_get_color_one() {
        let coloring = first_fit(&AdjacencyMatrix::empty(5));
        assert_eq!(coloring.into_vec(), vec![1; 5]);
    }

    #[test]
    fn path_graph() {
        let g = AdjacencyMatrix::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        assert_eq!(first_fit(&g).as_slice(), &[1, 2, 1]);
    }

    #[test]
    fn complete_graph_uses_one_color_per_vertex() {
        let coloring = first_fit(&AdjacencyMatrix::complete(4));
        assert_eq!(coloring.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(coloring.num_colors(), 4);
    }

    #[test]
    fn vertex_takes_next_color_after_saturated_neighbors() {
        // Triangle 0-1-2 uses colors 1..=3; vertex 3 sees all three.
        let g =
            AdjacencyMatrix::from_edges(4, &[(0, 1), (0, 2), (1, 2), (3, 0), (3, 1), (3, 2)])
                .unwrap();
        assert_eq!(first_fit(&g).color_of(3), 4);
    }

    #[test]
    fn later_neighbors_do_not_block_colors() {
        // Star with center 0: every leaf is visited after the center.
        let g = AdjacencyMatrix::from_edges(4, &[(0, 1), (0, 2), (0, 3)]).unwrap();
        assert_eq!(first_fit(&g).as_slice(), &[1, 2, 2, 2]);
    }

    #[test]
    fn crown_graph_shows_order_dependence() {
        // Crown on 3+3 vertices, interleaved so first-fit needs 3 colors on a bipartite graph.
        let g = AdjacencyMatrix::from_edges(6, &[(0, 3), (0, 5), (2, 1), (2, 5), (4, 1), (4, 3)])
            .unwrap();
        let coloring = first_fit(&g);
        assert_eq!(coloring.as_slice(), &[1, 1, 2, 2, 3, 3]);
        assert!(coloring.is_proper(&g));
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    #[test]
    fn random_colorings_are_proper_and_bounded() {
        let mut rng = XorShiftRng::seed_from_u64(0xC0FFEE);
        for _ in 0..50 {
            let n = rng.random_range(1..40);
            let max_edges = n * (n - 1) / 2;
            let m = rng.random_range(0..=max_edges);
            let g = generate(n, m, &mut rng).unwrap();

            let coloring = first_fit(&g);
            assert_eq!(coloring.len(), n);
            assert!(coloring.is_proper(&g), "improper coloring for n={n} m={m}");
            assert!(coloring.num_colors() <= g.max_degree() + 1);
        }
    }

    #[test]
    fn first_fit_is_deterministic() {
        let mut rng = XorShiftRng::seed_from_u64(0xBEEF);
        let g = generate(30, 120, &mut rng).unwrap();
        assert_eq!(first_fit(&g), first_fit(&g));
    }

    #[test]
    fn colored_diagonal_is_ignored_on_recolor() {
        let mut rng = XorShiftRng::seed_from_u64(0xFACE);
        let mut g = generate(20, 50, &mut rng).unwrap();
        let coloring = first_fit(&g);
        coloring.apply_to(&mut g);
        assert_eq!(first_fit(&g), coloring);
    }

    // -------------------------------------------------------------------------
    // Conflicts and diagonal round-trip
    // -------------------------------------------------------------------------

    #[test]
    fn conflicts_are_detected() {
        let g = AdjacencyMatrix::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        let bad = Coloring::from_colors(vec![1, 1, 1]);
        assert_eq!(bad.conflicts(&g), vec![(0, 1), (1, 2)]);
        assert_eq!(bad.count_conflicts(&g), 2);
        assert!(!bad.is_proper(&g));
    }

    #[test]
    fn apply_and_read_back_diagonal() {
        let mut g = AdjacencyMatrix::complete(3);
        assert_eq!(Coloring::from_diagonal(&g), None);

        let coloring = first_fit(&g);
        coloring.apply_to(&mut g);
        assert_eq!(g.diagonal(2), 3);
        assert_eq!(Coloring::from_diagonal(&g), Some(coloring));
    }

    #[test]
    #[should_panic(expected = "coloring/graph size mismatch")]
    fn count_conflicts_rejects_short_coloring() {
        let g = AdjacencyMatrix::complete(2);
        let _ = Coloring::from_colors(vec![1]).count_conflicts(&g);
    }

    #[test]
    fn is_proper_is_false_on_size_mismatch() {
        let g = AdjacencyMatrix::complete(2);
        assert!(!Coloring::from_colors(vec![1]).is_proper(&g));
    }

    #[test]
    fn zero_diagonal_is_valid_but_does_not_read_back() {
        let rows = vec![vec![0, 1], vec![1, 2]];
        let g = AdjacencyMatrix::from_rows(&rows).unwrap();
        assert_eq!(Coloring::from_diagonal(&g), None);
    }

    #[test]
    #[should_panic]
    fn apply_to_rejects_size_mismatch() {
        let mut g = AdjacencyMatrix::empty(2);
        Coloring::from_colors(vec![1]).apply_to(&mut g);
    }

    // -------------------------------------------------------------------------
    // Raw-matrix precondition
    // -------------------------------------------------------------------------

    #[test]
    fn color_rows_colors_valid_matrix() {
        let rows = vec![vec![-1, 1, 0], vec![1, -1, 1], vec![0, 1, -1]];
        assert_eq!(color_rows(&rows).unwrap().as_slice(), &[1, 2, 1]);
    }

    #[test]
    fn color_rows_rejects_invalid_matrix() {
        let non_square = vec![vec![-1, 1], vec![1]];
        assert!(matches!(
            color_rows(&non_square),
            Err(ValidationError::NonSquare { .. })
        ));

        let asymmetric = vec![vec![-1, 1], vec![0, -1]];
        assert!(matches!(
            color_rows(&asymmetric),
            Err(ValidationError::NotSymmetric { .. })
        ));

        let bad_value = vec![vec![-1, 5], vec![5, -1]];
        assert!(matches!(
            color_rows(&bad_value),
            Err(ValidationError::InvalidEntry { .. })
        ));
    }
}
