//! Dense adjacency-matrix graph whose diagonal is reserved for per-vertex colors.

use thiserror::Error;

/// Diagonal value of a vertex that has no color assigned yet.
pub const UNCOLORED: i64 = -1;

// ============================================================================
// AdjacencyMatrix
// ============================================================================

/// An undirected simple graph on vertices `0..n`, stored as a row-major `n x n` matrix.
///
/// Representation:
/// - `M[i][j] = 1` iff the edge `{i, j}` exists (`i != j`), otherwise `0`.
/// - `M[i][i]` is either [`UNCOLORED`] or the non-negative color of vertex `i`.
///
/// Every constructor upholds these invariants, so code holding an `AdjacencyMatrix`
/// never has to re-check symmetry or the value alphabet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    n: usize,
    cells: Vec<i64>,
}

impl AdjacencyMatrix {
    /// Creates a graph with `n` uncolored vertices and no edges.
    pub fn empty(n: usize) -> Self {
        let mut cells = vec![0; n * n];
        for v in 0..n {
            cells[v * n + v] = UNCOLORED;
        }
        Self { n, cells }
    }

    /// Creates the complete graph on `n` vertices.
    pub fn complete(n: usize) -> Self {
        let mut graph = Self::empty(n);
        for u in 0..n {
            for v in (u + 1)..n {
                graph.add_edge(u, v);
            }
        }
        graph
    }

    /// Builds a graph from an edge list. Duplicate edges are merged.
    ///
    /// # Errors
    /// Returns an error if an endpoint is out of range or an edge is a self-loop.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self, ValidationError> {
        let mut graph = Self::empty(n);
        for &(u, v) in edges {
            for vertex in [u, v] {
                if vertex >= n {
                    return Err(ValidationError::VertexOutOfRange { vertex, n });
                }
            }
            if u == v {
                return Err(ValidationError::SelfLoop { vertex: u });
            }
            graph.add_edge(u, v);
        }
        Ok(graph)
    }

    /// Builds a graph from raw matrix rows after checking every invariant.
    ///
    /// # Errors
    /// See [`validate_rows`].
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self, ValidationError> {
        validate_rows(rows)?;
        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);
        for row in rows {
            cells.extend_from_slice(row);
        }
        Ok(Self { n, cells })
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn order(&self) -> usize {
        self.n
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Returns the raw matrix entry `M[i][j]`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> i64 {
        debug_assert!(i < self.n && j < self.n);
        self.cells[i * self.n + j]
    }

    /// Returns row `i` of the matrix, diagonal included.
    #[inline]
    pub fn row(&self, i: usize) -> &[i64] {
        &self.cells[i * self.n..(i + 1) * self.n]
    }

    /// Iterates over the matrix rows in vertex order.
    pub fn rows(&self) -> impl Iterator<Item = &[i64]> + '_ {
        // `cells` is empty when n == 0, so the chunk size only has to be non-zero.
        self.cells.chunks_exact(self.n.max(1))
    }

    /// Copies the matrix out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        self.rows().map(<[i64]>::to_vec).collect()
    }

    /// Returns whether the edge `{u, v}` exists. The diagonal never counts as an edge.
    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        u != v && self.get(u, v) == 1
    }

    /// Adds the edge `{u, v}`. Self-loops are ignored since the diagonal holds colors.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        debug_assert!(u < self.n && v < self.n);
        if u == v {
            return;
        }
        self.cells[u * self.n + v] = 1;
        self.cells[v * self.n + u] = 1;
    }

    /// Iterates over the neighbors of `v` in increasing index order.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.row(v)
            .iter()
            .enumerate()
            .filter(move |&(u, &cell)| u != v && cell == 1)
            .map(|(u, _)| u)
    }

    /// Returns the degree of vertex `v`.
    pub fn degree(&self, v: usize) -> usize {
        self.neighbors(v).count()
    }

    /// Returns the largest vertex degree, or `0` for an empty graph.
    pub fn max_degree(&self) -> usize {
        (0..self.n).map(|v| self.degree(v)).max().unwrap_or(0)
    }

    /// Returns the number of edges, i.e. the `1` entries strictly above the diagonal.
    pub fn edge_count(&self) -> usize {
        let mut count = 0;
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.get(i, j) == 1 {
                    count += 1;
                }
            }
        }
        count
    }

    /// Returns all edges as `(u, v)` pairs with `u < v`, in row-major order.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::with_capacity(self.edge_count());
        for u in 0..self.n {
            for v in (u + 1)..self.n {
                if self.get(u, v) == 1 {
                    out.push((u, v));
                }
            }
        }
        out
    }

    /// Returns the diagonal value of `v`: [`UNCOLORED`] or its color.
    #[inline]
    pub fn diagonal(&self, v: usize) -> i64 {
        self.get(v, v)
    }

    /// Overwrites the diagonal entry of `v`.
    ///
    /// # Panics
    /// Panics in debug builds if `value < -1`.
    pub fn set_diagonal(&mut self, v: usize, value: i64) {
        debug_assert!(value >= UNCOLORED, "diagonal value {value} below the sentinel");
        self.cells[v * self.n + v] = value;
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Violations of the adjacency-matrix invariants.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A row does not have one entry per row.
    #[error("matrix is not square: row {row} has length {got}, expected {expected}")]
    NonSquare {
        /// The row index with wrong length.
        row: usize,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },
    /// An off-diagonal entry outside `{0, 1}`.
    #[error("invalid entry {value} at ({row}, {col}) (expected 0 or 1)")]
    InvalidEntry {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// The offending value.
        value: i64,
    },
    /// A diagonal entry below the uncolored sentinel.
    #[error("invalid diagonal entry {value} at vertex {vertex} (expected -1 or a color)")]
    InvalidDiagonal {
        /// The vertex whose diagonal is invalid.
        vertex: usize,
        /// The offending value.
        value: i64,
    },
    /// `M[i][j] != M[j][i]`.
    #[error("matrix is not symmetric at ({i},{j}): M[i][j]={m_ij}, M[j][i]={m_ji}")]
    NotSymmetric {
        /// Row index.
        i: usize,
        /// Column index.
        j: usize,
        /// Value at M[i][j].
        m_ij: i64,
        /// Value at M[j][i].
        m_ji: i64,
    },
    /// An edge endpoint is not a vertex of the graph.
    #[error("vertex {vertex} is out of range for a graph with {n} vertices")]
    VertexOutOfRange {
        /// The offending endpoint.
        vertex: usize,
        /// Number of vertices.
        n: usize,
    },
    /// An edge joins a vertex to itself.
    #[error("self-loop at vertex {vertex}")]
    SelfLoop {
        /// The vertex with a self-loop.
        vertex: usize,
    },
}

/// Checks that `rows` forms a valid adjacency matrix.
///
/// Rules:
/// - every row has exactly `rows.len()` entries;
/// - off-diagonal entries are `0` or `1`;
/// - diagonal entries are `-1` (uncolored) or a non-negative color;
/// - the matrix is symmetric off the diagonal.
///
/// # Errors
/// Returns the first violation found, scanning rows in order.
pub fn validate_rows(rows: &[Vec<i64>]) -> Result<(), ValidationError> {
    let n = rows.len();
    for (i, row) in rows.iter().enumerate() {
        if row.len() != n {
            return Err(ValidationError::NonSquare {
                row: i,
                expected: n,
                got: row.len(),
            });
        }
    }

    for (i, row) in rows.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            if i == j {
                if value < UNCOLORED {
                    return Err(ValidationError::InvalidDiagonal { vertex: i, value });
                }
            } else if value != 0 && value != 1 {
                return Err(ValidationError::InvalidEntry {
                    row: i,
                    col: j,
                    value,
                });
            }
        }
    }

    for i in 0..n {
        for j in (i + 1)..n {
            let (m_ij, m_ji) = (rows[i][j], rows[j][i]);
            if m_ij != m_ji {
                return Err(ValidationError::NotSymmetric { i, j, m_ij, m_ji });
            }
        }
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
