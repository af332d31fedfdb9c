//! Random simple undirected graphs with an exact vertex and edge count.

use crate::graph::AdjacencyMatrix;
use log::debug;
use rand::seq::index;
use rand::Rng;
use thiserror::Error;

/// Errors raised by [`generate`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The `n x n` matrix for this many vertices cannot be allocated.
    #[error("{n} vertices do not fit in an addressable adjacency matrix")]
    TooManyVertices {
        /// Requested vertex count.
        n: usize,
    },
    /// More edges were requested than a simple graph on `n` vertices can hold.
    #[error("{requested} edges requested but a simple graph on {n} vertices has at most {max}")]
    TooManyEdges {
        /// Vertex count.
        n: usize,
        /// Requested edge count.
        requested: usize,
        /// `n * (n - 1) / 2`.
        max: usize,
    },
}

/// Returns `n * (n - 1) / 2`, or `None` on overflow.
pub fn max_edges(n: usize) -> Option<usize> {
    n.checked_mul(n.saturating_sub(1)).map(|p| p / 2)
}

/// Returns `true` if an `n x n` matrix of `i64` cells stays within the allocation limit.
fn matrix_fits(n: usize) -> bool {
    n.checked_mul(n)
        .and_then(|cells| cells.checked_mul(std::mem::size_of::<i64>()))
        .is_some_and(|bytes| bytes <= isize::MAX as usize)
}

/// Generates a graph on `n` vertices with exactly `m` edges chosen uniformly at random.
///
/// Every vertex is left uncolored on the diagonal. Output is deterministic for a
/// seeded `rng`.
///
/// # Errors
/// Returns an error if the matrix for `n` vertices is too large to address, or if `m`
/// exceeds the number of vertex pairs.
pub fn generate<R: Rng + ?Sized>(
    n: usize,
    m: usize,
    rng: &mut R,
) -> Result<AdjacencyMatrix, GenerateError> {
    if !matrix_fits(n) {
        return Err(GenerateError::TooManyVertices { n });
    }
    let max = max_edges(n).unwrap_or(usize::MAX);
    if m > max {
        return Err(GenerateError::TooManyEdges {
            n,
            requested: m,
            max,
        });
    }

    // Sample m distinct pair indices out of the upper triangle, then decode them row by row.
    let mut picks = index::sample(rng, max, m).into_vec();
    picks.sort_unstable();

    let mut graph = AdjacencyMatrix::empty(n);
    let mut picks = picks.into_iter().peekable();
    let mut row_start = 0usize;
    for u in 0..n {
        let row_len = n - 1 - u;
        let row_end = row_start + row_len;
        while let Some(&k) = picks.peek() {
            if k >= row_end {
                break;
            }
            graph.add_edge(u, u + 1 + (k - row_start));
            picks.next();
        }
        row_start = row_end;
    }

    debug!("generated graph with {n} vertices and {m} edges");
    Ok(graph)
}

// ============================================================================
// Tests
// ============================================================================
