//! The adjacency-matrix text format shared by the generator and the colorer.
//!
//! ```text
//! <n_vertices> <n_edges>
//! <row_0: n integers separated by single spaces>
//! ...
//! <row_{n-1}>
//! ```
//!
//! The edge count in the header is descriptive only; the body is the source of truth.

use crate::graph::{AdjacencyMatrix, ValidationError};
use log::{debug, warn};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Malformed adjacency-matrix text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormatError {
    /// No non-empty line was found.
    #[error("missing header line `<n_vertices> <n_edges>`")]
    MissingHeader,
    /// The header is not two non-negative integers.
    #[error("malformed header {line:?} (expected `<n_vertices> <n_edges>`)")]
    BadHeader {
        /// The header line as read.
        line: String,
    },
    /// The body does not contain one row per vertex.
    #[error("expected {expected} matrix rows, found {got}")]
    RowCount {
        /// Vertex count from the header.
        expected: usize,
        /// Rows actually present.
        got: usize,
    },
    /// A row does not contain one token per vertex.
    #[error("row {row} has {got} entries, expected {expected}")]
    ColumnCount {
        /// Row index.
        row: usize,
        /// Vertex count from the header.
        expected: usize,
        /// Tokens actually present.
        got: usize,
    },
    /// A token is not an integer.
    #[error("entry at ({row}, {col}) is not an integer: {token:?}")]
    NotInteger {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// The offending token.
        token: String,
    },
}

/// Anything that can go wrong while loading a graph from a file.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The text is not in the adjacency-matrix format.
    #[error("format error: {0}")]
    Format(#[from] FormatError),
    /// The matrix parsed but breaks a graph invariant.
    #[error("invalid matrix: {0}")]
    Validation(#[from] ValidationError),
    /// The file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

// ============================================================================
// Parsing
// ============================================================================

/// A syntactically valid matrix, not yet checked for graph invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedMatrix {
    /// Vertex count from the header.
    pub n: usize,
    /// Edge count as declared in the header.
    pub declared_edges: usize,
    /// The `n` rows of the body.
    pub rows: Vec<Vec<i64>>,
}

impl ParsedMatrix {
    /// Validates the parsed rows and builds the graph.
    ///
    /// A header edge count that disagrees with the body is logged, not rejected.
    ///
    /// # Errors
    /// Returns an error if the rows break an adjacency-matrix invariant.
    pub fn into_graph(self) -> Result<AdjacencyMatrix, ValidationError> {
        let graph = AdjacencyMatrix::from_rows(&self.rows)?;
        let actual = graph.edge_count();
        if actual != self.declared_edges {
            warn!(
                "header declares {} edges but the matrix contains {actual}",
                self.declared_edges
            );
        }
        Ok(graph)
    }
}

/// Parses the adjacency-matrix text format.
///
/// Rules:
/// - Blank lines are ignored.
/// - The first line holds `n m`; exactly `n` rows of `n` integers follow.
///
/// # Errors
/// Returns an error if the header is missing or malformed, the row or column
/// counts do not match `n`, or a token is not an integer.
pub fn parse_matrix(text: &str) -> Result<ParsedMatrix, FormatError> {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

    let header = lines.next().ok_or(FormatError::MissingHeader)?;
    let (n, declared_edges) = parse_header(header)?;

    let body: Vec<&str> = lines.collect();
    if body.len() != n {
        return Err(FormatError::RowCount {
            expected: n,
            got: body.len(),
        });
    }

    let mut rows = Vec::with_capacity(n);
    for (i, line) in body.iter().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != n {
            return Err(FormatError::ColumnCount {
                row: i,
                expected: n,
                got: tokens.len(),
            });
        }
        let mut row = Vec::with_capacity(n);
        for (j, token) in tokens.iter().enumerate() {
            let value = token.parse::<i64>().map_err(|_| FormatError::NotInteger {
                row: i,
                col: j,
                token: (*token).to_string(),
            })?;
            row.push(value);
        }
        rows.push(row);
    }

    debug!("parsed {n}x{n} matrix declaring {declared_edges} edges");
    Ok(ParsedMatrix {
        n,
        declared_edges,
        rows,
    })
}

fn parse_header(line: &str) -> Result<(usize, usize), FormatError> {
    let bad = || FormatError::BadHeader {
        line: line.to_string(),
    };
    let mut fields = line.split_whitespace();
    let n = fields.next().and_then(|t| t.parse().ok()).ok_or_else(bad)?;
    let m = fields.next().and_then(|t| t.parse().ok()).ok_or_else(bad)?;
    if fields.next().is_some() {
        return Err(bad());
    }
    Ok((n, m))
}

/// Parses and validates a graph in one step.
///
/// # Errors
/// Returns a [`GraphError::Format`] or [`GraphError::Validation`].
pub fn parse_graph(text: &str) -> Result<AdjacencyMatrix, GraphError> {
    Ok(parse_matrix(text)?.into_graph()?)
}

// ============================================================================
// Serialization
// ============================================================================

impl AdjacencyMatrix {
    /// Writes the graph in the adjacency-matrix text format.
    ///
    /// The header carries the actual edge count; the diagonal is written as stored.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, mut w: W) -> io::Result<()> {
        writeln!(w, "{} {}", self.order(), self.edge_count())?;
        for row in self.rows() {
            let mut first = true;
            for value in row {
                if !first {
                    w.write_all(b" ")?;
                }
                write!(w, "{value}")?;
                first = false;
            }
            writeln!(w)?;
        }
        Ok(())
    }

    /// Renders the graph in the adjacency-matrix text format.
    pub fn to_text(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_to(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Saves the graph to `filename`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written.
    pub fn save_to_file(&self, filename: impl AsRef<Path>) -> io::Result<()> {
        let mut w = BufWriter::new(File::create(filename)?);
        self.write_to(&mut w)?;
        w.flush()
    }

    /// Loads and validates a graph from `filename`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is malformed, or breaks an invariant.
    pub fn load_from_file(filename: impl AsRef<Path>) -> Result<Self, GraphError> {
        let path = filename.as_ref();
        let mut text = String::new();
        File::open(path)?.read_to_string(&mut text)?;
        debug!("read {} bytes from {}", text.len(), path.display());
        parse_graph(&text)
    }
}

// ============================================================================
// Tests
// ============================================================================
