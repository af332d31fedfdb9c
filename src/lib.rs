//! # graphcolor
//!
//! Random graph generation and sequential first-fit coloring over a plain-text
//! adjacency-matrix format.
//!
//! This crate provides:
//! - A dense symmetric adjacency matrix whose diagonal is reserved for vertex colors
//!   (`-1` means uncolored).
//! - A parser and writer for the `<n> <m>` + `n` rows text format.
//! - A random generator producing simple graphs with an exact edge count.
//! - The first-fit greedy colorer, plus conflict checks and a benchmark-style report row.
//!
//! ## Quick Start
//!
//! ```
//! use graphcolor::coloring::first_fit;
//! use graphcolor::format::parse_graph;
//!
//! // Path 0-1-2
//! let graph = parse_graph("3 2\n-1 1 0\n1 -1 1\n0 1 -1\n").unwrap();
//! let coloring = first_fit(&graph);
//!
//! assert_eq!(coloring.as_slice(), &[1, 2, 1]);
//! assert!(coloring.is_proper(&graph));
//! ```
//!
//! ## Generating Graphs
//!
//! ```
//! use graphcolor::generate::generate;
//! use rand::SeedableRng;
//! use rand_xorshift::XorShiftRng;
//!
//! let mut rng = XorShiftRng::seed_from_u64(12345);
//! let graph = generate(100, 250, &mut rng).unwrap();
//!
//! assert_eq!(graph.order(), 100);
//! assert_eq!(graph.edge_count(), 250);
//! ```
//!
//! ## Storing Colors on the Diagonal
//!
//! ```
//! use graphcolor::coloring::{first_fit, Coloring};
//! use graphcolor::graph::AdjacencyMatrix;
//!
//! let mut graph = AdjacencyMatrix::complete(3);
//! let coloring = first_fit(&graph);
//! coloring.apply_to(&mut graph);
//!
//! assert_eq!(graph.to_text(), "3 3\n1 1 1\n1 2 1\n1 1 3\n");
//! assert_eq!(Coloring::from_diagonal(&graph), Some(coloring));
//! ```
//!
//! ## Modules
//!
//! - [`graph`]: Adjacency matrix and invariant validation.
//! - [`format`]: Text format parsing, serialization and file helpers.
//! - [`coloring`]: First-fit coloring and conflict detection.
//! - [`generate`]: Random graphs with a fixed edge count.
//! - [`report`]: Graph statistics and timed coloring reports.
//! - [`options`]: Command-line options of the `graphcolor` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)] // Mathematical variable names
#![allow(clippy::needless_range_loop)] // Often clearer for matrix indexing

pub mod coloring;
pub mod format;
pub mod generate;
pub mod graph;
pub mod options;
pub mod report;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::coloring::{color_rows, first_fit, Coloring};
    pub use crate::format::{parse_graph, parse_matrix, FormatError, GraphError};
    pub use crate::generate::{generate, GenerateError};
    pub use crate::graph::{AdjacencyMatrix, ValidationError, UNCOLORED};
    pub use crate::report::{run_sequential, ColoringReport, GraphStats};
}
