//! Summary statistics for graphs and benchmark-style rows for coloring runs.

use crate::coloring::{first_fit, Coloring};
use crate::graph::AdjacencyMatrix;
use log::debug;
use std::fmt;
use std::time::Instant;

// ============================================================================
// Graph statistics
// ============================================================================

/// Degree statistics of a graph.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphStats {
    /// Number of vertices.
    pub vertices: usize,
    /// Number of edges.
    pub edges: usize,
    /// Largest vertex degree.
    pub max_degree: usize,
    /// Mean vertex degree (`0.0` for an empty graph).
    pub average_degree: f64,
}

impl GraphStats {
    /// Computes the statistics of `graph`.
    pub fn of(graph: &AdjacencyMatrix) -> Self {
        let vertices = graph.order();
        let degree_sum: usize = (0..vertices).map(|v| graph.degree(v)).sum();
        let average_degree = if vertices == 0 {
            0.0
        } else {
            degree_sum as f64 / vertices as f64
        };
        Self {
            vertices,
            edges: degree_sum / 2,
            max_degree: graph.max_degree(),
            average_degree,
        }
    }
}

impl fmt::Display for GraphStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "vertices: {}", self.vertices)?;
        writeln!(f, "edges: {}", self.edges)?;
        writeln!(f, "max degree: {}", self.max_degree)?;
        write!(f, "average degree: {}", self.average_degree)
    }
}

// ============================================================================
// Coloring report
// ============================================================================

/// One row of a coloring benchmark: method, threads, conflict fixes, colors, time, conflicts.
#[derive(Clone, Debug, PartialEq)]
pub struct ColoringReport {
    /// Algorithm label, e.g. `Sequential`.
    pub method: String,
    /// Worker threads used.
    pub n_threads: usize,
    /// Conflict-resolution rounds performed.
    pub n_fixes: usize,
    /// Colors used.
    pub n_colors: usize,
    /// Wall-clock coloring time in seconds.
    pub time: f64,
    /// Edges left with equal endpoint colors.
    pub n_conf: usize,
}

impl ColoringReport {
    /// Column header matching [`ColoringReport`]'s `Display` layout.
    pub fn header() -> String {
        format!(
            " {:<10} | {:<10} | {:<15} | {:<10} | {:<14} | {:<10}",
            "Algorithm", "# Threads", "# Conf.Fixes", "# Colors", "T Exec.  (s)", "# Conf."
        )
    }
}

impl fmt::Display for ColoringReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            " {:<10} | {:<10} | {:<15} | {:<10} | {:<14.10} | {}",
            self.method, self.n_threads, self.n_fixes, self.n_colors, self.time, self.n_conf
        )
    }
}

/// Runs sequential first-fit on `graph`, timing it and checking the result.
///
/// The sequential colorer never needs conflict fixes, so `n_fixes` is always `0`
/// and `n_conf` is `0` unless the coloring is broken.
pub fn run_sequential(graph: &AdjacencyMatrix) -> (Coloring, ColoringReport) {
    let start = Instant::now();
    let coloring = first_fit(graph);
    let time = start.elapsed().as_secs_f64();

    let n_conf = coloring.count_conflicts(graph);
    debug!(
        "first-fit colored {} vertices with {} colors in {time}s",
        graph.order(),
        coloring.num_colors()
    );

    let report = ColoringReport {
        method: "Sequential".to_string(),
        n_threads: 1,
        n_fixes: 0,
        n_colors: coloring.num_colors(),
        time,
        n_conf,
    };
    (coloring, report)
}

// ============================================================================
// Tests
// ============================================================================
