//! Command-line options for the `graphcolor` binary.
//!
//! `generate [-v N] [-e M] [-s SEED] [-o FILE]`, `color -f FILE [-o FILE]`, `stats -f FILE`.

use clap::{value_parser, Arg, ArgMatches, Command};
use std::path::PathBuf;

/// The selected subcommand and its arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Write a random graph in the adjacency-matrix format.
    Generate {
        /// Vertex count.
        vertices: usize,
        /// Edge count.
        edges: usize,
        /// RNG seed; a random one is drawn when absent.
        seed: Option<u64>,
        /// Destination file; stdout when absent.
        output: Option<PathBuf>,
    },
    /// Color a graph with first-fit and print the result.
    Color {
        /// Matrix file to read.
        file: PathBuf,
        /// Where to write the matrix with colors on its diagonal.
        output: Option<PathBuf>,
    },
    /// Print degree statistics of a graph.
    Stats {
        /// Matrix file to read.
        file: PathBuf,
    },
}

fn file_arg() -> Arg {
    Arg::new("file")
        .short('f')
        .long("file")
        .value_name("PATH")
        .help("Path of the adjacency-matrix file")
        .required(true)
        .value_parser(value_parser!(PathBuf))
}

fn output_arg(help: &'static str) -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .help(help)
        .value_parser(value_parser!(PathBuf))
}

fn make_options_parser() -> Command {
    Command::new("graphcolor")
        .no_binary_name(true)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Random graph generation and first-fit coloring")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("generate")
                .about("Generate a random graph")
                .arg(
                    Arg::new("n-vertex")
                        .short('v')
                        .long("n-vertex")
                        .help("No. of vertices")
                        .default_value("10")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("n-edge")
                        .short('e')
                        .long("n-edge")
                        .help("No. of edges")
                        .default_value("10")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("seed")
                        .short('s')
                        .long("seed")
                        .help("Deterministic RNG seed")
                        .value_parser(value_parser!(u64)),
                )
                .arg(output_arg("Write the matrix here instead of stdout")),
        )
        .subcommand(
            Command::new("color")
                .about("Color a graph with first-fit")
                .arg(file_arg())
                .arg(output_arg("Write the matrix with colors on its diagonal")),
        )
        .subcommand(
            Command::new("stats")
                .about("Print degree statistics of a graph")
                .arg(file_arg()),
        )
}

/// Parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// What to run.
    pub action: Action,
}

impl Options {
    /// Parses arguments, excluding the binary name.
    ///
    /// # Errors
    /// Returns the clap error (which also covers `--help` and `--version`).
    pub fn parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = make_options_parser().try_get_matches_from(args)?;
        let action = match matches.subcommand() {
            Some(("generate", sub)) => Action::Generate {
                vertices: required(sub, "n-vertex"),
                edges: required(sub, "n-edge"),
                seed: sub.get_one::<u64>("seed").copied(),
                output: sub.get_one::<PathBuf>("output").cloned(),
            },
            Some(("color", sub)) => Action::Color {
                file: required(sub, "file"),
                output: sub.get_one::<PathBuf>("output").cloned(),
            },
            Some(("stats", sub)) => Action::Stats {
                file: required(sub, "file"),
            },
            _ => {
                return Err(make_options_parser()
                    .error(clap::error::ErrorKind::MissingSubcommand, "no subcommand given"))
            }
        };
        Ok(Options { action })
    }
}

/// Reads an argument clap guarantees to be present (required or defaulted).
fn required<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, id: &str) -> T {
    matches
        .get_one::<T>(id)
        .cloned()
        .unwrap_or_else(|| unreachable!("clap enforces `{id}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_defaults() {
        let options = Options::parse_from_args(["generate"]).unwrap();
        assert_eq!(
            options.action,
            Action::Generate {
                vertices: 10,
                edges: 10,
                seed: None,
                output: None,
            }
        );
    }

    #[test]
    fn generate_with_all_flags() {
        let options = Options::parse_from_args([
            "generate", "-v", "50", "--n-edge", "70", "-s", "9", "-o", "g.txt",
        ])
        .unwrap();
        assert_eq!(
            options.action,
            Action::Generate {
                vertices: 50,
                edges: 70,
                seed: Some(9),
                output: Some(PathBuf::from("g.txt")),
            }
        );
    }

    #[test]
    fn color_requires_file() {
        assert!(Options::parse_from_args(["color"]).is_err());
        let options =
            Options::parse_from_args(["color", "-f", "in.txt", "-o", "out.txt"]).unwrap();
        assert_eq!(
            options.action,
            Action::Color {
                file: PathBuf::from("in.txt"),
                output: Some(PathBuf::from("out.txt")),
            }
        );
    }

    #[test]
    fn stats_parses_file() {
        let options = Options::parse_from_args(["stats", "--file", "g.txt"]).unwrap();
        assert_eq!(
            options.action,
            Action::Stats {
                file: PathBuf::from("g.txt")
            }
        );
    }

    #[test]
    fn rejects_unknown_subcommand_and_bad_numbers() {
        assert!(Options::parse_from_args(["render"]).is_err());
        assert!(Options::parse_from_args(["generate", "-v", "ten"]).is_err());
        assert!(Options::parse_from_args(Vec::<String>::new()).is_err());
    }
}
