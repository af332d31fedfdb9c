use anyhow::Context;
use graphcolor::generate::generate;
use graphcolor::graph::AdjacencyMatrix;
use graphcolor::options::{Action, Options};
use graphcolor::report::{run_sequential, ColoringReport, GraphStats};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use std::io::{self, BufWriter, Write};
use std::path::Path;

fn main() {
    if std::env::var("GRAPHCOLOR_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("GRAPHCOLOR_LOG")
            .write_style("GRAPHCOLOR_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let options =
        Options::parse_from_args(std::env::args_os().skip(1)).unwrap_or_else(|e| e.exit());
    log::debug!("graphcolor options: {:?}", options);

    let mut out = BufWriter::new(io::stdout().lock());
    let result = run(options.action, &mut out).and_then(|()| Ok(out.flush()?));
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

/// Executes one subcommand, writing its console output to `out`.
fn run<W: Write>(action: Action, out: &mut W) -> anyhow::Result<()> {
    match action {
        Action::Generate {
            vertices,
            edges,
            seed,
            output,
        } => {
            let seed = seed.unwrap_or_else(rand::random);
            log::info!("generating |V|={vertices} |E|={edges} with seed {seed}");
            let mut rng = XorShiftRng::seed_from_u64(seed);
            let graph = generate(vertices, edges, &mut rng)?;
            match output {
                Some(path) => graph
                    .save_to_file(&path)
                    .with_context(|| format!("writing {}", path.display()))?,
                None => graph.write_to(&mut *out)?,
            }
        }
        Action::Color { file, output } => {
            let mut graph = load(&file)?;
            let (coloring, report) = run_sequential(&graph);
            for (v, c) in coloring.as_slice().iter().enumerate() {
                writeln!(out, "{v} {c}")?;
            }
            writeln!(out, "{}", ColoringReport::header())?;
            writeln!(out, "{report}")?;
            if let Some(path) = output {
                coloring.apply_to(&mut graph);
                graph
                    .save_to_file(&path)
                    .with_context(|| format!("writing {}", path.display()))?;
            }
        }
        Action::Stats { file } => {
            let graph = load(&file)?;
            writeln!(out, "{}", GraphStats::of(&graph))?;
        }
    }
    Ok(())
}

fn load(path: &Path) -> anyhow::Result<AdjacencyMatrix> {
    AdjacencyMatrix::load_from_file(path).with_context(|| format!("loading {}", path.display()))
}
