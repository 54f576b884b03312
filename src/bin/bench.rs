use bipartite_maximum_matching::{
    matching::MatchingEngine, parser::parse_input_file, BipartiteGraph,
};
use clap::Parser;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Benchmark runner: times repeated matching computations over instance files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Instance files to benchmark
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Number of timed runs per instance
    #[arg(short, long, default_value_t = 10)]
    runs: usize,

    /// Path of the timing log
    #[arg(short, long, default_value = "log.txt")]
    log: PathBuf,
}

/// Time `runs` computations on one already-loaded instance and append the
/// per-run and average timings to the log
fn log_execution_time<W: Write>(
    log: &mut W,
    path: &Path,
    graph: &BipartiteGraph,
    runs: usize,
) -> io::Result<(usize, f64)> {
    writeln!(log, "File: {}", path.display())?;

    let mut engine = MatchingEngine::new(graph);
    let mut total_ms = 0.0;
    let mut size = 0;
    for _ in 0..runs {
        let start = Instant::now();
        size = engine.compute();
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        writeln!(log, "{:.3}", elapsed_ms)?;
        total_ms += elapsed_ms;
    }

    let average = total_ms / runs as f64;
    writeln!(log, "Average time: {:.3}ms", average)?;
    writeln!(log)?;

    Ok((size, average))
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.runs == 0 {
        eprintln!("Error: runs must be at least 1.");
        std::process::exit(1);
    }

    // Instances are independently owned, so parsing fans out across threads;
    // the timed runs themselves stay sequential to keep measurements clean.
    let loaded: Result<Vec<_>, _> = args
        .inputs
        .par_iter()
        .map(|path| parse_input_file(path).map(|graph| (path.clone(), graph)))
        .collect();
    let instances = match loaded {
        Ok(instances) => instances,
        Err(e) => {
            eprintln!("Error parsing input file: {}", e);
            std::process::exit(1);
        }
    };

    let mut log = File::create(&args.log)?;

    for (path, graph) in &instances {
        let (size, average) = log_execution_time(&mut log, path, graph, args.runs)?;
        println!(
            "{}: matching size {}, average {:.3}ms over {} runs",
            path.display(),
            size,
            average,
            args.runs
        );
    }
    log.flush()?;

    println!("Timings written to {:?}", args.log);

    Ok(())
}
