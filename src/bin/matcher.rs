use bipartite_maximum_matching::{matching::MatchingEngine, parser::parse_input_file};
use clap::Parser;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Maximum Bipartite Matching solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input file containing the bipartite edge list
    #[arg(short, long)]
    input: PathBuf,

    /// Write the result to this file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Write the matching in the boundary format: a size line, then one
/// `<left> <right>` pair per line in ascending right-vertex order
fn write_result<W: Write>(
    writer: &mut W,
    size: usize,
    engine: &MatchingEngine<'_>,
) -> io::Result<()> {
    writeln!(writer, "Maximum matching size: {}", size)?;
    for (left, right) in engine.matched_pairs() {
        writeln!(writer, "{} {}", left, right)?;
    }
    Ok(())
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let graph = match parse_input_file(&args.input) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Error parsing input file: {}", e);
            std::process::exit(1);
        }
    };

    let mut engine = MatchingEngine::new(&graph);
    let size = engine.compute();

    match args.output {
        Some(path) => {
            let mut writer = File::create(&path)?;
            write_result(&mut writer, size, &engine)?;
            writer.flush()?;
            println!("Results written to {:?}", path);
        }
        None => {
            let stdout = io::stdout();
            write_result(&mut stdout.lock(), size, &engine)?;
        }
    }

    Ok(())
}
