use clap::Parser;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Input Generator for bipartite matching problem instances.
///
/// This tool produces an input file in the format expected by the matcher
/// and bench binaries:
///
/// <n> <m>
/// <m lines of "u v" edge pairs>
///
/// Left and right vertex ids are both drawn from [0, n); every (left, right)
/// pair is included independently with probability `density`.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate random bipartite matching instances"
)]
struct Args {
    /// Number of vertices on each side of the bipartition
    #[arg(long)]
    n: usize,

    /// Probability of an edge between any (left, right) pair
    #[arg(long, default_value_t = 0.15)]
    density: f64,

    /// Random seed (if omitted, uses entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Output file path to write the raw instance (mandatory)
    #[arg(long)]
    output: PathBuf,
}

/// Sample a random edge list over the vertex space [0, n)
fn generate_edges<R: Rng>(n: usize, density: f64, rng: &mut R) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    for u in 0..n {
        for v in 0..n {
            if rng.gen::<f64>() < density {
                edges.push((u, v));
            }
        }
    }
    edges
}

/// Write the instance as an `n m` header followed by one edge pair per line
fn write_instance<W: Write>(writer: &mut W, n: usize, edges: &[(usize, usize)]) -> io::Result<()> {
    writeln!(writer, "{} {}", n, edges.len())?;
    for &(u, v) in edges {
        writeln!(writer, "{} {}", u, v)?;
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if args.n == 0 {
        eprintln!("Error: n must be positive.");
        std::process::exit(1);
    }
    if !(0.0..=1.0).contains(&args.density) {
        eprintln!("Error: density must be in [0,1].");
        std::process::exit(1);
    }

    // Initialize RNG
    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => {
            // Use system entropy
            let seed: u64 = rand::thread_rng().gen();
            StdRng::seed_from_u64(seed)
        }
    };

    let edges = generate_edges(args.n, args.density, &mut rng);

    let mut writer = File::create(&args.output)?;
    write_instance(&mut writer, args.n, &edges)?;
    writer.flush()?;

    // Print stats to stdout (not into the file)
    println!("Generated instance:");
    println!("  n = {}", args.n);
    println!("  density = {:.3}", args.density);
    if let Some(seed) = args.seed {
        println!("  seed = {}", seed);
    }
    println!("  edges: {}", edges.len());
    println!("  output file: {:?}", args.output);

    Ok(())
}
