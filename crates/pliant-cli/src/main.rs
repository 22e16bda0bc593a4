//! Pliant CLI — simulation, benchmarking, and debugging.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "pliant")]
#[command(version, about = "Pliant — 2D soft-body physics engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demo scene with a world config file.
    Simulate {
        /// Path to world config (TOML).
        #[arg(short, long, default_value = "world.toml")]
        config: String,

        /// Number of steps to simulate.
        #[arg(short, long, default_value_t = 600)]
        steps: u32,

        /// Output path for the final state snapshot.
        #[arg(short = 'o', long)]
        snapshot: Option<String>,
    },

    /// Run benchmark suite.
    Benchmark {
        /// Which scenario to run (free_fall, dropped_stack,
        /// inflated_ring, head_on_collision, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Inspect a state snapshot file.
    Inspect {
        /// Path to snapshot file.
        path: String,
    },

    /// Validate a world config or a shape vertex list.
    Validate {
        /// Path to config (.toml) or shape (.json) file.
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            config,
            steps,
            snapshot,
        } => commands::simulate(&config, steps, snapshot.as_deref()),
        Commands::Benchmark { scenario, output } => {
            commands::benchmark(&scenario, output.as_deref())
        }
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
