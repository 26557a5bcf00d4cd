use clap::{Parser, Subcommand};
use springnet_core::{BodyKind, Simulator};

mod presets;

use presets::Preset;

#[derive(Parser)]
#[command(name = "springnet")]
#[command(about = "Headless runner for the stock mass-spring demo systems", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Number of frames to simulate
    #[arg(long, global = true, default_value_t = 600)]
    steps: u64,

    /// Print body positions every N frames (0 prints only the final state)
    #[arg(long, global = true, default_value_t = 0)]
    trace_every: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Rod pendulums with spring-coupled bobs
    CoupledOscillators {
        /// Number of anchor/bob pairs
        #[arg(long, default_value_t = 5)]
        points: usize,
    },
    /// Uncoupled rod pendulums side by side
    NewtonPendulum {
        /// Number of anchor/ball pairs
        #[arg(long, default_value_t = 7)]
        points: usize,
    },
    /// Pre-tensioned rope with a weighted pendant chain at its midpoint
    LoadedRope {
        /// Number of base rope segments
        #[arg(long, default_value_t = 20)]
        base_points: usize,
    },
    /// One loaded point held between two anchors by springs
    TwoSprings,
    /// A single spring pendulum
    SpringPendulum,
}

fn main() {
    let cli = Cli::parse();

    let preset = match cli.command {
        Commands::CoupledOscillators { points } => presets::coupled_oscillators(points),
        Commands::NewtonPendulum { points } => presets::newton_pendulum(points),
        Commands::LoadedRope { base_points } => presets::loaded_rope(base_points),
        Commands::TwoSprings => presets::two_springs(),
        Commands::SpringPendulum => presets::spring_pendulum(),
    };

    let preset = match preset {
        Ok(preset) => preset,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_preset(preset, cli.steps, cli.trace_every) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_preset(
    mut preset: Preset,
    steps: u64,
    trace_every: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut simulator = Simulator::new(preset.config)?;

    for frame in 1..=steps {
        simulator.step(&mut preset.network, preset.dt)?;
        if trace_every > 0 && frame % trace_every == 0 {
            println!("frame {}", frame);
            print_positions(&preset);
        }
    }

    println!("final state after {} frames", steps);
    print_positions(&preset);
    Ok(())
}

fn print_positions(preset: &Preset) {
    for (index, body) in preset.network.bodies().iter().enumerate() {
        let kind = match body.kind {
            BodyKind::Fixed => "fixed",
            BodyKind::Dynamic => "dynamic",
        };
        println!(
            "  body {:>3} [{}] position = ({:.3}, {:.3})",
            index, kind, body.position.x, body.position.y
        );
    }
}
