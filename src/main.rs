use gravsim::{bench_accelerations, bench_verlet_curve};
use gravsim::{Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Headless 2D Newtonian N-body run with per-frame diagnostics")]
struct Args {
    /// Scenario file, looked up in `scenarios/` unless the path exists as given
    #[arg(short, long = "file", default_value = "double_star.yaml")]
    file_name: String,

    /// Override the number of frames
    #[arg(long)]
    frames: Option<usize>,

    /// Override the physics ticks per frame
    #[arg(long)]
    refresh_rate: Option<usize>,

    /// Print the per-particle table with every frame
    #[arg(short, long)]
    particles: bool,

    /// Run the benchmark curves instead of a scenario
    #[arg(long)]
    bench: bool,
}

fn resolve_scenario_path(file_name: &str) -> PathBuf {
    let given = PathBuf::from(file_name);
    if given.exists() {
        return given;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_accelerations();
        bench_verlet_curve();
        return Ok(());
    }

    let path = resolve_scenario_path(&args.file_name);
    let mut cfg = ScenarioConfig::from_yaml_file(&path)
        .with_context(|| format!("failed to load scenario {}", path.display()))?;

    if let Some(frames) = args.frames {
        cfg.engine.frames = frames;
    }
    if let Some(refresh_rate) = args.refresh_rate {
        cfg.engine.refresh_rate = refresh_rate;
    }

    let scenario = Scenario::build_scenario(cfg)?;
    let frames = scenario.engine.frames;
    let mut sim = scenario.into_simulation()?;

    println!("{}\n", sim.state());

    for _ in 0..frames {
        let frame = sim.advance_frame();

        println!("t = {:.3} ({} steps)", frame.time, frame.steps);
        println!("{}", frame.diagnostics);
        if args.particles {
            for (i, (p, rel)) in frame.particles.iter().zip(frame.relative_positions()).enumerate() {
                println!(
                    "  particle {:>3} | mass: {:.0} pos: [{:.2}, {:.2}] vel: [{:.2}, {:.2}]",
                    i + 1,
                    p.mass,
                    rel.x,
                    rel.y,
                    p.velocity.x,
                    p.velocity.y
                );
            }
        }
        println!();
    }

    info!(
        "finished: {} steps, relative energy drift {:.3e}",
        sim.state().steps(),
        sim.state().energy_drift()
    );

    Ok(())
}
