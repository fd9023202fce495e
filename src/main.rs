//! Roulette Sim entry point
//!
//! Usage: `roulette-sim [config.json]`. Runs one seeded spin at the configured
//! fixed timestep and prints progress, events and the final outcome.

use roulette_sim::SimConfig;
use roulette_sim::report::{BallSnapshot, describe_event};
use roulette_sim::sim::BallSim;
use roulette_sim::wheel::Wheel;

/// Print a status line every this many ticks
const STATUS_INTERVAL: u32 = 30;

fn main() {
    env_logger::init();
    log::info!("Roulette Sim starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => SimConfig::load(path)?,
        None => {
            log::info!("Using default config");
            SimConfig::default()
        }
    };

    let wheel = Wheel::from_config(&config.wheel);
    let mut sim = BallSim::new(wheel, config.ball.clone())?;

    let launch = config.launch();
    log::info!(
        "Spin seed {}: launch at {:.1}° with {:.1}°/s",
        config.seed,
        launch.position,
        launch.speed
    );
    sim.launch(launch.position, launch.speed)?;

    let mut tick = 0u32;
    let outcome = sim.spin_to_pocket(config.timestep, config.max_ticks, |sim, events| {
        tick += 1;
        for event in events {
            println!("  * {}", describe_event(event));
        }
        let snapshot = BallSnapshot::capture(sim);
        if tick % STATUS_INTERVAL == 0 || snapshot.is_stopped {
            println!("{}", snapshot.status_line());
        }
    })?;

    if !outcome.stopped {
        log::warn!("Ball still moving after {} ticks", outcome.ticks);
    }
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
