//! Headless sandbox run
//!
//! Builds the level from `sandbox.toml` (or defaults), then drives a scripted
//! player and vehicle through it and logs what happened.
//!
//! Set `RUST_LOG=debug` together with `simulation.debug_collisions = true` to
//! see every collider hit.

mod config;
mod level;
mod simulation;
mod terrain;

use sandbox_engine::config::Config;
use sandbox_engine::foundation::logging;

use crate::config::{GameConfig, CONFIG_PATH};
use crate::level::LevelError;
use crate::simulation::Simulation;

fn run() -> Result<(), LevelError> {
    let config = GameConfig::load_or_default(CONFIG_PATH)?;
    let sim_config = config.simulation.clone();

    let mut simulation = Simulation::new(&config)?;
    log::info!(
        "Running {} ticks at {:.1} Hz",
        sim_config.ticks,
        1.0 / sim_config.delta_time
    );

    let level = simulation.level();
    log::debug!(
        "Level holds {} colliders in a {:.0} m arena",
        level.registry.len(),
        level.config().level.arena_half_extent * 2.0
    );
    for run in 0..sim_config.runs.max(1) {
        if run > 0 {
            simulation.restart()?;
        }
        let stats = simulation.run(sim_config.ticks, sim_config.delta_time, sim_config.report_interval);
        log::info!(
            "Run {} done after {} ticks: player {} collisions / {} landings, vehicle {} collisions / {} landings",
            run + 1,
            stats.ticks,
            stats.player_collisions,
            stats.player_landings,
            stats.vehicle_collisions,
            stats.vehicle_landings,
        );
    }
    Ok(())
}

fn main() {
    logging::init();
    log::info!("Starting sandbox");

    if let Err(e) = run() {
        log::error!("Sandbox failed: {e}");
        std::process::exit(1);
    }
}
