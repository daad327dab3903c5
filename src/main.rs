//! Tesseract Bounce - headless runner
//!
//! Loads the configuration, builds the simulation and drives it through the
//! logging frontend at the configured tick rate.

use std::process::ExitCode;

use tesseract_bounce::config::AppConfig;
use tesseract_bounce::{AppError, LogFrontend, SimulationSystem};

fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting Tesseract Bounce");

    let simulation = SimulationSystem::new(config.to_simulation_config()?)?;
    log::info!(
        "Hypercube: {} vertices, {} edges, half-extent {}, eye distance {}",
        simulation.geometry().vertices().len(),
        simulation.geometry().edges().len(),
        simulation.geometry().extent(),
        simulation.projector().distance()
    );

    let mut frontend = LogFrontend::new(config.frontend.log_every);
    config.frame_driver().run(simulation, &mut frontend);
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The logger may not be up yet if loading failed
            eprintln!("{}", e);
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
