//! Headless host: drives the simulation from a fixed-rate scheduler.

use anyhow::Result;
use critters_core::HostConfig;
use critters_world::Session;
use std::time::Duration;
use tokio::signal;
use tokio::time::interval;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = HostConfig::default();
    info!(
        tick_rate_hz = config.tick_rate_hz,
        width = config.world.width,
        height = config.world.height,
        "starting critters host"
    );

    let mut session = Session::new(config.world.clone())?;
    session.start();
    let shared = session.into_shared();

    let period = Duration::from_secs_f64(1.0 / config.tick_rate_hz);
    let mut ticker = interval(period);

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let mut session = shared.lock();
                let Some(snapshot) = session.pulse()? else {
                    continue;
                };
                if config.log_every_ticks > 0 && snapshot.turn % config.log_every_ticks == 0 {
                    for (species, record) in &snapshot.scores {
                        info!(
                            turn = snapshot.turn,
                            %species,
                            alive = record.alive,
                            food = record.food_eaten,
                            kills = record.kill_count,
                            score = record.score(),
                            "score"
                        );
                    }
                }
            }
            _ = &mut shutdown => {
                break;
            }
        }
    }

    shared.lock().stop();
    info!("host shut down");

    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,critters_world=debug".into()),
        )
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
