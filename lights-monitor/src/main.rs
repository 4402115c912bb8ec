use anyhow::{Context, Result};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use light_state::{logging, LightMonitor, PollOutcome};
use lights_client::{LightSource, LightsClient};

pub mod config;
pub mod render;

use config::Config;

/// Run one poll cycle and print what it found
///
/// Removal notices are written while the pass runs, queued changes after it.
/// Until a first snapshot is captured, a failed cycle prints the
/// not-captured notice instead.
fn run_cycle<S, W>(monitor: &mut LightMonitor<S>, out: &mut W) -> Result<()>
where
    S: LightSource,
    W: Write,
{
    let mut write_error = None;
    let outcome = monitor.poll(|removed| {
        if let Err(e) = writeln!(out, "{}", removed) {
            write_error.get_or_insert(e);
        }
    });
    if let Some(e) = write_error {
        return Err(anyhow::Error::new(e).context("Failed to write removal notice"));
    }

    match outcome {
        Ok(PollOutcome::Primed { lights }) => {
            debug!("Primed with {} light(s)", lights);
            writeln!(out, "{}", render::render_snapshot(monitor.current())?)?;
        }
        Ok(PollOutcome::Reconciled(summary)) => {
            debug!("Reconciled: {:?}", summary);
        }
        Err(e) => {
            warn!("Poll cycle skipped: {}", e);
            if !monitor.is_primed() {
                writeln!(out, "{}", render::render_snapshot(None)?)?;
            }
        }
    }

    while let Some(change) = monitor.next_change() {
        writeln!(out, "{}", render::render_change(&change)?)?;
    }
    out.flush()?;

    Ok(())
}

/// Poll until `running` is cleared
fn run_monitor<S: LightSource>(
    monitor: &mut LightMonitor<S>,
    poll_interval: Duration,
    running: &AtomicBool,
) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    while running.load(Ordering::SeqCst) {
        run_cycle(monitor, &mut out)?;
        std::thread::sleep(poll_interval);
    }

    info!("Stopping light monitor");
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to parse configuration")?;

    logging::init_logging(config.logging_mode, &config.log_level)
        .context("Failed to initialize logging")?;
    config.print_summary();

    let running = Arc::new(AtomicBool::new(true));
    {
        let running = Arc::clone(&running);
        ctrlc::set_handler(move || running.store(false, Ordering::SeqCst))
            .context("Failed to install Ctrl+C handler")?;
    }

    let client = LightsClient::with_timeouts(
        &config.host,
        config.port,
        Duration::from_secs(5),
        config.request_timeout,
    );

    if !client.is_reachable() {
        error!("Connection to {}:{} is invalid.", config.host, config.port);
    }

    let mut monitor = LightMonitor::new(client);
    run_monitor(&mut monitor, config.poll_interval, &running)
}
