use anyhow::Context;
use tracing::error;
use tracing_subscriber::EnvFilter;

use ebb_flow_timer::alert::{AlertClip, RodioAlertPlayer};
use ebb_flow_timer::clock::SystemClock;
use ebb_flow_timer::config;
use ebb_flow_timer::screen::TimerScreen;
use ebb_flow_timer::sfx::DEFAULT_ALERT_VOLUME;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run() {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let clip = AlertClip::bundled().context("decoding alert sound")?;
    let player = RodioAlertPlayer::new(clip, DEFAULT_ALERT_VOLUME).context("opening audio output")?;
    let screen = TimerScreen::new(SystemClock, player);

    engine::app::run_game(config::app_config(), screen).context("running timer window")?;
    Ok(())
}
