use log::info;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::interval;

use crate::dashboard::Dashboard;

const SOCIAL_REFRESH_SECS: u64 = 60;
const WEATHER_REFRESH_SECS: u64 = 15 * 60;

/// Drives the dashboard's repeating timers: the 1 Hz tick for countdowns,
/// a social-stats refresh every minute, and a weather refresh every
/// 15 minutes. Returns when `stop` flips to true or its sender is dropped;
/// signalling stop more than once is a no-op.
///
/// Refreshes run on the same task as the tick, so a slow fetch delays the
/// next tick but never another widget's state.
pub async fn run(dashboard: &mut Dashboard, mut stop: watch::Receiver<bool>) {
    let mut second = interval(Duration::from_secs(1));
    let mut social = interval(Duration::from_secs(SOCIAL_REFRESH_SECS));
    let mut weather = interval(Duration::from_secs(WEATHER_REFRESH_SECS));

    // Intervals fire once immediately; the initial load_all already covered that.
    second.tick().await;
    social.tick().await;
    weather.tick().await;

    info!("[Scheduler] started");

    loop {
        tokio::select! {
            _ = second.tick() => {
                dashboard.tick_second();
            }
            _ = social.tick() => {
                dashboard.social.load().await;
            }
            _ = weather.tick() => {
                dashboard.weather.load(false).await;
            }
            changed = stop.changed() => {
                if changed.is_err() || *stop.borrow() {
                    break;
                }
            }
        }
    }

    info!("[Scheduler] stopped");
}
