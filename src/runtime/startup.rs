use std::time::{Duration, Instant};

use crate::app::App;
use crate::audio::AudioBackend;
use crate::catalog::Catalog;
use crate::config;
use crate::player::{ControllerOptions, PlayerController};

/// Assemble the screen model for a fresh session.
pub fn build_app<B: AudioBackend>(
    backend: B,
    catalog: Catalog,
    settings: &config::Settings,
    now: Instant,
) -> App<B> {
    let player = PlayerController::new(backend, catalog, ControllerOptions::from(settings));

    App::new(player, settings.sleep_timer.step_minutes)
        .with_splash(now, Duration::from_millis(settings.ui.splash_ms))
        .with_autoplay(settings.ui.autoplay)
}
