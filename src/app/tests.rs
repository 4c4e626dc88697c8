use std::time::{Duration, Instant};

use super::*;
use crate::audio::fake::FakeBackend;
use crate::catalog::{Catalog, Track};
use crate::player::{ControllerOptions, Direction, PlayerController};

fn app(n: usize) -> App<FakeBackend> {
    let catalog = Catalog::new(
        (0..n)
            .map(|i| Track::new(format!("T{i}"), format!("/snd/{i}.mp3")))
            .collect(),
    );
    let player = PlayerController::new(FakeBackend::new(), catalog, ControllerOptions::default());
    App::new(player, 10)
}

#[test]
fn splash_swallows_the_first_key_and_expires_on_time() {
    let t0 = Instant::now();
    let mut a = app(3).with_splash(t0, Duration::from_secs(3));
    assert!(a.showing_splash());

    a.apply(Intent::TogglePlayPause);
    assert!(!a.showing_splash());
    assert!(!a.state().is_playing);

    let mut b = app(3).with_splash(t0, Duration::from_secs(3));
    b.tick(t0 + Duration::from_secs(2));
    assert!(b.showing_splash());
    b.tick(t0 + Duration::from_secs(3));
    assert!(!b.showing_splash());
}

#[test]
fn zero_length_splash_is_skipped() {
    let a = app(3).with_splash(Instant::now(), Duration::ZERO);
    assert!(!a.showing_splash());
}

#[test]
fn autoplay_starts_first_track_after_splash() {
    let t0 = Instant::now();
    let mut a = app(3)
        .with_splash(t0, Duration::from_secs(1))
        .with_autoplay(true);
    assert!(!a.state().is_playing);

    a.tick(t0 + Duration::from_secs(1));
    assert!(a.state().is_playing);
    assert_eq!(a.now_playing().map(|t| t.name.as_str()), Some("T0"));
}

#[test]
fn cursor_wraps_and_enter_plays_it() {
    let mut a = app(3);
    a.apply(Intent::CursorPrev);
    assert_eq!(a.cursor, 2);
    a.apply(Intent::CursorNext);
    assert_eq!(a.cursor, 0);
    a.apply(Intent::CursorNext);
    a.apply(Intent::PlaySelected);

    assert_eq!(a.state().current_track_index, 1);
    assert!(a.state().is_playing);
}

#[test]
fn skipping_moves_the_cursor_with_playback() {
    let mut a = app(3);
    a.apply(Intent::PlayIndex(2));
    a.apply(Intent::Skip(Direction::Forward));
    assert_eq!(a.state().current_track_index, 0);
    assert_eq!(a.cursor, 0);
}

#[test]
fn play_index_ignores_rows_that_do_not_exist() {
    let mut a = app(3);
    a.apply(Intent::PlayIndex(7));
    assert!(!a.state().is_playing);
    assert!(a.now_playing().is_none());
}

#[test]
fn sleep_key_adds_the_configured_step() {
    let mut a = app(3);
    a.apply(Intent::AddSleepTime);
    a.apply(Intent::AddSleepTime);
    assert_eq!(a.state().sleep_timer_minutes_remaining, 20);
}

#[test]
fn quit_tears_down_playback() {
    let mut a = app(3);
    a.apply(Intent::TogglePlayPause);
    assert!(a.now_playing().is_some());

    a.apply(Intent::Quit);
    assert!(a.should_quit());
    assert!(a.now_playing().is_none());
    assert_eq!(a.player.backend().open_handles(), 0);
}

#[test]
fn empty_catalog_ignores_play_requests() {
    let mut a = app(0);
    a.apply(Intent::PlaySelected);
    a.apply(Intent::CursorNext);
    assert_eq!(a.cursor, 0);
    assert!(!a.has_tracks());
    assert!(a.now_playing().is_none());
}
