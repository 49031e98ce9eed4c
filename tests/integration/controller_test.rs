//! Integration tests for the player controller driven by simulated media

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use starplay::player::testing::FakeView;
use starplay::player::{Action, EventKind, KeyOutcome, PlayIcon, PlaybackSpeed, Target, UiEvent};

use super::helpers::{advance, position, pump, simulated_controller};

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn full_playback_lifecycle() {
    let t0 = Instant::now();
    let mut c = simulated_controller(20.0, FakeView::default(), t0);

    pump(&mut c, t0);
    assert!(c.view().buffering);
    assert!(c.session().buffering);

    // Refused while buffering: nothing changes
    c.handle(&UiEvent::click(Target::BigPlayButton), t0);
    pump(&mut c, t0);
    assert!(!c.session().is_playing);

    advance(&mut c, ms(400), t0);
    assert!(!c.view().buffering);
    assert_eq!(c.view().duration_text, "00:20");

    c.handle(&UiEvent::click(Target::PlayPauseButton), t0);
    assert!(!c.session().is_playing, "play must wait for confirmation");
    pump(&mut c, t0);
    assert!(c.session().is_playing);
    assert_eq!(c.view().play_icon, Some(PlayIcon::Pause));
    assert!(!c.view().play_overlay);
    assert!(c.view().playing_mode);

    advance(&mut c, Duration::from_secs(5), t0);
    assert_eq!(c.view().elapsed_text, "00:05");
    assert!((c.view().progress - 0.25).abs() < 1e-9);

    advance(&mut c, Duration::from_secs(20), t0);
    assert!(!c.session().is_playing);
    assert!(c.media().is_ended());
    assert_eq!(c.view().replay_cues, 1);
    assert!(c.view().play_overlay);
    assert_eq!(c.view().play_icon, Some(PlayIcon::Play));
    assert_eq!(c.view().elapsed_text, "00:20");
    assert_eq!(c.view().progress, 1.0);
}

#[test]
fn replay_after_end_restarts_from_zero() {
    let t0 = Instant::now();
    let mut c = simulated_controller(2.0, FakeView::default(), t0);
    advance(&mut c, ms(400), t0);
    c.toggle_play();
    pump(&mut c, t0);
    advance(&mut c, Duration::from_secs(3), t0);
    assert!(c.media().is_ended());

    c.handle(&UiEvent::click(Target::BigPlayButton), t0);
    pump(&mut c, t0);
    assert!(c.session().is_playing);
    assert_eq!(position(&c), 0.0);
}

// ============================================================================
// Seeking
// ============================================================================

#[test]
fn seek_drag_suppresses_time_update_progress() {
    let t0 = Instant::now();
    let mut c = simulated_controller(20.0, FakeView::default(), t0);
    advance(&mut c, ms(400), t0);
    c.toggle_play();
    pump(&mut c, t0);

    c.handle(&UiEvent::progress_press(0.5), t0);
    pump(&mut c, t0);
    assert!(c.session().is_seeking);
    assert_eq!(position(&c), 10.0);
    assert_eq!(c.view().progress, 0.5);
    assert_eq!(c.view().elapsed_text, "00:10");

    // Playback continues underneath the drag; only the text follows it
    advance(&mut c, Duration::from_secs(1), t0);
    assert_eq!(c.view().elapsed_text, "00:11");
    assert_eq!(c.view().progress, 0.5);

    c.handle(&UiEvent::pointer_move(Some(0.25)), t0);
    assert_eq!(position(&c), 5.0);
    assert_eq!(c.view().progress, 0.25);

    c.handle(&UiEvent::pointer_up(), t0);
    assert!(!c.session().is_seeking);
    pump(&mut c, t0);
    advance(&mut c, Duration::from_secs(1), t0);
    assert!((c.view().progress - 0.3).abs() < 1e-9);
}

#[test]
fn pointer_move_without_drag_does_not_seek() {
    let t0 = Instant::now();
    let mut c = simulated_controller(20.0, FakeView::default(), t0);
    advance(&mut c, ms(400), t0);

    c.handle(&UiEvent::pointer_move(Some(0.9)), t0);
    assert_eq!(position(&c), 0.0);
}

#[test]
fn skip_clamps_to_media_bounds() {
    let t0 = Instant::now();
    let mut c = simulated_controller(20.0, FakeView::default(), t0);

    // Unknown duration: no-op
    assert!(!c.skip(10.0));

    advance(&mut c, ms(400), t0);
    c.seek_to(0.75);
    c.handle(&UiEvent::click(Target::ForwardButton), t0);
    assert_eq!(position(&c), 20.0);

    c.seek_to(0.25);
    c.handle(&UiEvent::click(Target::RewindButton), t0);
    assert_eq!(position(&c), 0.0);
}

// ============================================================================
// Speed, keyboard, subscriptions
// ============================================================================

#[test]
fn speed_cycle_drives_simulated_clock() {
    let t0 = Instant::now();
    let mut c = simulated_controller(60.0, FakeView::default(), t0);
    advance(&mut c, ms(400), t0);
    c.toggle_play();
    pump(&mut c, t0);

    c.handle(&UiEvent::click(Target::SpeedButton), t0);
    assert_eq!(c.session().speed, PlaybackSpeed::OneAndQuarter);
    assert_eq!(c.view().speed_label, "1.25x");

    advance(&mut c, Duration::from_secs(4), t0);
    assert!((position(&c) - 5.0).abs() < 1e-9);
}

#[test]
fn keyboard_outcomes() {
    let t0 = Instant::now();
    let mut c = simulated_controller(20.0, FakeView::default(), t0);
    advance(&mut c, ms(400), t0);

    assert_eq!(
        c.handle(&UiEvent::key(KeyCode::Char(' ')), t0),
        KeyOutcome::PreventDefault
    );
    pump(&mut c, t0);
    assert!(c.session().is_playing);

    assert_eq!(c.handle(&UiEvent::key(KeyCode::Char('z')), t0), KeyOutcome::Ignored);

    c.handle(&UiEvent::key(KeyCode::Down), t0);
    assert!((c.session().volume - 0.9).abs() < 1e-9);
    assert!((c.view().volume_slider - 90.0).abs() < 1e-9);
}

#[test]
fn removed_binding_stops_dispatch() {
    let t0 = Instant::now();
    let mut c = simulated_controller(20.0, FakeView::default(), t0);
    advance(&mut c, ms(400), t0);

    let id = c
        .subscriptions()
        .find(Target::Media, EventKind::Click, Action::TogglePlay)
        .expect("media click is bound");
    assert!(c.subscriptions_mut().unsubscribe(id));

    c.handle(&UiEvent::click(Target::Media), t0);
    pump(&mut c, t0);
    assert!(!c.session().is_playing);

    // The play button binding is untouched
    c.handle(&UiEvent::click(Target::PlayPauseButton), t0);
    pump(&mut c, t0);
    assert!(c.session().is_playing);
}

// ============================================================================
// Controls auto-hide
// ============================================================================

#[test]
fn controls_hide_only_while_playing() {
    let t0 = Instant::now();
    let mut c = simulated_controller(60.0, FakeView::default(), t0);

    // Paused when the first deadline passes: controls stay
    c.tick(t0 + ms(3000));
    assert!(c.view().controls_visible);

    advance(&mut c, ms(400), t0);
    c.toggle_play();
    pump(&mut c, t0);

    let t1 = t0 + ms(4000);
    c.handle(&UiEvent::pointer_move(None), t1);
    c.tick(t1 + ms(2999));
    assert!(c.view().controls_visible);
    c.tick(t1 + ms(3000));
    assert!(!c.view().controls_visible);
    assert!(!c.session().controls_visible);

    // Activity brings them back and re-arms the timer
    c.handle(&UiEvent::pointer_move(None), t1 + ms(5000));
    assert!(c.view().controls_visible);
    assert!(c.controls_timer().is_armed());
}

#[test]
fn shutdown_clears_timer() {
    let t0 = Instant::now();
    let mut c = simulated_controller(10.0, FakeView::default(), t0);
    assert!(c.controls_timer().is_armed());
    c.shutdown();
    assert!(!c.controls_timer().is_armed());
}
