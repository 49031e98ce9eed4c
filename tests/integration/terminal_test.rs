//! Integration tests for the terminal front end drawn on a test backend

use std::time::{Duration, Instant};

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use starplay::player::playback::SimulatedMedia;
use starplay::player::render::{draw, TerminalView};
use starplay::player::{PlayerController, Target, UiEvent};
use starplay::theme::Theme;
use starplay::MovieInfo;

use super::helpers::{advance, pump, simulated_controller};

type TerminalController = PlayerController<SimulatedMedia, TerminalView>;

fn render(controller: &mut TerminalController) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let session = controller.session().clone();
    terminal
        .draw(|frame| draw(frame, controller.view_mut(), &session, &Theme::star()))
        .unwrap();
    terminal.backend().buffer().clone()
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect()
}

fn click_at(controller: &mut TerminalController, column: u16, row: u16, now: Instant) {
    let target = controller
        .view()
        .hit_map
        .target_at(column, row)
        .expect("a target under the pointer");
    controller.handle(&UiEvent::click(target), now);
}

fn loaded_controller(t0: Instant) -> TerminalController {
    let view = TerminalView::new(MovieInfo::titled("Jumanji: Welcome to the Jungle"));
    let mut controller = simulated_controller(60.0, view, t0);
    advance(&mut controller, Duration::from_millis(400), t0);
    controller
}

#[test]
fn buffering_shows_before_metadata() {
    let t0 = Instant::now();
    let view = TerminalView::new(MovieInfo::titled("Jumanji"));
    let mut controller = simulated_controller(60.0, view, t0);
    pump(&mut controller, t0);

    let buffer = render(&mut controller);
    let text: String = (0..24).map(|y| row_text(&buffer, y)).collect();
    assert!(text.contains("Buffering..."));
}

#[test]
fn playing_movie_updates_progress_and_controls_rows() {
    let t0 = Instant::now();
    let mut controller = loaded_controller(t0);

    render(&mut controller);
    click_at(&mut controller, 40, 11, t0);
    pump(&mut controller, t0);
    advance(&mut controller, Duration::from_secs(5), t0);

    let buffer = render(&mut controller);
    let progress = row_text(&buffer, 21);
    assert!(progress.contains("00:05"));
    assert!(progress.contains("01:00"));
    assert!(row_text(&buffer, 22).contains("[Pause]"));
    assert!(!row_text(&buffer, 11).contains("Play ]"));
}

#[test]
fn control_row_clicks_reach_the_controller() {
    let t0 = Instant::now();
    let mut controller = loaded_controller(t0);

    render(&mut controller);
    assert_eq!(
        controller.view().hit_map.target_at(6, 22),
        Some(Target::PlayPauseButton)
    );
    click_at(&mut controller, 6, 22, t0);
    pump(&mut controller, t0);
    assert!(controller.session().is_playing);

    // "[Pause]" is one cell wider than "[Play]", shifting the speed button
    render(&mut controller);
    assert_eq!(
        controller.view().hit_map.target_at(42, 22),
        Some(Target::SpeedButton)
    );
    click_at(&mut controller, 42, 22, t0);
    let buffer = render(&mut controller);
    assert!(row_text(&buffer, 22).contains("[1.25x]"));
}

#[test]
fn fullscreen_drops_the_header() {
    let t0 = Instant::now();
    let mut controller = loaded_controller(t0);

    let buffer = render(&mut controller);
    assert!(row_text(&buffer, 0).contains("Jumanji"));

    click_at(&mut controller, 57, 22, t0);
    assert!(controller.session().is_fullscreen);

    let buffer = render(&mut controller);
    assert!(!row_text(&buffer, 0).contains("Jumanji"));
    assert!(row_text(&buffer, 22).contains("[Window]"));
}

#[test]
fn settings_panel_captures_clicks() {
    let t0 = Instant::now();
    let mut controller = loaded_controller(t0);

    render(&mut controller);
    click_at(&mut controller, 46, 22, t0);
    assert!(controller.session().settings_open);

    render(&mut controller);
    // Backdrop click outside the panel closes it
    click_at(&mut controller, 0, 0, t0);
    assert!(!controller.session().settings_open);
}
