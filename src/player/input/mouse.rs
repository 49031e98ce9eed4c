//! Mouse input handling for the terminal player.
//!
//! Resolves crossterm mouse events against the hit map from the last
//! draw and turns them into controller events. Every mouse event also
//! reports pointer movement, which keeps a seek drag following the
//! pointer and counts as activity for the auto-hide timer.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::player::events::{Target, UiEvent};
use crate::player::render::HitMap;
use crate::player::state::PlaybackSession;

/// Translate a mouse event into controller events, in dispatch order.
pub fn translate_mouse(mouse: MouseEvent, hits: &HitMap, session: &PlaybackSession) -> Vec<UiEvent> {
    let fraction = hits
        .progress()
        .and_then(|bar| bar.fraction_at(mouse.column));
    let mut events = vec![UiEvent::pointer_move(fraction)];

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(event) = press_event(mouse, hits, session) {
                events.push(event);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) if !session.is_seeking => {
            // Dragging along the volume slider keeps adjusting it
            if hits.target_at(mouse.column, mouse.row) == Some(Target::VolumeSlider) {
                if let Some(level) = volume_level_at(hits, mouse.column) {
                    events.push(UiEvent::volume_input(level));
                }
            }
        }
        MouseEventKind::Up(MouseButton::Left) => events.push(UiEvent::pointer_up()),
        _ => {}
    }
    events
}

fn press_event(mouse: MouseEvent, hits: &HitMap, session: &PlaybackSession) -> Option<UiEvent> {
    let target = hits.target_at(mouse.column, mouse.row)?;
    let event = match target {
        Target::ProgressBar => {
            let bar = hits.progress()?;
            UiEvent::progress_press(bar.fraction_at(mouse.column)?)
        }
        Target::VolumeSlider => UiEvent::volume_input(volume_level_at(hits, mouse.column)?),
        Target::QualitySelect => UiEvent::select(target, session.quality.next().label()),
        Target::SpeedSelect => UiEvent::select(target, session.speed.next().to_string()),
        Target::SubtitleSelect => UiEvent::select(target, session.subtitles.next().label()),
        other => UiEvent::click(other),
    };
    Some(event)
}

fn volume_level_at(hits: &HitMap, column: u16) -> Option<f64> {
    let slider = hits.volume_slider()?;
    slider.fraction_at(column).map(|fraction| fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::events::{EventDetail, EventKind};
    use crate::player::render::BarGeometry;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn hit_map() -> HitMap {
        let mut map = HitMap::default();
        map.push(Rect::new(0, 0, 80, 20), Target::Media);
        let bar = BarGeometry {
            left: 10,
            row: 21,
            width: 11,
        };
        map.set_progress(bar);
        map.push(Rect::new(10, 21, 11, 1), Target::ProgressBar);
        map.push(Rect::new(1, 22, 6, 1), Target::PlayPauseButton);
        let slider = BarGeometry {
            left: 30,
            row: 22,
            width: 11,
        };
        map.set_volume_slider(slider);
        map.push(Rect::new(30, 22, 11, 1), Target::VolumeSlider);
        map.push(Rect::new(50, 5, 20, 1), Target::SpeedSelect);
        map
    }

    #[test]
    fn press_on_bar_starts_drag_at_fraction() {
        let events = translate_mouse(
            mouse(MouseEventKind::Down(MouseButton::Left), 15, 21),
            &hit_map(),
            &PlaybackSession::default(),
        );
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, EventKind::PointerMove);
        assert_eq!(events[1], UiEvent::progress_press(0.5));
    }

    #[test]
    fn move_reports_fraction_relative_to_bar() {
        let events = translate_mouse(
            mouse(MouseEventKind::Drag(MouseButton::Left), 40, 3),
            &hit_map(),
            &PlaybackSession::default(),
        );
        assert_eq!(events, vec![UiEvent::pointer_move(Some(1.0))]);
    }

    #[test]
    fn release_ends_drag() {
        let events = translate_mouse(
            mouse(MouseEventKind::Up(MouseButton::Left), 0, 0),
            &hit_map(),
            &PlaybackSession::default(),
        );
        assert_eq!(events.last(), Some(&UiEvent::pointer_up()));
    }

    #[test]
    fn button_press_becomes_click() {
        let events = translate_mouse(
            mouse(MouseEventKind::Down(MouseButton::Left), 2, 22),
            &hit_map(),
            &PlaybackSession::default(),
        );
        assert_eq!(events[1], UiEvent::click(Target::PlayPauseButton));
    }

    #[test]
    fn slider_press_sets_level() {
        let events = translate_mouse(
            mouse(MouseEventKind::Down(MouseButton::Left), 35, 22),
            &hit_map(),
            &PlaybackSession::default(),
        );
        assert_eq!(events[1].detail, EventDetail::Level(50.0));
    }

    #[test]
    fn slider_drag_keeps_adjusting() {
        let events = translate_mouse(
            mouse(MouseEventKind::Drag(MouseButton::Left), 30, 22),
            &hit_map(),
            &PlaybackSession::default(),
        );
        assert_eq!(events[1], UiEvent::volume_input(0.0));
    }

    #[test]
    fn selector_press_picks_next_option() {
        let events = translate_mouse(
            mouse(MouseEventKind::Down(MouseButton::Left), 55, 5),
            &hit_map(),
            &PlaybackSession::default(),
        );
        assert_eq!(events[1], UiEvent::select(Target::SpeedSelect, "1.25"));
    }

    #[test]
    fn press_on_nothing_only_moves() {
        let events = translate_mouse(
            mouse(MouseEventKind::Down(MouseButton::Left), 79, 23),
            &HitMap::default(),
            &PlaybackSession::default(),
        );
        assert_eq!(events, vec![UiEvent::pointer_move(None)]);
    }
}
