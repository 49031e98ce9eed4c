//! Frame layout for the terminal player.
//!
//! Draws the movie header, video area, progress row, control row and
//! footer, plus the settings panel and help overlay when open. Every
//! clickable element is recorded in the view's `HitMap` as it is drawn.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::movie::MovieInfo;
use crate::player::events::Target;
use crate::player::render::help::render_help;
use crate::player::render::progress::BarGeometry;
use crate::player::render::view::{HitMap, TerminalView, ViewModel};
use crate::player::state::{PlayIcon, PlaybackSession, Subtitles};
use crate::theme::Theme;

/// Rows used by the movie header outside fullscreen.
pub const HEADER_HEIGHT: u16 = 3;
/// Columns reserved on each side of the progress bar for time labels.
pub const TIME_LABEL_WIDTH: u16 = 7;
/// Cells in the volume slider.
pub const VOLUME_SLIDER_WIDTH: u16 = 10;

const SETTINGS_WIDTH: u16 = 36;
const SETTINGS_HEIGHT: u16 = 9;

const PLAY_LABEL: &str = "[ > Play ]";
const REPLAY_LABEL: &str = "[ Replay ]";
const CLOSE_LABEL: &str = "[Close]";

/// Footer keybinding hints.
pub const FOOTER_KEYS: &[(&str, &str)] = &[
    ("space", "play"),
    ("←/→", "skip"),
    ("↑/↓", "volume"),
    ("m", "mute"),
    ("f", "full"),
    ("s", "settings"),
    ("?", "help"),
    ("q", "quit"),
];

/// Screen areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerLayout {
    pub header: Rect,
    pub video: Rect,
    pub progress: Rect,
    pub controls: Rect,
    pub footer: Rect,
}

/// Split the frame. Fullscreen drops the header and gives its rows to the video.
pub fn player_layout(area: Rect, fullscreen: bool) -> PlayerLayout {
    let header = if fullscreen { 0 } else { HEADER_HEIGHT };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    PlayerLayout {
        header: chunks[0],
        video: chunks[1],
        progress: chunks[2],
        controls: chunks[3],
        footer: chunks[4],
    }
}

/// Box of the given size centered in `area`, shrunk to fit.
pub fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the whole player and rebuild the hit map.
pub fn draw(frame: &mut Frame, view: &mut TerminalView, session: &PlaybackSession, theme: &Theme) {
    let area = frame.area();
    let TerminalView {
        model,
        movie,
        steps,
        show_help,
        hit_map,
    } = view;
    hit_map.clear();

    let parts = player_layout(area, model.fullscreen);
    if !model.fullscreen {
        render_header(frame, parts.header, movie, theme);
    }
    render_video(frame, parts.video, model, session, movie, theme, hit_map);

    // Progress and control rows hide together
    if model.controls_visible {
        render_progress(frame, parts.progress, model, theme, hit_map);
        render_controls(frame, parts.controls, model, theme, hit_map);
    }
    render_footer(frame, parts.footer, theme);

    if model.settings_visible {
        render_settings(frame, area, session, theme, hit_map);
    }
    if *show_help {
        render_help(frame, steps, theme);
    }
}

fn render_header(frame: &mut Frame, area: Rect, movie: &MovieInfo, theme: &Theme) {
    let lines = vec![
        Line::styled(
            movie.title.clone(),
            theme.text_style().add_modifier(Modifier::BOLD),
        ),
        Line::styled(movie.summary(), theme.accent_style()),
        Line::styled(
            movie.description.clone().unwrap_or_default(),
            theme.text_secondary_style(),
        ),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_video(
    frame: &mut Frame,
    area: Rect,
    model: &ViewModel,
    session: &PlaybackSession,
    movie: &MovieInfo,
    theme: &Theme,
    hits: &mut HitMap,
) {
    hits.push(area, Target::Media);

    let mut block = Block::default().borders(Borders::ALL);
    block = if model.playing_mode {
        block
            .border_style(theme.accent_style())
            .style(Style::default().bg(theme.playing_background))
    } else {
        block
            .border_style(theme.text_secondary_style())
            .style(Style::default().bg(theme.background))
    };
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    let mut button: Option<(u16, &str)> = None;

    if model.buffering {
        lines.push(Line::styled("Buffering...", theme.text_secondary_style()));
        lines.push(Line::default());
    }
    if model.play_overlay {
        let label = if model.replay_cue {
            REPLAY_LABEL
        } else {
            PLAY_LABEL
        };
        button = Some((lines.len() as u16, label));
        lines.push(Line::styled(label, theme.accent_bold_style()));
    } else {
        lines.push(Line::styled(
            movie.title.clone(),
            theme.text_style().add_modifier(Modifier::BOLD),
        ));
    }
    if session.subtitles != Subtitles::Off {
        lines.push(Line::default());
        lines.push(Line::styled(
            format!("[{} subtitles]", session.subtitles.label()),
            theme.text_secondary_style(),
        ));
    }

    let height = (lines.len() as u16).min(inner.height);
    let body = Rect {
        x: inner.x,
        y: inner.y + (inner.height - height) / 2,
        width: inner.width,
        height,
    };

    if let Some((row, label)) = button {
        let width = (Span::raw(label).width() as u16).min(inner.width);
        if row < body.height {
            let x = inner.x + (inner.width - width) / 2;
            hits.push(Rect::new(x, body.y + row, width, 1), Target::BigPlayButton);
        }
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
}

fn render_progress(
    frame: &mut Frame,
    area: Rect,
    model: &ViewModel,
    theme: &Theme,
    hits: &mut HitMap,
) {
    let bar = BarGeometry {
        left: area.x + TIME_LABEL_WIDTH.min(area.width),
        row: area.y,
        width: area.width.saturating_sub(TIME_LABEL_WIDTH * 2),
    };
    let filled = bar.filled_cells(model.progress);

    let spans = vec![
        Span::styled(format!("{:>6} ", model.elapsed_text), theme.text_style()),
        Span::styled("━".repeat(filled as usize), theme.accent_style()),
        Span::styled(
            "─".repeat((bar.width - filled) as usize),
            theme.text_secondary_style(),
        ),
        Span::styled(
            format!(" {:<6}", model.duration_text),
            theme.text_secondary_style(),
        ),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    if bar.width > 0 {
        hits.set_progress(bar);
        hits.push(
            Rect::new(bar.left, bar.row, bar.width, 1),
            Target::ProgressBar,
        );
    }
}

/// One control: its spans and the target it answers to.
type ControlItem = (Vec<Span<'static>>, Option<Target>);

fn control_items(model: &ViewModel, theme: &Theme) -> Vec<ControlItem> {
    let button = |text: String| vec![Span::styled(text, theme.text_style())];

    let play = match model.play_icon {
        PlayIcon::Play => "[Play]",
        PlayIcon::Pause => "[Pause]",
    };
    let fullscreen = if model.fullscreen { "[Window]" } else { "[Full]" };

    let level = model.volume_slider.clamp(0.0, 100.0);
    let slider = BarGeometry {
        left: 0,
        row: 0,
        width: VOLUME_SLIDER_WIDTH,
    };
    let filled = slider.filled_cells(level / 100.0);

    vec![
        (button("[<<]".to_string()), Some(Target::RewindButton)),
        (
            vec![Span::styled(play, theme.accent_bold_style())],
            Some(Target::PlayPauseButton),
        ),
        (button("[>>]".to_string()), Some(Target::ForwardButton)),
        (
            button(format!("[{}]", model.volume_icon.label())),
            Some(Target::VolumeButton),
        ),
        (
            vec![
                Span::styled("━".repeat(filled as usize), theme.accent_style()),
                Span::styled(
                    "─".repeat((VOLUME_SLIDER_WIDTH - filled) as usize),
                    theme.text_secondary_style(),
                ),
            ],
            Some(Target::VolumeSlider),
        ),
        (
            vec![Span::styled(
                format!("{:>3}%", level.round() as u8),
                theme.text_secondary_style(),
            )],
            None,
        ),
        (
            button(format!("[{}]", model.speed_label)),
            Some(Target::SpeedButton),
        ),
        (button("[Settings]".to_string()), Some(Target::SettingsButton)),
        (button(fullscreen.to_string()), Some(Target::FullscreenButton)),
    ]
}

fn render_controls(
    frame: &mut Frame,
    area: Rect,
    model: &ViewModel,
    theme: &Theme,
    hits: &mut HitMap,
) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    let mut x = area.x + 1;

    for (item, target) in control_items(model, theme) {
        let width: u16 = item.iter().map(|s| s.width() as u16).sum();
        if x >= area.right() {
            break;
        }
        let visible = width.min(area.right() - x);
        if let Some(target) = target {
            hits.push(Rect::new(x, area.y, visible, 1), target);
            if target == Target::VolumeSlider {
                hits.set_volume_slider(BarGeometry {
                    left: x,
                    row: area.y,
                    width: visible,
                });
            }
        }
        spans.extend(item);
        spans.push(Span::raw(" "));
        x = x.saturating_add(width + 1);
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", theme.text_secondary_style()));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_style()));
        spans.push(Span::styled(
            format!(": {}", desc),
            theme.text_secondary_style(),
        ));
    }
    spans
}

fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme) {
    let footer = Paragraph::new(Line::from(build_footer_spans(FOOTER_KEYS, theme)))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn render_settings(
    frame: &mut Frame,
    area: Rect,
    session: &PlaybackSession,
    theme: &Theme,
    hits: &mut HitMap,
) {
    hits.push(area, Target::SettingsBackdrop);
    let panel = centered_box(SETTINGS_WIDTH, SETTINGS_HEIGHT, area);
    hits.push_blocker(panel);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent_style())
        .title(" Settings ");
    let inner = block.inner(panel);

    let rows = [
        ("Quality", session.quality.label().to_string(), Target::QualitySelect),
        ("Speed", session.speed.label(), Target::SpeedSelect),
        ("Subtitles", session.subtitles.label().to_string(), Target::SubtitleSelect),
    ];

    let mut lines = vec![Line::default()];
    for (i, (name, value, target)) in rows.into_iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {} {:<10}", i + 1, name), theme.text_style()),
            Span::styled(format!("< {} >", value), theme.accent_bold_style()),
        ]));
        let y = inner.y + 1 + i as u16;
        if y < inner.bottom() {
            hits.push(Rect::new(inner.x, y, inner.width, 1), target);
        }
    }
    lines.push(Line::default());
    lines.push(Line::styled(format!("  {}", CLOSE_LABEL), theme.accent_style()));
    lines.push(Line::styled(
        "  click or 1/2/3 to cycle",
        theme.text_secondary_style(),
    ));

    let close_y = inner.y + 5;
    if close_y < inner.bottom() {
        let width = (CLOSE_LABEL.len() as u16).min(inner.width.saturating_sub(2));
        hits.push(
            Rect::new(inner.x + 2, close_y, width, 1),
            Target::SettingsClose,
        );
    }

    frame.render_widget(Clear, panel);
    frame.render_widget(Paragraph::new(lines).block(block), panel);
}
