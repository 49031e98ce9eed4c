//! Help overlay rendering for the player.
//!
//! Displays a centered help box with all available keyboard shortcuts.

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::player::render::view::ShortcutSteps;
use crate::theme::Theme;

/// Help text lines for the help overlay, with the configured steps filled in.
pub fn help_lines(steps: &ShortcutSteps) -> Vec<String> {
    let mut lines: Vec<String> = vec![
        "".into(),
        "  Playback".into(),
        "    Space        Play / Pause".into(),
        format!("    <- / ->      Back / forward {}s", steps.skip_seconds),
        "    Click bar    Seek (drag to scrub)".into(),
        "    c            Cycle speed".into(),
        "".into(),
        "  Audio".into(),
        format!("    Up / Down    Volume +/- {}", steps.volume_step),
        "    m            Mute / unmute".into(),
        "".into(),
    ];
    lines.extend(HELP_TAIL.iter().map(|line| line.to_string()));
    lines
}

const HELP_TAIL: &[&str] = &[
    "  View",
    "    f            Toggle fullscreen",
    "    s            Settings panel",
    "    1 / 2 / 3    Quality / speed / subtitles",
    "                 (while settings are open)",
    "",
    "  General",
    "    ?            Show this help",
    "    q / Esc      Quit player",
    "",
    "       Press any key to close",
    "",
];

/// Width of the help box including borders.
pub const HELP_BOX_WIDTH: u16 = 48;

/// Center a help box of `line_count` lines in `area`, shrinking it to fit small terminals.
pub fn help_area(area: Rect, line_count: usize) -> Rect {
    let width = HELP_BOX_WIDTH.min(area.width);
    let height = (line_count as u16).saturating_add(2).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render the help overlay on top of the frame.
pub fn render_help(frame: &mut Frame, steps: &ShortcutSteps, theme: &Theme) {
    let text = help_lines(steps);
    let area = help_area(frame.area(), text.len());
    let lines: Vec<Line> = text.into_iter().map(Line::from).collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Star Player Help ")
        .border_style(theme.accent_style());

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).style(theme.text_style()).block(block),
        area,
    );
}
