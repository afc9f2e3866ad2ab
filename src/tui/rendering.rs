use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthChar;

use super::layout::{AppLayout, ShellLayout};
use super::timestamps::format_timestamp;
use crate::models::ExperienceCategory;
use crate::shell::{FetchStatus, LineKind, ShellSession, Transcript};

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const SURFACE: Color = Color::Rgb(24, 24, 27);
const PROMPT_GREEN: Color = Color::Rgb(74, 222, 128);
const OUTPUT_GRAY: Color = Color::Rgb(209, 213, 219);
const ERROR_RED: Color = Color::Rgb(248, 113, 113);

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, session: &ShellSession) {
    let layout = AppLayout::new(frame.area());

    render_backdrop(frame, layout.backdrop_area, session);
    if session.is_open() {
        render_shell(frame, layout.overlay_area, session);
    }
    render_status_bar(frame, layout.status_area, session);
}

fn render_backdrop(frame: &mut Frame, area: Rect, session: &ShellSession) {
    let hint = if session.is_open() {
        "Esc: close terminal"
    } else {
        "Press ` (or Enter) to open the terminal, q to quit"
    };
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Portfolio",
            Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Projects · Experience · About", Style::default().fg(MUTED))),
        Line::from(""),
    ];

    // Experience sections of the page, one per category
    let cache = session.cache();
    for category in ExperienceCategory::ALL {
        let count = cache.experiences().filter(|e| e.category == category).count();
        lines.push(Line::from(Span::styled(
            format!("{} ({})", category.label(), count),
            Style::default().fg(OUTPUT_GRAY),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(hint, Style::default().fg(MUTED))));

    let paragraph = Paragraph::new(Text::from(lines)).alignment(Alignment::Center).block(
        Block::default().borders(Borders::ALL).border_style(Style::default().fg(MUTED)),
    );

    frame.render_widget(paragraph, area);
}

fn render_shell(frame: &mut Frame, area: Rect, session: &ShellSession) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PROMPT_GREEN))
        .title(" portfolio-terminal ")
        .style(Style::default().bg(SURFACE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let shell_layout = ShellLayout::new(inner);
    let area = shell_layout.transcript_area;

    let lines = transcript_lines(session.transcript(), area.width as usize);
    let offset = scroll_offset(lines.len(), area.height);
    let transcript = Paragraph::new(Text::from(lines)).scroll((offset, 0));
    frame.render_widget(transcript, area);

    let input = Line::from(vec![
        Span::styled("$ ", Style::default().fg(PROMPT_GREEN)),
        Span::styled(session.input().to_string(), Style::default().fg(OUTPUT_GRAY)),
        Span::styled("|", Style::default().fg(PROMPT_GREEN).add_modifier(Modifier::SLOW_BLINK)),
    ]);
    frame.render_widget(Paragraph::new(input), shell_layout.input_area);
}

/// Project the transcript into screen rows, pre-wrapped to `width` so the row count is
/// exact and the newest line can always be scrolled into view. Entries are separated by a
/// blank row.
pub(crate) fn transcript_lines(transcript: &Transcript, width: usize) -> Vec<Line<'static>> {
    let mut rows = Vec::new();

    for (idx, line) in transcript.lines().iter().enumerate() {
        if idx > 0 {
            rows.push(Line::from(""));
        }
        let style = match line.kind {
            LineKind::Input => Style::default().fg(PROMPT_GREEN),
            LineKind::Output => Style::default().fg(OUTPUT_GRAY),
            LineKind::Error => Style::default().fg(ERROR_RED),
        };
        for text_line in line.display_text().lines() {
            for chunk in wrap_columns(text_line, width) {
                rows.push(Line::styled(chunk, style));
            }
        }
    }

    rows
}

/// Hard-wrap on display columns, so wide glyphs such as emoji count as two.
/// An empty line still yields one row.
fn wrap_columns(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.is_empty() {
        return vec![text.to_string()];
    }

    let mut rows = vec![];
    let mut row = String::new();
    let mut row_width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if row_width + ch_width > width && !row.is_empty() {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }
        row.push(ch);
        row_width += ch_width;
    }
    rows.push(row);
    rows
}

/// First row to show so the last `viewport_rows` rows are visible
pub(crate) fn scroll_offset(total_rows: usize, viewport_rows: u16) -> u16 {
    let hidden = total_rows.saturating_sub(viewport_rows as usize);
    u16::try_from(hidden).unwrap_or(u16::MAX)
}

fn render_status_bar(frame: &mut Frame, area: Rect, session: &ShellSession) {
    let cache = session.cache();
    let mut parts = vec![];

    parts.push(if session.is_open() { "[SHELL]" } else { "[PAGE]" }.to_string());

    match cache.status() {
        FetchStatus::Idle => parts.push("records not loaded".to_string()),
        FetchStatus::Loading => parts.push("loading records…".to_string()),
        FetchStatus::Ready { at } => parts.push(format!(
            "{} projects, {} experience (refreshed {})",
            cache.project_count(),
            cache.experience_count(),
            format_timestamp(&at)
        )),
        FetchStatus::Failed { at } => parts.push(format!(
            "{} projects, {} experience (refresh failed {})",
            cache.project_count(),
            cache.experience_count(),
            format_timestamp(&at)
        )),
    }

    if session.is_open() {
        parts.push("Enter: run".to_string());
        parts.push("↑/↓: history".to_string());
        parts.push("Esc: close".to_string());
    } else {
        parts.push("`: open terminal".to_string());
    }
    parts.push("Ctrl+C: quit".to_string());

    let paragraph = Paragraph::new(format!(" {} ", parts.join(" | ")))
        .style(Style::default().fg(BRIGHT).bg(SURFACE))
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
