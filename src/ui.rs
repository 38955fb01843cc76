use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::gate::{CREDENTIAL_VAR, MissingCredential};
use crate::notice::{Notice, NoticeKind};
use crate::theme::{colors, glyphs, styles};

pub const TITLE: &str = "FinanceScope";
pub const SUBTITLE: &str = "Intelligent Financial Document Analysis";

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(colors::BG_DARK));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(6), // Banner
            Constraint::Min(1),    // Notices
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_banner(frame, chunks[0]);
    draw_notices(frame, app, chunks[1]);
    draw_status_bar(frame, chunks[2]);
}

fn draw_banner(frame: &mut Frame, area: Rect) {
    let inner_width = TITLE.width().max(SUBTITLE.width()) + 4;
    let horizontal = "─".repeat(inner_width);
    let border_style = Style::default().fg(colors::PRIMARY_DIM);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  ╭{horizontal}╮"), border_style)),
        boxed_line(TITLE, inner_width, styles::title()),
        boxed_line(SUBTITLE, inner_width, styles::subtitle()),
        Line::from(Span::styled(format!("  ╰{horizontal}╯"), border_style)),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), area);
}

fn boxed_line(text: &str, inner_width: usize, style: Style) -> Line<'static> {
    let border_style = Style::default().fg(colors::PRIMARY_DIM);
    let padding = inner_width.saturating_sub(text.width() + 2);

    Line::from(vec![
        Span::styled("  │", border_style),
        Span::styled(format!("  {text}{}", " ".repeat(padding)), style),
        Span::styled("│", border_style),
    ])
}

fn draw_notices(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::TEXT_MUTED))
        .padding(Padding::horizontal(1));

    let mut lines: Vec<Line> = vec![Line::from("")];
    for notice in app.notices() {
        lines.push(notice_line(notice));
        lines.push(Line::from(""));
    }

    let notices = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(notices, area);
}

fn notice_line(notice: &Notice) -> Line<'static> {
    let (glyph, style) = match notice.kind() {
        NoticeKind::Error => (glyphs::ERROR, styles::error()),
        NoticeKind::Success => (glyphs::SUCCESS, styles::success()),
        NoticeKind::Info => (glyphs::INFO, styles::info()),
    };

    Line::from(vec![
        Span::styled(format!(" {glyph} "), style),
        Span::styled(notice.content().to_string(), style),
    ])
}

fn draw_status_bar(frame: &mut Frame, area: Rect) {
    // Holding an App means the gate passed, so the credential is
    // always present on this screen.
    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!("{} {CREDENTIAL_VAR} configured", glyphs::STATUS_READY),
            Style::default().fg(colors::GREEN),
        ),
    ]));

    let hints = Line::from(vec![
        Span::styled("q", styles::key_highlight()),
        Span::styled(" quit ", styles::key_hint()),
    ]);

    let hints_width = hints.width() as u16 + 1;
    let status_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width.saturating_sub(hints_width),
        height: area.height,
    };
    let hints_area = Rect {
        x: area.x + area.width.saturating_sub(hints_width),
        y: area.y,
        width: hints_width,
        height: area.height,
    };

    frame.render_widget(status, status_area);
    frame.render_widget(
        Paragraph::new(hints).alignment(Alignment::Right),
        hints_area,
    );
}

/// Plain-text surface for the HALTED path.
///
/// Written to stderr before exit. The alternate screen is never
/// entered on this path, so the message stays visible in the terminal
/// scrollback after the process stops.
pub fn halt_report(err: &MissingCredential) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(SUBTITLE);
    out.push_str("\n\n");
    out.push_str(glyphs::ERROR);
    out.push(' ');
    out.push_str(&err.to_string());
    out.push('\n');
    out
}
