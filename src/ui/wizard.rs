//! The active wizard page.
//!
//! ```text
//! ━━━━━━━━━━━━━━━━━━━━━━────────────────────────────── progress
//! RECRUITMENT DRIVE                              Sect 1/2
//! Join the robotics club
//! ╭ BASICS ───────────────────────────────────────────────╮
//! │ Synthesizing next data requirements...                │
//! ╰───────────────────────────────────────────────────────╯
//! ⚠ System Fault: Requirement Not Met: Name
//! ╭───────────────────────────────────────────────────────╮
//! │▸ NAME ●                                               │
//! │    ❯ █Awaiting Input...                               │
//! ╰───────────────────────────────────────────────────────╯
//! ← RETREAT [PgUp]                   ADVANCE PHASE → [PgDn]
//! ```

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, LineGauge, Paragraph, Wrap},
    Frame,
};

use super::fields::{field_lines, FieldView};
use super::helpers::{scroll_to_show, truncate_with_ellipsis};
use super::theme::{style_for, ThemeStyle, COLOR_ERROR};
use crate::app::App;
use crate::state::FormSession;

pub const SECTION_FALLBACK: &str = "Synthesizing next data requirements...";
pub const ERROR_PREFIX: &str = "System Fault: ";
pub const RETREAT_LABEL: &str = "← RETREAT";
pub const ADVANCE_LABEL: &str = "ADVANCE PHASE →";
pub const FINALIZE_LABEL: &str = "FINALIZE UPLINK";

pub fn render_wizard(frame: &mut Frame, area: Rect, app: &mut App) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    let style = style_for(session.definition().theme);
    let description = &session.definition().description;

    let description_rows = if description.is_empty() { 0 } else { 2 };
    let error_rows = if session.error().is_some() { 2 } else { 0 };

    let [progress_area, title_area, description_area, section_area, error_area, fields_area, nav_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(description_rows),
            Constraint::Length(4),
            Constraint::Length(error_rows),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

    render_progress(frame, progress_area, session, &style);
    render_title(frame, title_area, session, &style);
    if description_rows > 0 {
        frame.render_widget(
            Paragraph::new(description.as_str())
                .style(style.dim_style())
                .wrap(Wrap { trim: true }),
            description_area,
        );
    }
    render_section(frame, section_area, session, &style);
    if let Some(error) = session.error() {
        render_error_banner(frame, error_area, error);
    }

    let scroll = render_fields(frame, fields_area, app, &style);
    app.scroll = scroll;

    render_nav(frame, nav_area, app, &style);
}

fn render_progress(frame: &mut Frame, area: Rect, session: &FormSession, style: &ThemeStyle) {
    let gauge = LineGauge::default()
        .ratio(session.progress().clamp(0.0, 1.0))
        .label("")
        .filled_style(Style::default().fg(style.progress))
        .unfilled_style(Style::default().fg(style.border));
    frame.render_widget(gauge, area);
}

fn render_title(frame: &mut Frame, area: Rect, session: &FormSession, style: &ThemeStyle) {
    let counter = format!("Sect {}/{}", session.cursor() + 1, session.page_count());
    let title_width = (area.width as usize).saturating_sub(counter.len() + 2);
    let title = truncate_with_ellipsis(&session.definition().title.to_uppercase(), title_width);

    frame.render_widget(
        Paragraph::new(Line::styled(title, style.heading_style())),
        area,
    );
    frame.render_widget(
        Paragraph::new(Line::styled(
            counter,
            style.dim_style().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right),
        area,
    );
}

fn render_section(frame: &mut Frame, area: Rect, session: &FormSession, style: &ThemeStyle) {
    let section = session.current_section();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style.border_style())
        .title(Span::styled(
            format!(" {} ", section.title.to_uppercase()),
            style.heading_style(),
        ));

    let body = if section.description.is_empty() {
        Paragraph::new(SECTION_FALLBACK).style(style.dim_style().add_modifier(Modifier::ITALIC))
    } else {
        Paragraph::new(section.description.as_str()).style(style.text_style())
    };
    frame.render_widget(body.wrap(Wrap { trim: true }).block(block), area);
}

fn render_error_banner(frame: &mut Frame, area: Rect, error: &str) {
    let line = Line::from(vec![
        Span::styled("⚠ ", Style::default().fg(COLOR_ERROR)),
        Span::styled(
            format!("{}{}", ERROR_PREFIX, error),
            Style::default()
                .fg(COLOR_ERROR)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
}

/// Draw the current page's fields and return the scroll offset used, which
/// keeps the focused field in view.
fn render_fields(frame: &mut Frame, area: Rect, app: &App, style: &ThemeStyle) -> u16 {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(session) = app.session.as_ref() else {
        return 0;
    };
    let fields = session.current_fields();
    if fields.is_empty() {
        frame.render_widget(
            Paragraph::new("  (no fields on this page)").style(style.dim_style()),
            inner,
        );
        return 0;
    }

    let mut lines = Vec::new();
    let mut focus_span = (0u16, 0u16);
    for (index, field) in fields.iter().enumerate() {
        let focused = index == app.focus.field;
        let view = FieldView {
            field,
            answer: session.answer(&field.label),
            focused,
            option_cursor: app.focus.option,
            width: inner.width as usize,
        };
        let start = lines.len() as u16;
        lines.extend(field_lines(&view, style));
        if focused {
            focus_span = (start, lines.len() as u16);
        }
    }

    let scroll = scroll_to_show(app.scroll, focus_span.0, focus_span.1, inner.height);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
    scroll
}

fn render_nav(frame: &mut Frame, area: Rect, app: &App, style: &ThemeStyle) {
    let Some(session) = app.session.as_ref() else {
        return;
    };

    if !session.is_first_page() {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(RETREAT_LABEL, style.accent_style()),
                Span::styled(" [PgUp]", style.dim_style()),
            ])),
            area,
        );
    }

    let hints = "Tab field · ←→ option · Space pick · Esc quit";
    frame.render_widget(
        Paragraph::new(Span::styled(hints, style.dim_style())).alignment(Alignment::Center),
        area,
    );

    let forward = if app.submitting {
        Line::from(Span::styled(
            "TRANSMITTING...",
            style.accent_style().add_modifier(Modifier::SLOW_BLINK),
        ))
    } else if session.is_last_page() {
        Line::from(vec![
            Span::styled(FINALIZE_LABEL, style.selected_style()),
            Span::styled(" [Enter]", style.dim_style()),
        ])
    } else {
        Line::from(vec![
            Span::styled(ADVANCE_LABEL, style.accent_style()),
            Span::styled(" [PgDn]", style.dim_style()),
        ])
    };
    frame.render_widget(Paragraph::new(forward).alignment(Alignment::Right), area);
}
