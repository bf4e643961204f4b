//! Full-screen views outside the active wizard: loading, not found, closed,
//! and submitted.

use chrono::{DateTime, Local, Utc};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::helpers::centered_rect;
use super::theme::{style_for, ThemeStyle, COLOR_ERROR};
use crate::models::{ClosedReason, FormDefinition, Theme};

pub const LOADING_TEXT: &str = "Decrypting Stream...";
pub const NOT_FOUND_TITLE: &str = "Signal Lost";
pub const SUCCESS_TITLE: &str = "Nexus Sync Success";
pub const DEADLINE_TITLE: &str = "Deadline Reached";
pub const INACTIVE_TITLE: &str = "Sector Closed";
pub const END_LINK_LABEL: &str = "End Link";

const CARD_WIDTH: u16 = 60;

fn card(style: &ThemeStyle, accent: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .style(style.text_style())
}

fn render_card(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>, block: Block<'static>) {
    let width = CARD_WIDTH.min(area.width);

    let mut padded = vec![Line::default()];
    padded.extend(lines);
    let paragraph = Paragraph::new(padded)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    // Wrapped rows inside the borders, the borders, and one row of padding.
    let rows = paragraph.line_count(width.saturating_sub(2));
    let height = u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(3);
    let rect = centered_rect(width, height, area);
    frame.render_widget(Clear, rect);
    frame.render_widget(paragraph.block(block), rect);
}

pub fn render_loading(frame: &mut Frame, area: Rect) {
    let style = style_for(Theme::default());
    let rect = centered_rect(LOADING_TEXT.len() as u16 + 4, 1, area);
    frame.render_widget(
        Paragraph::new(Span::styled(
            LOADING_TEXT,
            style
                .heading_style()
                .add_modifier(Modifier::SLOW_BLINK),
        ))
        .alignment(Alignment::Center),
        rect,
    );
}

pub fn render_not_found(frame: &mut Frame, area: Rect, form_id: &str, detail: Option<&str>) {
    let style = style_for(Theme::default());
    let mut lines = vec![
        Line::styled("404", Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD)),
        Line::styled(NOT_FOUND_TITLE.to_uppercase(), style.heading_style()),
        Line::default(),
        Line::styled(
            format!("Form '{}' could not be retrieved.", form_id),
            style.text_style(),
        ),
    ];
    if let Some(detail) = detail {
        lines.push(Line::styled(detail.to_string(), style.dim_style()));
    }
    lines.push(Line::default());
    lines.push(Line::styled("q exit", style.dim_style()));

    render_card(frame, area, lines, card(&style, COLOR_ERROR));
}

/// Closing time as shown to the user, in local time.
pub fn format_closing_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

pub fn render_closed(frame: &mut Frame, area: Rect, form: &FormDefinition, reason: ClosedReason) {
    let style = style_for(form.theme);
    let (title, body) = match reason {
        ClosedReason::Deadline(at) => (
            DEADLINE_TITLE,
            format!(
                "This signal acquisition channel automatically deactivated on {}.",
                format_closing_time(at)
            ),
        ),
        ClosedReason::Inactive => (
            INACTIVE_TITLE,
            "This acquisition portal is currently offline. No further submissions are being accepted."
                .to_string(),
        ),
    };

    let lines = vec![
        Line::styled("!", Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD)),
        Line::styled(title.to_uppercase(), style.heading_style()),
        Line::default(),
        Line::styled(body, style.text_style()),
        Line::default(),
        Line::styled("q exit", style.dim_style()),
    ];
    render_card(frame, area, lines, card(&style, style.border));
}

pub fn render_submitted(frame: &mut Frame, area: Rect, form: &FormDefinition) {
    let style = style_for(form.theme);

    let mut lines = vec![
        Line::styled("✓", style.selected_style()),
        Line::styled(SUCCESS_TITLE.to_uppercase(), style.heading_style()),
        Line::default(),
        Line::styled(form.success_message().to_string(), style.text_style()),
        Line::default(),
    ];

    match &form.success_link {
        Some(url) => {
            lines.push(Line::from(vec![
                Span::styled("[ Enter ] ", style.dim_style()),
                Span::styled(form.success_link_label().to_uppercase(), style.selected_style()),
            ]));
            lines.push(Line::styled(url.clone(), style.dim_style()));
            lines.push(Line::styled("q exit", style.dim_style()));
        }
        None => {
            lines.push(Line::from(vec![
                Span::styled("[ Enter ] ", style.dim_style()),
                Span::styled(END_LINK_LABEL, style.selected_style()),
            ]));
        }
    }

    render_card(frame, area, lines, card(&style, style.accent));
}
