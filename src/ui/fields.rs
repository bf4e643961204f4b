//! Per-kind field rendering.
//!
//! Each field becomes a block of lines: the label row, the control rows, and
//! a blank spacer. The wizard stacks these blocks and scrolls over them.
//!
//! ```text
//! ▸ SKILLS ●
//!     [x] CAD
//!   › [ ] Code
//! ```

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::helpers::truncate_with_ellipsis;
use super::theme::{ThemeStyle, COLOR_REQUIRED};
use crate::models::{AnswerValue, Field, FieldKind};

pub const SELECT_PLACEHOLDER: &str = "AWAITING SELECTION";
pub const NO_OPTIONS_NOTICE: &str = "No options configured for this selector.";
const TEXT_PLACEHOLDER: &str = "Awaiting Input...";
const LONG_TEXT_PLACEHOLDER: &str = "Expansion required...";
const NUMBER_PLACEHOLDER: &str = "0";
const DATE_PLACEHOLDER: &str = "YYYY-MM-DD";
const CURSOR: &str = "█";
const LONG_TEXT_MIN_ROWS: usize = 3;
/// (selected, unselected)
const RADIO_MARKERS: (&str, &str) = ("(●)", "( )");
const CHECK_MARKERS: (&str, &str) = ("[x]", "[ ]");

/// Inputs for rendering one field.
#[derive(Debug, Clone, Copy)]
pub struct FieldView<'a> {
    pub field: &'a Field,
    pub answer: Option<&'a AnswerValue>,
    pub focused: bool,
    /// Highlighted option when focused
    pub option_cursor: usize,
    pub width: usize,
}

/// All lines for one field, including the trailing spacer.
pub fn field_lines(view: &FieldView<'_>, style: &ThemeStyle) -> Vec<Line<'static>> {
    let mut lines = vec![label_line(view, style)];

    match &view.field.kind {
        FieldKind::ShortText => lines.push(text_line(view, style, TEXT_PLACEHOLDER)),
        FieldKind::Number => lines.push(text_line(view, style, NUMBER_PLACEHOLDER)),
        FieldKind::Date => lines.push(text_line(view, style, DATE_PLACEHOLDER)),
        FieldKind::LongText => lines.extend(long_text_lines(view, style)),
        FieldKind::Select { options } if options.is_empty() => lines.push(notice_line(style)),
        FieldKind::Select { .. } => lines.push(select_line(view, style)),
        FieldKind::Radio { options } if options.is_empty() => lines.push(notice_line(style)),
        FieldKind::Radio { options } => {
            let current = view.answer.and_then(AnswerValue::as_text);
            let is_selected = |option: &str| current == Some(option);
            lines.extend(option_lines(view, style, options, is_selected, RADIO_MARKERS));
        }
        FieldKind::MultiChoice { options } => {
            let is_selected =
                |option: &str| view.answer.is_some_and(|value| value.contains_choice(option));
            lines.extend(option_lines(view, style, options, is_selected, CHECK_MARKERS));
        }
        FieldKind::Toggle => lines.push(toggle_line(view, style)),
    }

    lines.push(Line::default());
    lines
}

fn label_line(view: &FieldView<'_>, style: &ThemeStyle) -> Line<'static> {
    let marker = if view.focused { "▸ " } else { "  " };
    let mut label_style = style.accent_style();
    if view.focused {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }

    let reserved = if view.field.required { 4 } else { 2 };
    let label = truncate_with_ellipsis(
        &view.field.label.to_uppercase(),
        view.width.saturating_sub(reserved),
    );

    let mut spans = vec![
        Span::styled(marker, style.accent_style()),
        Span::styled(label, label_style),
    ];
    if view.field.required {
        spans.push(Span::styled(
            " ●",
            Style::default()
                .fg(COLOR_REQUIRED)
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

fn text_line(view: &FieldView<'_>, style: &ThemeStyle, placeholder: &str) -> Line<'static> {
    let value = view.answer.and_then(AnswerValue::as_text).unwrap_or("");
    let prefix = Span::styled("    ❯ ", style.dim_style());
    let room = view.width.saturating_sub(7);

    if value.is_empty() {
        let mut spans = vec![prefix];
        if view.focused {
            spans.push(Span::styled(CURSOR, style.accent_style()));
        }
        spans.push(Span::styled(
            placeholder.to_string(),
            style.dim_style().add_modifier(Modifier::ITALIC),
        ));
        return Line::from(spans);
    }

    // Keep the tail visible while typing.
    let shown = tail_to_width(value, room);
    let mut spans = vec![prefix, Span::styled(shown, style.text_style())];
    if view.focused {
        spans.push(Span::styled(CURSOR, style.accent_style()));
    }
    Line::from(spans)
}

fn long_text_lines(view: &FieldView<'_>, style: &ThemeStyle) -> Vec<Line<'static>> {
    let value = view.answer.and_then(AnswerValue::as_text).unwrap_or("");
    let room = view.width.saturating_sub(7);
    let gutter = || Span::styled("    │ ", style.dim_style());

    let mut lines: Vec<Line<'static>> = if value.is_empty() {
        let mut spans = vec![gutter()];
        if view.focused {
            spans.push(Span::styled(CURSOR, style.accent_style()));
        }
        spans.push(Span::styled(
            LONG_TEXT_PLACEHOLDER,
            style.dim_style().add_modifier(Modifier::ITALIC),
        ));
        vec![Line::from(spans)]
    } else {
        let rows: Vec<&str> = value.split('\n').collect();
        let last = rows.len() - 1;
        rows.iter()
            .enumerate()
            .map(|(i, row)| {
                let mut spans = vec![
                    gutter(),
                    Span::styled(truncate_with_ellipsis(row, room), style.text_style()),
                ];
                if view.focused && i == last {
                    spans.push(Span::styled(CURSOR, style.accent_style()));
                }
                Line::from(spans)
            })
            .collect()
    };

    while lines.len() < LONG_TEXT_MIN_ROWS {
        lines.push(Line::from(gutter()));
    }
    lines
}

fn select_line(view: &FieldView<'_>, style: &ThemeStyle) -> Line<'static> {
    let value = view
        .answer
        .and_then(AnswerValue::as_text)
        .filter(|v| !v.is_empty());
    let arrows = if view.focused {
        style.accent_style()
    } else {
        style.dim_style()
    };

    let (text, text_style) = match value {
        Some(v) => (v.to_string(), style.selected_style()),
        None => (SELECT_PLACEHOLDER.to_string(), style.dim_style()),
    };
    Line::from(vec![
        Span::styled("    ◂ ", arrows),
        Span::styled(
            truncate_with_ellipsis(&text, view.width.saturating_sub(8)),
            text_style,
        ),
        Span::styled(" ▸", arrows),
    ])
}

fn option_lines<F>(
    view: &FieldView<'_>,
    style: &ThemeStyle,
    options: &[String],
    is_selected: F,
    markers: (&'static str, &'static str),
) -> Vec<Line<'static>>
where
    F: Fn(&str) -> bool,
{
    options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let is_cursor = view.focused && i == view.option_cursor;
            let selected = is_selected(option);
            let marker = if selected { markers.0 } else { markers.1 };
            let cursor = if is_cursor { "  › " } else { "    " };

            let text_style = match (selected, is_cursor) {
                (true, _) => style.selected_style(),
                (false, true) => style.text_style().add_modifier(Modifier::BOLD),
                (false, false) => style.text_style(),
            };
            Line::from(vec![
                Span::styled(cursor, style.accent_style()),
                Span::styled(format!("{} ", marker), text_style),
                Span::styled(
                    truncate_with_ellipsis(option, view.width.saturating_sub(8)),
                    text_style,
                ),
            ])
        })
        .collect()
}

fn toggle_line(view: &FieldView<'_>, style: &ThemeStyle) -> Line<'static> {
    let checked = view
        .answer
        .and_then(AnswerValue::as_flag)
        .unwrap_or(false);
    let (marker, text, text_style) = if checked {
        ("[x]", "Yes", style.selected_style())
    } else {
        ("[ ]", "No", style.text_style())
    };
    let cursor = if view.focused { "  › " } else { "    " };
    Line::from(vec![
        Span::styled(cursor, style.accent_style()),
        Span::styled(format!("{} {}", marker, text), text_style),
    ])
}

fn notice_line(style: &ThemeStyle) -> Line<'static> {
    Line::from(Span::styled(
        format!("    {}", NO_OPTIONS_NOTICE),
        style.dim_style().add_modifier(Modifier::ITALIC),
    ))
}

/// The longest suffix of `s` that fits in `width` columns.
fn tail_to_width(s: &str, width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut used = 0;
    let mut start = s.len();
    for (idx, c) in s.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    s[start..].to_string()
}
