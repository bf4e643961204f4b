//! `--inspect`: print a form's pages and fields without the TUI.

use chrono::{DateTime, Utc};
use color_eyre::Result;
use std::fmt::Write as _;

use crate::models::{ClosedReason, FieldKind, FormDefinition};
use crate::startup::{build_client, init_logging, FormsConfig};

/// Plain-text outline of `form` as seen at `now`.
pub fn render_outline(form: &FormDefinition, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}  [form {}]", form.title, form.id);
    if !form.description.is_empty() {
        let _ = writeln!(out, "{}", form.description);
    }

    let status = match form.closed_reason(now) {
        Some(ClosedReason::Deadline(at)) => {
            format!("closed (deadline {})", at.format("%Y-%m-%d %H:%M UTC"))
        }
        Some(ClosedReason::Inactive) => "closed (inactive)".to_string(),
        None => match form.closes_at {
            Some(at) => format!("open until {}", at.format("%Y-%m-%d %H:%M UTC")),
            None => "open".to_string(),
        },
    };
    let _ = writeln!(out, "Status: {}", status);
    let _ = writeln!(out, "Theme: {}", form.theme.display_name());

    let pages = form.pages();
    for (index, section) in pages.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Page {}/{}: {}", index + 1, pages.len(), section.title);
        if !section.description.is_empty() {
            let _ = writeln!(out, "  {}", section.description);
        }

        let mut fields = form.fields_in(section.id.as_deref()).peekable();
        if fields.peek().is_none() {
            let _ = writeln!(out, "  (no fields)");
        }
        for field in fields {
            let marker = if field.required { '●' } else { ' ' };
            let _ = writeln!(
                out,
                "  {} {}  ({})",
                marker,
                field.label,
                describe_kind(&field.kind)
            );
        }
    }

    out
}

fn describe_kind(kind: &FieldKind) -> String {
    match kind {
        FieldKind::Select { options }
        | FieldKind::Radio { options }
        | FieldKind::MultiChoice { options } => {
            if options.is_empty() {
                format!("{}, no options", kind.wire_key())
            } else {
                format!("{}: {}", kind.wire_key(), options.join(", "))
            }
        }
        FieldKind::Toggle => "checkbox, yes/no".to_string(),
        _ => kind.wire_key().to_string(),
    }
}

/// Fetch `form_id` and print its outline to stdout.
///
/// # Errors
///
/// Returns an error if the runtime cannot start or the form cannot be loaded.
pub fn handle_inspect_command(form_id: &str, config: &FormsConfig) -> Result<()> {
    init_logging(config);
    let runtime = tokio::runtime::Runtime::new()?;
    let client = build_client(config)?;

    let form = runtime
        .block_on(client.fetch_form(form_id))
        .inspect_err(|e| {
            tracing::warn!("[{}] Inspect of form {} failed: {}", e.error_code(), form_id, e)
        })?;
    tracing::info!("Inspected form {} ({} fields)", form.id, form.fields.len());
    print!("{}", render_outline(&form, Utc::now()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Field, Section};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_outline_lists_pages_and_required_markers() {
        let mut form = FormDefinition::new("7", "Recruitment");
        form.sections = vec![Section::new("a", "Basics"), Section::new("b", "Skills")];
        form.fields = vec![
            Field::new("1", "Name", FieldKind::ShortText)
                .required()
                .in_section("a"),
            Field::new(
                "2",
                "Skills",
                FieldKind::MultiChoice {
                    options: vec!["CAD".into(), "Code".into()],
                },
            )
            .in_section("b"),
        ];

        let outline = render_outline(&form, now());
        assert!(outline.starts_with("Recruitment  [form 7]\n"));
        assert!(outline.contains("Status: open\n"));
        assert!(outline.contains("Page 1/2: Basics\n  ● Name  (text)\n"));
        assert!(outline.contains("Page 2/2: Skills\n    Skills  (checkbox: CAD, Code)\n"));
    }

    #[test]
    fn test_outline_reports_closed_and_empty_pages() {
        let mut form = FormDefinition::new("3", "Old");
        form.closes_at = Some(Utc.with_ymd_and_hms(2025, 5, 1, 9, 0, 0).unwrap());

        let outline = render_outline(&form, now());
        assert!(outline.contains("Status: closed (deadline 2025-05-01 09:00 UTC)"));
        assert!(outline.contains("Page 1/1: Form\n  (no fields)\n"));
    }

    #[test]
    fn test_describe_kind() {
        assert_eq!(describe_kind(&FieldKind::Toggle), "checkbox, yes/no");
        assert_eq!(
            describe_kind(&FieldKind::Select { options: vec![] }),
            "select, no options"
        );
        assert_eq!(describe_kind(&FieldKind::Date), "date");
    }
}
