//! Terminal rendering for the form wizard.
//!
//! [`render`] picks one view per frame:
//! - loading and not-found before a form is available
//! - submitted, closed, or the active wizard once loaded, in that order

mod fields;
mod helpers;
mod theme;
mod views;
mod wizard;

pub use fields::{field_lines, FieldView, NO_OPTIONS_NOTICE, SELECT_PLACEHOLDER};
pub use helpers::{centered_rect, truncate_with_ellipsis};
pub use theme::{style_for, ThemeStyle};
pub use views::{
    format_closing_time, DEADLINE_TITLE, END_LINK_LABEL, INACTIVE_TITLE, LOADING_TEXT,
    SUCCESS_TITLE,
};
pub use wizard::{ADVANCE_LABEL, ERROR_PREFIX, FINALIZE_LABEL, RETREAT_LABEL, SECTION_FALLBACK};

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::app::{App, Screen};
use crate::state::ViewPhase;

/// Horizontal margin around the wizard.
const MARGIN_X: u16 = 2;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    match app.screen {
        Screen::Loading => views::render_loading(frame, area),
        Screen::NotFound => {
            views::render_not_found(frame, area, &app.form_id, app.load_error.as_deref())
        }
        Screen::Wizard => match (app.phase(), app.session.as_ref()) {
            (Some(ViewPhase::Submitted), Some(session)) => {
                views::render_submitted(frame, area, session.definition())
            }
            (Some(ViewPhase::Closed(reason)), Some(session)) => {
                views::render_closed(frame, area, session.definition(), reason)
            }
            _ => {
                let inner = Rect {
                    x: area.x + MARGIN_X,
                    width: area.width.saturating_sub(MARGIN_X * 2),
                    ..area
                };
                wizard::render_wizard(frame, inner, app);
            }
        },
    }
}
