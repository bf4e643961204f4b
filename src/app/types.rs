//! Type definitions for the application state.

/// Which top-level view is showing. Once a form is loaded the wizard's own
/// [`ViewPhase`](crate::state::ViewPhase) decides between active, closed and
/// submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Loading,
    NotFound,
    Wizard,
}
