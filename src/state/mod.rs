//! Application state
//!
//! - `FormSession`: answers, page cursor, and the advance/submit guards
//! - `FieldFocus`: which field and option the keyboard is on

pub mod focus;
pub mod wizard;

pub use focus::FieldFocus;
pub use wizard::{first_unmet, FormSession, SubmitIntent, ViewPhase, SUBMIT_REJECTED_MESSAGE};
