//! Error types for loading, validating, and submitting forms.
//!
//! | Type | Raised by | Surfaced as |
//! |------|-----------|-------------|
//! | [`FormError`] while loading | `GET /forms/{id}/` | not-found view |
//! | [`ValidationFailure`] | advance / submit | inline banner naming one field |
//! | [`FormError`] while submitting | `POST /form-responses/` | fixed inline banner |

mod form_error;
mod validation;

pub use form_error::{FormError, FormResult};
pub use validation::{ValidationFailure, ValidationScope};
