//! Trait seams for dependency injection.
//!
//! - [`HttpClient`] - the transport used to reach the forms backend

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
