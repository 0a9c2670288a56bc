//! Content formatting proxy for Scribe
//!
//! Turns editor content into a single chat-completion call against an
//! OpenAI-compatible API and relays the first choice back as an HTML
//! fragment. Also hosts the HTML to Markdown conversion used by the
//! editor's display toggle.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod backend;
pub mod error;
pub mod markdown;
pub mod prompt;
pub mod protocol;
#[cfg(feature = "http")]
pub mod router;
pub mod service;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{BackendError, ChatBackend, OpenAiBackend};
pub use error::FormatError;
#[cfg(feature = "http")]
pub use router::format_router;
pub use service::FormatService;
pub use types::{ClientConfig, FormatRequest, FormatResponse};
