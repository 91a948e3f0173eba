//! Alexa response document builder
//!
//! Features:
//! - Fluent, chainable construction of Alexa skill response documents
//! - Wire-exact serialization of the response schema (camelCase fields,
//!   lazily-created optional sections)
//! - One-shot guard on the primary output speech
//! - Dialog directives for multi-turn conversation flows
//!
//! The crate only produces the response document; transporting it back to
//! the Alexa runtime is the caller's responsibility.

pub mod builder;
pub mod directive;
pub mod response;

pub use builder::ResponseBuilder;
pub use directive::Directive;
pub use response::{
    Card, CardImage, OutputSpeech, Reprompt, ResponseBody, ResponseDocument, SpeechKind,
};

use thiserror::Error;

/// Builder errors
#[derive(Error, Debug)]
pub enum BuilderError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

pub type Result<T> = std::result::Result<T, BuilderError>;
