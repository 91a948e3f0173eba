//! Response document types
//!
//! Typed model of the Alexa skill response schema. The serde derives
//! reproduce the platform's exact field naming and nesting: optional
//! sections are omitted entirely until populated, and the speech value
//! field is named after the speech kind (`text` vs `ssml`).

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::directive::Directive;
use crate::{BuilderError, Result};

/// Schema version stamped on every new document.
pub const DEFAULT_VERSION: &str = "1.0";

/// Speech rendering kind accepted by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeechKind {
    PlainText,
    #[serde(rename = "SSML")]
    Ssml,
}

impl SpeechKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeechKind::PlainText => "PlainText",
            SpeechKind::Ssml => "SSML",
        }
    }
}

impl fmt::Display for SpeechKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Spoken output, either plain text or SSML markup.
///
/// Serializes as `{"type": "PlainText", "text": ...}` or
/// `{"type": "SSML", "ssml": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    PlainText { text: String },
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

impl OutputSpeech {
    /// Create speech of the given kind.
    pub fn new(kind: SpeechKind, value: impl Into<String>) -> Self {
        match kind {
            SpeechKind::PlainText => OutputSpeech::PlainText { text: value.into() },
            SpeechKind::Ssml => OutputSpeech::Ssml { ssml: value.into() },
        }
    }

    /// Create plain text speech.
    pub fn plain_text(text: impl Into<String>) -> Self {
        OutputSpeech::PlainText { text: text.into() }
    }

    /// Create SSML speech.
    pub fn ssml(ssml: impl Into<String>) -> Self {
        OutputSpeech::Ssml { ssml: ssml.into() }
    }

    pub fn kind(&self) -> SpeechKind {
        match self {
            OutputSpeech::PlainText { .. } => SpeechKind::PlainText,
            OutputSpeech::Ssml { .. } => SpeechKind::Ssml,
        }
    }
}

/// Alternate speech played when the user does not respond in time.
///
/// Independent slot from the primary output speech.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

/// Image attachment for a standard card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_image_url: Option<String>,
}

impl CardImage {
    /// Whether the image carries at least one usable URL. Cards only
    /// attach images that have a source.
    pub fn has_source(&self) -> bool {
        self.small_image_url.as_deref().map_or(false, |u| !u.is_empty())
            || self.large_image_url.as_deref().map_or(false, |u| !u.is_empty())
    }
}

/// Home-card content shown in the companion app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Card {
    Simple {
        title: String,
        content: String,
    },
    Standard {
        title: String,
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        image: Option<CardImage>,
    },
}

/// The `response` section of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directives: Option<Vec<Directive>>,
    pub should_end_session: bool,
}

impl Default for ResponseBody {
    fn default() -> Self {
        Self {
            output_speech: None,
            reprompt: None,
            card: None,
            directives: None,
            should_end_session: true,
        }
    }
}

/// The complete response document returned to the Alexa runtime.
///
/// Created fully initialized (`version = "1.0"`, session ends by default);
/// the optional sections only appear once populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDocument {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_attributes: Option<Map<String, Value>>,
    pub response: ResponseBody,
}

impl Default for ResponseDocument {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            session_attributes: None,
            response: ResponseBody::default(),
        }
    }
}

impl ResponseDocument {
    /// Serialize to a JSON value.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| BuilderError::InvalidArgument(e.to_string()))
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| BuilderError::InvalidArgument(e.to_string()))
    }
}
