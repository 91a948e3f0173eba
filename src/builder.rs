//! Fluent response builder
//!
//! Owns a single [`ResponseDocument`] and populates it through chainable
//! configuration methods. Fallible operations validate before mutating and
//! chain with `?`; everything else consumes and returns the builder.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::directive::Directive;
use crate::response::{Card, CardImage, OutputSpeech, Reprompt, ResponseDocument, SpeechKind};
use crate::{BuilderError, Result};

/// Builder for an Alexa skill response document.
///
/// # Example
/// ```
/// use alexa_response_builder::ResponseBuilder;
///
/// # fn main() -> alexa_response_builder::Result<()> {
/// let document = ResponseBuilder::new()
///     .with_text("Welcome back")?
///     .with_reprompt_text("Are you still there?")?
///     .with_simple_card("Welcome", "Welcome back")
///     .keep_session()
///     .build();
///
/// assert_eq!(document.version, "1.0");
/// assert!(!document.response.should_end_session);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResponseBuilder {
    document: ResponseDocument,
}

impl ResponseBuilder {
    /// Create a builder over a fully-initialized document
    /// (`version = "1.0"`, session ends by default).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document version. Overwrites unconditionally.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.document.version = version.into();
        self
    }

    /// Set a session attribute carried across conversation turns.
    ///
    /// The attribute map is created on first insertion; setting the same
    /// key again overwrites the previous value. Fails with
    /// [`BuilderError::InvalidArgument`] if the value cannot be converted
    /// to JSON.
    pub fn with_session_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Serialize,
    ) -> Result<Self> {
        let key = key.into();
        let value = serde_json::to_value(value).map_err(|e| {
            BuilderError::InvalidArgument(format!("session attribute {}: {}", key, e))
        })?;

        self.document
            .session_attributes
            .get_or_insert_with(Map::new)
            .insert(key, value);

        Ok(self)
    }

    /// Set the spoken output.
    ///
    /// With `is_reprompt` false this fills the primary speech slot, which
    /// can only be set once; a second attempt fails with
    /// [`BuilderError::Conflict`]. With `is_reprompt` true this fills the
    /// reprompt slot, which has no such guard and silently replaces any
    /// previous reprompt.
    pub fn with_output_speech(
        mut self,
        kind: SpeechKind,
        text: impl Into<String>,
        is_reprompt: bool,
    ) -> Result<Self> {
        let speech = OutputSpeech::new(kind, text);

        if is_reprompt {
            if self.document.response.reprompt.is_some() {
                debug!(kind = %speech.kind(), "replacing existing reprompt speech");
            }
            self.document.response.reprompt = Some(Reprompt {
                output_speech: speech,
            });
        } else {
            if self.document.response.output_speech.is_some() {
                return Err(BuilderError::Conflict(
                    "output speech can only be set once".to_string(),
                ));
            }
            self.document.response.output_speech = Some(speech);
        }

        Ok(self)
    }

    /// Set the primary speech as plain text.
    pub fn with_text(self, text: impl Into<String>) -> Result<Self> {
        self.with_output_speech(SpeechKind::PlainText, text, false)
    }

    /// Set the primary speech as SSML.
    pub fn with_ssml(self, ssml: impl Into<String>) -> Result<Self> {
        self.with_output_speech(SpeechKind::Ssml, ssml, false)
    }

    /// Set the reprompt speech as plain text.
    pub fn with_reprompt_text(self, text: impl Into<String>) -> Result<Self> {
        self.with_output_speech(SpeechKind::PlainText, text, true)
    }

    /// Set the reprompt speech as SSML.
    pub fn with_reprompt_ssml(self, ssml: impl Into<String>) -> Result<Self> {
        self.with_output_speech(SpeechKind::Ssml, ssml, true)
    }

    /// Set a simple card. Replaces any previous card.
    pub fn with_simple_card(
        mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.document.response.card = Some(Card::Simple {
            title: title.into(),
            content: content.into(),
        });
        self
    }

    /// Set a standard card. Replaces any previous card.
    ///
    /// The image is attached only when it carries at least one non-empty
    /// URL; otherwise the card is emitted without an image field.
    pub fn with_standard_card(
        mut self,
        title: impl Into<String>,
        text: impl Into<String>,
        image: Option<CardImage>,
    ) -> Self {
        let image = image.filter(CardImage::has_source);
        self.document.response.card = Some(Card::Standard {
            title: title.into(),
            text: text.into(),
            image,
        });
        self
    }

    /// Append a `Dialog.Delegate` directive.
    pub fn with_dialog_delegate(mut self, updated_intent: Option<Value>) -> Self {
        self.push_directive(Directive::Delegate { updated_intent });
        self
    }

    /// Append a `Dialog.ElicitSlot` directive for the given slot.
    pub fn with_dialog_elicit_slot(
        mut self,
        slot: impl Into<String>,
        updated_intent: Option<Value>,
    ) -> Self {
        self.push_directive(Directive::ElicitSlot {
            slot_to_elicit: slot.into(),
            updated_intent,
        });
        self
    }

    /// Append a `Dialog.ConfirmSlot` directive for the given slot.
    pub fn with_dialog_confirm_slot(
        mut self,
        slot: impl Into<String>,
        updated_intent: Option<Value>,
    ) -> Self {
        self.push_directive(Directive::ConfirmSlot {
            slot_to_confirm: slot.into(),
            updated_intent,
        });
        self
    }

    /// Append a `Dialog.ConfirmIntent` directive.
    pub fn with_dialog_confirm_intent(mut self, updated_intent: Option<Value>) -> Self {
        self.push_directive(Directive::ConfirmIntent { updated_intent });
        self
    }

    /// Keep the session open after this response. Idempotent.
    pub fn keep_session(mut self) -> Self {
        self.document.response.should_end_session = false;
        self
    }

    /// Return the accumulated document. No further validation; whatever
    /// state has been built up is returned as-is.
    pub fn build(self) -> ResponseDocument {
        self.document
    }

    // Directive list is created on first append and only ever grows.
    fn push_directive(&mut self, directive: Directive) {
        let directives = self
            .document
            .response
            .directives
            .get_or_insert_with(Vec::new);
        directives.push(directive);
        trace!(count = directives.len(), "appended dialog directive");
    }
}
