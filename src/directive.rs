//! Dialog directives
//!
//! Directives instruct the Alexa runtime to continue a multi-turn dialog:
//! delegate the next turn, elicit or confirm a single slot, or confirm the
//! whole intent. The optional `updatedIntent` payload is passed through
//! opaquely; the builder never interprets it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A dialog directive appended to the response.
///
/// Serializes with the platform's `Dialog.*` type tags and camelCase
/// fields; `updatedIntent` is omitted when not supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Directive {
    #[serde(rename = "Dialog.Delegate", rename_all = "camelCase")]
    Delegate {
        #[serde(skip_serializing_if = "Option::is_none")]
        updated_intent: Option<Value>,
    },
    #[serde(rename = "Dialog.ElicitSlot", rename_all = "camelCase")]
    ElicitSlot {
        slot_to_elicit: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        updated_intent: Option<Value>,
    },
    #[serde(rename = "Dialog.ConfirmSlot", rename_all = "camelCase")]
    ConfirmSlot {
        slot_to_confirm: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        updated_intent: Option<Value>,
    },
    #[serde(rename = "Dialog.ConfirmIntent", rename_all = "camelCase")]
    ConfirmIntent {
        #[serde(skip_serializing_if = "Option::is_none")]
        updated_intent: Option<Value>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_delegate_serialization() {
        let directive = Directive::Delegate {
            updated_intent: None,
        };
        assert_eq!(
            serde_json::to_value(&directive).unwrap(),
            json!({"type": "Dialog.Delegate"})
        );
    }

    #[test]
    fn test_delegate_with_intent() {
        let intent = json!({
            "name": "OrderIntent",
            "confirmationStatus": "None",
            "slots": {}
        });
        let directive = Directive::Delegate {
            updated_intent: Some(intent.clone()),
        };
        assert_eq!(
            serde_json::to_value(&directive).unwrap(),
            json!({"type": "Dialog.Delegate", "updatedIntent": intent})
        );
    }

    #[test]
    fn test_elicit_slot_serialization() {
        let directive = Directive::ElicitSlot {
            slot_to_elicit: "city".to_string(),
            updated_intent: None,
        };
        assert_eq!(
            serde_json::to_value(&directive).unwrap(),
            json!({"type": "Dialog.ElicitSlot", "slotToElicit": "city"})
        );
    }

    #[test]
    fn test_confirm_slot_serialization() {
        let directive = Directive::ConfirmSlot {
            slot_to_confirm: "date".to_string(),
            updated_intent: None,
        };
        assert_eq!(
            serde_json::to_value(&directive).unwrap(),
            json!({"type": "Dialog.ConfirmSlot", "slotToConfirm": "date"})
        );
    }

    #[test]
    fn test_confirm_intent_serialization() {
        let intent = json!({"name": "BookingIntent"});
        let directive = Directive::ConfirmIntent {
            updated_intent: Some(intent.clone()),
        };
        assert_eq!(
            serde_json::to_value(&directive).unwrap(),
            json!({"type": "Dialog.ConfirmIntent", "updatedIntent": intent})
        );
    }

    #[test]
    fn test_directive_round_trip() {
        let directive = Directive::ElicitSlot {
            slot_to_elicit: "amount".to_string(),
            updated_intent: Some(json!({"name": "LoanIntent", "slots": {}})),
        };
        let json = serde_json::to_string(&directive).unwrap();
        let parsed: Directive = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, directive);
    }
}
