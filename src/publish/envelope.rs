//! Message envelope handed to the queue transport.

use std::collections::HashMap;

use uuid::Uuid;

/// String-keyed attribute map carried alongside the message body.
pub type MessageAttributes = HashMap<String, AttributeValue>;

/// A typed attribute value.
///
/// The wire contract types every value; the bridge only ever emits `String`
/// attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeValue {
    pub data_type: String,
    pub value: String,
}

impl AttributeValue {
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            data_type: "String".to_string(),
            value: value.into(),
        }
    }
}

/// Opaque body plus attributes, created fresh per trigger.
///
/// Ownership moves to the queue transport on send; nothing is retained
/// afterward.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub body: String,
    pub attributes: MessageAttributes,
}

impl Envelope {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            attributes: MessageAttributes::new(),
        }
    }

    /// Envelope with a freshly generated unique token as its body.
    pub fn generated() -> Self {
        Self::new(Uuid::new_v4().to_string())
    }
}
