//! Validated decoding of backend payloads into review items.
//!
//! Each element is deserialised into wire structs that mirror the backend's
//! JSON and then converted into the domain model. Required fields are
//! optional on the wire so that an absent or `null` field is reported by its
//! dotted path (`record.subject`, `draft.body`) instead of a parser message.
//! Fields the session does not use are ignored.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use super::error::DecodeError;
use super::model::{Classification, Draft, EmailRecord, ItemKey, RecordId, ReviewItem};

const URGENCY_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

#[derive(Debug, Deserialize)]
struct ItemWire {
    record: Option<RecordWire>,
    classification: Option<ClassificationWire>,
    draft: Option<DraftWire>,
}

#[derive(Debug, Deserialize)]
struct RecordWire {
    id: Option<RecordIdWire>,
    subject: Option<String>,
    sender: Option<String>,
    snippet: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordIdWire {
    Text(String),
    Number(i64),
}

#[derive(Debug, Deserialize)]
struct ClassificationWire {
    summary: Option<String>,
    category: Option<String>,
    sentiment: Option<String>,
    priority: Option<String>,
    urgency_score: Option<u8>,
    requires_response: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct DraftWire {
    subject: Option<String>,
    body: Option<String>,
}

impl From<RecordIdWire> for RecordId {
    fn from(value: RecordIdWire) -> Self {
        match value {
            RecordIdWire::Text(text) => Self::Text(text),
            RecordIdWire::Number(number) => Self::Number(number),
        }
    }
}

/// Decodes a complete response body into an ordered sequence of items.
///
/// Decoding is all-or-nothing: the first malformed element fails the whole
/// body. The n-th element of the array becomes the n-th item.
///
/// # Errors
///
/// Returns [`DecodeError`] when the body is not a JSON array, when any
/// element fails [`decode`], or when two elements resolve to the same key.
pub fn decode_items(body: &str) -> Result<Vec<ReviewItem>, DecodeError> {
    let value: Value = serde_json::from_str(body).map_err(|error| DecodeError::InvalidJson {
        message: error.to_string(),
    })?;
    let Value::Array(elements) = value else {
        return Err(DecodeError::NotAnArray);
    };

    let mut seen = HashSet::with_capacity(elements.len());
    let mut items = Vec::with_capacity(elements.len());
    for (position, element) in elements.iter().enumerate() {
        let item = decode(element, position)?;
        if !seen.insert(item.key().clone()) {
            return Err(DecodeError::DuplicateKey {
                position,
                key: item.key().clone(),
            });
        }
        items.push(item);
    }
    Ok(items)
}

/// Decodes one array element into a pending [`ReviewItem`].
///
/// `position` is the element's index in the response; it names the item in
/// errors and provides the key when the record carries no `id`.
///
/// # Errors
///
/// Returns [`DecodeError::MissingField`] when `record` or one of the
/// required fields of a present section is absent, and
/// [`DecodeError::InvalidField`] when a field has the wrong type.
pub fn decode(raw: &Value, position: usize) -> Result<ReviewItem, DecodeError> {
    let wire: ItemWire =
        serde_path_to_error::deserialize(raw).map_err(|error| DecodeError::InvalidField {
            position,
            field: field_path(error.path()),
            message: error.into_inner().to_string(),
        })?;
    let required = |value: Option<String>, field: &'static str| {
        value.ok_or(DecodeError::MissingField { position, field })
    };

    let record_wire = wire.record.ok_or(DecodeError::MissingField {
        position,
        field: "record",
    })?;
    let record = EmailRecord {
        id: record_wire.id.map(RecordId::from),
        subject: required(record_wire.subject, "record.subject")?,
        sender: required(record_wire.sender, "record.sender")?,
        snippet: record_wire.snippet,
    };

    let classification = wire
        .classification
        .map(|fields| {
            Ok::<_, DecodeError>(Classification {
                summary: required(fields.summary, "classification.summary")?,
                category: required(fields.category, "classification.category")?,
                sentiment: required(fields.sentiment, "classification.sentiment")?,
                priority: required(fields.priority, "classification.priority")?,
                urgency_score: urgency(fields.urgency_score, position)?,
                requires_response: fields.requires_response,
            })
        })
        .transpose()?;

    let draft = wire
        .draft
        .map(|fields| {
            Ok::<_, DecodeError>(Draft {
                subject: fields.subject,
                body: required(fields.body, "draft.body")?,
            })
        })
        .transpose()?;

    let key = record
        .id
        .clone()
        .map_or_else(|| ItemKey::positional(position), ItemKey::from);

    Ok(ReviewItem::new(key, record, classification, draft))
}

fn urgency(score: Option<u8>, position: usize) -> Result<Option<u8>, DecodeError> {
    match score {
        Some(value) if !URGENCY_RANGE.contains(&value) => Err(DecodeError::InvalidField {
            position,
            field: "classification.urgency_score".to_owned(),
            message: format!("expected an integer from 1 to 10, got {value}"),
        }),
        _ => Ok(score),
    }
}

/// Renders a deserialiser path as a dotted field path; the element itself is
/// reported as `item`.
fn field_path(path: &serde_path_to_error::Path) -> String {
    let rendered = path.to_string();
    if rendered == "." {
        "item".to_owned()
    } else {
        rendered
    }
}

#[cfg(test)]
#[path = "decode_tests.rs"]
mod tests;
