//! Test helpers for constructing `ReviewItem` fixtures and response bodies.

use serde_json::{Value, json};

use super::model::{Classification, Draft, EmailRecord, ItemKey, RecordId, ReviewItem};

/// Constructs an unclassified item without a draft.
///
/// The sender is fixed to `sender@example.com`.
#[must_use]
pub fn plain_item(key: &str, subject: &str) -> ReviewItem {
    ReviewItem::new(
        ItemKey::new(key),
        EmailRecord {
            id: Some(RecordId::Text(key.to_owned())),
            subject: subject.to_owned(),
            sender: "sender@example.com".to_owned(),
            snippet: None,
        },
        None,
        None,
    )
}

/// Constructs a classified item with an optional urgency score.
#[must_use]
pub fn classified_item(key: &str, subject: &str, urgency_score: Option<u8>) -> ReviewItem {
    let mut item = plain_item(key, subject);
    item.classification = Some(Classification {
        summary: format!("Summary of {subject}"),
        category: "CUSTOMER_SUPPORT".to_owned(),
        sentiment: "neutral".to_owned(),
        priority: "not_urgent".to_owned(),
        urgency_score,
        requires_response: Some(true),
    });
    item
}

/// Constructs a classified item carrying a suggested reply.
#[must_use]
pub fn drafted_item(key: &str, subject: &str, urgency_score: Option<u8>) -> ReviewItem {
    let mut item = classified_item(key, subject, urgency_score);
    item.draft = Some(Draft {
        subject: Some(format!("Re: {subject}")),
        body: format!("Hi,\n\nThanks for your note about {subject}.\n\nBest regards"),
    });
    item
}

/// The single-item payload used by the end-to-end review scenario.
#[must_use]
pub fn quarterly_report_payload() -> Value {
    json!([
        {
            "record": {
                "subject": "Q3 Report",
                "sender": "a@x.com",
                "snippet": "..."
            },
            "classification": {
                "summary": "ask for extension",
                "category": "work",
                "sentiment": "neutral",
                "priority": "high"
            },
            "draft": { "body": "Sure, I can extend..." }
        }
    ])
}
