//! Q&A reputation payloads.

use super::reader::{nested_count, nested_text, PayloadReader};
use super::NormalizationFailure;
use crate::model::{BadgeCounts, Platform, StackExchangeProfile, TagActivity};
use serde_json::{Map, Value};

const IDENTITY: &[&str] = &["user_id", "account_id"];

pub(super) fn normalize(
    map: &Map<String, Value>,
) -> Result<StackExchangeProfile, NormalizationFailure> {
    let mut reader = PayloadReader::new(map);
    let user_id = reader
        .identity(IDENTITY)
        .ok_or_else(|| NormalizationFailure::missing_identity(Platform::StackExchange, IDENTITY))?;

    let mut profile = StackExchangeProfile {
        user_id,
        display_name: reader.text(&["display_name"]),
        location: reader.text(&["location"]),
        website_url: reader.text(&["website_url"]),
        about_me: reader.text(&["about_me"]),
        reputation: reader.count(&["reputation"]),
        answer_count: reader.count(&["answer_count"]),
        question_count: reader.count(&["question_count"]),
        people_reached: reader.count(&["people_reached"]),
        badges: reader
            .object(&["badge_counts"])
            .map(|badges| BadgeCounts {
                gold: nested_count(badges, &["gold"]),
                silver: nested_count(badges, &["silver"]),
                bronze: nested_count(badges, &["bronze"]),
            })
            .unwrap_or_default(),
        top_tags: reader
            .list(&["top_tags"])
            .iter()
            .filter_map(Value::as_object)
            .filter_map(tag_activity)
            .collect(),
        completeness: 0.0,
    };
    profile.completeness = reader.completeness();
    Ok(profile)
}

fn tag_activity(tag: &Map<String, Value>) -> Option<TagActivity> {
    Some(TagActivity {
        tag_name: nested_text(tag, &["tag_name", "name"])?,
        answer_score: nested_count(tag, &["answer_score", "score"]),
        answer_count: nested_count(tag, &["answer_count", "count"]),
    })
}
