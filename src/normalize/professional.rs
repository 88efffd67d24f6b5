//! Professional-network payloads.

use super::reader::{nested_count, nested_flag, nested_text, PayloadReader};
use super::NormalizationFailure;
use crate::model::{Platform, Position, ProfessionalNetworkProfile, Skill};
use serde_json::{Map, Value};

const IDENTITY: &[&str] = &["public_identifier", "profile_id"];

pub(super) fn normalize(
    map: &Map<String, Value>,
) -> Result<ProfessionalNetworkProfile, NormalizationFailure> {
    let mut reader = PayloadReader::new(map);
    let public_identifier = reader.identity(IDENTITY).ok_or_else(|| {
        NormalizationFailure::missing_identity(Platform::ProfessionalNetwork, IDENTITY)
    })?;

    let mut profile = ProfessionalNetworkProfile {
        public_identifier,
        full_name: reader.text(&["full_name"]),
        headline: reader.text(&["headline"]),
        summary: reader.text(&["summary"]),
        location: reader.text(&["location"]),
        industry: reader.text(&["industry"]),
        email: reader.text(&["email"]),
        phone: reader.text(&["phone"]),
        birth_date: reader.text(&["birth_date"]),
        open_to_work: reader.flag(&["open_to_work"]),
        connections: reader.count(&["connections"]),
        posts_last_90_days: reader.count(&["posts_last_90_days"]),
        recommendations_received: reader.count(&["recommendations_received"]),
        experience: reader
            .list(&["experience"])
            .iter()
            .filter_map(Value::as_object)
            .map(position)
            .collect(),
        education_count: reader.list(&["education"]).len() as u64,
        skills: reader.list(&["skills"]).iter().filter_map(skill).collect(),
        completeness: 0.0,
    };
    profile.completeness = reader.completeness();
    Ok(profile)
}

fn position(entry: &Map<String, Value>) -> Position {
    Position {
        title: nested_text(entry, &["title"]),
        company: nested_text(entry, &["company", "company_name"]),
        current: nested_flag(entry, &["current", "is_current"]),
    }
}

/// Skills arrive as bare names or as `{name, endorsements}` objects
fn skill(entry: &Value) -> Option<Skill> {
    match entry {
        Value::String(name) if !name.trim().is_empty() => Some(Skill {
            name: name.trim().to_string(),
            endorsements: 0,
        }),
        Value::Object(object) => Some(Skill {
            name: nested_text(object, &["name"])?,
            endorsements: nested_count(object, &["endorsements", "endorsement_count"]),
        }),
        _ => None,
    }
}
