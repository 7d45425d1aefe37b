//! Resume snapshot schema.
//!
//! Every payload accepted by create or replace must deserialize into
//! [`Snapshot`]. Unknown extra fields are tolerated, missing optional fields
//! take their defaults, and the raw client JSON (not a re-serialization of
//! the typed form) is what gets persisted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "linkName")]
    pub link_name: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionItem {
    pub id: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub items: Vec<SectionItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub contact: Contact,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Free-form metadata; expected keys are `format`, `version`, `locale`.
    #[serde(default)]
    pub meta: Map<String, Value>,
}

/// Top-level envelope stored as a version payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub resume: Resume,
    #[serde(default)]
    pub states: Vec<Map<String, Value>>,
    #[serde(rename = "activeStateId", default)]
    pub active_state_id: Option<String>,
    #[serde(rename = "autosaveStateId", default)]
    pub autosave_state_id: Option<String>,
    #[serde(rename = "userTurns", default)]
    pub user_turns: Vec<Map<String, Value>>,
    #[serde(default)]
    pub step: i64,
}

/// Validates a raw payload against the snapshot schema.
/// The serde error names the violating field; callers surface it as a 422.
pub fn validate(value: &Value) -> Result<Snapshot, serde_json::Error> {
    serde_json::from_value(value.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_snapshot() -> Value {
        json!({
            "resume": {
                "contact": {}
            }
        })
    }

    #[test]
    fn test_minimal_snapshot_validates_with_defaults() {
        let snap = validate(&minimal_snapshot()).unwrap();
        assert_eq!(snap.resume.contact.first_name, "");
        assert!(snap.resume.sections.is_empty());
        assert!(snap.states.is_empty());
        assert!(snap.active_state_id.is_none());
        assert_eq!(snap.step, 0);
    }

    #[test]
    fn test_missing_resume_fails() {
        let err = validate(&json!({"states": []})).unwrap_err();
        assert!(err.to_string().contains("resume"));
    }

    #[test]
    fn test_missing_contact_fails() {
        let err = validate(&json!({"resume": {"summary": ""}})).unwrap_err();
        assert!(err.to_string().contains("contact"));
    }

    #[test]
    fn test_non_object_payload_fails() {
        assert!(validate(&json!([1, 2, 3])).is_err());
        assert!(validate(&json!("resume")).is_err());
        assert!(validate(&Value::Null).is_err());
    }

    #[test]
    fn test_unknown_fields_tolerated() {
        let mut doc = minimal_snapshot();
        doc["futureField"] = json!({"anything": true});
        doc["resume"]["legacyFlag"] = json!(7);
        assert!(validate(&doc).is_ok());
    }

    #[test]
    fn test_skills_must_be_strings() {
        let mut doc = minimal_snapshot();
        doc["resume"]["skills"] = json!(["rust", 42]);
        assert!(validate(&doc).is_err());
    }

    #[test]
    fn test_link_requires_both_fields() {
        let mut doc = minimal_snapshot();
        doc["resume"]["contact"]["links"] = json!([{"linkName": "GitHub"}]);
        let err = validate(&doc).unwrap_err();
        assert!(err.to_string().contains("link"));
    }

    #[test]
    fn test_section_requires_id_and_name() {
        let mut doc = minimal_snapshot();
        doc["resume"]["sections"] = json!([{"id": "sec_x"}]);
        assert!(validate(&doc).is_err());

        doc["resume"]["sections"] = json!([{"id": "sec_x", "name": "Experience"}]);
        assert!(validate(&doc).is_ok());
    }

    #[test]
    fn test_item_fields_accept_arbitrary_values() {
        let mut doc = minimal_snapshot();
        doc["resume"]["sections"] = json!([{
            "id": "sec_x",
            "name": "Experience",
            "items": [{
                "id": "itm_1",
                "fields": {"title": "Engineer", "years": 3, "remote": true},
                "bullets": ["Shipped the thing"]
            }]
        }]);
        let snap = validate(&doc).unwrap();
        assert_eq!(snap.resume.sections[0].items[0].bullets.len(), 1);
    }

    #[test]
    fn test_states_must_be_objects() {
        let mut doc = minimal_snapshot();
        doc["states"] = json!([{"id": "s1"}, {"id": "s2"}]);
        assert!(validate(&doc).is_ok());

        doc["states"] = json!(["not-an-object"]);
        assert!(validate(&doc).is_err());
    }

    #[test]
    fn test_step_must_be_integer() {
        let mut doc = minimal_snapshot();
        doc["step"] = json!(4);
        assert!(validate(&doc).is_ok());

        doc["step"] = json!("four");
        assert!(validate(&doc).is_err());
    }
}
