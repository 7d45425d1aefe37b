use chrono::Utc;
use serde_json::{json, Value};

/// Derives a display name from the current UTC time: `user-YYMMDD-HHMMSS`.
pub fn default_name() -> String {
    format!("user-{}", Utc::now().format("%y%m%d-%H%M%S"))
}

/// Resolves a caller-supplied name; an absent or empty string falls back to
/// the timestamp-derived default.
pub fn resolve_name(name: Option<String>) -> String {
    name.filter(|n| !n.is_empty()).unwrap_or_else(default_name)
}

/// The built-in seed document used when a create request carries no payload.
/// Two sections (Experience, Education) with one placeholder item each; the
/// frontend seed mirrors this shape.
pub fn default_payload() -> Value {
    json!({
        "resume": {
            "contact": {
                "firstName": "Ava",
                "lastName": "Nguyen",
                "email": "ava@example.com",
                "phone": "",
                "links": []
            },
            "summary": "",
            "skills": [],
            "sections": [
                {
                    "id": "sec_experience",
                    "name": "Experience",
                    "fields": ["title", "company", "location", "dates"],
                    "items": [
                        {
                            "id": "itm_exp_1",
                            "fields": {
                                "title": "Software Engineer",
                                "company": "Acme",
                                "location": "Denver, CO",
                                "dates": "2022–Present"
                            },
                            "bullets": []
                        }
                    ]
                },
                {
                    "id": "sec_education",
                    "name": "Education",
                    "fields": ["school", "degree", "location", "date"],
                    "items": [
                        {
                            "id": "itm_edu_1",
                            "fields": {
                                "school": "University of Somewhere",
                                "degree": "",
                                "location": "Somewhere, USA",
                                "date": "2020"
                            },
                            "bullets": []
                        }
                    ]
                }
            ],
            "meta": {"format": "resume-v2", "version": 2, "locale": "en-US"}
        },
        "states": [],
        "activeStateId": null,
        "autosaveStateId": null,
        "userTurns": [],
        "step": 0
    })
}
