//! Document normalization
//!
//! `normalize` is the single entry point through which every untrusted
//! value (persisted state, imported file) becomes a schema-complete
//! [`Resume`]. It is pure, total, and idempotent: feeding its own output
//! back in is a no-op, which is what makes the export/import pair
//! round-trip safe.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::models::{Resume, Section};

/// Produce a complete résumé from an arbitrary parsed value.
///
/// Rules, in order of application:
/// - anything that is not a JSON object becomes the empty template;
/// - each `personalInfo` scalar is taken iff present and a string,
///   otherwise it keeps the empty default;
/// - each of the eight collections is taken iff it is an array, otherwise
///   it becomes `[]`. Non-array values are discarded, never coerced.
///
/// Collection items are not deep-validated: missing or unknown item fields
/// default silently, and an item that cannot be read at all (e.g. a bare
/// string where an object is expected) becomes the empty item so that
/// collection length and order survive the merge.
pub fn normalize(candidate: Value) -> Resume {
    let Value::Object(mut map) = candidate else {
        return Resume::default();
    };

    let mut resume = Resume::default();

    if let Some(Value::Object(info)) = map.remove("personalInfo") {
        let p = &mut resume.personal_info;
        take_string(&info, "firstName", &mut p.first_name);
        take_string(&info, "lastName", &mut p.last_name);
        take_string(&info, "email", &mut p.email);
        take_string(&info, "phone", &mut p.phone);
        take_string(&info, "address", &mut p.address);
        take_string(&info, "title", &mut p.title);
        take_string(&info, "summary", &mut p.summary);
        take_string(&info, "portfolio", &mut p.portfolio);
        take_string(&info, "linkedin", &mut p.linkedin);
        take_string(&info, "github", &mut p.github);
        take_string(&info, "profilePicture", &mut p.profile_picture);
    }

    for section in Section::ALL {
        let value = map.remove(section.key());
        match section {
            Section::Experience => resume.experience = collection(value),
            Section::Education => resume.education = collection(value),
            Section::Skills => resume.skills = collection(value),
            Section::Languages => resume.languages = collection(value),
            Section::Hobbies => resume.hobbies = collection(value),
            Section::Projects => resume.projects = collection(value),
            Section::Certifications => resume.certifications = collection(value),
            Section::References => resume.references = collection(value),
        }
    }

    resume
}

fn take_string(info: &Map<String, Value>, key: &str, slot: &mut String) {
    if let Some(Value::String(s)) = info.get(key) {
        *slot = s.clone();
    }
}

fn collection<T>(value: Option<Value>) -> Vec<T>
where
    T: DeserializeOwned + Default,
{
    match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    }
}
