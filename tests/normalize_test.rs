use cvflex::document::{Proficiency, Resume, normalize, to_export_json};
use serde_json::{Value, json};

#[test]
fn test_normalize_empty_template_is_identity() {
    let empty = Resume::default();
    let value = serde_json::to_value(&empty).unwrap();
    assert_eq!(normalize(value), empty);
}

#[test]
fn test_normalize_is_idempotent() {
    let inputs = vec![
        json!(null),
        json!("not an object"),
        json!({}),
        json!({ "personalInfo": { "firstName": "Ada" } }),
        json!({
            "personalInfo": { "firstName": "Ada", "lastName": "Lovelace", "unknownField": 7 },
            "skills": [{ "name": "Go", "level": 80 }, { "name": "Rust", "level": 95 }],
            "experience": "not-an-array",
            "languages": [{ "name": "English", "level": "Courant" }]
        }),
    ];

    for input in inputs {
        let once = normalize(input.clone());
        let twice = normalize(serde_json::to_value(&once).unwrap());
        assert_eq!(once, twice, "normalize must be idempotent for {input}");
    }
}

#[test]
fn test_partial_personal_info_is_backfilled() {
    let resume = normalize(json!({ "personalInfo": { "firstName": "Ada" } }));

    assert_eq!(resume.personal_info.first_name, "Ada");
    assert_eq!(resume.personal_info.last_name, "");
    assert_eq!(resume.personal_info.email, "");
    assert_eq!(resume.personal_info.summary, "");
    assert_eq!(resume.personal_info.profile_picture, "");
}

#[test]
fn test_non_string_scalars_fall_back_to_default() {
    let resume = normalize(json!({
        "personalInfo": { "firstName": 42, "lastName": ["x"], "email": "ada@example.com" }
    }));

    assert_eq!(resume.personal_info.first_name, "");
    assert_eq!(resume.personal_info.last_name, "");
    assert_eq!(resume.personal_info.email, "ada@example.com");
}

#[test]
fn test_non_array_collections_are_discarded_not_coerced() {
    let resume = normalize(json!({
        "skills": [{ "name": "Go", "level": 80 }],
        "experience": "not-an-array"
    }));

    assert_eq!(resume.skills.len(), 1);
    assert_eq!(resume.skills[0].name, "Go");
    assert_eq!(resume.skills[0].level, 80);
    assert!(resume.experience.is_empty());
}

#[test]
fn test_malformed_top_level_input_yields_empty_template() {
    for input in [json!(null), json!("bare string"), json!(17), json!([1, 2, 3])] {
        assert_eq!(normalize(input), Resume::default());
    }
}

#[test]
fn test_every_key_present_after_normalization() {
    // The "no field is ever undefined" invariant, checked at the wire level
    let resume = normalize(json!({ "skills": [{ "name": "Go" }] }));
    let value = serde_json::to_value(&resume).unwrap();
    let map = value.as_object().unwrap();

    for key in [
        "experience",
        "education",
        "skills",
        "languages",
        "hobbies",
        "projects",
        "certifications",
        "references",
    ] {
        assert!(
            matches!(map.get(key), Some(Value::Array(_))),
            "{key} must be an array"
        );
    }

    let info = map["personalInfo"].as_object().unwrap();
    for key in [
        "firstName",
        "lastName",
        "email",
        "phone",
        "address",
        "title",
        "summary",
        "portfolio",
        "linkedin",
        "github",
        "profilePicture",
    ] {
        assert!(
            matches!(info.get(key), Some(Value::String(_))),
            "personalInfo.{key} must be a string"
        );
    }
}

#[test]
fn test_collection_order_is_preserved() {
    let resume = normalize(json!({
        "experience": [
            { "company": "A" },
            { "company": "B" },
            { "company": "C" }
        ]
    }));

    let companies: Vec<&str> = resume.experience.iter().map(|e| e.company.as_str()).collect();
    assert_eq!(companies, vec!["A", "B", "C"]);
}

#[test]
fn test_lenient_items_keep_their_slot() {
    // An unreadable item becomes the empty item; length and order survive
    let resume = normalize(json!({
        "skills": [{ "name": "Go", "level": 80 }, "garbage", { "name": "Rust" }]
    }));

    assert_eq!(resume.skills.len(), 3);
    assert_eq!(resume.skills[0].name, "Go");
    assert_eq!(resume.skills[1].name, "");
    assert_eq!(resume.skills[1].level, 0);
    assert_eq!(resume.skills[2].name, "Rust");
    assert_eq!(resume.skills[2].level, 0);
}

#[test]
fn test_legacy_language_wire_values() {
    let resume = normalize(json!({
        "languages": [
            { "name": "English", "level": "Courant" },
            { "name": "French", "level": "Natif" }
        ]
    }));

    assert_eq!(resume.languages[0].level, Proficiency::Fluent);
    assert_eq!(resume.languages[1].level, Proficiency::Native);

    // And they serialize back to the same wire values
    let value = serde_json::to_value(&resume).unwrap();
    assert_eq!(value["languages"][0]["level"], "Courant");
    assert_eq!(value["languages"][1]["level"], "Natif");
}

#[test]
fn test_export_import_round_trip_is_stable() {
    let resume = normalize(json!({
        "personalInfo": { "firstName": "Ada", "lastName": "Lovelace", "title": "Analyst" },
        "experience": [{ "company": "Analytical Engines", "position": "Programmer" }],
        "skills": [{ "name": "Mathematics", "level": 100 }],
        "languages": [{ "name": "English", "level": "Natif" }],
        "hobbies": [{ "name": "Gambling on horses" }]
    }));

    let exported = to_export_json(&resume).unwrap();
    let reimported = normalize(serde_json::from_str(&exported).unwrap());

    assert_eq!(reimported, resume);
}
