use cvflex::document::{Resume, Skill};
use cvflex::store::Store;
use cvflex::theme::{CustomColors, FontId, ThemeId};
use std::fs;
use tempfile::TempDir;

fn temp_store() -> (TempDir, Store) {
    let dir = TempDir::new().expect("temp dir");
    let store = Store::new(dir.path().join("cvflex"));
    (dir, store)
}

#[test]
fn test_fresh_store_yields_defaults() {
    let (_dir, store) = temp_store();

    assert_eq!(store.load_resume(), Resume::default());
    assert_eq!(store.theme(), ThemeId::Futuristic);
    assert_eq!(store.font(), FontId::Poppins);
    assert!(store.dark_mode());
    assert!(!store.tutorial_seen());
    assert_eq!(store.custom_colors(), CustomColors::defaults(true));
}

#[test]
fn test_resume_round_trip() {
    let (_dir, store) = temp_store();

    let mut resume = Resume::default();
    resume.personal_info.first_name = "Ada".to_string();
    resume.skills.push(Skill {
        name: "Rust".to_string(),
        level: 80,
    });

    store.save_resume(&resume).unwrap();
    assert_eq!(store.load_resume(), resume);
}

#[test]
fn test_corrupt_data_falls_back_to_empty_template() {
    let (_dir, store) = temp_store();

    fs::create_dir_all(store.root()).unwrap();
    fs::write(store.root().join("cvflex-data.json"), "{not json").unwrap();

    assert_eq!(store.load_resume(), Resume::default());
}

#[test]
fn test_stale_schema_data_is_backfilled_on_load() {
    let (_dir, store) = temp_store();

    // A document from an older version without the newer collections
    fs::create_dir_all(store.root()).unwrap();
    fs::write(
        store.root().join("cvflex-data.json"),
        r#"{ "personalInfo": { "firstName": "Ada" }, "skills": [{ "name": "Go", "level": 80 }] }"#,
    )
    .unwrap();

    let resume = store.load_resume();
    assert_eq!(resume.personal_info.first_name, "Ada");
    assert_eq!(resume.skills.len(), 1);
    assert!(resume.projects.is_empty());
    assert!(resume.references.is_empty());
}

#[test]
fn test_clear_resume_resets_to_empty() {
    let (_dir, store) = temp_store();

    let mut resume = Resume::default();
    resume.personal_info.first_name = "Ada".to_string();
    store.save_resume(&resume).unwrap();

    store.clear_resume().unwrap();
    assert_eq!(store.load_resume(), Resume::default());

    // Clearing twice is fine
    store.clear_resume().unwrap();
}

#[test]
fn test_settings_round_trip() {
    let (_dir, store) = temp_store();

    store.set_theme(ThemeId::Minimal).unwrap();
    store.set_font(FontId::Lato).unwrap();
    store.set_dark_mode(false).unwrap();
    store.set_tutorial_seen().unwrap();

    assert_eq!(store.theme(), ThemeId::Minimal);
    assert_eq!(store.font(), FontId::Lato);
    assert!(!store.dark_mode());
    assert!(store.tutorial_seen());
}

#[test]
fn test_custom_colors_round_trip_and_light_defaults() {
    let (_dir, store) = temp_store();

    // No stored colors: defaults track the dark-mode flag
    store.set_dark_mode(false).unwrap();
    assert_eq!(store.custom_colors(), CustomColors::defaults(false));

    let colors = CustomColors {
        accent: "#FF0000".to_string(),
        ..CustomColors::defaults(true)
    };
    store.set_custom_colors(&colors).unwrap();
    assert_eq!(store.custom_colors(), colors);
}

#[test]
fn test_theme_persisted_as_plain_string() {
    let (_dir, store) = temp_store();

    store.set_theme(ThemeId::Modern).unwrap();
    let content = fs::read_to_string(store.root().join("cvflex-theme.json")).unwrap();
    assert_eq!(content.trim(), "\"modern\"");
}
