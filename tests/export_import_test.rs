use cvflex::document::{
    Certification, Language, Proficiency, Project, Resume, Skill, normalize, read_resume_file,
    to_export_json, validate_resume_file, write_resume_file,
};
use cvflex::export::{export_to_markdown, export_to_text};
use std::path::Path;
use tempfile::TempDir;

fn test_resume() -> Resume {
    let mut resume = Resume::default();
    resume.personal_info.first_name = "Ada".to_string();
    resume.personal_info.last_name = "Lovelace".to_string();
    resume.personal_info.title = "Analyst Programmer".to_string();
    resume.skills.push(Skill {
        name: "Mathematics".to_string(),
        level: 95,
    });
    resume.languages.push(Language {
        name: "French".to_string(),
        level: Proficiency::Fluent,
    });
    resume.projects.push(Project {
        name: "Notes on the Analytical Engine".to_string(),
        technologies: "Pen, paper".to_string(),
        ..Default::default()
    });
    resume.certifications.push(Certification {
        name: "Bernoulli numbers".to_string(),
        authority: "Charles Babbage".to_string(),
        date: "1843".to_string(),
    });
    resume
}

#[test]
fn test_validate_rejects_non_json_extensions() {
    assert!(validate_resume_file(Path::new("cv.docx")).is_err());
    assert!(validate_resume_file(Path::new("cv")).is_err());
    assert!(validate_resume_file(Path::new("cv.json")).is_ok());
}

#[tokio::test]
async fn test_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cv.json");

    let resume = test_resume();
    write_resume_file(&resume, &path).await.unwrap();
    let reimported = read_resume_file(&path).await.unwrap();

    assert_eq!(reimported, resume);
}

#[tokio::test]
async fn test_import_malformed_json_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cv.json");
    tokio::fs::write(&path, "{ definitely not json")
        .await
        .unwrap();

    let result = read_resume_file(&path).await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("invalid JSON"));
}

#[tokio::test]
async fn test_import_missing_file_is_an_error() {
    let result = read_resume_file(Path::new("/nonexistent/cv.json")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_import_backfills_partial_files() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cv.json");
    tokio::fs::write(&path, r#"{ "personalInfo": { "firstName": "Ada" } }"#)
        .await
        .unwrap();

    let resume = read_resume_file(&path).await.unwrap();
    assert_eq!(resume.personal_info.first_name, "Ada");
    assert!(resume.experience.is_empty());
}

#[test]
fn test_export_json_is_pretty_printed_and_normal_form() {
    let resume = test_resume();
    let json = to_export_json(&resume).unwrap();

    assert!(json.contains('\n'), "export should be pretty-printed");
    assert!(json.contains("\"personalInfo\""));
    assert!(json.contains("\"firstName\": \"Ada\""));

    // Re-importing an export is a no-op merge
    assert_eq!(normalize(serde_json::from_str(&json).unwrap()), resume);
}

#[test]
fn test_markdown_export() {
    let output = export_to_markdown(&test_resume()).unwrap();

    assert!(output.contains("# Ada Lovelace"));
    assert!(output.contains("**Analyst Programmer**"));
    assert!(output.contains("## Skills"));
    assert!(output.contains("- Mathematics (95%)"));
    assert!(output.contains("- French — Fluent"));
    assert!(output.contains("### Notes on the Analytical Engine"));
    assert!(output.contains("- Bernoulli numbers — Charles Babbage (1843)"));
}

#[test]
fn test_text_export_has_no_escapes() {
    let output = export_to_text(&test_resume()).unwrap();

    assert!(output.contains("ADA LOVELACE"));
    assert!(output.contains("SKILLS"));
    assert!(!output.contains('\u{1b}'), "plain text must carry no escape codes");
}

#[test]
fn test_exports_of_empty_resume_are_empty_ish() {
    let empty = Resume::default();
    assert_eq!(export_to_markdown(&empty).unwrap(), "");
    assert_eq!(export_to_text(&empty).unwrap(), "");
}
