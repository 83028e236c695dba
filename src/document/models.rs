//! Core data structures for résumé representation
//!
//! This module defines all the public types that make up the canonical
//! résumé schema: the personal information block and the eight ordered
//! entry collections. Wire names stay camelCase so documents exported by
//! earlier versions of the app import unchanged.

use serde::{Deserialize, Serialize};

/// The complete in-memory résumé record.
///
/// `Resume::default()` is the canonical empty template: every scalar is
/// `""` and every collection is `[]`. After normalization a `Resume` never
/// has a missing field, which is what makes export/import round-trip safe.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Resume {
    pub personal_info: PersonalInfo,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub languages: Vec<Language>,
    pub hobbies: Vec<Hobby>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub references: Vec<Reference>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub title: String,
    pub summary: String,
    pub portfolio: String,
    pub linkedin: String,
    pub github: String,
    /// URL or data URI; rendered as a placeholder in terminal output
    pub profile_picture: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    /// 0-100; the clamp is conceptual, imported values pass through as-is
    pub level: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Language {
    pub name: String,
    pub level: Proficiency,
}

/// Language proficiency scale.
///
/// Wire values are the French labels the original app stored, so legacy
/// documents deserialize without translation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, clap::ValueEnum)]
pub enum Proficiency {
    #[default]
    #[serde(rename = "Débutant")]
    Beginner,
    #[serde(rename = "Intermédiaire")]
    Intermediate,
    #[serde(rename = "Avancé")]
    Advanced,
    #[serde(rename = "Courant")]
    Fluent,
    #[serde(rename = "Natif")]
    Native,
}

impl Proficiency {
    /// Display label for terminal and export output
    pub fn label(&self) -> &'static str {
        match self {
            Proficiency::Beginner => "Beginner",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Advanced => "Advanced",
            Proficiency::Fluent => "Fluent",
            Proficiency::Native => "Native",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Hobby {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub description: String,
    /// Free-form comma-separated list, e.g. "Rust, Tokio"
    pub technologies: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Certification {
    pub name: String,
    pub authority: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Reference {
    pub name: String,
    pub company: String,
    pub position: String,
    pub email: String,
    pub phone: String,
}

/// The eight entry collections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Section {
    Experience,
    Education,
    Skills,
    Languages,
    Hobbies,
    Projects,
    Certifications,
    References,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Languages,
        Section::Hobbies,
        Section::Projects,
        Section::Certifications,
        Section::References,
    ];

    /// JSON key of the collection inside the document
    pub fn key(&self) -> &'static str {
        match self {
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Languages => "languages",
            Section::Hobbies => "hobbies",
            Section::Projects => "projects",
            Section::Certifications => "certifications",
            Section::References => "references",
        }
    }

    /// Section heading used by the preview and exports
    pub fn title(&self) -> &'static str {
        match self {
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Skills => "Skills",
            Section::Languages => "Languages",
            Section::Hobbies => "Interests",
            Section::Projects => "Projects",
            Section::Certifications => "Certifications",
            Section::References => "References",
        }
    }
}

impl Resume {
    /// Number of entries in the given section
    pub fn section_len(&self, section: Section) -> usize {
        match section {
            Section::Experience => self.experience.len(),
            Section::Education => self.education.len(),
            Section::Skills => self.skills.len(),
            Section::Languages => self.languages.len(),
            Section::Hobbies => self.hobbies.len(),
            Section::Projects => self.projects.len(),
            Section::Certifications => self.certifications.len(),
            Section::References => self.references.len(),
        }
    }

    /// Remove the entry at `index` from `section`, preserving the order of
    /// the remaining entries. Returns false when the index is out of range.
    pub fn remove_entry(&mut self, section: Section, index: usize) -> bool {
        if index >= self.section_len(section) {
            return false;
        }
        match section {
            Section::Experience => {
                self.experience.remove(index);
            }
            Section::Education => {
                self.education.remove(index);
            }
            Section::Skills => {
                self.skills.remove(index);
            }
            Section::Languages => {
                self.languages.remove(index);
            }
            Section::Hobbies => {
                self.hobbies.remove(index);
            }
            Section::Projects => {
                self.projects.remove(index);
            }
            Section::Certifications => {
                self.certifications.remove(index);
            }
            Section::References => {
                self.references.remove(index);
            }
        }
        true
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub section: Option<Section>,
    pub text: String,
    pub start_pos: usize,
    pub end_pos: usize,
}

#[derive(Debug, Clone)]
pub struct OutlineItem {
    pub section: Section,
    pub title: &'static str,
    pub entry_count: usize,
}
