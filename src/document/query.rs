//! Résumé search and navigation operations
//!
//! This module provides read-only querying operations on the résumé,
//! including full-text search across every section and outline generation.

use super::models::*;

pub fn search_resume(resume: &Resume, query: &str) -> Vec<SearchResult> {
    let mut results = Vec::new();
    if query.trim().is_empty() {
        return results;
    }
    let query_lower = query.to_lowercase();

    let p = &resume.personal_info;
    for text in [
        &p.first_name,
        &p.last_name,
        &p.email,
        &p.phone,
        &p.address,
        &p.title,
        &p.summary,
        &p.portfolio,
        &p.linkedin,
        &p.github,
    ] {
        push_match(&mut results, None, text, &query_lower);
    }

    for section in Section::ALL {
        for text in section_texts(resume, section) {
            push_match(&mut results, Some(section), &text, &query_lower);
        }
    }

    results
}

pub fn resume_outline(resume: &Resume) -> Vec<OutlineItem> {
    let mut outline = Vec::new();

    for section in Section::ALL {
        let entry_count = resume.section_len(section);
        if entry_count > 0 {
            outline.push(OutlineItem {
                section,
                title: section.title(),
                entry_count,
            });
        }
    }

    outline
}

fn push_match(results: &mut Vec<SearchResult>, section: Option<Section>, text: &str, query_lower: &str) {
    let text_lower = text.to_lowercase();
    if let Some(start_pos) = text_lower.find(query_lower) {
        results.push(SearchResult {
            section,
            text: text.to_string(),
            start_pos,
            end_pos: start_pos + query_lower.len(),
        });
    }
}

/// Searchable text of every entry in a section, one string per entry
fn section_texts(resume: &Resume, section: Section) -> Vec<String> {
    match section {
        Section::Experience => resume
            .experience
            .iter()
            .map(|e| join_fields(&[&e.company, &e.position, &e.description]))
            .collect(),
        Section::Education => resume
            .education
            .iter()
            .map(|e| join_fields(&[&e.institution, &e.degree, &e.description]))
            .collect(),
        Section::Skills => resume.skills.iter().map(|s| s.name.clone()).collect(),
        Section::Languages => resume.languages.iter().map(|l| l.name.clone()).collect(),
        Section::Hobbies => resume.hobbies.iter().map(|h| h.name.clone()).collect(),
        Section::Projects => resume
            .projects
            .iter()
            .map(|p| join_fields(&[&p.name, &p.description, &p.technologies, &p.link]))
            .collect(),
        Section::Certifications => resume
            .certifications
            .iter()
            .map(|c| join_fields(&[&c.name, &c.authority]))
            .collect(),
        Section::References => resume
            .references
            .iter()
            .map(|r| join_fields(&[&r.name, &r.company, &r.position, &r.email]))
            .collect(),
    }
}

fn join_fields(fields: &[&str]) -> String {
    fields
        .iter()
        .filter(|f| !f.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
