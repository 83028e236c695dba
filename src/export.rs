//! Plain-text export renderers
//!
//! JSON is the round-trip format (re-importing an export is a no-op);
//! Markdown and text are one-way renderings that walk the sections in the
//! same order as the ANSI preview, without styling.

use anyhow::Result;
use std::fmt::Write;

use crate::ansi::{AnsiOptions, render_to_ansi_with_options};
use crate::document::*;
use crate::theme::Palette;
use crate::ExportFormat;

/// Render the résumé in the requested export format
pub fn export_resume(
    resume: &Resume,
    format: &ExportFormat,
    palette: &Palette,
    options: &AnsiOptions,
) -> Result<String> {
    match format {
        ExportFormat::Json => to_export_json(resume),
        ExportFormat::Markdown => export_to_markdown(resume),
        ExportFormat::Text => export_to_text(resume),
        ExportFormat::Ansi => render_to_ansi_with_options(resume, palette, options),
    }
}

pub fn export_to_markdown(resume: &Resume) -> Result<String> {
    let mut output = String::new();
    let p = &resume.personal_info;

    let name = full_name(resume);
    if !name.is_empty() {
        writeln!(output, "# {name}\n")?;
    }
    if !p.title.is_empty() {
        writeln!(output, "**{}**\n", p.title)?;
    }

    let contact = joined(&[&p.email, &p.phone, &p.address]);
    if !contact.is_empty() {
        writeln!(output, "{contact}\n")?;
    }
    let links = joined(&[&p.portfolio, &p.linkedin, &p.github]);
    if !links.is_empty() {
        writeln!(output, "{links}\n")?;
    }
    if !p.summary.is_empty() {
        writeln!(output, "{}\n", p.summary)?;
    }

    for item in resume_outline(resume) {
        writeln!(output, "## {}\n", item.title)?;
        match item.section {
            Section::Experience => {
                for entry in &resume.experience {
                    markdown_timeline_entry(
                        &mut output,
                        &entry.position,
                        &entry.company,
                        &entry.start_date,
                        &entry.end_date,
                        &entry.description,
                    )?;
                }
            }
            Section::Education => {
                for entry in &resume.education {
                    markdown_timeline_entry(
                        &mut output,
                        &entry.degree,
                        &entry.institution,
                        &entry.start_date,
                        &entry.end_date,
                        &entry.description,
                    )?;
                }
            }
            Section::Skills => {
                for skill in &resume.skills {
                    writeln!(output, "- {} ({}%)", skill.name, skill.level)?;
                }
                output.push('\n');
            }
            Section::Languages => {
                for language in &resume.languages {
                    writeln!(output, "- {} — {}", language.name, language.level.label())?;
                }
                output.push('\n');
            }
            Section::Hobbies => {
                for hobby in &resume.hobbies {
                    writeln!(output, "- {}", hobby.name)?;
                }
                output.push('\n');
            }
            Section::Projects => {
                for project in &resume.projects {
                    writeln!(output, "### {}\n", project.name)?;
                    if !project.technologies.is_empty() {
                        writeln!(output, "*{}*\n", project.technologies)?;
                    }
                    if !project.link.is_empty() {
                        writeln!(output, "<{}>\n", project.link)?;
                    }
                    if !project.description.is_empty() {
                        writeln!(output, "{}\n", project.description)?;
                    }
                }
            }
            Section::Certifications => {
                for cert in &resume.certifications {
                    let mut line = format!("- {}", cert.name);
                    if !cert.authority.is_empty() {
                        write!(line, " — {}", cert.authority)?;
                    }
                    if !cert.date.is_empty() {
                        write!(line, " ({})", cert.date)?;
                    }
                    writeln!(output, "{line}")?;
                }
                output.push('\n');
            }
            Section::References => {
                for reference in &resume.references {
                    let mut line = format!("- **{}**", reference.name);
                    if !reference.position.is_empty() {
                        write!(line, " — {}", reference.position)?;
                    }
                    if !reference.company.is_empty() {
                        write!(line, ", {}", reference.company)?;
                    }
                    let contact = joined(&[&reference.email, &reference.phone]);
                    if !contact.is_empty() {
                        write!(line, " ({contact})")?;
                    }
                    writeln!(output, "{line}")?;
                }
                output.push('\n');
            }
        }
    }

    Ok(output)
}

/// Plain-text rendering with no escape codes at all
pub fn export_to_text(resume: &Resume) -> Result<String> {
    let mut output = String::new();
    let p = &resume.personal_info;

    let name = full_name(resume);
    if !name.is_empty() {
        writeln!(output, "{}", name.to_uppercase())?;
    }
    if !p.title.is_empty() {
        writeln!(output, "{}", p.title)?;
    }
    let contact = joined(&[&p.email, &p.phone, &p.address]);
    if !contact.is_empty() {
        writeln!(output, "{contact}")?;
    }
    let links = joined(&[&p.portfolio, &p.linkedin, &p.github]);
    if !links.is_empty() {
        writeln!(output, "{links}")?;
    }
    if !p.summary.is_empty() {
        writeln!(output, "\n{}", p.summary)?;
    }

    for item in resume_outline(resume) {
        writeln!(output, "\n{}", item.title.to_uppercase())?;
        writeln!(output, "{}", "-".repeat(item.title.len()))?;
        match item.section {
            Section::Experience => {
                for entry in &resume.experience {
                    text_timeline_entry(
                        &mut output,
                        &entry.position,
                        &entry.company,
                        &entry.start_date,
                        &entry.end_date,
                        &entry.description,
                    )?;
                }
            }
            Section::Education => {
                for entry in &resume.education {
                    text_timeline_entry(
                        &mut output,
                        &entry.degree,
                        &entry.institution,
                        &entry.start_date,
                        &entry.end_date,
                        &entry.description,
                    )?;
                }
            }
            Section::Skills => {
                for skill in &resume.skills {
                    writeln!(output, "- {} ({}%)", skill.name, skill.level)?;
                }
            }
            Section::Languages => {
                for language in &resume.languages {
                    writeln!(output, "- {} — {}", language.name, language.level.label())?;
                }
            }
            Section::Hobbies => {
                for hobby in &resume.hobbies {
                    writeln!(output, "- {}", hobby.name)?;
                }
            }
            Section::Projects => {
                for project in &resume.projects {
                    writeln!(output, "- {}", project.name)?;
                    if !project.technologies.is_empty() {
                        writeln!(output, "  {}", project.technologies)?;
                    }
                    if !project.link.is_empty() {
                        writeln!(output, "  {}", project.link)?;
                    }
                    if !project.description.is_empty() {
                        writeln!(output, "  {}", project.description)?;
                    }
                }
            }
            Section::Certifications => {
                for cert in &resume.certifications {
                    let details = joined(&[&cert.authority, &cert.date]);
                    if details.is_empty() {
                        writeln!(output, "- {}", cert.name)?;
                    } else {
                        writeln!(output, "- {} ({details})", cert.name)?;
                    }
                }
            }
            Section::References => {
                for reference in &resume.references {
                    let details =
                        joined(&[&reference.position, &reference.company, &reference.email, &reference.phone]);
                    if details.is_empty() {
                        writeln!(output, "- {}", reference.name)?;
                    } else {
                        writeln!(output, "- {} ({details})", reference.name)?;
                    }
                }
            }
        }
    }

    Ok(output)
}

fn text_timeline_entry(
    output: &mut String,
    title: &str,
    place: &str,
    start_date: &str,
    end_date: &str,
    description: &str,
) -> Result<()> {
    let mut heading = title.to_string();
    if !place.is_empty() {
        if !heading.is_empty() {
            heading.push_str(" — ");
        }
        heading.push_str(place);
    }
    if !heading.is_empty() {
        writeln!(output, "- {heading}")?;
    }
    if !start_date.is_empty() || !end_date.is_empty() {
        writeln!(
            output,
            "  {} – {}",
            start_date,
            if end_date.is_empty() { "present" } else { end_date }
        )?;
    }
    if !description.is_empty() {
        writeln!(output, "  {description}")?;
    }
    Ok(())
}

fn markdown_timeline_entry(
    output: &mut String,
    title: &str,
    place: &str,
    start_date: &str,
    end_date: &str,
    description: &str,
) -> Result<()> {
    let mut heading = title.to_string();
    if !place.is_empty() {
        if !heading.is_empty() {
            heading.push_str(" — ");
        }
        heading.push_str(place);
    }
    if !heading.is_empty() {
        writeln!(output, "### {heading}\n")?;
    }
    if !start_date.is_empty() || !end_date.is_empty() {
        writeln!(
            output,
            "*{} – {}*\n",
            start_date,
            if end_date.is_empty() { "present" } else { end_date }
        )?;
    }
    if !description.is_empty() {
        writeln!(output, "{description}\n")?;
    }
    Ok(())
}

fn full_name(resume: &Resume) -> String {
    [
        resume.personal_info.first_name.as_str(),
        resume.personal_info.last_name.as_str(),
    ]
    .iter()
    .filter(|part| !part.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(" ")
}

fn joined(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" · ")
}
