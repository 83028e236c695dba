use anyhow::Result;
use crossterm::style::{
    Attribute, Color as CrosstermColor, ResetColor, SetAttribute, SetForegroundColor,
};
use std::fmt::Write;
use unicode_segmentation::UnicodeSegmentation;

use crate::{ColorDepth, document::*, theme::Palette};

const SKILL_BAR_WIDTH: usize = 20;

pub struct AnsiOptions {
    pub terminal_width: usize,
    pub color_depth: ColorDepth,
}

impl Default for AnsiOptions {
    fn default() -> Self {
        Self {
            terminal_width: std::env::var("COLUMNS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(80),
            color_depth: ColorDepth::Auto,
        }
    }
}

/// Render the résumé as a themed ANSI string, section by section in
/// display order. Empty sections are skipped, exactly like the preview
/// pane of the original app.
pub fn render_to_ansi_with_options(
    resume: &Resume,
    palette: &Palette,
    options: &AnsiOptions,
) -> Result<String> {
    let mut output = String::new();

    write_ansi_header(&mut output, resume, palette, options)?;

    for item in resume_outline(resume) {
        write_ansi_section_heading(&mut output, item.title, palette, options)?;
        match item.section {
            Section::Experience => {
                for entry in &resume.experience {
                    write_ansi_timeline_entry(
                        &mut output,
                        &entry.position,
                        &entry.company,
                        &entry.start_date,
                        &entry.end_date,
                        &entry.description,
                        palette,
                        options,
                    )?;
                }
            }
            Section::Education => {
                for entry in &resume.education {
                    write_ansi_timeline_entry(
                        &mut output,
                        &entry.degree,
                        &entry.institution,
                        &entry.start_date,
                        &entry.end_date,
                        &entry.description,
                        palette,
                        options,
                    )?;
                }
            }
            Section::Skills => {
                for skill in &resume.skills {
                    write_ansi_skill(&mut output, skill, palette, options)?;
                }
                output.push('\n');
            }
            Section::Languages => {
                for language in &resume.languages {
                    writeln!(
                        output,
                        "  {} — {}{}{}",
                        format_ansi_text(&language.name, true, Some(&palette.text), options),
                        format_ansi_color(Some(&palette.subtext), options),
                        language.level.label(),
                        format_ansi_reset()
                    )?;
                }
                output.push('\n');
            }
            Section::Hobbies => {
                let tags: Vec<&str> = resume
                    .hobbies
                    .iter()
                    .map(|hobby| hobby.name.as_str())
                    .filter(|name| !name.is_empty())
                    .collect();
                write_ansi_wrapped(&mut output, &tags.join(" · "), 2, &palette.text, options)?;
                output.push('\n');
            }
            Section::Projects => {
                for project in &resume.projects {
                    write_ansi_project(&mut output, project, palette, options)?;
                }
            }
            Section::Certifications => {
                for cert in &resume.certifications {
                    let mut line = cert.name.clone();
                    if !cert.authority.is_empty() {
                        write!(line, " — {}", cert.authority)?;
                    }
                    if !cert.date.is_empty() {
                        write!(line, " ({})", cert.date)?;
                    }
                    writeln!(
                        output,
                        "  • {}{}{}",
                        format_ansi_color(Some(&palette.text), options),
                        line,
                        format_ansi_reset()
                    )?;
                }
                output.push('\n');
            }
            Section::References => {
                for reference in &resume.references {
                    write_ansi_reference(&mut output, reference, palette, options)?;
                }
            }
        }
    }

    Ok(output)
}

fn write_ansi_header(
    output: &mut String,
    resume: &Resume,
    palette: &Palette,
    options: &AnsiOptions,
) -> Result<()> {
    let p = &resume.personal_info;

    let name = [p.first_name.as_str(), p.last_name.as_str()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    if !name.is_empty() {
        writeln!(
            output,
            "{}{}",
            format_ansi_text(&format!("■ {name}"), true, Some(&palette.accent), options),
            format_ansi_reset()
        )?;
    }
    if !p.title.is_empty() {
        writeln!(
            output,
            "  {}{}{}",
            format_ansi_color(Some(&palette.accent), options),
            p.title,
            format_ansi_reset()
        )?;
    }

    let contact: Vec<&str> = [p.email.as_str(), p.phone.as_str(), p.address.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
    if !contact.is_empty() {
        write_ansi_wrapped(output, &contact.join(" · "), 2, &palette.subtext, options)?;
    }

    let links: Vec<&str> = [p.portfolio.as_str(), p.linkedin.as_str(), p.github.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
    if !links.is_empty() {
        write_ansi_wrapped(output, &links.join(" · "), 2, &palette.subtext, options)?;
    }

    if !p.summary.is_empty() {
        output.push('\n');
        write_ansi_wrapped(output, &p.summary, 2, &palette.text, options)?;
    }

    // Separator
    if !output.is_empty() {
        output.push('\n');
        let separator = "=".repeat(std::cmp::min(50, options.terminal_width));
        writeln!(
            output,
            "{}{}{}",
            format_ansi_color(Some(&palette.border), options),
            separator,
            format_ansi_reset()
        )?;
        output.push('\n');
    }

    Ok(())
}

fn write_ansi_section_heading(
    output: &mut String,
    title: &str,
    palette: &Palette,
    options: &AnsiOptions,
) -> Result<()> {
    let formatted_text = format_ansi_text(&format!("■ {title}"), true, Some(&palette.accent), options);
    writeln!(output, "{}{}", formatted_text, format_ansi_reset())?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn write_ansi_timeline_entry(
    output: &mut String,
    title: &str,
    place: &str,
    start_date: &str,
    end_date: &str,
    description: &str,
    palette: &Palette,
    options: &AnsiOptions,
) -> Result<()> {
    let mut heading = String::new();
    if !title.is_empty() {
        heading.push_str(title);
    }
    if !place.is_empty() {
        if !heading.is_empty() {
            heading.push_str(" — ");
        }
        heading.push_str(place);
    }
    if !heading.is_empty() {
        writeln!(
            output,
            "  {}{}",
            format_ansi_text(&format!("▶ {heading}"), true, Some(&palette.text), options),
            format_ansi_reset()
        )?;
    }

    if !start_date.is_empty() || !end_date.is_empty() {
        writeln!(
            output,
            "    {}{} – {}{}",
            format_ansi_color(Some(&palette.subtext), options),
            start_date,
            if end_date.is_empty() { "present" } else { end_date },
            format_ansi_reset()
        )?;
    }

    if !description.is_empty() {
        write_ansi_wrapped(output, description, 4, &palette.subtext, options)?;
    }
    output.push('\n');
    Ok(())
}

fn write_ansi_skill(
    output: &mut String,
    skill: &Skill,
    palette: &Palette,
    options: &AnsiOptions,
) -> Result<()> {
    let level = skill.level.min(100) as usize;
    let filled = level * SKILL_BAR_WIDTH / 100;
    let bar_filled = "█".repeat(filled);
    let bar_empty = "░".repeat(SKILL_BAR_WIDTH - filled);

    writeln!(
        output,
        "  {:<18} {}{}{}{}{} {}{}%{}",
        skill.name,
        format_ansi_color(Some(&palette.accent), options),
        bar_filled,
        format_ansi_color(Some(&palette.border), options),
        bar_empty,
        format_ansi_reset(),
        format_ansi_color(Some(&palette.subtext), options),
        skill.level,
        format_ansi_reset()
    )?;
    Ok(())
}

fn write_ansi_project(
    output: &mut String,
    project: &Project,
    palette: &Palette,
    options: &AnsiOptions,
) -> Result<()> {
    if !project.name.is_empty() {
        writeln!(
            output,
            "  {}{}",
            format_ansi_text(&format!("▶ {}", project.name), true, Some(&palette.text), options),
            format_ansi_reset()
        )?;
    }
    if !project.technologies.is_empty() {
        writeln!(
            output,
            "    {}{}{}",
            format_ansi_color(Some(&palette.accent), options),
            project.technologies,
            format_ansi_reset()
        )?;
    }
    if !project.link.is_empty() {
        writeln!(
            output,
            "    {}{}{}",
            format_ansi_color(Some(&palette.subtext), options),
            project.link,
            format_ansi_reset()
        )?;
    }
    if !project.description.is_empty() {
        write_ansi_wrapped(output, &project.description, 4, &palette.subtext, options)?;
    }
    output.push('\n');
    Ok(())
}

fn write_ansi_reference(
    output: &mut String,
    reference: &Reference,
    palette: &Palette,
    options: &AnsiOptions,
) -> Result<()> {
    let mut heading = reference.name.clone();
    if !reference.position.is_empty() {
        write!(heading, " — {}", reference.position)?;
    }
    if !reference.company.is_empty() {
        write!(heading, ", {}", reference.company)?;
    }
    writeln!(
        output,
        "  {}{}",
        format_ansi_text(&format!("▶ {heading}"), true, Some(&palette.text), options),
        format_ansi_reset()
    )?;

    let contact: Vec<&str> = [reference.email.as_str(), reference.phone.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
    if !contact.is_empty() {
        writeln!(
            output,
            "    {}{}{}",
            format_ansi_color(Some(&palette.subtext), options),
            contact.join(" · "),
            format_ansi_reset()
        )?;
    }
    output.push('\n');
    Ok(())
}

/// Write word-wrapped, indented, colored text
fn write_ansi_wrapped(
    output: &mut String,
    text: &str,
    indent: usize,
    color: &str,
    options: &AnsiOptions,
) -> Result<()> {
    let width = options.terminal_width.saturating_sub(indent).max(20);
    let pad = " ".repeat(indent);
    for line in wrap_text(text, width) {
        writeln!(
            output,
            "{}{}{}{}",
            pad,
            format_ansi_color(Some(color), options),
            line,
            format_ansi_reset()
        )?;
    }
    Ok(())
}

/// Greedy word wrap; widths are measured in graphemes for proper unicode
/// handling
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.graphemes(true).count();
        if current_width > 0 && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn format_ansi_text(
    text: &str,
    bold: bool,
    color: Option<&str>,
    options: &AnsiOptions,
) -> String {
    let mut result = String::new();

    if bold {
        result.push_str(&format!("{}", SetAttribute(Attribute::Bold)));
    }

    if let Some(color_hex) = color {
        result.push_str(&format_ansi_color(Some(color_hex), options));
    }

    result.push_str(text);

    // Reset after this run to prevent bleeding into subsequent output
    result.push_str(&format_ansi_reset());

    result
}

fn format_ansi_color(color_hex: Option<&str>, options: &AnsiOptions) -> String {
    let Some(hex) = color_hex else {
        return String::new();
    };

    match convert_hex_to_crossterm_color(hex, &options.color_depth) {
        Some(color) => format!("{}", SetForegroundColor(color)),
        None => String::new(),
    }
}

fn format_ansi_reset() -> String {
    format!("{ResetColor}")
}

fn convert_hex_to_crossterm_color(hex: &str, color_depth: &ColorDepth) -> Option<CrosstermColor> {
    // Remove # if present; 8-digit hex carries an alpha suffix we ignore
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 && hex.len() != 8 {
        return None;
    }

    // Parse RGB components
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    match color_depth {
        ColorDepth::Monochrome => None,
        ColorDepth::Standard => {
            // Convert to 16 colors (approximation)
            let color_index = rgb_to_ansi_16(r, g, b);
            Some(CrosstermColor::AnsiValue(color_index))
        }
        ColorDepth::Extended => {
            // Convert to 256 colors
            let color_index = rgb_to_ansi_256(r, g, b);
            Some(CrosstermColor::AnsiValue(color_index))
        }
        ColorDepth::TrueColor | ColorDepth::Auto => {
            // Use full RGB
            Some(CrosstermColor::Rgb { r, g, b })
        }
    }
}

fn rgb_to_ansi_16(r: u8, g: u8, b: u8) -> u8 {
    // Simple mapping to 16 colors
    let r_bright = r > 127;
    let g_bright = g > 127;
    let b_bright = b > 127;

    let base = match (r > 64, g > 64, b > 64) {
        (false, false, false) => 0, // Black
        (false, false, true) => 4,  // Blue
        (false, true, false) => 2,  // Green
        (false, true, true) => 6,   // Cyan
        (true, false, false) => 1,  // Red
        (true, false, true) => 5,   // Magenta
        (true, true, false) => 3,   // Yellow
        (true, true, true) => 7,    // White
    };

    // Add 8 for bright colors if any component is very bright
    if r_bright || g_bright || b_bright {
        base + 8
    } else {
        base
    }
}

fn rgb_to_ansi_256(r: u8, g: u8, b: u8) -> u8 {
    // 256-color conversion
    if r == g && g == b {
        // Grayscale
        if r < 8 {
            16
        } else if r > 247 {
            231
        } else {
            232 + (r - 8) / 10
        }
    } else {
        // Color cube: 16 + 36*r + 6*g + b
        let r_index = (r as f32 / 255.0 * 5.0) as u8;
        let g_index = (g as f32 / 255.0 * 5.0) as u8;
        let b_index = (b as f32 / 255.0 * 5.0) as u8;
        16 + 36 * r_index + 6 * g_index + b_index
    }
}
