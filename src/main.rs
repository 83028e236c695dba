//! cvflex command-line interface
//!
//! Every mutating command follows the same lifecycle: load the persisted
//! document (normalized), apply the edit, persist the whole document
//! again. Import is the only other normalization point; parse failures
//! leave the stored document untouched.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use cvflex::ansi::{AnsiOptions, render_to_ansi_with_options};
use cvflex::document::{
    Proficiency, Section, read_resume_file, resume_outline, search_resume, validate_resume_file,
    write_resume_file,
};
use cvflex::export::export_resume;
use cvflex::store::Store;
use cvflex::theme::{CustomColors, FontId, Palette, ThemeId};
use cvflex::{ColorDepth, ExportFormat};

#[derive(Parser)]
#[command(name = "cvflex", version, about = "Terminal résumé builder")]
struct Cli {
    /// Override the state directory (defaults to the user config dir)
    #[arg(long, global = true, value_name = "DIR")]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the résumé in the terminal with the current theme
    Show {
        /// Output width in columns
        #[arg(long)]
        width: Option<usize>,
        /// Color depth for the output
        #[arg(long, value_enum, default_value = "auto")]
        color_depth: ColorDepth,
    },
    /// List the non-empty sections and their entry counts
    Outline,
    /// Search the résumé text
    Search { query: String },
    /// Set personal information fields
    Personal {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        summary: Option<String>,
        #[arg(long)]
        portfolio: Option<String>,
        #[arg(long)]
        linkedin: Option<String>,
        #[arg(long)]
        github: Option<String>,
        /// URL or data URI of the profile picture
        #[arg(long)]
        profile_picture: Option<String>,
    },
    /// Add an entry to a section
    #[command(subcommand)]
    Add(AddCommand),
    /// Remove an entry from a section (1-based index, as shown by `show`)
    Remove {
        #[arg(value_enum)]
        section: Section,
        index: usize,
    },
    /// Import a résumé from a .json export file
    Import { file: PathBuf },
    /// Export the résumé
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Show or change the visual theme
    Theme {
        #[arg(value_enum)]
        theme: Option<ThemeId>,
    },
    /// Show or change the custom theme colors
    Colors {
        #[arg(long)]
        accent: Option<String>,
        #[arg(long)]
        background: Option<String>,
        #[arg(long)]
        card: Option<String>,
        #[arg(long)]
        text: Option<String>,
        /// Reset all four colors to the defaults for the current mode
        #[arg(long)]
        reset: bool,
    },
    /// Show or change the résumé font
    Font {
        #[arg(value_enum)]
        font: Option<FontId>,
    },
    /// Toggle dark mode
    Darkmode,
    /// Delete all résumé data (settings are kept)
    Reset,
}

#[derive(Subcommand)]
enum AddCommand {
    Experience {
        #[arg(long, default_value = "")]
        company: String,
        #[arg(long, default_value = "")]
        position: String,
        #[arg(long, default_value = "")]
        start_date: String,
        #[arg(long, default_value = "")]
        end_date: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    Education {
        #[arg(long, default_value = "")]
        institution: String,
        #[arg(long, default_value = "")]
        degree: String,
        #[arg(long, default_value = "")]
        start_date: String,
        #[arg(long, default_value = "")]
        end_date: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    Skill {
        #[arg(long)]
        name: String,
        /// Proficiency 0-100
        #[arg(long, default_value_t = 50)]
        level: u8,
    },
    Language {
        #[arg(long)]
        name: String,
        #[arg(long, value_enum, default_value = "beginner")]
        level: Proficiency,
    },
    Hobby {
        #[arg(long)]
        name: String,
    },
    Project {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        technologies: String,
        #[arg(long, default_value = "")]
        link: String,
    },
    Certification {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        authority: String,
        #[arg(long, default_value = "")]
        date: String,
    },
    Reference {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        company: String,
        #[arg(long, default_value = "")]
        position: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let store = match cli.state_dir {
        Some(dir) => Store::new(dir),
        None => Store::open_default()?,
    };

    match cli.command {
        Command::Show { width, color_depth } => show(&store, width, color_depth),
        Command::Outline => outline(&store),
        Command::Search { query } => search(&store, &query),
        Command::Personal {
            first_name,
            last_name,
            email,
            phone,
            address,
            title,
            summary,
            portfolio,
            linkedin,
            github,
            profile_picture,
        } => {
            let mut resume = store.load_resume();
            let p = &mut resume.personal_info;
            for (slot, value) in [
                (&mut p.first_name, first_name),
                (&mut p.last_name, last_name),
                (&mut p.email, email),
                (&mut p.phone, phone),
                (&mut p.address, address),
                (&mut p.title, title),
                (&mut p.summary, summary),
                (&mut p.portfolio, portfolio),
                (&mut p.linkedin, linkedin),
                (&mut p.github, github),
                (&mut p.profile_picture, profile_picture),
            ] {
                if let Some(value) = value {
                    *slot = value;
                }
            }
            store.save_resume(&resume)?;
            println!("Personal information saved.");
            Ok(())
        }
        Command::Add(add) => add_entry(&store, add),
        Command::Remove { section, index } => remove_entry(&store, section, index),
        Command::Import { file } => import(&store, &file).await,
        Command::Export { format, output } => export(&store, format, output).await,
        Command::Theme { theme } => {
            match theme {
                Some(theme) => {
                    store.set_theme(theme)?;
                    println!("Theme set to {}.", theme.as_str());
                }
                None => println!("{}", store.theme().as_str()),
            }
            Ok(())
        }
        Command::Colors {
            accent,
            background,
            card,
            text,
            reset,
        } => colors(&store, accent, background, card, text, reset),
        Command::Font { font } => {
            match font {
                Some(font) => {
                    store.set_font(font)?;
                    println!("Font set to {}.", font.as_str());
                }
                None => println!("{}", store.font().as_str()),
            }
            Ok(())
        }
        Command::Darkmode => {
            let dark_mode = !store.dark_mode();
            store.set_dark_mode(dark_mode)?;
            println!("Dark mode {}.", if dark_mode { "on" } else { "off" });
            Ok(())
        }
        Command::Reset => {
            store.clear_resume()?;
            println!("Résumé data deleted.");
            Ok(())
        }
    }
}

fn show(store: &Store, width: Option<usize>, color_depth: ColorDepth) -> Result<()> {
    if !store.tutorial_seen() {
        print_quick_start();
        store.set_tutorial_seen()?;
    }

    let resume = store.load_resume();
    let palette = current_palette(store);
    let mut options = AnsiOptions {
        color_depth,
        ..AnsiOptions::default()
    };
    if let Some(width) = width {
        options.terminal_width = width;
    }

    print!("{}", render_to_ansi_with_options(&resume, &palette, &options)?);
    Ok(())
}

fn outline(store: &Store) -> Result<()> {
    let resume = store.load_resume();
    let outline = resume_outline(&resume);
    if outline.is_empty() {
        println!("The résumé is empty. Start with `cvflex personal` or `cvflex add`.");
        return Ok(());
    }
    for item in outline {
        let noun = if item.entry_count == 1 { "entry" } else { "entries" };
        println!("{:<16} {} {}", item.title, item.entry_count, noun);
    }
    Ok(())
}

fn search(store: &Store, query: &str) -> Result<()> {
    let resume = store.load_resume();
    let results = search_resume(&resume, query);
    if results.is_empty() {
        println!("No matches for \"{query}\".");
        return Ok(());
    }
    for result in results {
        let section = result
            .section
            .map(|s| s.title())
            .unwrap_or("Personal info");
        println!("{:<16} {}", section, result.text);
    }
    Ok(())
}

fn add_entry(store: &Store, add: AddCommand) -> Result<()> {
    use cvflex::document::*;

    let mut resume = store.load_resume();
    let section = match add {
        AddCommand::Experience {
            company,
            position,
            start_date,
            end_date,
            description,
        } => {
            resume.experience.push(Experience {
                company,
                position,
                start_date,
                end_date,
                description,
            });
            Section::Experience
        }
        AddCommand::Education {
            institution,
            degree,
            start_date,
            end_date,
            description,
        } => {
            resume.education.push(Education {
                institution,
                degree,
                start_date,
                end_date,
                description,
            });
            Section::Education
        }
        AddCommand::Skill { name, level } => {
            resume.skills.push(Skill {
                name,
                level: level.min(100),
            });
            Section::Skills
        }
        AddCommand::Language { name, level } => {
            resume.languages.push(Language { name, level });
            Section::Languages
        }
        AddCommand::Hobby { name } => {
            resume.hobbies.push(Hobby { name });
            Section::Hobbies
        }
        AddCommand::Project {
            name,
            description,
            technologies,
            link,
        } => {
            resume.projects.push(Project {
                name,
                description,
                technologies,
                link,
            });
            Section::Projects
        }
        AddCommand::Certification {
            name,
            authority,
            date,
        } => {
            resume.certifications.push(Certification {
                name,
                authority,
                date,
            });
            Section::Certifications
        }
        AddCommand::Reference {
            name,
            company,
            position,
            email,
            phone,
        } => {
            resume.references.push(Reference {
                name,
                company,
                position,
                email,
                phone,
            });
            Section::References
        }
    };

    store.save_resume(&resume)?;
    println!(
        "{} entry added ({} total).",
        section.title(),
        resume.section_len(section)
    );
    Ok(())
}

fn remove_entry(store: &Store, section: Section, index: usize) -> Result<()> {
    let mut resume = store.load_resume();
    let count = resume.section_len(section);
    if index == 0 || !resume.remove_entry(section, index - 1) {
        bail!(
            "No {} entry at index {index} ({count} present)",
            section.title().to_lowercase()
        );
    }
    store.save_resume(&resume)?;
    println!("{} entry {index} removed.", section.title());
    Ok(())
}

async fn import(store: &Store, file: &std::path::Path) -> Result<()> {
    validate_resume_file(file)?;

    // On any failure the stored document stays as it was
    let resume = read_resume_file(file).await.context("Import failed")?;

    store.save_resume(&resume)?;
    println!("Résumé imported from {}.", file.display());
    Ok(())
}

async fn export(store: &Store, format: ExportFormat, output: Option<PathBuf>) -> Result<()> {
    let resume = store.load_resume();

    if let (ExportFormat::Json, Some(path)) = (&format, &output) {
        write_resume_file(&resume, path).await?;
        println!("Exported to {}.", path.display());
        return Ok(());
    }

    let palette = current_palette(store);
    let rendered = export_resume(&resume, &format, &palette, &AnsiOptions::default())?;
    match output {
        Some(path) => {
            tokio::fs::write(&path, rendered).await?;
            println!("Exported to {}.", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn colors(
    store: &Store,
    accent: Option<String>,
    background: Option<String>,
    card: Option<String>,
    text: Option<String>,
    reset: bool,
) -> Result<()> {
    let mut custom = if reset {
        CustomColors::defaults(store.dark_mode())
    } else {
        store.custom_colors()
    };

    let mut changed = reset;
    for (slot, value) in [
        (&mut custom.accent, accent),
        (&mut custom.background, background),
        (&mut custom.card, card),
        (&mut custom.text, text),
    ] {
        if let Some(value) = value {
            if Palette::hex_to_color(&value).is_none() {
                bail!("\"{value}\" is not a hex color (expected e.g. #8B5CF6)");
            }
            *slot = value;
            changed = true;
        }
    }

    if changed {
        store.set_custom_colors(&custom)?;
        println!("Custom colors saved. Activate them with `cvflex theme custom`.");
    } else {
        println!("accent     {}", custom.accent);
        println!("background {}", custom.background);
        println!("card       {}", custom.card);
        println!("text       {}", custom.text);
    }
    Ok(())
}

fn current_palette(store: &Store) -> Palette {
    Palette::resolve(store.theme(), &store.custom_colors(), store.dark_mode())
}

fn print_quick_start() {
    println!("Welcome to cvflex!");
    println!("  cvflex personal --first-name Ada --title \"Systems Engineer\"");
    println!("  cvflex add skill --name Rust --level 80");
    println!("  cvflex show");
    println!("  cvflex export --format json -o cv.json");
    println!("This note is shown only once.\n");
}
