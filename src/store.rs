//! Persisted application state
//!
//! One JSON blob per key, one file per key, under the user config
//! directory. The keys mirror the original app's cookie names so nothing
//! is lost moving between versions. Reads never fail: missing or corrupt
//! state falls back to the defaults, because startup is a non-interactive
//! path. Writes are whole-file replacements, last write wins.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

use crate::document::{Resume, normalize};
use crate::theme::{CustomColors, FontId, ThemeId};

const DATA_KEY: &str = "cvflex-data";
const THEME_KEY: &str = "cvflex-theme";
const FONT_KEY: &str = "cvflex-font";
const CUSTOM_COLORS_KEY: &str = "cvflex-custom-colors";
const DARK_MODE_KEY: &str = "cvflex-darkmode";
const TUTORIAL_SEEN_KEY: &str = "cvflex-tutorial-seen";

#[derive(Debug)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Store rooted at an explicit directory (tests point this at a temp dir)
    pub fn new(root: PathBuf) -> Self {
        Store { root }
    }

    /// Store in the per-user config directory
    pub fn open_default() -> Result<Self> {
        let root = dirs::config_dir()
            .context("could not determine the user config directory")?
            .join("cvflex");
        Ok(Store::new(root))
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Load the persisted résumé, normalized to the current schema.
    ///
    /// A missing, unreadable, or unparsable blob yields the empty
    /// template; a partial or legacy-shaped blob is back-filled.
    pub fn load_resume(&self) -> Resume {
        match self.read_value(DATA_KEY) {
            Some(value) => normalize(value),
            None => Resume::default(),
        }
    }

    pub fn save_resume(&self, resume: &Resume) -> Result<()> {
        self.write_value(DATA_KEY, resume)
    }

    /// Reset to the empty template by deleting the persisted document
    pub fn clear_resume(&self) -> Result<()> {
        self.remove(DATA_KEY)
    }

    pub fn theme(&self) -> ThemeId {
        self.read_as(THEME_KEY).unwrap_or_default()
    }

    pub fn set_theme(&self, theme: ThemeId) -> Result<()> {
        self.write_value(THEME_KEY, &theme)
    }

    pub fn font(&self) -> FontId {
        self.read_as(FONT_KEY).unwrap_or_default()
    }

    pub fn set_font(&self, font: FontId) -> Result<()> {
        self.write_value(FONT_KEY, &font)
    }

    pub fn custom_colors(&self) -> CustomColors {
        self.read_as(CUSTOM_COLORS_KEY)
            .unwrap_or_else(|| CustomColors::defaults(self.dark_mode()))
    }

    pub fn set_custom_colors(&self, colors: &CustomColors) -> Result<()> {
        self.write_value(CUSTOM_COLORS_KEY, colors)
    }

    pub fn dark_mode(&self) -> bool {
        self.read_as(DARK_MODE_KEY).unwrap_or(true)
    }

    pub fn set_dark_mode(&self, dark_mode: bool) -> Result<()> {
        self.write_value(DARK_MODE_KEY, &dark_mode)
    }

    pub fn tutorial_seen(&self) -> bool {
        self.read_as(TUTORIAL_SEEN_KEY).unwrap_or(false)
    }

    pub fn set_tutorial_seen(&self) -> Result<()> {
        self.write_value(TUTORIAL_SEEN_KEY, &true)
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    fn read_value(&self, key: &str) -> Option<Value> {
        let content = fs::read_to_string(self.key_path(key)).ok()?;
        serde_json::from_str(&content).ok()
    }

    fn read_as<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        serde_json::from_value(self.read_value(key)?).ok()
    }

    fn write_value<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("could not create {}", self.root.display()))?;
        let content = serde_json::to_string_pretty(value)?;
        let path = self.key_path(key);
        fs::write(&path, content).with_context(|| format!("could not write {}", path.display()))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("could not remove {}", path.display()))?;
        }
        Ok(())
    }
}
