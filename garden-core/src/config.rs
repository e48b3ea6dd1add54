use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use directories::BaseDirs;
use serde::Deserialize;
use std::{collections::HashMap, fs, path::PathBuf};
use tracing::{debug, warn};

use crate::keywords::Keywords;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the garden's storage slot.
    pub data_dir: PathBuf,
    /// Preferred editor name/binary (e.g. hx for Helix). Optional; the CLI will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
    /// The day treated as "today". Also decides which year the garden shows.
    pub reference_date: NaiveDate,
    /// Format of the day header in the detail panel, e.g. "Tuesday, February 14".
    pub date_format: String,
    /// Extra formats accepted when a day is typed as a date (e.g. "%d/%m/%Y").
    pub input_date_formats: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    editor: Option<String>,
    date_format: Option<String>,
    input_date_formats: Option<Vec<String>>,
    /// Optional table:
    /// [synonyms]
    /// ayer = "yesterday"
    /// hoy = "today"
    synonyms: Option<HashMap<String, String>>,
}

impl Config {
    /// Load config from disk (first XDG path, then native), apply defaults,
    /// and extend the global Keywords registry with user-defined synonyms if present.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|error| {
            warn!("ignoring config file: {error:#}");
            FileConfig::default()
        });

        let data_dir = file_config.data_dir.unwrap_or_else(Self::default_data_dir);
        let date_format = file_config
            .date_format
            .unwrap_or_else(|| "%A, %B %-d".to_string());
        let input_date_formats = file_config
            .input_date_formats
            .unwrap_or_else(|| vec!["%d/%m/%Y".to_string()]);

        // Extend global keyword registry once at startup.
        Self::load_synonyms(&file_config.synonyms);

        Ok(Self {
            data_dir,
            editor: file_config.editor,
            reference_date: Local::now().date_naive(),
            date_format,
            input_date_formats,
        })
    }

    /// Default data root: `{data_dir}/garden`
    /// - macOS:   `~/Library/Application Support/garden`
    /// - Linux:   `$XDG_DATA_HOME/garden` or `~/.local/share/garden`
    /// - Windows: `%APPDATA%\garden`
    fn default_data_dir() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            base.data_dir().join("garden")
        } else {
            PathBuf::from("./garden")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            v.push(b.home_dir().join(".config").join("garden").join("config.toml"));
            v.push(b.config_dir().join("garden").join("config.toml"));
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            debug!("reading config from {}", path.display());
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }

    /// Merge `[synonyms]` into the global Keywords registry, skipping aliases that
    /// would shadow a canonical keyword (eg. "today").
    fn load_synonyms(synonyms: &Option<HashMap<String, String>>) {
        let Some(map) = synonyms else {
            return;
        };
        let pairs: Vec<(String, String)> = map
            .iter()
            .filter(|(alias, _)| !Keywords::is_canonical(alias))
            .map(|(a, t)| (a.clone(), t.clone()))
            .collect();
        if !pairs.is_empty() {
            Keywords::extend(&pairs);
        }
    }

    /// `input_date_formats` as the borrowed slice the parsers expect.
    pub fn input_formats(&self) -> Vec<&str> {
        self.input_date_formats.iter().map(AsRef::as_ref).collect()
    }
}
