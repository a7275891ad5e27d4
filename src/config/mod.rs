use crate::core::rules::ScheduleRules;
use crate::errors::{AppError, AppResult};
use crate::models::AcademicTerm;
use crate::utils::days::{DayCodeTable, default_day_codes};
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_term")]
    pub term: AcademicTerm,
    #[serde(default = "default_day_codes")]
    pub day_codes: BTreeMap<String, Weekday>,
    #[serde(default = "default_meeting_types")]
    pub meeting_types: Vec<String>,
    #[serde(default = "default_exam_labels")]
    pub exam_labels: BTreeMap<String, String>,
    #[serde(default = "default_uid_domain")]
    pub uid_domain: String,
    #[serde(default = "default_calendar_name")]
    pub calendar_name: String,
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Winter 2026: Jan 5 (Mon) to Mar 13, MLK Day and Presidents' Day off.
fn default_term() -> AcademicTerm {
    AcademicTerm::new(
        ymd(2026, 1, 5),
        ymd(2026, 3, 13),
        [ymd(2026, 1, 19), ymd(2026, 2, 16)],
    )
}
fn default_meeting_types() -> Vec<String> {
    vec!["LE".into(), "DI".into(), "LA".into()]
}
fn default_exam_labels() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("FI".to_string(), "Final".to_string()),
        ("MI".to_string(), "Midterm".to_string()),
    ])
}
fn default_uid_domain() -> String {
    "webreg".to_string()
}
fn default_calendar_name() -> String {
    "webreg2ics".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            term: default_term(),
            day_codes: default_day_codes(),
            meeting_types: default_meeting_types(),
            exam_labels: default_exam_labels(),
            uid_domain: default_uid_domain(),
            calendar_name: default_calendar_name(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".webreg2ics")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("webreg2ics.conf")
    }

    /// Load configuration from `path` (or the standard location), falling
    /// back to built-in defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        let cfg = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)?
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Config::default()
        };

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.term.start > self.term.end {
            return Err(AppError::Config(format!(
                "term start {} is after term end {}",
                self.term.start, self.term.end
            )));
        }
        if self.day_codes.is_empty() {
            return Err(AppError::Config("day_codes must not be empty".into()));
        }
        if self.uid_domain.trim().is_empty() {
            return Err(AppError::Config("uid_domain must not be empty".into()));
        }
        Ok(())
    }

    /// Write this configuration as YAML, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Replace parts of the term for a single invocation.
    pub fn with_term_overrides(
        mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        holidays: &[NaiveDate],
    ) -> AppResult<Self> {
        if let Some(s) = start {
            self.term.start = s;
        }
        if let Some(e) = end {
            self.term.end = e;
        }
        if !holidays.is_empty() {
            self.term.holidays = holidays.iter().copied().collect();
        }
        self.validate()?;
        Ok(self)
    }

    pub fn rules(&self) -> ScheduleRules {
        ScheduleRules {
            term: self.term.clone(),
            days: DayCodeTable::new(self.day_codes.clone()),
            meeting_types: self
                .meeting_types
                .iter()
                .map(|t| t.trim().to_uppercase())
                .collect(),
            exam_labels: self
                .exam_labels
                .iter()
                .map(|(k, v)| (k.trim().to_uppercase(), v.clone()))
                .collect(),
        }
    }
}
