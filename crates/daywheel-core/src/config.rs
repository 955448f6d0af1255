//! Configuration loading for calendar and timetable documents.
//!
//! Two YAML document shapes are supported: a calendar document that sets
//! the game clock to an absolute date, and a timetable document that
//! compiles into a [`DailySchedule`]. Both follow the same pattern --
//! strongly-typed structs mirroring the YAML, a `from_file`/`parse` pair,
//! and fail-fast validation -- so a loader can hydrate a scene's clock and
//! every actor's timetable from authored data.

use std::path::Path;

use serde::Deserialize;

use daywheel_types::{Place, ScheduleEntry, TimeRange};

use crate::clock::{ClockError, GameClock};
use crate::schedule::DailySchedule;

/// Errors that can occur when loading configuration documents.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the document from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The calendar document names an invalid date.
    #[error("invalid calendar document: {source}")]
    Clock {
        /// The underlying clock error.
        #[from]
        source: ClockError,
    },

    /// A timetable entry carries an out-of-range time field.
    #[error("invalid timetable entry {name:?}: {reason}")]
    InvalidEntry {
        /// Name of the offending entry.
        name: String,
        /// What is wrong with it.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

// ---------------------------------------------------------------------------
// Calendar document
// ---------------------------------------------------------------------------

/// An authored calendar position: the date and time a scene's clock starts
/// at.
///
/// All fields default to the calendar origin (month 1, day 1, 00:00), so a
/// partial document is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CalendarConfig {
    /// Month, starting at 1.
    #[serde(default = "default_month")]
    pub month: u32,
    /// Day of month, 1 to 28.
    #[serde(default = "default_day")]
    pub day: u32,
    /// Hour of day, 0 to 23.
    #[serde(default)]
    pub hour: u32,
    /// Minute of hour, 0 to 59.
    #[serde(default)]
    pub minute: u32,
}

/// Serde default for [`CalendarConfig::month`].
const fn default_month() -> u32 {
    1
}

/// Serde default for [`CalendarConfig::day`].
const fn default_day() -> u32 {
    1
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
        }
    }
}

impl CalendarConfig {
    /// Load a calendar document from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yml::from_str(&contents)?)
    }

    /// Parse a calendar document from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply the authored date to a clock.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Clock`] when any field is out of range; the
    /// clock is left untouched in that case.
    pub fn apply(&self, clock: &mut GameClock) -> Result<(), ConfigError> {
        clock.set_time(self.month, self.day, self.hour, self.minute)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Timetable document
// ---------------------------------------------------------------------------

/// One authored timetable line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimetableEntryConfig {
    /// Entry label (becomes the name of jobs cut from it).
    pub name: String,
    /// Destination region identifier.
    pub region: i32,
    /// Destination local identifier.
    pub local: i32,
    /// Hour the entry starts, 0 to 23.
    pub start_hour: u32,
    /// Minute the entry starts, 0 to 59.
    #[serde(default)]
    pub start_minute: u32,
    /// Hour the entry ends, 0 to 23. An end earlier in the day than the
    /// start denotes a midnight-spanning entry.
    pub end_hour: u32,
    /// Minute the entry ends, 0 to 59.
    #[serde(default)]
    pub end_minute: u32,
    /// Free-form activity label.
    #[serde(default)]
    pub activity: String,
}

impl TimetableEntryConfig {
    /// Validate the time fields and build the typed entry.
    fn build(&self) -> Result<ScheduleEntry, ConfigError> {
        for (field, value, max) in [
            ("start_hour", self.start_hour, 23),
            ("start_minute", self.start_minute, 59),
            ("end_hour", self.end_hour, 23),
            ("end_minute", self.end_minute, 59),
        ] {
            if value > max {
                return Err(ConfigError::InvalidEntry {
                    name: self.name.clone(),
                    reason: format!("{field} out of range: {value}"),
                });
            }
        }
        Ok(ScheduleEntry::new(
            self.name.clone(),
            Place::new(self.region, self.local),
            TimeRange::from_hours(
                self.start_hour,
                self.start_minute,
                self.end_hour,
                self.end_minute,
            ),
            self.activity.clone(),
        ))
    }
}

/// An authored daily timetable for one actor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TimetableConfig {
    /// Timetable lines in authored order (which is lookup precedence).
    #[serde(default)]
    pub entries: Vec<TimetableEntryConfig>,
}

impl TimetableConfig {
    /// Load a timetable document from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yml::from_str(&contents)?)
    }

    /// Parse a timetable document from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Compile the document into a [`DailySchedule`], preserving authored
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEntry`] for the first entry with an
    /// out-of-range time field.
    pub fn build(&self) -> Result<DailySchedule, ConfigError> {
        let mut schedule = DailySchedule::new();
        for entry in &self.entries {
            schedule.push(entry.build()?);
        }
        Ok(schedule)
    }
}
