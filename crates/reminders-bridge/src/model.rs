//! Task items and the per-invocation request types.
//!
//! Items are owned by the Reminders store. The bridge only holds them for the
//! duration of one command and never caches them across invocations.

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Repeat frequency of a recurrence rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        }
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "yearly" => Ok(Frequency::Yearly),
            other => Err(format!(
                "unsupported repeat frequency '{other}' (expected daily, weekly, monthly or yearly)"
            )),
        }
    }
}

/// A repeat rule attached to a single stored item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurrence {
    pub frequency: Frequency,
    pub interval: u32,
    /// No occurrences on or after this local date.
    pub end: Option<NaiveDate>,
}

/// A reminder as reported by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskItem {
    pub id: String,
    pub title: String,
    pub due: Option<DateTime<FixedOffset>>,
    pub note: Option<String>,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<DateTime<FixedOffset>>,
    pub recurrence: Option<Recurrence>,
}

/// What `delete` reports back about the removed item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedItem {
    pub id: String,
    pub title: String,
}

/// Time window filter applied to `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Today,
    Week,
    All,
}

impl Scope {
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Today => "today",
            Scope::Week => "week",
            Scope::All => "all",
        }
    }

    /// Absent means `week`; anything unrecognised falls back to `all`
    /// instead of failing.
    pub fn parse_lenient(raw: Option<&str>) -> Scope {
        let Some(raw) = raw else {
            return Scope::Week;
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "today" => Scope::Today,
            "week" => Scope::Week,
            "all" => Scope::All,
            other => {
                tracing::warn!(scope = other, "unknown list scope, falling back to all");
                Scope::All
            }
        }
    }
}

/// Local calendar components of a due date, the way the store keys them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueComponents {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl DueComponents {
    pub fn from_naive(value: NaiveDateTime) -> Self {
        use chrono::{Datelike, Timelike};
        Self {
            year: value.year(),
            month: value.month(),
            day: value.day(),
            hour: value.hour(),
            minute: value.minute(),
            second: value.second(),
        }
    }

    /// Wall-clock text sent to the adapters (`YYYY-MM-DDTHH:MM:SS`, no offset).
    pub fn to_wire(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }

    /// Short form used inside confirmation messages.
    pub fn to_display(self) -> String {
        format!(
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

/// Normalized field set handed to a transport.
///
/// `None` means "leave unchanged" on edit. `note: Some("")` clears the note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFields {
    pub title: Option<String>,
    pub due: Option<DueComponents>,
    pub note: Option<String>,
    pub recurrence: Option<Recurrence>,
}

/// Raw per-command field overrides as they arrive from flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldInput {
    pub title: Option<String>,
    pub due: Option<String>,
    pub note: Option<String>,
    pub repeat: Option<String>,
    pub interval: Option<u32>,
    pub repeat_end: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List { scope: Option<String> },
    Add(FieldInput),
    Edit { id: Option<String>, fields: FieldInput },
    Delete { id: Option<String> },
    Complete { id: Option<String> },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::List { .. } => "list",
            Command::Add(_) => "add",
            Command::Edit { .. } => "edit",
            Command::Delete { .. } => "delete",
            Command::Complete { .. } => "complete",
        }
    }
}

/// One invocation's worth of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    pub locale: Locale,
    pub command: Command,
}
