//! Command-line surface.
//!
//! Required flags (`--title` on add, `--id` on edit/delete/complete) are
//! optional here so that their absence reaches the dispatcher and is
//! reported as a localized validation error.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::locale::{Locale, LocaleTable};
use crate::model::{Command, CommandRequest, FieldInput};

#[derive(Debug, Parser)]
#[command(
    name = "reminders-bridge",
    version,
    about = "Create, list, edit, delete and complete Apple Reminders from the command line",
    disable_help_subcommand = true
)]
pub struct CliArgs {
    /// Response language (en, ko, ja, zh). Unknown codes fall back to en.
    #[arg(long, global = true, env = "REMINDERS_BRIDGE_LOCALE")]
    pub locale: Option<String>,

    /// Path to a JSON config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter for stderr output (e.g. "debug", "reminders_bridge=trace").
    #[arg(long, global = true, default_value = "warn", env = "REMINDERS_BRIDGE_LOG")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List open reminders.
    List {
        /// today, week or all. Defaults to week.
        #[arg(long)]
        scope: Option<String>,
    },
    /// Create a reminder.
    Add {
        #[arg(long, allow_hyphen_values = true)]
        title: Option<String>,

        #[command(flatten)]
        schedule: ScheduleArgs,
    },
    /// Change fields of an existing reminder. Omitted fields are kept.
    Edit {
        #[arg(long)]
        id: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        title: Option<String>,

        #[command(flatten)]
        schedule: ScheduleArgs,
    },
    /// Delete a reminder.
    Delete(IdArgs),
    /// Mark a reminder as completed.
    Complete(IdArgs),
    /// Print usage and example phrases.
    Help,
}

#[derive(Debug, Args)]
pub struct ScheduleArgs {
    /// Due time, ISO-8601 with offset (2026-02-10T09:00:00+09:00).
    #[arg(long)]
    pub due: Option<String>,

    /// Note text. An empty value clears the note on edit.
    #[arg(long, allow_hyphen_values = true)]
    pub note: Option<String>,

    /// daily, weekly, monthly or yearly.
    #[arg(long)]
    pub repeat: Option<String>,

    /// Repeat every N periods. Defaults to 1.
    #[arg(long)]
    pub interval: Option<u32>,

    /// Last day of the repeat rule, YYYY-MM-DD.
    #[arg(long)]
    pub repeat_end: Option<String>,
}

#[derive(Debug, Args)]
pub struct IdArgs {
    #[arg(long)]
    pub id: Option<String>,
}

impl ScheduleArgs {
    fn into_fields(self, title: Option<String>) -> FieldInput {
        FieldInput {
            title,
            due: self.due,
            note: self.note,
            repeat: self.repeat,
            interval: self.interval,
            repeat_end: self.repeat_end,
        }
    }
}

impl CliArgs {
    /// `--locale` wins, then the configured default.
    pub fn resolve_locale(&self, configured: &str) -> Locale {
        Locale::resolve(Some(self.locale.as_deref().unwrap_or(configured)))
    }
}

impl CliCommand {
    /// `None` for `help`, which never reaches the dispatcher.
    pub fn into_command(self) -> Option<Command> {
        let command = match self {
            CliCommand::List { scope } => Command::List { scope },
            CliCommand::Add { title, schedule } => Command::Add(schedule.into_fields(title)),
            CliCommand::Edit {
                id,
                title,
                schedule,
            } => Command::Edit {
                id,
                fields: schedule.into_fields(title),
            },
            CliCommand::Delete(IdArgs { id }) => Command::Delete { id },
            CliCommand::Complete(IdArgs { id }) => Command::Complete { id },
            CliCommand::Help => return None,
        };
        Some(command)
    }
}

/// Builds the request, or `None` when usage should be printed instead.
pub fn into_request(args: CliArgs, locale: Locale) -> Option<CommandRequest> {
    let command = args.command?.into_command()?;
    Some(CommandRequest { locale, command })
}

/// Usage text followed by the locale's example phrases.
pub fn help_text(table: &LocaleTable, locale: Locale) -> String {
    let mut text = CliArgs::command().render_long_help().to_string();
    let triggers = table.triggers(locale);
    if !triggers.is_empty() {
        text.push_str("\nExample phrases:\n");
        for phrase in triggers {
            let _ = writeln!(text, "  - {phrase}");
        }
    }
    text
}
