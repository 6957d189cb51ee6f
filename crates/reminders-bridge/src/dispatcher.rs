//! Command dispatcher.
//!
//! Validates one request, normalizes its fields, picks a transport, makes the
//! single store call and renders the localized result. Validation always runs
//! before the store is touched, so malformed input never causes a partial
//! mutation.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::Serialize;

use crate::dates::{normalize_due, parse_repeat_end, scope_window};
use crate::error::BridgeError;
use crate::locale::{Locale, LocaleTable};
use crate::model::{
    Command, CommandRequest, FieldInput, Frequency, Recurrence, Scope, TaskFields, TaskItem,
};
use crate::store::{TransportKind, Transports};

#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub ok: bool,
    pub locale: &'static str,
    pub labels: BTreeMap<String, String>,
    pub items: Vec<TaskItem>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemResponse {
    pub ok: bool,
    pub item: TaskItem,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeletedResponse {
    pub ok: bool,
    pub id: String,
    pub title: String,
    pub message: String,
}

/// The JSON object printed on success.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Response {
    List(ListResponse),
    Item(ItemResponse),
    Deleted(DeletedResponse),
}

/// A failed command: the typed error plus its localized line.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct DispatchFailure {
    pub error: BridgeError,
    pub message: String,
}

/// Flag problems the dispatcher catches itself.
#[derive(Debug, Clone, PartialEq, Eq)]
enum InputProblem {
    TitleRequired,
    TitleEmpty,
    IdRequired,
    UnsupportedRepeat(String),
    ZeroInterval,
}

impl InputProblem {
    fn message_key(&self) -> &'static str {
        match self {
            InputProblem::TitleRequired => "error_title_required",
            InputProblem::TitleEmpty => "error_title_empty",
            InputProblem::IdRequired => "error_id_required",
            InputProblem::UnsupportedRepeat(_) => "error_repeat_invalid",
            InputProblem::ZeroInterval => "error_interval_invalid",
        }
    }

    /// English detail kept in the error for logs.
    fn detail(&self) -> String {
        match self {
            InputProblem::TitleRequired => "--title is required".to_string(),
            InputProblem::TitleEmpty => "--title cannot be empty".to_string(),
            InputProblem::IdRequired => "--id is required".to_string(),
            InputProblem::UnsupportedRepeat(value) => {
                format!("unsupported repeat frequency '{value}'")
            }
            InputProblem::ZeroInterval => "--interval must be at least 1".to_string(),
        }
    }
}

pub struct Dispatcher<'a, Tz: TimeZone = Local> {
    transports: Transports,
    locales: &'a LocaleTable,
    zone: Tz,
    pinned_now: Option<DateTime<Utc>>,
}

impl<'a> Dispatcher<'a, Local> {
    pub fn new(transports: Transports, locales: &'a LocaleTable) -> Self {
        Self {
            transports,
            locales,
            zone: Local,
            pinned_now: None,
        }
    }
}

impl<'a, Tz: TimeZone> Dispatcher<'a, Tz> {
    /// Uses `zone` instead of the process's local zone for calendar math.
    pub fn with_zone<Z: TimeZone>(self, zone: Z) -> Dispatcher<'a, Z> {
        Dispatcher {
            transports: self.transports,
            locales: self.locales,
            zone,
            pinned_now: self.pinned_now,
        }
    }

    /// Pins "now" for scope windows.
    pub fn with_clock(mut self, now: DateTime<Utc>) -> Self {
        self.pinned_now = Some(now);
        self
    }

    fn now(&self) -> DateTime<Utc> {
        self.pinned_now.unwrap_or_else(Utc::now)
    }

    pub async fn run(&self, request: CommandRequest) -> Result<Response, DispatchFailure> {
        let locale = request.locale;
        tracing::debug!(command = request.command.name(), locale = locale.as_str(), "dispatching");
        match request.command {
            Command::List { scope } => self.list(scope.as_deref(), locale).await.map(Response::List),
            Command::Add(input) => self.add(&input, locale).await.map(Response::Item),
            Command::Edit { id, fields } => self
                .edit(id.as_deref(), &fields, locale)
                .await
                .map(Response::Item),
            Command::Delete { id } => self
                .delete(id.as_deref(), locale)
                .await
                .map(Response::Deleted),
            Command::Complete { id } => self
                .complete(id.as_deref(), locale)
                .await
                .map(Response::Item),
        }
    }

    pub async fn list(
        &self,
        scope: Option<&str>,
        locale: Locale,
    ) -> Result<ListResponse, DispatchFailure> {
        let scope = Scope::parse_lenient(scope);
        let items = self
            .transports
            .get(TransportKind::Simple)
            .list(scope)
            .await
            .map_err(|error| self.fail(error, locale, None))?;

        let window = scope_window(scope, self.now(), &self.zone);
        let mut items: Vec<TaskItem> = items
            .into_iter()
            .filter(|item| match (&window, &item.due) {
                (None, _) => true,
                (Some(window), Some(due)) => window.contains(due),
                (Some(_), None) => false,
            })
            .collect();
        items.sort_by(|left, right| match (&left.due, &right.due) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        let count = items.len().to_string();
        let scope_label = self
            .locales
            .label(locale, &format!("scope_{}", scope.as_str()));
        let key = if items.is_empty() { "list_empty" } else { "listed" };
        let message = self.locales.message(
            locale,
            key,
            &[("count", Some(count.as_str())), ("scope", Some(scope_label.as_str()))],
        );

        Ok(ListResponse {
            ok: true,
            locale: locale.as_str(),
            labels: self.locales.labels(locale),
            items,
            message,
        })
    }

    pub async fn add(
        &self,
        input: &FieldInput,
        locale: Locale,
    ) -> Result<ItemResponse, DispatchFailure> {
        let title = input.title.as_deref().map(str::trim).unwrap_or("");
        if title.is_empty() {
            return Err(self.reject(InputProblem::TitleRequired, locale));
        }
        let fields = self
            .normalize(input)
            .map_err(|problem| self.reject(problem, locale))?;

        let store = self.transports.get(TransportKind::for_fields(&fields));
        tracing::debug!(transport = store.name(), "creating reminder");
        let item = store
            .create(&fields)
            .await
            .map_err(|error| self.fail(error, locale, None))?;

        let message = self.added_message(locale, &fields, &item);
        Ok(ItemResponse {
            ok: true,
            item,
            message,
        })
    }

    pub async fn edit(
        &self,
        id: Option<&str>,
        input: &FieldInput,
        locale: Locale,
    ) -> Result<ItemResponse, DispatchFailure> {
        let id = self.require_id(id, locale)?;
        let fields = self
            .normalize(input)
            .map_err(|problem| self.reject(problem, locale))?;

        let store = self.transports.get(TransportKind::for_fields(&fields));
        tracing::debug!(transport = store.name(), id, "updating reminder");
        let item = store
            .update(id, &fields)
            .await
            .map_err(|error| self.fail(error, locale, Some(id)))?;

        let message = self
            .locales
            .message(locale, "updated", &[("title", Some(item.title.as_str()))]);
        Ok(ItemResponse {
            ok: true,
            item,
            message,
        })
    }

    pub async fn delete(
        &self,
        id: Option<&str>,
        locale: Locale,
    ) -> Result<DeletedResponse, DispatchFailure> {
        let id = self.require_id(id, locale)?;
        let deleted = self
            .transports
            .get(TransportKind::Simple)
            .delete(id)
            .await
            .map_err(|error| self.fail(error, locale, Some(id)))?;

        let message = self
            .locales
            .message(locale, "deleted", &[("title", Some(deleted.title.as_str()))]);
        Ok(DeletedResponse {
            ok: true,
            id: deleted.id,
            title: deleted.title,
            message,
        })
    }

    pub async fn complete(
        &self,
        id: Option<&str>,
        locale: Locale,
    ) -> Result<ItemResponse, DispatchFailure> {
        let id = self.require_id(id, locale)?;
        let item = self
            .transports
            .get(TransportKind::Simple)
            .complete(id)
            .await
            .map_err(|error| self.fail(error, locale, Some(id)))?;

        let message = self
            .locales
            .message(locale, "completed", &[("title", Some(item.title.as_str()))]);
        Ok(ItemResponse {
            ok: true,
            item,
            message,
        })
    }

    fn require_id<'i>(&self, id: Option<&'i str>, locale: Locale) -> Result<&'i str, DispatchFailure> {
        match id.map(str::trim) {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(self.reject(InputProblem::IdRequired, locale)),
        }
    }

    /// Flag values to the store field set. Malformed dates become absent.
    fn normalize(&self, input: &FieldInput) -> Result<TaskFields, InputProblem> {
        let title = match input.title.as_deref().map(str::trim) {
            Some("") => return Err(InputProblem::TitleEmpty),
            Some(title) => Some(title.to_string()),
            None => None,
        };

        let due = input
            .due
            .as_deref()
            .and_then(|raw| normalize_due(raw, &self.zone));

        let recurrence = match input.repeat.as_deref() {
            Some(raw) => {
                let frequency = raw
                    .parse::<Frequency>()
                    .map_err(|_| InputProblem::UnsupportedRepeat(raw.trim().to_string()))?;
                let interval = input.interval.unwrap_or(1);
                if interval == 0 {
                    return Err(InputProblem::ZeroInterval);
                }
                Some(Recurrence {
                    frequency,
                    interval,
                    end: input.repeat_end.as_deref().and_then(parse_repeat_end),
                })
            }
            None => {
                if input.interval.is_some() || input.repeat_end.is_some() {
                    tracing::warn!("ignoring --interval/--repeat-end without --repeat");
                }
                None
            }
        };

        Ok(TaskFields {
            title,
            due,
            note: input.note.clone(),
            recurrence,
        })
    }

    fn added_message(&self, locale: Locale, fields: &TaskFields, item: &TaskItem) -> String {
        let mut message = match fields.due {
            Some(due) => {
                let due = due.to_display();
                self.locales.message(
                    locale,
                    "added",
                    &[("title", Some(item.title.as_str())), ("due", Some(due.as_str()))],
                )
            }
            None => self
                .locales
                .message(locale, "added_no_due", &[("title", Some(item.title.as_str()))]),
        };
        if let Some(recurrence) = &fields.recurrence {
            let frequency = self.locales.label(locale, recurrence.frequency.as_str());
            let interval = recurrence.interval.to_string();
            message.push_str(&self.locales.message(
                locale,
                "repeats",
                &[("frequency", Some(frequency.as_str())), ("interval", Some(interval.as_str()))],
            ));
        }
        message
    }

    /// Input rejected before any store call; each problem has its own template.
    fn reject(&self, problem: InputProblem, locale: Locale) -> DispatchFailure {
        let error = BridgeError::Validation(problem.detail());
        tracing::debug!(kind = error.kind(), detail = %error, "command rejected");
        let value = match &problem {
            InputProblem::UnsupportedRepeat(value) => Some(value.as_str()),
            _ => None,
        };
        let message = self
            .locales
            .message(locale, problem.message_key(), &[("value", value)]);
        DispatchFailure { error, message }
    }

    fn fail(&self, error: BridgeError, locale: Locale, id: Option<&str>) -> DispatchFailure {
        tracing::debug!(kind = error.kind(), detail = %error, "command failed");
        let detail = match &error {
            BridgeError::Validation(detail) => Some(detail.clone()),
            _ => None,
        };
        let seconds = match &error {
            BridgeError::Timeout(timeout) => Some(timeout.as_secs().to_string()),
            _ => None,
        };
        let message = self.locales.message(
            locale,
            error.message_key(),
            &[
                ("detail", detail.as_deref()),
                ("id", id),
                ("seconds", seconds.as_deref()),
            ],
        );
        DispatchFailure { error, message }
    }
}
