//! Argument encoding and response decoding shared by both transports.
//!
//! Requests are a positional command followed by `--flag value` pairs.
//! Responses are one JSON line: `{"ok":true, ...fields}` or
//! `{"ok":false, "error":"...", "code":"..."}`.

use chrono::TimeZone;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::dates::{parse_repeat_end, parse_store_stamp};
use crate::error::{BridgeError, BridgeResult};
use crate::model::{DeletedItem, Frequency, Recurrence, Scope, TaskFields, TaskItem};

pub fn list_args(scope: Scope) -> Vec<String> {
    vec!["list".into(), "--scope".into(), scope.as_str().into()]
}

pub fn create_args(fields: &TaskFields) -> Vec<String> {
    let mut args = vec!["add".to_string()];
    push_fields(&mut args, fields);
    args
}

pub fn update_args(id: &str, fields: &TaskFields) -> Vec<String> {
    let mut args = vec!["edit".to_string(), "--id".to_string(), id.to_string()];
    push_fields(&mut args, fields);
    args
}

pub fn id_args(command: &str, id: &str) -> Vec<String> {
    vec![command.to_string(), "--id".to_string(), id.to_string()]
}

fn push_fields(args: &mut Vec<String>, fields: &TaskFields) {
    let mut flag = |name: &str, value: String| {
        args.push(format!("--{name}"));
        args.push(value);
    };
    if let Some(title) = &fields.title {
        flag("title", title.clone());
    }
    if let Some(due) = fields.due {
        flag("due", due.to_wire());
    }
    // An empty note is sent as-is: it clears the stored note.
    if let Some(note) = &fields.note {
        flag("note", note.clone());
    }
    if let Some(recurrence) = &fields.recurrence {
        flag("repeat", recurrence.frequency.as_str().to_string());
        flag("interval", recurrence.interval.to_string());
        if let Some(end) = recurrence.end {
            flag("repeat-end", end.format("%Y-%m-%d").to_string());
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Envelope {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl Envelope {
    /// The payload fields of a successful response, or the mapped failure.
    pub fn into_fields(self) -> BridgeResult<Map<String, Value>> {
        if self.ok {
            return Ok(self.fields);
        }
        let detail = self
            .error
            .unwrap_or_else(|| "adapter reported failure without detail".to_string());
        Err(classify_failure(&detail, self.code.as_deref()))
    }
}

/// Adapters may print diagnostics before the answer; the answer is last.
pub fn last_line(stdout: &str) -> Option<&str> {
    stdout.lines().map(str::trim).rev().find(|line| !line.is_empty())
}

pub fn parse_envelope(line: &str) -> Result<Envelope, String> {
    serde_json::from_str(line).map_err(|error| format!("{error}: {line}"))
}

/// Maps adapter failure text to an error kind.
pub fn classify_failure(detail: &str, code: Option<&str>) -> BridgeError {
    match code {
        Some("not_found") => return BridgeError::NotFound(detail.to_string()),
        Some("access_denied") => return BridgeError::AccessDenied(detail.to_string()),
        Some("invalid") => return BridgeError::Validation(detail.to_string()),
        _ => {}
    }
    let lower = detail.to_lowercase();
    if is_authorization_failure(&lower) {
        BridgeError::AccessDenied(detail.to_string())
    } else if code.is_none() && lower.contains("not found") {
        BridgeError::NotFound(detail.to_string())
    } else {
        BridgeError::Transport(detail.to_string())
    }
}

fn is_authorization_failure(lower: &str) -> bool {
    lower.contains("-1743")
        || lower.contains("not authorized")
        || lower.contains("not authorised")
        || lower.contains("access denied")
        || lower.contains("access_denied")
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireItem {
    id: String,
    #[serde(alias = "name")]
    title: String,
    #[serde(default)]
    due: Option<String>,
    #[serde(default, alias = "body")]
    note: Option<String>,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    completion_date: Option<String>,
    #[serde(default)]
    recurrence: Option<WireRecurrence>,
}

#[derive(Debug, Deserialize)]
struct WireRecurrence {
    frequency: Frequency,
    #[serde(default = "default_interval")]
    interval: u32,
    #[serde(default)]
    end: Option<String>,
}

fn default_interval() -> u32 {
    1
}

impl WireItem {
    fn into_item<Tz: TimeZone>(self, zone: &Tz) -> TaskItem {
        TaskItem {
            id: self.id,
            title: self.title,
            due: self
                .due
                .as_deref()
                .and_then(|raw| parse_store_stamp(raw, zone)),
            note: self.note.filter(|note| !note.is_empty()),
            completed: self.completed,
            completion_date: self
                .completion_date
                .as_deref()
                .and_then(|raw| parse_store_stamp(raw, zone)),
            recurrence: self.recurrence.map(|rule| Recurrence {
                frequency: rule.frequency,
                interval: rule.interval.max(1),
                end: rule.end.as_deref().and_then(parse_repeat_end),
            }),
        }
    }
}

fn malformed(what: &str, error: serde_json::Error) -> BridgeError {
    BridgeError::Transport(format!("malformed {what} in adapter response: {error}"))
}

/// A single item, either flattened into the payload or under `item`.
pub fn decode_item<Tz: TimeZone>(fields: Map<String, Value>, zone: &Tz) -> BridgeResult<TaskItem> {
    let value = match fields.get("item") {
        Some(item) => item.clone(),
        None => Value::Object(fields),
    };
    let item: WireItem = serde_json::from_value(value).map_err(|error| malformed("item", error))?;
    Ok(item.into_item(zone))
}

pub fn decode_items<Tz: TimeZone>(
    mut fields: Map<String, Value>,
    zone: &Tz,
) -> BridgeResult<Vec<TaskItem>> {
    let items = fields.remove("items").unwrap_or(Value::Array(Vec::new()));
    let items: Vec<WireItem> =
        serde_json::from_value(items).map_err(|error| malformed("items", error))?;
    Ok(items.into_iter().map(|item| item.into_item(zone)).collect())
}

pub fn decode_deleted(fields: Map<String, Value>) -> BridgeResult<DeletedItem> {
    #[derive(Deserialize)]
    struct Deleted {
        id: String,
        #[serde(alias = "name")]
        title: String,
    }
    let deleted: Deleted =
        serde_json::from_value(Value::Object(fields)).map_err(|error| malformed("deletion", error))?;
    Ok(DeletedItem {
        id: deleted.id,
        title: deleted.title,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate};

    use super::*;
    use crate::model::DueComponents;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn fields_of(line: &str) -> Map<String, Value> {
        parse_envelope(line).unwrap().into_fields().unwrap()
    }

    #[test]
    fn test_create_args_with_recurrence() {
        let fields = TaskFields {
            title: Some("Standup".to_string()),
            due: Some(DueComponents {
                year: 2026,
                month: 2,
                day: 10,
                hour: 0,
                minute: 0,
                second: 0,
            }),
            note: None,
            recurrence: Some(Recurrence {
                frequency: Frequency::Weekly,
                interval: 2,
                end: NaiveDate::from_ymd_opt(2026, 6, 30),
            }),
        };
        assert_eq!(
            create_args(&fields),
            vec![
                "add",
                "--title",
                "Standup",
                "--due",
                "2026-02-10T00:00:00",
                "--repeat",
                "weekly",
                "--interval",
                "2",
                "--repeat-end",
                "2026-06-30",
            ]
        );
    }

    #[test]
    fn test_update_args_keep_empty_note() {
        let fields = TaskFields {
            note: Some(String::new()),
            ..TaskFields::default()
        };
        assert_eq!(update_args("abc", &fields), vec!["edit", "--id", "abc", "--note", ""]);
    }

    #[test]
    fn test_list_and_id_args() {
        assert_eq!(list_args(Scope::Today), vec!["list", "--scope", "today"]);
        assert_eq!(id_args("complete", "x"), vec!["complete", "--id", "x"]);
    }

    #[test]
    fn test_last_line_skips_trailing_blank_lines() {
        assert_eq!(last_line("warming up\n{\"ok\":true}\n\n"), Some("{\"ok\":true}"));
        assert_eq!(last_line("  \n"), None);
    }

    #[test]
    fn test_failure_codes() {
        let error = parse_envelope(r#"{"ok":false,"code":"not_found","error":"no reminder"}"#)
            .unwrap()
            .into_fields()
            .unwrap_err();
        assert!(matches!(error, BridgeError::NotFound(_)));

        let error = parse_envelope(r#"{"ok":false,"code":"access_denied","error":"denied"}"#)
            .unwrap()
            .into_fields()
            .unwrap_err();
        assert!(matches!(error, BridgeError::AccessDenied(_)));
    }

    #[test]
    fn test_failure_text_classification() {
        assert!(matches!(
            classify_failure("execution error: Not authorized to send Apple events to Reminders. (-1743)", None),
            BridgeError::AccessDenied(_)
        ));
        assert!(matches!(
            classify_failure("Reminder not found", None),
            BridgeError::NotFound(_)
        ));
        assert!(matches!(
            classify_failure("Reminder not found", Some("error")),
            BridgeError::Transport(_)
        ));
        assert!(matches!(
            classify_failure("boom", None),
            BridgeError::Transport(_)
        ));
    }

    #[test]
    fn test_non_json_is_rejected() {
        assert!(parse_envelope("Reminder added").is_err());
    }

    #[test]
    fn test_decode_flattened_item() {
        let fields = fields_of(
            r#"{"ok":true,"id":"r1","title":"Standup","due":"2026-02-10T09:00:00","note":"","completed":false,"recurrence":{"frequency":"weekly","interval":2}}"#,
        );
        let item = decode_item(fields, &utc()).unwrap();
        assert_eq!(item.id, "r1");
        assert_eq!(item.note, None);
        assert_eq!(item.due.unwrap().to_rfc3339(), "2026-02-10T09:00:00+00:00");
        assert_eq!(
            item.recurrence,
            Some(Recurrence {
                frequency: Frequency::Weekly,
                interval: 2,
                end: None,
            })
        );
    }

    #[test]
    fn test_decode_nested_item_with_aliases() {
        let fields = fields_of(r#"{"ok":true,"item":{"id":"r2","name":"Milk","body":"2%"}}"#);
        let item = decode_item(fields, &utc()).unwrap();
        assert_eq!(item.title, "Milk");
        assert_eq!(item.note.as_deref(), Some("2%"));
        assert!(!item.completed);
    }

    #[test]
    fn test_decode_items_and_deleted() {
        let fields = fields_of(r#"{"ok":true,"items":[{"id":"a","title":"A"},{"id":"b","title":"B","due":"bogus"}]}"#);
        let items = decode_items(fields, &utc()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].due, None);

        let deleted = decode_deleted(fields_of(r#"{"ok":true,"id":"a","title":"A"}"#)).unwrap();
        assert_eq!(deleted.title, "A");
    }

    #[test]
    fn test_decode_item_missing_id_is_transport_error() {
        let error = decode_item(fields_of(r#"{"ok":true,"title":"A"}"#), &utc()).unwrap_err();
        assert!(matches!(error, BridgeError::Transport(_)));
    }
}
