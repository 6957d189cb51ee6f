//! Drives the adapter process boundary against throwaway shell scripts.

#![cfg(unix)]

use std::path::Path;
use std::time::Duration;

use chrono::{FixedOffset, NaiveDate, TimeZone};
use tempfile::TempDir;

use reminders_bridge::model::{DueComponents, Frequency, Recurrence, Scope, TaskFields};
use reminders_bridge::store::process::AdapterProcess;
use reminders_bridge::BridgeError;

/// Writes `body` as a shell script and returns an adapter that runs it
/// through `/bin/sh`, the same way `osascript` is handed its script.
fn adapter(dir: &TempDir, body: &str) -> AdapterProcess {
    let script = dir.path().join("adapter.sh");
    std::fs::write(&script, body).expect("write script");
    AdapterProcess::new("/bin/sh")
        .with_leading_args(vec![script.to_string_lossy().into_owned()])
        .with_timeout(Some(Duration::from_secs(10)))
}

fn recording_script(args_file: &Path, response: &str) -> String {
    format!(
        "printf '%s\\n' \"$@\" > '{}'\necho 'adapter: starting'\nprintf '%s\\n' '{}'\n",
        args_file.display(),
        response
    )
}

fn recorded_args(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("args file")
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn create_passes_flags_and_decodes_item() {
    let dir = tempfile::tempdir().expect("tempdir");
    let args_file = dir.path().join("args.txt");
    let process = adapter(
        &dir,
        &recording_script(
            &args_file,
            r#"{"ok":true,"item":{"id":"x-1","title":"Standup","due":"2026-02-10T09:00:00+00:00","recurrence":{"frequency":"weekly","interval":2}}}"#,
        ),
    );
    let fields = TaskFields {
        title: Some("Standup".to_string()),
        due: Some(DueComponents {
            year: 2026,
            month: 2,
            day: 10,
            hour: 9,
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

    let item = process.create(&fields).await.expect("create");

    assert_eq!(
        recorded_args(&args_file),
        vec![
            "add",
            "--title",
            "Standup",
            "--due",
            "2026-02-10T09:00:00",
            "--repeat",
            "weekly",
            "--interval",
            "2",
            "--repeat-end",
            "2026-06-30",
        ]
    );
    assert_eq!(item.id, "x-1");
    assert_eq!(item.title, "Standup");
    assert_eq!(
        item.due,
        Some(FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2026, 2, 10, 9, 0, 0).unwrap())
    );
    assert_eq!(
        item.recurrence,
        Some(Recurrence {
            frequency: Frequency::Weekly,
            interval: 2,
            end: None,
        })
    );
}

#[tokio::test]
async fn update_sends_empty_note_to_clear_it() {
    let dir = tempfile::tempdir().expect("tempdir");
    let args_file = dir.path().join("args.txt");
    let process = adapter(
        &dir,
        &recording_script(&args_file, r#"{"ok":true,"id":"r1","title":"Milk","note":""}"#),
    );
    let fields = TaskFields {
        note: Some(String::new()),
        ..TaskFields::default()
    };

    let item = process.update("r1", &fields).await.expect("update");

    assert_eq!(recorded_args(&args_file), vec!["edit", "--id", "r1", "--note", ""]);
    assert_eq!(item.note, None);
}

#[tokio::test]
async fn list_and_delete_decode_payloads() {
    let dir = tempfile::tempdir().expect("tempdir");
    let args_file = dir.path().join("args.txt");
    let process = adapter(
        &dir,
        &recording_script(
            &args_file,
            r#"{"ok":true,"items":[{"id":"a","name":"Milk","body":"oat"},{"id":"b","title":"Bread","completed":false}]}"#,
        ),
    );
    let items = process.list(Scope::Today).await.expect("list");
    assert_eq!(recorded_args(&args_file), vec!["list", "--scope", "today"]);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "Milk");
    assert_eq!(items[0].note.as_deref(), Some("oat"));
    assert_eq!(items[1].due, None);

    let process = adapter(
        &dir,
        &recording_script(&args_file, r#"{"ok":true,"id":"a","title":"Milk"}"#),
    );
    let deleted = process.delete("a").await.expect("delete");
    assert_eq!(recorded_args(&args_file), vec!["delete", "--id", "a"]);
    assert_eq!(deleted.id, "a");
    assert_eq!(deleted.title, "Milk");
}

#[tokio::test]
async fn failure_code_maps_to_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let process = adapter(
        &dir,
        r#"printf '%s\n' '{"ok":false,"error":"no reminder with id r9","code":"not_found"}'"#,
    );
    let error = process.complete("r9").await.unwrap_err();
    assert_eq!(error, BridgeError::NotFound("no reminder with id r9".to_string()));
}

#[tokio::test]
async fn permission_refusal_on_stderr_is_access_denied() {
    let dir = tempfile::tempdir().expect("tempdir");
    let process = adapter(
        &dir,
        "echo 'execution error: Not authorized to send Apple events to Reminders. (-1743)' >&2\nexit 1\n",
    );
    let error = process.list(Scope::All).await.unwrap_err();
    assert!(matches!(error, BridgeError::AccessDenied(_)), "{error:?}");
}

#[tokio::test]
async fn non_json_output_is_a_transport_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let process = adapter(&dir, "echo 'missing value'\n");
    let error = process.list(Scope::Week).await.unwrap_err();
    let BridgeError::Transport(detail) = &error else {
        panic!("expected transport error, got {error:?}");
    };
    assert!(detail.contains("missing value"));
}

#[tokio::test]
async fn silent_success_is_a_transport_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let process = adapter(&dir, "exit 0\n");
    let error = process.list(Scope::Week).await.unwrap_err();
    assert!(matches!(error, BridgeError::Transport(_)), "{error:?}");
}

#[tokio::test]
async fn missing_program_is_a_transport_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let process = AdapterProcess::new(dir.path().join("no-such-helper"));
    let error = process.delete("r1").await.unwrap_err();
    let BridgeError::Transport(detail) = &error else {
        panic!("expected transport error, got {error:?}");
    };
    assert!(detail.contains("failed to spawn"));
}

#[tokio::test]
async fn slow_adapter_times_out() {
    let dir = tempfile::tempdir().expect("tempdir");
    let process = adapter(&dir, "sleep 5\n").with_timeout(Some(Duration::from_millis(200)));
    let error = process.list(Scope::Week).await.unwrap_err();
    assert_eq!(error, BridgeError::Timeout(Duration::from_millis(200)));
}
