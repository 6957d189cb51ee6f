//! Child-process plumbing for the adapters.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use chrono::Local;
use serde_json::{Map, Value};

use crate::error::{BridgeError, BridgeResult};
use crate::model::{DeletedItem, Scope, TaskFields, TaskItem};

use super::wire;

/// One external adapter program and how to launch it.
#[derive(Debug, Clone)]
pub struct AdapterProcess {
    program: PathBuf,
    leading_args: Vec<String>,
    timeout: Option<Duration>,
}

impl AdapterProcess {
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            leading_args: Vec::new(),
            timeout: None,
        }
    }

    /// Arguments placed before the command, e.g. the script for `osascript`.
    pub fn with_leading_args(mut self, args: Vec<String>) -> Self {
        self.leading_args = args;
        self
    }

    /// `None` waits for as long as the adapter takes.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Runs the adapter once and returns the payload of its answer.
    ///
    /// The wait also covers a permission prompt the store may show on first
    /// use. On timeout the child is dropped, which kills it.
    pub async fn call(&self, args: &[String]) -> BridgeResult<Map<String, Value>> {
        let command = args.first().map(String::as_str).unwrap_or("");
        let child = tokio::process::Command::new(&self.program)
            .args(&self.leading_args)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|error| {
                BridgeError::Transport(format!(
                    "failed to spawn {}: {error}",
                    self.program.display()
                ))
            })?;

        let waited = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, child.wait_with_output())
                .await
                .map_err(|_| BridgeError::Timeout(timeout))?,
            None => child.wait_with_output().await,
        };
        let output = waited.map_err(|error| {
            BridgeError::Transport(format!(
                "failed waiting for {}: {error}",
                self.program.display()
            ))
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        tracing::debug!(
            program = %self.program.display(),
            command,
            status = ?output.status,
            "adapter finished"
        );

        match wire::last_line(&stdout).map(wire::parse_envelope) {
            Some(Ok(envelope)) => envelope.into_fields(),
            Some(Err(detail)) if output.status.success() => Err(BridgeError::Transport(format!(
                "malformed adapter response: {detail}"
            ))),
            _ if !output.status.success() => {
                let detail = if stderr.trim().is_empty() {
                    format!("{} exited with {}", self.program.display(), output.status)
                } else {
                    stderr.trim().to_string()
                };
                Err(wire::classify_failure(&detail, None))
            }
            _ => Err(BridgeError::Transport(format!(
                "{} produced no output",
                self.program.display()
            ))),
        }
    }

    pub async fn list(&self, scope: Scope) -> BridgeResult<Vec<TaskItem>> {
        let fields = self.call(&wire::list_args(scope)).await?;
        wire::decode_items(fields, &Local)
    }

    pub async fn create(&self, fields: &TaskFields) -> BridgeResult<TaskItem> {
        let payload = self.call(&wire::create_args(fields)).await?;
        wire::decode_item(payload, &Local)
    }

    pub async fn update(&self, id: &str, fields: &TaskFields) -> BridgeResult<TaskItem> {
        let payload = self.call(&wire::update_args(id, fields)).await?;
        wire::decode_item(payload, &Local)
    }

    pub async fn delete(&self, id: &str) -> BridgeResult<DeletedItem> {
        let payload = self.call(&wire::id_args("delete", id)).await?;
        wire::decode_deleted(payload)
    }

    pub async fn complete(&self, id: &str) -> BridgeResult<TaskItem> {
        let payload = self.call(&wire::id_args("complete", id)).await?;
        wire::decode_item(payload, &Local)
    }
}
