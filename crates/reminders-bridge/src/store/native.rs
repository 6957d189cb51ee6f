//! Native transport: the EventKit helper binary.
//!
//! The helper is the only way to attach a repeat rule, and it replaces the
//! due-date alarm (rather than adding a second one) when `--due` changes.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::BridgeResult;
use crate::model::{DeletedItem, Scope, TaskFields, TaskItem};

use super::process::AdapterProcess;
use super::TaskStoreClient;

#[derive(Debug, Clone)]
pub struct RecurrenceTransport {
    process: AdapterProcess,
}

impl RecurrenceTransport {
    pub fn new(helper: impl AsRef<Path>, timeout: Option<Duration>) -> Self {
        Self {
            process: AdapterProcess::new(helper).with_timeout(timeout),
        }
    }
}

#[async_trait]
impl TaskStoreClient for RecurrenceTransport {
    fn name(&self) -> &'static str {
        "native"
    }

    async fn list(&self, scope: Scope) -> BridgeResult<Vec<TaskItem>> {
        self.process.list(scope).await
    }

    async fn create(&self, fields: &TaskFields) -> BridgeResult<TaskItem> {
        self.process.create(fields).await
    }

    async fn update(&self, id: &str, fields: &TaskFields) -> BridgeResult<TaskItem> {
        self.process.update(id, fields).await
    }

    async fn delete(&self, id: &str) -> BridgeResult<DeletedItem> {
        self.process.delete(id).await
    }

    async fn complete(&self, id: &str) -> BridgeResult<TaskItem> {
        self.process.complete(id).await
    }
}
