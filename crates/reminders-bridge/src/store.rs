//! Boundary to the Reminders store.
//!
//! Two transports implement [`TaskStoreClient`]: the scripting transport
//! drives Reminders through `osascript` and cannot express repeat rules, the
//! native transport runs the EventKit helper and can. Which one serves a call
//! is decided by [`TransportKind::for_fields`].

pub mod native;
pub mod process;
pub mod scripting;
pub mod wire;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::BridgeConfig;
use crate::error::BridgeResult;
use crate::model::{DeletedItem, Scope, TaskFields, TaskItem};

pub use native::RecurrenceTransport;
pub use scripting::SimpleTransport;

/// Request/response access to the task store. One call per invocation.
#[async_trait]
pub trait TaskStoreClient: Send + Sync {
    fn name(&self) -> &'static str;

    async fn list(&self, scope: Scope) -> BridgeResult<Vec<TaskItem>>;
    async fn create(&self, fields: &TaskFields) -> BridgeResult<TaskItem>;
    async fn update(&self, id: &str, fields: &TaskFields) -> BridgeResult<TaskItem>;
    async fn delete(&self, id: &str) -> BridgeResult<DeletedItem>;
    async fn complete(&self, id: &str) -> BridgeResult<TaskItem>;
}

pub type SharedStore = Arc<dyn TaskStoreClient>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Simple,
    Recurrence,
}

impl TransportKind {
    /// A requested recurrence rule always needs the recurrence transport.
    pub fn for_fields(fields: &TaskFields) -> Self {
        if fields.recurrence.is_some() {
            TransportKind::Recurrence
        } else {
            TransportKind::Simple
        }
    }
}

/// Both transports, picked per call.
#[derive(Clone)]
pub struct Transports {
    simple: SharedStore,
    recurrence: SharedStore,
}

impl Transports {
    pub fn new(simple: SharedStore, recurrence: SharedStore) -> Self {
        Self { simple, recurrence }
    }

    pub fn get(&self, kind: TransportKind) -> &dyn TaskStoreClient {
        match kind {
            TransportKind::Simple => self.simple.as_ref(),
            TransportKind::Recurrence => self.recurrence.as_ref(),
        }
    }
}

pub fn default_transports(config: &BridgeConfig) -> Transports {
    Transports::new(
        Arc::new(SimpleTransport::new(&config.osascript_path, config.timeout)),
        Arc::new(RecurrenceTransport::new(&config.helper_path, config.timeout)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Frequency, Recurrence};

    #[test]
    fn test_recurrence_selects_recurrence_transport() {
        let fields = TaskFields {
            title: Some("Standup".to_string()),
            recurrence: Some(Recurrence {
                frequency: Frequency::Daily,
                interval: 1,
                end: None,
            }),
            ..TaskFields::default()
        };
        assert_eq!(TransportKind::for_fields(&fields), TransportKind::Recurrence);
    }

    #[test]
    fn test_plain_fields_select_simple_transport() {
        let fields = TaskFields {
            title: Some("Milk".to_string()),
            note: Some(String::new()),
            ..TaskFields::default()
        };
        assert_eq!(TransportKind::for_fields(&fields), TransportKind::Simple);
    }

    #[test]
    fn test_default_transports_are_named() {
        let transports = default_transports(&BridgeConfig::default());
        assert_eq!(transports.get(TransportKind::Simple).name(), "scripting");
        assert_eq!(transports.get(TransportKind::Recurrence).name(), "native");
    }
}
