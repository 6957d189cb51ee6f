//! Bridge between natural-language agents and Apple Reminders.
//!
//! One process handles one command: flags are turned into a
//! [`CommandRequest`], the [`Dispatcher`] validates it and makes a single
//! call through a [`TaskStoreClient`], and the result is printed as one JSON
//! line.

pub mod cli;
pub mod config;
pub mod dates;
pub mod dispatcher;
pub mod error;
pub mod locale;
pub mod logging;
pub mod model;
pub mod store;

pub use config::{BridgeConfig, ConfigError};
pub use dispatcher::{DispatchFailure, Dispatcher, Response};
pub use error::{BridgeError, BridgeResult};
pub use locale::{Locale, LocaleTable};
pub use model::{Command, CommandRequest, TaskItem};
pub use store::{default_transports, TaskStoreClient, Transports};
