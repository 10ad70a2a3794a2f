// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;         // file config + runtime assembly
pub mod errors;         // error handling
pub mod event;          // job lifecycle events
pub mod extract;        // metadata + enrichment
pub mod formatters;     // wire formats
pub mod observability;
pub mod record;         // log records + message lines
pub mod redaction;      // sensitive argument filtering
pub mod sink;           // log destinations
pub mod subscriber;     // event -> record -> line
pub mod traits;         // unified abstractions
pub mod utils;

pub use config::{RuntimeBuilder, SubscriberConfig};
pub use event::{EventKind, EventPayload, JobArgument, JobRef, LifecycleEvent};
pub use record::LogRecord;
pub use subscriber::JobSubscriber;
