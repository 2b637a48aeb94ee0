//! sentio-core — situational perception middleware for an LLM request
//! pipeline.
//!
//! One inbound message event triggers one synchronous assembly pass that
//! prepends a bracketed context annotation (time, holiday/workday,
//! platform, custom rules, emotion/tone) to the outgoing prompt. All
//! classification is deterministic and rule-based; no state survives a
//! pass except the read-only lexicons and configuration.

pub mod classify;
pub mod config;
pub mod holiday;
pub mod lexicon;
pub mod matcher;
pub mod perception;
pub mod rules;
pub mod types;

pub use config::{LogLevel, SentioCfg};
pub use perception::Perceptor;
pub use types::{MessageEvent, MessageType, ProviderRequest, Segment};
