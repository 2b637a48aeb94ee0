//! Rule-based emotion and tone classification.
//!
//! Deterministic keyword/emoji scoring — the same text always yields the
//! same label. No tokenization, no learned weights.

pub mod emotion;
pub mod tone;
