//! Custom perception rules: condition parsing plus content templating.
//!
//! Rules are evaluated in input order; a broken rule logs a warning and
//! skips, never aborting the batch.

pub mod condition;
pub mod template;

pub use condition::{CmpOp, Condition};

use crate::config::Verbosity;
use crate::types::{PerceptionRule, RequestContext};

/// Separator between triggered rule outputs.
const RULE_SEPARATOR: &str = " | ";

/// Evaluate every rule against the context and join the triggered
/// contents. Empty string when nothing triggers.
pub fn evaluate(rules: &[PerceptionRule], ctx: &RequestContext, verbosity: &Verbosity) -> String {
    let mut parts: Vec<String> = Vec::new();

    for rule in rules {
        if !rule.enabled {
            verbosity.debug(&format!("skipping disabled rule: {}", rule.name()));
            continue;
        }

        let Some(raw_condition) = rule.condition.as_deref() else {
            verbosity.warning(&format!("rule '{}' has no condition, skipped", rule.name()));
            continue;
        };
        let Some(content) = rule.content.as_deref() else {
            verbosity.warning(&format!("rule '{}' has no content, skipped", rule.name()));
            continue;
        };

        if Condition::parse(raw_condition).evaluate(ctx) {
            let rendered = template::render(content, ctx);
            if !rendered.is_empty() {
                verbosity.debug(&format!("rule triggered: {} -> {rendered}", rule.name()));
                parts.push(rendered);
            }
        } else {
            verbosity.debug(&format!("rule not triggered: {}", rule.name()));
        }
    }

    parts.join(RULE_SEPARATOR)
}
