//! Heuristic advisor - rule-based retention plan for a scored profile.
//!
//! Rules run once, in a fixed order, against the baseline profile. Each rule
//! sees the mutations of the rules before it.

mod rules;
mod suggestion;

pub use rules::{advise, AdvisorPlan, AdvisorRule, LOYALTY_DISCOUNT_FACTOR, LOYALTY_DISCOUNT_THRESHOLD, RULES};
pub use suggestion::{InterventionKind, InterventionSuggestion};
