//! Intervention suggestions shown alongside an AI plan.

use serde::Serialize;
use std::fmt;

/// The retention levers the advisor knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InterventionKind {
    ContractUpgrade,
    BundleSupport,
    LoyaltyDiscount,
}

impl InterventionKind {
    /// Evaluation order.
    pub const ALL: [InterventionKind; 3] = [
        InterventionKind::ContractUpgrade,
        InterventionKind::BundleSupport,
        InterventionKind::LoyaltyDiscount,
    ];

    /// Stable 1-based identifier, equal to the rule's position.
    pub fn id(&self) -> u8 {
        match self {
            InterventionKind::ContractUpgrade => 1,
            InterventionKind::BundleSupport => 2,
            InterventionKind::LoyaltyDiscount => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            InterventionKind::ContractUpgrade => "Upgrade Contract",
            InterventionKind::BundleSupport => "Bundle Support Services",
            InterventionKind::LoyaltyDiscount => "Loyalty Discount",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            InterventionKind::ContractUpgrade => {
                "Moving to a 1-year commit significantly stabilizes risk."
            }
            InterventionKind::BundleSupport => {
                "Adding Tech Support & Security increases stickiness."
            }
            InterventionKind::LoyaltyDiscount => {
                "Apply a 15% discount to mitigate high billing sensitivity."
            }
        }
    }
}

impl fmt::Display for InterventionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One suggested intervention, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterventionSuggestion {
    id: u8,
    kind: InterventionKind,
    title: &'static str,
    description: &'static str,
}

impl InterventionSuggestion {
    pub fn new(kind: InterventionKind) -> Self {
        Self {
            id: kind.id(),
            kind,
            title: kind.title(),
            description: kind.description(),
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn kind(&self) -> InterventionKind {
        self.kind
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn description(&self) -> &'static str {
        self.description
    }
}

impl From<InterventionKind> for InterventionSuggestion {
    fn from(kind: InterventionKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_evaluation_order() {
        let ids: Vec<u8> = InterventionKind::ALL.iter().map(|k| k.id()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn suggestion_serializes_for_display() {
        let json = serde_json::to_value(InterventionSuggestion::new(InterventionKind::LoyaltyDiscount))
            .unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["kind"], "loyalty_discount");
        assert_eq!(json["title"], "Loyalty Discount");
    }
}
