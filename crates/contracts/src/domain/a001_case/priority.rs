use serde::{Deserialize, Serialize};

/// Days overdue from which a case is high priority
pub const HIGH_PRIORITY_DAYS: i64 = 60;
/// Days overdue from which a case is medium priority
pub const MEDIUM_PRIORITY_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriorityTier {
    Low,
    Medium,
    High,
}

impl PriorityTier {
    pub fn label(&self) -> &'static str {
        match self {
            PriorityTier::Low => "Low Priority",
            PriorityTier::Medium => "Medium Priority",
            PriorityTier::High => "High Priority",
        }
    }

    /// BEM modifier used by the case card, e.g. `case-card--high`
    pub fn css_modifier(&self) -> &'static str {
        match self {
            PriorityTier::Low => "low",
            PriorityTier::Medium => "medium",
            PriorityTier::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Priority {
    pub tier: PriorityTier,
    pub label: &'static str,
}

/// Classify a case by days overdue. Defined for every `i64`.
pub fn classify(days_overdue: i64) -> Priority {
    let tier = if days_overdue >= HIGH_PRIORITY_DAYS {
        PriorityTier::High
    } else if days_overdue >= MEDIUM_PRIORITY_DAYS {
        PriorityTier::Medium
    } else {
        PriorityTier::Low
    };

    Priority {
        tier,
        label: tier.label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(classify(29).tier, PriorityTier::Low);
        assert_eq!(classify(30).tier, PriorityTier::Medium);
        assert_eq!(classify(59).tier, PriorityTier::Medium);
        assert_eq!(classify(60).tier, PriorityTier::High);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(classify(-5).tier, PriorityTier::Low);
        assert_eq!(classify(i64::MIN).tier, PriorityTier::Low);
        assert_eq!(classify(0).tier, PriorityTier::Low);
        assert_eq!(classify(i64::MAX).tier, PriorityTier::High);
    }

    #[test]
    fn test_labels() {
        assert_eq!(classify(90).label, "High Priority");
        assert_eq!(classify(45).label, "Medium Priority");
        assert_eq!(classify(1).label, "Low Priority");
        assert_eq!(PriorityTier::High.css_modifier(), "high");
    }
}
