use crate::shared::number_format::format_money;
use contracts::domain::a001_case::{
    classify, recovery_probability, risk_score, CaseLine, Priority,
};
use leptos::prelude::*;

/// Display values for one case card
#[derive(Debug, Clone, PartialEq)]
struct CaseSummary {
    customer_name: String,
    amount: String,
    days_label: String,
    priority: Priority,
    risk: u8,
    recovery: u8,
    /// Line did not follow the backend format; amount and days are placeholders
    degraded: bool,
}

impl CaseSummary {
    fn from_line(line: &CaseLine) -> Self {
        let case = line.case();
        Self {
            customer_name: case.customer_name.clone(),
            amount: format_money(case.amount_due),
            days_label: days_label(case.days_overdue),
            priority: classify(case.days_overdue),
            risk: risk_score(case.amount_due, case.days_overdue),
            recovery: recovery_probability(case.amount_due, case.days_overdue),
            degraded: !line.is_matched(),
        }
    }
}

fn days_label(days: i64) -> String {
    if days == 1 {
        "1 day overdue".to_string()
    } else {
        format!("{} days overdue", days)
    }
}

#[component]
pub fn CaseCard(
    /// 1-based position in the list
    index: usize,
    line: CaseLine,
) -> impl IntoView {
    let summary = CaseSummary::from_line(&line);
    let card_class = format!(
        "case-card case-card--{}",
        summary.priority.tier.css_modifier()
    );
    let title = summary
        .degraded
        .then_some("Case details could not be read");

    view! {
        <div class=card_class title=title>
            <div class="case-card__header">
                <span class="case-card__index">{format!("#{}", index)}</span>
                <div>
                    <h3 class="case-card__name">{summary.customer_name}</h3>
                    <span class="case-card__priority">{summary.priority.label}</span>
                </div>
            </div>

            <div class="case-card__details">
                <div class="case-card__detail">
                    <span class="case-card__detail-label">"Amount Due"</span>
                    <span class="case-card__detail-value">{summary.amount}</span>
                </div>
                <div class="case-card__detail">
                    <span class="case-card__detail-label">"Overdue"</span>
                    <span class="case-card__detail-value">{summary.days_label}</span>
                </div>
                <div class="case-card__detail">
                    <span class="case-card__detail-label">"Risk"</span>
                    <span class="case-card__detail-value">{format!("{}/10", summary.risk)}</span>
                </div>
                <div class="case-card__detail">
                    <span class="case-card__detail-label">"Recovery"</span>
                    <span class="case-card__detail-value">{format!("{}%", summary.recovery)}</span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_case::{parse_case_line, PriorityTier};

    #[test]
    fn test_summary_from_matched_line() {
        let line = parse_case_line("Jane Doe - $1,234.50 (45 days overdue)");
        let summary = CaseSummary::from_line(&line);

        assert_eq!(summary.customer_name, "Jane Doe");
        assert_eq!(summary.amount, "$1,234.50");
        assert_eq!(summary.days_label, "45 days overdue");
        assert_eq!(summary.priority.tier, PriorityTier::Medium);
        assert_eq!(summary.risk, 4);
        assert_eq!(summary.recovery, 58);
        assert!(!summary.degraded);
    }

    #[test]
    fn test_summary_from_fallback_line() {
        let summary = CaseSummary::from_line(&parse_case_line("garbage-no-dash"));

        assert_eq!(summary.customer_name, "garbage-no-dash");
        assert_eq!(summary.amount, "$0.00");
        assert_eq!(summary.days_label, "0 days overdue");
        assert_eq!(summary.priority.tier, PriorityTier::Low);
        assert!(summary.degraded);
    }

    #[test]
    fn test_days_label() {
        assert_eq!(days_label(1), "1 day overdue");
        assert_eq!(days_label(61), "61 days overdue");
    }
}
