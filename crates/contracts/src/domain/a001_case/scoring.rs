//! Rule-based indicators shown next to a case.
//!
//! Both are additive tier scores over days overdue and the amount owed.
//! Negative inputs count as zero.

const RISK_MIN: i64 = 1;
const RISK_MAX: i64 = 10;
const RISK_DAYS_STEP: i64 = 15;
const RISK_AMOUNT_STEP: f64 = 10_000.0;

const RECOVERY_BASE: i64 = 80;
const RECOVERY_MIN: i64 = 5;
const RECOVERY_MAX: i64 = 95;
const RECOVERY_DAYS_STEP: i64 = 2;
const RECOVERY_AMOUNT_STEP: f64 = 5_000.0;

/// Number of whole `step`s in `amount`; zero for negative or NaN amounts
fn amount_steps(amount: f64, step: f64) -> i64 {
    if amount > 0.0 {
        (amount / step).floor() as i64
    } else {
        0
    }
}

/// Risk score in `1..=10`: one point per 15 days overdue and per 10 000 owed
pub fn risk_score(amount: f64, days_overdue: i64) -> u8 {
    let score = RISK_MIN
        .saturating_add(days_overdue.max(0) / RISK_DAYS_STEP)
        .saturating_add(amount_steps(amount, RISK_AMOUNT_STEP));

    score.clamp(RISK_MIN, RISK_MAX) as u8
}

/// Estimated recovery probability in percent, `5..=95`
pub fn recovery_probability(amount: f64, days_overdue: i64) -> u8 {
    let probability = RECOVERY_BASE
        .saturating_sub(days_overdue.max(0) / RECOVERY_DAYS_STEP)
        .saturating_sub(amount_steps(amount, RECOVERY_AMOUNT_STEP));

    probability.clamp(RECOVERY_MIN, RECOVERY_MAX) as u8
}
