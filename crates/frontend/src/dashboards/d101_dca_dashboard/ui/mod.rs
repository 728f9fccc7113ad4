mod case_card;
mod dashboard;

pub use case_card::CaseCard;
pub use dashboard::DcaDashboard;
