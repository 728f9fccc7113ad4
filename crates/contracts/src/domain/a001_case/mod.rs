//! Overdue-debt case: parsing of the backend's display line, priority
//! classification and the scoring heuristics shown next to each case.

pub mod parser;
pub mod priority;
pub mod scoring;

pub use parser::{parse_case_line, CaseLine, ParsedCase};
pub use priority::{classify, Priority, PriorityTier};
pub use scoring::{recovery_probability, risk_score};
