pub mod dto;

pub use dto::{CaseRecord, CreateCaseRequest, CreateCaseResponse, DashboardStats};
