mod create_case_form;
mod dashboard;

pub use create_case_form::CreateCaseForm;
pub use dashboard::AdminDashboard;
