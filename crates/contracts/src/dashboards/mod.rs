pub mod d100_admin_dashboard;
pub mod d101_dca_dashboard;
