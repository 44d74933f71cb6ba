pub mod panel;
pub mod password;
pub mod repository;
pub mod view_model;

pub use panel::MemberAccountPage;
