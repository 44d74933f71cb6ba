pub mod home;
pub mod members;
