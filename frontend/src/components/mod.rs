pub mod dialog;
pub mod error;
pub mod layout;
pub mod toaster;
