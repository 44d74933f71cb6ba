pub mod magic_link_button;
pub mod reset_dialog;
pub mod status_badges;
