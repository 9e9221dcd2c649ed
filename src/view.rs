pub mod common;
pub mod panel;
