pub mod config;
pub mod construction;
pub mod geometry;
pub mod motion;
pub mod view;
