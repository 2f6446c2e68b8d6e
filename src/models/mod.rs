// Data models for the day grid

pub mod event;
pub mod grid;
