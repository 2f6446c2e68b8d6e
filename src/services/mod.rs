// Services for the day grid

pub mod clipboard;
pub mod schedule;
