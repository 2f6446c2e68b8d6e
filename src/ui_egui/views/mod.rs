pub mod day_grid;
pub mod log_panel;
mod palette;
pub mod side_panel;
