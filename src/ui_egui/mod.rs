mod app;
pub mod drag;
pub mod resize;
pub mod toast;
pub mod views;

pub use app::PlannerApp;
