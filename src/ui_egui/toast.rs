// Transient feedback for the copy-log action.
//
// The copy button swaps its caption to the toast message and reverts once
// the toast expires.

use egui::Color32;
use std::time::{Duration, Instant};

/// How long a copy status replaces the button caption.
pub const REVERT_DELAY: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    pub fn text_color(&self, is_dark_theme: bool) -> Color32 {
        if is_dark_theme {
            match self {
                ToastLevel::Success => Color32::from_rgb(100, 220, 120),
                ToastLevel::Error => Color32::from_rgb(255, 120, 120),
            }
        } else {
            match self {
                ToastLevel::Success => Color32::from_rgb(30, 120, 50),
                ToastLevel::Error => Color32::from_rgb(180, 40, 40),
            }
        }
    }
}

/// A single transient status message
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: &'static str,
    pub level: ToastLevel,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn success(message: &'static str) -> Self {
        Self {
            message,
            level: ToastLevel::Success,
            created_at: Instant::now(),
            duration: REVERT_DELAY,
        }
    }

    pub fn error(message: &'static str) -> Self {
        Self {
            message,
            level: ToastLevel::Error,
            created_at: Instant::now(),
            duration: REVERT_DELAY,
        }
    }

    pub fn expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Time left before the caption reverts; drives repaint scheduling.
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.created_at.elapsed())
    }
}
