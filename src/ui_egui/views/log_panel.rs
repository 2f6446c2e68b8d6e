// Schedule log panel
//
// Read-only, time-sorted text log of every event plus the copy action.
// Copy feedback is a transient caption swap on the button.

use crate::services::clipboard;
use crate::services::schedule::ScheduleStore;
use crate::ui_egui::toast::Toast;

pub struct LogPanelView;

impl LogPanelView {
    pub fn show(ui: &mut egui::Ui, store: &ScheduleStore, copy_toast: &mut Option<Toast>) {
        ui.heading("Schedule log");
        ui.add_space(6.0);

        let text = store.log_text();
        egui::ScrollArea::vertical()
            .id_source("schedule_log")
            .max_height(220.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                ui.monospace(&text);
            });

        ui.add_space(8.0);
        if copy_toast.as_ref().is_some_and(Toast::expired) {
            *copy_toast = None;
        }
        let button = match copy_toast {
            Some(toast) => egui::Button::new(
                egui::RichText::new(toast.message)
                    .color(toast.level.text_color(ui.style().visuals.dark_mode)),
            ),
            None => egui::Button::new("Copy all"),
        };
        if ui.add(button).clicked() {
            *copy_toast = Some(match clipboard::copy_text(&text) {
                Ok(()) => Toast::success("Copied"),
                Err(err) => {
                    log::warn!("clipboard copy failed: {err}");
                    Toast::error("Copy failed")
                }
            });
        }
        if let Some(toast) = copy_toast {
            // Wake up again when the caption should revert.
            ui.ctx().request_repaint_after(toast.remaining());
        }
    }
}
