// Event detail panel
//
// Edits the active record's title and purpose, shows the start/end
// readouts, and hosts the delete action. With no active record the panel
// degrades to disabled, empty fields.

use crate::models::grid;
use crate::services::schedule::ScheduleStore;

pub struct SidePanelView;

impl SidePanelView {
    pub fn show(ui: &mut egui::Ui, store: &mut ScheduleStore, focus_title: &mut bool) {
        ui.heading("Event details");
        ui.add_space(6.0);

        let has_active = store.active_event().is_some();
        if let Some(event) = store.active_event_mut() {
            ui.label("Title");
            let title_response =
                ui.add(egui::TextEdit::singleline(&mut event.title).desired_width(f32::INFINITY));
            if *focus_title {
                title_response.request_focus();
                *focus_title = false;
            }

            ui.add_space(4.0);
            ui.label("Purpose");
            ui.add(egui::TextEdit::singleline(&mut event.purpose).desired_width(f32::INFINITY));

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label("Start:");
                ui.monospace(grid::time_label(event.start));
                ui.separator();
                ui.label("End:");
                ui.monospace(grid::time_label(event.end));
            });
        } else {
            // Keep the layout stable while nothing is selected.
            *focus_title = false;
            let mut empty = String::new();
            ui.label("Title");
            ui.add_enabled(
                false,
                egui::TextEdit::singleline(&mut empty).desired_width(f32::INFINITY),
            );
            ui.add_space(4.0);
            ui.label("Purpose");
            ui.add_enabled(
                false,
                egui::TextEdit::singleline(&mut empty).desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label("Start:");
                ui.monospace("-");
                ui.separator();
                ui.label("End:");
                ui.monospace("-");
            });
        }

        ui.add_space(8.0);
        if ui
            .add_enabled(has_active, egui::Button::new("Delete event"))
            .clicked()
        {
            if let Some(id) = store.active_id() {
                log::debug!("deleting event {id}");
                store.delete(id);
            }
        }
    }
}
