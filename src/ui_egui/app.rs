// Top-level application state
//
// One struct owns the grid config, the event store, and the in-flight
// gesture; the eframe::App impl is a thin delegate. No state lives in
// egui memory or module globals.

use crate::models::grid::GridSpec;
use crate::services::schedule::ScheduleStore;
use crate::ui_egui::drag::DragController;
use crate::ui_egui::toast::Toast;
use crate::ui_egui::views::day_grid::DayGridView;
use crate::ui_egui::views::log_panel::LogPanelView;
use crate::ui_egui::views::side_panel::SidePanelView;

const SIDE_PANEL_WIDTH: f32 = 300.0;

pub struct PlannerApp {
    grid: GridSpec,
    store: ScheduleStore,
    drag: DragController,
    /// Transient copy-status feedback for the log panel.
    copy_toast: Option<Toast>,
    /// Set when a plain-click creation wants the title field focused.
    focus_title: bool,
}

impl PlannerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            grid: GridSpec::default(),
            store: ScheduleStore::new(),
            drag: DragController::new(),
            copy_toast: None,
            focus_title: false,
        }
    }

    fn handle_update(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("inspector")
            .resizable(false)
            .exact_width(SIDE_PANEL_WIDTH)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                SidePanelView::show(ui, &mut self.store, &mut self.focus_title);
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);
                LogPanelView::show(ui, &self.store, &mut self.copy_toast);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(8.0);
                    if DayGridView::show(ui, &self.grid, &mut self.store, &mut self.drag) {
                        self.focus_title = true;
                    }
                });
        });
    }
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_update(ctx);
    }
}
