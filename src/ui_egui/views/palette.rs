use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Colors for the day grid, derived from the current egui theme.
#[derive(Clone, Copy)]
pub(crate) struct DayGridPalette {
    pub grid_bg: Color32,
    pub hour_line: Color32,
    pub half_hour_line: Color32,
    pub border: Color32,
    pub gutter_text: Color32,
    pub block_fill: Color32,
    pub block_border: Color32,
    pub selected_fill: Color32,
    pub selected_border: Color32,
    pub block_text: Color32,
    pub block_time_text: Color32,
}

impl DayGridPalette {
    pub fn from_ui(ui: &egui::Ui) -> Self {
        let dark_mode = ui.style().visuals.dark_mode;
        if dark_mode {
            Self {
                grid_bg: Color32::from_gray(32),
                hour_line: Color32::from_gray(70),
                half_hour_line: Color32::from_gray(48),
                border: Color32::from_gray(80),
                gutter_text: Color32::GRAY,
                block_fill: with_alpha(Color32::from_rgb(52, 110, 170), 210),
                block_border: Color32::from_rgb(90, 150, 210),
                selected_fill: with_alpha(Color32::from_rgb(70, 135, 200), 235),
                selected_border: Color32::from_rgb(160, 205, 255),
                block_text: Color32::WHITE,
                block_time_text: Color32::from_gray(215),
            }
        } else {
            Self {
                grid_bg: Color32::from_gray(250),
                hour_line: Color32::from_gray(200),
                half_hour_line: Color32::from_gray(228),
                border: Color32::from_gray(190),
                gutter_text: Color32::DARK_GRAY,
                block_fill: with_alpha(Color32::from_rgb(120, 175, 230), 220),
                block_border: Color32::from_rgb(70, 130, 190),
                selected_fill: with_alpha(Color32::from_rgb(95, 155, 220), 240),
                selected_border: Color32::from_rgb(30, 90, 160),
                block_text: Color32::from_gray(25),
                block_time_text: Color32::from_gray(60),
            }
        }
    }
}
