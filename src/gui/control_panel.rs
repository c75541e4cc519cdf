//! Control Panel Widget
//! Left side panel with branding, date-range inputs and status readouts.

use crate::config::AppConfig;
use crate::data::DateRange;
use egui::{Color32, RichText, TextureHandle};
use std::path::PathBuf;

/// Left side control panel with the date-range selection and info blocks.
pub struct ControlPanel {
    pub title: String,
    pub operating_hours: String,
    pub contact: String,
    pub data_dir: PathBuf,
    pub logo: Option<TextureHandle>,

    pub start_input: String,
    pub end_input: String,
    pub bounds: Option<DateRange>,

    pub filtered_days: usize,
    pub filtered_hours: usize,

    pub progress: f32,
    pub status: String,
}

impl ControlPanel {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            title: config.title.clone(),
            operating_hours: config.operating_hours.clone(),
            contact: config.contact.clone(),
            data_dir: config.data_dir.clone(),
            logo: None,
            start_input: String::new(),
            end_input: String::new(),
            bounds: None,
            filtered_days: 0,
            filtered_hours: 0,
            progress: 0.0,
            status: "Loading data...".to_string(),
        }
    }

    /// Record the dataset bounds and reset the inputs to the full range.
    pub fn set_bounds(&mut self, bounds: DateRange) {
        self.bounds = Some(bounds);
        self.reset_inputs();
    }

    /// Reset the date inputs to the full dataset range.
    pub fn reset_inputs(&mut self) {
        if let Some(bounds) = self.bounds {
            self.start_input = bounds.start.to_string();
            self.end_input = bounds.end.to_string();
        } else {
            self.start_input.clear();
            self.end_input.clear();
        }
    }

    /// Set progress and status
    pub fn set_progress(&mut self, progress: f32, status: &str) {
        self.progress = progress;
        self.status = status.to_string();
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Branding
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            if let Some(logo) = &self.logo {
                ui.add(egui::Image::new(logo).max_width(260.0));
                ui.add_space(5.0);
            }
            ui.label(
                RichText::new(format!("🚴 {}", self.title))
                    .size(20.0)
                    .color(Color32::from_rgb(140, 41, 129)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let dir_text = self
                        .data_dir
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| self.data_dir.display().to_string());
                    ui.label(RichText::new(dir_text).size(12.0));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            action = ControlPanelAction::BrowseData;
                        }
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Date Range Section =====
        ui.label(RichText::new("📅 Date Range").size(14.0).strong());
        ui.add_space(5.0);

        if let Some(bounds) = self.bounds {
            ui.label(
                RichText::new(format!("Data covers {} to {}", bounds.start, bounds.end))
                    .size(11.0)
                    .color(Color32::GRAY),
            );
            ui.add_space(5.0);
        }

        let label_width = 45.0;
        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("From:"));
            ui.add(
                egui::TextEdit::singleline(&mut self.start_input)
                    .hint_text("YYYY-MM-DD")
                    .desired_width(120.0),
            );
        });
        ui.add_space(5.0);
        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("To:"));
            ui.add(
                egui::TextEdit::singleline(&mut self.end_input)
                    .hint_text("YYYY-MM-DD")
                    .desired_width(120.0),
            );
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.add_enabled_ui(self.bounds.is_some(), |ui| {
                if ui.button("✔ Apply").clicked() {
                    action = ControlPanelAction::ApplyRange;
                }
                if ui.button("↺ Reset").clicked() {
                    action = ControlPanelAction::ResetRange;
                }
            });
        });

        ui.add_space(8.0);

        // Filtered-count readout
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.label(
                    RichText::new(format!(
                        "{} daily / {} hourly rows in range",
                        self.filtered_days, self.filtered_hours
                    ))
                    .size(11.0),
                );
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Info Blocks =====
        ui.label(RichText::new("Operating Hours").strong());
        ui.label(&self.operating_hours);
        ui.add_space(8.0);
        ui.label(RichText::new("Contact").strong());
        ui.label(&self.contact);

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Progress Section =====
        ui.add(
            egui::ProgressBar::new(self.progress / 100.0)
                .show_percentage()
                .animate(self.progress > 0.0 && self.progress < 100.0),
        );

        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Complete") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseData,
    ApplyRange,
    ResetRange,
}
