//! Chart Viewer Widget
//! Central scrollable panel rendering the fixed dashboard chart sequence.

use crate::charts::ChartPlotter;
use crate::data::DateRange;
use crate::stats::DashboardStats;
use egui::{Color32, RichText, ScrollArea};

const SECTION_SPACING: f32 = 18.0;

/// Everything the viewer needs for one filtered selection.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub range: DateRange,
    pub day_rows: usize,
    pub hour_rows: usize,
}

/// Scrollable central panel with the metric readout, charts and closing text.
#[derive(Default)]
pub struct ChartViewer {
    pub data: Option<DashboardData>,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data(&mut self, data: DashboardData) {
        self.data = Some(data);
    }

    /// Draw the dashboard page.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        let Some(data) = &self.data else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(5.0);
                ui.label(RichText::new("Bike Rental Dashboard 🚴").size(26.0).strong());
                ui.label(
                    RichText::new("Bike Rental Analysis")
                        .size(15.0)
                        .color(Color32::GRAY),
                );
                ui.add_space(SECTION_SPACING);

                // Total-rentals metric
                egui::Frame::none()
                    .fill(ui.visuals().widgets.noninteractive.bg_fill)
                    .rounding(8.0)
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        ui.label(RichText::new("Total Sharing Bike").size(13.0));
                        ui.label(
                            RichText::new(format_count(data.stats.total_rentals))
                                .size(28.0)
                                .strong(),
                        );
                        ui.label(
                            RichText::new(format!(
                                "{} to {}  ·  {} daily / {} hourly rows",
                                data.range.start, data.range.end, data.day_rows, data.hour_rows
                            ))
                            .size(11.0)
                            .color(Color32::GRAY),
                        );
                    });
                ui.add_space(SECTION_SPACING);

                Self::section(ui, "Daily Rental Trends", |ui| {
                    ChartPlotter::draw_daily_trend(ui, &data.stats.daily_totals);
                });

                Self::section(ui, "The Effect of Weather Conditions on Rentals", |ui| {
                    ChartPlotter::draw_weather_boxplot(ui, &data.stats.weather_boxes);
                });

                Self::section(ui, "Rental Patterns: Weekdays vs Weekends", |ui| {
                    ChartPlotter::draw_hourly_pattern(
                        ui,
                        &data.stats.workday_hourly,
                        &data.stats.weekend_hourly,
                    );
                });

                Self::section(ui, "Time with Highest and Lowest Rentals", |ui| {
                    ChartPlotter::draw_hourly_avg(ui, &data.stats.hourly_means);
                });

                Self::section(ui, "Number of Rentals Based on Time Span", |ui| {
                    ChartPlotter::draw_daypart_bar(ui, &data.stats.daypart_means);
                });

                Self::section(ui, "Average Rentals per Season", |ui| {
                    ChartPlotter::draw_season_bar(ui, &data.stats.season_means);
                });

                // Closing text panel
                egui::Frame::none()
                    .fill(ui.visuals().widgets.noninteractive.bg_fill)
                    .rounding(8.0)
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        ui.label(
                            "This dashboard presents an in-depth analysis of bicycle rental \
                             patterns based on time, weather, and daily habits. Use the date \
                             range in the sidebar to narrow every chart to a period of interest.",
                        );
                    });
                ui.add_space(SECTION_SPACING);
            });
    }

    fn section(ui: &mut egui::Ui, title: &str, draw: impl FnOnce(&mut egui::Ui)) {
        ui.label(RichText::new(title).size(17.0).strong());
        ui.add_space(6.0);
        draw(ui);
        ui.add_space(SECTION_SPACING);
    }
}

/// Format a count with thousands separators.
fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::format_count;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(985), "985");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(3292679), "3,292,679");
    }
}
