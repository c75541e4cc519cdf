//! Chart Plotter Module
//! Draws the dashboard's fixed chart sequence using egui_plot.

use crate::data::{Daypart, Season, Weather};
use crate::stats::BoxStats;
use chrono::{Days, NaiveDate};
use egui::Color32;
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Line, Plot, PlotPoints, Points};

/// Color of the daily trend line.
pub const TREND_COLOR: Color32 = Color32::from_rgb(140, 41, 129);
/// Working-day series in the hourly pattern chart.
pub const WORKDAY_COLOR: Color32 = Color32::from_rgb(255, 69, 0);
/// Weekend/holiday series in the hourly pattern chart.
pub const WEEKEND_COLOR: Color32 = Color32::from_rgb(255, 160, 122);

/// Magma-style palette cycled across categorical bars and boxes.
pub const PALETTE: [Color32; 4] = [
    Color32::from_rgb(59, 15, 112),   // Dark purple
    Color32::from_rgb(140, 41, 129),  // Purple
    Color32::from_rgb(222, 73, 104),  // Pink red
    Color32::from_rgb(254, 159, 109), // Light orange
];

const CHART_HEIGHT: f32 = 260.0;

/// Creates the dashboard visualizations using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn palette_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Daily rental trend: one point per day, x axis labeled with dates.
    pub fn draw_daily_trend(ui: &mut egui::Ui, daily_totals: &[(NaiveDate, u64)]) {
        let Some(&(start_date, _)) = daily_totals.first() else {
            return;
        };

        let points: Vec<[f64; 2]> = daily_totals
            .iter()
            .map(|&(date, total)| {
                let x = (date - start_date).num_days() as f64;
                [x, total as f64]
            })
            .collect();

        Plot::new("daily_trend")
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .x_axis_label("Date")
            .y_axis_label("Number of Rentals")
            .x_axis_formatter(move |mark, _range| {
                let offset = mark.value.round();
                if offset < 0.0 {
                    return String::new();
                }
                start_date
                    .checked_add_days(Days::new(offset as u64))
                    .map(|d| d.format("%b %d '%y").to_string())
                    .unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from_iter(points.iter().copied()))
                        .color(TREND_COLOR)
                        .width(1.5)
                        .name("Daily rentals"),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(points.iter().copied()))
                        .radius(2.0)
                        .color(TREND_COLOR),
                );
            });
    }

    /// Daily rentals distribution per weather condition.
    pub fn draw_weather_boxplot(ui: &mut egui::Ui, boxes: &[(Weather, BoxStats)]) {
        let x_labels: Vec<String> = boxes
            .iter()
            .map(|(weather, _)| weather.label().to_string())
            .collect();

        Plot::new("weather_boxplot")
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .x_axis_label("Weather Condition")
            .y_axis_label("Number of Rentals")
            .x_axis_formatter(move |mark, _range| category_label(mark.value, &x_labels))
            .show(ui, |plot_ui| {
                for (i, (weather, stats)) in boxes.iter().enumerate() {
                    let color = Self::palette_color(i);
                    let box_elem = BoxElem::new(
                        i as f64,
                        BoxSpread::new(
                            stats.whisker_low,
                            stats.q1,
                            stats.median,
                            stats.q3,
                            stats.whisker_high,
                        ),
                    )
                    .box_width(0.5)
                    .fill(color.gamma_multiply(0.3))
                    .stroke(egui::Stroke::new(1.5, color));

                    plot_ui.box_plot(BoxPlot::new(vec![box_elem]).name(weather.label()));
                }
            });
    }

    /// Mean rentals per hour, working days vs. weekends.
    pub fn draw_hourly_pattern(ui: &mut egui::Ui, workday: &[f64; 24], weekend: &[f64; 24]) {
        Plot::new("hourly_pattern")
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .x_axis_label("Hours of the day")
            .y_axis_label("Number of Rentals")
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                let workday_points: PlotPoints = workday
                    .iter()
                    .enumerate()
                    .map(|(h, &v)| [h as f64, v])
                    .collect();
                let weekend_points: PlotPoints = weekend
                    .iter()
                    .enumerate()
                    .map(|(h, &v)| [h as f64, v])
                    .collect();

                plot_ui.line(
                    Line::new(workday_points)
                        .color(WORKDAY_COLOR)
                        .width(2.0)
                        .name("Working days"),
                );
                plot_ui.line(
                    Line::new(weekend_points)
                        .color(WEEKEND_COLOR)
                        .width(2.0)
                        .name("Weekends"),
                );
            });
    }

    /// Average rentals for each hour of the day.
    pub fn draw_hourly_avg(ui: &mut egui::Ui, means: &[f64; 24]) {
        Plot::new("hourly_avg")
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .x_axis_label("Hours of the day")
            .y_axis_label("Average Rental Amount")
            .show(ui, |plot_ui| {
                let bars: Vec<Bar> = means
                    .iter()
                    .enumerate()
                    .map(|(h, &v)| {
                        Bar::new(h as f64, v)
                            .width(0.8)
                            .fill(Self::palette_color(h / 6))
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars).name("Average rentals"));
            });
    }

    /// Average rentals per daypart.
    pub fn draw_daypart_bar(ui: &mut egui::Ui, means: &[(Daypart, f64)]) {
        let x_labels: Vec<String> = means
            .iter()
            .map(|(daypart, _)| daypart.label().to_string())
            .collect();

        Plot::new("daypart_bar")
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .x_axis_label("Time of day")
            .y_axis_label("Average Rental Amount")
            .x_axis_formatter(move |mark, _range| category_label(mark.value, &x_labels))
            .show(ui, |plot_ui| {
                let bars: Vec<Bar> = means
                    .iter()
                    .enumerate()
                    .map(|(i, &(_, v))| {
                        Bar::new(i as f64, v).width(0.6).fill(Self::palette_color(i))
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars));
            });
    }

    /// Average daily rentals per season.
    pub fn draw_season_bar(ui: &mut egui::Ui, means: &[(Season, f64)]) {
        let x_labels: Vec<String> = means
            .iter()
            .map(|(season, _)| season.label().to_string())
            .collect();

        Plot::new("season_bar")
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .x_axis_label("Season")
            .y_axis_label("Average Rental Amount")
            .x_axis_formatter(move |mark, _range| category_label(mark.value, &x_labels))
            .show(ui, |plot_ui| {
                let bars: Vec<Bar> = means
                    .iter()
                    .enumerate()
                    .map(|(i, &(_, v))| {
                        Bar::new(i as f64, v).width(0.6).fill(Self::palette_color(i))
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars));
            });
    }
}

/// Label for a categorical axis: whole marks inside the label range only.
fn category_label(value: f64, labels: &[String]) -> String {
    let rounded = value.round();
    if rounded < 0.0 || (value - rounded).abs() > 1e-6 {
        return String::new();
    }
    labels
        .get(rounded as usize)
        .cloned()
        .unwrap_or_default()
}
