//! Bikedash - Bike Rental Analytics Dashboard
//!
//! A Rust application for exploring daily and hourly bike-rental records
//! with a date-range filter and a fixed set of descriptive charts.

mod charts;
mod config;
mod data;
mod gui;
mod stats;

use eframe::egui;
use gui::DashboardApp;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([1100.0, 700.0])
            .with_title("Bike Rental Dashboard"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Bike Rental Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc)))),
    )
}
