//! Dashboard Application
//! Main window wiring the sidebar, chart page and background workers.

use crate::config::AppConfig;
use crate::data::{
    date_bounds, filter_days, filter_hours, resolve_range, DataLoader, DateRange, LoadedData,
};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction, DashboardData};
use crate::stats::DashboardStats;
use egui::SidePanel;
use std::path::Path;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use tracing::{error, info};

/// CSV loading result from background thread
enum LoadResult {
    Progress(String),
    Complete(Box<LoadedData>),
    Error(String),
}

/// Filter/aggregation result from background thread
enum CalcResult {
    Progress(f32, String),
    Complete(Box<DashboardData>),
}

/// Main application window.
pub struct DashboardApp {
    config: AppConfig,
    data: LoadedData,
    bounds: Option<DateRange>,

    control_panel: ControlPanel,
    chart_viewer: ChartViewer,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,

    // Async aggregation
    calc_rx: Option<Receiver<CalcResult>>,
    is_calculating: bool,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::load_or_default();

        let mut control_panel = ControlPanel::new(&config);
        control_panel.logo = Self::load_logo(&cc.egui_ctx, &config.logo_path());

        let mut app = Self {
            config,
            data: LoadedData::default(),
            bounds: None,
            control_panel,
            chart_viewer: ChartViewer::new(),
            load_rx: None,
            is_loading: false,
            calc_rx: None,
            is_calculating: false,
        };

        // Datasets load once at startup
        app.start_load();
        app
    }

    /// Load the branding image into an egui texture. A missing or broken
    /// file just leaves the sidebar without a logo.
    fn load_logo(ctx: &egui::Context, path: &Path) -> Option<egui::TextureHandle> {
        let image = image::open(path).ok()?.to_rgba8();
        let size = [image.width() as usize, image.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
        Some(ctx.load_texture("logo", color_image, egui::TextureOptions::LINEAR))
    }

    /// Kick off CSV loading in a background thread.
    fn start_load(&mut self) {
        if self.is_loading {
            return;
        }

        self.chart_viewer.data = None;
        self.bounds = None;
        self.control_panel.set_progress(0.0, "Loading CSV files...");
        self.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        let loader = DataLoader::new(self.config.day_path(), self.config.hour_path());

        thread::spawn(move || {
            let _ = tx.send(LoadResult::Progress("Reading CSV files...".to_string()));

            match loader.load() {
                Ok(data) => {
                    let _ = tx.send(LoadResult::Complete(Box::new(data)));
                }
                Err(e) => {
                    error!(%e, "dataset load failed");
                    let _ = tx.send(LoadResult::Error(e.to_string()));
                }
            }
        });
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Progress(status) => {
                        self.control_panel.set_progress(10.0, &status);
                    }
                    LoadResult::Complete(data) => {
                        self.data = *data;
                        self.bounds = date_bounds(&self.data.days);
                        if let Some(bounds) = self.bounds {
                            self.control_panel.set_bounds(bounds);
                        }
                        self.control_panel.set_progress(
                            30.0,
                            &format!(
                                "Loaded {} daily and {} hourly rows",
                                self.data.days.len(),
                                self.data.hours.len()
                            ),
                        );
                        self.is_loading = false;
                        should_keep_receiver = false;
                        self.start_calculation();
                    }
                    LoadResult::Error(error) => {
                        self.control_panel
                            .set_progress(0.0, &format!("Error: {}", error));
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    /// Filter by the sidebar selection and recompute aggregates off-thread.
    fn start_calculation(&mut self) {
        let Some(bounds) = self.bounds else {
            return;
        };
        if self.is_calculating {
            return;
        }

        let range = resolve_range(
            &self.control_panel.start_input,
            &self.control_panel.end_input,
            bounds,
        );
        info!(start = %range.start, end = %range.end, "recomputing dashboard");

        let (tx, rx) = channel();
        self.calc_rx = Some(rx);
        self.is_calculating = true;
        self.control_panel.set_progress(40.0, "Filtering rows...");

        let days = self.data.days.clone();
        let hours = self.data.hours.clone();

        thread::spawn(move || {
            Self::run_calculation(tx, days, hours, range);
        });
    }

    /// Run filtering and aggregation (called from background thread)
    fn run_calculation(
        tx: Sender<CalcResult>,
        days: Vec<crate::data::DayRecord>,
        hours: Vec<crate::data::HourRecord>,
        range: DateRange,
    ) {
        let filtered_days = filter_days(&days, range);
        let filtered_hours = filter_hours(&hours, range);

        let _ = tx.send(CalcResult::Progress(
            70.0,
            "Computing aggregates...".to_string(),
        ));

        let stats = DashboardStats::compute(&filtered_days, &filtered_hours);

        let _ = tx.send(CalcResult::Complete(Box::new(DashboardData {
            stats,
            range,
            day_rows: filtered_days.len(),
            hour_rows: filtered_hours.len(),
        })));
    }

    /// Check for aggregation results
    fn check_calculation_results(&mut self) {
        let rx = self.calc_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    CalcResult::Progress(progress, status) => {
                        self.control_panel.set_progress(progress, &status);
                    }
                    CalcResult::Complete(data) => {
                        self.control_panel.filtered_days = data.day_rows;
                        self.control_panel.filtered_hours = data.hour_rows;
                        self.control_panel.set_progress(
                            100.0,
                            &format!("Complete! Showing {} to {}", data.range.start, data.range.end),
                        );
                        self.chart_viewer.set_data(*data);
                        self.is_calculating = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.calc_rx = Some(rx);
            }
        }
    }

    /// Handle data directory selection
    fn handle_browse_data(&mut self) {
        if self.is_loading {
            return;
        }

        if let Some(dir) = rfd::FileDialog::new()
            .set_directory(&self.config.data_dir)
            .pick_folder()
        {
            self.config.data_dir = dir.clone();
            self.control_panel.data_dir = dir;
            self.start_load();
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_load_results();
        self.check_calculation_results();

        // Request repaint while loading or calculating
        if self.is_loading || self.is_calculating {
            ctx.request_repaint();
        }

        // Left panel - sidebar
        SidePanel::left("control_panel")
            .min_width(300.0)
            .max_width(350.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::BrowseData => self.handle_browse_data(),
                        ControlPanelAction::ApplyRange => {
                            if !self.is_calculating {
                                self.start_calculation();
                            }
                        }
                        ControlPanelAction::ResetRange => {
                            self.control_panel.reset_inputs();
                            if !self.is_calculating {
                                self.start_calculation();
                            }
                        }
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - dashboard page
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
