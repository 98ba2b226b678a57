//! Application entry point wiring egui/eframe to launch the roster UI.

use std::sync::Arc;

use anyhow::{Context, Result};
use eframe::egui;
use egui_phosphor::Variant;

use crate::api::{Backend, HttpBackend};
use crate::config::AppConfig;
use crate::ui::RosterApp;

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run(config: AppConfig) -> Result<()> {
    log::info!("Using backend at {}", config.backend_url);
    let backend: Arc<dyn Backend> =
        Arc::new(HttpBackend::new(&config).context("Failed to build HTTP client")?);

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Student Roster",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(RosterApp::new(cc.egui_ctx.clone(), backend)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("UI event loop failed: {err}"))
}
