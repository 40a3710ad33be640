#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::{Context, Result};
use eframe::egui;

mod app;
mod dialogs;
mod handlers;
mod logger;
mod session;
mod views;
mod worker;

const MAX_LOG_ENTRIES: usize = 500;

fn main() -> Result<()> {
    let logger = logger::AppLogger::new(MAX_LOG_ENTRIES, log::LevelFilter::Info);
    logger.clone().init().context("Failed to install logger")?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([600.0, 500.0])
            .with_title("Images to PDF")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Images to PDF",
        options,
        Box::new(move |cc| Ok(Box::new(app::ImagesToPdfApp::new(cc, handle, logger)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run window: {e}"))?;

    Ok(())
}
