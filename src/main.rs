// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Study Signal - a study companion desktop app.
//!
//! A notebook gallery with a freehand note canvas, a simulated "who else is
//! studying" light map, and a simulated ambient sound player. All state is
//! in-memory and lives for one run.

mod app;
mod models;
mod sim;
mod ui;

use anyhow::Result;
use app::StudyApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Study Signal"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Study Signal",
        options,
        Box::new(|_cc| Ok(Box::new(StudyApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
