#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

use app::App;
use eframe::NativeOptions;
use stills_core::ViewerConfig;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let cfg = ViewerConfig::default();
    let (width, height) = cfg.native_size;

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width as f32 + 16.0, height as f32 + 80.0])
            .with_title("Spacestills"),
        ..Default::default()
    };

    eframe::run_native(
        "Spacestills",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(cfg)))),
    )
}
