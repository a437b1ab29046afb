#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use paint_gallery::{GalleryStore, PaintApp, PaintConfig};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = PaintConfig::default();

    // The only startup-fatal condition: no gallery directory.
    let gallery = match GalleryStore::open(&config.gallery_dir) {
        Ok(gallery) => gallery,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("paint_gallery: {err}");
            std::process::exit(1);
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("PyPaint")
            .with_inner_size([config.canvas_width as f32 + 40.0, config.canvas_height as f32 + 220.0])
            .with_min_inner_size([300.0, 220.0]),
        ..Default::default()
    };
    eframe::run_native(
        "paint_gallery",
        native_options,
        Box::new(move |cc| Ok(Box::new(PaintApp::new(cc, config, gallery)))),
    )
}
