// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use radio_dash::{config, gui, logging};

fn main() {
    logging::init_file(log::LevelFilter::Debug);

    // A broken settings file should not keep the dashboard from opening
    let options = match config::file::load(None) {
        Ok(o) => o,
        Err(e) => {
            log::error!("Config: {e}; using defaults");
            config::options::AppOptions::default()
        }
    };
    let state = config::state::AppState::new(options);

    let native = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32])
            .with_title("Radio Dashboard"),
        ..Default::default()
    };

    if let Err(e) = gui::run(native, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
