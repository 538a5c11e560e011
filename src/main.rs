// main.rs
mod audio_player;
mod gui;
mod music_theory;
mod tone;

use eframe::egui;
use gui::gui::ChordApp;

fn main() -> eframe::Result {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([960.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "chordlab",
        native_options,
        Box::new(|cc| Ok(Box::new(ChordApp::new(cc)))),
    )
}
