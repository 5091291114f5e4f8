use eframe::{NativeOptions, egui};

use PassForge::app::PassForgeApp;

fn main() -> eframe::Result<()> {
    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([420.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "PassForge",
        native_options,
        Box::new(|_cc| Ok(Box::new(PassForgeApp::default()))),
    )
}
