#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([980.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Правила Эвакуации",
        options,
        Box::new(|_cc| Ok(Box::new(evac_portal::PortalApp::new()))),
    )
}

// The browser build starts from the library's wasm entry instead.
#[cfg(target_arch = "wasm32")]
fn main() {}
