pub mod app;
pub mod data;
pub mod model;
pub mod quiz;
pub mod ui;
pub mod view_models;

pub use app::PortalApp;

/// Browser entry. The hosting page ships a fixed-id canvas; everything
/// else is the same app the native binary runs.
#[cfg(target_arch = "wasm32")]
mod web {
    use super::PortalApp;
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(start)]
    pub fn start() {
        eframe::WebLogger::init(log::LevelFilter::Debug).ok();

        let web_options = eframe::WebOptions::default();
        wasm_bindgen_futures::spawn_local(async move {
            let document = web_sys::window()
                .and_then(|w| w.document())
                .expect("no document to attach to");
            let canvas = document
                .get_element_by_id("portal_canvas")
                .expect("no element with id portal_canvas")
                .dyn_into::<web_sys::HtmlCanvasElement>()
                .expect("portal_canvas is not a canvas");

            eframe::WebRunner::new()
                .start(
                    canvas,
                    web_options,
                    Box::new(|_cc| Ok(Box::new(PortalApp::new()))),
                )
                .await
                .expect("failed to start the portal");
        });
    }
}
