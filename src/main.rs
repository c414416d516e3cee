use celestial_sizes::app::App;
use celestial_sizes::catalog::CatalogStore;
use celestial_sizes::config::ComparatorConfig;
use celestial_sizes::session::Session;
use eframe::egui;

#[cfg(target_arch = "wasm32")]
use eframe::wasm_bindgen::JsCast;

#[cfg(not(target_arch = "wasm32"))]
fn load_session() -> celestial_sizes::Result<Session> {
    let config = ComparatorConfig::from_env()?;
    let catalog = match &config.catalog_path {
        Some(path) => {
            log::info!("loading catalog from {}", path.display());
            CatalogStore::load_from_path(path)?
        }
        None => CatalogStore::builtin(),
    };
    Session::start(catalog, config)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let session = match load_session() {
        Ok(session) => session,
        Err(e) => {
            log::error!("{e}; falling back to defaults");
            Session::start(CatalogStore::builtin(), ComparatorConfig::default())
                .expect("built-in catalog contains the default body")
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Celestial Sizes"),
        ..Default::default()
    };

    eframe::run_native(
        "Celestial Sizes",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(session)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("canvas")
            .expect("No canvas element")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("Not a canvas");

        let session = Session::start(CatalogStore::builtin(), ComparatorConfig::default())
            .expect("built-in catalog contains the default body");

        let web_options = eframe::WebOptions::default();
        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::new(App::new(session)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}
