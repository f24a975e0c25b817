use medmobile_web::config::CONFIG;
use medmobile_web::App;

fn main() {
    console_error_panic_hook::set_once();

    if CONFIG.enable_logging {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!(
        "🚀 MedMobile starting ({}, API {})",
        CONFIG.environment,
        CONFIG.api_url()
    );

    if !CONFIG.is_production() {
        log::debug!("⚙️ {:?}", *CONFIG);
    }

    yew::Renderer::<App>::new().render();
}
