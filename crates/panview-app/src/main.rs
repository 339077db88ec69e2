//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting panview");

    let explicit = std::env::args_os().nth(1).map(std::path::PathBuf::from);
    let result = panview_app::AppConfig::load(explicit)
        .and_then(|config| panview_app::App::with_config(config).run());

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
