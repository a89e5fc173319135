//! Main application entry point.

fn main() {
    env_logger::init();
    log::info!("Starting DateField demo");

    let config = datefield_app::AppConfig::from_args(std::env::args().skip(1));
    if let Err(err) = datefield_app::App::run(config) {
        log::error!("{}", err);
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
