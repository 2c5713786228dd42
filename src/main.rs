mod cli;
mod exits;
mod settings;

fn main() {
    exits::install_handlers();
    exits::harden();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    if let Err(e) = cli::run() {
        log::debug!("exiting with error: {:?}", e);
        cli::prompts::error(&format!("Error: {}", e));
        std::process::exit(1);
    }
}
