use std::env;

use clap::Parser;

use passform::cli::{self, Cli, prompts};
use passform::{exits, tui};

fn main() {
    exits::install_handlers();
    exits::harden();
    init_logging();

    let result = match env::args().len() {
        1 => tui::run(cli::saved_settings(), None),
        _ => cli::run(Cli::parse()),
    };

    if let Err(e) = result {
        prompts::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("PASSFORM_LOG", "warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
