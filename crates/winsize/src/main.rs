mod commands;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "winsize",
    version,
    about = "Pick a visible window and move it to a fixed position and size"
)]
struct Cli {}

fn main() {
    let _ = Cli::parse();

    let config = winsize_core::config::load();
    winsize_core::log::init(&config.logging);
    winsize_core::log_info!("winsize {} starting", env!("CARGO_PKG_VERSION"));

    commands::resize::execute();
}
