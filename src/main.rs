mod config;
mod duck;
mod engine;
mod error;
mod race;
mod render;
mod screen;
mod stride;

use clap::Parser;
use config::{AppConfig, Cli, USAGE};
use screen::Terminal;
use stride::RandomStride;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let cfg = match AppConfig::resolve(&cli) {
        Ok(c) => c,
        Err(e) => {
            println!("Error: {}", e);
            println!("{}", USAGE);
            std::process::exit(1);
        }
    };

    let mut stride = RandomStride::from_clock();
    log::info!("seed: {}", stride.seed());

    let mut screen = Terminal::new();
    engine::run(&cfg, &mut stride, &mut screen);
}
