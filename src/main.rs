use comic_reader::configuration::Settings;
use comic_reader::models::Cli;
use comic_reader::run::run;
use env_logger::{Builder, Env, Target};
use log::error;
use resolve_path::PathResolveExt;
use std::process;

fn main() {
    // Init logging
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.target(Target::Stdout);
    builder.init();

    // Parse Args
    let cli = Cli::new();
    let config_file = cli.config_file.resolve().into_owned();

    // Parse Settings
    let settings = match Settings::new(&config_file) {
        Ok(s) => s,
        Err(e) => {
            error!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    // Run
    if let Err(e) = run(cli, settings, &config_file) {
        error!("Application error: {:#}", e);
        process::exit(1);
    }
}
