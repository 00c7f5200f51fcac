use anyhow::Result;
use clap::{App as Cli, Arg};
use contact_tui::{app::App, config::Config, error::AppError, logger};
use log::LevelFilter;

fn main() -> Result<()> {
    let matches = Cli::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Sets a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Logs at trace level"),
        )
        .get_matches();

    let level = if matches.is_present("verbose") {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    let log_buffer = logger::LogBuffer::default();
    logger::CustomLogger::init(level, log_buffer.clone())
        .map_err(AppError::from)?;

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(App::start(config, log_buffer))?;
    Ok(())
}
