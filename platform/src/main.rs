use clap::Parser;
use env_logger::Env;
use platform::{
    cli::Cli,
    config::Config,
    errors::Result,
    migration,
    models::ApplicationState,
    parser::ExchangeParser,
};
use std::io::Write;

fn run(cli: &Cli) -> Result<ApplicationState> {
    let config = Config::from_path(&cli.config)?;
    let section = config.section(cli.exchange);

    let mut state = ApplicationState::new();
    let parser = ExchangeParser::new(cli.exchange).with_config_document(&cli.config);
    let outcome = parser.apply(Some(&mut state), section.as_ref(), &cli.override_map())?;

    if let Some(section) = outcome.migrated_section {
        migration::persist_section(&cli.config, cli.exchange, section)?;
    }
    if !outcome.credentials_validated {
        log::warn!("{} running without live credentials", cli.exchange);
    }
    Ok(state)
}

pub fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(move |buf, record| {
            let ts = buf.timestamp();
            writeln!(buf, "{} [{}] - {}", ts, record.level(), record.args())
        })
        .init();

    let cli = Cli::parse();
    log::info!("platform starting, config {}", cli.config.display());

    match run(&cli) {
        Ok(state) => {
            log::info!(
                "exchange: {}, market: {} ({} / {}), granularity: {}, key file: {:?}",
                cli.exchange,
                state.market,
                state.base_currency,
                state.quote_currency,
                state.granularity.as_str(),
                state.api_key_file
            );
            log::info!("options: {:?}", state.options);
        }
        Err(e) => {
            log::error!("{}", e);
            if e.is_fatal() {
                log::error!("cannot start without readable API credentials");
            }
            std::process::exit(e.exit_code());
        }
    }
}
