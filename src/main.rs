use clap::Parser;
use cpf_tool::app;
use cpf_tool::config::OutputFormat;
use cpf_tool::utils::logger;
use cpf_tool::CliConfig;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let settings = match config
        .load_file_config()
        .and_then(|file_config| config.resolve(file_config.as_ref()))
    {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(config.verbose);
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // JSON output gets JSON logs so both streams stay machine-readable.
    match settings.output {
        OutputFormat::Json => logger::init_json_logger(settings.verbose),
        OutputFormat::Text => logger::init_cli_logger(settings.verbose),
    }

    tracing::info!("Starting cpf CLI");
    tracing::debug!("CLI config: {:?}", config);

    // An invalid identifier is a normal result, so every command exits 0 from here.
    let report = app::execute(&config.command, &settings);
    println!("{}", report.render(settings.output)?);

    Ok(())
}
