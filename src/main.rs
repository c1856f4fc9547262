use clap::Parser;
use widget_kit::utils::logger;
use widget_kit::{CliConfig, OutputFormat};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    match config.format {
        OutputFormat::Json => logger::init_json_logger(config.verbose),
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
    }

    tracing::info!("Starting widget-kit");
    tracing::debug!("CLI config: {:?}", config);

    match widget_kit::run(&config) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            tracing::error!(
                "❌ widget-kit failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            std::process::exit(e.severity().exit_code());
        }
    }
}
