use crate::config::toml_config::DemoConfig;
use crate::config::{CliConfig, Command};
use crate::core::demo::{DemoRunner, Report};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// 載入並驗證配置, 執行子命令, 回傳要輸出的報表內容
pub fn run(config: &CliConfig) -> Result<String> {
    let demo_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let loaded = DemoConfig::from_file(path)?;
            loaded.validate()?;
            tracing::info!("✅ Configuration loaded and validated successfully");
            Some(loaded)
        }
        None => None,
    };

    let runner = DemoRunner::new(demo_config);
    let report: Report = match &config.command {
        Command::Phone { numbers } => runner.run_phone(numbers),
        Command::Widgets => runner.run_widgets()?,
        Command::Demo => runner.run_all()?,
    };

    report.render(config.format)
}
