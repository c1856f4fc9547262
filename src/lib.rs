pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
#[cfg(feature = "cli")]
pub use core::cli::run;

pub use config::{toml_config::DemoConfig, OutputFormat};
pub use core::demo::{DemoRunner, Report};
pub use domain::{validate_phone_number, validate_phone_numbers, PhoneNumber, Widget, WidgetBuilder};
pub use utils::error::{Result, WidgetError};
