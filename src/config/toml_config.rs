use crate::domain::WidgetBuilder;
use crate::utils::error::{Result, WidgetError};
use crate::utils::validation::{validate_non_empty_list, validate_required_field, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    pub phone: Option<PhoneConfig>,
    #[serde(default)]
    pub widgets: Vec<WidgetSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneConfig {
    pub numbers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetSpec {
    pub label: Option<String>,
    pub name: String,
    pub price: f64,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub manufacturer: Option<String>,
}

impl WidgetSpec {
    pub fn to_builder(&self) -> WidgetBuilder {
        let mut builder = WidgetBuilder::new(self.name.clone(), self.price);
        if let Some(model) = &self.model {
            builder.set_model(model.clone());
        }
        if let Some(serial_number) = &self.serial_number {
            builder.set_serial_number(serial_number.clone());
        }
        if let Some(manufacturer) = &self.manufacturer {
            builder.set_manufacturer(manufacturer.clone());
        }
        builder
    }
}

impl DemoConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| WidgetError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PHONE_1}); 未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn phone_numbers(&self) -> Result<&[String]> {
        let phone = validate_required_field("phone", &self.phone)?;
        Ok(&phone.numbers)
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        if let Some(phone) = &self.phone {
            validate_non_empty_list("phone.numbers", &phone.numbers)?;
        }

        for (index, spec) in self.widgets.iter().enumerate() {
            spec.to_builder()
                .try_build()
                .map_err(|e| match e {
                    WidgetError::InvalidWidgetState { field, reason } => {
                        WidgetError::InvalidConfigValueError {
                            field: format!("widgets[{}].{}", index, field),
                            value: match field.as_str() {
                                "price" => spec.price.to_string(),
                                _ => spec.name.clone(),
                            },
                            reason,
                        }
                    }
                    other => other,
                })?;
        }

        Ok(())
    }
}
