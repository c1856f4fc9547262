use crate::config::toml_config::DemoConfig;
use crate::config::OutputFormat;
use crate::domain::{PhoneNumber, Widget, WidgetBuilder};
use crate::utils::error::Result;
use serde::Serialize;
use std::fmt::Write;

pub const DEFAULT_PHONE_NUMBERS: [&str; 2] = ["123-456-7890", "456-7890"];

const ORDINALS: [&str; 10] = [
    "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh", "Eighth", "Ninth", "Tenth",
];

/// "First", "Second", ... for the first ten positions (0-based), `#n` after that.
pub fn ordinal(index: usize) -> String {
    ORDINALS
        .get(index)
        .map(|word| word.to_string())
        .unwrap_or_else(|| format!("#{}", index + 1))
}

/// 預設示範的兩個 widget: X 只設定 model, Y 設定全部選填欄位
pub fn default_widgets() -> Vec<LabeledWidget> {
    vec![
        LabeledWidget {
            label: "X".to_string(),
            widget: WidgetBuilder::new("1", 1.0).with_model("1").build(),
        },
        LabeledWidget {
            label: "Y".to_string(),
            widget: WidgetBuilder::new("2", 2.0)
                .with_model("2")
                .with_manufacturer("22")
                .with_serial_number("222")
                .build(),
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledWidget {
    pub label: String,
    pub widget: Widget,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_numbers: Option<Vec<PhoneNumber>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widgets: Option<Vec<LabeledWidget>>,
}

impl Report {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        let mut out = String::new();

        if let Some(numbers) = &self.phone_numbers {
            for (index, number) in numbers.iter().enumerate() {
                let value = number.number().unwrap_or("invalid");
                let _ = writeln!(out, "{} number is {}", ordinal(index), value);
            }
        }

        if let Some(widgets) = &self.widgets {
            for entry in widgets {
                let _ = writeln!(out, "{}:", entry.label);
                let _ = writeln!(out, "{}", entry.widget);
            }
        }

        out
    }
}

pub struct DemoRunner {
    config: Option<DemoConfig>,
}

impl DemoRunner {
    pub fn new(config: Option<DemoConfig>) -> Self {
        Self { config }
    }

    /// Numbers come from the arguments, then the config file, then the built-in pair.
    pub fn phone_numbers(&self, numbers: &[String]) -> Vec<PhoneNumber> {
        let inputs: Vec<String> = if !numbers.is_empty() {
            numbers.to_vec()
        } else if let Some(configured) =
            self.config.as_ref().and_then(|c| c.phone_numbers().ok())
        {
            configured.to_vec()
        } else {
            DEFAULT_PHONE_NUMBERS.iter().map(|s| s.to_string()).collect()
        };

        tracing::info!("📞 Validating {} phone number(s)", inputs.len());
        inputs
            .iter()
            .map(|raw| {
                let number = PhoneNumber::parse(raw);
                if !number.is_valid() {
                    tracing::debug!("Phone number {:?} is invalid", raw);
                }
                number
            })
            .collect()
    }

    /// Configured widgets go through `try_build`; the built-in demo uses `build`.
    pub fn widgets(&self) -> Result<Vec<LabeledWidget>> {
        let specs = match &self.config {
            Some(config) if !config.widgets.is_empty() => &config.widgets,
            _ => {
                tracing::info!("🔧 No widgets configured, using the built-in demo widgets");
                return Ok(default_widgets());
            }
        };

        tracing::info!("🔧 Building {} configured widget(s)", specs.len());
        specs
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                let widget = spec.to_builder().try_build()?;
                let label = spec
                    .label
                    .clone()
                    .unwrap_or_else(|| format!("#{}", index + 1));
                Ok(LabeledWidget { label, widget })
            })
            .collect()
    }

    pub fn run_phone(&self, numbers: &[String]) -> Report {
        Report {
            phone_numbers: Some(self.phone_numbers(numbers)),
            widgets: None,
        }
    }

    pub fn run_widgets(&self) -> Result<Report> {
        Ok(Report {
            phone_numbers: None,
            widgets: Some(self.widgets()?),
        })
    }

    pub fn run_all(&self) -> Result<Report> {
        Ok(Report {
            phone_numbers: Some(self.phone_numbers(&[])),
            widgets: Some(self.widgets()?),
        })
    }
}
