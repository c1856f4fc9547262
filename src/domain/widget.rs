//! Immutable [`Widget`] values and the [`WidgetBuilder`] that stages them.
//!
//! A `Widget` has no public constructor and no setters. The only way to get
//! one is through a builder, which takes the required name and price up
//! front and the optional attributes through chained `with_*` calls.

use crate::utils::error::{Result, WidgetError};
use crate::utils::validation::{validate_non_empty_string, validate_non_negative_finite};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Serialize)]
pub struct Widget {
    name: String,
    model: Option<String>,
    serial_number: Option<String>,
    price: f64,
    manufacturer: Option<String>,
}

impl Widget {
    pub fn builder(name: impl Into<String>, price: f64) -> WidgetBuilder {
        WidgetBuilder::new(name, price)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn serial_number(&self) -> Option<&str> {
        self.serial_number.as_deref()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn manufacturer(&self) -> Option<&str> {
        self.manufacturer.as_deref()
    }

    /// Builder seeded with this widget's values. The widget itself is untouched.
    pub fn to_builder(&self) -> WidgetBuilder {
        WidgetBuilder {
            name: self.name.clone(),
            model: self.model.clone(),
            serial_number: self.serial_number.clone(),
            price: self.price,
            manufacturer: self.manufacturer.clone(),
        }
    }
}

// price 以位元比較, 同一個 builder 建出的 NaN 價格也視為相等
impl PartialEq for Widget {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.model == other.model
            && self.serial_number == other.serial_number
            && self.price.to_bits() == other.price.to_bits()
            && self.manufacturer == other.manufacturer
    }
}

fn or_null(value: Option<&str>) -> &str {
    value.unwrap_or("null")
}

impl fmt::Display for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Widget {{name={} model={} serialNumber={} price={:?} manufacturer={}}}",
            self.name,
            or_null(self.model()),
            or_null(self.serial_number()),
            self.price,
            or_null(self.manufacturer()),
        )
    }
}

/// Mutable staging area for a [`Widget`].
///
/// A builder is owned by one caller; every `build` snapshots the current
/// fields into a fresh widget, so later changes to the builder never reach
/// widgets that were already built.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetBuilder {
    name: String,
    model: Option<String>,
    serial_number: Option<String>,
    price: f64,
    manufacturer: Option<String>,
}

impl WidgetBuilder {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            model: None,
            serial_number: None,
            price,
            manufacturer: None,
        }
    }

    pub fn with_model(mut self, value: impl Into<String>) -> Self {
        self.model = Some(value.into());
        self
    }

    pub fn with_serial_number(mut self, value: impl Into<String>) -> Self {
        self.serial_number = Some(value.into());
        self
    }

    pub fn with_manufacturer(mut self, value: impl Into<String>) -> Self {
        self.manufacturer = Some(value.into());
        self
    }

    pub fn set_model(&mut self, value: impl Into<String>) -> &mut Self {
        self.model = Some(value.into());
        self
    }

    pub fn set_serial_number(&mut self, value: impl Into<String>) -> &mut Self {
        self.serial_number = Some(value.into());
        self
    }

    pub fn set_manufacturer(&mut self, value: impl Into<String>) -> &mut Self {
        self.manufacturer = Some(value.into());
        self
    }

    /// Snapshots the current fields. Performs no validation.
    pub fn build(&self) -> Widget {
        tracing::debug!("Building widget '{}'", self.name);
        Widget {
            name: self.name.clone(),
            model: self.model.clone(),
            serial_number: self.serial_number.clone(),
            price: self.price,
            manufacturer: self.manufacturer.clone(),
        }
    }

    /// Like [`build`](Self::build), but rejects a blank name and a negative
    /// or non-finite price with [`WidgetError::InvalidWidgetState`].
    pub fn try_build(&self) -> Result<Widget> {
        validate_non_empty_string("name", &self.name)
            .map_err(|_| WidgetError::invalid_widget("name", "must not be empty"))?;
        validate_non_negative_finite("price", self.price).map_err(|e| match e {
            WidgetError::InvalidConfigValueError { reason, .. } => {
                WidgetError::invalid_widget("price", reason)
            }
            other => other,
        })?;
        Ok(self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_model_set() {
        let x = WidgetBuilder::new("1", 1.0).with_model("1").build();
        assert_eq!(x.name(), "1");
        assert_eq!(x.model(), Some("1"));
        assert_eq!(x.serial_number(), None);
        assert_eq!(x.price(), 1.0);
        assert_eq!(x.manufacturer(), None);
    }

    #[test]
    fn test_all_optionals_set() {
        let y = WidgetBuilder::new("2", 2.0)
            .with_model("2")
            .with_manufacturer("22")
            .with_serial_number("222")
            .build();
        assert_eq!(y.name(), "2");
        assert_eq!(y.model(), Some("2"));
        assert_eq!(y.serial_number(), Some("222"));
        assert_eq!(y.price(), 2.0);
        assert_eq!(y.manufacturer(), Some("22"));
    }

    #[test]
    fn test_build_twice_gives_equal_widgets() {
        let builder = Widget::builder("gear", 3.5).with_manufacturer("Acme");
        let a = builder.build();
        let b = builder.build();
        assert_eq!(a, b);
    }

    #[test]
    fn test_build_twice_with_nan_price_gives_equal_widgets() {
        let builder = WidgetBuilder::new("odd", f64::NAN).with_model("Q");
        assert_eq!(builder.build(), builder.build());
        assert_ne!(
            builder.build(),
            WidgetBuilder::new("odd", 1.0).with_model("Q").build()
        );
    }

    #[test]
    fn test_builder_mutation_does_not_leak_into_built_widget() {
        let mut builder = WidgetBuilder::new("gear", 3.5).with_model("A1");
        let before = builder.build();

        builder.set_model("B2").set_serial_number("SN-9");
        let after = builder.build();

        assert_eq!(before.model(), Some("A1"));
        assert_eq!(before.serial_number(), None);
        assert_eq!(after.model(), Some("B2"));
        assert_eq!(after.serial_number(), Some("SN-9"));
    }

    #[test]
    fn test_display_lists_fields_in_fixed_order() {
        let x = WidgetBuilder::new("1", 1.0).with_model("1").build();
        assert_eq!(
            x.to_string(),
            "Widget {name=1 model=1 serialNumber=null price=1.0 manufacturer=null}"
        );

        let y = WidgetBuilder::new("2", 2.0)
            .with_model("2")
            .with_manufacturer("22")
            .with_serial_number("222")
            .build();
        assert_eq!(
            y.to_string(),
            "Widget {name=2 model=2 serialNumber=222 price=2.0 manufacturer=22}"
        );
    }

    #[test]
    fn test_to_builder_derives_variant() {
        let original = WidgetBuilder::new("bolt", 0.25).with_model("M6").build();
        let variant = original.to_builder().with_model("M8").build();
        assert_eq!(original.model(), Some("M6"));
        assert_eq!(variant.model(), Some("M8"));
        assert_eq!(variant.name(), "bolt");
    }

    #[test]
    fn test_try_build_accepts_valid_state() {
        let widget = WidgetBuilder::new("free sample", 0.0).try_build().unwrap();
        assert_eq!(widget.price(), 0.0);
    }

    #[test]
    fn test_try_build_rejects_blank_name() {
        let err = WidgetBuilder::new("  ", 1.0).try_build().unwrap_err();
        assert!(matches!(
            err,
            WidgetError::InvalidWidgetState { ref field, .. } if field == "name"
        ));
    }

    #[test]
    fn test_try_build_rejects_bad_price() {
        for price in [-1.0, f64::NAN, f64::NEG_INFINITY] {
            let err = WidgetBuilder::new("gear", price).try_build().unwrap_err();
            assert!(matches!(
                err,
                WidgetError::InvalidWidgetState { ref field, .. } if field == "price"
            ));
        }
    }

    #[test]
    fn test_build_skips_validation() {
        let widget = WidgetBuilder::new("", -5.0).build();
        assert_eq!(widget.name(), "");
        assert_eq!(widget.price(), -5.0);
    }

    #[test]
    fn test_serializes_absent_fields_as_null() {
        let x = WidgetBuilder::new("1", 1.0).with_model("1").build();
        let json = serde_json::to_value(&x).unwrap();
        assert_eq!(json["name"], "1");
        assert_eq!(json["model"], "1");
        assert!(json["serial_number"].is_null());
        assert_eq!(json["price"], 1.0);
    }
}
