//! Configuration of an order list.
//!
//! [`OrderListConfig`] gathers the options a host sets on the widget. It can
//! be built in code or loaded from TOML; keys use camelCase:
//!
//! ```
//! use orderlist::config::OrderListConfig;
//! use orderlist::model::FilterMatchMode;
//!
//! let config = OrderListConfig::from_toml_str(
//!     r#"
//!     header = "Products"
//!     filterBy = "name, category"
//!     filterMatchMode = "startsWith"
//!     dragdrop = true
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.filter_fields(), vec!["name", "category"]);
//! assert_eq!(config.filter_match_mode, FilterMatchMode::StartsWith);
//! assert!(config.meta_key_selection);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{OrderListError, Result};
use crate::model::{FilterMatchMode, parse_fields};

/// Where the move controls are placed relative to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ControlsPosition {
    /// Controls on the left of the list.
    #[default]
    Left,
    /// Controls on the right of the list.
    Right,
}

/// Options of an order list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderListConfig {
    /// Text of the header.
    pub header: Option<String>,
    /// Comma-separated item fields the filter matches against.
    ///
    /// Filtering is unavailable while this is unset.
    pub filter_by: Option<String>,
    /// How field values are compared with the query.
    pub filter_match_mode: FilterMatchMode,
    /// Locale used to lowercase the query and field values.
    pub filter_locale: Option<String>,
    /// Placeholder text of the filter input.
    pub filter_placeholder: Option<String>,
    /// Rejects every mutating gesture.
    pub disabled: bool,
    /// Plain clicks replace the selection; modifier clicks extend it.
    ///
    /// When `false`, every click toggles the clicked item.
    pub meta_key_selection: bool,
    /// Enables drag and drop reordering.
    pub dragdrop: bool,
    /// Placement of the move controls.
    pub controls_position: ControlsPosition,
    /// Alternate row backgrounds.
    pub striped_rows: bool,
    /// Stack the controls above the list below the breakpoint.
    pub responsive: bool,
    /// CSS width below which the responsive layout applies.
    pub breakpoint: String,
}

impl Default for OrderListConfig {
    fn default() -> Self {
        Self {
            header: None,
            filter_by: None,
            filter_match_mode: FilterMatchMode::Contains,
            filter_locale: None,
            filter_placeholder: None,
            disabled: false,
            meta_key_selection: true,
            dragdrop: false,
            controls_position: ControlsPosition::Left,
            striped_rows: false,
            responsive: false,
            breakpoint: "960px".to_string(),
        }
    }
}

/// Units accepted in [`OrderListConfig::breakpoint`].
const BREAKPOINT_UNITS: [&str; 5] = ["px", "rem", "em", "vw", "%"];

impl OrderListConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// The filter fields parsed from [`filter_by`](Self::filter_by).
    pub fn filter_fields(&self) -> Vec<String> {
        self.filter_by.as_deref().map(parse_fields).unwrap_or_default()
    }

    /// Checks values that serde cannot.
    pub fn validate(&self) -> Result<()> {
        if let Some(locale) = self.filter_locale.as_deref() {
            validate_locale(locale)?;
        }

        let breakpoint = self.breakpoint.trim();
        let number = BREAKPOINT_UNITS
            .iter()
            .find_map(|unit| breakpoint.strip_suffix(unit));
        match number {
            Some(number) if number.parse::<f32>().is_ok_and(|n| n > 0.0) => Ok(()),
            _ => Err(OrderListError::invalid_option(
                "breakpoint",
                format!("expected a positive CSS length, got '{}'", self.breakpoint),
            )),
        }
    }
}

#[cfg(feature = "localization")]
fn validate_locale(locale: &str) -> Result<()> {
    locale
        .parse::<icu::locale::LanguageIdentifier>()
        .map(|_| ())
        .map_err(|_| OrderListError::InvalidLocale(locale.to_string()))
}

#[cfg(not(feature = "localization"))]
fn validate_locale(locale: &str) -> Result<()> {
    if locale.trim().is_empty() {
        return Err(OrderListError::InvalidLocale(locale.to_string()));
    }
    Ok(())
}
