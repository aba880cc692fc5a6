use std::str::FromStr;

use anyhow::{Context, Result};

use crate::catalog::{Product, ProductCatalog};
use crate::layout::validation::{validate_margins, validate_pricing};
use crate::layout::{validate_auto_spec, AutoLayoutSpec, Frame, Margins};

pub const DEFAULT_SHARE_BASE_URL: &str = "https://wa.me/?text=";

/// Application configuration loaded from environment variables.
/// Every variable is optional; unset ones fall back to the layout policy defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Margins applied to requests that don't send their own.
    pub margins: Margins,
    pub auto_layout: AutoLayoutSpec,
    pub catalog: ProductCatalog,
    pub share_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Margins::default();
        let margins = Margins {
            side: parse_or(&lookup, "LAYOUT_SIDE_MARGIN_CM", defaults.side)?,
            top: parse_or(&lookup, "LAYOUT_TOP_MARGIN_CM", defaults.top)?,
            bottom: parse_or(&lookup, "LAYOUT_BOTTOM_MARGIN_CM", defaults.bottom)?,
            inter_row_gap: parse_or(&lookup, "LAYOUT_INTER_ROW_GAP_CM", defaults.inter_row_gap)?,
        };
        validate_margins(&margins).context("Invalid layout margin configuration")?;

        let auto_defaults = AutoLayoutSpec::default();
        let auto_layout = AutoLayoutSpec {
            frame: Frame::new(
                parse_or(&lookup, "AUTO_FRAME_WIDTH_CM", auto_defaults.frame.width)?,
                parse_or(&lookup, "AUTO_FRAME_HEIGHT_CM", auto_defaults.frame.height)?,
            ),
            gap: parse_or(&lookup, "AUTO_GAP_CM", auto_defaults.gap)?,
        };
        validate_auto_spec(&auto_layout).context("Invalid auto-layout configuration")?;

        let catalog_defaults = ProductCatalog::default();
        let catalog = ProductCatalog {
            standard: product_from(&lookup, catalog_defaults.standard, "STANDARD")?,
            premium: product_from(&lookup, catalog_defaults.premium, "PREMIUM")?,
        };

        Ok(Config {
            port: parse_or(&lookup, "PORT", 8080u16).context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            margins,
            auto_layout,
            catalog,
            share_base_url: lookup("SHARE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_SHARE_BASE_URL.to_string()),
        })
    }
}

fn product_from(
    lookup: &impl Fn(&str) -> Option<String>,
    default: Product,
    suffix: &str,
) -> Result<Product> {
    let product = Product {
        tier: default.tier,
        bar_length: parse_or(lookup, &format!("PRODUCT_{suffix}_BAR_CM"), default.bar_length)?,
        unit_price: parse_or(lookup, &format!("PRODUCT_{suffix}_PRICE"), default.unit_price)?,
    };
    validate_pricing(product.bar_length, product.unit_price)
        .with_context(|| format!("Invalid {} product configuration", product.tier.label()))?;
    Ok(product)
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.margins, Margins::default());
        assert_eq!(config.auto_layout, AutoLayoutSpec::default());
        assert_eq!(config.catalog.standard.bar_length, 290.0);
        assert_eq!(config.share_base_url, DEFAULT_SHARE_BASE_URL);
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "9000"),
            ("LAYOUT_SIDE_MARGIN_CM", " 12.5 "),
            ("PRODUCT_PREMIUM_BAR_CM", "240"),
            ("AUTO_GAP_CM", "5"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.margins.side, 12.5);
        assert_eq!(config.margins.top, 20.0);
        assert_eq!(config.catalog.premium.bar_length, 240.0);
        assert_eq!(config.auto_layout.gap, 5.0);
    }

    #[test]
    fn test_unparseable_value_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("LAYOUT_TOP_MARGIN_CM", "twenty")]))
            .unwrap_err();
        assert!(format!("{err:#}").contains("LAYOUT_TOP_MARGIN_CM"));
    }

    #[test]
    fn test_zero_bar_length_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PRODUCT_STANDARD_BAR_CM", "0")])).unwrap_err();
        assert!(format!("{err:#}").contains("standard"));
    }

    #[test]
    fn test_negative_margin_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("LAYOUT_SIDE_MARGIN_CM", "-5")])).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("margin configuration"), "{message}");
        assert!(message.contains("side_margin"), "{message}");
    }

    #[test]
    fn test_zero_auto_frame_width_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("AUTO_FRAME_WIDTH_CM", "0")])).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("auto-layout configuration"), "{message}");
        assert!(message.contains("auto.frame.width"), "{message}");
    }
}
