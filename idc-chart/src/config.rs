//! Chart configuration.
//!
//! Every field has a default matching the published chart, so an override
//! document only needs the keys it changes:
//!
//! ```rust
//! use idc_chart::config::ChartConfig;
//!
//! let config = ChartConfig::from_json(r#"{ "category_column": "Sector" }"#).unwrap();
//! assert_eq!(config.category_column, "Sector");
//! assert_eq!(config.width, 1000.0);
//! ```

use serde::Deserialize;

/// Space reserved around the plot area for title, axes and labels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 60.0,
            right: 40.0,
            bottom: 100.0,
            left: 80.0,
        }
    }
}

/// Full chart configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// URL of the CSV source, relative to the page
    pub data_url: String,
    /// Header of the column records are grouped by
    pub category_column: String,
    /// Bucket label for records without a category
    pub unspecified_label: String,
    pub title: String,
    pub y_axis_label: String,
    /// Noun shown after the count in the tooltip ("1,234 startups")
    pub count_noun: String,
    /// Outer SVG width in pixels
    pub width: f64,
    /// Outer SVG height in pixels
    pub height: f64,
    pub margin: Margin,
    /// Band padding (inner and outer) of the category axis
    pub band_padding: f64,
    /// Multiplier on the largest count for the top of the y domain
    pub y_headroom: f64,
    /// Approximate number of y-axis ticks
    pub y_tick_count: usize,
    /// Duration of animated renders in milliseconds
    pub transition_ms: f64,
    pub tooltip_fade_in_ms: f64,
    pub tooltip_fade_out_ms: f64,
    /// Tooltip offset from the pointer (x, y) in pixels
    pub tooltip_offset: (f64, f64),
    /// Bar colors, cycled when there are more categories than entries
    pub palette: Vec<String>,
    /// Text shown on the canvas when the source cannot be loaded
    pub error_message: String,
    /// Rotation of the category labels in degrees
    pub x_label_rotation: f64,
    pub bar_corner_radius: f64,
    /// `num-format` locale tag used for counts
    pub locale: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            data_url: "data/saas_financial_market_dataset_with_country.csv".to_string(),
            category_column: "Industry".to_string(),
            unspecified_label: "Unspecified".to_string(),
            title: "Industry Distribution of SaaS Startups".to_string(),
            y_axis_label: "Number of Startups".to_string(),
            count_noun: "startups".to_string(),
            width: 1000.0,
            height: 600.0,
            margin: Margin::default(),
            band_padding: 0.2,
            y_headroom: 1.1,
            y_tick_count: 10,
            transition_ms: 750.0,
            tooltip_fade_in_ms: 200.0,
            tooltip_fade_out_ms: 500.0,
            tooltip_offset: (15.0, -28.0),
            palette: [
                "#FF6B6B", "#4ECDC4", "#45B7D1", "#FFA07A", "#98D8C8", "#FFD93D", "#A29BFE",
                "#74B9FF", "#FD79A8", "#FDCB6E",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
            error_message: "Error loading data. Please check the file path.".to_string(),
            x_label_rotation: -45.0,
            bar_corner_radius: 4.0,
            locale: "en".to_string(),
        }
    }
}

impl ChartConfig {
    /// Parse a JSON override document and validate the result.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: ChartConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.palette.is_empty(), "palette must not be empty");
        anyhow::ensure!(
            self.inner_width() > 0.0 && self.inner_height() > 0.0,
            "plot area must be positive, got {}x{}",
            self.inner_width(),
            self.inner_height()
        );
        anyhow::ensure!(
            self.y_headroom >= 1.0,
            "y_headroom must be at least 1.0, got {}",
            self.y_headroom
        );
        anyhow::ensure!(
            (0.0..1.0).contains(&self.band_padding),
            "band_padding must be in [0, 1), got {}",
            self.band_padding
        );
        anyhow::ensure!(
            !self.category_column.is_empty(),
            "category_column must not be empty"
        );
        Ok(())
    }

    /// Width of the plot area inside the margins.
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Height of the plot area inside the margins.
    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_chart() {
        let config = ChartConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.inner_width(), 880.0);
        assert_eq!(config.inner_height(), 440.0);
        assert_eq!(config.palette.len(), 10);
        assert_eq!(config.category_column, "Industry");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            ChartConfig::from_json(r#"{ "title": "By Sector", "margin": { "left": 100 } }"#)
                .unwrap();
        assert_eq!(config.title, "By Sector");
        assert_eq!(config.margin.left, 100.0);
        assert_eq!(config.margin.top, 60.0);
        assert_eq!(config.transition_ms, 750.0);
    }

    #[test]
    fn rejects_empty_palette() {
        assert!(ChartConfig::from_json(r#"{ "palette": [] }"#).is_err());
    }

    #[test]
    fn rejects_headroom_below_one() {
        assert!(ChartConfig::from_json(r#"{ "y_headroom": 0.5 }"#).is_err());
    }

    #[test]
    fn rejects_margins_larger_than_canvas() {
        assert!(ChartConfig::from_json(r#"{ "width": 100 }"#).is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(ChartConfig::from_json("{ not json").is_err());
    }
}
