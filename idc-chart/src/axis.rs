//! Axis tick models derived from the current scales.

use crate::format::format_tick;
use crate::scale::{BandScale, LinearScale};

/// One category label under its band.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTick {
    pub category: String,
    /// Band center in plot coordinates
    pub x: f64,
}

/// One value label on the count axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueTick {
    pub value: f64,
    /// Vertical position in plot coordinates
    pub y: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Axes {
    pub categories: Vec<CategoryTick>,
    pub values: Vec<ValueTick>,
    /// How long tick movement should animate
    pub duration_ms: f64,
}

impl Axes {
    pub fn build(
        x: &BandScale,
        y: &LinearScale,
        tick_count: usize,
        locale: &str,
        duration_ms: f64,
    ) -> Self {
        let categories = x
            .domain()
            .iter()
            .filter_map(|category| {
                x.center(category).map(|x| CategoryTick {
                    category: category.clone(),
                    x,
                })
            })
            .collect();

        let step = y.tick_step(tick_count);
        let values = y
            .ticks(tick_count)
            .into_iter()
            .map(|value| ValueTick {
                value,
                y: y.scale(value),
                label: format_tick(value, step, locale),
            })
            .collect();

        Self {
            categories,
            values,
            duration_ms,
        }
    }
}
