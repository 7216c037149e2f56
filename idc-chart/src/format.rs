//! Number formatting for tooltip counts and axis ticks.

use num_format::{Locale, ToFormattedString};

/// Map a locale tag to a `num_format::Locale`, defaulting to English.
fn map_locale(tag: &str) -> Locale {
    Locale::from_name(tag).unwrap_or(Locale::en)
}

/// Count with thousands grouping, e.g. `12,345`.
pub fn format_count(count: u64, locale: &str) -> String {
    count.to_formatted_string(&map_locale(locale))
}

/// Decimal exponent of `value`, as in `1.5e-2` → `-2`.
fn exponent(value: f64) -> i32 {
    format!("{:e}", value.abs())
        .split('e')
        .nth(1)
        .and_then(|e| e.parse().ok())
        .unwrap_or(0)
}

/// Fraction digits needed to tell ticks `step` apart.
pub fn tick_precision(step: f64) -> usize {
    if !step.is_finite() || step == 0.0 {
        return 0;
    }
    (-exponent(step)).max(0) as usize
}

/// Axis tick label: grouped integer part, step-derived precision.
pub fn format_tick(value: f64, step: f64, locale: &str) -> String {
    let precision = tick_precision(step);
    let fixed = format!("{:.*}", precision, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let locale = map_locale(locale);
    let mut label = String::new();
    if value < 0.0 && fixed.chars().any(|c| c != '0' && c != '.') {
        label.push_str(locale.minus_sign());
    }
    label.push_str(&int_part.parse::<u64>().unwrap_or(0).to_formatted_string(&locale));
    if let Some(frac_part) = frac_part {
        label.push_str(locale.decimal());
        label.push_str(frac_part);
    }
    label
}
