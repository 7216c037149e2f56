//! Group-by-count aggregation and count ordering.
//!
//! Aggregation keeps categories in first-encounter order; both sort
//! directions are stable, so ties keep that order no matter how many times
//! the chart is re-sorted.

use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One (category, count) pair of the aggregated dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedPoint {
    pub category: String,
    pub count: u64,
}

impl AggregatedPoint {
    pub fn new(category: impl Into<String>, count: u64) -> Self {
        Self {
            category: category.into(),
            count,
        }
    }
}

/// Direction the points are ordered by count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortMode {
    /// High to low
    #[default]
    Descending,
    /// Low to high
    Ascending,
}

impl SortMode {
    pub fn toggled(self) -> Self {
        match self {
            SortMode::Descending => SortMode::Ascending,
            SortMode::Ascending => SortMode::Descending,
        }
    }

    /// Label of the control that switches away from this mode.
    pub fn toggle_label(self) -> &'static str {
        match self {
            SortMode::Descending => "Sort: Low → High",
            SortMode::Ascending => "Sort: High → Low",
        }
    }
}

/// Count records per category.
///
/// Records without a category are counted under `unspecified_label`, so the
/// counts always sum to `records.len()`.
pub fn aggregate(records: &[Record], unspecified_label: &str) -> Vec<AggregatedPoint> {
    let mut points: Vec<AggregatedPoint> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let category = record.category.as_deref().unwrap_or(unspecified_label);
        match index.get(category) {
            Some(&i) => points[i].count += 1,
            None => {
                index.insert(category, points.len());
                points.push(AggregatedPoint::new(category, 1));
            }
        }
    }

    log::info!(
        "aggregate: {} records into {} categories",
        records.len(),
        points.len()
    );
    points
}

/// Stable sort by count in the given direction.
pub fn sort_points(points: &mut [AggregatedPoint], mode: SortMode) {
    match mode {
        SortMode::Descending => points.sort_by(|a, b| b.count.cmp(&a.count)),
        SortMode::Ascending => points.sort_by(|a, b| a.count.cmp(&b.count)),
    }
}

/// Largest count, or 0 for an empty dataset.
pub fn max_count(points: &[AggregatedPoint]) -> u64 {
    points.iter().map(|p| p.count).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(categories: &[Option<&str>]) -> Vec<Record> {
        categories
            .iter()
            .map(|c| match c {
                Some(c) => Record::new(*c),
                None => Record::unspecified(),
            })
            .collect()
    }

    fn categories(points: &[AggregatedPoint]) -> Vec<&str> {
        points.iter().map(|p| p.category.as_str()).collect()
    }

    #[test]
    fn counts_by_category_in_encounter_order() {
        let input = records(&[Some("SaaS"), Some("SaaS"), Some("Fintech")]);
        let points = aggregate(&input, "Unspecified");
        assert_eq!(
            points,
            vec![
                AggregatedPoint::new("SaaS", 2),
                AggregatedPoint::new("Fintech", 1),
            ]
        );
    }

    #[test]
    fn every_record_lands_in_exactly_one_point() {
        let input = records(&[
            Some("A"),
            None,
            Some("B"),
            Some("A"),
            None,
            Some("C"),
            Some("B"),
            Some("A"),
        ]);
        let points = aggregate(&input, "Unspecified");
        let total: u64 = points.iter().map(|p| p.count).sum();
        assert_eq!(total, input.len() as u64);

        let mut names = categories(&points);
        names.sort();
        names.dedup();
        assert_eq!(names.len(), points.len(), "categories must be unique");
        assert_eq!(
            points.iter().find(|p| p.category == "Unspecified").map(|p| p.count),
            Some(2)
        );
    }

    #[test]
    fn empty_input_aggregates_to_nothing() {
        assert!(aggregate(&[], "Unspecified").is_empty());
        assert_eq!(max_count(&[]), 0);
    }

    #[test]
    fn sort_is_monotone_in_both_directions() {
        let mut points = vec![
            AggregatedPoint::new("A", 3),
            AggregatedPoint::new("B", 9),
            AggregatedPoint::new("C", 1),
            AggregatedPoint::new("D", 5),
        ];
        sort_points(&mut points, SortMode::Descending);
        assert!(points.windows(2).all(|w| w[0].count >= w[1].count));
        sort_points(&mut points, SortMode::Ascending);
        assert!(points.windows(2).all(|w| w[0].count <= w[1].count));
    }

    #[test]
    fn ties_keep_encounter_order_across_toggles() {
        let mut points = vec![
            AggregatedPoint::new("A", 2),
            AggregatedPoint::new("B", 5),
            AggregatedPoint::new("C", 2),
            AggregatedPoint::new("D", 2),
        ];
        sort_points(&mut points, SortMode::Descending);
        let descending = points.clone();
        assert_eq!(categories(&descending), vec!["B", "A", "C", "D"]);

        sort_points(&mut points, SortMode::Ascending);
        assert_eq!(categories(&points), vec!["A", "C", "D", "B"]);

        sort_points(&mut points, SortMode::Descending);
        assert_eq!(points, descending);
    }

    #[test]
    fn toggle_label_names_the_next_action() {
        assert_eq!(SortMode::default(), SortMode::Descending);
        assert_eq!(SortMode::Descending.toggle_label(), "Sort: Low → High");
        assert_eq!(SortMode::Ascending.toggle_label(), "Sort: High → Low");
        assert_eq!(SortMode::Descending.toggled().toggled(), SortMode::Descending);
    }
}
