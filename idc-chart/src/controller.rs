//! The chart controller: one explicit state value plus the operations that
//! mutate it and project it onto bars, axes and the tooltip.
//!
//! Every operation takes its inputs as arguments (including the clock), so
//! sorting, selection and hover can be driven directly in tests without a
//! pointer or a drawing surface.

use crate::axis::Axes;
use crate::config::ChartConfig;
use crate::format::format_count;
use crate::palette::ColorAssignment;
use crate::scale::{count_domain_max, BandScale, LinearScale};
use crate::scene::{BarFrame, BarGeometry, BarScene, BarTarget, KeyedDiff};
use crate::tooltip::{Tooltip, TooltipContent};
use crate::transition::{Easing, Transition};
use idc_data::aggregate::{aggregate, max_count, sort_points};
use idc_data::record::parse_records;
use idc_data::{AggregatedPoint, LoadError, Record, SortMode};

/// Aggregated data, ordering and selection for one page session.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartState {
    /// Points in current display order
    pub points: Vec<AggregatedPoint>,
    pub sort_mode: SortMode,
    pub selected_category: Option<String>,
    /// Fixed once after the first aggregation
    pub color_assignment: ColorAssignment,
}

impl ChartState {
    /// Aggregate, sort high to low and fix the colors in that order.
    pub fn from_records(records: &[Record], config: &ChartConfig) -> Self {
        let mut points = aggregate(records, &config.unspecified_label);
        let sort_mode = SortMode::Descending;
        sort_points(&mut points, sort_mode);
        let color_assignment = ColorAssignment::from_categories(
            config.palette.clone(),
            points.iter().map(|p| p.category.as_str()),
        );
        Self {
            points,
            sort_mode,
            selected_category: None,
            color_assignment,
        }
    }

    pub fn toggle_sort(&mut self) -> SortMode {
        self.sort_mode = self.sort_mode.toggled();
        sort_points(&mut self.points, self.sort_mode);
        self.sort_mode
    }

    /// Select `category`, or clear the selection if it already is selected.
    pub fn toggle_selection(&mut self, category: &str) -> Option<&str> {
        if self.selected_category.as_deref() == Some(category) {
            self.selected_category = None;
        } else {
            self.selected_category = Some(category.to_string());
        }
        self.selected_category.as_deref()
    }

    pub fn count_of(&self, category: &str) -> Option<u64> {
        self.points
            .iter()
            .find(|p| p.category == category)
            .map(|p| p.count)
    }
}

#[derive(Debug, Clone)]
pub struct ChartController {
    config: ChartConfig,
    state: ChartState,
    scene: BarScene,
    axes: Axes,
    tooltip: Tooltip,
}

impl ChartController {
    /// Build the chart from the fetched source text.
    ///
    /// A fetch failure is passed through unchanged; parse failures become
    /// [`LoadError::Parse`] or [`LoadError::MissingColumn`].
    pub fn initialize(
        config: ChartConfig,
        fetched: Result<String, LoadError>,
    ) -> Result<Self, LoadError> {
        let csv_data = fetched?;
        let records = parse_records(&csv_data, &config.category_column)?;
        Ok(Self::from_records(config, &records))
    }

    /// Aggregate `records` and perform the first, unanimated render.
    pub fn from_records(config: ChartConfig, records: &[Record]) -> Self {
        let state = ChartState::from_records(records, &config);
        let tooltip = Tooltip::new(config.tooltip_offset);
        let mut controller = Self {
            config,
            state,
            scene: BarScene::new(),
            axes: Axes::default(),
            tooltip,
        };
        controller.render(false, 0.0);
        controller
    }

    /// Project the state onto scales, axes and bars.
    ///
    /// With `animated == false` everything lands at its target immediately.
    pub fn render(&mut self, animated: bool, now_ms: f64) -> KeyedDiff {
        let duration_ms = if animated {
            self.config.transition_ms
        } else {
            0.0
        };
        let transition = Transition::new(now_ms, duration_ms, Easing::CubicInOut);

        let inner_height = self.config.inner_height();
        let x = BandScale::new(
            self.state.points.iter().map(|p| p.category.clone()).collect(),
            (0.0, self.config.inner_width()),
            self.config.band_padding,
        );
        let y = LinearScale::new(
            (
                0.0,
                count_domain_max(max_count(&self.state.points), self.config.y_headroom),
            ),
            (inner_height, 0.0),
        );

        self.axes = Axes::build(
            &x,
            &y,
            self.config.y_tick_count,
            &self.config.locale,
            duration_ms,
        );

        let bandwidth = x.bandwidth();
        let targets = self
            .state
            .points
            .iter()
            .map(|point| {
                let top = y.scale(point.count as f64);
                BarTarget {
                    category: point.category.clone(),
                    count: point.count,
                    color: self.color_of(&point.category),
                    geometry: BarGeometry {
                        x: x.position(&point.category).unwrap_or(0.0),
                        y: top,
                        width: bandwidth,
                        height: inner_height - top,
                    },
                }
            })
            .collect();

        let diff = self.scene.reconcile(targets, inner_height, transition);
        self.scene
            .mark_selected(self.state.selected_category.as_deref());
        log::debug!(
            "render: {} bars ({} entered, {} exited), animated={}",
            diff.updated.len() + diff.entered.len(),
            diff.entered.len(),
            diff.exited.len(),
            animated
        );
        diff
    }

    /// Flip the sort direction and animate the bars into the new order.
    pub fn toggle_sort(&mut self, now_ms: f64) -> SortMode {
        let mode = self.state.toggle_sort();
        log::debug!("sort: now {:?}", mode);
        self.render(true, now_ms);
        mode
    }

    /// Label for the sort control: the action the next toggle performs.
    pub fn sort_button_label(&self) -> &'static str {
        self.state.sort_mode.toggle_label()
    }

    pub fn on_hover(&mut self, category: &str) {
        if self.state.selected_category.as_deref() != Some(category) {
            self.scene.set_hovered(category, true);
        }
        if let Some(count) = self.state.count_of(category) {
            let count_label = format!(
                "{} {}",
                format_count(count, &self.config.locale),
                self.config.count_noun
            );
            self.tooltip.show(
                TooltipContent {
                    category: category.to_string(),
                    count_label,
                },
                self.config.tooltip_fade_in_ms,
            );
        }
    }

    pub fn on_move(&mut self, page_x: f64, page_y: f64) {
        self.tooltip.move_to(page_x, page_y);
    }

    pub fn on_leave(&mut self, category: &str) {
        self.scene.set_hovered(category, false);
        self.tooltip.hide(self.config.tooltip_fade_out_ms);
    }

    /// Toggle selection of `category`. Only the selected marks change.
    pub fn on_click(&mut self, category: &str) {
        let selected = self.state.toggle_selection(category).map(str::to_string);
        log::debug!("select: {:?}", selected);
        self.scene.mark_selected(selected.as_deref());
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn state(&self) -> &ChartState {
        &self.state
    }

    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Bars as they should be drawn at `now_ms`.
    pub fn frame(&self, now_ms: f64) -> Vec<BarFrame> {
        self.scene.frame(now_ms)
    }

    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.scene.is_animating(now_ms)
    }

    pub fn settle(&mut self, now_ms: f64) {
        self.scene.settle(now_ms);
    }

    fn color_of(&self, category: &str) -> String {
        self.state
            .color_assignment
            .get(category)
            .unwrap_or("#000000")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(categories: &[&str]) -> ChartController {
        let records: Vec<Record> = categories.iter().map(|c| Record::new(*c)).collect();
        ChartController::from_records(ChartConfig::default(), &records)
    }

    fn order(controller: &ChartController) -> Vec<(String, u64)> {
        controller
            .state()
            .points
            .iter()
            .map(|p| (p.category.clone(), p.count))
            .collect()
    }

    fn pairs(expected: &[(&str, u64)]) -> Vec<(String, u64)> {
        expected.iter().map(|(c, n)| (c.to_string(), *n)).collect()
    }

    #[test]
    fn initial_render_is_instant_and_descending() {
        let chart = controller(&["Fintech", "SaaS", "SaaS"]);
        assert_eq!(order(&chart), pairs(&[("SaaS", 2), ("Fintech", 1)]));
        assert!(!chart.is_animating(0.0));

        let frame = chart.frame(0.0);
        assert_eq!(frame.len(), 2);
        let saas = &frame[0];
        assert_eq!(saas.category, "SaaS");
        // y domain is [0, 2.2]; the tallest bar keeps 10% headroom
        let inner = chart.config().inner_height();
        assert!((saas.geometry.height - inner / 1.1).abs() < 1e-9);
        assert!(frame[0].geometry.x < frame[1].geometry.x);
    }

    #[test]
    fn toggle_sort_reorders_and_animates() {
        let mut chart = controller(&["SaaS", "SaaS", "Fintech"]);
        assert_eq!(chart.sort_button_label(), "Sort: Low → High");

        assert_eq!(chart.toggle_sort(1000.0), SortMode::Ascending);
        assert_eq!(order(&chart), pairs(&[("Fintech", 1), ("SaaS", 2)]));
        assert_eq!(chart.sort_button_label(), "Sort: High → Low");
        assert!(chart.is_animating(1000.0));
        assert_eq!(chart.axes().duration_ms, 750.0);

        let fintech_start = chart
            .frame(1000.0)
            .into_iter()
            .find(|b| b.category == "Fintech")
            .unwrap();
        let fintech_end = chart
            .frame(1750.0)
            .into_iter()
            .find(|b| b.category == "Fintech")
            .unwrap();
        assert!(fintech_start.geometry.x > fintech_end.geometry.x);
        assert!(!chart.is_animating(1750.0));
    }

    #[test]
    fn colors_survive_sorting() {
        let mut chart = controller(&["A", "B", "B", "C", "C", "C"]);
        let before = chart.state().color_assignment.clone();
        let colors_of = |chart: &ChartController| {
            let mut colors: Vec<(String, String)> = chart
                .frame(1e9)
                .into_iter()
                .map(|b| (b.category, b.color))
                .collect();
            colors.sort();
            colors
        };
        let initial = colors_of(&chart);
        for i in 0..5 {
            chart.toggle_sort(i as f64 * 100.0);
            chart.render(false, i as f64 * 100.0 + 50.0);
        }
        assert_eq!(chart.state().color_assignment, before);
        assert_eq!(colors_of(&chart), initial);
        // Colors were fixed in the initial descending order
        assert_eq!(before.get("C"), Some("#FF6B6B"));
        assert_eq!(before.get("A"), Some("#45B7D1"));
    }

    #[test]
    fn click_toggles_exclusive_selection() {
        let mut chart = controller(&["SaaS", "Fintech", "Edtech"]);
        let selected = |chart: &ChartController| {
            chart
                .frame(0.0)
                .into_iter()
                .filter(|b| b.selected)
                .map(|b| b.category)
                .collect::<Vec<_>>()
        };

        chart.on_click("SaaS");
        assert_eq!(selected(&chart), vec!["SaaS"]);
        chart.on_click("Fintech");
        assert_eq!(selected(&chart), vec!["Fintech"]);
        chart.on_click("Fintech");
        assert!(selected(&chart).is_empty());
        assert_eq!(chart.state().selected_category, None);
    }

    #[test]
    fn selection_follows_category_through_sort() {
        let mut chart = controller(&["SaaS", "SaaS", "Fintech"]);
        chart.on_click("Fintech");
        chart.toggle_sort(0.0);
        let frame = chart.frame(750.0);
        assert_eq!(frame[0].category, "Fintech");
        assert!(frame[0].selected);
        assert!(!frame[1].selected);
    }

    #[test]
    fn hover_shows_tooltip_and_leave_hides_it() {
        let mut chart = controller(&["SaaS", "SaaS"]);
        chart.on_hover("SaaS");
        let tooltip = chart.tooltip();
        assert_eq!(tooltip.opacity(), 1.0);
        assert_eq!(tooltip.fade_ms(), 200.0);
        let content = tooltip.content().unwrap();
        assert_eq!(content.category, "SaaS");
        assert_eq!(content.count_label, "2 startups");
        assert!(chart.frame(0.0)[0].hovered);

        chart.on_move(300.0, 400.0);
        assert_eq!(chart.tooltip().position(), (315.0, 372.0));

        chart.on_leave("SaaS");
        assert_eq!(chart.tooltip().opacity(), 0.0);
        assert_eq!(chart.tooltip().fade_ms(), 500.0);
        assert!(!chart.frame(0.0)[0].hovered);
    }

    #[test]
    fn hovering_the_selected_bar_does_not_mark_it() {
        let mut chart = controller(&["SaaS"]);
        chart.on_click("SaaS");
        chart.on_hover("SaaS");
        assert!(!chart.frame(0.0)[0].hovered);
        assert!(chart.tooltip().is_visible());
    }

    #[test]
    fn tooltip_count_uses_thousands_separators() {
        let records: Vec<Record> = (0..1234).map(|_| Record::new("SaaS")).collect();
        let mut chart = ChartController::from_records(ChartConfig::default(), &records);
        chart.on_hover("SaaS");
        assert_eq!(
            chart.tooltip().content().unwrap().count_label,
            "1,234 startups"
        );
    }

    #[test]
    fn empty_dataset_renders_flat_axis() {
        let chart = ChartController::from_records(ChartConfig::default(), &[]);
        assert!(chart.frame(0.0).is_empty());
        assert!(chart.axes().categories.is_empty());
        let top = chart.axes().values.last().unwrap();
        assert_eq!(top.value, 1.0);
        assert_eq!(top.y, 0.0);
    }

    #[test]
    fn initialize_passes_fetch_errors_through() {
        let result = ChartController::initialize(
            ChartConfig::default(),
            Err(LoadError::Fetch("rejected".to_string())),
        );
        assert!(matches!(result, Err(LoadError::Fetch(_))));
    }

    #[test]
    fn initialize_reports_missing_category_column() {
        let result = ChartController::initialize(
            ChartConfig::default(),
            Ok("Company,Sector\nAcme,SaaS\n".to_string()),
        );
        assert!(matches!(result, Err(LoadError::MissingColumn(_))));
    }
}
