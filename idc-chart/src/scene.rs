//! Keyed reconciliation of bars.
//!
//! Rendering is split in two halves:
//!
//! 1. [`diff_keys`] decides *what changed*: which categories entered, which
//!    persist and which left, matched by category identity.
//! 2. [`BarScene::reconcile`] decides *how it moves*: every bar gets a
//!    `from` geometry (where it is right now, even mid-transition) and a `to`
//!    geometry, interpolated by the scene's shared [`Transition`].
//!
//! Entering bars grow from the baseline, exiting bars shrink into it and are
//! dropped by [`BarScene::settle`] once their transition has finished.

use crate::transition::{lerp, Transition};
use std::collections::{HashMap, HashSet};

/// Position and size of one bar in plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarGeometry {
    pub fn lerp(&self, to: &BarGeometry, t: f64) -> BarGeometry {
        BarGeometry {
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
            width: lerp(self.width, to.width, t),
            height: lerp(self.height, to.height, t),
        }
    }

    /// Same horizontal placement, zero height, sitting on `baseline`.
    pub fn collapsed(&self, baseline: f64) -> BarGeometry {
        BarGeometry {
            x: self.x,
            y: baseline,
            width: self.width,
            height: 0.0,
        }
    }
}

/// Where a render wants one category's bar to end up.
#[derive(Debug, Clone, PartialEq)]
pub struct BarTarget {
    pub category: String,
    pub count: u64,
    pub color: String,
    pub geometry: BarGeometry,
}

/// Result of matching the current bars against the next point set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyedDiff {
    /// In next but not current, in next order
    pub entered: Vec<String>,
    /// In both, in next order
    pub updated: Vec<String>,
    /// In current but not next, in current order
    pub exited: Vec<String>,
}

pub fn diff_keys<'a, 'b>(
    current: impl IntoIterator<Item = &'a str>,
    next: impl IntoIterator<Item = &'b str>,
) -> KeyedDiff {
    let current: Vec<&str> = current.into_iter().collect();
    let next: Vec<&str> = next.into_iter().collect();
    let current_set: HashSet<&str> = current.iter().copied().collect();
    let next_set: HashSet<&str> = next.iter().copied().collect();

    let mut diff = KeyedDiff::default();
    for key in &next {
        if current_set.contains(key) {
            diff.updated.push(key.to_string());
        } else {
            diff.entered.push(key.to_string());
        }
    }
    diff.exited = current
        .iter()
        .filter(|key| !next_set.contains(*key))
        .map(|key| key.to_string())
        .collect();
    diff
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarPhase {
    Entering,
    Updating,
    Exiting,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneBar {
    pub category: String,
    pub count: u64,
    pub color: String,
    pub phase: BarPhase,
    pub selected: bool,
    pub hovered: bool,
    from: BarGeometry,
    to: BarGeometry,
}

impl SceneBar {
    pub fn target(&self) -> BarGeometry {
        self.to
    }
}

/// Snapshot of one bar at a point in time, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct BarFrame {
    pub category: String,
    pub count: u64,
    pub color: String,
    pub phase: BarPhase,
    pub selected: bool,
    pub hovered: bool,
    pub geometry: BarGeometry,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarScene {
    bars: Vec<SceneBar>,
    transition: Transition,
    baseline: f64,
}

impl Default for BarScene {
    fn default() -> Self {
        Self::new()
    }
}

impl BarScene {
    pub fn new() -> Self {
        Self {
            bars: Vec::new(),
            transition: Transition::instant(0.0),
            baseline: 0.0,
        }
    }

    pub fn bars(&self) -> &[SceneBar] {
        &self.bars
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Retarget the scene at `targets`, starting `transition` now.
    ///
    /// Bars already in flight restart from their current interpolated
    /// geometry, so a second render before the first finishes never jumps.
    pub fn reconcile(
        &mut self,
        targets: Vec<BarTarget>,
        baseline: f64,
        transition: Transition,
    ) -> KeyedDiff {
        let now = transition.start_ms;
        let diff = diff_keys(
            self.bars.iter().map(|b| b.category.as_str()),
            targets.iter().map(|t| t.category.as_str()),
        );

        let previous_transition = self.transition;
        let mut previous: HashMap<String, SceneBar> = std::mem::take(&mut self.bars)
            .into_iter()
            .map(|bar| (bar.category.clone(), bar))
            .collect();

        let mut bars = Vec::with_capacity(targets.len() + diff.exited.len());
        for target in targets {
            let bar = match previous.remove(&target.category) {
                Some(old) => SceneBar {
                    from: old.geometry_at(previous_transition, now),
                    to: target.geometry,
                    phase: BarPhase::Updating,
                    selected: old.selected,
                    hovered: old.hovered,
                    category: target.category,
                    count: target.count,
                    color: target.color,
                },
                None => SceneBar {
                    from: target.geometry.collapsed(baseline),
                    to: target.geometry,
                    phase: BarPhase::Entering,
                    selected: false,
                    hovered: false,
                    category: target.category,
                    count: target.count,
                    color: target.color,
                },
            };
            bars.push(bar);
        }
        for key in &diff.exited {
            if let Some(old) = previous.remove(key) {
                let current = old.geometry_at(previous_transition, now);
                bars.push(SceneBar {
                    from: current,
                    to: current.collapsed(baseline),
                    phase: BarPhase::Exiting,
                    hovered: false,
                    ..old
                });
            }
        }

        self.bars = bars;
        self.transition = transition;
        self.baseline = baseline;
        diff
    }

    /// Mark exactly the bar of `selected` (if any) as selected.
    pub fn mark_selected(&mut self, selected: Option<&str>) {
        for bar in &mut self.bars {
            bar.selected = selected == Some(bar.category.as_str());
        }
    }

    pub fn set_hovered(&mut self, category: &str, hovered: bool) {
        if let Some(bar) = self.bars.iter_mut().find(|b| b.category == category) {
            bar.hovered = hovered;
        }
    }

    /// Bars interpolated at `now_ms`.
    pub fn frame(&self, now_ms: f64) -> Vec<BarFrame> {
        self.bars
            .iter()
            .map(|bar| BarFrame {
                category: bar.category.clone(),
                count: bar.count,
                color: bar.color.clone(),
                phase: bar.phase,
                selected: bar.selected,
                hovered: bar.hovered,
                geometry: bar.geometry_at(self.transition, now_ms),
            })
            .collect()
    }

    /// True while a transition is running or exited bars await removal.
    pub fn is_animating(&self, now_ms: f64) -> bool {
        !self.transition.is_complete(now_ms)
            || self.bars.iter().any(|b| b.phase == BarPhase::Exiting)
    }

    /// Once the transition is over: drop exited bars and pin the rest.
    pub fn settle(&mut self, now_ms: f64) {
        if !self.transition.is_complete(now_ms) {
            return;
        }
        self.bars.retain(|b| b.phase != BarPhase::Exiting);
        for bar in &mut self.bars {
            bar.from = bar.to;
            bar.phase = BarPhase::Updating;
        }
    }
}

impl SceneBar {
    fn geometry_at(&self, transition: Transition, now_ms: f64) -> BarGeometry {
        self.from.lerp(&self.to, transition.progress(now_ms))
    }
}
