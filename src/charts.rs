use crate::models::{ChartSnapshot, DailySample};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Doughnut,
    Line,
}

/// Named canvases on the page. Each holds at most one live chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CanvasTarget {
    Overview,
    Budget,
    Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub values: Vec<f64>,
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
}

pub const HOURS_PER_DAY: f64 = 24.0;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub fn overview(sleep: f64, study: f64, screen: f64) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        labels: strings(&["Sleep", "Study", "Screen Time"]),
        datasets: vec![Dataset {
            label: "Hours".to_string(),
            values: vec![sleep, study, screen],
            colors: strings(&[
                "rgba(139,92,246,0.95)",
                "rgba(6,182,212,0.95)",
                "rgba(249,115,22,0.95)",
            ]),
        }],
        y_min: Some(0.0),
        y_max: None,
    }
}

/// The day split into tracked hours and whatever is left of 24.
pub fn budget(sleep: f64, study: f64, screen: f64) -> ChartSpec {
    let other = (HOURS_PER_DAY - (sleep + study + screen)).max(0.0);
    ChartSpec {
        kind: ChartKind::Doughnut,
        labels: strings(&["Sleep", "Study", "Screen", "Other"]),
        datasets: vec![Dataset {
            label: "Hours".to_string(),
            values: vec![sleep, study, screen, other],
            colors: strings(&["#8b5cf6", "#06b6d4", "#f97316", "#374151"]),
        }],
        y_min: None,
        y_max: None,
    }
}

pub fn trend(samples: &[DailySample]) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Line,
        labels: samples
            .iter()
            .map(|sample| sample.day_label().to_string())
            .collect(),
        datasets: vec![Dataset {
            label: "Performance".to_string(),
            values: samples.iter().map(|sample| f64::from(sample.score())).collect(),
            colors: strings(&["#8b5cf6", "rgba(139,92,246,0.12)"]),
        }],
        y_min: Some(0.0),
        y_max: Some(100.0),
    }
}

/// Whatever draws a spec onto a canvas. Handles must be destroyed before the
/// canvas is drawn on again.
pub trait ChartSurface {
    type Handle;

    fn render(&mut self, target: CanvasTarget, spec: &ChartSpec) -> Self::Handle;

    fn destroy(&mut self, handle: Self::Handle);
}

/// Current handle per canvas. `replace` is the only way to draw.
pub struct RenderRegistry<C: ChartSurface> {
    surface: C,
    current: BTreeMap<CanvasTarget, C::Handle>,
}

impl<C: ChartSurface> RenderRegistry<C> {
    pub fn new(surface: C) -> Self {
        Self {
            surface,
            current: BTreeMap::new(),
        }
    }

    pub fn replace(&mut self, target: CanvasTarget, spec: &ChartSpec) -> &C::Handle {
        if let Some(previous) = self.current.remove(&target) {
            debug!(?target, "disposing previous chart");
            self.surface.destroy(previous);
        }
        let handle = self.surface.render(target, spec);
        self.current.entry(target).or_insert(handle)
    }

    pub fn current(&self, target: CanvasTarget) -> Option<&C::Handle> {
        self.current.get(&target)
    }

    pub fn handles(&self) -> impl Iterator<Item = (&CanvasTarget, &C::Handle)> {
        self.current.iter()
    }

    pub fn surface(&self) -> &C {
        &self.surface
    }
}

/// Keeps the latest spec per canvas for the browser to draw.
#[derive(Debug, Default)]
pub struct SpecSurface {
    revision: u64,
    live: usize,
}

impl SpecSurface {
    pub fn live(&self) -> usize {
        self.live
    }
}

impl ChartSurface for SpecSurface {
    type Handle = ChartSnapshot;

    fn render(&mut self, target: CanvasTarget, spec: &ChartSpec) -> ChartSnapshot {
        self.revision += 1;
        self.live += 1;
        ChartSnapshot {
            target,
            revision: self.revision,
            spec: spec.clone(),
        }
    }

    fn destroy(&mut self, _handle: ChartSnapshot) {
        self.live = self.live.saturating_sub(1);
    }
}
