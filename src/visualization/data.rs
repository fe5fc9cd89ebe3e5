use serde::Serialize;
use tracing::warn;

use crate::analyzer::{AxisDimension, RunSample};
use crate::model::{color_for_label, DietGroup};

pub const CHART_TITLE: &str = "Environmental Impact of Different Diet Types";
pub const ANNOTATION_TITLE: &str = "MC Run Selected";

/// Everything the embedded runtime needs to draw the chart
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub dimensions: Vec<AxisDimension>,
    pub lines: Vec<ChartLine>,
    pub legend: Vec<LegendEntry>,
    pub annotation: Annotation,
    pub layout: ChartLayout,
}

/// One polyline, i.e. one sampled row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLine {
    pub diet_group: String,
    /// `None` when the diet group is not one of the known six
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub title: String,
    pub text: String,
    /// Paper coordinates, 0..1 from the bottom-left corner
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Margin {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
    pub font_family: String,
    pub font_size: u32,
    pub title_font_size: u32,
    pub label_font_size: u32,
    pub legend_font_size: u32,
    /// Axis label rotation in degrees
    pub label_angle: f64,
    /// Opacity of lines filtered out by a brush
    pub unselected_opacity: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 650,
            margin: Margin { left: 120, right: 80, top: 200, bottom: 120 },
            font_family: "Arial".to_string(),
            font_size: 12,
            title_font_size: 24,
            label_font_size: 14,
            legend_font_size: 14,
            label_angle: 30.0,
            unselected_opacity: 0.9,
        }
    }
}

/// Legend entries for every diet group, whether or not it was sampled
pub fn legend_entries() -> Vec<LegendEntry> {
    DietGroup::ALL
        .iter()
        .map(|g| LegendEntry {
            name: g.label().to_string(),
            color: g.color().to_string(),
        })
        .collect()
}

impl ChartSpec {
    pub fn build(sample: &RunSample, dimensions: Vec<AxisDimension>) -> Self {
        let lines = sample
            .rows
            .iter()
            .map(|row| {
                let color = color_for_label(&row.diet_group);
                if color.is_none() {
                    warn!(diet_group = %row.diet_group, "no color mapped for diet group");
                }
                ChartLine {
                    diet_group: row.diet_group.clone(),
                    color: color.map(str::to_string),
                }
            })
            .collect();

        Self {
            title: CHART_TITLE.to_string(),
            dimensions,
            lines,
            legend: legend_entries(),
            annotation: Annotation {
                title: ANNOTATION_TITLE.to_string(),
                text: sample.run_ids.join(","),
                x: 1.0,
                y: 0.95,
            },
            layout: ChartLayout::default(),
        }
    }
}
