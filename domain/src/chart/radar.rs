//! Radar (polar) chart built from an answer set
//!
//! The types serialize to a plotly figure (`{"data": [...], "layout": {...}}`)
//! so the same value can be exported as JSON, embedded in an HTML page, or
//! drawn directly.

use crate::assessment::answers::AnswerSet;
use crate::assessment::legend::{AnswerLegend, NOT_RELEVANT};
use serde::{Deserialize, Serialize};

/// Radial tick positions; "not relevant" never gets a ring
pub const RADIAL_TICKS: [u8; 4] = [0, 1, 2, 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Scatterpolar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fill {
    /// Close the polygon and fill its interior
    Toself,
    None,
}

/// The single data trace of the chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolarTrace {
    #[serde(rename = "type")]
    pub kind: TraceKind,
    /// Answer codes (radius)
    pub r: Vec<u8>,
    /// Question labels (angular position), in answer order
    pub theta: Vec<String>,
    pub fill: Fill,
    /// Hover text, one per point
    pub text: Vec<String>,
    pub hoverinfo: String,
}

impl PolarTrace {
    /// Number of plotted points
    pub fn len(&self) -> usize {
        self.r.len()
    }

    pub fn is_empty(&self) -> bool {
        self.r.is_empty()
    }

    /// `(label, code)` pairs in plot order
    pub fn points(&self) -> impl Iterator<Item = (&str, u8)> {
        self.theta.iter().map(String::as_str).zip(self.r.iter().copied())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickMode {
    Array,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadialAxis {
    pub visible: bool,
    pub tickmode: TickMode,
    pub tickvals: Vec<u8>,
    /// Every legend label, including "not relevant"
    pub ticktext: Vec<String>,
    pub range: [u8; 2],
    pub categoryorder: String,
}

impl RadialAxis {
    /// Tick value and the text drawn next to it.
    ///
    /// Labels beyond the last tick value have no ring and are not returned.
    pub fn labeled_ticks(&self) -> impl Iterator<Item = (u8, &str)> {
        self.tickvals
            .iter()
            .copied()
            .zip(self.ticktext.iter().map(String::as_str))
    }

    pub fn max(&self) -> u8 {
        self.range[1]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Clockwise,
    Counterclockwise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AngularAxis {
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolarSettings {
    pub radialaxis: RadialAxis,
    pub angularaxis: AngularAxis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLayout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    pub polar: PolarSettings,
    pub showlegend: bool,
    pub font: Font,
}

/// A radar chart with exactly one trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarChart {
    data: [PolarTrace; 1],
    pub layout: ChartLayout,
}

impl RadarChart {
    /// Default font size of chart text
    pub const DEFAULT_FONT_SIZE: u32 = 12;

    /// Build the chart from answers.
    ///
    /// Answers coded [`NOT_RELEVANT`] are left out; the remaining ones keep
    /// their order and each point's hover text is its own label.
    pub fn from_answers(answers: &AnswerSet, legend: &AnswerLegend) -> Self {
        let (theta, r): (Vec<String>, Vec<u8>) = answers
            .iter()
            .filter(|e| e.code != NOT_RELEVANT)
            .map(|e| (e.label.clone(), e.code))
            .unzip();

        let trace = PolarTrace {
            kind: TraceKind::Scatterpolar,
            r,
            text: theta.clone(),
            theta,
            fill: Fill::Toself,
            hoverinfo: "text".to_string(),
        };

        let layout = ChartLayout {
            title: None,
            polar: PolarSettings {
                radialaxis: RadialAxis {
                    visible: true,
                    tickmode: TickMode::Array,
                    tickvals: RADIAL_TICKS.to_vec(),
                    ticktext: legend.labels().map(str::to_string).collect(),
                    range: [0, 3],
                    categoryorder: "category ascending".to_string(),
                },
                angularaxis: AngularAxis {
                    direction: Direction::Clockwise,
                },
            },
            showlegend: false,
            font: Font {
                size: Self::DEFAULT_FONT_SIZE,
            },
        };

        Self {
            data: [trace],
            layout,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.layout.title = Some(Title { text: title.into() });
        self
    }

    pub fn with_font_size(mut self, size: u32) -> Self {
        self.layout.font.size = size;
        self
    }

    pub fn trace(&self) -> &PolarTrace {
        &self.data[0]
    }

    pub fn radial_axis(&self) -> &RadialAxis {
        &self.layout.polar.radialaxis
    }

    pub fn title(&self) -> Option<&str> {
        self.layout.title.as_ref().map(|t| t.text.as_str())
    }
}
