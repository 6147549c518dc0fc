//! Output contract for a PRD analysis.
//!
//! Typed deserialization is the schema check: a model reply missing a
//! required field or using an unknown status fails at parse time instead of
//! surfacing as holes in a rendered report. Status-vs-score band consistency
//! is not cross-checked; the model owns that correlation.

use serde::{Deserialize, Serialize};

/// Full analysis of one PRD. Lives for a single request/response cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Persona label as the model reports it, e.g. "Senior PM".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
    /// 0-100.
    pub overall_score: f64,
    pub overall_verdict: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_recommendation: Option<ShipRecommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_rationale: Option<String>,
    pub dimensions: Vec<DimensionResult>,
    /// Coaching note; only the pm-coach persona produces this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_focus: Option<GrowthFocus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionResult {
    pub name: String,
    /// 0-10.
    pub score: f64,
    pub status: DimensionStatus,
    #[serde(default)]
    pub issues: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewrite_example: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionStatus {
    Pass,
    Warning,
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShipRecommendation {
    Ship,
    Revise,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthFocus {
    pub skill: String,
    pub diagnosis: String,
    pub recommendation: String,
}
