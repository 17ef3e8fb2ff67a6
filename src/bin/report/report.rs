// Scenario Report Types
// Structured JSON output: constants used, per-scenario inputs, results and verdict

use pcam_engine::{CycleComparison, ModelConstants, Preset, ScenarioParams, SimulationResult};
use serde::Serialize;

// ─── Single Scenario ────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    pub params: ScenarioParams,
    pub result: SimulationResult,
    pub comparison: CycleComparison,
}

impl ScenarioReport {
    pub fn new(name: impl Into<String>, constants: &ModelConstants, params: ScenarioParams) -> Self {
        let engine = pcam_engine::EconomicsEngine::new(*constants);
        let result = engine.compute(&params);
        let comparison = CycleComparison::from_result(&params, &result);
        Self { name: name.into(), description: None, params, result, comparison }
    }

    pub fn for_preset(preset: Preset, constants: &ModelConstants) -> Self {
        Self {
            description: Some(preset.description()),
            ..Self::new(preset.name(), constants, preset.params())
        }
    }
}

// ─── Top-Level Report ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct Report {
    pub timestamp: String,
    pub version: &'static str,
    pub constants: ModelConstants,
    pub summary: Summary,
    pub scenarios: Vec<ScenarioReport>,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub total: usize,
    pub closed_preferred: usize,
    pub open_preferred: usize,
}

impl Summary {
    pub fn from_scenarios(scenarios: &[ScenarioReport]) -> Self {
        let closed_preferred = scenarios
            .iter()
            .filter(|s| s.comparison.preferred == pcam_engine::Cycle::Closed)
            .count();
        Self {
            total: scenarios.len(),
            closed_preferred,
            open_preferred: scenarios.len() - closed_preferred,
        }
    }
}
