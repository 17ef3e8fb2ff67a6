// Copyright 2026 Hypermesh Foundation. All rights reserved.
// pCAM Relocation Simulator - Caller-owned Session State

//! The mutable "current scenario" an interactive front end works on.
//!
//! The engine stays stateless; this is the only place parameters change, and
//! every change is validated before it lands. A rejected edit or import
//! leaves the previous parameters untouched.

use crate::comparison::CycleComparison;
use crate::constants::ModelConstants;
use crate::economics::EconomicsEngine;
use crate::params_io::{self, ImportError};
use crate::scenarios::Preset;
use crate::types::{DomainViolation, ParamKey, ScenarioParams, SimulationResult};

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSession {
    engine: EconomicsEngine,
    params: ScenarioParams,
}

impl Default for ScenarioSession {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

impl ScenarioSession {
    pub fn new(engine: EconomicsEngine, params: ScenarioParams) -> Self {
        Self { engine, params }
    }

    pub fn from_preset(preset: Preset) -> Self {
        Self::new(EconomicsEngine::default(), preset.params())
    }

    pub fn with_constants(constants: ModelConstants, preset: Preset) -> Self {
        Self::new(EconomicsEngine::new(constants), preset.params())
    }

    pub fn params(&self) -> &ScenarioParams {
        &self.params
    }

    pub fn engine(&self) -> &EconomicsEngine {
        &self.engine
    }

    pub fn load_preset(&mut self, preset: Preset) {
        log::info!("loading {preset} scenario");
        self.params = preset.params();
    }

    /// Update one parameter. Out-of-domain values are refused.
    pub fn set(&mut self, key: ParamKey, value: f64) -> Result<(), DomainViolation> {
        if let Err(e) = key.domain_check(value) {
            log::warn!("rejected edit: {e}");
            return Err(e);
        }
        self.params = self.params.with(key, value);
        Ok(())
    }

    /// Replace all parameters from a key/value table, or none of them.
    pub fn import_csv(&mut self, text: &str) -> Result<(), ImportError> {
        match params_io::parse_csv(text) {
            Ok(params) => {
                log::info!("imported scenario parameters");
                self.params = params;
                Ok(())
            }
            Err(e) => {
                log::warn!("rejected parameter import: {e}");
                Err(e)
            }
        }
    }

    pub fn export_csv(&self) -> Result<String, csv::Error> {
        params_io::to_csv(&self.params)
    }

    /// Fresh computation on every call; nothing is cached.
    pub fn result(&self) -> SimulationResult {
        self.engine.compute(&self.params)
    }

    pub fn summary(&self) -> CycleComparison {
        CycleComparison::from_result(&self.params, &self.result())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_conservative_preset() {
        let session = ScenarioSession::default();
        assert_eq!(*session.params(), Preset::Conservative.params());
    }

    #[test]
    fn load_preset_replaces_everything() {
        let mut session = ScenarioSession::default();
        session.load_preset(Preset::Optimistic);
        assert_eq!(*session.params(), Preset::Optimistic.params());
    }

    #[test]
    fn set_updates_and_recomputes() {
        let mut session = ScenarioSession::default();
        let before = session.result();
        session.set(ParamKey::BlackMassVolume, 50_000.0).expect("test: valid edit");
        assert_eq!(session.params().black_mass_volume, 50_000.0);
        assert!(session.result().metals.ni > before.metals.ni);
    }

    #[test]
    fn rejected_edit_keeps_previous_value() {
        let mut session = ScenarioSession::default();
        let err = session.set(ParamKey::ShareNmc, 130.0).unwrap_err();
        assert_eq!(err.key, ParamKey::ShareNmc);
        assert_eq!(*session.params(), Preset::Conservative.params());
    }

    #[test]
    fn failed_import_is_atomic() {
        let mut session = ScenarioSession::from_preset(Preset::Pessimistic);
        let bad = "blackMassVolume,90000\nshareNMC,abc\n";
        assert!(session.import_csv(bad).is_err());
        assert_eq!(*session.params(), Preset::Pessimistic.params());
    }

    #[test]
    fn export_then_import_restores_params() {
        let mut source = ScenarioSession::from_preset(Preset::Optimistic);
        source.set(ParamKey::PcamPremium, 6.5).expect("test: valid edit");
        let csv = source.export_csv().expect("test: export");

        let mut target = ScenarioSession::default();
        target.import_csv(&csv).expect("test: import");
        assert_eq!(target.params(), source.params());
        assert_eq!(target.result(), source.result());
    }

    #[test]
    fn custom_constants_are_used() {
        let mut constants = ModelConstants::default();
        constants.process.hydro_cost_per_tonne = 3000.0;
        let session = ScenarioSession::with_constants(constants, Preset::Conservative);
        assert_eq!(session.result().financials.open.cost, 75_000_000.0);
        assert_eq!(session.engine().constants().process.hydro_cost_per_tonne, 3000.0);
    }

    #[test]
    fn summary_tracks_current_params() {
        let mut session = ScenarioSession::default();
        session.load_preset(Preset::Pessimistic);
        let summary = session.summary();
        assert_eq!(summary.kpis.share_nmc, 60.0);
    }
}
