// Copyright 2026 Hypermesh Foundation. All rights reserved.
// pCAM Relocation Simulator - open vs closed cycle black mass economics

pub mod types;
pub mod constants;
pub mod economics;
pub mod scenarios;
pub mod params_io;
pub mod session;
pub mod comparison;
pub mod fleet;
pub mod adapter;

pub use types::*;
pub use constants::{
    ChemistryComposition, CompositionTable, ConstantsError, MarketConstants, ModelConstants,
    ProcessAssumptions,
};
pub use economics::{compute, EconomicsEngine};
pub use scenarios::{Preset, PresetError};
pub use params_io::ImportError;
pub use session::ScenarioSession;
pub use comparison::{Cycle, CycleComparison};
pub use fleet::FleetInputs;

use serde::Serialize;
use wasm_bindgen::prelude::*;

// ─── WASM Interface ──────────────────────────────────────────────────────────

/// Panic hook and console logger, installed once per page.
fn init_browser_hooks() {
    #[cfg(target_arch = "wasm32")]
    {
        static INIT: std::sync::Once = std::sync::Once::new();
        INIT.call_once(|| {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            let _ = console_log::init_with_level(log::Level::Info);
        });
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Stateless entry point: one parameter record in, one result record out.
#[wasm_bindgen]
pub fn compute_scenario(params: JsValue) -> Result<JsValue, JsValue> {
    init_browser_hooks();
    let params: ScenarioParams = serde_wasm_bindgen::from_value(params).map_err(js_err)?;
    to_js(&compute(&params))
}

#[wasm_bindgen]
pub fn preset_params(name: &str) -> Result<JsValue, JsValue> {
    let preset: Preset = name.parse().map_err(js_err)?;
    to_js(&preset.params())
}

#[wasm_bindgen(js_name = paramCatalog)]
pub fn param_catalog_js() -> Result<JsValue, JsValue> {
    to_js(&param_catalog())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FleetEstimate {
    black_mass_tonnes: f64,
    metals: RecoveredMetals,
}

#[wasm_bindgen]
pub fn estimate_fleet(inputs: JsValue) -> Result<JsValue, JsValue> {
    let inputs: FleetInputs = serde_wasm_bindgen::from_value(inputs).map_err(js_err)?;
    to_js(&FleetEstimate {
        black_mass_tonnes: inputs.black_mass_tonnes(),
        metals: inputs.recoverable_metals(),
    })
}

/// Browser-side handle on a [`ScenarioSession`].
#[wasm_bindgen]
pub struct PcamSimulator {
    session: ScenarioSession,
}

#[wasm_bindgen]
impl PcamSimulator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        init_browser_hooks();
        Self { session: ScenarioSession::default() }
    }

    pub fn load_preset(&mut self, name: &str) -> Result<(), JsValue> {
        let preset: Preset = name.parse().map_err(js_err)?;
        self.session.load_preset(preset);
        Ok(())
    }

    pub fn set_param(&mut self, key: &str, value: f64) -> Result<(), JsValue> {
        let key: ParamKey = key.parse().map_err(js_err)?;
        self.session.set(key, value).map_err(js_err)
    }

    pub fn import_csv(&mut self, text: &str) -> Result<(), JsValue> {
        self.session.import_csv(text).map_err(js_err)
    }

    pub fn export_csv(&self) -> Result<String, JsValue> {
        self.session.export_csv().map_err(js_err)
    }

    pub fn params(&self) -> Result<JsValue, JsValue> {
        to_js(self.session.params())
    }

    pub fn result(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.result())
    }

    pub fn summary(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.summary())
    }

    /// Back to the conservative base case.
    pub fn reset(&mut self) {
        self.session = ScenarioSession::default();
    }
}

impl PcamSimulator {
    pub fn session(&self) -> &ScenarioSession {
        &self.session
    }
}

impl Default for PcamSimulator {
    fn default() -> Self {
        Self::new()
    }
}
