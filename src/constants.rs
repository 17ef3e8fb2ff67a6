// Copyright 2026 Hypermesh Foundation. All rights reserved.
// pCAM Relocation Simulator - Market, Composition and Process Constants

//! Constant tables read by the economics engine.
//!
//! Every figure here is a placeholder assumption of the model, not a derived
//! physical constant. They are grouped into [`ModelConstants`] so a
//! calibration pass can swap them (e.g. from a JSON file) without touching
//! the algorithm in [`crate::economics`].

use serde::{Deserialize, Serialize};

/// Prices are quoted per kilogram, volumes in tonnes.
pub const KG_PER_TONNE: f64 = 1000.0;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConstantsError {
    #[error("failed to read constants file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid constants JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
}

// ---------------------------------------------------------------------------
// MarketConstants
// ---------------------------------------------------------------------------

/// Base prices in €/kg. Ni, Co and Li scale with the scenario's price index;
/// Mn and the pCAM benchmark do not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConstants {
    /// Li2CO3 equivalent.
    pub lithium: f64,
    /// Sulfate.
    pub nickel: f64,
    /// Sulfate.
    pub cobalt: f64,
    pub manganese: f64,
    /// Imported pCAM benchmark (Asia).
    pub pcam_import: f64,
}

impl Default for MarketConstants {
    fn default() -> Self {
        Self {
            lithium: 20.0,
            nickel: 18.0,
            cobalt: 35.0,
            manganese: 2.0,
            pcam_import: 18.0,
        }
    }
}

// ---------------------------------------------------------------------------
// CompositionTable
// ---------------------------------------------------------------------------

/// Mass fraction of each metal in one tonne of black mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChemistryComposition {
    pub ni: f64,
    pub co: f64,
    pub mn: f64,
    pub li: f64,
}

/// Deserializes field by field over [`CompositionTable::default`], so an
/// override may name a single fraction of a single chemistry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "CompositionOverride")]
pub struct CompositionTable {
    pub nmc: ChemistryComposition,
    pub lfp: ChemistryComposition,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ChemistryOverride {
    ni: Option<f64>,
    co: Option<f64>,
    mn: Option<f64>,
    li: Option<f64>,
}

impl ChemistryOverride {
    fn over(self, base: ChemistryComposition) -> ChemistryComposition {
        ChemistryComposition {
            ni: self.ni.unwrap_or(base.ni),
            co: self.co.unwrap_or(base.co),
            mn: self.mn.unwrap_or(base.mn),
            li: self.li.unwrap_or(base.li),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CompositionOverride {
    nmc: ChemistryOverride,
    lfp: ChemistryOverride,
}

impl From<CompositionOverride> for CompositionTable {
    fn from(o: CompositionOverride) -> Self {
        let base = CompositionTable::default();
        Self { nmc: o.nmc.over(base.nmc), lfp: o.lfp.over(base.lfp) }
    }
}

impl Default for CompositionTable {
    fn default() -> Self {
        Self {
            // Simplified NMC 811-like black mass.
            nmc: ChemistryComposition { ni: 0.25, co: 0.05, mn: 0.05, li: 0.04 },
            lfp: ChemistryComposition { ni: 0.0, co: 0.0, mn: 0.0, li: 0.035 },
        }
    }
}

// ---------------------------------------------------------------------------
// ProcessAssumptions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessAssumptions {
    /// €/t of black mass through hydrometallurgy.
    pub hydro_cost_per_tonne: f64,
    /// €/t of pCAM for the salts-to-pCAM step.
    pub pcam_processing_cost_per_tonne: f64,
    /// Tonnes of Ni+Co+Mn per tonne of pCAM.
    pub metal_to_pcam_ratio: f64,
    /// Scenario logistics cost (€/t) is divided by this before being charged
    /// per tonne of feed.
    pub logistics_divisor: f64,
}

impl Default for ProcessAssumptions {
    fn default() -> Self {
        Self {
            hydro_cost_per_tonne: 2500.0,
            pcam_processing_cost_per_tonne: 1500.0,
            metal_to_pcam_ratio: 0.6,
            logistics_divisor: 10.0,
        }
    }
}

// ---------------------------------------------------------------------------
// ModelConstants
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConstants {
    pub market: MarketConstants,
    pub composition: CompositionTable,
    pub process: ProcessAssumptions,
}

impl ModelConstants {
    /// Parse a calibration override. Omitted fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConstantsError> {
        let constants: Self = serde_json::from_str(json)?;
        constants.check()?;
        Ok(constants)
    }

    pub fn from_json_file(path: &std::path::Path) -> Result<Self, ConstantsError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConstantsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The engine divides by these two, so a calibration file may not zero them.
    /// The engine still guards against it for hand-built values.
    fn check(&self) -> Result<(), ConstantsError> {
        let divisors = [
            ("process.metal_to_pcam_ratio", self.process.metal_to_pcam_ratio),
            ("process.logistics_divisor", self.process.logistics_divisor),
        ];
        for (field, value) in divisors {
            if value.is_nan() || value <= 0.0 {
                return Err(ConstantsError::NonPositive { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prices() {
        let m = MarketConstants::default();
        assert_eq!(m.lithium, 20.0);
        assert_eq!(m.nickel, 18.0);
        assert_eq!(m.cobalt, 35.0);
        assert_eq!(m.manganese, 2.0);
        assert_eq!(m.pcam_import, 18.0);
    }

    #[test]
    fn lfp_carries_only_lithium() {
        let lfp = CompositionTable::default().lfp;
        assert_eq!(lfp.ni, 0.0);
        assert_eq!(lfp.co, 0.0);
        assert_eq!(lfp.mn, 0.0);
        assert_eq!(lfp.li, 0.035);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = ModelConstants::from_json_str(
            r#"{ "market": { "nickel": 21.5 }, "process": { "hydro_cost_per_tonne": 2800 } }"#,
        )
        .expect("test: partial override should parse");
        assert_eq!(c.market.nickel, 21.5);
        assert_eq!(c.market.cobalt, 35.0);
        assert_eq!(c.process.hydro_cost_per_tonne, 2800.0);
        assert_eq!(c.process.metal_to_pcam_ratio, 0.6);
        assert_eq!(c.composition, CompositionTable::default());
    }

    #[test]
    fn partial_chemistry_override_keeps_defaults() {
        let c = ModelConstants::from_json_str(r#"{ "composition": { "nmc": { "ni": 0.3 } } }"#)
            .expect("test: single-fraction override should parse");
        let defaults = CompositionTable::default();
        assert_eq!(c.composition.nmc.ni, 0.3);
        assert_eq!(c.composition.nmc.co, defaults.nmc.co);
        assert_eq!(c.composition.nmc.mn, defaults.nmc.mn);
        assert_eq!(c.composition.nmc.li, defaults.nmc.li);
        assert_eq!(c.composition.lfp, defaults.lfp);
    }

    #[test]
    fn composition_serializes_back_to_itself() {
        let table = CompositionTable::default();
        let json = serde_json::to_string(&table).expect("test: serialize");
        let back: CompositionTable = serde_json::from_str(&json).expect("test: deserialize");
        assert_eq!(back, table);
    }

    #[test]
    fn empty_json_is_default() {
        let c = ModelConstants::from_json_str("{}").expect("test: empty object");
        assert_eq!(c, ModelConstants::default());
    }

    #[test]
    fn zero_ratio_rejected() {
        let err = ModelConstants::from_json_str(r#"{ "process": { "metal_to_pcam_ratio": 0 } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConstantsError::NonPositive { field: "process.metal_to_pcam_ratio", .. }
        ));
    }

    #[test]
    fn malformed_json_rejected() {
        let err = ModelConstants::from_json_str("{ market: ").unwrap_err();
        assert!(matches!(err, ConstantsError::Json(_)));
    }
}
