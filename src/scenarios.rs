// Copyright 2026 Hypermesh Foundation. All rights reserved.
// pCAM Relocation Simulator - Scenario Presets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::ScenarioParams;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scenario preset: {0:?} (expected pessimistic, conservative or optimistic)")]
pub struct PresetError(pub String);

/// Named parameter sets a caller can load wholesale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Pessimistic,
    #[default]
    Conservative,
    Optimistic,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Pessimistic, Preset::Conservative, Preset::Optimistic];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pessimistic => "pessimistic",
            Self::Conservative => "conservative",
            Self::Optimistic => "optimistic",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Pessimistic => "Low volume, LFP-heavy mix, depressed metal prices, expensive energy",
            Self::Conservative => "Base case: current average prices and 2030 volume forecast",
            Self::Optimistic => "High volume, NMC-rich mix, strong prices, strong local premium",
        }
    }

    pub fn params(&self) -> ScenarioParams {
        match self {
            Self::Pessimistic => ScenarioParams {
                black_mass_volume: 15_000.0,
                share_nmc: 60.0,
                metal_prices: 0.8,
                energy_cost_eu: 180.0,
                logistics_cost: 120.0,
                yield_recovery: 85.0,
                pcam_premium: 2.0,
            },
            Self::Conservative => ScenarioParams {
                black_mass_volume: 25_000.0,
                share_nmc: 75.0,
                metal_prices: 1.0,
                energy_cost_eu: 120.0,
                logistics_cost: 90.0,
                yield_recovery: 90.0,
                pcam_premium: 3.5,
            },
            Self::Optimistic => ScenarioParams {
                black_mass_volume: 45_000.0,
                share_nmc: 90.0,
                metal_prices: 1.2,
                energy_cost_eu: 80.0,
                logistics_cost: 60.0,
                yield_recovery: 95.0,
                pcam_premium: 5.0,
            },
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = PresetError;

    /// Accepts the English names and the French ones saved by older sessions.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pessimistic" | "pessimiste" => Ok(Self::Pessimistic),
            "conservative" | "conservateur" => Ok(Self::Conservative),
            "optimistic" | "optimiste" => Ok(Self::Optimistic),
            _ => Err(PresetError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for preset in Preset::ALL {
            assert_eq!(preset.name().parse::<Preset>(), Ok(preset));
        }
    }

    #[test]
    fn french_aliases_and_case() {
        assert_eq!("Pessimiste".parse::<Preset>(), Ok(Preset::Pessimistic));
        assert_eq!(" CONSERVATEUR ".parse::<Preset>(), Ok(Preset::Conservative));
        assert_eq!("optimiste".parse::<Preset>(), Ok(Preset::Optimistic));
    }

    #[test]
    fn unknown_name_rejected() {
        let err = "baseline".parse::<Preset>().unwrap_err();
        assert_eq!(err, PresetError("baseline".to_string()));
    }

    #[test]
    fn presets_are_inside_domains() {
        for preset in Preset::ALL {
            assert!(preset.params().validate().is_ok(), "{preset} out of domain");
            assert!(!preset.description().is_empty());
        }
    }

    #[test]
    fn default_is_conservative() {
        assert_eq!(Preset::default(), Preset::Conservative);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Preset::Optimistic).expect("test: serialize");
        assert_eq!(json, "\"optimistic\"");
    }
}
