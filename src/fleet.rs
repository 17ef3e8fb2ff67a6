// Copyright 2026 Hypermesh Foundation. All rights reserved.
// pCAM Relocation Simulator - Battery Fleet Feed Estimator

//! Technical cross-check: how much black mass a given end-of-life battery
//! stream yields, and how much metal that black mass contains after the
//! overall recycling yield.

use serde::{Deserialize, Serialize};

use crate::constants::KG_PER_TONNE;
use crate::types::{RecoveredMetals, ScenarioParams};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetInputs {
    pub batteries_per_year: f64,
    /// kg per battery pack.
    pub average_battery_mass: f64,
    /// Percent of pack mass that ends up as black mass.
    pub black_mass_fraction: f64,
    /// Percent overall recycling yield.
    pub recycling_yield: f64,
    /// Percent metal content of the black mass.
    pub nickel_content: f64,
    pub cobalt_content: f64,
    pub lithium_content: f64,
}

impl Default for FleetInputs {
    fn default() -> Self {
        Self {
            batteries_per_year: 1_000_000.0,
            average_battery_mass: 250.0,
            black_mass_fraction: 20.0,
            recycling_yield: 70.0,
            nickel_content: 25.0,
            cobalt_content: 12.0,
            lithium_content: 7.0,
        }
    }
}

impl FleetInputs {
    pub fn black_mass_tonnes(&self) -> f64 {
        self.batteries_per_year * self.average_battery_mass * (self.black_mass_fraction / 100.0)
            / KG_PER_TONNE
    }

    /// Tonnes of metal recoverable from the fleet's black mass. Manganese is
    /// not tracked at this level.
    pub fn recoverable_metals(&self) -> RecoveredMetals {
        let bm = self.black_mass_tonnes();
        let eff = self.recycling_yield / 100.0;
        RecoveredMetals {
            ni: bm * (self.nickel_content / 100.0) * eff,
            co: bm * (self.cobalt_content / 100.0) * eff,
            li: bm * (self.lithium_content / 100.0) * eff,
            mn: 0.0,
        }
    }

    /// `base` with its feed volume replaced by this fleet's black mass.
    pub fn into_params(&self, base: ScenarioParams) -> ScenarioParams {
        ScenarioParams { black_mass_volume: self.black_mass_tonnes(), ..base }
    }
}
