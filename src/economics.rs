// Copyright 2026 Hypermesh Foundation. All rights reserved.
// pCAM Relocation Simulator - Economics Engine

//! Open cycle vs closed cycle economics.
//!
//! ```text
//! open   = salts sold at market          - hydrometallurgy
//! closed = pCAM + lithium sold at market - hydrometallurgy - pCAM processing - logistics
//! ```
//!
//! The engine is a pure function of its inputs and its constant tables. It
//! holds no mutable state, performs no I/O and never logs, so any number of
//! callers may share one instance.

use crate::constants::{ModelConstants, KG_PER_TONNE};
use crate::types::{
    CycleResult, Financials, RecoveredMetals, ScenarioParams, SimulationResult, UnitCosts,
    Volumes,
};

/// `numerator / denominator`, or zero when the denominator is zero or the
/// quotient is not finite.
fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let q = numerator / denominator;
    if q.is_finite() { q } else { 0.0 }
}

/// Effective per-kg sale prices for one scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SalePrices {
    ni: f64,
    co: f64,
    li: f64,
    mn: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EconomicsEngine {
    constants: ModelConstants,
}

impl EconomicsEngine {
    pub fn new(constants: ModelConstants) -> Self {
        Self { constants }
    }

    pub fn constants(&self) -> &ModelConstants {
        &self.constants
    }

    /// Run the model for one scenario. Defined for every finite input,
    /// including out-of-domain ones; range checks belong to the caller.
    pub fn compute(&self, params: &ScenarioParams) -> SimulationResult {
        let metals = self.recover_metals(params);
        let prices = self.sale_prices(params);
        let feed = params.black_mass_volume;

        let open = self.open_cycle(&metals, &prices, feed);
        let pcam = self.pcam_volume(&metals);
        let closed = self.closed_cycle(params, &metals, &prices, pcam, open.cost);

        SimulationResult {
            metals,
            financials: Financials { open, closed },
            volumes: Volumes { pcam, black_mass: feed },
            unit_costs: UnitCosts {
                open_per_tonne_feed: ratio_or_zero(open.cost, feed),
                closed_per_tonne_feed: ratio_or_zero(closed.cost, feed),
                closed_per_tonne_pcam: ratio_or_zero(closed.cost, pcam),
            },
        }
    }

    /// Split the feed by chemistry and apply the recovery yield.
    pub fn recover_metals(&self, params: &ScenarioParams) -> RecoveredMetals {
        let comp = &self.constants.composition;
        let total = params.black_mass_volume;
        let share = params.share_nmc / 100.0;
        let vol_nmc = total * share;
        let vol_lfp = total * (1.0 - share);
        let efficiency = params.yield_recovery / 100.0;

        RecoveredMetals {
            ni: (vol_nmc * comp.nmc.ni + vol_lfp * comp.lfp.ni) * efficiency,
            co: (vol_nmc * comp.nmc.co + vol_lfp * comp.lfp.co) * efficiency,
            li: (vol_nmc * comp.nmc.li + vol_lfp * comp.lfp.li) * efficiency,
            mn: (vol_nmc * comp.nmc.mn + vol_lfp * comp.lfp.mn) * efficiency,
        }
    }

    /// Manganese is quoted flat; the scenario index only moves Ni, Co and Li.
    fn sale_prices(&self, params: &ScenarioParams) -> SalePrices {
        let market = &self.constants.market;
        SalePrices {
            ni: market.nickel * params.metal_prices,
            co: market.cobalt * params.metal_prices,
            li: market.lithium * params.metal_prices,
            mn: market.manganese,
        }
    }

    fn open_cycle(&self, metals: &RecoveredMetals, prices: &SalePrices, feed: f64) -> CycleResult {
        let revenue = (metals.ni * prices.ni
            + metals.co * prices.co
            + metals.li * prices.li
            + metals.mn * prices.mn)
            * KG_PER_TONNE;
        let cost = feed * self.constants.process.hydro_cost_per_tonne;
        CycleResult::new(revenue, cost)
    }

    /// Tonnes of pCAM obtainable from the recovered Ni, Co and Mn.
    pub fn pcam_volume(&self, metals: &RecoveredMetals) -> f64 {
        let ratio = self.constants.process.metal_to_pcam_ratio;
        if ratio <= 0.0 {
            return 0.0;
        }
        ratio_or_zero(metals.pcam_feed(), ratio)
    }

    /// Local pCAM sale price in €/kg.
    pub fn pcam_price(&self, params: &ScenarioParams) -> f64 {
        self.constants.market.pcam_import + params.pcam_premium
    }

    fn closed_cycle(
        &self,
        params: &ScenarioParams,
        metals: &RecoveredMetals,
        prices: &SalePrices,
        pcam: f64,
        hydro_cost: f64,
    ) -> CycleResult {
        let process = &self.constants.process;

        let revenue_pcam = pcam * self.pcam_price(params) * KG_PER_TONNE;
        // Lithium is not part of pCAM and is sold as in the open cycle.
        let revenue_li = metals.li * prices.li * KG_PER_TONNE;

        let processing = pcam * process.pcam_processing_cost_per_tonne;
        let logistics = params.black_mass_volume
            * ratio_or_zero(params.logistics_cost, process.logistics_divisor);
        // energy_cost_eu is not charged: the model has no calibrated coefficient for it.
        let cost = hydro_cost + processing + logistics;

        CycleResult::new(revenue_pcam + revenue_li, cost)
    }
}

/// Run the model with the default constant tables.
pub fn compute(params: &ScenarioParams) -> SimulationResult {
    EconomicsEngine::default().compute(params)
}
