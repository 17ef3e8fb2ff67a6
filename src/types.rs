// Copyright 2026 Hypermesh Foundation. All rights reserved.
// pCAM Relocation Simulator - Type Definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ─── ScenarioParams ──────────────────────────────────────────────────────────

/// One scenario's inputs. Field names serialize in camelCase so the record
/// round-trips through the browser UI and the key/value CSV unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioParams {
    /// Tonnes of black mass processed per year.
    pub black_mass_volume: f64,
    /// Percent of the feed that is NMC chemistry; the rest is LFP.
    #[serde(rename = "shareNMC")]
    pub share_nmc: f64,
    /// Percent metal recovery applied uniformly to every metal.
    pub yield_recovery: f64,
    /// Multiplier on the Ni/Co/Li base prices.
    pub metal_prices: f64,
    /// €/MWh. Accepted but not yet part of any cost term.
    #[serde(rename = "energyCostEU")]
    pub energy_cost_eu: f64,
    /// €/tonne internal logistics.
    pub logistics_cost: f64,
    /// €/kg premium for locally made pCAM over the import benchmark.
    pub pcam_premium: f64,
}

impl ScenarioParams {
    pub fn get(&self, key: ParamKey) -> f64 {
        match key {
            ParamKey::BlackMassVolume => self.black_mass_volume,
            ParamKey::ShareNmc => self.share_nmc,
            ParamKey::YieldRecovery => self.yield_recovery,
            ParamKey::MetalPrices => self.metal_prices,
            ParamKey::EnergyCostEu => self.energy_cost_eu,
            ParamKey::LogisticsCost => self.logistics_cost,
            ParamKey::PcamPremium => self.pcam_premium,
        }
    }

    /// Copy of `self` with one field replaced.
    pub fn with(mut self, key: ParamKey, value: f64) -> Self {
        let slot = match key {
            ParamKey::BlackMassVolume => &mut self.black_mass_volume,
            ParamKey::ShareNmc => &mut self.share_nmc,
            ParamKey::YieldRecovery => &mut self.yield_recovery,
            ParamKey::MetalPrices => &mut self.metal_prices,
            ParamKey::EnergyCostEu => &mut self.energy_cost_eu,
            ParamKey::LogisticsCost => &mut self.logistics_cost,
            ParamKey::PcamPremium => &mut self.pcam_premium,
        };
        *slot = value;
        self
    }

    /// First field outside its domain, if any.
    pub fn validate(&self) -> Result<(), DomainViolation> {
        ParamKey::ALL
            .iter()
            .try_for_each(|&key| key.domain_check(self.get(key)))
    }
}

// ─── ParamKey ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamKey {
    BlackMassVolume,
    ShareNmc,
    YieldRecovery,
    MetalPrices,
    EnergyCostEu,
    LogisticsCost,
    PcamPremium,
}

/// Slider bounds a UI offers for a parameter. Narrower than the domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// Admissible values for a parameter, independent of any widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Domain {
    Positive,
    NonNegative,
    Percent,
}

impl Domain {
    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        match self {
            Self::Positive => value > 0.0,
            Self::NonNegative => value >= 0.0,
            Self::Percent => (0.0..=100.0).contains(&value),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "> 0"),
            Self::NonNegative => write!(f, ">= 0"),
            Self::Percent => write!(f, "[0, 100]"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("{key} = {value} is outside its domain {domain}")]
pub struct DomainViolation {
    pub key: ParamKey,
    pub value: f64,
    pub domain: Domain,
}

impl ParamKey {
    /// Persisted order: the order rows are written in an exported table.
    pub const ALL: [ParamKey; 7] = [
        ParamKey::BlackMassVolume,
        ParamKey::ShareNmc,
        ParamKey::YieldRecovery,
        ParamKey::MetalPrices,
        ParamKey::EnergyCostEu,
        ParamKey::LogisticsCost,
        ParamKey::PcamPremium,
    ];

    /// Wire name, shared by the JSON record and the CSV table.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BlackMassVolume => "blackMassVolume",
            Self::ShareNmc => "shareNMC",
            Self::YieldRecovery => "yieldRecovery",
            Self::MetalPrices => "metalPrices",
            Self::EnergyCostEu => "energyCostEU",
            Self::LogisticsCost => "logisticsCost",
            Self::PcamPremium => "pcamPremium",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::BlackMassVolume => "Black mass volume (2030)",
            Self::ShareNmc => "NMC chemistry share",
            Self::YieldRecovery => "Co/Ni recovery yield",
            Self::MetalPrices => "Metal market price index",
            Self::EnergyCostEu => "EU electricity cost",
            Self::LogisticsCost => "Internal logistics cost",
            Self::PcamPremium => "Made-in-EU pCAM premium",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::BlackMassVolume => "t",
            Self::ShareNmc | Self::YieldRecovery => "%",
            Self::MetalPrices => "x base",
            Self::EnergyCostEu => "€/MWh",
            Self::LogisticsCost => "€/t",
            Self::PcamPremium => "€/kg pCAM",
        }
    }

    pub fn slider_range(&self) -> SliderRange {
        let (min, max, step) = match self {
            Self::BlackMassVolume => (5_000.0, 100_000.0, 1_000.0),
            Self::ShareNmc => (0.0, 100.0, 1.0),
            Self::YieldRecovery => (50.0, 99.0, 1.0),
            Self::MetalPrices => (0.5, 2.0, 0.1),
            Self::EnergyCostEu => (40.0, 300.0, 1.0),
            Self::LogisticsCost => (20.0, 200.0, 1.0),
            Self::PcamPremium => (0.0, 10.0, 0.5),
        };
        SliderRange { min, max, step }
    }

    pub fn domain(&self) -> Domain {
        match self {
            Self::BlackMassVolume | Self::MetalPrices | Self::EnergyCostEu => Domain::Positive,
            Self::ShareNmc | Self::YieldRecovery => Domain::Percent,
            Self::LogisticsCost | Self::PcamPremium => Domain::NonNegative,
        }
    }

    pub fn domain_check(&self, value: f64) -> Result<(), DomainViolation> {
        let domain = self.domain();
        if domain.contains(value) {
            Ok(())
        } else {
            Err(DomainViolation { key: *self, value, domain })
        }
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown parameter key: {0:?}")]
pub struct UnknownParamKey(pub String);

impl FromStr for ParamKey {
    type Err = UnknownParamKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParamKey::ALL
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| UnknownParamKey(s.to_string()))
    }
}

/// Catalog entry handed to a UI building its input widgets.
#[derive(Debug, Clone, Serialize)]
pub struct ParamDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub range: SliderRange,
    pub domain: Domain,
}

pub fn param_catalog() -> Vec<ParamDescriptor> {
    ParamKey::ALL
        .iter()
        .map(|k| ParamDescriptor {
            key: k.name(),
            label: k.label(),
            unit: k.unit(),
            range: k.slider_range(),
            domain: k.domain(),
        })
        .collect()
}

// ─── RecoveredMetals ─────────────────────────────────────────────────────────

/// Tonnes of each metal recovered after chemistry split and yield.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RecoveredMetals {
    #[serde(rename = "Ni")]
    pub ni: f64,
    #[serde(rename = "Co")]
    pub co: f64,
    #[serde(rename = "Li")]
    pub li: f64,
    #[serde(rename = "Mn")]
    pub mn: f64,
}

impl RecoveredMetals {
    /// Metals that go into pCAM. Lithium is sold separately.
    pub fn pcam_feed(&self) -> f64 {
        self.ni + self.co + self.mn
    }

    pub fn total(&self) -> f64 {
        self.ni + self.co + self.li + self.mn
    }
}

// ─── CycleResult / Financials ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CycleResult {
    pub revenue: f64,
    pub cost: f64,
    pub margin: f64,
}

impl CycleResult {
    pub fn new(revenue: f64, cost: f64) -> Self {
        Self { revenue, cost, margin: revenue - cost }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Financials {
    pub open: CycleResult,
    pub closed: CycleResult,
}

// ─── Volumes / UnitCosts ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volumes {
    /// Tonnes of pCAM produced in the closed cycle.
    pub pcam: f64,
    /// Tonnes of black mass fed in (echo of the input).
    pub black_mass: f64,
}

/// Cost ratios. Zero whenever the denominator is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitCosts {
    pub open_per_tonne_feed: f64,
    pub closed_per_tonne_feed: f64,
    pub closed_per_tonne_pcam: f64,
}

// ─── SimulationResult ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub metals: RecoveredMetals,
    pub financials: Financials,
    pub volumes: Volumes,
    pub unit_costs: UnitCosts,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScenarioParams {
        ScenarioParams {
            black_mass_volume: 25_000.0,
            share_nmc: 75.0,
            yield_recovery: 90.0,
            metal_prices: 1.0,
            energy_cost_eu: 120.0,
            logistics_cost: 90.0,
            pcam_premium: 3.5,
        }
    }

    #[test]
    fn param_names_round_trip_through_from_str() {
        for key in ParamKey::ALL {
            assert_eq!(key.name().parse::<ParamKey>(), Ok(key));
        }
        assert!("blackmassvolume".parse::<ParamKey>().is_err());
    }

    #[test]
    fn with_replaces_only_the_named_field() {
        let base = sample();
        let updated = base.with(ParamKey::PcamPremium, 7.0);
        assert_eq!(updated.pcam_premium, 7.0);
        assert_eq!(updated.black_mass_volume, base.black_mass_volume);
        assert_eq!(base.pcam_premium, 3.5);
        for key in ParamKey::ALL {
            assert_eq!(base.with(key, 42.0).get(key), 42.0);
        }
    }

    #[test]
    fn domains_match_the_data_model() {
        assert!(ParamKey::BlackMassVolume.domain_check(0.0).is_err());
        assert!(ParamKey::ShareNmc.domain_check(0.0).is_ok());
        assert!(ParamKey::ShareNmc.domain_check(100.0).is_ok());
        assert!(ParamKey::ShareNmc.domain_check(100.5).is_err());
        assert!(ParamKey::LogisticsCost.domain_check(0.0).is_ok());
        assert!(ParamKey::LogisticsCost.domain_check(-1.0).is_err());
        assert!(ParamKey::MetalPrices.domain_check(f64::NAN).is_err());
        assert!(ParamKey::EnergyCostEu.domain_check(f64::INFINITY).is_err());
    }

    #[test]
    fn validate_reports_first_bad_field() {
        let bad = sample().with(ParamKey::YieldRecovery, 120.0);
        let err = bad.validate().unwrap_err();
        assert_eq!(err.key, ParamKey::YieldRecovery);
        assert_eq!(err.domain, Domain::Percent);
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn slider_ranges_lie_inside_domains() {
        for key in ParamKey::ALL {
            let r = key.slider_range();
            assert!(r.min < r.max, "{key} range is empty");
            assert!(r.step > 0.0);
            assert!(key.domain_check(r.max).is_ok(), "{key} max outside domain");
        }
    }

    #[test]
    fn params_serialize_with_ui_names() {
        let json = serde_json::to_value(sample()).expect("test: serialize");
        for key in ParamKey::ALL {
            assert!(json.get(key.name()).is_some(), "missing {}", key.name());
        }
    }

    #[test]
    fn catalog_lists_every_key_in_persisted_order() {
        let catalog = param_catalog();
        let keys: Vec<&str> = catalog.iter().map(|d| d.key).collect();
        assert_eq!(
            keys,
            [
                "blackMassVolume",
                "shareNMC",
                "yieldRecovery",
                "metalPrices",
                "energyCostEU",
                "logisticsCost",
                "pcamPremium",
            ]
        );
        let premium = &catalog[6];
        assert_eq!(premium.unit, "€/kg pCAM");
        assert_eq!(premium.range, SliderRange { min: 0.0, max: 10.0, step: 0.5 });
        assert_eq!(premium.domain, Domain::NonNegative);
    }

    #[test]
    fn cycle_result_margin_is_revenue_minus_cost() {
        let c = CycleResult::new(10.5, 4.25);
        assert_eq!(c.margin, 10.5 - 4.25);
    }

    #[test]
    fn metals_serialize_with_element_symbols() {
        let m = RecoveredMetals { ni: 1.0, co: 2.0, li: 3.0, mn: 4.0 };
        let json = serde_json::to_value(m).expect("test: serialize");
        assert_eq!(json["Ni"], 1.0);
        assert_eq!(json["Mn"], 4.0);
        assert_eq!(m.pcam_feed(), 7.0);
        assert_eq!(m.total(), 10.0);
    }
}
