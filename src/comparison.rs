// Copyright 2026 Hypermesh Foundation. All rights reserved.
// pCAM Relocation Simulator - Cycle Comparison

//! Display-ready summary of one [`SimulationResult`]: which cycle wins, by
//! how much, and the revenue/cost/margin rows a bar chart plots (in M€).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::adapter::{to_millions, whole_tonnes};
use crate::types::{CycleResult, ScenarioParams, SimulationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cycle {
    Open,
    Closed,
}

impl Cycle {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "Open cycle (salts)",
            Self::Closed => "Closed cycle (EU pCAM)",
        }
    }
}

/// One bar group of the comparison chart, in millions of euros.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub name: &'static str,
    pub revenue: Decimal,
    pub cost: Decimal,
    pub margin: Decimal,
}

impl ChartRow {
    fn new(cycle: Cycle, result: &CycleResult) -> Self {
        Self {
            name: cycle.label(),
            revenue: to_millions(result.revenue),
            cost: to_millions(result.cost),
            margin: to_millions(result.margin),
        }
    }
}

/// Headline figures for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub black_mass_tonnes: Decimal,
    pub share_nmc: f64,
    pub pcam_tonnes: Decimal,
    pub open_margin_millions: Decimal,
    pub closed_margin_millions: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleComparison {
    pub preferred: Cycle,
    /// Closed margin minus open margin, in euros.
    pub margin_delta: f64,
    pub verdict: &'static str,
    pub kpis: Kpis,
    pub chart: [ChartRow; 2],
}

const CLOSED_WINS: &str = "The closed cycle (local pCAM) is economically superior: the \
    transformation value added outweighs European energy and operating costs.";
const OPEN_WINS: &str = "The open cycle is currently more profitable: European pCAM \
    conversion costs (energy, labour) weigh too heavily against selling the recycled salts directly.";

impl CycleComparison {
    /// The closed cycle is preferred only on a strictly larger margin.
    pub fn from_result(params: &ScenarioParams, result: &SimulationResult) -> Self {
        let open = &result.financials.open;
        let closed = &result.financials.closed;
        let preferred = if closed.margin > open.margin { Cycle::Closed } else { Cycle::Open };

        Self {
            preferred,
            margin_delta: closed.margin - open.margin,
            verdict: match preferred {
                Cycle::Closed => CLOSED_WINS,
                Cycle::Open => OPEN_WINS,
            },
            kpis: Kpis {
                black_mass_tonnes: whole_tonnes(params.black_mass_volume),
                share_nmc: params.share_nmc,
                pcam_tonnes: whole_tonnes(result.volumes.pcam),
                open_margin_millions: to_millions(open.margin),
                closed_margin_millions: to_millions(closed.margin),
            },
            chart: [ChartRow::new(Cycle::Open, open), ChartRow::new(Cycle::Closed, closed)],
        }
    }
}
