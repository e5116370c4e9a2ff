use serde::Serialize;

pub const PRINCIPAL_MIN: f64 = 0.0;
pub const PRINCIPAL_MAX: f64 = f64::INFINITY;
pub const RATE_PERCENT_MIN: f64 = -100.0;
pub const RATE_PERCENT_MAX: f64 = 1000.0;
pub const PERIODS_MIN: f64 = 0.0;
pub const PERIODS_MAX: f64 = 480.0;
pub const COMPOUND_FREQUENCY_MIN: f64 = 1.0;
pub const COMPOUND_FREQUENCY_MAX: f64 = 12.0;
pub const CONTRIBUTION_MIN: f64 = 0.0;
pub const CONTRIBUTION_MAX: f64 = 100_000.0;

/// Raw user-controlled input. Fields may be NaN, infinite or out of range;
/// normalization clamps rather than rejects.
#[derive(Debug, Clone, Copy)]
pub struct SimulationInput {
    pub principal: f64,
    pub rate_percent: f64,
    pub periods: f64,
    pub compound_frequency: f64,
    pub contribution: f64,
    pub contributions_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedSimulationInput {
    pub principal: f64,
    pub rate_percent: f64,
    pub rate_per_period: f64,
    pub periods: u32,
    pub compound_frequency: u32,
    pub contribution: f64,
    pub contributions_enabled: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleSnapshot {
    pub base: f64,
    pub interest_accrued: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundSnapshot {
    pub interest_accrued: f64,
    pub total: f64,
}

/// One row per period index, 0..=periods. Invariant for both regimes:
/// total == base + interest_accrued, with base = principal + contributions
/// applied strictly before this index.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSnapshot {
    pub period_index: u32,
    pub total_contributions: f64,
    pub contribution_applied: f64,
    pub simple: SimpleSnapshot,
    pub compound: CompoundSnapshot,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSummary {
    pub final_simple: f64,
    pub final_compound: f64,
    pub interest_simple: f64,
    pub interest_compound: f64,
    pub total_contributions: f64,
    pub difference: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_even_period: Option<u32>,
    pub effective_annual_rate_simple: f64,
    pub effective_annual_rate_compound: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub input: NormalizedSimulationInput,
    pub series: Vec<PeriodSnapshot>,
    pub summary: SimulationSummary,
}
