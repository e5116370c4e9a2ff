use super::types::{
    COMPOUND_FREQUENCY_MAX, COMPOUND_FREQUENCY_MIN, CONTRIBUTION_MAX, CONTRIBUTION_MIN,
    CompoundSnapshot, NormalizedSimulationInput, PERIODS_MAX, PERIODS_MIN, PRINCIPAL_MAX,
    PRINCIPAL_MIN, PeriodSnapshot, RATE_PERCENT_MAX, RATE_PERCENT_MIN, SimpleSnapshot,
    SimulationInput, SimulationResult, SimulationSummary,
};

const FLAT_FACTOR_EPSILON: f64 = 1e-12;
const MIN_YEARS: f64 = 1e-8;
const PERIODS_PER_YEAR: f64 = 12.0;

#[derive(Debug, Clone, Copy)]
struct GrowthTotals {
    total: f64,
    interest: f64,
}

impl GrowthTotals {
    const ZERO: GrowthTotals = GrowthTotals {
        total: 0.0,
        interest: 0.0,
    };
}

fn clamp_number(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() {
        return min;
    }
    value.clamp(min, max)
}

fn clamp_integer(value: f64, min: f64, max: f64) -> u32 {
    clamp_number(value, min, max).round() as u32
}

/// Permissive clamp of raw input into the documented bounds. Never fails:
/// NaN and infinities collapse to the field minimum, everything else is
/// clamped into range. Integer fields are rounded to the nearest whole value.
pub fn sanitize(input: SimulationInput) -> NormalizedSimulationInput {
    let rate_percent = clamp_number(input.rate_percent, RATE_PERCENT_MIN, RATE_PERCENT_MAX);

    NormalizedSimulationInput {
        principal: clamp_number(input.principal, PRINCIPAL_MIN, PRINCIPAL_MAX),
        rate_percent,
        rate_per_period: rate_percent / 100.0,
        periods: clamp_integer(input.periods, PERIODS_MIN, PERIODS_MAX),
        compound_frequency: clamp_integer(
            input.compound_frequency,
            COMPOUND_FREQUENCY_MIN,
            COMPOUND_FREQUENCY_MAX,
        ),
        contribution: clamp_number(input.contribution, CONTRIBUTION_MIN, CONTRIBUTION_MAX),
        contributions_enabled: input.contributions_enabled,
    }
}

fn simple_principal_totals(principal: f64, rate_per_period: f64, periods: u32) -> GrowthTotals {
    if principal == 0.0 {
        return GrowthTotals::ZERO;
    }
    let n = periods as f64;
    GrowthTotals {
        total: principal * (1.0 + rate_per_period * n),
        interest: principal * rate_per_period * n,
    }
}

// Each deposit lands at the end of its period and earns simple interest for
// the periods that follow it: the deposit made at the end of period k earns
// r for each of the remaining n - k periods. Summing r * (n - k) over
// k = 1..=n gives the arithmetic series r * n(n-1)/2.
fn simple_contribution_totals(contribution: f64, rate_per_period: f64, periods: u32) -> GrowthTotals {
    if contribution <= 0.0 || periods == 0 {
        return GrowthTotals::ZERO;
    }
    let n = periods as f64;
    let contributions = contribution * n;
    let interest = contribution * rate_per_period * (n * (n - 1.0)) / 2.0;
    GrowthTotals {
        total: contributions + interest,
        interest,
    }
}

fn compound_factor(rate_per_period: f64, compounding_per_period: u32, periods: u32) -> f64 {
    if periods == 0 {
        return 1.0;
    }
    let m = compounding_per_period.max(1) as f64;
    (1.0 + rate_per_period / m).powf(m * periods as f64)
}

fn compound_principal_totals(
    principal: f64,
    rate_per_period: f64,
    compounding_per_period: u32,
    periods: u32,
) -> GrowthTotals {
    if principal == 0.0 {
        return GrowthTotals::ZERO;
    }
    let factor = compound_factor(rate_per_period, compounding_per_period, periods);
    GrowthTotals {
        total: principal * factor,
        interest: principal * (factor - 1.0),
    }
}

// Deposits at the end of each period, compounding once per subsequent period
// at the one-period factor f1: a geometric series with ratio f1. An
// effectively flat factor short-circuits to the plain sum of deposits so a
// zero rate never divides by zero.
fn compound_contribution_totals(
    contribution: f64,
    rate_per_period: f64,
    compounding_per_period: u32,
    periods: u32,
) -> GrowthTotals {
    if contribution <= 0.0 || periods == 0 {
        return GrowthTotals::ZERO;
    }

    let per_period_factor = compound_factor(rate_per_period, compounding_per_period, 1);
    let contributions = contribution * periods as f64;

    if (per_period_factor - 1.0).abs() < FLAT_FACTOR_EPSILON {
        return GrowthTotals {
            total: contributions,
            interest: 0.0,
        };
    }

    let total =
        contribution * ((per_period_factor.powf(periods as f64) - 1.0) / (per_period_factor - 1.0));
    GrowthTotals {
        total,
        interest: total - contributions,
    }
}

// Annualized growth implied by the final balance versus invested capital.
// Deliberately approximate: contributions are treated as if deposited
// upfront. The max(total, 0) guard keeps negative balances from producing
// undefined roots, max(years, MIN_YEARS) guards the division.
fn effective_annual_rate(final_total: f64, invested_capital: f64, years: f64) -> f64 {
    if years <= 0.0 || invested_capital <= 0.0 {
        return 0.0;
    }
    (final_total.max(0.0) / invested_capital).powf(1.0 / years.max(MIN_YEARS)) - 1.0
}

/// Normalizes the input, walks every period index 0..=N building the series
/// for both regimes, and derives the horizon summary. Total on its input
/// domain: no failure modes, all degenerate cases resolve through the branch
/// guards in the closed forms.
pub fn simulate(input: SimulationInput) -> SimulationResult {
    let normalized = sanitize(input);
    let NormalizedSimulationInput {
        principal,
        rate_per_period,
        periods,
        compound_frequency,
        contribution,
        contributions_enabled,
        ..
    } = normalized;

    let contribution_applied = if contributions_enabled { contribution } else { 0.0 };

    let mut series = Vec::with_capacity(periods as usize + 1);
    for period_index in 0..=periods {
        let simple_principal = simple_principal_totals(principal, rate_per_period, period_index);
        let simple_contribution =
            simple_contribution_totals(contribution_applied, rate_per_period, period_index);
        let simple_total = simple_principal.total + simple_contribution.total;

        let compound_principal = compound_principal_totals(
            principal,
            rate_per_period,
            compound_frequency,
            period_index,
        );
        let compound_contribution = compound_contribution_totals(
            contribution_applied,
            rate_per_period,
            compound_frequency,
            period_index,
        );
        let compound_total = compound_principal.total + compound_contribution.total;

        let contributions_so_far = contribution_applied * period_index as f64;
        let invested_base = principal + contributions_so_far;

        series.push(PeriodSnapshot {
            period_index,
            total_contributions: contributions_so_far,
            contribution_applied,
            simple: SimpleSnapshot {
                base: invested_base,
                interest_accrued: simple_total - invested_base,
                total: simple_total,
            },
            compound: CompoundSnapshot {
                interest_accrued: compound_total - invested_base,
                total: compound_total,
            },
        });
    }

    // Final totals are recomputed from the closed forms rather than read off
    // the last row; both paths run the same formulas so they agree exactly.
    let final_simple_principal = simple_principal_totals(principal, rate_per_period, periods);
    let final_simple_contribution =
        simple_contribution_totals(contribution_applied, rate_per_period, periods);
    let final_compound_principal =
        compound_principal_totals(principal, rate_per_period, compound_frequency, periods);
    let final_compound_contribution =
        compound_contribution_totals(contribution_applied, rate_per_period, compound_frequency, periods);

    let final_simple = final_simple_principal.total + final_simple_contribution.total;
    let final_compound = final_compound_principal.total + final_compound_contribution.total;
    let total_contributions = contribution_applied * periods as f64;
    let invested_capital = principal + total_contributions;

    let break_even_period = series
        .iter()
        .find(|snapshot| snapshot.period_index > 0 && snapshot.compound.total > snapshot.simple.total)
        .map(|snapshot| snapshot.period_index);

    let years = periods as f64 / PERIODS_PER_YEAR;

    let summary = SimulationSummary {
        final_simple,
        final_compound,
        interest_simple: final_simple_principal.interest + final_simple_contribution.interest,
        interest_compound: final_compound_principal.interest + final_compound_contribution.interest,
        total_contributions,
        difference: final_compound - final_simple,
        break_even_period,
        effective_annual_rate_simple: effective_annual_rate(final_simple, invested_capital, years),
        effective_annual_rate_compound: effective_annual_rate(
            final_compound,
            invested_capital,
            years,
        ),
    };

    SimulationResult {
        input: normalized,
        series,
        summary,
    }
}
