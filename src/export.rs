use csv::WriterBuilder;

use crate::core::PeriodSnapshot;
use crate::format::{Currency, format_currency, format_number};
use crate::i18n::{Locale, dictionary};

#[derive(Debug, Clone, Copy)]
pub struct CsvOptions {
    pub locale: Locale,
    pub currency: Currency,
}

pub fn export_file_name(locale: Locale) -> String {
    format!("interest-growth-{}.csv", locale.as_str())
}

/// Serializes a simulation series as CSV: a localized header row followed by
/// one row per period with totals, accrued interest, the contribution and the
/// raw compound-minus-simple gap. Exports keep raw values; only the charts
/// clamp negatives for display. Localized currency strings contain the group
/// separator, so the writer quotes those fields per RFC 4180.
pub fn generate_series_csv(series: &[PeriodSnapshot], options: CsvOptions) -> String {
    let CsvOptions { locale, currency } = options;
    let table = &dictionary(locale).results.table;

    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer
        .write_record([
            table.column_period,
            table.column_simple_total,
            table.column_simple_interest,
            table.column_compound_total,
            table.column_compound_interest,
            table.column_contribution,
            table.column_gap,
        ])
        .expect("in-memory csv write");

    for snapshot in series {
        let gap = snapshot.compound.total - snapshot.simple.total;
        writer
            .write_record([
                format_number(snapshot.period_index as f64, locale),
                format_currency(snapshot.simple.total, currency, locale),
                format_currency(snapshot.simple.interest_accrued, currency, locale),
                format_currency(snapshot.compound.total, currency, locale),
                format_currency(snapshot.compound.interest_accrued, currency, locale),
                format_currency(snapshot.contribution_applied, currency, locale),
                format_currency(gap, currency, locale),
            ])
            .expect("in-memory csv write");
    }

    let bytes = writer.into_inner().expect("in-memory csv write");
    String::from_utf8(bytes).expect("csv output is utf-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SimulationInput, simulate};

    fn flat_series_input() -> SimulationInput {
        SimulationInput {
            principal: 1500.0,
            rate_percent: 0.0,
            periods: 2.0,
            compound_frequency: 4.0,
            contribution: 100.0,
            contributions_enabled: true,
        }
    }

    #[test]
    fn csv_has_header_plus_one_row_per_snapshot() {
        let result = simulate(flat_series_input());
        let csv = generate_series_csv(
            &result.series,
            CsvOptions {
                locale: Locale::En,
                currency: Currency::Usd,
            },
        );

        assert!(csv.ends_with('\n'));
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), result.series.len() + 1);
        assert_eq!(
            lines[0],
            "Period,Simple total,Simple interest,Compound total,Compound interest,Contribution,Compound advantage"
        );
        assert_eq!(
            lines[1],
            "0,\"$1,500.00\",$0.00,\"$1,500.00\",$0.00,$100.00,$0.00"
        );
        assert_eq!(
            lines[2],
            "1,\"$1,600.00\",$0.00,\"$1,600.00\",$0.00,$100.00,$0.00"
        );
    }

    #[test]
    fn csv_localizes_headers_and_number_formats() {
        let result = simulate(flat_series_input());
        let csv = generate_series_csv(
            &result.series,
            CsvOptions {
                locale: Locale::Es,
                currency: Currency::Crc,
            },
        );

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "Periodo,Total simple,Interés simple,Total compuesto,Interés compuesto,Aporte,Ventaja compuesta"
        );
        // The es decimal separator is a comma, so every currency field gets
        // quoted.
        assert_eq!(
            lines[1],
            "0,\"₡1.500,00\",\"₡0,00\",\"₡1.500,00\",\"₡0,00\",\"₡100,00\",\"₡0,00\""
        );
    }

    #[test]
    fn csv_quotes_only_fields_containing_the_separator() {
        let result = simulate(SimulationInput {
            principal: 100.0,
            rate_percent: 0.0,
            periods: 1.0,
            compound_frequency: 1.0,
            contribution: 0.0,
            contributions_enabled: false,
        });
        let csv = generate_series_csv(
            &result.series,
            CsvOptions {
                locale: Locale::En,
                currency: Currency::Usd,
            },
        );

        // Sub-thousand en values carry no group separator and stay unquoted.
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[1], "0,$100.00,$0.00,$100.00,$0.00,$0.00,$0.00");
    }

    #[test]
    fn csv_keeps_raw_negative_gaps() {
        let result = simulate(SimulationInput {
            principal: 5000.0,
            rate_percent: -5.0,
            periods: 3.0,
            compound_frequency: 2.0,
            contribution: 0.0,
            contributions_enabled: false,
        });
        let csv = generate_series_csv(
            &result.series,
            CsvOptions {
                locale: Locale::En,
                currency: Currency::Usd,
            },
        );

        // Accrued interest is negative in both regimes; the export keeps the
        // minus sign instead of applying the display clamp.
        assert!(csv.contains("-$"));
    }
}
