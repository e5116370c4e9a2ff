use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{SimulationInput, simulate};
use crate::export::{CsvOptions, export_file_name, generate_series_csv};
use crate::format::Currency;
use crate::i18n::{Locale, dictionary};

const INDEX_HTML: &str = include_str!("../../web/index.html");
const STYLES_CSS: &str = include_str!("../../web/styles.css");
const APP_JS: &str = include_str!("../../web/app.js");

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliLocale {
    En,
    Es,
}

impl From<CliLocale> for Locale {
    fn from(value: CliLocale) -> Self {
        match value {
            CliLocale::En => Locale::En,
            CliLocale::Es => Locale::Es,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliCurrency {
    Usd,
    Crc,
}

impl From<CliCurrency> for Currency {
    fn from(value: CliCurrency) -> Self {
        match value {
            CliCurrency::Usd => Currency::Usd,
            CliCurrency::Crc => Currency::Crc,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SimulatePayload {
    principal: Option<f64>,
    rate_percent: Option<f64>,
    periods: Option<f64>,
    compound_frequency: Option<f64>,
    contribution: Option<f64>,
    contributions_enabled: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ExportPayload {
    principal: Option<f64>,
    rate_percent: Option<f64>,
    periods: Option<f64>,
    compound_frequency: Option<f64>,
    contribution: Option<f64>,
    contributions_enabled: Option<bool>,
    locale: Option<Locale>,
    currency: Option<Currency>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct DictionaryPayload {
    locale: Option<Locale>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Parser, Debug)]
#[command(
    name = "interest-growth",
    about = "Simple vs. compound interest growth explorer"
)]
struct Cli {
    #[arg(long, default_value_t = 1000.0)]
    principal: f64,
    #[arg(
        long,
        default_value_t = 1.0,
        help = "Percentage rate applied once per period",
        allow_negative_numbers = true
    )]
    rate_percent: f64,
    #[arg(long, default_value_t = 120.0, help = "Number of monthly periods")]
    periods: f64,
    #[arg(
        long,
        default_value_t = 4.0,
        help = "Intra-period compounding events (1 to 12)"
    )]
    compound_frequency: f64,
    #[arg(long, default_value_t = 100.0)]
    contribution: f64,
    #[arg(long, default_value_t = false)]
    contributions_enabled: bool,
    #[arg(long, value_enum, default_value_t = CliLocale::En)]
    locale: CliLocale,
    #[arg(long, value_enum, default_value_t = CliCurrency::Usd)]
    currency: CliCurrency,
}

fn default_cli_for_api() -> Cli {
    Cli::parse_from(["interest-growth"])
}

// Out-of-range values are passed straight through: the engine clamps instead
// of rejecting, so this surface never returns 4xx for a numeric field. The
// web form validates independently before calling the API.
fn build_input(cli: &Cli) -> SimulationInput {
    SimulationInput {
        principal: cli.principal,
        rate_percent: cli.rate_percent,
        periods: cli.periods,
        compound_frequency: cli.compound_frequency,
        contribution: cli.contribution,
        contributions_enabled: cli.contributions_enabled,
    }
}

fn input_from_payload(payload: SimulatePayload) -> SimulationInput {
    let mut cli = default_cli_for_api();

    if let Some(v) = payload.principal {
        cli.principal = v;
    }
    if let Some(v) = payload.rate_percent {
        cli.rate_percent = v;
    }
    if let Some(v) = payload.periods {
        cli.periods = v;
    }
    if let Some(v) = payload.compound_frequency {
        cli.compound_frequency = v;
    }
    if let Some(v) = payload.contribution {
        cli.contribution = v;
    }
    if let Some(v) = payload.contributions_enabled {
        cli.contributions_enabled = v;
    }

    build_input(&cli)
}

fn export_options(payload: &ExportPayload) -> CsvOptions {
    let cli = default_cli_for_api();
    CsvOptions {
        locale: payload.locale.unwrap_or_else(|| cli.locale.into()),
        currency: payload.currency.unwrap_or_else(|| cli.currency.into()),
    }
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/app.js", get(app_js_handler))
        .route(
            "/api/simulate",
            get(simulate_get_handler).post(simulate_post_handler),
        )
        .route("/api/export.csv", get(export_csv_handler))
        .route("/api/dictionary", get(dictionary_handler))
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    println!("Interest growth explorer listening on http://{addr}");
    println!("Local access: http://127.0.0.1:{port}/");

    axum::serve(listener, app).await
}

async fn index_handler() -> impl IntoResponse {
    with_cache_control(Html(INDEX_HTML))
}

async fn styles_handler() -> impl IntoResponse {
    with_cache_control((
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLES_CSS,
    ))
}

async fn app_js_handler() -> impl IntoResponse {
    with_cache_control((
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        APP_JS,
    ))
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn simulate_get_handler(Query(payload): Query<SimulatePayload>) -> Response {
    simulate_handler_impl(payload)
}

async fn simulate_post_handler(Json(payload): Json<SimulatePayload>) -> Response {
    simulate_handler_impl(payload)
}

fn simulate_handler_impl(payload: SimulatePayload) -> Response {
    let result = simulate(input_from_payload(payload));
    json_response(StatusCode::OK, result)
}

async fn export_csv_handler(Query(payload): Query<ExportPayload>) -> Response {
    let options = export_options(&payload);
    let result = simulate(input_from_payload(SimulatePayload {
        principal: payload.principal,
        rate_percent: payload.rate_percent,
        periods: payload.periods,
        compound_frequency: payload.compound_frequency,
        contribution: payload.contribution,
        contributions_enabled: payload.contributions_enabled,
    }));
    let csv = generate_series_csv(&result.series, options);
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export_file_name(options.locale)
    );

    let mut response = (
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
        csv,
    )
        .into_response();
    if let Ok(value) = disposition.parse() {
        response
            .headers_mut()
            .insert(header::CONTENT_DISPOSITION, value);
    }
    with_cache_control(response)
}

async fn dictionary_handler(Query(payload): Query<DictionaryPayload>) -> Response {
    let locale = payload.locale.unwrap_or_default();
    json_response(StatusCode::OK, dictionary(locale))
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    const EPS: f64 = 1e-9;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn payload_from_json(json: &str) -> SimulatePayload {
        serde_json::from_str(json).expect("payload should parse")
    }

    fn assert_golden_snapshot(path: &str, actual: &str) {
        let update = matches!(
            std::env::var("UPDATE_GOLDEN").as_deref(),
            Ok("1") | Ok("true") | Ok("TRUE")
        );
        let snapshot_path = Path::new(path);

        if update {
            if let Some(parent) = snapshot_path.parent() {
                fs::create_dir_all(parent).expect("failed to create snapshot directory");
            }
            fs::write(snapshot_path, actual).expect("failed to write golden snapshot");
            return;
        }

        let expected = fs::read_to_string(snapshot_path).unwrap_or_else(|_| {
            panic!("missing golden snapshot at {path}; run with UPDATE_GOLDEN=1 to generate")
        });
        assert_eq!(
            actual, expected,
            "snapshot mismatch for {path}; run with UPDATE_GOLDEN=1 to refresh if expected"
        );
    }

    #[test]
    fn defaults_mirror_the_original_form_values() {
        let input = input_from_payload(SimulatePayload::default());

        assert_approx(input.principal, 1000.0);
        assert_approx(input.rate_percent, 1.0);
        assert_approx(input.periods, 120.0);
        assert_approx(input.compound_frequency, 4.0);
        assert_approx(input.contribution, 100.0);
        assert!(!input.contributions_enabled);
    }

    #[test]
    fn payload_parses_camel_case_web_keys() {
        let payload = payload_from_json(
            r#"{
              "principal": 2500,
              "ratePercent": -2.5,
              "periods": 36,
              "compoundFrequency": 12,
              "contribution": 75.5,
              "contributionsEnabled": true
            }"#,
        );
        let input = input_from_payload(payload);

        assert_approx(input.principal, 2500.0);
        assert_approx(input.rate_percent, -2.5);
        assert_approx(input.periods, 36.0);
        assert_approx(input.compound_frequency, 12.0);
        assert_approx(input.contribution, 75.5);
        assert!(input.contributions_enabled);
    }

    #[test]
    fn partial_payload_keeps_remaining_defaults() {
        let payload = payload_from_json(r#"{"principal": 5, "periods": 3}"#);
        let input = input_from_payload(payload);

        assert_approx(input.principal, 5.0);
        assert_approx(input.periods, 3.0);
        assert_approx(input.rate_percent, 1.0);
        assert_approx(input.compound_frequency, 4.0);
    }

    #[test]
    fn out_of_range_payload_is_clamped_not_rejected() {
        let payload = payload_from_json(
            r#"{"principal": -10, "ratePercent": 99999, "periods": 1e9, "compoundFrequency": 0}"#,
        );
        let result = simulate(input_from_payload(payload));

        assert_approx(result.input.principal, 0.0);
        assert_approx(result.input.rate_percent, 1000.0);
        assert_eq!(result.input.periods, 480);
        assert_eq!(result.input.compound_frequency, 1);
    }

    #[test]
    fn export_payload_parses_locale_and_currency() {
        let payload: ExportPayload =
            serde_json::from_str(r#"{"locale": "es", "currency": "CRC", "periods": 4}"#)
                .expect("payload should parse");
        let options = export_options(&payload);

        assert_eq!(options.locale, Locale::Es);
        assert_eq!(options.currency, Currency::Crc);
    }

    #[test]
    fn export_defaults_to_english_usd() {
        let options = export_options(&ExportPayload::default());
        assert_eq!(options.locale, Locale::En);
        assert_eq!(options.currency, Currency::Usd);
    }

    #[test]
    fn export_file_name_embeds_locale() {
        assert_eq!(export_file_name(Locale::Es), "interest-growth-es.csv");
    }

    #[test]
    fn simulate_response_serialization_contains_expected_fields() {
        let result = simulate(input_from_payload(payload_from_json(
            r#"{"principal": 1000, "ratePercent": 10, "periods": 12, "compoundFrequency": 1}"#,
        )));
        let json = serde_json::to_string(&result).expect("result should serialize");

        assert!(json.contains("\"input\""));
        assert!(json.contains("\"series\""));
        assert!(json.contains("\"summary\""));
        assert!(json.contains("\"ratePerPeriod\""));
        assert!(json.contains("\"periodIndex\""));
        assert!(json.contains("\"interestAccrued\""));
        assert!(json.contains("\"finalSimple\""));
        assert!(json.contains("\"finalCompound\""));
        assert!(json.contains("\"breakEvenPeriod\""));
        assert!(json.contains("\"effectiveAnnualRateCompound\""));
    }

    #[test]
    fn absent_break_even_is_omitted_from_the_response() {
        let result = simulate(input_from_payload(payload_from_json(
            r#"{"ratePercent": 0, "periods": 6}"#,
        )));
        let json = serde_json::to_string(&result).expect("result should serialize");

        assert!(result.summary.break_even_period.is_none());
        assert!(!json.contains("breakEvenPeriod"));
    }

    #[test]
    fn golden_snapshot_flat_rate_with_contributions_json() {
        let result = simulate(SimulationInput {
            principal: 1500.0,
            rate_percent: 0.0,
            periods: 6.0,
            compound_frequency: 4.0,
            contribution: 100.0,
            contributions_enabled: true,
        });
        let json = format!(
            "{}\n",
            serde_json::to_string(&result).expect("result should serialize")
        );

        assert_golden_snapshot("tests/golden/flat_rate_with_contributions.json", &json);
    }

    #[test]
    fn golden_snapshot_doubling_rate_json() {
        let result = simulate(SimulationInput {
            principal: 1000.0,
            rate_percent: 100.0,
            periods: 12.0,
            compound_frequency: 1.0,
            contribution: 50.0,
            contributions_enabled: true,
        });
        let json = format!(
            "{}\n",
            serde_json::to_string(&result).expect("result should serialize")
        );

        assert_golden_snapshot("tests/golden/doubling_rate_with_contributions.json", &json);
    }

    #[test]
    fn golden_snapshot_doubling_rate_csv() {
        let result = simulate(SimulationInput {
            principal: 1000.0,
            rate_percent: 100.0,
            periods: 12.0,
            compound_frequency: 1.0,
            contribution: 50.0,
            contributions_enabled: true,
        });
        let csv = generate_series_csv(
            &result.series,
            CsvOptions {
                locale: Locale::En,
                currency: Currency::Usd,
            },
        );

        assert_golden_snapshot("tests/golden/doubling_rate_with_contributions_en.csv", &csv);
    }

    #[test]
    fn dictionary_payload_defaults_to_english() {
        let payload: DictionaryPayload = serde_json::from_str("{}").expect("payload should parse");
        assert_eq!(payload.locale.unwrap_or_default(), Locale::En);
    }
}
