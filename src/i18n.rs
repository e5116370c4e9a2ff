use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDictionary {
    pub app: AppLabels,
    pub header: HeaderLabels,
    pub hero: HeroLabels,
    pub form: FormLabels,
    pub validations: ValidationLabels,
    pub results: ResultsLabels,
    pub actions: ActionLabels,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppLabels {
    pub name: &'static str,
    pub short_description: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderLabels {
    pub tagline: &'static str,
    pub language_toggle_aria: &'static str,
    pub theme_toggle_aria: &'static str,
    pub currency_label: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroLabels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub educational_disclaimer: &'static str,
    pub legal_disclaimer: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    pub label: &'static str,
    pub helper: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldLabels {
    pub principal: FieldConfig,
    pub rate_percent: FieldConfig,
    pub periods: FieldConfig,
    pub compound_frequency: FieldConfig,
    pub contributions_enabled: FieldConfig,
    pub contribution: FieldConfig,
    pub currency: FieldConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormLabels {
    pub title: &'static str,
    pub description: &'static str,
    pub reset: &'static str,
    pub fields: FieldLabels,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationLabels {
    pub required: &'static str,
    pub min_inclusive: &'static str,
    pub max_inclusive: &'static str,
    pub range: &'static str,
    pub integer: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryLabels {
    pub final_simple: &'static str,
    pub final_compound: &'static str,
    pub interest_simple: &'static str,
    pub interest_compound: &'static str,
    pub contributions: &'static str,
    pub difference: &'static str,
    pub effective_simple: &'static str,
    pub effective_compound: &'static str,
    pub break_even: &'static str,
    pub break_even_never: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonChartLabels {
    pub title: &'static str,
    pub legend_simple: &'static str,
    pub legend_compound: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GapChartLabels {
    pub title: &'static str,
    pub legend_gap: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartLabels {
    pub comparison: ComparisonChartLabels,
    pub gap: GapChartLabels,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportLabels {
    pub title: &'static str,
    pub csv: &'static str,
    pub csv_success: &'static str,
    pub error: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableLabels {
    pub title: &'static str,
    pub description: &'static str,
    pub column_period: &'static str,
    pub column_simple_total: &'static str,
    pub column_simple_interest: &'static str,
    pub column_compound_total: &'static str,
    pub column_compound_interest: &'static str,
    pub column_contribution: &'static str,
    pub column_gap: &'static str,
    pub show_more: &'static str,
    pub show_less: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateLabels {
    pub invalid_input: &'static str,
    pub zero_periods: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsLabels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub summary: SummaryLabels,
    pub charts: ChartLabels,
    pub export: ExportLabels,
    pub table: TableLabels,
    pub states: StateLabels,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionLabels {
    pub switch_to_spanish: &'static str,
    pub switch_to_english: &'static str,
    pub switch_to_light_theme: &'static str,
    pub switch_to_dark_theme: &'static str,
}

static EN: AppDictionary = AppDictionary {
    app: AppLabels {
        name: "Interest Growth Explorer",
        short_description: "Understand how your capital grows with simple and compound interest.",
    },
    header: HeaderLabels {
        tagline: "Interactive guide.",
        language_toggle_aria: "Switch interface language",
        theme_toggle_aria: "Switch color theme",
        currency_label: "Currency",
    },
    hero: HeroLabels {
        title: "Compare simple and compound growth with realistic scenarios",
        subtitle: "Adjust initial capital, monthly contributions and compounding frequency to see how balances change over time.",
        educational_disclaimer: "Educational content only. Results ignore taxes, fees and inflation and should not be interpreted as financial advice.",
        legal_disclaimer: "Past performance does not guarantee future results. Always double-check inputs before making financial decisions.",
    },
    form: FormLabels {
        title: "Set up your scenario",
        description: "All calculations use monthly periods. Values update instantly as you type.",
        reset: "Reset inputs",
        fields: FieldLabels {
            principal: FieldConfig {
                label: "Initial capital",
                helper: "Amount invested at period 0.",
            },
            rate_percent: FieldConfig {
                label: "Return per period (%)",
                helper: "Percentage applied once per period. Negative values model losses.",
            },
            periods: FieldConfig {
                label: "Number of periods (months)",
                helper: "Between 0 and 480. One period equals one month.",
            },
            compound_frequency: FieldConfig {
                label: "Reinvestments per period",
                helper: "Times the interest is compounded within each period (1 to 12).",
            },
            contributions_enabled: FieldConfig {
                label: "Enable regular contributions",
                helper: "Add the same amount after each period to simulate recurring deposits.",
            },
            contribution: FieldConfig {
                label: "Contribution per period",
                helper: "Deposited after interest is applied in every period.",
            },
            currency: FieldConfig {
                label: "Display currency",
                helper: "",
            },
        },
    },
    validations: ValidationLabels {
        required: "Please enter a number.",
        min_inclusive: "Value must be greater than or equal to {{min}}.",
        max_inclusive: "Value must be less than or equal to {{max}}.",
        range: "Value must be between {{min}} and {{max}}.",
        integer: "Value must be a whole number.",
    },
    results: ResultsLabels {
        title: "Key metrics",
        subtitle: "Totals include principal and (if enabled) contributions. Interest values are shown before rounding in the charts.",
        summary: SummaryLabels {
            final_simple: "Simple interest total",
            final_compound: "Compound interest total",
            interest_simple: "Simple interest earned",
            interest_compound: "Compound interest earned",
            contributions: "Total contributions",
            difference: "Compound advantage",
            effective_simple: "Effective annualized growth (simple)",
            effective_compound: "Effective annualized growth (compound)",
            break_even: "Compound surpasses simple at period {{period}}",
            break_even_never: "Compound does not surpass simple within the selected horizon.",
        },
        charts: ChartLabels {
            comparison: ComparisonChartLabels {
                title: "Balance comparison over time",
                legend_simple: "Simple balance",
                legend_compound: "Compound balance",
            },
            gap: GapChartLabels {
                title: "Compound advantage by period",
                legend_gap: "Compound - Simple",
            },
        },
        export: ExportLabels {
            title: "Export your results",
            csv: "Download CSV",
            csv_success: "CSV generated successfully.",
            error: "Export failed. Please try again.",
        },
        table: TableLabels {
            title: "Timeline breakdown",
            description: "Totals use full precision but are rounded visually to two decimals. Contributions are applied after interest at the end of each period.",
            column_period: "Period",
            column_simple_total: "Simple total",
            column_simple_interest: "Simple interest",
            column_compound_total: "Compound total",
            column_compound_interest: "Compound interest",
            column_contribution: "Contribution",
            column_gap: "Compound advantage",
            show_more: "Show next {{count}} periods",
            show_less: "Show fewer rows",
        },
        states: StateLabels {
            invalid_input: "Review the highlighted fields to generate the comparison.",
            zero_periods: "Add at least one period to view growth over time.",
        },
    },
    actions: ActionLabels {
        switch_to_spanish: "View in Spanish",
        switch_to_english: "Switch to English",
        switch_to_light_theme: "Use light mode",
        switch_to_dark_theme: "Use dark mode",
    },
};

static ES: AppDictionary = AppDictionary {
    app: AppLabels {
        name: "Explorador de Crecimiento del Interés",
        short_description: "Comprende cómo crece tu capital con interés simple y compuesto.",
    },
    header: HeaderLabels {
        tagline: "Guía interactiva.",
        language_toggle_aria: "Cambiar el idioma de la interfaz",
        theme_toggle_aria: "Cambiar modo de color",
        currency_label: "Moneda",
    },
    hero: HeroLabels {
        title: "Compara el crecimiento simple y compuesto con escenarios realistas",
        subtitle: "Ajusta capital inicial, aportes mensuales y frecuencia de reinversión para ver cómo cambia el saldo con el tiempo.",
        educational_disclaimer: "Contenido educativo únicamente. Los resultados no consideran impuestos, comisiones ni inflación y no constituyen asesoría financiera.",
        legal_disclaimer: "El rendimiento pasado no garantiza resultados futuros. Verifica tus entradas antes de tomar decisiones financieras.",
    },
    form: FormLabels {
        title: "Configura tu escenario",
        description: "Todos los cálculos usan periodos mensuales. Los valores se actualizan al instante mientras escribes.",
        reset: "Restablecer entradas",
        fields: FieldLabels {
            principal: FieldConfig {
                label: "Capital inicial",
                helper: "Monto invertido en el periodo 0.",
            },
            rate_percent: FieldConfig {
                label: "Rendimiento por periodo (%)",
                helper: "Porcentaje aplicado una vez por periodo. Valores negativos modelan pérdidas.",
            },
            periods: FieldConfig {
                label: "Número de periodos (meses)",
                helper: "Entre 0 y 480. Un periodo equivale a un mes.",
            },
            compound_frequency: FieldConfig {
                label: "Reinversiones por periodo",
                helper: "Veces que el interés se capitaliza dentro de cada periodo (1 a 12).",
            },
            contributions_enabled: FieldConfig {
                label: "Habilitar aportes periódicos",
                helper: "Agrega el mismo monto al final de cada periodo para simular depósitos recurrentes.",
            },
            contribution: FieldConfig {
                label: "Aporte por periodo",
                helper: "Depositado después de aplicar el interés en cada periodo.",
            },
            currency: FieldConfig {
                label: "Moneda de visualización",
                helper: "",
            },
        },
    },
    validations: ValidationLabels {
        required: "Ingresa un número válido.",
        min_inclusive: "El valor debe ser mayor o igual que {{min}}.",
        max_inclusive: "El valor debe ser menor o igual que {{max}}.",
        range: "El valor debe estar entre {{min}} y {{max}}.",
        integer: "El valor debe ser un número entero.",
    },
    results: ResultsLabels {
        title: "Métricas clave",
        subtitle: "Los totales incluyen capital y, si aplica, aportes. Los valores de interés se muestran antes del redondeo en las gráficas.",
        summary: SummaryLabels {
            final_simple: "Total con interés simple",
            final_compound: "Total con interés compuesto",
            interest_simple: "Interés simple acumulado",
            interest_compound: "Interés compuesto acumulado",
            contributions: "Aportes totales",
            difference: "Ventaja del compuesto",
            effective_simple: "Crecimiento anualizado efectivo (simple)",
            effective_compound: "Crecimiento anualizado efectivo (compuesto)",
            break_even: "El compuesto supera al simple en el periodo {{period}}",
            break_even_never: "El compuesto no supera al simple en el horizonte seleccionado.",
        },
        charts: ChartLabels {
            comparison: ComparisonChartLabels {
                title: "Comparación de saldo en el tiempo",
                legend_simple: "Saldo simple",
                legend_compound: "Saldo compuesto",
            },
            gap: GapChartLabels {
                title: "Ventaja del compuesto por periodo",
                legend_gap: "Compuesto - Simple",
            },
        },
        export: ExportLabels {
            title: "Exporta tus resultados",
            csv: "Descargar CSV",
            csv_success: "CSV generado correctamente.",
            error: "No se pudo exportar. Intenta nuevamente.",
        },
        table: TableLabels {
            title: "Desglose por periodo",
            description: "Los totales usan máxima precisión pero se muestran con dos decimales. Los aportes se agregan después del interés al final de cada periodo.",
            column_period: "Periodo",
            column_simple_total: "Total simple",
            column_simple_interest: "Interés simple",
            column_compound_total: "Total compuesto",
            column_compound_interest: "Interés compuesto",
            column_contribution: "Aporte",
            column_gap: "Ventaja compuesta",
            show_more: "Mostrar siguientes {{count}} periodos",
            show_less: "Mostrar menos filas",
        },
        states: StateLabels {
            invalid_input: "Revisa los campos marcados para generar la comparación.",
            zero_periods: "Agrega al menos un periodo para ver el crecimiento en el tiempo.",
        },
    },
    actions: ActionLabels {
        switch_to_spanish: "Ver en español",
        switch_to_english: "Cambiar a inglés",
        switch_to_light_theme: "Usar modo claro",
        switch_to_dark_theme: "Usar modo oscuro",
    },
};

pub fn dictionary(locale: Locale) -> &'static AppDictionary {
    match locale {
        Locale::En => &EN,
        Locale::Es => &ES,
    }
}

fn dictionary_value(locale: Locale) -> &'static Value {
    static EN_VALUE: OnceLock<Value> = OnceLock::new();
    static ES_VALUE: OnceLock<Value> = OnceLock::new();
    let cell = match locale {
        Locale::En => &EN_VALUE,
        Locale::Es => &ES_VALUE,
    };
    cell.get_or_init(|| serde_json::to_value(dictionary(locale)).unwrap_or(Value::Null))
}

/// Walks a dotted camelCase path (`"results.table.columnPeriod"`) through the
/// dictionary and returns the leaf string, if the path leads to one.
pub fn resolve(locale: Locale, key: &str) -> Option<&'static str> {
    let mut current = dictionary_value(locale);
    for segment in key.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    current.as_str()
}

/// Resolves a dotted key and substitutes `{{name}}` template variables.
/// An unknown key falls back to the key itself so a missing translation
/// degrades visibly instead of failing.
pub fn translate(locale: Locale, key: &str, vars: &[(&str, &str)]) -> String {
    let raw = match resolve(locale, key) {
        Some(value) => value.to_string(),
        None => return key.to_string(),
    };
    vars.iter().fold(raw, |acc, (name, value)| {
        acc.replace(&format!("{{{{{name}}}}}"), value)
    })
}
