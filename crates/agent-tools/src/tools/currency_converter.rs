//! Currency converter tool backed by a static exchange rate table.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Fixed exchange rates as (from, to, multiplier).
///
/// Mock data: entries are not inverses of each other and there is no
/// identity rate, so `USD -> USD` is unsupported.
const EXCHANGE_RATES: &[(&str, &str, f64)] = &[
    ("USD", "EUR", 0.95),
    ("USD", "GBP", 0.80),
    ("USD", "AUD", 1.55),
    ("USD", "CAD", 1.40),
    ("EUR", "USD", 1.05),
    ("EUR", "GBP", 0.85),
    ("EUR", "AUD", 1.63),
    ("EUR", "CAD", 1.47),
    ("GBP", "USD", 1.25),
    ("GBP", "EUR", 1.18),
    ("GBP", "AUD", 1.92),
    ("GBP", "CAD", 1.73),
    ("AUD", "USD", 0.65),
    ("AUD", "EUR", 0.61),
    ("AUD", "GBP", 0.52),
    ("AUD", "CAD", 0.90),
    ("CAD", "USD", 0.71),
    ("CAD", "EUR", 0.68),
    ("CAD", "GBP", 0.58),
    ("CAD", "AUD", 1.11),
];

/// Look up the rate for a currency pair.
pub fn exchange_rate(from: &str, to: &str) -> Option<f64> {
    EXCHANGE_RATES
        .iter()
        .find(|(f, t, _)| *f == from && *t == to)
        .map(|(_, _, rate)| *rate)
}

/// Result of a currency conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    /// Converted amount, rounded to 2 decimal places.
    pub amount: f64,
    pub from_currency: String,
    pub to_currency: String,
}

/// Convert `amount` from one currency to another using the static table.
///
/// Codes are looked up exactly as given: `usd` is not `USD`.
pub fn convert_currency(amount: f64, from: &str, to: &str) -> Result<Conversion, ToolError> {
    let Some(rate) = exchange_rate(from, to) else {
        let err = ToolError::UnsupportedCurrencyPair {
            from: from.to_string(),
            to: to.to_string(),
        };
        error!("Error in currency conversion: {}", err);
        return Err(err);
    };

    Ok(Conversion {
        amount: round_cents(amount * rate),
        from_currency: from.to_string(),
        to_currency: to.to_string(),
    })
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Currency converter tool.
///
/// Converts between USD, EUR, GBP, AUD and CAD using fixed mock rates.
///
/// # Parameters
///
/// - `amount` (required): Amount to convert (number)
/// - `from_currency` (required): Source currency code (e.g., "USD")
/// - `to_currency` (required): Target currency code (e.g., "EUR")
///
/// # Output
///
/// ```json
/// {"amount": 95.0, "from_currency": "USD", "to_currency": "EUR"}
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurrencyConverter;

impl CurrencyConverter {
    /// Create a new currency converter tool.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Tool for CurrencyConverter {
    fn name(&self) -> &str {
        "convert_currency"
    }

    fn description(&self) -> &str {
        "Convert an amount from one currency to another using current exchange rates"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "amount": {
                    "type": "number",
                    "description": "The amount of money to convert"
                },
                "from_currency": {
                    "type": "string",
                    "description": "The currency code to convert from (e.g., USD, EUR, GBP)"
                },
                "to_currency": {
                    "type": "string",
                    "description": "The currency code to convert to (e.g., USD, EUR, GBP)"
                }
            },
            "required": ["amount", "from_currency", "to_currency"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let amount = args.get_f64("amount")?;
        let from = args.get_string("from_currency")?;
        let to = args.get_string("to_currency")?;

        debug!("Converting {} {} to {}", amount, from, to);

        let conversion = convert_currency(amount, &from, &to)?;
        ToolOutput::json(&conversion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_convert_usd_to_eur() {
        let result = convert_currency(100.0, "USD", "EUR").unwrap();
        assert_eq!(result.amount, 95.0);
        assert_eq!(result.from_currency, "USD");
        assert_eq!(result.to_currency, "EUR");
    }

    #[test]
    fn test_convert_rounds_to_cents() {
        // 12.345 * 1.63 = 20.12235
        assert_eq!(convert_currency(12.345, "EUR", "AUD").unwrap().amount, 20.12);
        // 33.33 * 0.71 = 23.6643
        assert_eq!(convert_currency(33.33, "CAD", "USD").unwrap().amount, 23.66);
    }

    #[test]
    fn test_unsupported_pair() {
        let err = convert_currency(100.0, "USD", "JPY").unwrap_err();
        assert!(matches!(err, ToolError::UnsupportedCurrencyPair { .. }));
        assert_eq!(err.to_string(), "Unsupported currency pair: USD to JPY");
    }

    #[test]
    fn test_identity_pair_is_unsupported() {
        assert!(convert_currency(1.0, "USD", "USD").is_err());
    }

    #[test]
    fn test_rates_are_not_inverse() {
        let there = exchange_rate("USD", "EUR").unwrap();
        let back = exchange_rate("EUR", "USD").unwrap();
        assert_ne!(there * back, 1.0);
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        let err = convert_currency(100.0, "usd", "eur").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported currency pair: usd to eur");

        assert!(convert_currency(10.0, " GBP", "USD").is_err());
        assert_eq!(convert_currency(10.0, "GBP", "USD").unwrap().amount, 12.5);
    }

    #[test]
    fn test_table_covers_five_currencies() {
        let codes = ["USD", "EUR", "GBP", "AUD", "CAD"];
        for from in codes {
            for to in codes {
                assert_eq!(exchange_rate(from, to).is_some(), from != to, "{from}->{to}");
            }
        }
        assert_eq!(EXCHANGE_RATES.len(), 20);
    }

    #[tokio::test]
    async fn test_tool_execute() {
        let tool = CurrencyConverter::new();
        let params: HashMap<String, Value> = serde_json::from_value(json!({
            "amount": 100,
            "from_currency": "USD",
            "to_currency": "CAD"
        }))
        .unwrap();

        let output = tool.execute(ToolArgs::new(params)).await.unwrap();
        let conversion: Conversion = serde_json::from_str(&output.content).unwrap();
        assert_eq!(conversion.amount, 140.0);
        assert_eq!(conversion.to_currency, "CAD");
    }

    #[tokio::test]
    async fn test_tool_execute_missing_amount() {
        let tool = CurrencyConverter::new();
        let params: HashMap<String, Value> = serde_json::from_value(json!({
            "from_currency": "USD",
            "to_currency": "CAD"
        }))
        .unwrap();

        let result = tool.execute(ToolArgs::new(params)).await;
        assert!(matches!(result, Err(ToolError::MissingParameter(p)) if p == "amount"));
    }

    #[test]
    fn test_schema_is_strict() {
        let tool = CurrencyConverter::new();
        let schema = tool.parameters();
        assert_eq!(schema["additionalProperties"], false);
        assert_eq!(
            schema["required"],
            json!(["amount", "from_currency", "to_currency"])
        );
        assert!(tool.strict());
    }
}
