//! Structured product record and the schema the model must follow.

use brain_core::JsonSchemaFormat;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Schema name reported to the provider.
pub const PRODUCT_SCHEMA_NAME: &str = "product_details";

/// Product information extracted from a free-text description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductRecord {
    pub product_name: String,
    pub category: String,
    pub features: Vec<String>,
    pub colors: Vec<String>,
    pub pricing: Pricing,
}

/// Pricing of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pricing {
    pub regular_price: f64,
    pub sale_price: f64,
    pub currency: String,
}

/// JSON schema for [`ProductRecord`]: every field required, no extras.
pub fn product_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "product_name": {"type": "string"},
            "category": {"type": "string"},
            "features": {"type": "array", "items": {"type": "string"}},
            "colors": {"type": "array", "items": {"type": "string"}},
            "pricing": {
                "type": "object",
                "properties": {
                    "regular_price": {"type": "number"},
                    "sale_price": {"type": "number"},
                    "currency": {"type": "string"}
                },
                "additionalProperties": false,
                "required": ["regular_price", "sale_price", "currency"]
            }
        },
        "required": ["product_name", "features", "colors", "pricing", "category"],
        "additionalProperties": false
    })
}

/// Strict structured-output format for product extraction.
pub fn product_format() -> JsonSchemaFormat {
    JsonSchemaFormat::strict(PRODUCT_SCHEMA_NAME, product_schema())
}

/// Prompt sent to the model for a description.
pub fn extraction_prompt(description: &str) -> String {
    format!(
        "Extract structured product information from this description: {}",
        description
    )
}
