//! Cost estimation from an injected pricing table.
//!
//! Rates are configuration, not computation: hosts supply a table of per-model
//! rates (or use the built-in defaults) and the estimator never mutates it.
//! An unknown model identifier falls back to the table's designated default
//! entry rather than failing, so a newly released model never breaks cost
//! reporting.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

// =============================================================================
// Static Rate Definitions
// =============================================================================

/// Model identifier the built-in table designates as its default.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Built-in rate for the Flash model family.
pub const GEMINI_FLASH_RATE: ModelRate = ModelRate {
    input_per_1k: 0.000_018_75,
    output_per_1k: 0.000_075,
};

/// Built-in rate for the Pro model family.
pub const GEMINI_PRO_RATE: ModelRate = ModelRate {
    input_per_1k: 0.001_25,
    output_per_1k: 0.005,
};

/// Note attached to every cost estimate.
pub const OUTPUT_COST_NOTE: &str = "Output tokens charged separately based on response length";

// =============================================================================
// Pricing Table
// =============================================================================

/// Per-model pricing in USD per 1000 tokens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelRate {
    /// Input-token rate per 1000 tokens
    pub input_per_1k: f64,
    /// Output-token rate per 1000 tokens
    pub output_per_1k: f64,
}

/// Immutable model-to-rate table with a designated default entry.
///
/// Deserializable so hosts can inject current rates from configuration and
/// tests can use fixture tables; deserialization enforces the same invariant
/// as [`PricingTable::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawPricingTable")]
pub struct PricingTable {
    rates: BTreeMap<String, ModelRate>,
    default_model: String,
    #[serde(skip_serializing)]
    default_rate: ModelRate,
}

#[derive(Deserialize)]
struct RawPricingTable {
    rates: BTreeMap<String, ModelRate>,
    default_model: String,
}

impl TryFrom<RawPricingTable> for PricingTable {
    type Error = Error;

    fn try_from(raw: RawPricingTable) -> Result<Self> {
        PricingTable::new(raw.rates, raw.default_model)
    }
}

impl PricingTable {
    /// Build a table, validating that the default model has a rate entry.
    ///
    /// # Errors
    /// Returns [`Error::Pricing`] if `default_model` is absent from `rates`.
    pub fn new(rates: BTreeMap<String, ModelRate>, default_model: impl Into<String>) -> Result<Self> {
        let default_model = default_model.into();
        let Some(&default_rate) = rates.get(&default_model) else {
            return Err(Error::pricing(format!(
                "default model '{default_model}' has no rate entry"
            )));
        };
        Ok(Self {
            rates,
            default_model,
            default_rate,
        })
    }

    /// The model identifier used when a lookup misses.
    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    /// Rate for a model, falling back to the default entry when unknown.
    pub fn rate_for(&self, model: &str) -> ModelRate {
        match self.rates.get(model) {
            Some(&rate) => rate,
            None => {
                debug!(
                    model,
                    default_model = %self.default_model,
                    "unknown model id, using default rate"
                );
                self.default_rate
            }
        }
    }

    /// Estimate the input cost of a token count against a model.
    ///
    /// Only input-token cost is computed; output length is unknown before the
    /// call, which the estimate's `note` states. The cost is rounded to six
    /// decimal places.
    ///
    /// # Example
    ///
    /// ```
    /// use gemedia_frames::PricingTable;
    ///
    /// let table = PricingTable::default();
    /// let cost = table.estimate_cost(7500, "gemini-2.5-flash");
    /// assert_eq!(cost.estimated_input_cost_usd, 0.000141);
    /// ```
    pub fn estimate_cost(&self, tokens: u64, model: &str) -> CostEstimate {
        let rate = self.rate_for(model);
        let input_cost = (tokens as f64 / 1000.0) * rate.input_per_1k;
        CostEstimate {
            tokens,
            model: model.to_string(),
            estimated_input_cost_usd: round_to(input_cost, 6),
            note: OUTPUT_COST_NOTE.to_string(),
        }
    }
}

impl Default for PricingTable {
    /// The built-in Gemini rate table, defaulting to `gemini-2.5-flash`.
    fn default() -> Self {
        let rates = BTreeMap::from([
            ("gemini-2.5-flash-lite".to_string(), GEMINI_FLASH_RATE),
            ("gemini-2.5-flash".to_string(), GEMINI_FLASH_RATE),
            ("gemini-2.5-pro".to_string(), GEMINI_PRO_RATE),
            ("gemini-2.0-flash".to_string(), GEMINI_FLASH_RATE),
        ]);
        Self {
            rates,
            default_model: DEFAULT_MODEL.to_string(),
            default_rate: GEMINI_FLASH_RATE,
        }
    }
}

/// An offline input-cost estimate for a token count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostEstimate {
    /// Token count the estimate covers
    pub tokens: u64,
    /// Model identifier as requested by the caller
    pub model: String,
    /// Estimated input cost in USD, rounded to six decimal places
    pub estimated_input_cost_usd: f64,
    /// Caveat about output-token charges
    pub note: String,
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
