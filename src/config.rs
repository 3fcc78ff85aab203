//! Billing configuration for the invoice type handlers.

use crate::domain::handlers::COMMERCIAL_TAX_RATE;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Settings used to build the invoice type handlers.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(default)]
pub struct BillingConfig {
    /// Tax rate accrued on payments against commercial invoices.
    pub commercial_tax_rate: Decimal,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            commercial_tax_rate: COMMERCIAL_TAX_RATE,
        }
    }
}

impl BillingConfig {
    /// Parses a JSON config document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| PaymentError::invalid_input(format!("Invalid billing config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the tax rate lies within `0..=1`.
    pub fn validate(&self) -> Result<()> {
        if self.commercial_tax_rate < Decimal::ZERO {
            return Err(PaymentError::invalid_input("Tax rate cannot be negative"));
        }
        if self.commercial_tax_rate > Decimal::ONE {
            return Err(PaymentError::invalid_input("Tax rate cannot exceed 1"));
        }
        Ok(())
    }
}
