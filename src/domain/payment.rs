use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A payment submitted against an invoice.
///
/// Payments carry no identity of their own: once applied they are appended to
/// the invoice's payment history.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Payment {
    pub amount: Decimal,
    /// Reference of the invoice being paid.
    #[serde(default)]
    pub reference: String,
}

impl Payment {
    pub fn new(amount: Decimal, reference: impl Into<String>) -> Self {
        Self {
            amount,
            reference: reference.into(),
        }
    }
}

/// Business outcome of processing a payment.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum PaymentOutcome {
    /// The invoice has a zero amount and no payments.
    NoPaymentNeeded,
    AlreadyFullyPaid,
    /// Rejected, the payment is larger than what is still owed.
    ExceedsRemainingAmount,
    FullyPaid,
    PartiallyPaid,
}

impl PaymentOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoPaymentNeeded => "No payment needed",
            Self::AlreadyFullyPaid => "Invoice was already fully paid",
            Self::ExceedsRemainingAmount => "Payment exceeds the remaining invoice amount",
            Self::FullyPaid => "Invoice is now fully paid",
            Self::PartiallyPaid => "Partial payment received, invoice not fully paid",
        }
    }

    /// Whether the payment was applied to the invoice.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::FullyPaid | Self::PartiallyPaid)
    }
}

impl fmt::Display for PaymentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PaymentOutcome> for String {
    fn from(outcome: PaymentOutcome) -> Self {
        outcome.as_str().to_string()
    }
}
