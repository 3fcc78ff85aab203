use super::payment::Payment;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of invoice; selects the handler used to apply payments.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceType {
    #[default]
    Standard,
    Commercial,
    Other,
}

impl fmt::Display for InvoiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Standard => "Standard",
            Self::Commercial => "Commercial",
            Self::Other => "Other",
        };
        f.write_str(name)
    }
}

/// An invoice and its payment state.
///
/// The entity is passive: it is loaded from and saved back to an
/// [`InvoiceRepository`](super::ports::InvoiceRepository) by the caller and
/// only mutated through an invoice type handler.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Invoice {
    /// Key of the invoice in its repository.
    pub reference: String,
    /// Total amount due.
    pub amount: Decimal,
    /// Sum of all applied payments.
    pub amount_paid: Decimal,
    /// Tax accrued on applied payments.
    pub tax_amount: Decimal,
    /// Applied payments, oldest first.
    #[serde(default)]
    pub payments: Vec<Payment>,
    pub r#type: InvoiceType,
}

impl Invoice {
    pub fn new(reference: impl Into<String>, amount: Decimal, r#type: InvoiceType) -> Self {
        Self {
            reference: reference.into(),
            amount,
            amount_paid: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
            payments: Vec::new(),
            r#type,
        }
    }

    /// Amount still owed before any further payment.
    pub fn remaining_amount(&self) -> Decimal {
        self.amount - self.amount_paid
    }

    /// Records an applied payment in the invoice history.
    pub(crate) fn record_payment(&mut self, payment: Payment) {
        self.amount_paid += payment.amount;
        self.payments.push(payment);
    }
}
