use crate::domain::invoice::InvoiceType;
use thiserror::Error;

/// Failures raised while validating or applying a payment.
///
/// Business outcomes (already paid, overpayment, ...) are not errors; they are
/// reported through [`PaymentOutcome`](crate::domain::payment::PaymentOutcome).
#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("No invoice found for reference {reference}")]
    NotFound { reference: String },
    #[error("{0}")]
    InconsistentState(String),
    #[error("Unsupported invoice type: {0}")]
    Unsupported(InvoiceType),
    #[error("Storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Discriminant of [`PaymentError`], for callers that only need to branch on
/// the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentErrorKind {
    InvalidInput,
    NotFound,
    InconsistentState,
    Unsupported,
    Storage,
}

impl PaymentError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn kind(&self) -> PaymentErrorKind {
        match self {
            Self::InvalidInput(_) => PaymentErrorKind::InvalidInput,
            Self::NotFound { .. } => PaymentErrorKind::NotFound,
            Self::InconsistentState(_) => PaymentErrorKind::InconsistentState,
            Self::Unsupported(_) => PaymentErrorKind::Unsupported,
            Self::Storage(_) => PaymentErrorKind::Storage,
        }
    }
}

pub type Result<T> = std::result::Result<T, PaymentError>;
