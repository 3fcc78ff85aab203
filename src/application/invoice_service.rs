use crate::config::BillingConfig;
use crate::domain::handlers::{HandlerRegistry, InvoiceTypeHandler, InvoiceTypeHandlerBox};
use crate::domain::invoice::InvoiceType;
use crate::domain::payment::{Payment, PaymentOutcome};
use crate::domain::ports::InvoiceRepository;
use crate::error::{PaymentError, Result};
use crate::infrastructure::in_memory::InMemoryInvoiceRepository;
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Applies payments to invoices held in a repository.
///
/// `InvoiceService` owns its repository and the handler table. Every payment
/// is fully validated against the stored invoice before the invoice is
/// mutated and saved back, so rejected payments leave the repository untouched.
pub struct InvoiceService<R: InvoiceRepository = InMemoryInvoiceRepository> {
    repository: R,
    handlers: HandlerRegistry,
}

impl<R: InvoiceRepository> InvoiceService<R> {
    /// Creates a service with the built-in handlers and default billing settings.
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            handlers: HandlerRegistry::standard(&BillingConfig::default()),
        }
    }

    /// Creates a service whose handlers are built from `config`.
    pub fn with_config(repository: R, config: &BillingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            repository,
            handlers: HandlerRegistry::standard(config),
        })
    }

    /// Registers the handler for an invoice type, returning the one it replaces.
    pub fn register_handler(
        &mut self,
        invoice_type: InvoiceType,
        handler: InvoiceTypeHandlerBox,
    ) -> Option<InvoiceTypeHandlerBox> {
        self.handlers.register(invoice_type, handler)
    }

    /// Returns the handler registered for `invoice_type`, if any.
    pub fn handler_for(&self, invoice_type: InvoiceType) -> Option<&dyn InvoiceTypeHandler> {
        self.handlers.get(invoice_type)
    }

    /// Borrows the underlying invoice repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Mutably borrows the underlying invoice repository.
    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repository
    }

    /// Consumes the service and returns its invoice repository.
    pub fn into_repository(self) -> R {
        self.repository
    }

    /// Validates `payment` and applies it to the invoice it references.
    ///
    /// Malformed payments, unknown references, corrupt invoices and invoice
    /// types without a handler are errors. Everything else, including a
    /// rejected overpayment, is reported as a [`PaymentOutcome`].
    pub fn process_payment(&mut self, payment: Option<Payment>) -> Result<PaymentOutcome> {
        let payment = payment
            .ok_or_else(|| PaymentError::invalid_input("Payment cannot be null or empty"))?;
        if payment.amount < Decimal::ZERO {
            return Err(PaymentError::invalid_input(
                "Payment amount cannot be negative",
            ));
        }
        if payment.reference.is_empty() {
            return Err(PaymentError::invalid_input("Found no invoice reference"));
        }

        let mut invoice =
            self.repository
                .get(&payment.reference)?
                .ok_or_else(|| PaymentError::NotFound {
                    reference: payment.reference.clone(),
                })?;

        if invoice.amount == Decimal::ZERO {
            if !invoice.payments.is_empty() {
                warn!(
                    reference = %invoice.reference,
                    payments = invoice.payments.len(),
                    "zero amount invoice contains payments"
                );
                return Err(PaymentError::InconsistentState(
                    "Invoice has zero amount but contains payments".to_string(),
                ));
            }
            return Ok(report(&payment, PaymentOutcome::NoPaymentNeeded));
        }

        let remaining = invoice.remaining_amount();
        if remaining == Decimal::ZERO {
            return Ok(report(&payment, PaymentOutcome::AlreadyFullyPaid));
        }
        if payment.amount > remaining {
            return Ok(report(&payment, PaymentOutcome::ExceedsRemainingAmount));
        }

        let handler = self
            .handlers
            .get(invoice.r#type)
            .ok_or(PaymentError::Unsupported(invoice.r#type))?;

        let settles_invoice = payment.amount == remaining;
        handler.apply_payment(&mut invoice, payment.clone());
        self.repository.save(invoice)?;

        let outcome = if settles_invoice {
            PaymentOutcome::FullyPaid
        } else {
            PaymentOutcome::PartiallyPaid
        };
        Ok(report(&payment, outcome))
    }
}

fn report(payment: &Payment, outcome: PaymentOutcome) -> PaymentOutcome {
    debug!(
        reference = %payment.reference,
        amount = %payment.amount,
        applied = outcome.is_applied(),
        "{}",
        outcome
    );
    outcome
}
