#![allow(dead_code)]

use invoice_payments::application::invoice_service::InvoiceService;
use invoice_payments::domain::invoice::{Invoice, InvoiceType};
use invoice_payments::domain::payment::Payment;
use invoice_payments::domain::ports::InvoiceRepository;
use invoice_payments::infrastructure::in_memory::InMemoryInvoiceRepository;
use rust_decimal::Decimal;

pub const REFERENCE: &str = "abc";

/// Builds an invoice keyed by [`REFERENCE`] whose history is one payment per entry
/// of `payments`.
pub fn invoice(
    amount: Decimal,
    amount_paid: Decimal,
    payments: &[Decimal],
    r#type: InvoiceType,
) -> Invoice {
    let mut invoice = Invoice::new(REFERENCE, amount, r#type);
    invoice.amount_paid = amount_paid;
    invoice.payments = payments
        .iter()
        .map(|amount| Payment::new(*amount, REFERENCE))
        .collect();
    invoice
}

pub fn service_with(invoice: Invoice) -> InvoiceService {
    InvoiceService::new(InMemoryInvoiceRepository::from_invoices([invoice]))
}

pub fn payment(amount: Decimal) -> Option<Payment> {
    Some(Payment::new(amount, REFERENCE))
}

pub fn stored(service: &InvoiceService) -> Invoice {
    service
        .repository()
        .get(REFERENCE)
        .expect("in-memory repository cannot fail")
        .expect("invoice should be stored")
}
