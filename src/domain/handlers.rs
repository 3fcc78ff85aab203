use super::invoice::{Invoice, InvoiceType};
use super::payment::Payment;
use crate::config::BillingConfig;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use tracing::debug;

/// Tax rate applied to payments on commercial invoices.
pub const COMMERCIAL_TAX_RATE: Decimal = dec!(0.14);

/// Strategy for applying a payment to one kind of invoice.
///
/// Handlers are total over validated input: the caller checks the payment and
/// the invoice state before calling [`apply_payment`](Self::apply_payment).
pub trait InvoiceTypeHandler: Send + Sync {
    /// Adds the payment to the invoice, accruing tax where applicable.
    fn apply_payment(&self, invoice: &mut Invoice, payment: Payment);

    /// Tax owed on a payment of `amount`.
    fn calculate_tax(&self, amount: Decimal) -> Decimal;
}

pub type InvoiceTypeHandlerBox = Box<dyn InvoiceTypeHandler>;

/// Untaxed invoices.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardInvoiceHandler;

impl InvoiceTypeHandler for StandardInvoiceHandler {
    fn apply_payment(&self, invoice: &mut Invoice, payment: Payment) {
        debug!(reference = %invoice.reference, amount = %payment.amount, "applying standard payment");
        invoice.record_payment(payment);
    }

    fn calculate_tax(&self, _amount: Decimal) -> Decimal {
        Decimal::ZERO
    }
}

/// Invoices taxed at a fixed rate on every payment.
#[derive(Debug, Clone, Copy)]
pub struct CommercialInvoiceHandler {
    tax_rate: Decimal,
}

impl CommercialInvoiceHandler {
    pub fn new(tax_rate: Decimal) -> Self {
        Self { tax_rate }
    }

    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }
}

impl Default for CommercialInvoiceHandler {
    fn default() -> Self {
        Self::new(COMMERCIAL_TAX_RATE)
    }
}

impl InvoiceTypeHandler for CommercialInvoiceHandler {
    fn apply_payment(&self, invoice: &mut Invoice, payment: Payment) {
        let tax = self.calculate_tax(payment.amount);
        debug!(
            reference = %invoice.reference,
            amount = %payment.amount,
            tax = %tax,
            "applying commercial payment"
        );
        invoice.record_payment(payment);
        invoice.tax_amount += tax;
    }

    fn calculate_tax(&self, amount: Decimal) -> Decimal {
        amount * self.tax_rate
    }
}

/// Lookup table from invoice type to the handler that applies its payments.
///
/// Types without an entry are unsupported; there is no fallback handler.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<InvoiceType, InvoiceTypeHandlerBox>,
}

impl HandlerRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry with the built-in Standard and Commercial handlers.
    pub fn standard(config: &BillingConfig) -> Self {
        let mut registry = Self::empty();
        registry.register(InvoiceType::Standard, Box::new(StandardInvoiceHandler));
        registry.register(
            InvoiceType::Commercial,
            Box::new(CommercialInvoiceHandler::new(config.commercial_tax_rate)),
        );
        registry
    }

    /// Registers `handler` for `invoice_type`, returning the handler it replaces.
    pub fn register(
        &mut self,
        invoice_type: InvoiceType,
        handler: InvoiceTypeHandlerBox,
    ) -> Option<InvoiceTypeHandlerBox> {
        self.handlers.insert(invoice_type, handler)
    }

    pub fn get(&self, invoice_type: InvoiceType) -> Option<&dyn InvoiceTypeHandler> {
        self.handlers.get(&invoice_type).map(|handler| handler.as_ref())
    }

    pub fn contains(&self, invoice_type: InvoiceType) -> bool {
        self.handlers.contains_key(&invoice_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(r#type: InvoiceType) -> Invoice {
        Invoice::new("INV-1", dec!(100), r#type)
    }

    #[test]
    fn test_standard_handler_applies_without_tax() {
        let mut invoice = invoice(InvoiceType::Standard);
        StandardInvoiceHandler.apply_payment(&mut invoice, Payment::new(dec!(30), "INV-1"));

        assert_eq!(invoice.amount_paid, dec!(30));
        assert_eq!(invoice.tax_amount, Decimal::ZERO);
        assert_eq!(invoice.payments, vec![Payment::new(dec!(30), "INV-1")]);
        assert_eq!(StandardInvoiceHandler.calculate_tax(dec!(30)), Decimal::ZERO);
    }

    #[test]
    fn test_commercial_handler_accrues_tax() {
        let handler = CommercialInvoiceHandler::default();
        let mut invoice = invoice(InvoiceType::Commercial);

        handler.apply_payment(&mut invoice, Payment::new(dec!(50), "INV-1"));
        assert_eq!(invoice.amount_paid, dec!(50));
        assert_eq!(invoice.tax_amount, dec!(7.00));

        handler.apply_payment(&mut invoice, Payment::new(dec!(25), "INV-1"));
        assert_eq!(invoice.amount_paid, dec!(75));
        assert_eq!(invoice.tax_amount, dec!(10.50));
        assert_eq!(invoice.payments.len(), 2);
    }

    #[test]
    fn test_commercial_calculate_tax() {
        let handler = CommercialInvoiceHandler::default();
        assert_eq!(handler.tax_rate(), dec!(0.14));
        assert_eq!(handler.calculate_tax(dec!(100)), dec!(14));
        assert_eq!(handler.calculate_tax(dec!(0.01)), dec!(0.0014));
        assert_eq!(handler.calculate_tax(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_standard_registry() {
        let registry = HandlerRegistry::standard(&BillingConfig::default());
        assert!(registry.contains(InvoiceType::Standard));
        assert!(registry.contains(InvoiceType::Commercial));
        assert!(!registry.contains(InvoiceType::Other));
        assert!(registry.get(InvoiceType::Other).is_none());

        let commercial = registry.get(InvoiceType::Commercial).unwrap();
        assert_eq!(commercial.calculate_tax(dec!(10)), dec!(1.4));
    }

    #[test]
    fn test_register_replaces_existing_handler() {
        let mut registry = HandlerRegistry::empty();
        assert!(
            registry
                .register(InvoiceType::Other, Box::new(StandardInvoiceHandler))
                .is_none()
        );

        let previous = registry.register(
            InvoiceType::Other,
            Box::new(CommercialInvoiceHandler::new(dec!(0.2))),
        );
        assert!(previous.is_some());

        let handler = registry.get(InvoiceType::Other).unwrap();
        assert_eq!(handler.calculate_tax(dec!(10)), dec!(2.0));
    }
}
