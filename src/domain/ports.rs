use super::invoice::Invoice;
use crate::error::Result;

/// Keyed storage for invoices.
///
/// Implementations perform no validation; they only look up and upsert
/// invoices by [`Invoice::reference`].
pub trait InvoiceRepository {
    fn get(&self, reference: &str) -> Result<Option<Invoice>>;

    /// Inserts the invoice, replacing any invoice with the same reference.
    fn save(&mut self, invoice: Invoice) -> Result<()>;

    fn len(&self) -> usize;

    /// Seeds the repository with an invoice.
    fn add(&mut self, invoice: Invoice) -> Result<()> {
        self.save(invoice)
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub type InvoiceRepositoryBox = Box<dyn InvoiceRepository + Send>;

impl<R: InvoiceRepository + ?Sized> InvoiceRepository for Box<R> {
    fn get(&self, reference: &str) -> Result<Option<Invoice>> {
        (**self).get(reference)
    }

    fn save(&mut self, invoice: Invoice) -> Result<()> {
        (**self).save(invoice)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
