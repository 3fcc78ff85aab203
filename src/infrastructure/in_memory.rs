use crate::domain::invoice::Invoice;
use crate::domain::ports::InvoiceRepository;
use crate::error::Result;
use std::collections::HashMap;

/// An in-memory invoice repository keyed by invoice reference.
///
/// Ideal for testing or embedding where persistence is not required.
#[derive(Debug, Default, Clone)]
pub struct InMemoryInvoiceRepository {
    invoices: HashMap<String, Invoice>,
}

impl InMemoryInvoiceRepository {
    /// Creates a new, empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with `invoices`. Later duplicates win.
    pub fn from_invoices(invoices: impl IntoIterator<Item = Invoice>) -> Self {
        Self {
            invoices: invoices
                .into_iter()
                .map(|invoice| (invoice.reference.clone(), invoice))
                .collect(),
        }
    }
}

impl InvoiceRepository for InMemoryInvoiceRepository {
    fn get(&self, reference: &str) -> Result<Option<Invoice>> {
        Ok(self.invoices.get(reference).cloned())
    }

    fn save(&mut self, invoice: Invoice) -> Result<()> {
        self.invoices.insert(invoice.reference.clone(), invoice);
        Ok(())
    }

    fn len(&self) -> usize {
        self.invoices.len()
    }
}
