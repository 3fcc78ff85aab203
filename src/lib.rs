//! Applies payments to invoices and reports the outcome.
//!
//! ```
//! use invoice_payments::application::invoice_service::InvoiceService;
//! use invoice_payments::domain::invoice::{Invoice, InvoiceType};
//! use invoice_payments::domain::payment::Payment;
//! use invoice_payments::infrastructure::in_memory::InMemoryInvoiceRepository;
//! use rust_decimal_macros::dec;
//!
//! let repository = InMemoryInvoiceRepository::from_invoices([Invoice::new(
//!     "INV-1",
//!     dec!(100),
//!     InvoiceType::Commercial,
//! )]);
//! let mut service = InvoiceService::new(repository);
//!
//! let outcome = service
//!     .process_payment(Some(Payment::new(dec!(40), "INV-1")))
//!     .unwrap();
//! assert_eq!(outcome.to_string(), "Partial payment received, invoice not fully paid");
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
