//! Application layer containing the payment processing orchestration.
//!
//! This module defines the `InvoiceService` which validates incoming payments,
//! dispatches them to the handler registered for the invoice type and saves the
//! result back to the invoice repository.

pub mod invoice_service;
