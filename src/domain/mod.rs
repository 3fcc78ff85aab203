//! Domain layer: invoice and payment entities, per-type payment handlers and
//! the storage port the application layer depends on.

pub mod handlers;
pub mod invoice;
pub mod payment;
pub mod ports;
