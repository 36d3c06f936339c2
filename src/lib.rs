#![doc(test(attr(deny(warnings))))]

//! Bank Core models a small in-memory banking ledger: customers own accounts,
//! accounts keep a balance and an append-only transaction log, and a
//! [`core::services::BankingService`] mediates every lookup and mutation. The
//! [`cli`] module drives it from a numbered console menu.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod utils;

pub use crate::core::services::BankingService;
pub use errors::{BankError, CliError};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Bank Core tracing initialized.");
    });
}
