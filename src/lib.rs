#![doc(test(attr(deny(warnings))))]

//! Fintrack Core holds the application state of a personal finance tracker:
//! a session store for the current user identity and a finance store for
//! transactions, budgets, goals, assets, and accounts, plus derived
//! dashboard statistics recomputed after every transaction mutation.

pub mod demo;
pub mod domain;
pub mod errors;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Fintrack Core tracing initialized.");
    });
}
