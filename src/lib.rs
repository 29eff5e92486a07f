#![doc(test(attr(deny(warnings))))]

//! Fintrack Core offers the domain model, remote collection store, session
//! handling, and reporting primitives that power personal finance tracker
//! frontends.

pub mod config;
pub mod context;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod session;
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
