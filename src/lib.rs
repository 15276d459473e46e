#![doc(test(attr(deny(warnings))))]

//! Kakeibo projects a household's cash flow day by day from recurring
//! transactions and hypothetical one-off events.

pub mod errors;
pub mod report;
pub mod scenario;
pub mod system_clock;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("kakeibo tracing initialized");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
