//! End-to-end purchase test suite for the SauceDemo storefront.
//!
//! Two layers, dependency order leaf-first:
//!
//! - **Page objects** ([`pages`]): one type per application screen, each a
//!   view over the single shared driver handle, exposing
//!   intention-revealing operations backed by CSS selectors.
//! - **Scenario** ([`scenario`]): one ordered sequence of page operations
//!   and assertions encoding the purchase workflow end to end.
//!
//! The driver seam ([`driver::StoreDriver`]) has two implementations: a
//! scripted [`driver::MockDriver`] used by unit and integration tests, and a
//! CDP-backed [`browser::CdpDriver`] (cargo feature `browser`) that drives a
//! real Chromium. Set `E2E_HEADFUL=1` to watch the browser while debugging.

#![warn(missing_docs)]

pub mod browser;
pub mod check;
pub mod driver;
pub mod pages;
pub mod result;
pub mod scenario;
pub mod selector;

pub use check::{CheckOutcome, FieldMismatch};
pub use driver::{MockDriver, MockScreen, StoreDriver};
pub use pages::{
    CartPage, CheckoutCompletePage, CheckoutInfoPage, CheckoutSummaryPage, InventoryPage,
    ItemDetailPage, LineItem, LoginPage, Screen,
};
pub use result::{E2eError, E2eResult};
pub use scenario::{run_purchase, PurchaseSpec};
pub use selector::Selector;

use std::sync::Once;

static INIT_LOGGING: Once = Once::new();

/// Initialize tracing output for test runs. Safe to call from every test;
/// only the first call installs the subscriber. Filtering follows
/// `RUST_LOG` (default `info`).
pub fn init_logging() {
    INIT_LOGGING.call_once(|| {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}
