//! Page objects for the storefront screens.
//!
//! One module per application screen. Each page object borrows the shared
//! driver (injected, never ambient) and exposes intention-revealing
//! operations over that screen's fixed selectors. Page objects are stateless
//! between operations; the scenario, not the pages, is the state machine.

use async_trait::async_trait;

use crate::result::E2eResult;
use crate::selector::Selector;

mod cart;
mod checkout_complete;
mod checkout_info;
mod checkout_summary;
mod inventory;
mod item_detail;
mod login;

pub use cart::{CartPage, LineItem, CART_PATH};
pub use checkout_complete::CheckoutCompletePage;
pub use checkout_info::CheckoutInfoPage;
pub use checkout_summary::CheckoutSummaryPage;
pub use inventory::InventoryPage;
pub use item_detail::ItemDetailPage;
pub use login::LoginPage;

/// Capability contract shared by every screen.
///
/// Visibility of the anchor element is the proxy for "this screen has
/// loaded"; `false` means "not currently visible", not "page load failed".
#[async_trait]
pub trait Screen {
    /// Screen name, used in transition-guard failure messages
    fn name(&self) -> &'static str;

    /// Anchor element for this screen
    fn anchor(&self) -> Selector;

    /// Whether the screen's anchor element(s) are currently visible
    async fn is_displayed(&self) -> E2eResult<bool>;
}
