//! Cart screen.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::Screen;
use crate::check::CheckOutcome;
use crate::driver::StoreDriver;
use crate::result::E2eResult;
use crate::selector::Selector;

/// Fixed path of the cart page relative to the storefront root.
pub const CART_PATH: &str = "/cart.html";

const CART_TITLE: &str = ".title";
const ITEM_NAME: &str = ".cart_item .inventory_item_name";
const ITEM_PRICE: &str = ".cart_item .inventory_item_price";
const ITEM_QUANTITY: &str = ".cart_item .cart_quantity";
const CHECKOUT_BUTTON: &str = "#checkout";

/// Expected values for one cart line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name
    pub name: String,
    /// Formatted price, e.g. "$15.99"
    pub price: String,
    /// Quantity label, e.g. "1"
    pub quantity: String,
}

/// The shopping cart screen.
#[derive(Debug)]
pub struct CartPage<'a, D: StoreDriver> {
    driver: &'a D,
}

impl<'a, D: StoreDriver> CartPage<'a, D> {
    /// Create a cart page over the shared driver
    pub fn new(driver: &'a D) -> Self {
        Self { driver }
    }

    /// Navigate directly to the cart page
    pub async fn open(&self, base_url: &str) -> E2eResult<()> {
        let url = format!("{}{CART_PATH}", base_url.trim_end_matches('/'));
        self.driver.navigate(&url).await
    }

    /// Read the line item's product name
    pub async fn item_name(&self) -> E2eResult<String> {
        self.driver.inner_text(&Selector::css(ITEM_NAME)).await
    }

    /// Read the line item's price
    pub async fn item_price(&self) -> E2eResult<String> {
        self.driver.inner_text(&Selector::css(ITEM_PRICE)).await
    }

    /// Read the line item's quantity
    pub async fn item_quantity(&self) -> E2eResult<String> {
        self.driver.inner_text(&Selector::css(ITEM_QUANTITY)).await
    }

    /// Compare the line item against expected values, field by field.
    pub async fn check_line_item(&self, expected: &LineItem) -> E2eResult<CheckOutcome> {
        let name = self.item_name().await?;
        let price = self.item_price().await?;
        let quantity = self.item_quantity().await?;
        Ok(CheckOutcome::new()
            .field("name", &expected.name, &name)
            .field("price", &expected.price, &price)
            .field("quantity", &expected.quantity, &quantity))
    }

    /// Click the checkout button
    pub async fn checkout(&self) -> E2eResult<()> {
        self.driver.click(&Selector::css(CHECKOUT_BUTTON)).await
    }
}

#[async_trait]
impl<D: StoreDriver> Screen for CartPage<'_, D> {
    fn name(&self) -> &'static str {
        "cart"
    }

    fn anchor(&self) -> Selector {
        Selector::css(CART_TITLE)
    }

    async fn is_displayed(&self) -> E2eResult<bool> {
        self.driver.is_visible(&self.anchor()).await
    }
}
