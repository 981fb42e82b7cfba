//! Product detail screen.

use async_trait::async_trait;

use super::Screen;
use crate::driver::StoreDriver;
use crate::result::E2eResult;
use crate::selector::{add_to_cart_named, Selector};

const PRODUCT_TITLE: &str = ".inventory_details_name";
const CART_BADGE: &str = ".shopping_cart_badge";

/// The detail view for one product. The add-to-cart control id is derived
/// from the product name, so the page is parameterized by it.
#[derive(Debug)]
pub struct ItemDetailPage<'a, D: StoreDriver> {
    driver: &'a D,
    add_to_cart: Selector,
}

impl<'a, D: StoreDriver> ItemDetailPage<'a, D> {
    /// Create a detail page for the named product
    pub fn new(driver: &'a D, product_name: &str) -> Self {
        Self {
            driver,
            add_to_cart: add_to_cart_named(product_name),
        }
    }

    /// Read the product title label
    pub async fn title(&self) -> E2eResult<String> {
        self.driver.inner_text(&Selector::css(PRODUCT_TITLE)).await
    }

    /// Click the add-to-cart control
    pub async fn add_to_cart(&self) -> E2eResult<()> {
        self.driver.click(&self.add_to_cart).await
    }

    /// Read the cart badge count
    pub async fn cart_badge(&self) -> E2eResult<String> {
        self.driver.inner_text(&Selector::css(CART_BADGE)).await
    }
}

#[async_trait]
impl<D: StoreDriver> Screen for ItemDetailPage<'_, D> {
    fn name(&self) -> &'static str {
        "product detail"
    }

    fn anchor(&self) -> Selector {
        self.add_to_cart.clone()
    }

    async fn is_displayed(&self) -> E2eResult<bool> {
        self.driver.is_visible(&self.add_to_cart).await
    }
}
