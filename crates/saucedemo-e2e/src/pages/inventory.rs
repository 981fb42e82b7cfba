//! Products (inventory) screen.

use async_trait::async_trait;

use super::Screen;
use crate::driver::StoreDriver;
use crate::result::E2eResult;
use crate::selector::{inventory_item_named, Selector};

const PRODUCT_LIST: &str = ".inventory_list";
const PAGE_TITLE: &str = ".title";

/// The product listing shown after login.
#[derive(Debug)]
pub struct InventoryPage<'a, D: StoreDriver> {
    driver: &'a D,
}

impl<'a, D: StoreDriver> InventoryPage<'a, D> {
    /// Create an inventory page over the shared driver
    pub fn new(driver: &'a D) -> Self {
        Self { driver }
    }

    /// Read the page title label
    pub async fn title(&self) -> E2eResult<String> {
        self.driver.inner_text(&Selector::css(PAGE_TITLE)).await
    }

    /// Click a product row matched by its visible name. A name not present
    /// on the page propagates a not-found failure.
    pub async fn open_product(&self, name: &str) -> E2eResult<()> {
        self.driver.click(&inventory_item_named(name)).await
    }
}

#[async_trait]
impl<D: StoreDriver> Screen for InventoryPage<'_, D> {
    fn name(&self) -> &'static str {
        "products"
    }

    fn anchor(&self) -> Selector {
        Selector::css(PRODUCT_LIST)
    }

    async fn is_displayed(&self) -> E2eResult<bool> {
        self.driver.is_visible(&self.anchor()).await
    }
}
