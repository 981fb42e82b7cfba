//! Order summary screen.

use async_trait::async_trait;

use super::Screen;
use crate::check::CheckOutcome;
use crate::driver::StoreDriver;
use crate::result::E2eResult;
use crate::selector::Selector;

const PAGE_TITLE: &str = ".title";
const ITEM_NAME: &str = ".inventory_item_name";
const ITEM_PRICE: &str = ".inventory_item_price";
const TOTAL_LABEL: &str = ".summary_total_label";
const FINISH_BUTTON: &str = "#finish";

/// The checkout overview showing the item and the computed total.
#[derive(Debug)]
pub struct CheckoutSummaryPage<'a, D: StoreDriver> {
    driver: &'a D,
}

impl<'a, D: StoreDriver> CheckoutSummaryPage<'a, D> {
    /// Create a summary page over the shared driver
    pub fn new(driver: &'a D) -> Self {
        Self { driver }
    }

    /// Read the listed item name
    pub async fn item_name(&self) -> E2eResult<String> {
        self.driver.inner_text(&Selector::css(ITEM_NAME)).await
    }

    /// Read the listed item price
    pub async fn item_price(&self) -> E2eResult<String> {
        self.driver.inner_text(&Selector::css(ITEM_PRICE)).await
    }

    /// Read the total label, including the tax computed by the application
    pub async fn total(&self) -> E2eResult<String> {
        self.driver.inner_text(&Selector::css(TOTAL_LABEL)).await
    }

    /// Compare the listed price against the expected value.
    pub async fn check_price(&self, expected_price: &str) -> E2eResult<CheckOutcome> {
        let price = self.item_price().await?;
        Ok(CheckOutcome::new().field("price", expected_price, &price))
    }

    /// Compare name (exact) and total (substring) against expected values.
    /// The total is an opaque literal from the application; the suite never
    /// derives the tax itself.
    pub async fn check_details(
        &self,
        expected_name: &str,
        expected_total: &str,
    ) -> E2eResult<CheckOutcome> {
        let name = self.item_name().await?;
        let total = self.total().await?;
        Ok(CheckOutcome::new()
            .field("name", expected_name, &name)
            .field_contains("total", expected_total, &total))
    }

    /// Click the finish button
    pub async fn finish(&self) -> E2eResult<()> {
        self.driver.click(&Selector::css(FINISH_BUTTON)).await
    }
}

#[async_trait]
impl<D: StoreDriver> Screen for CheckoutSummaryPage<'_, D> {
    fn name(&self) -> &'static str {
        "order summary"
    }

    fn anchor(&self) -> Selector {
        Selector::css(PAGE_TITLE)
    }

    async fn is_displayed(&self) -> E2eResult<bool> {
        self.driver.is_visible(&self.anchor()).await
    }
}
