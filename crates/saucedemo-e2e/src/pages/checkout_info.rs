//! Checkout information screen.

use async_trait::async_trait;

use super::Screen;
use crate::driver::StoreDriver;
use crate::result::E2eResult;
use crate::selector::Selector;

const INFO_FORM: &str = "#checkout_info_container";
const PAGE_TITLE: &str = ".title";
const FIRST_NAME: &str = "#first-name";
const LAST_NAME: &str = "#last-name";
const POSTAL_CODE: &str = "#postal-code";
const CONTINUE_BUTTON: &str = "#continue";

/// The checkout "Your Information" form.
#[derive(Debug)]
pub struct CheckoutInfoPage<'a, D: StoreDriver> {
    driver: &'a D,
}

impl<'a, D: StoreDriver> CheckoutInfoPage<'a, D> {
    /// Create a checkout information page over the shared driver
    pub fn new(driver: &'a D) -> Self {
        Self { driver }
    }

    /// Read the page title label
    pub async fn title(&self) -> E2eResult<String> {
        self.driver.inner_text(&Selector::css(PAGE_TITLE)).await
    }

    /// Fill the three checkout fields. No local validation of the values.
    pub async fn fill_information(
        &self,
        first_name: &str,
        last_name: &str,
        postal_code: &str,
    ) -> E2eResult<()> {
        self.driver
            .fill(&Selector::css(FIRST_NAME), first_name)
            .await?;
        self.driver
            .fill(&Selector::css(LAST_NAME), last_name)
            .await?;
        self.driver
            .fill(&Selector::css(POSTAL_CODE), postal_code)
            .await
    }

    /// Click the continue button
    pub async fn continue_to_summary(&self) -> E2eResult<()> {
        self.driver.click(&Selector::css(CONTINUE_BUTTON)).await
    }
}

#[async_trait]
impl<D: StoreDriver> Screen for CheckoutInfoPage<'_, D> {
    fn name(&self) -> &'static str {
        "checkout information"
    }

    fn anchor(&self) -> Selector {
        Selector::css(INFO_FORM)
    }

    async fn is_displayed(&self) -> E2eResult<bool> {
        self.driver.is_visible(&self.anchor()).await
    }
}
