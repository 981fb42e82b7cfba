//! The end-to-end purchase scenario.
//!
//! Screens are visited in a strict fixed order with no branching:
//! login -> products -> product detail -> cart -> checkout info ->
//! order summary -> order confirmation -> logout -> login. Every transition
//! is guarded by an anchor-visibility check on the next screen before any
//! further operation on it. The first failed guard or value assertion
//! terminates the run; there is no retry and no partial success.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::check::CheckOutcome;
use crate::driver::StoreDriver;
use crate::pages::{
    CartPage, CheckoutCompletePage, CheckoutInfoPage, CheckoutSummaryPage, InventoryPage,
    ItemDetailPage, LineItem, LoginPage, Screen,
};
use crate::result::{E2eError, E2eResult};

/// Title shown on the products page.
pub const PRODUCTS_TITLE: &str = "Products";

/// Title shown on the checkout information page.
pub const CHECKOUT_INFO_TITLE: &str = "Checkout: Your Information";

/// Substring expected in the confirmation header.
pub const CONFIRMATION_TEXT: &str = "Thank you for your order!";

/// Inputs and expected values for one purchase run.
///
/// The expected total is an opaque literal produced by the application's own
/// tax computation; the suite never derives it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseSpec {
    /// Storefront root URL
    pub base_url: String,
    /// Login username
    pub username: String,
    /// Login password
    pub password: String,
    /// Product to purchase, matched by visible name
    pub product_name: String,
    /// Expected formatted item price
    pub expected_price: String,
    /// Expected line-item quantity
    pub expected_quantity: String,
    /// Expected total, matched as a substring of the total label
    pub expected_total: String,
    /// Checkout first name
    pub first_name: String,
    /// Checkout last name
    pub last_name: String,
    /// Checkout postal code
    pub postal_code: String,
}

impl Default for PurchaseSpec {
    fn default() -> Self {
        Self {
            base_url: "https://www.saucedemo.com/".to_string(),
            username: "standard_user".to_string(),
            password: "secret_sauce".to_string(),
            product_name: "Sauce Labs Bolt T-Shirt".to_string(),
            expected_price: "$15.99".to_string(),
            expected_quantity: "1".to_string(),
            expected_total: "$17.27".to_string(),
            first_name: "Sandis".to_string(),
            last_name: "Abele".to_string(),
            postal_code: "LV3001".to_string(),
        }
    }
}

/// Environment variable overriding the storefront root URL.
pub const BASE_URL_ENV: &str = "SAUCEDEMO_URL";

impl PurchaseSpec {
    /// Default spec, with the storefront root taken from `SAUCEDEMO_URL`
    /// when set (useful against a local replica of the application).
    pub fn from_env() -> Self {
        let mut spec = Self::default();
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            spec.base_url = url;
        }
        spec
    }

    /// The expected cart line item for this purchase
    pub fn line_item(&self) -> LineItem {
        LineItem {
            name: self.product_name.clone(),
            price: self.expected_price.clone(),
            quantity: self.expected_quantity.clone(),
        }
    }
}

/// Guard: the next screen's anchor must be visible before operating on it.
async fn expect_displayed<S: Screen + Sync>(screen: &S, message: &str) -> E2eResult<()> {
    if screen.is_displayed().await? {
        info!(screen = screen.name(), "screen displayed");
        Ok(())
    } else {
        Err(E2eError::assertion(message))
    }
}

fn expect_eq(expected: &str, actual: &str, message: &str) -> E2eResult<()> {
    CheckOutcome::new().field("value", expected, actual).require(message)
}

fn expect_contains(expected: &str, actual: &str, message: &str) -> E2eResult<()> {
    CheckOutcome::new()
        .field_contains("value", expected, actual)
        .require(message)
}

/// Run the full purchase workflow against the given driver.
///
/// All page objects share the one driver handle; operations are inherently
/// sequential over the single document context.
pub async fn run_purchase<D: StoreDriver>(driver: &D, spec: &PurchaseSpec) -> E2eResult<()> {
    // Login with valid credentials
    let login = LoginPage::new(driver);
    info!(url = %spec.base_url, "opening storefront");
    login.open(&spec.base_url).await?;
    login.login(&spec.username, &spec.password).await?;

    // Products page is displayed after login
    let inventory = InventoryPage::new(driver);
    expect_displayed(
        &inventory,
        "The products page was not displayed after login.",
    )
    .await?;
    expect_eq(
        PRODUCTS_TITLE,
        &inventory.title().await?,
        "The page title is not as expected.",
    )?;

    // Select the product and verify its detail page
    info!(product = %spec.product_name, "selecting product");
    inventory.open_product(&spec.product_name).await?;
    let detail = ItemDetailPage::new(driver, &spec.product_name);
    expect_displayed(
        &detail,
        "The 'Add to Cart' button was not displayed on the product details page.",
    )
    .await?;
    expect_eq(
        &spec.product_name,
        &detail.title().await?,
        "The product title is not as expected.",
    )?;

    // Add to cart; the badge reflects the added item
    detail.add_to_cart().await?;
    expect_eq(
        &spec.expected_quantity,
        &detail.cart_badge().await?,
        "The cart does not indicate that the item has been added.",
    )?;

    // Review the cart line item
    let cart = CartPage::new(driver);
    cart.open(&spec.base_url).await?;
    expect_displayed(&cart, "The cart page was not displayed.").await?;
    cart.check_line_item(&spec.line_item())
        .await?
        .require("The T-shirt details in the cart do not match the expected values.")?;

    // Checkout information
    cart.checkout().await?;
    let info_page = CheckoutInfoPage::new(driver);
    expect_displayed(&info_page, "The checkout information page was not displayed.").await?;
    expect_eq(
        CHECKOUT_INFO_TITLE,
        &info_page.title().await?,
        "The page title is not as expected.",
    )?;
    info_page
        .fill_information(&spec.first_name, &spec.last_name, &spec.postal_code)
        .await?;
    info_page.continue_to_summary().await?;

    // Order summary: exact price, total by substring
    let summary = CheckoutSummaryPage::new(driver);
    expect_displayed(&summary, "The order summary page was not displayed.").await?;
    summary
        .check_price(&spec.expected_price)
        .await?
        .require("The T-shirt price on the order summary page is not as expected.")?;
    summary
        .check_details(&spec.product_name, &spec.expected_total)
        .await?
        .require("The order summary details are incorrect.")?;

    // Finish and confirm
    summary.finish().await?;
    let complete = CheckoutCompletePage::new(driver);
    expect_displayed(&complete, "The order confirmation page was not displayed.").await?;
    expect_contains(
        CONFIRMATION_TEXT,
        &complete.confirmation_message().await?,
        "The confirmation message is not as expected.",
    )?;

    // Logout via the hamburger menu, back to the login screen
    complete.open_menu().await?;
    complete.logout().await?;
    expect_displayed(
        &login,
        "The user was not successfully logged out and redirected to the login page.",
    )
    .await?;

    info!("purchase scenario completed");
    Ok(())
}
