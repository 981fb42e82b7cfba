//! The purchase workflow, end to end.
//!
//! The scripted storefront below mirrors the screens and transitions of the
//! live application so the scenario logic runs without a browser. The live
//! run against saucedemo.com sits behind the `browser` feature and is
//! `#[ignore]`d; it needs chromium and network access.

use saucedemo_e2e::selector::{add_to_cart_named, inventory_item_named};
use saucedemo_e2e::{
    init_logging, run_purchase, E2eError, MockDriver, MockScreen, PurchaseSpec, Selector,
};

const BASE: &str = "https://www.saucedemo.com/";
const PRODUCT: &str = "Sauce Labs Bolt T-Shirt";

/// Scripted replica of the storefront purchase flow.
fn swag_store() -> MockDriver {
    let product_row = inventory_item_named(PRODUCT);
    let add_to_cart = add_to_cart_named(PRODUCT);

    let detail = MockScreen::new()
        .element(Selector::css(".inventory_details_name"), PRODUCT)
        .anchor(add_to_cart.clone());
    let detail_added = detail
        .clone()
        .element(Selector::css(".shopping_cart_badge"), "1");

    MockDriver::new()
        .route(BASE, "login")
        .route("https://www.saucedemo.com/cart.html", "cart")
        .screen(
            "login",
            MockScreen::new()
                .anchor(Selector::css("#user-name"))
                .anchor(Selector::css("#password"))
                .anchor(Selector::css("#login-button")),
        )
        .on_click("login", Selector::css("#login-button"), "inventory")
        .screen(
            "inventory",
            MockScreen::new()
                .anchor(Selector::css(".inventory_list"))
                .element(Selector::css(".title"), "Products")
                .element(product_row.clone(), PRODUCT),
        )
        .on_click("inventory", product_row, "detail")
        .screen("detail", detail)
        .on_click("detail", add_to_cart, "detail_added")
        .screen("detail_added", detail_added)
        .screen(
            "cart",
            MockScreen::new()
                .element(Selector::css(".title"), "Your Cart")
                .element(Selector::css(".cart_item .inventory_item_name"), PRODUCT)
                .element(Selector::css(".cart_item .inventory_item_price"), "$15.99")
                .element(Selector::css(".cart_item .cart_quantity"), "1")
                .anchor(Selector::css("#checkout")),
        )
        .on_click("cart", Selector::css("#checkout"), "checkout_info")
        .screen(
            "checkout_info",
            MockScreen::new()
                .anchor(Selector::css("#checkout_info_container"))
                .element(Selector::css(".title"), "Checkout: Your Information")
                .anchor(Selector::css("#first-name"))
                .anchor(Selector::css("#last-name"))
                .anchor(Selector::css("#postal-code"))
                .anchor(Selector::css("#continue")),
        )
        .on_click("checkout_info", Selector::css("#continue"), "summary")
        .screen(
            "summary",
            MockScreen::new()
                .element(Selector::css(".title"), "Checkout: Overview")
                .element(Selector::css(".inventory_item_name"), PRODUCT)
                .element(Selector::css(".inventory_item_price"), "$15.99")
                .element(
                    Selector::css(".summary_total_label"),
                    "Total: $17.27",
                )
                .anchor(Selector::css("#finish")),
        )
        .on_click("summary", Selector::css("#finish"), "complete")
        .screen(
            "complete",
            MockScreen::new()
                .element(
                    Selector::css(".complete-header"),
                    "Thank you for your order!",
                )
                .anchor(Selector::css("#react-burger-menu-btn")),
        )
        .on_click(
            "complete",
            Selector::css("#react-burger-menu-btn"),
            "complete_menu",
        )
        .screen(
            "complete_menu",
            MockScreen::new()
                .element(
                    Selector::css(".complete-header"),
                    "Thank you for your order!",
                )
                .anchor(Selector::css("#react-burger-menu-btn"))
                .anchor(Selector::css("#logout_sidebar_link")),
        )
        .on_click(
            "complete_menu",
            Selector::css("#logout_sidebar_link"),
            "login",
        )
}

#[tokio::test]
async fn buy_t_shirt() {
    init_logging();
    let driver = swag_store();
    run_purchase(&driver, &PurchaseSpec::default()).await.unwrap();

    // Ends back on the login screen after logout
    assert_eq!(driver.current_screen().as_deref(), Some("login"));
    assert!(driver.was_called("click:#finish"));
    assert!(driver.was_called("fill:#postal-code=LV3001"));
}

#[tokio::test]
async fn wrong_expected_total_fails_at_summary_step() {
    init_logging();
    let driver = swag_store();
    let spec = PurchaseSpec {
        expected_total: "$18.00".to_string(),
        ..PurchaseSpec::default()
    };

    let err = run_purchase(&driver, &spec).await.unwrap_err();
    let message = err.to_string();
    assert!(message.contains("The order summary details are incorrect."));
    assert!(message.contains("total: expected \"$18.00\""));

    // Failed at the summary step, not downstream
    assert_eq!(driver.current_screen().as_deref(), Some("summary"));
    assert!(!driver.was_called("click:#finish"));
}

#[tokio::test]
async fn wrong_expected_price_fails_before_details_check() {
    init_logging();
    let driver = swag_store();
    let spec = PurchaseSpec {
        expected_price: "$14.99".to_string(),
        ..PurchaseSpec::default()
    };

    let err = run_purchase(&driver, &spec).await.unwrap_err();
    let message = err.to_string();
    // Cart line-item check is the first to compare the price
    assert!(message.contains("The T-shirt details in the cart do not match"));
    assert!(!driver.was_called("click:#checkout"));
}

#[tokio::test]
async fn unknown_product_propagates_not_found() {
    init_logging();
    let driver = swag_store();
    let spec = PurchaseSpec {
        product_name: "Sauce Labs Fleece Jacket".to_string(),
        ..PurchaseSpec::default()
    };

    let err = run_purchase(&driver, &spec).await.unwrap_err();
    assert!(matches!(err, E2eError::ElementNotFound { .. }));
}

#[tokio::test]
async fn checkout_fields_round_trip() {
    init_logging();
    let driver = swag_store();
    let spec = PurchaseSpec::default();
    run_purchase(&driver, &spec).await.unwrap();

    let history = driver.history();
    let fills: Vec<&String> = history.iter().filter(|h| h.starts_with("fill:#")).collect();
    assert!(fills.contains(&&"fill:#first-name=Sandis".to_string()));
    assert!(fills.contains(&&"fill:#last-name=Abele".to_string()));
}

#[cfg(feature = "browser")]
mod live {
    use super::*;
    use saucedemo_e2e::browser::{Browser, BrowserConfig};

    // E2E_HEADFUL=1 launches a visible browser for debugging.
    #[tokio::test(flavor = "multi_thread")]
    #[ignore = "requires chromium and network access to saucedemo.com"]
    async fn buy_t_shirt_live() {
        init_logging();
        let browser = Browser::launch(BrowserConfig::from_env())
            .await
            .expect("browser launch");
        let driver = browser.page().await.expect("new page");

        let result = run_purchase(&driver, &PurchaseSpec::from_env()).await;
        browser.close().await.expect("browser close");
        result.expect("purchase scenario");
    }
}
