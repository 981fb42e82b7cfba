//! Order confirmation screen.

use async_trait::async_trait;

use super::Screen;
use crate::driver::StoreDriver;
use crate::result::E2eResult;
use crate::selector::Selector;

const CONFIRMATION_MESSAGE: &str = ".complete-header";
const MENU_BUTTON: &str = "#react-burger-menu-btn";
const LOGOUT_LINK: &str = "#logout_sidebar_link";

/// The confirmation screen shown after a finished purchase. Also hosts the
/// hamburger menu used to log out at the end of the flow.
#[derive(Debug)]
pub struct CheckoutCompletePage<'a, D: StoreDriver> {
    driver: &'a D,
}

impl<'a, D: StoreDriver> CheckoutCompletePage<'a, D> {
    /// Create a confirmation page over the shared driver
    pub fn new(driver: &'a D) -> Self {
        Self { driver }
    }

    /// Read the confirmation header text
    pub async fn confirmation_message(&self) -> E2eResult<String> {
        self.driver
            .inner_text(&Selector::css(CONFIRMATION_MESSAGE))
            .await
    }

    /// Open the hamburger menu
    pub async fn open_menu(&self) -> E2eResult<()> {
        self.driver.click(&Selector::css(MENU_BUTTON)).await
    }

    /// Click the logout link in the opened menu
    pub async fn logout(&self) -> E2eResult<()> {
        self.driver.click(&Selector::css(LOGOUT_LINK)).await
    }
}

#[async_trait]
impl<D: StoreDriver> Screen for CheckoutCompletePage<'_, D> {
    fn name(&self) -> &'static str {
        "order confirmation"
    }

    fn anchor(&self) -> Selector {
        Selector::css(CONFIRMATION_MESSAGE)
    }

    async fn is_displayed(&self) -> E2eResult<bool> {
        self.driver.is_visible(&self.anchor()).await
    }
}
