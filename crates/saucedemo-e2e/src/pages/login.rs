//! Login screen.

use async_trait::async_trait;

use super::Screen;
use crate::driver::StoreDriver;
use crate::result::E2eResult;
use crate::selector::Selector;

const USERNAME: &str = "#user-name";
const PASSWORD: &str = "#password";
const LOGIN_BUTTON: &str = "#login-button";

/// The login screen at the storefront root.
#[derive(Debug)]
pub struct LoginPage<'a, D: StoreDriver> {
    driver: &'a D,
}

impl<'a, D: StoreDriver> LoginPage<'a, D> {
    /// Create a login page over the shared driver
    pub fn new(driver: &'a D) -> Self {
        Self { driver }
    }

    /// Navigate to the storefront root
    pub async fn open(&self, base_url: &str) -> E2eResult<()> {
        self.driver.navigate(base_url).await
    }

    /// Fill credentials and submit
    pub async fn login(&self, username: &str, password: &str) -> E2eResult<()> {
        self.driver
            .fill(&Selector::css(USERNAME), username)
            .await?;
        self.driver
            .fill(&Selector::css(PASSWORD), password)
            .await?;
        self.driver.click(&Selector::css(LOGIN_BUTTON)).await
    }
}

#[async_trait]
impl<D: StoreDriver> Screen for LoginPage<'_, D> {
    fn name(&self) -> &'static str {
        "login"
    }

    fn anchor(&self) -> Selector {
        Selector::css(USERNAME)
    }

    // Both the username field and the login button must be present
    async fn is_displayed(&self) -> E2eResult<bool> {
        let username = self.driver.is_visible(&Selector::css(USERNAME)).await?;
        let button = self.driver.is_visible(&Selector::css(LOGIN_BUTTON)).await?;
        Ok(username && button)
    }
}
