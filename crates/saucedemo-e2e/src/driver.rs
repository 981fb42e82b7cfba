//! Abstract storefront automation driver.
//!
//! The suite consumes exactly five primitives from the automation
//! collaborator: navigate, click, fill, visibility query, and text read.
//! Everything above this seam (page objects, the scenario) is written
//! against the trait, so the CDP driver can be swapped for the scripted
//! mock in unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::result::{E2eError, E2eResult};
use crate::selector::Selector;

/// Abstract driver trait over one browser page handle.
///
/// All operations suspend the calling flow until the browser-side operation
/// settles. Errors propagate unmodified; nothing is retried or suppressed.
#[async_trait]
pub trait StoreDriver: Send + Sync {
    /// Navigate the page to an absolute URL
    async fn navigate(&self, url: &str) -> E2eResult<()>;

    /// Dispatch a click on the matched element
    async fn click(&self, selector: &Selector) -> E2eResult<()>;

    /// Set an input's value
    async fn fill(&self, selector: &Selector, value: &str) -> E2eResult<()>;

    /// Check element visibility; `false` means "not currently visible",
    /// not "page load failed"
    async fn is_visible(&self, selector: &Selector) -> E2eResult<bool>;

    /// Read the trimmed visible text of the matched element
    async fn inner_text(&self, selector: &Selector) -> E2eResult<String>;
}

/// One screen of a scripted storefront: the elements currently in the
/// document, keyed by selector, with their visible text.
#[derive(Debug, Clone, Default)]
pub struct MockScreen {
    elements: HashMap<Selector, String>,
}

impl MockScreen {
    /// Create an empty screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element with visible text
    pub fn element(mut self, selector: Selector, text: impl Into<String>) -> Self {
        let _ = self.elements.insert(selector, text.into());
        self
    }

    /// Add an element with no text (buttons, containers)
    pub fn anchor(self, selector: Selector) -> Self {
        self.element(selector, "")
    }
}

#[derive(Debug, Default)]
struct MockState {
    current: Option<String>,
    filled: HashMap<Selector, String>,
    history: Vec<String>,
}

/// Scripted driver simulating the storefront as a screen/transition state
/// machine. Used by unit and integration tests without a browser.
#[derive(Debug, Default)]
pub struct MockDriver {
    screens: HashMap<String, MockScreen>,
    routes: HashMap<String, String>,
    transitions: HashMap<(String, Selector), String>,
    state: Mutex<MockState>,
}

impl MockDriver {
    /// Create an empty scripted driver
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a screen by name
    pub fn screen(mut self, name: impl Into<String>, screen: MockScreen) -> Self {
        let _ = self.screens.insert(name.into(), screen);
        self
    }

    /// Map a URL to the screen navigation lands on
    pub fn route(mut self, url: impl Into<String>, screen: impl Into<String>) -> Self {
        let _ = self.routes.insert(url.into(), screen.into());
        self
    }

    /// Declare that clicking `selector` while on `from` moves to `to`
    pub fn on_click(
        mut self,
        from: impl Into<String>,
        selector: Selector,
        to: impl Into<String>,
    ) -> Self {
        let _ = self.transitions.insert((from.into(), selector), to.into());
        self
    }

    /// Name of the screen the driver is currently on
    pub fn current_screen(&self) -> Option<String> {
        self.state.lock().unwrap().current.clone()
    }

    /// Recorded primitive calls, oldest first
    pub fn history(&self) -> Vec<String> {
        self.state.lock().unwrap().history.clone()
    }

    /// Check whether a primitive was invoked (prefix match on history)
    pub fn was_called(&self, prefix: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .history
            .iter()
            .any(|c| c.starts_with(prefix))
    }

    fn lookup(&self, current: Option<&str>, selector: &Selector) -> Option<String> {
        let screen = self.screens.get(current?)?;
        screen.elements.get(selector).cloned()
    }
}

#[async_trait]
impl StoreDriver for MockDriver {
    async fn navigate(&self, url: &str) -> E2eResult<()> {
        let mut state = self.state.lock().unwrap();
        state.history.push(format!("navigate:{url}"));
        match self.routes.get(url) {
            Some(screen) => {
                state.current = Some(screen.clone());
                Ok(())
            }
            None => Err(E2eError::Navigation {
                url: url.to_string(),
                message: "no route registered".to_string(),
            }),
        }
    }

    async fn click(&self, selector: &Selector) -> E2eResult<()> {
        let mut state = self.state.lock().unwrap();
        state.history.push(format!("click:{selector}"));
        let current = state.current.clone();
        if self.lookup(current.as_deref(), selector).is_none() {
            return Err(E2eError::ElementNotFound {
                selector: selector.to_string(),
            });
        }
        if let Some(current) = current {
            if let Some(next) = self.transitions.get(&(current, selector.clone())) {
                state.current = Some(next.clone());
                state.filled.clear();
            }
        }
        Ok(())
    }

    async fn fill(&self, selector: &Selector, value: &str) -> E2eResult<()> {
        let mut state = self.state.lock().unwrap();
        state.history.push(format!("fill:{selector}={value}"));
        let current = state.current.clone();
        if self.lookup(current.as_deref(), selector).is_none() {
            return Err(E2eError::ElementNotFound {
                selector: selector.to_string(),
            });
        }
        let _ = state.filled.insert(selector.clone(), value.to_string());
        Ok(())
    }

    async fn is_visible(&self, selector: &Selector) -> E2eResult<bool> {
        let mut state = self.state.lock().unwrap();
        state.history.push(format!("is_visible:{selector}"));
        let current = state.current.clone();
        Ok(self.lookup(current.as_deref(), selector).is_some())
    }

    async fn inner_text(&self, selector: &Selector) -> E2eResult<String> {
        let mut state = self.state.lock().unwrap();
        state.history.push(format!("inner_text:{selector}"));
        if let Some(value) = state.filled.get(selector) {
            return Ok(value.clone());
        }
        let current = state.current.clone();
        self.lookup(current.as_deref(), selector)
            .ok_or_else(|| E2eError::ElementNotFound {
                selector: selector.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_screen_driver() -> MockDriver {
        MockDriver::new()
            .route("https://store.test/", "login")
            .screen(
                "login",
                MockScreen::new()
                    .anchor(Selector::css("#user-name"))
                    .anchor(Selector::css("#login-button")),
            )
            .screen(
                "inventory",
                MockScreen::new().element(Selector::css(".title"), "Products"),
            )
            .on_click("login", Selector::css("#login-button"), "inventory")
    }

    #[tokio::test]
    async fn navigate_lands_on_routed_screen() {
        let driver = two_screen_driver();
        driver.navigate("https://store.test/").await.unwrap();
        assert_eq!(driver.current_screen().as_deref(), Some("login"));
        assert!(driver.was_called("navigate:https://store.test/"));
    }

    #[tokio::test]
    async fn navigate_without_route_fails() {
        let driver = two_screen_driver();
        let err = driver.navigate("https://elsewhere.test/").await.unwrap_err();
        assert!(matches!(err, E2eError::Navigation { .. }));
    }

    #[tokio::test]
    async fn click_follows_transition() {
        let driver = two_screen_driver();
        driver.navigate("https://store.test/").await.unwrap();
        driver.click(&Selector::css("#login-button")).await.unwrap();
        assert_eq!(driver.current_screen().as_deref(), Some("inventory"));
    }

    #[tokio::test]
    async fn click_on_absent_element_is_not_found() {
        let driver = two_screen_driver();
        driver.navigate("https://store.test/").await.unwrap();
        let err = driver.click(&Selector::css("#missing")).await.unwrap_err();
        assert!(matches!(err, E2eError::ElementNotFound { .. }));
    }

    #[tokio::test]
    async fn visibility_flips_across_transition() {
        let driver = two_screen_driver();
        driver.navigate("https://store.test/").await.unwrap();
        let title = Selector::css(".title");
        assert!(!driver.is_visible(&title).await.unwrap());
        driver.click(&Selector::css("#login-button")).await.unwrap();
        assert!(driver.is_visible(&title).await.unwrap());
    }

    #[tokio::test]
    async fn inner_text_is_idempotent() {
        let driver = two_screen_driver();
        driver.navigate("https://store.test/").await.unwrap();
        driver.click(&Selector::css("#login-button")).await.unwrap();
        let title = Selector::css(".title");
        let first = driver.inner_text(&title).await.unwrap();
        let second = driver.inner_text(&title).await.unwrap();
        assert_eq!(first, "Products");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn filled_value_reads_back_unchanged() {
        let driver = MockDriver::new()
            .route("https://store.test/", "form")
            .screen("form", MockScreen::new().anchor(Selector::css("#first-name")));
        driver.navigate("https://store.test/").await.unwrap();
        let field = Selector::css("#first-name");
        driver.fill(&field, "Sandis").await.unwrap();
        assert_eq!(driver.inner_text(&field).await.unwrap(), "Sandis");
    }
}
