//! Selector abstraction for element lookup.
//!
//! Selectors are the wire contract with the storefront's markup: a fixed set
//! of id/class based CSS strings plus one dynamic pattern (product row
//! matched by visible name). Dynamic locators are built by pure functions so
//! they stay unit-testable without a browser.

use std::fmt;

/// A selector identifying one DOM element for the driver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// CSS selector (e.g., "#login-button")
    Css(String),
    /// CSS selector narrowed to the first match containing the given text
    CssWithText {
        /// Base CSS selector
        css: String,
        /// Text content to match
        text: String,
    },
}

impl Selector {
    /// Create a CSS selector
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Narrow a CSS selector by visible text content.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        match self {
            Self::Css(css) | Self::CssWithText { css, .. } => Self::CssWithText {
                css,
                text: text.into(),
            },
        }
    }

    /// JavaScript expression that resolves to the matched element or `null`.
    pub fn to_lookup(&self) -> String {
        match self {
            Self::Css(s) => format!("document.querySelector({s:?})"),
            Self::CssWithText { css, text } => format!(
                "Array.from(document.querySelectorAll({css:?})).find(el => el.textContent.includes({text:?})) ?? null"
            ),
        }
    }

    /// JavaScript expression that resolves to `true` when the element exists
    /// and occupies layout space. Absence yields `false`, never an error.
    pub fn to_visibility_probe(&self) -> String {
        format!(
            "(() => {{ const el = {}; if (!el) return false; const r = el.getBoundingClientRect(); return r.width > 0 && r.height > 0; }})()",
            self.to_lookup()
        )
    }

    /// JavaScript expression that resolves to the element's trimmed visible
    /// text, or `null` when the element is absent.
    pub fn to_text_read(&self) -> String {
        format!(
            "(() => {{ const el = {}; return el ? el.innerText.trim() : null; }})()",
            self.to_lookup()
        )
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Css(s) => write!(f, "{s}"),
            Self::CssWithText { css, text } => write!(f, "{css}:has-text({text:?})"),
        }
    }
}

/// Locator for a product row on the inventory page, matched by visible name.
///
/// Pure function so the dynamic-selector pattern is testable independent of
/// the browser. A name not present on the page produces a not-found failure
/// at click time, not a false visibility result.
pub fn inventory_item_named(name: &str) -> Selector {
    Selector::css(".inventory_item_name").with_text(name)
}

/// Locator for the add-to-cart control on a product detail page.
///
/// The storefront derives the button id from the product name by lowercasing
/// and hyphenating, e.g. "Sauce Labs Bolt T-Shirt" becomes
/// `#add-to-cart-sauce-labs-bolt-t-shirt`.
pub fn add_to_cart_named(name: &str) -> Selector {
    let slug = name.to_lowercase().replace(' ', "-");
    Selector::css(format!("#add-to-cart-{slug}"))
}
