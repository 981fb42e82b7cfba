//! Browser launch and the CDP-backed driver.
//!
//! With the `browser` feature enabled this module drives a real Chromium via
//! the Chrome DevTools Protocol (chromiumoxide). Without it only the
//! configuration type is available and tests run against the scripted
//! [`MockDriver`](crate::driver::MockDriver).

/// Environment variable that switches the browser to headful mode for
/// debugging (`E2E_HEADFUL=1`).
pub const HEADFUL_ENV: &str = "E2E_HEADFUL";

/// Environment variable overriding the chromium executable path.
pub const CHROMIUM_PATH_ENV: &str = "CHROMIUM_PATH";

/// Browser configuration
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run in headless mode
    pub headless: bool,
    /// Path to chromium binary (None = auto-detect)
    pub chromium_path: Option<String>,
    /// Sandbox mode (disable for containers)
    pub sandbox: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            chromium_path: None,
            sandbox: true,
        }
    }
}

impl BrowserConfig {
    /// Build a config from the environment: `E2E_HEADFUL=1` launches a
    /// visible browser for debugging, `CHROMIUM_PATH` overrides the binary.
    pub fn from_env() -> Self {
        let headful = std::env::var(HEADFUL_ENV).is_ok_and(|v| v == "1");
        Self {
            headless: !headful,
            chromium_path: std::env::var(CHROMIUM_PATH_ENV).ok(),
            sandbox: true,
        }
    }

    /// Set headless mode
    pub const fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set chromium path
    pub fn with_chromium_path(mut self, path: impl Into<String>) -> Self {
        self.chromium_path = Some(path.into());
        self
    }

    /// Disable sandbox (for containers/CI)
    pub const fn with_no_sandbox(mut self) -> Self {
        self.sandbox = false;
        self
    }
}

#[cfg(feature = "browser")]
mod cdp {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chromiumoxide::browser::{Browser as CdpBrowser, BrowserConfig as CdpConfig};
    use chromiumoxide::page::Page as CdpPage;
    use futures::StreamExt;
    use tokio::sync::Mutex;

    use super::BrowserConfig;
    use crate::driver::StoreDriver;
    use crate::result::{E2eError, E2eResult};
    use crate::selector::Selector;

    /// Browser instance owning the CDP connection. Torn down at test end
    /// regardless of outcome (drop closes the websocket).
    #[derive(Debug)]
    pub struct Browser {
        inner: Arc<Mutex<CdpBrowser>>,
        #[allow(dead_code)]
        handle: tokio::task::JoinHandle<()>,
    }

    impl Browser {
        /// Launch a browser with the given configuration.
        pub async fn launch(config: BrowserConfig) -> E2eResult<Self> {
            let mut builder = CdpConfig::builder();

            if !config.headless {
                builder = builder.with_head();
            }
            if !config.sandbox {
                builder = builder.no_sandbox();
            }
            if let Some(ref path) = config.chromium_path {
                builder = builder.chrome_executable(path);
            }

            let cdp_config = builder.build().map_err(|e| E2eError::BrowserLaunch {
                message: e.to_string(),
            })?;

            let (browser, mut handler) =
                CdpBrowser::launch(cdp_config)
                    .await
                    .map_err(|e| E2eError::BrowserLaunch {
                        message: e.to_string(),
                    })?;

            // Drive CDP events until the connection closes
            let handle = tokio::spawn(async move {
                while let Some(h) = handler.next().await {
                    if h.is_err() {
                        break;
                    }
                }
            });

            Ok(Self {
                inner: Arc::new(Mutex::new(browser)),
                handle,
            })
        }

        /// Open a fresh page. Exactly one page handle exists per test; all
        /// page objects share it by reference.
        pub async fn page(&self) -> E2eResult<CdpDriver> {
            let browser = self.inner.lock().await;
            let page = browser
                .new_page("about:blank")
                .await
                .map_err(|e| E2eError::Page {
                    message: e.to_string(),
                })?;
            Ok(CdpDriver {
                page: Arc::new(page),
            })
        }

        /// Close the browser
        pub async fn close(self) -> E2eResult<()> {
            let mut browser = self.inner.lock().await;
            browser.close().await.map_err(|e| E2eError::BrowserLaunch {
                message: e.to_string(),
            })?;
            Ok(())
        }
    }

    /// One browser tab driven over CDP.
    #[derive(Debug, Clone)]
    pub struct CdpDriver {
        page: Arc<CdpPage>,
    }

    impl CdpDriver {
        async fn eval<T: serde::de::DeserializeOwned>(&self, expr: String) -> E2eResult<T> {
            let result = self
                .page
                .evaluate(expr)
                .await
                .map_err(|e| E2eError::Evaluation {
                    message: e.to_string(),
                })?;
            result.into_value().map_err(|e| E2eError::Evaluation {
                message: e.to_string(),
            })
        }
    }

    #[async_trait]
    impl StoreDriver for CdpDriver {
        async fn navigate(&self, url: &str) -> E2eResult<()> {
            self.page
                .goto(url)
                .await
                .map_err(|e| E2eError::Navigation {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;
            Ok(())
        }

        async fn click(&self, selector: &Selector) -> E2eResult<()> {
            let expr = format!(
                "(() => {{ const el = {}; if (!el) return false; el.click(); return true; }})()",
                selector.to_lookup()
            );
            let clicked: bool = self.eval(expr).await?;
            if clicked {
                Ok(())
            } else {
                Err(E2eError::ElementNotFound {
                    selector: selector.to_string(),
                })
            }
        }

        async fn fill(&self, selector: &Selector, value: &str) -> E2eResult<()> {
            let expr = format!(
                "(() => {{ const el = {}; if (!el) return false; \
                 el.value = {value:?}; \
                 el.dispatchEvent(new Event('input', {{ bubbles: true }})); \
                 el.dispatchEvent(new Event('change', {{ bubbles: true }})); \
                 return true; }})()",
                selector.to_lookup()
            );
            let filled: bool = self.eval(expr).await?;
            if filled {
                Ok(())
            } else {
                Err(E2eError::ElementNotFound {
                    selector: selector.to_string(),
                })
            }
        }

        async fn is_visible(&self, selector: &Selector) -> E2eResult<bool> {
            self.eval(selector.to_visibility_probe()).await
        }

        async fn inner_text(&self, selector: &Selector) -> E2eResult<String> {
            let text: Option<String> = self.eval(selector.to_text_read()).await?;
            text.ok_or_else(|| E2eError::ElementNotFound {
                selector: selector.to_string(),
            })
        }
    }
}

#[cfg(feature = "browser")]
pub use cdp::{Browser, CdpDriver};
