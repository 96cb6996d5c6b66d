//! # Link Commands
//!
//! Opens external links (store pages, recipes) typed by the user.
//!
//! The link is validated and its target picked by
//! [`shoplist_core::links`]; launching the browser happens here behind the
//! [`Browser`] trait so tests never spawn one.

use shoplist_core::links::{ExternalLink, LinkTarget, Platform};
use tracing::info;

use crate::error::AppError;

/// Something that can show a URL to the user.
pub trait Browser {
    fn open(&self, url: &str) -> std::io::Result<()>;
}

/// The platform's default browser, via the `webbrowser` crate.
///
/// A terminal has no embedded browser, so both [`LinkTarget`]s end up here.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> std::io::Result<()> {
        webbrowser::open(url)
    }
}

/// Validates `raw` and opens it.
pub fn open_link(
    browser: &dyn Browser,
    raw: &str,
    platform: Platform,
) -> Result<ExternalLink, AppError> {
    let link = ExternalLink::resolve(raw, platform)?;

    match link.target {
        LinkTarget::NewTab => info!(url = %link.url, "Opening link in a new tab"),
        LinkTarget::InAppBrowser => {
            info!(url = %link.url, %platform, "Opening link in managed browser")
        }
    }

    browser
        .open(link.url.as_str())
        .map_err(|e| AppError::browser(format!("Could not open {}: {}", link.url, e)))?;

    Ok(link)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::cell::RefCell;

    /// Records opened URLs instead of launching anything.
    #[derive(Default)]
    pub(crate) struct RecordingBrowser {
        pub opened: RefCell<Vec<String>>,
        pub fail: bool,
    }

    impl Browser for RecordingBrowser {
        fn open(&self, url: &str) -> std::io::Result<()> {
            if self.fail {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no browser",
                ));
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_open_valid_link() {
        let browser = RecordingBrowser::default();

        let link = open_link(&browser, " https://example.com/list ", Platform::Ios).unwrap();
        assert_eq!(link.target, LinkTarget::InAppBrowser);
        assert_eq!(
            browser.opened.borrow().as_slice(),
            ["https://example.com/list"]
        );
    }

    #[test]
    fn test_invalid_link_never_reaches_browser() {
        let browser = RecordingBrowser::default();

        let err = open_link(&browser, "javascript:alert(1)", Platform::Web).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(browser.opened.borrow().is_empty());
    }

    #[test]
    fn test_browser_failure() {
        let browser = RecordingBrowser {
            fail: true,
            ..Default::default()
        };

        let err = open_link(&browser, "https://example.com", Platform::Desktop).unwrap_err();
        assert_eq!(err.code, ErrorCode::BrowserError);
    }
}
