//! # External Links
//!
//! Decides how an external link is opened on each platform.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Platform          Link tap                                             │
//! │  ────────          ────────                                             │
//! │  Web        ─────► default navigation (new tab)                         │
//! │  iOS        ─┐                                                          │
//! │  Android    ─┼───► default navigation suppressed,                       │
//! │  Desktop    ─┘     link opened in an in-app / managed browser           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Actually launching a browser is I/O and lives in the presentation layer.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::CoreResult;
use crate::validation::validate_link;

/// Platform the presentation layer runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Ios,
    Android,
    Web,
    Desktop,
}

impl Platform {
    /// Platform of the current compile target.
    pub fn current() -> Self {
        if cfg!(target_os = "ios") {
            Platform::Ios
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else if cfg!(target_arch = "wasm32") {
            Platform::Web
        } else {
            Platform::Desktop
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Web => "web",
            Platform::Desktop => "desktop",
        };
        f.write_str(name)
    }
}

/// Where a link ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkTarget {
    /// Let the platform navigate as usual (browser tab).
    NewTab,
    /// Suppress the default and open inside the app's own browser session.
    InAppBrowser,
}

impl LinkTarget {
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Web => LinkTarget::NewTab,
            Platform::Ios | Platform::Android | Platform::Desktop => LinkTarget::InAppBrowser,
        }
    }
}

/// A validated link plus the way it should be opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink {
    pub url: Url,
    pub target: LinkTarget,
}

impl ExternalLink {
    /// Validates `raw` and picks the target for `platform`.
    ///
    /// ## Example
    /// ```rust
    /// use shoplist_core::links::{ExternalLink, LinkTarget, Platform};
    ///
    /// let link = ExternalLink::resolve("https://example.com", Platform::Web).unwrap();
    /// assert_eq!(link.target, LinkTarget::NewTab);
    ///
    /// assert!(ExternalLink::resolve("mailto:me@example.com", Platform::Ios).is_err());
    /// ```
    pub fn resolve(raw: &str, platform: Platform) -> CoreResult<Self> {
        let url = validate_link(raw)?;
        Ok(ExternalLink {
            url,
            target: LinkTarget::for_platform(platform),
        })
    }
}
