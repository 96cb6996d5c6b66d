//! # Icon Symbols
//!
//! Maps the app's icon names to what each platform can draw.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  IconSymbol (SF Symbol name)          Platform                          │
//! │  ───────────────────────────          ────────                          │
//! │                                                                         │
//! │  "house.fill" ──┬──► iOS      ─────► "house.fill"   (native symbol)     │
//! │                 │                                                       │
//! │                 └──► Android  ─┐                                        │
//! │                      Web      ─┼───► "home"         (Material icon)     │
//! │                      Desktop  ─┘                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! | SF Symbol                                 | Material        |
//! |-------------------------------------------|-----------------|
//! | `house.fill`                              | `home`          |
//! | `paperplane.fill`                         | `send`          |
//! | `list.bullet`                             | `list`          |
//! | `chevron.left.forwardslash.chevron.right` | `code`          |
//! | `chevron.right`                           | `chevron-right` |

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::links::Platform;

/// An icon the front end can ask for, named after its SF Symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum IconSymbol {
    #[serde(rename = "house.fill")]
    HouseFill,

    #[serde(rename = "paperplane.fill")]
    PaperplaneFill,

    #[serde(rename = "list.bullet")]
    ListBullet,

    #[serde(rename = "chevron.left.forwardslash.chevron.right")]
    Code,

    #[serde(rename = "chevron.right")]
    ChevronRight,
}

impl IconSymbol {
    /// Every known symbol.
    pub const ALL: [IconSymbol; 5] = [
        IconSymbol::HouseFill,
        IconSymbol::PaperplaneFill,
        IconSymbol::ListBullet,
        IconSymbol::Code,
        IconSymbol::ChevronRight,
    ];

    /// Native SF Symbol name.
    pub fn sf_symbol(self) -> &'static str {
        match self {
            IconSymbol::HouseFill => "house.fill",
            IconSymbol::PaperplaneFill => "paperplane.fill",
            IconSymbol::ListBullet => "list.bullet",
            IconSymbol::Code => "chevron.left.forwardslash.chevron.right",
            IconSymbol::ChevronRight => "chevron.right",
        }
    }

    /// Material icon used where SF Symbols are unavailable.
    pub fn material_icon(self) -> &'static str {
        match self {
            IconSymbol::HouseFill => "home",
            IconSymbol::PaperplaneFill => "send",
            IconSymbol::ListBullet => "list",
            IconSymbol::Code => "code",
            IconSymbol::ChevronRight => "chevron-right",
        }
    }
}

/// Name of the icon to draw for `symbol` on `platform`.
///
/// ```rust
/// use shoplist_core::icons::{icon_name, IconSymbol};
/// use shoplist_core::links::Platform;
///
/// assert_eq!(icon_name(IconSymbol::HouseFill, Platform::Ios), "house.fill");
/// assert_eq!(icon_name(IconSymbol::HouseFill, Platform::Android), "home");
/// ```
pub fn icon_name(symbol: IconSymbol, platform: Platform) -> &'static str {
    match platform {
        Platform::Ios => symbol.sf_symbol(),
        Platform::Android | Platform::Web | Platform::Desktop => symbol.material_icon(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ios_uses_native_symbols() {
        for symbol in IconSymbol::ALL {
            assert_eq!(icon_name(symbol, Platform::Ios), symbol.sf_symbol());
        }
        assert_eq!(
            icon_name(IconSymbol::Code, Platform::Ios),
            "chevron.left.forwardslash.chevron.right"
        );
    }

    #[test]
    fn test_other_platforms_use_material_icons() {
        let expected = [
            (IconSymbol::HouseFill, "home"),
            (IconSymbol::PaperplaneFill, "send"),
            (IconSymbol::ListBullet, "list"),
            (IconSymbol::Code, "code"),
            (IconSymbol::ChevronRight, "chevron-right"),
        ];

        for platform in [Platform::Android, Platform::Web, Platform::Desktop] {
            for (symbol, material) in expected {
                assert_eq!(icon_name(symbol, platform), material, "{platform}");
            }
        }
    }

    #[test]
    fn test_serializes_as_sf_symbol_name() {
        for symbol in IconSymbol::ALL {
            let json = serde_json::to_value(symbol).unwrap();
            assert_eq!(json, symbol.sf_symbol());
        }

        let parsed: IconSymbol = serde_json::from_str("\"paperplane.fill\"").unwrap();
        assert_eq!(parsed, IconSymbol::PaperplaneFill);
    }
}
