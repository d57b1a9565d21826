//! Chinese script variants

use crate::{Result, TextError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chinese script a document is rendered in
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// Simplified characters (mainland)
    #[default]
    Simplified,
    /// Traditional characters (Hong Kong / Taiwan)
    Traditional,
}

impl Script {
    /// Every supported script, in display order
    pub const ALL: [Script; 2] = [Script::Simplified, Script::Traditional];

    /// BCP 47 language tag for the `lang` attribute
    pub fn language_tag(self) -> &'static str {
        match self {
            Script::Simplified => "zh-Hans",
            Script::Traditional => "zh-Hant",
        }
    }

    /// Unit appended to the month number in short dates
    pub fn month_unit(self) -> &'static str {
        "月"
    }

    /// Unit appended to the day number in short dates
    pub fn day_unit(self) -> &'static str {
        "日"
    }

    /// Sentinel shown when a promotion is not enabled
    pub fn not_applicable(self) -> &'static str {
        "N/A"
    }

    /// Sans CJK font family matching the script's glyph forms
    pub fn cjk_sans_font(self) -> &'static str {
        match self {
            Script::Simplified => "Noto Sans CJK SC",
            Script::Traditional => "Noto Sans CJK TC",
        }
    }

    /// Web font stack for serif headings
    pub fn serif_font_stack(self) -> &'static str {
        match self {
            Script::Simplified => "'Noto Serif SC', serif",
            Script::Traditional => "'Noto Serif TC', serif",
        }
    }

    /// Web font stack for body text
    pub fn sans_font_stack(self) -> &'static str {
        match self {
            Script::Simplified => "'Noto Sans SC', sans-serif",
            Script::Traditional => "'Noto Sans TC', sans-serif",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Script::Simplified => f.write_str("simplified"),
            Script::Traditional => f.write_str("traditional"),
        }
    }
}

impl FromStr for Script {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simplified" | "sc" | "zh-hans" | "zh-cn" => Ok(Script::Simplified),
            "traditional" | "tc" | "zh-hant" | "zh-hk" | "zh-tw" => Ok(Script::Traditional),
            _ => Err(TextError::UnknownScript(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_default() {
        assert_eq!(Script::default(), Script::Simplified);
    }

    #[test]
    fn test_script_from_str() {
        assert_eq!("simplified".parse::<Script>(), Ok(Script::Simplified));
        assert_eq!("zh-CN".parse::<Script>(), Ok(Script::Simplified));
        assert_eq!("TC".parse::<Script>(), Ok(Script::Traditional));
        assert_eq!(" zh-hk ".parse::<Script>(), Ok(Script::Traditional));
        assert_eq!(
            "latin".parse::<Script>(),
            Err(TextError::UnknownScript("latin".to_string()))
        );
    }

    #[test]
    fn test_script_display_roundtrip() {
        for script in Script::ALL {
            assert_eq!(script.to_string().parse::<Script>(), Ok(script));
        }
    }

    #[test]
    fn test_script_fonts() {
        assert_eq!(Script::Simplified.cjk_sans_font(), "Noto Sans CJK SC");
        assert_eq!(Script::Traditional.cjk_sans_font(), "Noto Sans CJK TC");
        assert_eq!(Script::Traditional.language_tag(), "zh-Hant");
    }
}
