use crate::{translate, Error, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use time::{macros::format_description, OffsetDateTime};

/// Supported interface language.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Simplified Chinese.
    #[default]
    Zh,
    /// English.
    En,
}

impl Language {
    /// Short language tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }

    /// Tag suitable for a document `lang` attribute.
    pub fn html_lang(&self) -> &'static str {
        match self {
            Self::Zh => "zh-CN",
            Self::En => "en",
        }
    }

    /// Switch to the other language.
    pub fn toggle(&self) -> Self {
        match self {
            Self::Zh => Self::En,
            Self::En => Self::Zh,
        }
    }

    /// Translate a key into this language.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate(*self, key)
    }

    /// Short month, day and time in the style of this language.
    pub fn format_date(&self, date: &OffsetDateTime) -> Result<String> {
        let formatted = match self {
            Self::Zh => date.format(format_description!(
                "[month padding:none]月[day]日 [hour]:[minute]"
            ))?,
            Self::En => date.format(format_description!(
                "[month repr:short] [day], [hour repr:12]:[minute] [period]"
            ))?,
        };
        Ok(formatted)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_ascii_lowercase();
        let primary = lower.split(['-', '_']).next().unwrap_or_default();
        match primary {
            "zh" => Ok(Self::Zh),
            "en" => Ok(Self::En),
            _ => Err(Error::UnknownLanguage(s.to_owned())),
        }
    }
}
