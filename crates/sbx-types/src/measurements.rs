//! Body measurements and the two text encodings reviewers type them in:
//! a bra size (`"34C"`) and a full measurement string (`"34C-24-36"`).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static MEASUREMENTS_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^(\d+)([A-Za-z]+)-(\d+)-(\d+)$").ok());

/// Performer measurements. Every component is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Measurements {
    pub band_size: Option<u32>,
    pub cup_size: Option<String>,
    pub waist: Option<u32>,
    pub hip: Option<u32>,
}

impl Measurements {
    /// The combined bra size (`"34C"`), or `None` without a band size.
    pub fn bra_size(&self) -> Option<String> {
        match self.band_size {
            Some(band) if band > 0 => Some(compose_bra_size(band, self.cup_size.as_deref())),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.band_size.is_none() && self.cup_size.is_none() && self.waist.is_none() && self.hip.is_none()
    }
}

/// Compose a bra size string from its parts.
pub fn compose_bra_size(band_size: u32, cup_size: Option<&str>) -> String {
    format!("{band_size}{}", cup_size.unwrap_or_default())
}

/// Split a bra size into `(band_size, cup_size)`.
///
/// The band is the leading digit run and the cup the letter run right after
/// it, upper-cased. A missing or zero band yields neither part, since a cup
/// without a band is meaningless.
pub fn parse_bra_size(text: &str) -> (Option<u32>, Option<String>) {
    let text = text.trim();
    let digits_end = text
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(text.len(), |(i, _)| i);

    let band = match text[..digits_end].parse::<u32>() {
        Ok(band) if band > 0 => band,
        _ => return (None, None),
    };

    let rest = &text[digits_end..];
    let letters_end = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_alphabetic())
        .map_or(rest.len(), |(i, _)| i);
    let cup = (letters_end > 0).then(|| rest[..letters_end].to_ascii_uppercase());

    (Some(band), cup)
}

/// Parse a `band+cup-waist-hip` measurement string such as `"34C-24-36"`.
///
/// Returns `None` when the text does not have exactly that shape.
pub fn parse_measurements(text: &str) -> Option<Measurements> {
    let re = MEASUREMENTS_RE.as_ref()?;
    let caps = re.captures(text.trim())?;
    let number = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    Some(Measurements {
        band_size: number(1).filter(|b| *b > 0),
        cup_size: caps.get(2).map(|m| m.as_str().to_ascii_uppercase()),
        waist: number(3),
        hip: number(4),
    })
}
