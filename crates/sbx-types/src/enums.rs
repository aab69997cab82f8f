//! Categorical performer and fingerprint attributes.
//!
//! Every enum here has a canonical wire value (`"TRANSGENDER_MALE"`) and a
//! human display label (`"Transmale"`). Free text coming from drafts is
//! resolved against both, case-insensitively, through [`Labeled::resolve`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// A closed set of values with canonical names and display labels.
pub trait Labeled: Sized + Copy + 'static {
    /// Name of the attribute, used in error messages.
    const KIND: &'static str;

    /// Every value, in declaration order.
    fn all() -> &'static [Self];

    /// Canonical upper-case value, as serialized.
    fn as_str(&self) -> &'static str;

    /// Human readable label.
    fn label(&self) -> &'static str;

    /// Resolve free text against canonical values and labels, ignoring case
    /// and surrounding whitespace. Returns `None` for blank or unknown text.
    fn resolve(text: &str) -> Option<Self> {
        let needle = text.trim();
        if needle.is_empty() {
            return None;
        }
        Self::all().iter().copied().find(|value| {
            value.as_str().eq_ignore_ascii_case(needle) || value.label().eq_ignore_ascii_case(needle)
        })
    }
}

macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => ($value:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $value)] $variant, )+
        }

        impl Labeled for $name {
            const KIND: &'static str = $kind;

            fn all() -> &'static [Self] {
                &[ $( Self::$variant ),+ ]
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $value, )+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = TypeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as Labeled>::resolve(s).ok_or_else(|| TypeError::UnknownLabel {
                    kind: $kind,
                    value: s.to_string(),
                })
            }
        }
    };
}

labeled_enum! {
    /// Performer gender.
    Gender, "gender" {
        Male => ("MALE", "Male"),
        Female => ("FEMALE", "Female"),
        Intersex => ("INTERSEX", "Intersex"),
        NonBinary => ("NON_BINARY", "Non-binary"),
        TransgenderMale => ("TRANSGENDER_MALE", "Transmale"),
        TransgenderFemale => ("TRANSGENDER_FEMALE", "Transfemale"),
    }
}

labeled_enum! {
    /// Performer ethnicity.
    Ethnicity, "ethnicity" {
        Asian => ("ASIAN", "Asian"),
        Black => ("BLACK", "Black"),
        Caucasian => ("CAUCASIAN", "Caucasian"),
        Indian => ("INDIAN", "Indian"),
        Latin => ("LATIN", "Latin"),
        MiddleEastern => ("MIDDLE_EASTERN", "Middle Eastern"),
        Mixed => ("MIXED", "Mixed"),
        Other => ("OTHER", "Other"),
    }
}

labeled_enum! {
    /// Performer eye color.
    EyeColor, "eye color" {
        Blue => ("BLUE", "Blue"),
        Brown => ("BROWN", "Brown"),
        Green => ("GREEN", "Green"),
        Grey => ("GREY", "Grey"),
        Hazel => ("HAZEL", "Hazel"),
        Red => ("RED", "Red"),
    }
}

labeled_enum! {
    /// Performer hair color.
    HairColor, "hair color" {
        Auburn => ("AUBURN", "Auburn"),
        Bald => ("BALD", "Bald"),
        Black => ("BLACK", "Black"),
        Blonde => ("BLONDE", "Blond"),
        Brunette => ("BRUNETTE", "Brown"),
        Grey => ("GREY", "Grey"),
        Other => ("OTHER", "Other"),
        Red => ("RED", "Red"),
        Various => ("VARIOUS", "Various"),
        White => ("WHITE", "White"),
    }
}

labeled_enum! {
    /// Natural or augmented.
    BreastType, "breast type" {
        Natural => ("NATURAL", "Natural"),
        Fake => ("FAKE", "Augmented"),
        NotApplicable => ("NA", "N/A"),
    }
}

labeled_enum! {
    /// Scene fingerprint hashing algorithm.
    FingerprintAlgorithm, "fingerprint algorithm" {
        Md5 => ("MD5", "MD5"),
        Oshash => ("OSHASH", "OSHASH"),
        Phash => ("PHASH", "PHASH"),
    }
}
