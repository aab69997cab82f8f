//! Scalar diff with "falsy is absent" semantics.
//!
//! Empty strings, zero and `false` mean "unset" in this domain, so a move
//! from one unset marker to another is never a change. Only a transition to
//! a present value that differs from the other side is reported.

use std::fmt;

use serde::{Deserialize, Serialize};

use sbx_types::{
    BreastType, CategoryRef, EntityId, Ethnicity, EyeColor, Gender, HairColor, StudioRef,
};

/// Whether a value counts as set.
pub trait Presence {
    fn is_present(&self) -> bool;
}

impl Presence for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for str {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for bool {
    fn is_present(&self) -> bool {
        *self
    }
}

macro_rules! numeric_presence {
    ($($t:ty),+) => {
        $(impl Presence for $t {
            fn is_present(&self) -> bool {
                *self != 0
            }
        })+
    };
}

numeric_presence!(i32, i64, u32, u64);

macro_rules! always_present {
    ($($t:ty),+) => {
        $(impl Presence for $t {
            fn is_present(&self) -> bool {
                true
            }
        })+
    };
}

always_present!(Gender, Ethnicity, EyeColor, HairColor, BreastType, EntityId);

impl<T: Presence + ?Sized> Presence for &T {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<T: Presence> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(Presence::is_present)
    }
}

/// A loosely typed scalar, for comparing values whose type differs between
/// the two sides (a numeric zero against an empty string).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
}

impl Presence for Scalar {
    fn is_present(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Text(s) => !s.is_empty(),
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Return `new` when it is present and differs from `old`, else `None`.
///
/// Directional: the old half of a change pair is computed by calling this
/// again with the arguments swapped, not by negating the new half.
pub fn diff_value<T>(old: Option<&T>, new: Option<&T>) -> Option<T>
where
    T: Presence + PartialEq + Clone,
{
    match new {
        Some(value) if value.is_present() && old != Some(value) => Some(value.clone()),
        _ => None,
    }
}

/// A link to another entity by id and display name.
pub trait Link: Clone {
    fn link_id(&self) -> &EntityId;
    fn link_name(&self) -> &str;
}

impl Link for StudioRef {
    fn link_id(&self) -> &EntityId {
        &self.id
    }

    fn link_name(&self) -> &str {
        &self.name
    }
}

impl Link for CategoryRef {
    fn link_id(&self) -> &EntityId {
        &self.id
    }

    fn link_name(&self) -> &str {
        &self.name
    }
}

/// Return `new` when its id differs from `old`'s and it has a name.
///
/// A dangling reference without a resolvable name is never reported.
pub fn diff_link<L: Link>(old: Option<&L>, new: Option<&L>) -> Option<L> {
    let new = new?;
    if old.map(Link::link_id) == Some(new.link_id()) || new.link_name().is_empty() {
        return None;
    }
    Some(new.clone())
}
