//! Garment sizes a decoration image can be printed on.
//!
//! The declaration order of [`CanonicalSize`] is the canonical order used for
//! sorting, serialization, and display. [`SizeSet`] relies on the derived
//! `Ord` to iterate in that order.

use std::collections::BTreeSet;
use std::collections::btree_set;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::vocabulary::Vocabulary;

/// One of the seven sizes the application recognizes.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CanonicalSize {
    Mini,
    Intermedio,
    XS,
    S,
    M,
    L,
    XL,
}

impl CanonicalSize {
    /// All sizes in canonical order.
    pub const ALL: [CanonicalSize; 7] = [
        CanonicalSize::Mini,
        CanonicalSize::Intermedio,
        CanonicalSize::XS,
        CanonicalSize::S,
        CanonicalSize::M,
        CanonicalSize::L,
        CanonicalSize::XL,
    ];

    /// Full canonical names, index-aligned with [`CanonicalSize::ALL`].
    pub const LABELS: &'static [&'static str] =
        &["Mini", "Intermedio", "XS", "S", "M", "L", "XL"];

    /// Returns the full canonical name (e.g. `"Intermedio"`).
    pub fn as_str(self) -> &'static str {
        Self::LABELS[self as usize]
    }

    /// Returns the backend shorthand code (e.g. `"It"` for Intermedio, `"H"` for XL).
    pub fn shorthand(self) -> &'static str {
        match self {
            CanonicalSize::Mini => "Mn",
            CanonicalSize::Intermedio => "It",
            CanonicalSize::XS => "X",
            CanonicalSize::S => "S",
            CanonicalSize::M => "M",
            CanonicalSize::L => "L",
            CanonicalSize::XL => "H",
        }
    }

    /// Exact, case-sensitive lookup by full canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.as_str() == name)
    }

    /// Exact, case-sensitive lookup by backend shorthand code.
    pub fn from_shorthand(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.shorthand() == code)
    }
}

impl fmt::Display for CanonicalSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CanonicalSize {
    type Err = ModelError;

    /// Strict parse of a single size token: shorthand code first, then full name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::from_shorthand(trimmed)
            .or_else(|| Self::from_name(trimmed))
            .ok_or_else(|| ModelError::unknown(Vocabulary::Sizes, s))
    }
}

/// A set of sizes, always iterated in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SizeSet {
    sizes: BTreeSet<CanonicalSize>,
}

impl SizeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every canonical size.
    pub fn all() -> Self {
        CanonicalSize::ALL.into_iter().collect()
    }

    /// Adds a size. Returns `false` if it was already present.
    pub fn insert(&mut self, size: CanonicalSize) -> bool {
        self.sizes.insert(size)
    }

    pub fn contains(&self, size: CanonicalSize) -> bool {
        self.sizes.contains(&size)
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = CanonicalSize> + '_ {
        self.sizes.iter().copied()
    }

    /// Members as a vector in canonical order.
    pub fn to_vec(&self) -> Vec<CanonicalSize> {
        self.iter().collect()
    }
}

impl FromIterator<CanonicalSize> for SizeSet {
    fn from_iter<I: IntoIterator<Item = CanonicalSize>>(iter: I) -> Self {
        Self {
            sizes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SizeSet {
    type Item = CanonicalSize;
    type IntoIter = btree_set::IntoIter<CanonicalSize>;

    fn into_iter(self) -> Self::IntoIter {
        self.sizes.into_iter()
    }
}

impl<'a> IntoIterator for &'a SizeSet {
    type Item = CanonicalSize;
    type IntoIter = std::iter::Copied<btree_set::Iter<'a, CanonicalSize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.sizes.iter().copied()
    }
}

/// Renders the legacy comma-separated form, e.g. `Mini,L,XL`.
impl fmt::Display for SizeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, size) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            f.write_str(size.as_str())?;
        }
        Ok(())
    }
}
