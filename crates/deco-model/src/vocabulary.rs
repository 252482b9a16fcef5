//! Closed attribute vocabularies for decoration assets.
//!
//! External systems send these attributes as free text. The enums here are the
//! in-app source of truth; the public normalization boundary stays stringly
//! typed and works on [`Vocabulary::labels`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::size::CanonicalSize;

/// Selects one of the four canonical vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Vocabulary {
    Sizes,
    Colors,
    HoodieTypes,
    DecoBases,
}

impl Vocabulary {
    pub const ALL: [Vocabulary; 4] = [
        Vocabulary::Sizes,
        Vocabulary::Colors,
        Vocabulary::HoodieTypes,
        Vocabulary::DecoBases,
    ];

    /// Ordered literal members of this vocabulary.
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            Vocabulary::Sizes => CanonicalSize::LABELS,
            Vocabulary::Colors => DecoColor::LABELS,
            Vocabulary::HoodieTypes => HoodieType::LABELS,
            Vocabulary::DecoBases => DecoBase::LABELS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Vocabulary::Sizes => "sizes",
            Vocabulary::Colors => "colors",
            Vocabulary::HoodieTypes => "hoodie-types",
            Vocabulary::DecoBases => "deco-bases",
        }
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A member of a closed, ordered attribute vocabulary.
pub trait CanonicalOption: Copy + Sized + 'static {
    /// Which vocabulary this type enumerates.
    const VOCABULARY: Vocabulary;

    /// Every member in canonical order.
    const ALL: &'static [Self];

    /// Literal labels, index-aligned with [`CanonicalOption::ALL`].
    const LABELS: &'static [&'static str];

    fn as_str(self) -> &'static str;

    /// Exact, case-sensitive lookup by literal label.
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|option| option.as_str() == label)
    }
}

/// Print colors for primary and secondary decoration ink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DecoColor {
    Blanco,
    Negro,
    Gris,
    Rojo,
    Azul,
    #[serde(rename = "Azul Marino")]
    AzulMarino,
    Verde,
    Amarillo,
    Naranja,
    Rosa,
    Morado,
    #[serde(rename = "Café")]
    Cafe,
    Beige,
    Dorado,
    Plateado,
    Multicolor,
}

impl CanonicalOption for DecoColor {
    const VOCABULARY: Vocabulary = Vocabulary::Colors;

    const ALL: &'static [Self] = &[
        DecoColor::Blanco,
        DecoColor::Negro,
        DecoColor::Gris,
        DecoColor::Rojo,
        DecoColor::Azul,
        DecoColor::AzulMarino,
        DecoColor::Verde,
        DecoColor::Amarillo,
        DecoColor::Naranja,
        DecoColor::Rosa,
        DecoColor::Morado,
        DecoColor::Cafe,
        DecoColor::Beige,
        DecoColor::Dorado,
        DecoColor::Plateado,
        DecoColor::Multicolor,
    ];

    const LABELS: &'static [&'static str] = &[
        "Blanco",
        "Negro",
        "Gris",
        "Rojo",
        "Azul",
        "Azul Marino",
        "Verde",
        "Amarillo",
        "Naranja",
        "Rosa",
        "Morado",
        "Café",
        "Beige",
        "Dorado",
        "Plateado",
        "Multicolor",
    ];

    fn as_str(self) -> &'static str {
        Self::LABELS[self as usize]
    }
}

/// Hoodie cut the decoration is designed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HoodieType {
    Canguro,
    #[serde(rename = "Con Cierre")]
    ConCierre,
    #[serde(rename = "Sin Capucha")]
    SinCapucha,
    Oversize,
    Crop,
}

impl CanonicalOption for HoodieType {
    const VOCABULARY: Vocabulary = Vocabulary::HoodieTypes;

    const ALL: &'static [Self] = &[
        HoodieType::Canguro,
        HoodieType::ConCierre,
        HoodieType::SinCapucha,
        HoodieType::Oversize,
        HoodieType::Crop,
    ];

    const LABELS: &'static [&'static str] =
        &["Canguro", "Con Cierre", "Sin Capucha", "Oversize", "Crop"];

    fn as_str(self) -> &'static str {
        Self::LABELS[self as usize]
    }
}

/// Transfer base the decoration is printed with. `N/A` is an explicit member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DecoBase {
    #[serde(rename = "N/A")]
    NotApplicable,
    #[serde(rename = "Vinil Textil")]
    VinilTextil,
    #[serde(rename = "DTF")]
    Dtf,
    #[serde(rename = "Serigrafía")]
    Serigrafia,
    #[serde(rename = "Sublimación")]
    Sublimacion,
    Bordado,
}

impl DecoBase {
    /// Literal sentinel used when an asset has no decoration base.
    pub const NOT_APPLICABLE: &'static str = "N/A";
}

impl CanonicalOption for DecoBase {
    const VOCABULARY: Vocabulary = Vocabulary::DecoBases;

    const ALL: &'static [Self] = &[
        DecoBase::NotApplicable,
        DecoBase::VinilTextil,
        DecoBase::Dtf,
        DecoBase::Serigrafia,
        DecoBase::Sublimacion,
        DecoBase::Bordado,
    ];

    const LABELS: &'static [&'static str] = &[
        DecoBase::NOT_APPLICABLE,
        "Vinil Textil",
        "DTF",
        "Serigrafía",
        "Sublimación",
        "Bordado",
    ];

    fn as_str(self) -> &'static str {
        Self::LABELS[self as usize]
    }
}

impl CanonicalOption for CanonicalSize {
    const VOCABULARY: Vocabulary = Vocabulary::Sizes;
    const ALL: &'static [Self] = &CanonicalSize::ALL;
    const LABELS: &'static [&'static str] = CanonicalSize::LABELS;

    fn as_str(self) -> &'static str {
        CanonicalSize::as_str(self)
    }
}

macro_rules! impl_display_from_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl FromStr for $ty {
                type Err = ModelError;

                /// Strict parse: the trimmed input must equal a label exactly.
                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty>::from_label(s.trim())
                        .ok_or_else(|| ModelError::unknown(<$ty>::VOCABULARY, s))
                }
            }
        )+
    };
}

impl_display_from_str!(DecoColor, HoodieType, DecoBase);

impl FromStr for Vocabulary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "sizes" | "size" => Ok(Vocabulary::Sizes),
            "colors" | "color" => Ok(Vocabulary::Colors),
            "hoodie-types" | "hoodie-type" => Ok(Vocabulary::HoodieTypes),
            "deco-bases" | "deco-base" => Ok(Vocabulary::DecoBases),
            _ => Err(format!("Unknown vocabulary: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_aligned<T: CanonicalOption + fmt::Debug + PartialEq>() {
        assert_eq!(T::ALL.len(), T::LABELS.len());
        for (option, label) in T::ALL.iter().zip(T::LABELS) {
            assert_eq!(option.as_str(), *label);
            assert_eq!(T::from_label(label), Some(*option));
        }
    }

    #[test]
    fn test_labels_are_index_aligned() {
        assert_aligned::<DecoColor>();
        assert_aligned::<HoodieType>();
        assert_aligned::<DecoBase>();
        assert_aligned::<CanonicalSize>();
    }

    #[test]
    fn test_vocabulary_labels() {
        assert_eq!(Vocabulary::Sizes.labels()[0], "Mini");
        assert_eq!(Vocabulary::DecoBases.labels()[0], "N/A");
        assert!(Vocabulary::Colors.labels().contains(&"Amarillo"));
    }

    #[test]
    fn test_vocabulary_from_str() {
        assert_eq!("colors".parse::<Vocabulary>().unwrap(), Vocabulary::Colors);
        assert_eq!(
            "HOODIE_TYPES".parse::<Vocabulary>().unwrap(),
            Vocabulary::HoodieTypes
        );
        assert_eq!("deco-base".parse::<Vocabulary>().unwrap(), Vocabulary::DecoBases);
        assert!("fabrics".parse::<Vocabulary>().is_err());
    }

    #[test]
    fn test_strict_parse_reports_vocabulary() {
        let err = "Fucsia".parse::<DecoColor>().unwrap_err();
        assert_eq!(err.to_string(), "unknown colors value: \"Fucsia\"");
        assert_eq!("Café".parse::<DecoColor>().unwrap(), DecoColor::Cafe);
    }
}
