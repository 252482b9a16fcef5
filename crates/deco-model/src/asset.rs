//! The decoration/design-asset resource exchanged with the admin backend.

use serde::{Deserialize, Serialize};

/// A garment print image plus the attributes that describe where it applies.
///
/// Field names follow the backend's camelCase JSON. Every attribute is kept
/// as raw text here; normalization happens in `deco-normalization`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignAsset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Size code in legacy (`Mini,L,XL`) or compact (`MnLH`) format.
    #[serde(default)]
    pub image_type: String,

    #[serde(default)]
    pub color_primary: String,

    #[serde(default)]
    pub color_secondary: String,

    #[serde(default)]
    pub hoodie_type: String,

    /// Free text or the literal `N/A`.
    #[serde(default)]
    pub deco_base: String,
}

/// Attribute fields of a [`DesignAsset`] that go through normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetField {
    ColorPrimary,
    ColorSecondary,
    HoodieType,
    DecoBase,
}

impl AssetField {
    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            AssetField::ColorPrimary => "colorPrimary",
            AssetField::ColorSecondary => "colorSecondary",
            AssetField::HoodieType => "hoodieType",
            AssetField::DecoBase => "decoBase",
        }
    }
}

impl std::fmt::Display for AssetField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
