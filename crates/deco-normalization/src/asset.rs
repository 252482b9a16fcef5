//! Normalization of whole design assets for form editing.

use deco_model::{
    AssetField, CanonicalOption, CanonicalSize, DecoBase, DecoColor, DesignAsset, HoodieType,
    NormalizationOptions, SizeSet,
};
use tracing::warn;

use crate::option::{deco_base_input, resolve_option};
use crate::size_codec::{SizeCodeFormat, available_sizes_for, encode, encode_compact};

/// A raw attribute value that matched no vocabulary member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmatchedValue {
    pub field: AssetField,
    pub raw: String,
}

/// Form-edit view of a [`DesignAsset`]: decoded sizes and normalized attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedAsset {
    /// Sizes the image applies to, in canonical order.
    pub sizes: Vec<CanonicalSize>,
    pub color_primary: String,
    pub color_secondary: String,
    pub hoodie_type: String,
    pub deco_base: String,
    /// Non-blank values kept as raw text because nothing matched.
    pub unmatched: Vec<UnmatchedValue>,
}

impl NormalizedAsset {
    /// Writes the view back onto a copy of `template`.
    ///
    /// Sizes are re-encoded in the legacy format, except for sets whose legacy
    /// form would read back as compact (`XS`, `XL`); those are written compact.
    /// Identity fields are kept.
    pub fn to_asset(&self, template: &DesignAsset) -> DesignAsset {
        let sizes: SizeSet = self.sizes.iter().copied().collect();
        DesignAsset {
            id: template.id.clone(),
            name: template.name.clone(),
            image_type: stored_size_code(&sizes),
            color_primary: self.color_primary.clone(),
            color_secondary: self.color_secondary.clone(),
            hoodie_type: self.hoodie_type.clone(),
            deco_base: self.deco_base.clone(),
        }
    }

    pub fn is_fully_matched(&self) -> bool {
        self.unmatched.is_empty()
    }
}

/// Size code that decodes back to exactly `sizes`.
fn stored_size_code(sizes: &SizeSet) -> String {
    let legacy = encode(sizes);
    match SizeCodeFormat::detect(&legacy) {
        SizeCodeFormat::Compact => encode_compact(sizes),
        SizeCodeFormat::Empty | SizeCodeFormat::Legacy => legacy,
    }
}

/// Decodes sizes and normalizes every attribute of an asset.
///
/// Unmatched non-blank values are logged and kept unchanged.
pub fn normalize_asset(asset: &DesignAsset, options: &NormalizationOptions) -> NormalizedAsset {
    let mut unmatched = Vec::new();
    let mut normalize = |field: AssetField, raw: &str, labels: &[&str]| -> String {
        let resolved = resolve_option(raw, labels, options.matching_mode);
        match resolved.value() {
            Some(value) => value.to_string(),
            None => {
                if !raw.trim().is_empty() {
                    warn!(
                        asset_id = asset.id.as_deref().unwrap_or(""),
                        field = %field,
                        raw,
                        "attribute value not in vocabulary; keeping raw value"
                    );
                    unmatched.push(UnmatchedValue {
                        field,
                        raw: raw.to_string(),
                    });
                }
                raw.to_string()
            }
        }
    };

    let color_primary = normalize(AssetField::ColorPrimary, &asset.color_primary, DecoColor::LABELS);
    let color_secondary = normalize(
        AssetField::ColorSecondary,
        &asset.color_secondary,
        DecoColor::LABELS,
    );
    let hoodie_type = normalize(AssetField::HoodieType, &asset.hoodie_type, HoodieType::LABELS);
    let deco_base = normalize(
        AssetField::DecoBase,
        deco_base_input(&asset.deco_base, options),
        DecoBase::LABELS,
    );

    NormalizedAsset {
        sizes: available_sizes_for(&asset.image_type),
        color_primary,
        color_secondary,
        hoodie_type,
        deco_base,
        unmatched,
    }
}
