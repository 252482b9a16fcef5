//! Canonical types for decoration design assets.
//!
//! - [`CanonicalSize`] and [`SizeSet`]: the seven garment sizes, in canonical order.
//! - [`DecoColor`], [`HoodieType`], [`DecoBase`]: closed attribute vocabularies.
//! - [`DesignAsset`]: the wire resource carrying raw attribute strings.
//! - [`NormalizationOptions`]: matching configuration.

pub mod asset;
pub mod error;
pub mod options;
pub mod size;
pub mod vocabulary;

pub use asset::{AssetField, DesignAsset};
pub use error::ModelError;
pub use options::{MatchingMode, NormalizationOptions};
pub use size::{CanonicalSize, SizeSet};
pub use vocabulary::{CanonicalOption, DecoBase, DecoColor, HoodieType, Vocabulary};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_deserializes_camel_case() {
        let json = r#"{
            "id": "deco-17",
            "imageType": "MnItXSMLH",
            "colorPrimary": "AMARILLO",
            "hoodieType": "canguro"
        }"#;
        let asset: DesignAsset = serde_json::from_str(json).expect("deserialize asset");
        assert_eq!(asset.id.as_deref(), Some("deco-17"));
        assert_eq!(asset.image_type, "MnItXSMLH");
        assert_eq!(asset.color_primary, "AMARILLO");
        assert_eq!(asset.color_secondary, "");
        assert_eq!(asset.deco_base, "");
    }

    #[test]
    fn asset_serializes_wire_names() {
        let asset = DesignAsset {
            image_type: "Mini,L".to_string(),
            deco_base: "N/A".to_string(),
            ..DesignAsset::default()
        };
        let json = serde_json::to_value(&asset).expect("serialize asset");
        assert_eq!(json["imageType"], "Mini,L");
        assert_eq!(json["decoBase"], "N/A");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn options_default_to_lenient() {
        let options: NormalizationOptions = serde_json::from_str("{}").expect("parse options");
        assert_eq!(options, NormalizationOptions::default());
        assert_eq!(options.matching_mode, MatchingMode::Lenient);
        assert!(options.blank_deco_base_as_na);
        assert_eq!(NormalizationOptions::strict().matching_mode, MatchingMode::Strict);
    }
}
