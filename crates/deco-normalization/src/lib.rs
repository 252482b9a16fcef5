//! Attribute normalization for decoration design assets.
//!
//! Two independent, pure modules sit between wire strings and in-memory values:
//!
//! - [`size_codec`]: decodes and encodes the `imageType` size code in its
//!   legacy (`Mini,L,XL`) and compact (`MnLH`) formats.
//! - [`option`]: maps free-text colors, hoodie types, and decoration bases onto
//!   their canonical vocabulary, or returns the raw value unchanged.
//!
//! [`asset`] applies both to a whole [`deco_model::DesignAsset`].
//!
//! # Example
//!
//! ```
//! use deco_model::CanonicalSize;
//! use deco_normalization::{available_sizes_for, match_option};
//!
//! assert_eq!(
//!     available_sizes_for("MnLH"),
//!     vec![CanonicalSize::Mini, CanonicalSize::L, CanonicalSize::XL]
//! );
//! assert_eq!(match_option("AMARILLO", &["Amarillo", "Rojo"]), "Amarillo");
//! ```
//!
//! # Design Principles
//!
//! - **Total functions**: every input decodes or normalizes; nothing fails or panics
//! - **Stateless**: vocabularies are immutable statics, safe to share across threads
//! - **Value preservation**: unmatched text is returned as is, never replaced by a guess

pub mod asset;
pub mod option;
pub mod size_codec;

pub use asset::{NormalizedAsset, UnmatchedValue, normalize_asset};
pub use option::{
    OptionMatch, deco_base_input, match_option, match_option_with, normalize_color,
    normalize_deco_base, normalize_for_comparison, normalize_hoodie_type, resolve_option,
    resolve_typed,
};
pub use size_codec::{
    SizeCodeFormat, available_sizes_for, decode, decode_compact, decode_legacy, encode,
    encode_compact, encode_labels,
};
