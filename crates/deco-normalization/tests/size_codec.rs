//! Tests for the size-code codec.

use deco_model::{CanonicalSize, SizeSet};
use deco_normalization::{
    SizeCodeFormat, available_sizes_for, decode, encode, encode_compact, encode_labels,
};

fn set(sizes: &[CanonicalSize]) -> SizeSet {
    sizes.iter().copied().collect()
}

#[test]
fn test_encode_sorts_canonically() {
    let sizes = set(&[CanonicalSize::XL, CanonicalSize::Mini, CanonicalSize::L]);
    assert_eq!(encode(&sizes), "Mini,L,XL");
}

#[test]
fn test_decode_legacy_names() {
    assert_eq!(
        decode("Mini,L,XL"),
        set(&[CanonicalSize::Mini, CanonicalSize::L, CanonicalSize::XL])
    );
}

#[test]
fn test_decode_compact_all_sizes() {
    assert_eq!(decode("MnItXSMLH"), SizeSet::all());
}

#[test]
fn test_empty_inputs() {
    assert!(decode("").is_empty());
    assert!(decode(" \t ").is_empty());
    assert_eq!(encode(&SizeSet::new()), "");
    assert!(available_sizes_for("").is_empty());
}

#[test]
fn test_two_letter_code_is_not_double_counted() {
    assert_eq!(decode("Mn"), set(&[CanonicalSize::Mini]));
    assert_eq!(decode("It"), set(&[CanonicalSize::Intermedio]));
}

#[test]
fn test_xs_is_read_per_character() {
    assert_eq!(decode("XS"), set(&[CanonicalSize::XS, CanonicalSize::S]));
    assert_eq!(decode("XL"), set(&[CanonicalSize::XS, CanonicalSize::L]));
}

#[test]
fn test_compact_order_independent() {
    let expected = decode("MnItXSMLH");
    for code in ["HLMSXItMn", "ItMnHXSLM", "SMnLItXHM", "mnitxsmlh"] {
        assert_eq!(decode(code), expected, "code {code}");
    }
}

#[test]
fn test_lone_names_without_shorthand_spelling() {
    assert_eq!(SizeCodeFormat::detect("Mini"), SizeCodeFormat::Legacy);
    assert_eq!(decode("Mini"), set(&[CanonicalSize::Mini]));
    assert_eq!(decode("Intermedio"), set(&[CanonicalSize::Intermedio]));
}

#[test]
fn test_legacy_mixes_names_and_shorthand() {
    assert_eq!(
        decode("Mn,Intermedio,H, S"),
        set(&[
            CanonicalSize::Mini,
            CanonicalSize::Intermedio,
            CanonicalSize::S,
            CanonicalSize::XL,
        ])
    );
}

#[test]
fn test_garbage_decodes_leniently() {
    assert_eq!(decode("???"), SizeSet::new());
    assert_eq!(decode("foo,bar"), SizeSet::new());
    assert_eq!(decode("talla: L"), set(&[CanonicalSize::L]));
}

#[test]
fn test_encode_labels_drops_unknown() {
    assert_eq!(encode_labels(["XL", "Grande", "Mini", "Mini"]), "Mini,XL");
    assert_eq!(encode_labels(Vec::<String>::new()), "");
    assert_eq!(encode_labels(["H"]), "");
}

#[test]
fn test_available_sizes_are_sorted() {
    assert_eq!(
        available_sizes_for("H,Mn,M"),
        vec![CanonicalSize::Mini, CanonicalSize::M, CanonicalSize::XL]
    );
}

#[test]
fn test_compact_encoding_decodes_back() {
    let sizes = set(&[CanonicalSize::Intermedio, CanonicalSize::XS]);
    assert_eq!(encode_compact(&sizes), "ItX");
    assert_eq!(decode(&encode_compact(&sizes)), sizes);
}
