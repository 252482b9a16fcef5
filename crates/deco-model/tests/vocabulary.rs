#![allow(missing_docs)]

use deco_model::{
    CanonicalOption, CanonicalSize, DecoBase, DecoColor, HoodieType, ModelError, SizeSet,
    Vocabulary,
};

#[test]
fn test_vocabulary_selector_matches_enums() {
    assert_eq!(Vocabulary::Colors.labels(), DecoColor::LABELS);
    assert_eq!(Vocabulary::HoodieTypes.labels(), HoodieType::LABELS);
    assert_eq!(Vocabulary::DecoBases.labels(), DecoBase::LABELS);
    assert_eq!(
        Vocabulary::Sizes.labels(),
        &["Mini", "Intermedio", "XS", "S", "M", "L", "XL"]
    );
    for vocabulary in Vocabulary::ALL {
        assert!(!vocabulary.labels().is_empty());
    }
}

#[test]
fn test_deco_base_includes_sentinel() {
    assert!(DecoBase::LABELS.contains(&DecoBase::NOT_APPLICABLE));
    assert_eq!(
        DecoBase::from_label("N/A"),
        Some(DecoBase::NotApplicable)
    );
}

#[test]
fn test_strict_parse() {
    // Exact labels only
    assert_eq!("Azul Marino".parse::<DecoColor>().unwrap(), DecoColor::AzulMarino);
    assert_eq!(" Canguro ".parse::<HoodieType>().unwrap(), HoodieType::Canguro);

    // Case drift is left to the lenient normalizer
    let err = "canguro".parse::<HoodieType>().unwrap_err();
    assert_eq!(
        err,
        ModelError::UnknownOption {
            vocabulary: Vocabulary::HoodieTypes,
            value: "canguro".to_string(),
        }
    );
}

#[test]
fn test_size_shorthand_and_names() {
    for size in CanonicalSize::ALL {
        assert_eq!(CanonicalSize::from_shorthand(size.shorthand()), Some(size));
        assert_eq!(CanonicalSize::from_name(size.as_str()), Some(size));
    }
    assert_eq!("H".parse::<CanonicalSize>().unwrap(), CanonicalSize::XL);
    assert_eq!("XL".parse::<CanonicalSize>().unwrap(), CanonicalSize::XL);
}

#[test]
fn test_size_set_iterates_in_canonical_order() {
    let set: SizeSet = [
        CanonicalSize::XL,
        CanonicalSize::S,
        CanonicalSize::Intermedio,
        CanonicalSize::S,
    ]
    .into_iter()
    .collect();
    assert_eq!(
        set.to_vec(),
        vec![CanonicalSize::Intermedio, CanonicalSize::S, CanonicalSize::XL]
    );
    assert_eq!(SizeSet::all().len(), 7);
    assert!(set.contains(CanonicalSize::XL));
    assert!(!set.contains(CanonicalSize::Mini));
}
