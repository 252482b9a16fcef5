//! Size-code codec for the `imageType` field.
//!
//! Two wire formats carry the same [`SizeSet`]:
//!
//! - **Legacy**: comma-separated tokens, each a full size name or a backend
//!   shorthand code (`Mini,L,H`).
//! - **Compact**: shorthand codes concatenated without separators (`MnItXSMLH`).
//!
//! The compact decoder is a two-pass, order-independent scan. Two-letter codes
//! (`Mn`, `It`) are removed first, then every remaining character is classified
//! on its own. That keeps the `M` in `Mn` from also counting as size M, and it
//! also means `XS` decodes to both XS and S. Stored backend data depends on this
//! per-character reading, so it is kept as is.
//!
//! Decoding never fails: unknown tokens and characters are skipped.

use deco_model::{CanonicalSize, SizeSet};
use tracing::{debug, trace};

/// Separator of the legacy format.
pub const LEGACY_DELIMITER: char = ',';

/// Two-letter codes, removed in this order before single-letter classification.
const TWO_LETTER_CODES: [(&str, CanonicalSize); 2] = [
    ("mn", CanonicalSize::Mini),
    ("it", CanonicalSize::Intermedio),
];

/// Wire format of a raw size code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCodeFormat {
    /// Blank input.
    Empty,
    /// Comma-separated names or shorthand codes.
    Legacy,
    /// Concatenated shorthand codes.
    Compact,
}

impl SizeCodeFormat {
    /// Detects the format of a raw size code.
    ///
    /// A comma selects the legacy format. A lone full size name is also read as
    /// legacy when the compact grammar cannot consume it (`Mini`, `Intermedio`);
    /// names spelled entirely in shorthand letters (`XS`, `XL`, `S`, `M`, `L`)
    /// stay compact.
    pub fn detect(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return SizeCodeFormat::Empty;
        }
        if trimmed.contains(LEGACY_DELIMITER) {
            return SizeCodeFormat::Legacy;
        }
        if CanonicalSize::from_name(trimmed).is_some() && scan_compact(trimmed).unrecognized > 0 {
            return SizeCodeFormat::Legacy;
        }
        SizeCodeFormat::Compact
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SizeCodeFormat::Empty => "empty",
            SizeCodeFormat::Legacy => "legacy",
            SizeCodeFormat::Compact => "compact",
        }
    }
}

impl std::fmt::Display for SizeCodeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decodes a raw size code in either wire format.
pub fn decode(raw: &str) -> SizeSet {
    let format = SizeCodeFormat::detect(raw);
    let sizes = match format {
        SizeCodeFormat::Empty => SizeSet::new(),
        SizeCodeFormat::Legacy => decode_legacy(raw),
        SizeCodeFormat::Compact => decode_compact(raw),
    };
    debug!(%format, sizes = %sizes, "decoded size code");
    sizes
}

/// Decodes the legacy comma-separated format.
///
/// Each trimmed segment is resolved as a shorthand code first, then as a full
/// canonical name. Segments that resolve to neither are dropped.
pub fn decode_legacy(raw: &str) -> SizeSet {
    raw.split(LEGACY_DELIMITER)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| {
            let size = CanonicalSize::from_shorthand(segment)
                .or_else(|| CanonicalSize::from_name(segment));
            if size.is_none() {
                trace!(segment, "skipping unknown size segment");
            }
            size
        })
        .collect()
}

/// Decodes the compact concatenated format.
pub fn decode_compact(raw: &str) -> SizeSet {
    scan_compact(raw).sizes
}

struct CompactScan {
    sizes: SizeSet,
    /// Non-whitespace characters that matched no code.
    unrecognized: usize,
}

fn scan_compact(raw: &str) -> CompactScan {
    let mut remainder = raw.to_ascii_lowercase();
    let mut sizes = SizeSet::new();

    for (code, size) in TWO_LETTER_CODES {
        if remainder.contains(code) {
            sizes.insert(size);
            remainder = remainder.replace(code, "");
        }
    }

    let mut unrecognized = 0;
    for ch in remainder.chars() {
        match single_letter_size(ch) {
            Some(size) => {
                sizes.insert(size);
            }
            None if ch.is_whitespace() => {}
            None => unrecognized += 1,
        }
    }

    CompactScan {
        sizes,
        unrecognized,
    }
}

/// Classifies one lowercased character of a compact code.
fn single_letter_size(ch: char) -> Option<CanonicalSize> {
    match ch {
        'h' => Some(CanonicalSize::XL),
        'l' => Some(CanonicalSize::L),
        'm' => Some(CanonicalSize::M),
        'x' => Some(CanonicalSize::XS),
        's' => Some(CanonicalSize::S),
        _ => None,
    }
}

/// Encodes a size set in the legacy format, sorted canonically.
///
/// The empty set encodes to the empty string.
pub fn encode(sizes: &SizeSet) -> String {
    sizes.to_string()
}

/// Encodes size names in the legacy format.
///
/// Labels that are not full canonical size names are dropped.
pub fn encode_labels<I, S>(labels: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let sizes: SizeSet = labels
        .into_iter()
        .filter_map(|label| CanonicalSize::from_name(label.as_ref().trim()))
        .collect();
    encode(&sizes)
}

/// Encodes a size set in the compact format (`MnItXSMLH` for every size).
pub fn encode_compact(sizes: &SizeSet) -> String {
    sizes.iter().map(CanonicalSize::shorthand).collect()
}

/// Sizes available for a stored size code, in canonical order.
pub fn available_sizes_for(raw: &str) -> Vec<CanonicalSize> {
    decode(raw).to_vec()
}
