use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, info_span, warn};

use deco_model::{CanonicalSize, DesignAsset, NormalizationOptions, SizeSet, Vocabulary};
use deco_normalization::{
    SizeCodeFormat, UnmatchedValue, deco_base_input, decode, encode, encode_compact,
    normalize_asset, resolve_option,
};

/// Result of `deco decode`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeReport {
    pub format: SizeCodeFormat,
    pub sizes: SizeSet,
}

impl fmt::Display for DecodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "format: {}", self.format)?;
        if self.sizes.is_empty() {
            write!(f, "sizes: (none)")
        } else {
            write!(f, "sizes: {}", self.sizes)
        }
    }
}

pub fn run_decode(code: &str) -> DecodeReport {
    DecodeReport {
        format: SizeCodeFormat::detect(code),
        sizes: decode(code),
    }
}

/// Encodes sizes given as names or shorthand codes; arguments may be comma-joined.
///
/// Unknown sizes are dropped with a warning.
pub fn run_encode(sizes: &[String], compact: bool) -> String {
    let set: SizeSet = sizes
        .iter()
        .flat_map(|arg| arg.split(','))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| match token.parse::<CanonicalSize>() {
            Ok(size) => Some(size),
            Err(error) => {
                warn!(%error, "dropping size");
                None
            }
        })
        .collect();
    if compact {
        encode_compact(&set)
    } else {
        encode(&set)
    }
}

/// Result of `deco match`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    pub value: String,
    pub pass: &'static str,
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value, self.pass)
    }
}

pub fn run_match(
    raw: &str,
    vocabulary: Vocabulary,
    options: &NormalizationOptions,
) -> MatchReport {
    let input = match vocabulary {
        Vocabulary::DecoBases => deco_base_input(raw, options),
        _ => raw,
    };
    let resolved = resolve_option(input, vocabulary.labels(), options.matching_mode);
    MatchReport {
        value: resolved.value().unwrap_or(raw).to_string(),
        pass: resolved.pass_name(),
    }
}

/// JSON input of `deco normalize`: one asset or an array of assets.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AssetDocument {
    Many(Vec<DesignAsset>),
    One(DesignAsset),
}

/// Result of `deco normalize`.
#[derive(Debug, Clone)]
pub struct NormalizeReport {
    /// Normalized assets as pretty JSON, in the same shape as the input.
    pub json: String,
    pub asset_count: usize,
    /// Unmatched values with the index of their asset.
    pub unmatched: Vec<(usize, UnmatchedValue)>,
}

impl NormalizeReport {
    /// Number of assets with at least one unmatched value.
    pub fn affected_assets(&self) -> usize {
        self.unmatched
            .iter()
            .map(|(index, _)| *index)
            .collect::<BTreeSet<_>>()
            .len()
    }
}

pub fn run_normalize(input: &str, options: &NormalizationOptions) -> Result<NormalizeReport> {
    let span = info_span!("normalize", mode = ?options.matching_mode);
    let _guard = span.enter();

    let document: AssetDocument =
        serde_json::from_str(input).context("parse design asset JSON")?;
    let (assets, single) = match document {
        AssetDocument::Many(assets) => (assets, false),
        AssetDocument::One(asset) => (vec![asset], true),
    };

    let mut unmatched = Vec::new();
    let normalized: Vec<DesignAsset> = assets
        .iter()
        .enumerate()
        .map(|(index, asset)| {
            let view = normalize_asset(asset, options);
            unmatched.extend(view.unmatched.iter().cloned().map(|value| (index, value)));
            view.to_asset(asset)
        })
        .collect();
    info!(
        assets = normalized.len(),
        unmatched = unmatched.len(),
        "normalized design assets"
    );

    let json = match normalized.as_slice() {
        [asset] if single => serde_json::to_string_pretty(asset),
        _ => serde_json::to_string_pretty(&normalized),
    }
    .context("serialize design assets")?;

    Ok(NormalizeReport {
        json,
        asset_count: normalized.len(),
        unmatched,
    })
}

/// Reads a file, or stdin when the path is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("read stdin")?;
        return Ok(buffer);
    }
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}
