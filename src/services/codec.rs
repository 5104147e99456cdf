//! Palette encodings: share tokens, share URLs, export and import files.
//!
//! All decoders are all-or-nothing. A payload either yields a complete color
//! list or an error, never a partial palette.

use anyhow::{Context, Result};
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use base64::Engine as _;
use regex::Regex;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};
use url::Url;

use crate::constants::SHARE_PARAM;
use crate::error::{PaletteError, PaletteResult};
use crate::models::RgbColor;

static STRICT_HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("static hex pattern compiles"));

/// Returns true if `value` is exactly `#RRGGBB` (hex digits in either case).
pub fn is_strict_hex(value: &str) -> bool {
    STRICT_HEX.is_match(value)
}

fn hex_array(colors: &[RgbColor]) -> Value {
    Value::from(colors.iter().map(RgbColor::to_hex).collect::<Vec<_>>())
}

/// Encodes colors as base64 of a compact JSON array of hex strings.
///
/// # Examples
///
/// ```
/// use paleta::models::RgbColor;
/// use paleta::services::codec::{decode_share_token, encode_share_token};
///
/// let colors = vec![RgbColor::new(255, 0, 0), RgbColor::new(0, 0, 0)];
/// let token = encode_share_token(&colors);
/// assert_eq!(decode_share_token(&token).unwrap(), colors);
/// ```
pub fn encode_share_token(colors: &[RgbColor]) -> String {
    STANDARD.encode(hex_array(colors).to_string())
}

/// Decodes a share token produced by [`encode_share_token`].
///
/// The payload must be a JSON array of strings, and every string must parse
/// as a hex color.
pub fn decode_share_token(token: &str) -> PaletteResult<Vec<RgbColor>> {
    let token = token.trim();
    let bytes = STANDARD
        .decode(token)
        .or_else(|_| STANDARD_NO_PAD.decode(token.trim_end_matches('=')))
        .map_err(|e| PaletteError::decode(format!("not valid base64 ({e})")))?;

    let value: Value = serde_json::from_slice(&bytes)
        .map_err(|e| PaletteError::decode(format!("not valid JSON ({e})")))?;

    let Value::Array(items) = value else {
        return Err(PaletteError::decode("expected a JSON array of colors"));
    };

    let colors = items
        .iter()
        .map(|item| {
            let text = item
                .as_str()
                .ok_or_else(|| PaletteError::decode("every entry must be a string"))?;
            RgbColor::from_hex(text).map_err(PaletteError::decode)
        })
        .collect::<PaletteResult<Vec<_>>>()?;

    debug!(count = colors.len(), "Decoded shared palette");
    Ok(colors)
}

/// Parses an absolute `http` or `https` URL.
pub fn parse_link(url: &str) -> PaletteResult<Url> {
    let parsed = Url::parse(url.trim())
        .map_err(|e| PaletteError::InvalidUrl(format!("{url} ({e})")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(PaletteError::InvalidUrl(format!(
            "{url} (scheme must be http or https, got {other})"
        ))),
    }
}

fn share_token(link: &Url) -> Option<String> {
    link.query_pairs()
        .find(|(key, _)| key == SHARE_PARAM)
        // Form decoding turns a raw '+' into a space. Base64 never contains spaces.
        .map(|(_, value)| value.replace(' ', "+"))
}

fn remove_share_param(link: &mut Url) {
    let kept: Vec<(String, String)> = link
        .query_pairs()
        .filter(|(key, _)| key != SHARE_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    if kept.is_empty() {
        link.set_query(None);
    } else {
        link.query_pairs_mut().clear().extend_pairs(kept);
    }
}

/// Removes the share parameter from `url`, keeping every other parameter.
pub fn strip_share_param(url: &str) -> PaletteResult<String> {
    let mut link = parse_link(url)?;
    remove_share_param(&mut link);
    Ok(link.into())
}

/// Builds a link that carries `colors` in the share parameter of `base_url`.
///
/// An existing share parameter is replaced.
pub fn share_url(base_url: &str, colors: &[RgbColor]) -> PaletteResult<String> {
    let mut link = parse_link(base_url)?;
    remove_share_param(&mut link);
    link.query_pairs_mut()
        .append_pair(SHARE_PARAM, &encode_share_token(colors));
    Ok(link.into())
}

/// Extracts the share token from a URL's query string, if present.
pub fn token_from_url(url: &str) -> Option<String> {
    Url::parse(url.trim()).ok().as_ref().and_then(share_token)
}

/// Splits a share link into its token and the link without the share parameter.
///
/// Returns `None` when `url` is not a URL or carries no share parameter.
pub fn split_shared_link(url: &str) -> Option<(String, String)> {
    let mut link = Url::parse(url.trim()).ok()?;
    let token = share_token(&link)?;
    remove_share_param(&mut link);
    Some((token, link.into()))
}

/// Decodes either a full share URL or a bare token.
pub fn decode_shared(input: &str) -> PaletteResult<Vec<RgbColor>> {
    let input = input.trim();
    match Url::parse(input) {
        Ok(link) => {
            let token = share_token(&link).ok_or_else(|| {
                PaletteError::decode(format!("link has no '{SHARE_PARAM}' parameter"))
            })?;
            decode_share_token(&token)
        }
        // Base64 has no ':', so a token never parses as a URL.
        Err(_) => decode_share_token(input),
    }
}

/// Serializes colors as a pretty-printed JSON array of hex strings.
pub fn export_json(colors: &[RgbColor]) -> String {
    format!("{:#}", hex_array(colors))
}

/// Writes [`export_json`] output to `path`.
pub fn export_to_file(path: &Path, colors: &[RgbColor]) -> Result<()> {
    fs::write(path, export_json(colors))
        .with_context(|| format!("Failed to write palette to {}", path.display()))?;
    info!(path = %path.display(), count = colors.len(), "Exported palette");
    Ok(())
}

/// Parses an import document.
///
/// The document must be a JSON array whose entries are all `#RRGGBB`
/// strings. Any other shape rejects the whole document.
pub fn import_json(text: &str) -> PaletteResult<Vec<RgbColor>> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| PaletteError::format(format!("not valid JSON ({e})")))?;

    let Value::Array(items) = value else {
        return Err(PaletteError::format("expected a JSON array of hex colors"));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item.as_str() {
            Some(text) if is_strict_hex(text) => RgbColor::from_hex(text).map_err(PaletteError::format),
            _ => Err(PaletteError::format(format!(
                "entry {} is not a #RRGGBB color: {item}",
                index + 1
            ))),
        })
        .collect()
}

/// Reads and parses an import file. Unreadable files are format errors too.
pub fn import_from_file(path: &Path) -> PaletteResult<Vec<RgbColor>> {
    let text = fs::read_to_string(path)
        .map_err(|e| PaletteError::format(format!("could not read {} ({e})", path.display())))?;
    let colors = import_json(&text)?;
    info!(path = %path.display(), count = colors.len(), "Imported palette");
    Ok(colors)
}
