//! Canonical hashing and seed derivation.
//!
//! This module implements the determinism policy for Git Rewind:
//! - User seeds derived from (username, year) with BLAKE3
//! - Per-consumer stream seeds derived from the user seed
//! - Canonical JSON (RFC 8785 style) + BLAKE3 hashes of generated outputs

use serde::Serialize;

use crate::error::ModelError;

/// Derives the seed for a user's year.
///
/// ```text
/// seed = truncate_u32(BLAKE3(username || 0x00 || year_le))
/// ```
///
/// # Example
/// ```
/// use gitrewind_model::hash::derive_user_seed;
///
/// assert_eq!(derive_user_seed("octocat", 2024), derive_user_seed("octocat", 2024));
/// assert_ne!(derive_user_seed("octocat", 2024), derive_user_seed("octocat", 2023));
/// ```
pub fn derive_user_seed(username: &str, year: i32) -> u32 {
    let mut input = Vec::with_capacity(username.len() + 5);
    input.extend_from_slice(username.as_bytes());
    input.push(0);
    input.extend_from_slice(&year.to_le_bytes());
    truncate_hash(&input)
}

/// Derives the seed of an independent random stream from a base seed.
///
/// ```text
/// stream_seed = truncate_u32(BLAKE3(base_seed_le || 0x00 || salt))
/// ```
pub fn derive_stream_seed(base_seed: u32, salt: &str) -> u32 {
    let mut input = Vec::with_capacity(5 + salt.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.push(0);
    input.extend_from_slice(salt.as_bytes());
    truncate_hash(&input)
}

fn truncate_hash(input: &[u8]) -> u32 {
    let hash = blake3::hash(input);
    let bytes = hash.as_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Computes the canonical BLAKE3 hash of any serializable output.
///
/// ```text
/// hash = hex(BLAKE3(canonical_json(value)))
/// ```
///
/// # Returns
/// * A 64-character lowercase hexadecimal string
pub fn canonical_hash<T: Serialize>(value: &T) -> Result<String, ModelError> {
    let value = serde_json::to_value(value)?;
    Ok(canonical_value_hash(&value))
}

/// Computes the canonical BLAKE3 hash of a JSON value.
pub fn canonical_value_hash(value: &serde_json::Value) -> String {
    let canonical = canonicalize_json(value);
    blake3::hash(canonical.as_bytes()).to_hex().to_string()
}

/// Canonicalizes a JSON value: sorted object keys, no whitespace, minimal
/// number and string formatting.
pub fn canonicalize_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => format_number(n),
        serde_json::Value::String(s) => format_string(s),
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(canonicalize_json).collect();
            format!("[{}]", items.join(","))
        }
        serde_json::Value::Object(obj) => {
            let mut entries: Vec<(&String, &serde_json::Value)> = obj.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            let pairs: Vec<String> = entries
                .into_iter()
                .map(|(k, v)| format!("{}:{}", format_string(k), canonicalize_json(v)))
                .collect();
            format!("{{{}}}", pairs.join(","))
        }
    }
}

fn format_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() => {
            if f == 0.0 {
                return "0".to_string();
            }
            if f.fract() == 0.0 && f.abs() < 1e15 {
                return format!("{}", f as i64);
            }
            format!("{}", f)
        }
        _ => "null".to_string(),
    }
}

fn format_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c < '\x20' => result.push_str(&format!("\\u{:04x}", c as u32)),
            c => result.push(c),
        }
    }
    result.push('"');
    result
}
