//! Structured text formats for record files

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CodecError;

/// Encoder/decoder for the on-disk text representation of a record.
///
/// Implementations must round-trip: decoding the bytes produced by
/// `encode` yields a value equal to the original.
pub trait Format {
    /// File extension for record files of this format, without the dot
    const EXTENSION: &'static str;

    /// Encode a value to its full file contents
    fn encode<T: Serialize>(&self, value: &T) -> std::result::Result<Vec<u8>, CodecError>;

    /// Decode a value from full file contents
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> std::result::Result<T, CodecError>;
}

/// Compact JSON, the default format
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl Format for Json {
    const EXTENSION: &'static str = "json";

    fn encode<T: Serialize>(&self, value: &T) -> std::result::Result<Vec<u8>, CodecError> {
        Ok(serde_json::to_vec(value)?)
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> std::result::Result<T, CodecError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Pretty-printed TOML
///
/// TOML requires a table at the top level, so scalar or sequence
/// records fail to encode with this format.
#[derive(Debug, Clone, Copy, Default)]
pub struct Toml;

impl Format for Toml {
    const EXTENSION: &'static str = "toml";

    fn encode<T: Serialize>(&self, value: &T) -> std::result::Result<Vec<u8>, CodecError> {
        Ok(toml::to_string_pretty(value)?.into_bytes())
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> std::result::Result<T, CodecError> {
        Ok(toml::from_str(std::str::from_utf8(bytes)?)?)
    }
}
