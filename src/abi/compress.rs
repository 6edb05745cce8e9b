//! ABI payload compression
//!
//! Payload format: compact JSON of the ABI, deflated with zlib framing at the
//! default level, then encoded as standard padded base64.

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::{Read, Write};

use crate::abi::Abi;
use crate::errors::UpgradeError;

/// Largest inflated payload `decompress_abi` accepts (16 MiB)
pub const MAX_INFLATED_ABI_SIZE: u64 = 16 * 1024 * 1024;

/// Compress an ABI into its transport payload
pub fn compress_abi(abi: &Abi) -> Result<String, UpgradeError> {
    let json = serde_json::to_string(abi)
        .map_err(|e| UpgradeError::Serialization(format!("Failed to serialize ABI: {}", e)))?;

    let deflate_error =
        |e: std::io::Error| UpgradeError::Serialization(format!("Failed to deflate ABI: {}", e));
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(json.as_bytes()).map_err(deflate_error)?;
    let compressed = encoder.finish().map_err(deflate_error)?;

    Ok(BASE64_STANDARD.encode(compressed))
}

/// Decode a transport payload back into the ABI it was built from
pub fn decompress_abi(payload: &str) -> Result<Abi, UpgradeError> {
    let compressed = BASE64_STANDARD
        .decode(payload.trim())
        .map_err(|e| UpgradeError::Serialization(format!("Invalid base64 payload: {}", e)))?;

    let mut json = String::new();
    ZlibDecoder::new(compressed.as_slice())
        .take(MAX_INFLATED_ABI_SIZE + 1)
        .read_to_string(&mut json)
        .map_err(|e| UpgradeError::Serialization(format!("Failed to inflate payload: {}", e)))?;
    if json.len() as u64 > MAX_INFLATED_ABI_SIZE {
        return Err(UpgradeError::Serialization(format!(
            "Inflated payload exceeds {} bytes",
            MAX_INFLATED_ABI_SIZE
        )));
    }

    Abi::from_json_str(&json)
        .map_err(|e| UpgradeError::Serialization(format!("Payload is not an ABI: {}", e)))
}
