use sha2::{Digest, Sha256};

const UNNAMED: &str = "wildflower";

/// Stable RNG seed for a garden name: the first eight bytes of its SHA-256.
///
/// The same repository therefore grows the same garden on every run.
pub fn derive_seed(name: Option<&str>) -> u64 {
    let digest = Sha256::digest(name.unwrap_or(UNNAMED).as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}
