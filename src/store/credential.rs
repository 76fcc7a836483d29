use serde::{Deserialize, Serialize};

/// One registered (application id, key handle) binding.
///
/// Immutable after creation except for `counter`. The record shape is the
/// persistence contract: external stores serialize it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    /// Relying-party identifier; unique among stored credentials.
    pub app_id: String,
    /// 16 random bytes chosen at registration, hex-encoded (32 chars).
    /// Globally unique, never reused.
    pub key_handle: String,
    /// Uncompressed SEC1 public key, hex.
    pub public_key: String,
    /// secp256r1 private scalar, hex. Generated per registration, never rotated.
    pub private_key: String,
    /// Signature counter; wraps to 0 after reaching 65535.
    pub counter: u32,
    /// Creation time, Unix seconds. Informational only.
    pub generated: u64,
}
