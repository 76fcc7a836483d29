//! Byte-level protocol construction.
//!
//! The U2F raw message formats are assembled as lowercase hex strings and
//! only converted to bytes at the base64url boundary, mirroring how the
//! key material flows through [`crate::crypto`].

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Serialize;

use crate::error::TokenError;

/// Reserved "future use" byte leading the registration signature base string.
pub(crate) const FUTURE_USE_BYTE: &str = "00";
/// Reserved byte leading a registration response message.
pub(crate) const RESERVED_BYTE: &str = "05";
/// Flag asserting local user interaction; always set in this emulation.
pub(crate) const USER_PRESENCE_BYTE: &str = "01";

/// Counter wrap threshold: the counter resets to 0 after reaching this
/// value rather than using the full 4-byte range.
pub(crate) const COUNTER_WRAP: u32 = 65535;

#[derive(Serialize)]
struct ClientData<'a> {
    challenge: &'a str,
}

/// Canonical client data JSON: `{"challenge":"..."}`, nothing else.
/// This exact byte sequence is hashed and returned base64-encoded.
pub(crate) fn client_data_json(challenge: &str) -> String {
    serde_json::to_string(&ClientData { challenge })
        .expect("client data serialization is infallible")
}

/// Registration signature base string:
/// `0x00 || appIdHash || clientDataHash || keyHandle || publicKey`.
pub(crate) fn registration_signature_base(
    app_id_hash: &str,
    client_data_hash: &str,
    key_handle: &str,
    public_key: &str,
) -> String {
    format!("{FUTURE_USE_BYTE}{app_id_hash}{client_data_hash}{key_handle}{public_key}")
}

/// Sign signature base string:
/// `appIdHash || 0x01 || counter || clientDataHash`.
pub(crate) fn sign_signature_base(
    app_id_hash: &str,
    counter_hex: &str,
    client_data_hash: &str,
) -> String {
    format!("{app_id_hash}{USER_PRESENCE_BYTE}{counter_hex}{client_data_hash}")
}

/// Counter as a 4-byte big-endian field: 8 zero-padded hex digits.
pub(crate) fn counter_to_hex(counter: u32) -> String {
    format!("{counter:08x}")
}

/// One-byte hex representation of a decimal value. Values that do not fit
/// a single byte are rejected.
pub(crate) fn decimal_to_hex_byte(value: usize) -> Result<String, TokenError> {
    if value > 255 {
        return Err(TokenError::InvalidRequest(format!(
            "value {value} exceeds a byte"
        )));
    }
    Ok(format!("{value:02x}"))
}

/// Length prefix for a hex-encoded key handle: one byte counting raw bytes,
/// not hex characters.
pub(crate) fn key_handle_length_byte(key_handle_hex: &str) -> Result<String, TokenError> {
    decimal_to_hex_byte(key_handle_hex.len() / 2)
}

/// Decode hex and re-encode as websafe base64: standard alphabet with
/// `+` -> `-`, `/` -> `_` and padding stripped. Odd-length input is
/// right-padded with a `0` nibble first.
pub(crate) fn hex_to_base64url(hex_str: &str) -> Result<String, TokenError> {
    let padded;
    let even = if hex_str.len() % 2 != 0 {
        padded = format!("{hex_str}0");
        padded.as_str()
    } else {
        hex_str
    };
    let bytes = hex::decode(even)
        .map_err(|e| TokenError::InvalidRequest(format!("invalid hex: {e}")))?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

/// Decode websafe base64 to hex. `None` when the input is not valid
/// base64url; callers treat such entries as non-matching.
pub(crate) fn base64url_to_hex(data: &str) -> Option<String> {
    URL_SAFE_NO_PAD.decode(data).ok().map(hex::encode)
}
