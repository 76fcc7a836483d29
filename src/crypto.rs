//! ECDSA-secp256r1 and SHA-256 primitives.
//!
//! All key material crosses this boundary as lowercase hex strings, the
//! format the protocol layer concatenates into signature base strings.
//! Signatures are ASN.1 DER (SHA256withECDSA).

use p256::ecdsa::signature::{Signer, Verifier};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    #[error("invalid private key")]
    InvalidPrivateKey,
    #[error("invalid public key")]
    InvalidPublicKey,
    #[error("invalid signature")]
    InvalidSignature,
    #[error("signing failed: {0}")]
    Signing(String),
    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

/// A freshly generated secp256r1 key pair.
///
/// `public_hex` is the 65-byte uncompressed SEC1 point (130 hex chars,
/// leading `04`); `private_hex` is the 32-byte scalar (64 hex chars).
#[derive(Debug, Clone)]
pub struct KeyPair {
    pub public_hex: String,
    pub private_hex: String,
}

/// Generate a new random secp256r1 key pair.
pub fn generate_keypair() -> KeyPair {
    let signing_key = SigningKey::random(&mut OsRng);
    let verifying_key = signing_key.verifying_key();

    KeyPair {
        public_hex: hex::encode(verifying_key.to_encoded_point(false).as_bytes()),
        private_hex: hex::encode(signing_key.to_bytes()),
    }
}

/// Sign the bytes behind `message_hex` with the given private key.
///
/// The message is hashed with SHA-256 by the signing operation itself
/// (SHA256withECDSA). Returns the DER-encoded signature as hex.
pub fn sign_hex(private_hex: &str, message_hex: &str) -> Result<String, CryptoError> {
    let signing_key = parse_private_key(private_hex)?;
    let message = decode_hex(message_hex)?;

    let signature: Signature = signing_key
        .try_sign(&message)
        .map_err(|e| CryptoError::Signing(e.to_string()))?;

    Ok(hex::encode(signature.to_der().to_bytes()))
}

/// Verify a DER signature (hex) over the bytes behind `message_hex`.
pub fn verify_hex(
    public_hex: &str,
    message_hex: &str,
    signature_hex: &str,
) -> Result<(), CryptoError> {
    let public = decode_hex(public_hex)?;
    let verifying_key =
        VerifyingKey::from_sec1_bytes(&public).map_err(|_| CryptoError::InvalidPublicKey)?;

    let signature_der = decode_hex(signature_hex)?;
    let signature =
        Signature::from_der(&signature_der).map_err(|_| CryptoError::InvalidSignature)?;

    let message = decode_hex(message_hex)?;
    verifying_key
        .verify(&message, &signature)
        .map_err(|_| CryptoError::InvalidSignature)
}

/// SHA-256 of a UTF-8 string, as a 64-char hex digest.
pub fn sha256_hex(data: &str) -> String {
    hex::encode(Sha256::digest(data.as_bytes()))
}

/// Derive the uncompressed SEC1 public key (hex) from a private scalar (hex).
pub fn public_from_private(private_hex: &str) -> Result<String, CryptoError> {
    let signing_key = parse_private_key(private_hex)?;
    Ok(hex::encode(
        signing_key.verifying_key().to_encoded_point(false).as_bytes(),
    ))
}

fn parse_private_key(private_hex: &str) -> Result<SigningKey, CryptoError> {
    let bytes = decode_hex(private_hex)?;
    let scalar: [u8; 32] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| CryptoError::InvalidPrivateKey)?;
    SigningKey::from_bytes(&scalar.into()).map_err(|_| CryptoError::InvalidPrivateKey)
}

fn decode_hex(data: &str) -> Result<Vec<u8>, CryptoError> {
    hex::decode(data).map_err(|e| CryptoError::InvalidHex(e.to_string()))
}
