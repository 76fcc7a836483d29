use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::RngCore;

use super::types::{RegisterRequest, RegisterResponse};
use super::wire;
use crate::attestation::AttestationIdentity;
use crate::crypto;
use crate::error::TokenError;
use crate::store::{Credential, KeyStore};

/// Handle a registration request.
///
/// The new credential is persisted only after the full response message has
/// been assembled; no failure path leaves partial state behind.
pub(crate) fn handle_register(
    store: &mut KeyStore,
    attestation: &AttestationIdentity,
    request: &RegisterRequest,
) -> Result<RegisterResponse, TokenError> {
    let challenge = request
        .register_requests
        .first()
        .map(|entry| entry.challenge.as_str())
        .ok_or_else(|| TokenError::InvalidRequest("registerRequests is empty".into()))?;

    if store.find_by_app_id(&request.app_id).is_some() {
        return Err(TokenError::DuplicateApplication(request.app_id.clone()));
    }

    let key_pair = crypto::generate_keypair();

    let client_data = wire::client_data_json(challenge);
    let client_data_hash = crypto::sha256_hex(&client_data);
    let app_id_hash = crypto::sha256_hex(&request.app_id);

    let key_handle = generate_key_handle();
    let key_handle_length = wire::key_handle_length_byte(&key_handle)?;

    let base = wire::registration_signature_base(
        &app_id_hash,
        &client_data_hash,
        &key_handle,
        &key_pair.public_hex,
    );
    let signature = crypto::sign_hex(attestation.private_key_hex(), &base)?;

    let response_hex = format!(
        "{}{}{}{}{}{}",
        wire::RESERVED_BYTE,
        key_pair.public_hex,
        key_handle_length,
        key_handle,
        attestation.certificate_hex(),
        signature,
    );
    let registration_data = wire::hex_to_base64url(&response_hex)?;

    store.add(Credential {
        app_id: request.app_id.clone(),
        key_handle: key_handle.clone(),
        public_key: key_pair.public_hex,
        private_key: key_pair.private_hex,
        counter: 0,
        generated: unix_now(),
    });
    tracing::info!(app_id = %request.app_id, key_handle = %key_handle, "credential registered");

    Ok(RegisterResponse {
        registration_data,
        client_data: STANDARD.encode(client_data.as_bytes()),
        key_handle,
    })
}

/// 16 random bytes, hex-encoded.
fn generate_key_handle() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
