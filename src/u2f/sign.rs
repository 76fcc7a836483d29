use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::types::{SignRequest, SignResponse};
use super::wire;
use crate::crypto;
use crate::error::TokenError;
use crate::store::KeyStore;

/// Handle a sign (authentication) request.
///
/// The signature embeds the counter value current at call time; the counter
/// is advanced as the final step, after every fallible operation, and is
/// never rolled back once the response exists.
pub(crate) fn handle_sign(
    store: &mut KeyStore,
    request: &SignRequest,
) -> Result<SignResponse, TokenError> {
    // First handle that decodes and is bound to this app id wins.
    // Undecodable entries do not match.
    let matched = request.registered_keys.iter().find_map(|entry| {
        let handle_hex = wire::base64url_to_hex(&entry.key_handle)?;
        store
            .is_valid_key_handle_for_app_id(&handle_hex, &request.app_id)
            .then_some(handle_hex)
    });
    let Some(handle_hex) = matched else {
        return Err(TokenError::DeviceIneligible);
    };

    // Re-verify the resolved credential against the request app id.
    {
        let credential = store
            .find_by_key_handle(&handle_hex)
            .ok_or(TokenError::DeviceIneligible)?;
        if credential.app_id != request.app_id {
            return Err(TokenError::DeviceIneligible);
        }
    }

    let client_data = wire::client_data_json(&request.challenge);
    let client_data_hash = crypto::sha256_hex(&client_data);
    let app_id_hash = crypto::sha256_hex(&request.app_id);

    let credential = store
        .find_by_key_handle_mut(&handle_hex)
        .ok_or(TokenError::DeviceIneligible)?;

    let counter_hex = wire::counter_to_hex(credential.counter);
    let base = wire::sign_signature_base(&app_id_hash, &counter_hex, &client_data_hash);
    let signature = crypto::sign_hex(&credential.private_key, &base)?;

    let signature_data = wire::hex_to_base64url(&format!(
        "{}{}{}",
        wire::USER_PRESENCE_BYTE,
        counter_hex,
        signature,
    ))?;
    let key_handle = wire::hex_to_base64url(&credential.key_handle)?;

    // Post-increment, wrapping after the threshold. Applied regardless of
    // whether the caller ever delivers the response.
    if credential.counter >= wire::COUNTER_WRAP {
        credential.counter = 0;
    } else {
        credential.counter += 1;
    }
    tracing::info!(
        app_id = %request.app_id,
        counter = credential.counter,
        "counter advanced"
    );

    Ok(SignResponse {
        client_data: STANDARD.encode(client_data.as_bytes()),
        signature_data,
        challenge: client_data,
        app_id: request.app_id.clone(),
        key_handle,
    })
}
