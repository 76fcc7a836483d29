//! Request and response shapes.
//!
//! The canonical shapes match the U2F JavaScript API messages; the legacy
//! shapes mirror the older reference-code layout and are normalized into
//! the canonical types by the `From` adapters before they reach the
//! protocol operations. Field names serialize with the original wire
//! spelling (`appId`, `registerRequests`, ...).

use serde::{Deserialize, Serialize};

/// One entry of `registerRequests`: the challenge to embed in client data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterChallenge {
    pub challenge: String,
}

/// One entry of `registeredKeys`: a websafe-base64 key handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredKey {
    pub key_handle: String,
}

/// Canonical registration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub app_id: String,
    pub register_requests: Vec<RegisterChallenge>,
    #[serde(default)]
    pub registered_keys: Vec<RegisteredKey>,
}

impl RegisterRequest {
    pub fn new(app_id: impl Into<String>, challenge: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            register_requests: vec![RegisterChallenge {
                challenge: challenge.into(),
            }],
            registered_keys: Vec::new(),
        }
    }
}

/// Canonical sign request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignRequest {
    pub app_id: String,
    pub challenge: String,
    #[serde(default)]
    pub registered_keys: Vec<RegisteredKey>,
}

impl SignRequest {
    pub fn new(
        app_id: impl Into<String>,
        challenge: impl Into<String>,
        key_handles: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            challenge: challenge.into(),
            registered_keys: key_handles
                .into_iter()
                .map(|key_handle| RegisteredKey { key_handle })
                .collect(),
        }
    }
}

/// Older reference-code register shape: the challenge sits at the top level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyRegisterRequest {
    pub app_id: String,
    pub challenge: String,
}

impl From<LegacyRegisterRequest> for RegisterRequest {
    fn from(legacy: LegacyRegisterRequest) -> Self {
        RegisterRequest::new(legacy.app_id, legacy.challenge)
    }
}

/// Older reference-code sign shape: a single bare key handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacySignRequest {
    pub app_id: String,
    pub challenge: String,
    pub key_handle: String,
}

impl From<LegacySignRequest> for SignRequest {
    fn from(legacy: LegacySignRequest) -> Self {
        SignRequest::new(legacy.app_id, legacy.challenge, [legacy.key_handle])
    }
}

/// Registration response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    /// websafe-base64(raw registration response message)
    pub registration_data: String,
    /// base64(UTF8(client data))
    pub client_data: String,
    /// Unencoded hex key handle, for convenience.
    pub key_handle: String,
}

/// Sign response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignResponse {
    /// base64(UTF8(client data))
    pub client_data: String,
    /// websafe-base64(raw authentication response message)
    pub signature_data: String,
    /// The client data string the signature covers.
    pub challenge: String,
    pub app_id: String,
    /// websafe-base64 key handle.
    pub key_handle: String,
}

/// Tagged request envelope; tags are the extension message type names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    #[serde(rename = "u2f_register_request")]
    Register(RegisterRequest),
    #[serde(rename = "u2f_sign_request")]
    Sign(SignRequest),
}

/// Tagged response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Response {
    #[serde(rename = "u2f_register_response")]
    Register(RegisterResponse),
    #[serde(rename = "u2f_sign_response")]
    Sign(SignResponse),
}
