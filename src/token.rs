use crate::attestation::AttestationIdentity;
use crate::error::TokenError;
use crate::store::{Credential, KeyStore};
use crate::u2f::types::{
    RegisterRequest, RegisterResponse, Request, Response, SignRequest, SignResponse,
};
use crate::u2f::{register, sign};

/// A software U2F token: one attestation identity plus the credentials it
/// has issued.
///
/// The token owns the [`KeyStore`] exclusively and every operation takes
/// `&mut self`, so the read-check-mutate sequences (duplicate check then
/// insert; counter read then increment) cannot interleave. A multi-threaded
/// host serializes access with a single lock around the token.
#[derive(Debug, Default)]
pub struct U2fToken {
    store: KeyStore,
    attestation: AttestationIdentity,
}

impl U2fToken {
    pub fn new(attestation: AttestationIdentity) -> Self {
        Self {
            store: KeyStore::new(),
            attestation,
        }
    }

    /// Restore a token from previously exported credentials.
    pub fn with_credentials(
        attestation: AttestationIdentity,
        credentials: Vec<Credential>,
    ) -> Self {
        let mut store = KeyStore::new();
        store.import_all(credentials);
        Self { store, attestation }
    }

    /// Register a new credential for the request's application id.
    pub fn register(&mut self, request: &RegisterRequest) -> Result<RegisterResponse, TokenError> {
        register::handle_register(&mut self.store, &self.attestation, request)
    }

    /// Produce an authentication assertion for a previously registered key.
    pub fn sign(&mut self, request: &SignRequest) -> Result<SignResponse, TokenError> {
        sign::handle_sign(&mut self.store, request)
    }

    /// Dispatch a tagged request envelope to the matching operation.
    pub fn handle_request(&mut self, request: &Request) -> Result<Response, TokenError> {
        match request {
            Request::Register(register) => self.register(register).map(Response::Register),
            Request::Sign(sign) => self.sign(sign).map(Response::Sign),
        }
    }

    /// Ordered credential snapshot for the external persistence collaborator.
    pub fn export_credentials(&self) -> Vec<Credential> {
        self.store.export_all()
    }

    /// Replace all credentials with records from the external store.
    pub fn import_credentials(&mut self, credentials: Vec<Credential>) {
        self.store.import_all(credentials);
    }

    /// Read-only view of the credential collection.
    pub fn store(&self) -> &KeyStore {
        &self.store
    }
}
