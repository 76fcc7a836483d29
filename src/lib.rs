//! Software emulation of a FIDO/U2F security token.
//!
//! Performs device-side registration and authentication against a relying
//! party, producing the exact binary responses a hardware token would
//! return: U2F raw registration messages signed by a fixed batch
//! attestation key, and authentication assertions with a monotonic
//! signature counter. Transport, persistence medium and user-presence UI
//! are external collaborators; the persistence boundary is the
//! [`Credential`] export/import pair.

pub mod attestation;
pub mod crypto;
pub mod error;
pub mod store;
pub mod token;
pub mod u2f;

pub use attestation::AttestationIdentity;
pub use error::{ErrorCode, TokenError};
pub use store::{Credential, KeyStore};
pub use token::U2fToken;
pub use u2f::types::{
    LegacyRegisterRequest, LegacySignRequest, RegisterChallenge, RegisterRequest,
    RegisterResponse, RegisteredKey, Request, Response, SignRequest, SignResponse,
};
