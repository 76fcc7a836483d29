pub mod credential;
pub mod index;

pub use credential::Credential;
pub use index::KeyStore;
