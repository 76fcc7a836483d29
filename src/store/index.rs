use super::Credential;

/// Ordered collection of registered credentials.
///
/// Uniqueness of application ids and key handles is enforced by the caller
/// before insertion, not here. Access is single-writer and synchronous; a
/// multi-threaded host serializes operations on the owning token.
#[derive(Debug, Clone, Default)]
pub struct KeyStore {
    keys: Vec<Credential>,
}

impl KeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a credential. No uniqueness check.
    pub fn add(&mut self, credential: Credential) {
        self.keys.push(credential);
    }

    /// First credential with this exact key handle.
    pub fn find_by_key_handle(&self, key_handle: &str) -> Option<&Credential> {
        self.keys.iter().find(|key| key.key_handle == key_handle)
    }

    pub(crate) fn find_by_key_handle_mut(&mut self, key_handle: &str) -> Option<&mut Credential> {
        self.keys.iter_mut().find(|key| key.key_handle == key_handle)
    }

    /// First credential bound to this exact application id.
    pub fn find_by_app_id(&self, app_id: &str) -> Option<&Credential> {
        self.keys.iter().find(|key| key.app_id == app_id)
    }

    /// Whether `key_handle` belongs to a credential usable by `app_id`.
    ///
    /// True only for the exact pair bound at registration.
    pub fn is_valid_key_handle_for_app_id(&self, key_handle: &str, app_id: &str) -> bool {
        match self.find_by_key_handle(key_handle) {
            Some(key) => key.app_id == app_id,
            None => false,
        }
    }

    /// Ordered snapshot for the external persistence collaborator.
    pub fn export_all(&self) -> Vec<Credential> {
        self.keys.clone()
    }

    /// Replace the whole collection. The incoming records are trusted;
    /// no validation is performed.
    pub fn import_all(&mut self, credentials: Vec<Credential>) {
        self.keys = credentials;
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
