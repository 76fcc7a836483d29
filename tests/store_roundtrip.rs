use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use softu2f::{AttestationIdentity, Credential, KeyStore, RegisterRequest, U2fToken};

fn make_credential(app_id: &str, key_handle: &str, counter: u32) -> Credential {
    let pair = softu2f::crypto::generate_keypair();
    Credential {
        app_id: app_id.to_string(),
        key_handle: key_handle.to_string(),
        public_key: pair.public_hex,
        private_key: pair.private_hex,
        counter,
        generated: 1_700_000_000,
    }
}

#[test]
fn test_export_import_reproduces_lookups() {
    let mut original = KeyStore::new();
    original.add(make_credential("https://a.example", "01".repeat(16).as_str(), 0));
    original.add(make_credential("https://b.example", "02".repeat(16).as_str(), 7));

    let mut restored = KeyStore::new();
    restored.import_all(original.export_all());

    assert_eq!(restored.len(), original.len());
    for credential in original.export_all() {
        let by_handle = restored.find_by_key_handle(&credential.key_handle).unwrap();
        assert_eq!(by_handle, &credential);
        let by_app = restored.find_by_app_id(&credential.app_id).unwrap();
        assert_eq!(by_app, &credential);
        assert!(restored.is_valid_key_handle_for_app_id(&credential.key_handle, &credential.app_id));
    }
}

#[test]
fn test_restored_token_can_sign() {
    // Register on one token, persist, restore into a fresh token, sign there.
    let mut first = U2fToken::default();
    let registered = first
        .register(&RegisterRequest::new("https://example.com", "abc"))
        .unwrap();

    let exported = first.export_credentials();
    let mut second = U2fToken::with_credentials(AttestationIdentity::default(), exported);

    let handle_b64 = URL_SAFE_NO_PAD.encode(hex::decode(&registered.key_handle).unwrap());
    let response = second
        .sign(&softu2f::SignRequest::new(
            "https://example.com",
            "xyz",
            [handle_b64],
        ))
        .unwrap();

    let raw = URL_SAFE_NO_PAD.decode(&response.signature_data).unwrap();
    assert_eq!(&raw[1..5], &[0, 0, 0, 0], "restored counter starts where it left off");
    assert_eq!(
        second
            .store()
            .find_by_key_handle(&registered.key_handle)
            .unwrap()
            .counter,
        1
    );
}

#[test]
fn test_credential_record_serde_roundtrip() {
    // The record shape is the persistence contract; external stores move it
    // through JSON.
    let credential = make_credential("https://example.com", &"ab".repeat(16), 3);

    let json = serde_json::to_string(&credential).unwrap();
    let back: Credential = serde_json::from_str(&json).unwrap();
    assert_eq!(back, credential);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["appId"].is_string());
    assert!(value["keyHandle"].is_string());
    assert!(value["publicKey"].is_string());
    assert!(value["privateKey"].is_string());
    assert_eq!(value["counter"], 3);
}

#[test]
fn test_import_trusts_records_wholesale() {
    // Import performs no validation; whatever the collaborator hands over
    // becomes the collection.
    let mut store = KeyStore::new();
    store.add(make_credential("https://old.example", &"0a".repeat(16), 1));

    let replacement = vec![
        make_credential("https://new.example", &"0b".repeat(16), 9),
        make_credential("https://new2.example", &"0c".repeat(16), 0),
    ];
    store.import_all(replacement.clone());

    assert_eq!(store.export_all(), replacement);
    assert!(store.find_by_app_id("https://old.example").is_none());
}
