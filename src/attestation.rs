//! Fixed batch attestation identity.
//!
//! Every registration response is signed with the same manufacturer key and
//! carries the same X.509 certificate, modeling a batch-produced hardware
//! token. Relying parties may pin the certificate, so the embedded material
//! must never be regenerated; deployments that need different material
//! inject it through [`AttestationIdentity::new`].

use crate::crypto::{self, CryptoError};

/// ECDSA-secp256r1 attestation private key (32-byte scalar, hex).
const ATTESTATION_PRIVATE_KEY: &str =
    "d30c9cac7da2b4a7d71b002a40a3b59a96ca508ba9c7dc617d982c4b11d952e6";

/// Matching uncompressed SEC1 public key (hex).
const ATTESTATION_PUBLIC_KEY: &str =
    "04c3c91f252e20107b5e8deab1902098f7287071e45418b898ce5ff17ca725ae78c33cc701c0746011cbbbb58b08b61d20c05e75d501a3f8f7a1673fbe3263aebe";

/// SHA256withECDSA attestation certificate, ASN.1 DER (hex).
///
/// Subject: C=DE, O=virtual-u2f-manufacturer, ST=Berlin, CN=virtual-u2f-v0.0.1
const ATTESTATION_CERTIFICATE: &str =
    "308201b430820158a003020102020101300c06082a8648ce3d04030205003061310b300906035504061302444531263024060355040a0c1d556e7472757374776f72746879204341204f7267616e69736174696f6e310f300d06035504080c064265726c696e3119301706035504030c10556e7472757374776f727468792043413022180f32303134303932343132303030305a180f32313134303932343132303030305a305e310b30090603550406130244453121301f060355040a0c187669727475616c2d7532662d6d616e756661637475726572310f300d06035504080c064265726c696e311b301906035504030c127669727475616c2d7532662d76302e302e313059301306072a8648ce3d020106082a8648ce3d03010703420004c3c91f252e20107b5e8deab1902098f7287071e45418b898ce5ff17ca725ae78c33cc701c0746011cbbbb58b08b61d20c05e75d501a3f8f7a1673fbe3263aebe300c06082a8648ce3d040302050003480030450221008eb92057a1f3414f1b791a58e607aba4661c9361fbc4ba89655c8a3bec1068da02201590a876f08047df608e23b22aa0aad24b0d49c9753300af32b69073f0a1a4db";

/// Process-wide attestation material: one key pair plus certificate,
/// initialized once and shared read-only by all registration operations.
#[derive(Debug, Clone)]
pub struct AttestationIdentity {
    private_key: String,
    public_key: String,
    certificate: String,
}

impl AttestationIdentity {
    /// Build an identity from externally supplied hex material.
    ///
    /// The private key must parse as a secp256r1 scalar and must derive the
    /// given public key; the certificate only has to be valid hex (its
    /// contents are opaque to the token).
    pub fn new(
        private_key_hex: &str,
        public_key_hex: &str,
        certificate_hex: &str,
    ) -> Result<Self, CryptoError> {
        let derived = crypto::public_from_private(private_key_hex)?;
        if derived != public_key_hex {
            return Err(CryptoError::InvalidPublicKey);
        }
        hex::decode(certificate_hex).map_err(|e| CryptoError::InvalidHex(e.to_string()))?;

        Ok(Self {
            private_key: private_key_hex.to_string(),
            public_key: public_key_hex.to_string(),
            certificate: certificate_hex.to_string(),
        })
    }

    pub fn private_key_hex(&self) -> &str {
        &self.private_key
    }

    pub fn public_key_hex(&self) -> &str {
        &self.public_key
    }

    pub fn certificate_hex(&self) -> &str {
        &self.certificate
    }
}

impl Default for AttestationIdentity {
    fn default() -> Self {
        Self {
            private_key: ATTESTATION_PRIVATE_KEY.to_string(),
            public_key: ATTESTATION_PUBLIC_KEY.to_string(),
            certificate: ATTESTATION_CERTIFICATE.to_string(),
        }
    }
}
