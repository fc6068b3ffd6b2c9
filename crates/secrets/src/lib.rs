//! At-rest encryption for platform API credentials.
//!
//! AES-256-GCM with a fresh 16-byte random nonce per encryption and a
//! 16-byte authentication tag, serialized as `nonce:tag:ciphertext` with
//! each field standard base64. The key is threaded in **once at
//! construction**; nothing here reads the environment.
//!
//! Error taxonomy matters to callers: a bad key is [`Error::Config`]
//! (fatal, fix the deployment), while a value that fails to decrypt is
//! [`Error::Corrupt`] (wrong key or tampered ciphertext, never silently
//! decrypted into garbage).

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::aes::Aes256;
use aes_gcm::{AesGcm, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use ck_domain::{Error, Result};

/// AES-256-GCM with the 16-byte nonce the serialized format mandates.
type TokenAead = AesGcm<Aes256, U16>;

const KEY_HEX_LEN: usize = 64; // 32 bytes
const NONCE_LEN: usize = 16;
const TAG_LEN: usize = 16;

/// Symmetric cipher for platform credentials.
pub struct TokenCipher {
    cipher: TokenAead,
}

impl TokenCipher {
    /// Build from a 64-hex-character (32-byte) key.
    pub fn new(key_hex: &str) -> Result<Self> {
        if key_hex.len() != KEY_HEX_LEN {
            return Err(Error::Config(
                "encryption key must be 64 hex characters (32 bytes)".to_string(),
            ));
        }
        let key_bytes = hex::decode(key_hex)
            .map_err(|_| Error::Config("encryption key is not valid hex".to_string()))?;
        let cipher = TokenAead::new_from_slice(&key_bytes)
            .map_err(|_| Error::Config("encryption key has the wrong length".to_string()))?;
        Ok(Self { cipher })
    }

    /// Build from the secrets section of the config. A missing key is a
    /// configuration error at this first use, not at process start.
    pub fn from_config(secrets: &ck_domain::config::SecretsConfig) -> Result<Self> {
        let key = secrets
            .encryption_key
            .as_deref()
            .ok_or_else(|| Error::Config("encryption key not configured".to_string()))?;
        Self::new(key)
    }

    /// Encrypt a credential. Empty input passes through as empty so
    /// unset credentials stay unset.
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        if plaintext.is_empty() {
            return Ok(String::new());
        }

        let nonce = TokenAead::generate_nonce(&mut OsRng);
        let mut sealed = self
            .cipher
            .encrypt(&nonce, plaintext.as_bytes())
            .map_err(|_| Error::Config("encryption failed".to_string()))?;

        // The AEAD appends the tag; the serialized form keeps it separate.
        let tag = sealed.split_off(sealed.len() - TAG_LEN);
        Ok(format!(
            "{}:{}:{}",
            STANDARD.encode(nonce),
            STANDARD.encode(tag),
            STANDARD.encode(sealed)
        ))
    }

    /// Decrypt a serialized credential. Any structural defect or tag
    /// mismatch surfaces as [`Error::Corrupt`].
    pub fn decrypt(&self, serialized: &str) -> Result<String> {
        if serialized.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = serialized.split(':').collect();
        if parts.len() != 3 {
            return Err(Error::Corrupt(format!(
                "expected nonce:tag:ciphertext, got {} fields",
                parts.len()
            )));
        }

        let nonce = STANDARD
            .decode(parts[0])
            .map_err(|_| Error::Corrupt("nonce is not valid base64".to_string()))?;
        let tag = STANDARD
            .decode(parts[1])
            .map_err(|_| Error::Corrupt("tag is not valid base64".to_string()))?;
        let ciphertext = STANDARD
            .decode(parts[2])
            .map_err(|_| Error::Corrupt("ciphertext is not valid base64".to_string()))?;

        if nonce.len() != NONCE_LEN {
            return Err(Error::Corrupt(format!(
                "nonce must be {NONCE_LEN} bytes, got {}",
                nonce.len()
            )));
        }
        if tag.len() != TAG_LEN {
            return Err(Error::Corrupt(format!(
                "tag must be {TAG_LEN} bytes, got {}",
                tag.len()
            )));
        }

        let mut sealed = ciphertext;
        sealed.extend_from_slice(&tag);

        let plaintext = self
            .cipher
            .decrypt(Nonce::from_slice(&nonce), sealed.as_ref())
            .map_err(|_| Error::Corrupt("authentication failed".to_string()))?;

        String::from_utf8(plaintext)
            .map_err(|_| Error::Corrupt("plaintext is not valid UTF-8".to_string()))
    }
}

/// Generate a fresh key for setup tooling: 32 random bytes, hex-encoded.
pub fn generate_key() -> String {
    hex::encode(TokenAead::generate_key(&mut OsRng))
}
