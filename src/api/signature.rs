use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use tracing::error;

use crate::core::config::AppConfig;

pub fn verify_discord_signature(
    request_body: &str,
    timestamp: &str,
    signature: &str,
    config: &AppConfig,
) -> bool {
    let key_bytes = match hex::decode(&config.public_key) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to decode application public key: {}", e);
            return false;
        }
    };
    let key_bytes: [u8; 32] = match key_bytes.try_into() {
        Ok(bytes) => bytes,
        Err(_) => {
            error!("Application public key is not 32 bytes");
            return false;
        }
    };
    let verifying_key = match VerifyingKey::from_bytes(&key_bytes) {
        Ok(key) => key,
        Err(e) => {
            error!("Invalid Ed25519 public key: {}", e);
            return false;
        }
    };

    let sig_bytes = match hex::decode(signature) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to decode signature header: {}", e);
            return false;
        }
    };
    let sig_bytes: [u8; 64] = match sig_bytes.try_into() {
        Ok(bytes) => bytes,
        Err(_) => {
            error!("Signature is not 64 bytes");
            return false;
        }
    };
    let signature = Signature::from_bytes(&sig_bytes);

    // Discord signs the concatenation of the timestamp header and the
    // raw request body.
    let message = format!("{timestamp}{request_body}");

    if verifying_key.verify(message.as_bytes(), &signature).is_ok() {
        true
    } else {
        error!("Ed25519 signature verification failed");
        false
    }
}
