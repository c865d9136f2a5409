use rand::RngCore;
use rand::rngs::OsRng;

use crate::utils::errors::AppError;

const TOKEN_BYTES: usize = 16;

/// Generates an email verification token: 16 bytes from the OS entropy
/// source, hex-encoded to a fixed 32 characters.
pub fn generate_verification_token() -> Result<String, AppError> {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.try_fill_bytes(&mut bytes).map_err(|e| {
        AppError::internal(anyhow::anyhow!("Entropy source unavailable: {}", e))
    })?;
    Ok(hex::encode(bytes))
}
