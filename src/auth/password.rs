/**
 * Password Hashing
 *
 * bcrypt wrappers used by the signup and signin handlers. Verification is
 * constant-time via bcrypt; plaintext passwords are never stored or logged.
 */

use bcrypt::DEFAULT_COST;

use crate::error::AppError;

/// Hash a password for storage.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    bcrypt::hash(password, DEFAULT_COST).map_err(|e| {
        tracing::error!("failed to hash password: {}", e);
        AppError::internal("password hashing failed")
    })
}

/// Verify a password against a stored hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    bcrypt::verify(password, hash).map_err(|e| {
        tracing::error!("password verification error: {}", e);
        AppError::internal("password verification failed")
    })
}
