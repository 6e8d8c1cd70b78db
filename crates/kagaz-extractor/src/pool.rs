//! Rotating pool of service credentials

use crate::ExtractorError;

/// Ordered pool of opaque credential tokens with a rotation cursor.
///
/// Rotation is cyclic: advancing past the last entry wraps to the first.
/// The cursor always indexes a valid entry, which construction guarantees
/// by rejecting empty pools — an empty credential list is the one fatal
/// startup condition of the structured pipeline.
#[derive(Debug, Clone)]
pub struct CredentialPool {
    credentials: Vec<String>,
    cursor: usize,
}

impl CredentialPool {
    /// Build a pool from an ordered credential list.
    ///
    /// # Errors
    ///
    /// [`ExtractorError::NoCredentials`] when the list is empty.
    pub fn new(credentials: Vec<String>) -> Result<Self, ExtractorError> {
        if credentials.is_empty() {
            return Err(ExtractorError::NoCredentials);
        }
        Ok(Self {
            credentials,
            cursor: 0,
        })
    }

    /// The currently active credential.
    pub fn active(&self) -> &str {
        &self.credentials[self.cursor]
    }

    /// Advance to the next credential, wrapping cyclically, and return it.
    pub fn rotate(&mut self) -> &str {
        self.cursor = (self.cursor + 1) % self.credentials.len();
        self.active()
    }

    /// Number of credentials in the pool.
    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    /// Always false: empty pools cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }

    /// Current cursor position (mainly for diagnostics).
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(keys: &[&str]) -> CredentialPool {
        CredentialPool::new(keys.iter().map(|k| k.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_empty_pool_is_a_startup_error() {
        assert!(matches!(
            CredentialPool::new(Vec::new()),
            Err(ExtractorError::NoCredentials)
        ));
    }

    #[test]
    fn test_active_starts_at_first_credential() {
        assert_eq!(pool(&["a", "b", "c"]).active(), "a");
    }

    #[test]
    fn test_rotation_is_cyclic() {
        let mut pool = pool(&["a", "b", "c"]);

        // K rotations visit each credential exactly once, then repeat.
        let mut seen = Vec::new();
        for _ in 0..pool.len() {
            seen.push(pool.active().to_string());
            pool.rotate();
        }
        assert_eq!(seen, vec!["a", "b", "c"]);
        assert_eq!(pool.active(), "a");
    }

    #[test]
    fn test_single_credential_rotates_to_itself() {
        let mut pool = pool(&["only"]);
        assert_eq!(pool.rotate(), "only");
        assert_eq!(pool.cursor(), 0);
    }
}
