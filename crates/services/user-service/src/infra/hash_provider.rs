//! Argon2 implementation of [`HashProvider`].
//!
//! Produces Argon2id PHC strings with a fresh random salt per call. The cost
//! parameters come from [`HashingConfig`]; with the defaults a hash is 97
//! characters, inside the stored password limit.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, Salt, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;

use common::{AppError, AppResult, HashProvider, HashingConfig};
use domain::PASSWORD_MAX_LENGTH;

/// Argon2id password hasher.
#[derive(Debug, Clone)]
pub struct Argon2HashProvider {
    params: Params,
}

impl Argon2HashProvider {
    /// Build a hasher, rejecting cost parameters Argon2 does not accept and
    /// parameters whose hashes would not fit the stored password limit.
    pub fn new(config: &HashingConfig) -> AppResult<Self> {
        let params = Params::new(config.memory_kib, config.iterations, config.parallelism, None)
            .map_err(|e| AppError::internal(format!("Invalid hashing parameters: {}", e)))?;

        let encoded_len = encoded_len(&params);
        if encoded_len as u64 > PASSWORD_MAX_LENGTH {
            return Err(AppError::internal(format!(
                "Hashing parameters produce {} character hashes, limit is {}",
                encoded_len, PASSWORD_MAX_LENGTH
            )));
        }

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    fn hash(&self, plain_text: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify(&self, plain_text: &str, hash: &str) -> bool {
        // A stored value that is not a PHC string can never match
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };
        self.argon2()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok()
    }
}

/// Length of the PHC string: `$argon2id$v=19$m=..,t=..,p=..$<salt>$<hash>`
/// with unpadded base64 salt and digest.
fn encoded_len(params: &Params) -> usize {
    let header = format!(
        "$argon2id$v={}$m={},t={},p={}$",
        Version::V0x13 as u32,
        params.m_cost(),
        params.t_cost(),
        params.p_cost()
    );
    let base64_len = |bytes: usize| (bytes * 4).div_ceil(3);
    let output_len = params.output_len().unwrap_or(Params::DEFAULT_OUTPUT_LEN);

    header.len() + base64_len(Salt::RECOMMENDED_LENGTH) + 1 + base64_len(output_len)
}

#[async_trait]
impl HashProvider for Argon2HashProvider {
    async fn generate_hash(&self, payload: &str) -> AppResult<String> {
        let provider = self.clone();
        let payload = payload.to_owned();
        tokio::task::spawn_blocking(move || provider.hash(&payload))
            .await
            .map_err(|e| AppError::internal(format!("Hashing task failed: {}", e)))?
    }

    async fn compare_hash(&self, payload: &str, hash: &str) -> AppResult<bool> {
        let provider = self.clone();
        let payload = payload.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || provider.verify(&payload, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Hash comparison task failed: {}", e)))
    }
}
