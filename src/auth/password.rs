use argon2::{
    password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand::rngs::OsRng;
use tracing::error;

/// Argon2id hasher with a configured time cost.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> anyhow::Result<Self> {
        Self::with_memory(cost, Params::DEFAULT_M_COST)
    }

    pub fn with_memory(cost: u32, memory_kib: u32) -> anyhow::Result<Self> {
        let params = Params::new(memory_kib, cost, Params::DEFAULT_P_COST, None).map_err(|e| {
            error!(error = %e, cost, "invalid argon2 params");
            anyhow::anyhow!(e.to_string())
        })?;
        Ok(Self { params })
    }

    /// Cheap parameters so test suites stay fast.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::with_memory(1, 64).expect("valid test params")
    }

    pub fn cost(&self) -> u32 {
        self.params.t_cost()
    }

    pub fn hash(&self, plain: &str) -> anyhow::Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());
        let hash = argon2
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|e| {
                error!(error = %e, "argon2 hash_password error");
                anyhow::anyhow!(e.to_string())
            })?
            .to_string();
        Ok(hash)
    }

    /// Parameters are read back from the PHC string, so hashes made with an
    /// older cost still verify.
    pub fn verify(&self, plain: &str, hash: &str) -> anyhow::Result<bool> {
        let parsed = PasswordHash::new(hash).map_err(|e| {
            error!(error = %e, "argon2 parse hash error");
            anyhow::anyhow!(e.to_string())
        })?;
        Ok(Argon2::default()
            .verify_password(plain.as_bytes(), &parsed)
            .is_ok())
    }
}
