//! Scheme facade: a keypair bound to its ring parameters and module rank.

use crate::decrypt::decrypt;
use crate::encrypt::{encrypt, Ciphertext};
use crate::error::Error;
use crate::keygen::{keygen, PublicKey, SecretKey};
use crate::params::{RingParameters, MESSAGE_BYTES};
use rand::{CryptoRng, Rng};

/// A module-LWE encryption scheme instance.
///
/// Construction with rank k generates a fresh keypair immediately; the keys
/// are immutable for the lifetime of the instance. Encryption and decryption
/// are pure per-message operations, safe to call concurrently from shared
/// references as long as each caller brings its own RNG.
pub struct MlwePke {
    params: RingParameters,
    public_key: PublicKey,
    secret_key: SecretKey,
}

impl MlwePke {
    /// Create a scheme instance with module rank k (typically 2–4).
    /// Fails with [`Error::InvalidRank`] if k < 1.
    pub fn new<R: Rng + CryptoRng>(rng: &mut R, k: usize) -> Result<Self, Error> {
        let params = RingParameters::standard();
        let (secret_key, public_key) = keygen(rng, &params, k)?;
        Ok(MlwePke {
            params,
            public_key,
            secret_key,
        })
    }

    /// Module rank of this instance.
    pub fn rank(&self) -> usize {
        self.public_key.rank()
    }

    /// Ring parameters of this instance.
    pub fn params(&self) -> &RingParameters {
        &self.params
    }

    /// The public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Encrypt a 32-byte message with fresh randomness.
    pub fn encrypt<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
        message: &[u8],
    ) -> Result<Ciphertext, Error> {
        encrypt(rng, &self.params, &self.public_key, message)
    }

    /// Decrypt a ciphertext, returning the best-effort 32-byte message.
    pub fn decrypt(&self, ct: &Ciphertext) -> Result<[u8; MESSAGE_BYTES], Error> {
        decrypt(&self.params, &self.secret_key, ct)
    }
}
