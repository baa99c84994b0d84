//! Probabilistic encryption of a 32-byte message block.

use crate::encoding::encode_message;
use crate::error::Error;
use crate::keygen::PublicKey;
use crate::matrix::RingMatrix;
use crate::params::{RingParameters, MESSAGE_BYTES};
use crate::sampling::{sample_small, sample_small_matrix};
use rand::{CryptoRng, Rng};

/// Ciphertext pair: u is k×1, v is a single ring element kept as a 1×1 grid
/// for symmetry with u.
#[derive(Clone, Debug)]
pub struct Ciphertext {
    pub u: RingMatrix,
    pub v: RingMatrix,
}

/// Encrypt a 32-byte message under the public key.
///
/// Samples fresh r, e1 (both k×1) and e2 (scalar) per call, so repeated
/// encryptions of the same message differ:
///
/// ```text
/// u = (rᵀ·A)ᵀ + e1
/// v = rᵀ·t + e2 + m̂
/// ```
///
/// The transpose convention on u is mirrored exactly by decryption; the
/// rᵀ·A·s and sᵀ·u terms cancel only because both sides agree on it.
pub fn encrypt<R: Rng + CryptoRng>(
    rng: &mut R,
    params: &RingParameters,
    pk: &PublicKey,
    message: &[u8],
) -> Result<Ciphertext, Error> {
    if message.len() != MESSAGE_BYTES {
        return Err(Error::InvalidMessageLength {
            expected: MESSAGE_BYTES,
            actual: message.len(),
        });
    }
    let mut block = [0u8; MESSAGE_BYTES];
    block.copy_from_slice(message);
    let m_hat = RingMatrix::from_element(encode_message(&block, params));

    let k = pk.rank();
    let r = sample_small_matrix(rng, params, k, 1);
    let e1 = sample_small_matrix(rng, params, k, 1);
    let e2 = RingMatrix::from_element(sample_small(rng, params));

    let rt = r.transpose();
    let u = rt.mul(&pk.a, params)?.transpose().add(&e1, params)?;
    let v = rt
        .mul(&pk.t, params)?
        .add(&e2, params)?
        .add(&m_hat, params)?;

    Ok(Ciphertext { u, v })
}
