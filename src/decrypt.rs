//! Decryption via ring subtraction and threshold decoding.
//!
//! m' = v − sᵀ·u is the encoded message plus accumulated noise
//! (eᵀr + e2 − sᵀe1). Thresholding recovers each bit as long as its noise
//! stays below q/4; a coefficient pushed across a threshold silently flips
//! that bit — this is never detected or signalled.

use crate::encoding::decode_message;
use crate::encrypt::Ciphertext;
use crate::error::Error;
use crate::keygen::SecretKey;
use crate::params::{RingParameters, MESSAGE_BYTES};

/// Recover the 32-byte message from a ciphertext. Best-effort output: wrong
/// bits from noise corruption are returned, not reported.
pub fn decrypt(
    params: &RingParameters,
    sk: &SecretKey,
    ct: &Ciphertext,
) -> Result<[u8; MESSAGE_BYTES], Error> {
    let st = sk.s.transpose();
    let m_prime = ct.v.sub(&st.mul(&ct.u, params)?, params)?;
    Ok(decode_message(m_prime.entry(0, 0), params))
}
