//! Message encoding: 32 bytes ↔ ring element.
//!
//! Each of the 256 message bits (LSB-first within each byte) maps to one
//! coefficient: 0 stays 0, 1 becomes round(q/2). Decoding thresholds a
//! coefficient back to a bit: 1 iff round(q/4) < coefficient ≤ round(3q/4).

use crate::params::{RingParameters, MESSAGE_BYTES, N};
use crate::ring::RingElement;

/// Expand a byte buffer into its bit sequence, LSB-first within each byte.
pub fn bytes_to_bits(data: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(data.len() * 8);
    for &byte in data {
        for j in 0..8 {
            bits.push((byte >> j) & 1);
        }
    }
    bits
}

/// Map a 32-byte message to a ring element with coefficients in
/// {0, round(q/2)}, one per bit.
pub fn encode_message(message: &[u8; MESSAGE_BYTES], params: &RingParameters) -> RingElement {
    let scale = params.bit_scale() as u16;
    let bits = bytes_to_bits(message);
    let mut coeffs = [0u16; N];
    for (c, bit) in coeffs.iter_mut().zip(bits) {
        *c = bit as u16 * scale;
    }
    RingElement { coeffs }
}

/// Threshold-decode a ring element back to 32 bytes. Coefficient i*8 + j
/// contributes 2^j to byte i when it lies strictly above round(q/4) and at
/// most round(3q/4). Best-effort: a coefficient pushed across a threshold by
/// noise yields a wrong bit, not an error.
pub fn decode_message(m: &RingElement, params: &RingParameters) -> [u8; MESSAGE_BYTES] {
    let low = params.low_threshold();
    let high = params.high_threshold();
    let mut message = [0u8; MESSAGE_BYTES];
    for i in 0..MESSAGE_BYTES {
        for j in 0..8 {
            let c = m.coeffs[i * 8 + j] as u32;
            if low < c && c <= high {
                message[i] |= 1 << j;
            }
        }
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> RingParameters {
        RingParameters::standard()
    }

    #[test]
    fn test_bits_lsb_first() {
        assert_eq!(bytes_to_bits(&[0b0000_0101]), vec![1, 0, 1, 0, 0, 0, 0, 0]);
        assert_eq!(bytes_to_bits(&[0x80]), vec![0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(bytes_to_bits(&[]).len(), 0);
        assert_eq!(bytes_to_bits(&[0xFF, 0x00]).len(), 16);
    }

    #[test]
    fn test_encode_scales_bits() {
        let p = params();
        let mut msg = [0u8; MESSAGE_BYTES];
        msg[0] = 0b0000_0011;
        msg[31] = 0x80;
        let e = encode_message(&msg, &p);
        assert_eq!(e.coeffs[0], 1665);
        assert_eq!(e.coeffs[1], 1665);
        assert_eq!(e.coeffs[2], 0);
        assert_eq!(e.coeffs[255], 1665);
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let p = params();
        let msg: [u8; MESSAGE_BYTES] = core::array::from_fn(|i| (i * 37) as u8);
        let e = encode_message(&msg, &p);
        let decoded = decode_message(&e, &p);
        assert_eq!(msg, decoded);
    }

    #[test]
    fn test_decode_threshold_edges() {
        let p = params();
        let mut e = RingElement::zero();
        e.coeffs[0] = 832; // == round(q/4): not a 1 (strict lower bound)
        e.coeffs[1] = 833; // just above: 1
        e.coeffs[2] = 2497; // == round(3q/4): still 1 (inclusive upper bound)
        e.coeffs[3] = 2498; // just above: 0
        let decoded = decode_message(&e, &p);
        assert_eq!(decoded[0], 0b0000_0110);
    }

    #[test]
    fn test_decode_tolerates_noise() {
        let p = params();
        let msg: [u8; MESSAGE_BYTES] = core::array::from_fn(|i| i as u8);
        let mut e = encode_message(&msg, &p);
        // Perturb every coefficient by a noise-sized offset in both directions.
        for (i, c) in e.coeffs.iter_mut().enumerate() {
            let delta = (i % 200) as i32 * if i % 2 == 0 { 1 } else { -1 };
            *c = ((*c as i32 + delta).rem_euclid(p.q as i32)) as u16;
        }
        assert_eq!(decode_message(&e, &p), msg);
    }
}
