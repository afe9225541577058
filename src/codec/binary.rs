// ============================================================================
// Binary Codec
// Fixed-width wire encoding: two big-endian IEEE-754 doubles
// ============================================================================
//
// Layout (16 bytes, no length prefix, no type tag):
//   [0..8)   real part, big-endian f64
//   [8..16)  imaginary part, big-endian f64

use crate::numeric::{Complex, ComplexError, ComplexResult};

/// Size of one encoded value in bytes.
pub const ENCODED_LEN: usize = 16;

const F64_LEN: usize = 8;

/// Encode a value into its 16-byte wire form.
#[inline]
pub fn encode(c: &Complex) -> [u8; ENCODED_LEN] {
    let mut out = [0u8; ENCODED_LEN];
    out[..F64_LEN].copy_from_slice(&c.re().to_be_bytes());
    out[F64_LEN..].copy_from_slice(&c.im().to_be_bytes());
    out
}

/// Decode a 16-byte wire value.
///
/// Goes through [`Complex::new`], so a `-0.0` on the wire decodes as `0.0`.
#[inline]
pub fn decode(bytes: &[u8; ENCODED_LEN]) -> Complex {
    let mut re = [0u8; F64_LEN];
    let mut im = [0u8; F64_LEN];
    re.copy_from_slice(&bytes[..F64_LEN]);
    im.copy_from_slice(&bytes[F64_LEN..]);
    Complex::new(f64::from_be_bytes(re), f64::from_be_bytes(im))
}

/// Append the wire form of `c` to a message buffer.
pub fn send(c: &Complex, buf: &mut Vec<u8>) {
    buf.extend_from_slice(&encode(c));
}

/// Read one value from the front of a message buffer and advance past it.
///
/// # Errors
/// Returns `InsufficientData` if fewer than 16 bytes remain; the buffer is
/// left untouched in that case.
pub fn recv(buf: &mut &[u8]) -> ComplexResult<Complex> {
    let data = *buf;
    let Some((head, rest)) = data.split_first_chunk::<ENCODED_LEN>() else {
        tracing::debug!(available = data.len(), "complex recv ran out of data");
        return Err(ComplexError::InsufficientData {
            needed: ENCODED_LEN,
            available: data.len(),
        });
    };
    let value = decode(head);
    *buf = rest;
    Ok(value)
}
