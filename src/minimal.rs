//! The minimal (bit-packed) encoding of Equihash solutions.

use std::io::Cursor;
use std::mem::size_of;

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::params::Params;

/// Unpacks a big-endian bitstream of `bit_len`-bit values into groups of
/// `(bit_len + 7)/8 + byte_pad` bytes, each value right-aligned after
/// `byte_pad` leading zero bytes.
pub(crate) fn expand_array(packed: &[u8], bit_len: usize, byte_pad: usize) -> Vec<u8> {
    // The 32-bit accumulator must fit bit_len bits plus a partial byte.
    assert!((8..=25).contains(&bit_len));

    let out_width = (bit_len + 7) / 8 + byte_pad;
    let out_len = 8 * out_width * packed.len() / bit_len;

    // Expansion is the identity for whole-byte values with no padding.
    if out_len == packed.len() {
        return packed.to_vec();
    }

    let mut out = vec![0u8; out_len];
    let value_mask: u32 = (1 << bit_len) - 1;

    // The acc_bits least-significant bits of acc hold the most recently
    // consumed input bits, in big-endian order.
    let mut acc: u32 = 0;
    let mut acc_bits = 0;

    let mut group = 0;
    for &byte in packed {
        acc = (acc << 8) | u32::from(byte);
        acc_bits += 8;

        // Emit one output group per bit_len consumed bits.
        if acc_bits >= bit_len {
            acc_bits -= bit_len;
            for x in byte_pad..out_width {
                let shift = 8 * (out_width - x - 1);
                out[group + x] =
                    ((acc >> (acc_bits + shift)) & ((value_mask >> shift) & 0xff)) as u8;
            }
            group += out_width;
        }
    }

    out
}

/// Inverse of [`expand_array`]: packs right-aligned values back into a
/// big-endian bitstream.
pub(crate) fn compress_array(expanded: &[u8], bit_len: usize, byte_pad: usize) -> Vec<u8> {
    assert!((8..=25).contains(&bit_len));

    let in_width = (bit_len + 7) / 8 + byte_pad;
    assert!(expanded.len() % in_width == 0);

    let mut out = vec![0u8; bit_len * expanded.len() / (8 * in_width)];
    let value_mask: u32 = (1 << bit_len) - 1;

    let mut acc: u32 = 0;
    let mut acc_bits = 0;

    let mut group = 0;
    for byte in out.iter_mut() {
        // Refill the accumulator whenever fewer than 8 valid bits remain.
        if acc_bits < 8 {
            acc <<= bit_len;
            for x in byte_pad..in_width {
                let shift = 8 * (in_width - x - 1);
                acc |= (u32::from(expanded[group + x]) & ((value_mask >> shift) & 0xff)) << shift;
            }
            group += in_width;
            acc_bits += bit_len;
        }

        acc_bits -= 8;
        *byte = (acc >> acc_bits) as u8;
    }

    out
}

/// Decodes the solution indices from the minimal encoding.
///
/// Indices travel as big-endian 32-bit integers so that lexicographic array
/// comparison is equivalent to integer comparison.
pub(crate) fn indices_from_minimal(p: &Params, minimal: &[u8]) -> Vec<u32> {
    let bit_len = p.collision_bit_length() + 1;
    let byte_pad = size_of::<u32>() - (bit_len + 7) / 8;

    let mut csr = Cursor::new(expand_array(minimal, bit_len, byte_pad));
    let mut indices = Vec::with_capacity(8 * minimal.len() / bit_len);
    while let Ok(i) = csr.read_u32::<BigEndian>() {
        indices.push(i);
    }

    indices
}

/// Packs solution indices into the minimal encoding.
///
/// The parameters must be valid (see [`Params::new`]) and each index must fit
/// in `n/(k+1) + 1` bits.
pub fn minimal_from_indices(p: &Params, indices: &[u32]) -> Vec<u8> {
    let bit_len = p.collision_bit_length() + 1;
    let byte_pad = size_of::<u32>() - (bit_len + 7) / 8;

    let mut expanded = Vec::with_capacity(indices.len() * size_of::<u32>());
    for i in indices {
        expanded.write_u32::<BigEndian>(*i).unwrap();
    }

    compress_array(&expanded, bit_len, byte_pad)
}
