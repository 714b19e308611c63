//! The personalized Blake2b hashing that seeds the generalized birthday
//! problem.

use blake2b_simd::{Hash as Blake2bHash, Params as Blake2bParams, State as Blake2bState};
use byteorder::{BigEndian, LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::params::Params;

/// 16-byte Blake2b personalization: the chain tag followed by `n` and `k`.
fn personalization(p: &Params) -> [u8; 16] {
    let mut personal = [0u8; 16];
    personal[..8].copy_from_slice(&p.person);
    (&mut personal[8..12]).write_u32::<LittleEndian>(p.n).unwrap();
    (&mut personal[12..16]).write_u32::<LittleEndian>(p.k).unwrap();
    personal
}

pub(crate) fn initialise_state(p: &Params) -> Blake2bState {
    Blake2bParams::new()
        .hash_length(p.digest_length())
        .personal(&personalization(p))
        .to_state()
}

/// Seeds a state with the input and the nonce.
///
/// The nonce is absorbed as eight 32-bit words in reverse word order, each
/// read big-endian and written little-endian; the absorbed stream is the byte
/// reversal of `nonce`. Consensus depends on this exact convention.
pub(crate) fn seed_state(p: &Params, input: &[u8], nonce: &[u8; 32]) -> Blake2bState {
    let mut state = initialise_state(p);
    state.update(input);

    for i in (0..8).rev() {
        let mut word = &nonce[4 * i..4 * i + 4];
        let mut le = [0u8; 4];
        (&mut le[..])
            .write_u32::<LittleEndian>(word.read_u32::<BigEndian>().unwrap())
            .unwrap();
        state.update(&le);
    }

    state
}

/// Produces one index group's digest: clones the seeded state and absorbs the
/// group index as a little-endian 32-bit integer.
pub(crate) fn hash_xi(base_state: &Blake2bState, xi: u32) -> Blake2bHash {
    let mut le = [0u8; 4];
    (&mut le[..]).write_u32::<LittleEndian>(xi).unwrap();

    let mut state = base_state.clone();
    state.update(&le);
    state.finalize()
}
