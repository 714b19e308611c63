//! Verification of [Equihash] solutions.
//!
//! [Equihash]: https://zips.z.cash/protocol/protocol.pdf#equihash

use std::fmt;

use blake2b_simd::State as Blake2bState;

use crate::hasher;
use crate::minimal;
use crate::params::Params;

/// Number of leading header bytes absorbed into the proof-of-work hash.
const HASHED_HEADER_LENGTH: usize = 108;

/// Length of the nonce embedded in the header after the hashed portion.
const NONCE_LENGTH: usize = 32;

/// An Equihash solution failed to verify.
#[derive(Debug)]
pub struct Error(pub(crate) Kind);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Kind {
    InvalidParams(&'static str),
    HeaderLength,
    MissingNonce,
    NonceLength,
    SolutionLength { actual: usize, expected: usize },
    Collision,
    OutOfOrder,
    DuplicateIdxs,
    TreeWidth(usize),
    ZeroCount(usize),
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::InvalidParams(reason) => f.write_str(reason),
            Kind::HeaderLength => f.write_str("Header must be at least 108 long"),
            Kind::MissingNonce => f.write_str("Header must contain nonce"),
            Kind::NonceLength => f.write_str("Nonce must be 32 bytes"),
            Kind::SolutionLength { actual, expected } => {
                write!(f, "Invalid solution length: {} (expected {})", actual, expected)
            }
            Kind::Collision => {
                f.write_str("Invalid solution: invalid collision length between StepRow")
            }
            Kind::OutOfOrder => f.write_str("Invalid solution: Index tree incorrectly ordered"),
            Kind::DuplicateIdxs => f.write_str("Invalid solution: duplicate indices"),
            Kind::TreeWidth(len) => {
                write!(f, "Invalid solution: incorrect length after end of rounds: {}", len)
            }
            Kind::ZeroCount(count) => {
                write!(f, "Invalid solution: incorrect number of zeroes: {}", count)
            }
        }
    }
}

struct StepRow {
    hash: Vec<u8>,
    indices: Vec<u32>,
}

impl StepRow {
    fn new(p: &Params, state: &Blake2bState, i: u32) -> Self {
        let digest = hasher::hash_xi(state, i / p.indices_per_hash_output());
        let start = ((i % p.indices_per_hash_output()) as usize) * (p.n as usize / 8);
        let end = start + p.n as usize / 8;
        StepRow {
            hash: minimal::expand_array(
                &digest.as_bytes()[start..end],
                p.collision_bit_length(),
                0,
            ),
            indices: vec![i],
        }
    }

    /// XORs the paired hashes and concatenates the index sets, left side
    /// first. The ordering and distinctness checks have already run, so the
    /// concatenation is the ordered, duplicate-free union.
    fn merge(a: &StepRow, b: &StepRow) -> Self {
        let hash = a.hash.iter().zip(b.hash.iter()).map(|(a, b)| a ^ b).collect();
        let mut indices = Vec::with_capacity(a.indices.len() + b.indices.len());
        indices.extend_from_slice(&a.indices);
        indices.extend_from_slice(&b.indices);
        StepRow { hash, indices }
    }
}

/// Byte-granular collision check for round `round`. Sub-byte leftovers when
/// the collision length is not a multiple of 8 are caught by the final zero
/// count instead.
fn has_collision(a: &StepRow, b: &StepRow, round: usize, collision_bit_length: usize) -> bool {
    let start = (round - 1) * collision_bit_length / 8;
    let end = round * collision_bit_length / 8;
    a.hash[start..end] == b.hash[start..end]
}

fn distinct_indices(a: &StepRow, b: &StepRow) -> bool {
    a.indices.iter().all(|i| !b.indices.contains(i))
}

/// Number of leading zero bits of the hash, each byte padded to exactly
/// eight bits before the bits are concatenated.
fn count_zeroes(hash: &[u8]) -> usize {
    let mut zeroes = 0;
    for &byte in hash {
        zeroes += byte.leading_zeros() as usize;
        if byte != 0 {
            break;
        }
    }
    zeroes
}

/// Checks whether `soln` witnesses a valid generalized birthday collision for
/// `(input, nonce)` under the parameters `p`.
///
/// `input` is absorbed in full; block header callers go through
/// [`verify_header`], which passes only the hashed header prefix.
pub fn is_valid_solution(
    p: &Params,
    input: &[u8],
    nonce: &[u8; 32],
    soln: &[u8],
) -> Result<(), Error> {
    p.validate()?;

    let expected = p.solution_width();
    if soln.len() != expected {
        return Err(Error(Kind::SolutionLength {
            actual: soln.len(),
            expected,
        }));
    }

    let state = hasher::seed_state(p, input, nonce);
    let indices = minimal::indices_from_minimal(p, soln);

    let mut rows: Vec<StepRow> = indices
        .iter()
        .map(|&i| StepRow::new(p, &state, i))
        .collect();

    for round in 1..=(p.k as usize) {
        if rows.len() % 2 != 0 {
            return Err(Error(Kind::TreeWidth(rows.len())));
        }
        let mut merged = Vec::with_capacity(rows.len() / 2);
        for pair in rows.chunks_exact(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if !has_collision(a, b, round, p.collision_bit_length()) {
                return Err(Error(Kind::Collision));
            }
            // Indices compare as unsigned integers; the first index is the
            // canonical representative of its subtree.
            if b.indices[0] < a.indices[0] {
                return Err(Error(Kind::OutOfOrder));
            }
            if !distinct_indices(a, b) {
                return Err(Error(Kind::DuplicateIdxs));
            }
            merged.push(StepRow::merge(a, b));
        }
        rows = merged;
    }

    if rows.len() != 1 {
        return Err(Error(Kind::TreeWidth(rows.len())));
    }

    let zeroes = count_zeroes(&rows[0].hash);
    if zeroes != 8 * p.hash_length() {
        return Err(Error(Kind::ZeroCount(zeroes)));
    }

    Ok(())
}

/// Validates the Equihash solution carried by a block header.
///
/// The nonce is either supplied by the caller (exactly 32 bytes) or taken
/// from the 32 bytes following the hashed header prefix, where it is stored
/// byte-reversed on the wire.
pub fn verify_header(
    p: &Params,
    header: &[u8],
    nonce: Option<&[u8]>,
    soln: &[u8],
) -> Result<(), Error> {
    let result = check_header(p, header, nonce, soln);
    if let Err(e) = &result {
        tracing::debug!("Equihash verification failed: {}", e);
    }
    result
}

fn check_header(
    p: &Params,
    header: &[u8],
    nonce: Option<&[u8]>,
    soln: &[u8],
) -> Result<(), Error> {
    if header.len() < HASHED_HEADER_LENGTH {
        return Err(Error(Kind::HeaderLength));
    }

    let nonce: [u8; NONCE_LENGTH] = match nonce {
        Some(bytes) => bytes.try_into().map_err(|_| Error(Kind::NonceLength))?,
        None => {
            if header.len() < HASHED_HEADER_LENGTH + NONCE_LENGTH {
                return Err(Error(Kind::MissingNonce));
            }
            let mut nonce = [0u8; NONCE_LENGTH];
            nonce.copy_from_slice(
                &header[HASHED_HEADER_LENGTH..HASHED_HEADER_LENGTH + NONCE_LENGTH],
            );
            nonce.reverse();
            nonce
        }
    };

    is_valid_solution(p, &header[..HASHED_HEADER_LENGTH], &nonce, soln)
}
