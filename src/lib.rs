//! Verification of [Equihash] proof-of-work solutions for Zcash- and
//! Bitcoin Gold-style block headers.
//!
//! [Equihash]: https://zips.z.cash/protocol/protocol.pdf#equihash

mod hasher;
mod minimal;
mod params;
#[cfg(test)]
mod test_vectors;
mod verify;

pub use minimal::minimal_from_indices;
pub use params::Params;
pub use verify::{is_valid_solution, verify_header, Error};
