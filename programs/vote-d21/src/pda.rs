use anchor_lang::prelude::*;

use crate::constants::{CANDIDATE_SEED, VOTER_SEED};

/// Derives the program address for `key` in the `tag` namespace.
///
/// Returns the address together with the bump that pushed it off the ed25519
/// curve. The bump has to be persisted next to the record so the address can
/// be re-verified later without searching again.
///
/// # Panics
///
/// Panics if `key` is longer than a single seed (32 bytes), since no bump can
/// produce a valid address then. Validate candidate names with
/// [`CandidateAccount::validate_name`](crate::CandidateAccount::validate_name)
/// first.
pub fn derive(tag: &[u8], key: &[u8]) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[tag, key], &crate::ID)
}

/// # Panics
///
/// Panics if `name` is longer than 32 bytes, see [`derive`].
pub fn candidate_address(name: &str) -> (Pubkey, u8) {
    derive(CANDIDATE_SEED, name.as_bytes())
}

pub fn voter_address(authority: &Pubkey) -> (Pubkey, u8) {
    derive(VOTER_SEED, authority.as_ref())
}

/// Re-derives `key` with a stored bump and checks the result is `address`.
pub fn verify(tag: &[u8], key: &[u8], bump: u8, address: &Pubkey) -> bool {
    Pubkey::create_program_address(&[tag, key, &[bump]], &crate::ID)
        .map_or(false, |derived| derived == *address)
}
