// Seed prefixes for the two kinds of program-derived records
pub const CANDIDATE_SEED: &[u8] = b"candidate";
pub const VOTER_SEED: &[u8] = b"voter";

/// Longest candidate name, in bytes. A single PDA seed is capped at 32 bytes,
/// so this is also the limit for deriving a candidate address from its name.
pub const MAX_NAME_LEN: usize = 32;
