use anchor_lang::prelude::*;

use crate::{
    state::{CandidateAccount, CandidateInitialized},
    InitializeCandidate,
};

/// Registers a candidate under `["candidate", name]`.
///
/// The account is opened with `init_if_needed`, so a repeat call for the same
/// name reaches the handler with the existing record and is rejected with
/// `AccountAlreadyInitialized` instead of the allocator's "already in use".
///
/// An empty name is rejected here with `EmptyCandidateName`. A name longer
/// than 32 bytes never reaches the handler on-chain: the `seeds` constraint
/// cannot derive an address for it and the instruction aborts inside Anchor's
/// account validation. `CandidateNameTooLong` is what off-chain callers of
/// [`create_candidate`] get for the same input.
///
/// # Arguments
/// * `name` - Candidate name, 1 to 32 bytes. Doubles as the derivation key.
pub fn initialize_candidate(ctx: Context<InitializeCandidate>, name: String) -> Result<()> {
    let address = ctx.accounts.candidate.key();
    let event = create_candidate(
        &mut *ctx.accounts.candidate,
        address,
        name,
        ctx.bumps.candidate,
    )?;

    emit!(event);
    Ok(())
}

/// Fills a fresh candidate record. Shared by the program and off-chain ledgers.
pub fn create_candidate(
    candidate: &mut CandidateAccount,
    address: Pubkey,
    name: String,
    bump: u8,
) -> Result<CandidateInitialized> {
    candidate.initialize(name, bump)?;

    msg!("Candidate initialized: {}", candidate.name);

    Ok(CandidateInitialized {
        name: candidate.name.clone(),
        pubkey: address,
    })
}
