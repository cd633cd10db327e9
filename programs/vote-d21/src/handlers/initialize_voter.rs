use anchor_lang::prelude::*;

use crate::{state::VoterAccount, InitializeVoter};

/// Opens the ballot for `authority` at `["voter", authority]`.
///
/// `authority` has to sign, so nobody can open a ballot on someone else's
/// behalf. The payer may be a different key.
pub fn initialize_voter(ctx: Context<InitializeVoter>) -> Result<()> {
    create_voter(
        &mut *ctx.accounts.voter,
        ctx.accounts.authority.key(),
        ctx.bumps.voter,
    )
}

pub fn create_voter(voter: &mut VoterAccount, authority: Pubkey, bump: u8) -> Result<()> {
    voter.initialize(authority, bump)?;

    msg!("Voter initialized for authority: {}", voter.authority);
    Ok(())
}
