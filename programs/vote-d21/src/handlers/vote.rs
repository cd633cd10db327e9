use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    state::{CandidateAccount, VoteCast, VoterAccount},
    Vote,
};

/// Casts the signer's ballot for two distinct candidates.
///
/// The account constraints have already checked that every record sits at the
/// address derived from its own contents. Everything else is checked by
/// [`cast_ballot`].
///
/// # Arguments
/// * `candidate_keys` - Addresses of the two chosen candidate records, in the
///   same order as the `candidate1` and `candidate2` accounts
pub fn vote(ctx: Context<Vote>, candidate_keys: [Pubkey; 2]) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let candidate1_key = ctx.accounts.candidate1.key();
    let candidate2_key = ctx.accounts.candidate2.key();

    let event = cast_ballot(
        &authority,
        &mut *ctx.accounts.voter,
        (candidate1_key, &mut *ctx.accounts.candidate1),
        (candidate2_key, &mut *ctx.accounts.candidate2),
        candidate_keys,
    )?;

    emit!(event);
    Ok(())
}

/// Validates a two-candidate ballot and applies it.
///
/// Checks run in a fixed order and the first failure is the one reported:
/// signer, single use, distinct choices, then that each supplied record is the
/// one claimed in `candidate_keys`. Nothing is written unless every check
/// passes, including both overflow checks.
pub fn cast_ballot(
    authority: &Pubkey,
    voter: &mut VoterAccount,
    candidate1: (Pubkey, &mut CandidateAccount),
    candidate2: (Pubkey, &mut CandidateAccount),
    candidate_keys: [Pubkey; 2],
) -> Result<VoteCast> {
    let (candidate1_key, candidate1) = candidate1;
    let (candidate2_key, candidate2) = candidate2;

    require_keys_eq!(voter.authority, *authority, ErrorCode::UnauthorizedAccess);
    require!(!voter.voted, ErrorCode::AlreadyVoted);
    require_keys_neq!(
        candidate_keys[0],
        candidate_keys[1],
        ErrorCode::DuplicateCandidates
    );
    require_keys_eq!(candidate1_key, candidate_keys[0], ErrorCode::InvalidCandidate);
    require_keys_eq!(candidate2_key, candidate_keys[1], ErrorCode::InvalidCandidate);

    let votes1 = candidate1.next_tally()?;
    let votes2 = candidate2.next_tally()?;
    candidate1.votes = votes1;
    candidate2.votes = votes2;
    voter.record_ballot(candidate_keys);

    msg!(
        "Vote cast successfully for {} and {}",
        candidate1.name,
        candidate2.name
    );

    Ok(VoteCast {
        voter: voter.authority,
        candidates: candidate_keys,
    })
}
