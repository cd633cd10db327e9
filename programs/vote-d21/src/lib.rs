// Stops Rust Analyzer complaining about missing configs
// See https://solana.stackexchange.com/questions/17777
#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod handlers;
pub mod pda;
pub mod state;

use constants::*;
pub use error::ErrorCode;
pub use state::*;

declare_id!("7qsdAz3ta9gg3eikuzQuJMj928zFnPUB8C4rb42pr6RN");

#[program]
pub mod vote_d21 {
    use super::*;

    pub fn initialize_candidate(ctx: Context<InitializeCandidate>, name: String) -> Result<()> {
        handlers::initialize_candidate::initialize_candidate(ctx, name)
    }

    pub fn initialize_voter(ctx: Context<InitializeVoter>) -> Result<()> {
        handlers::initialize_voter::initialize_voter(ctx)
    }

    pub fn vote(ctx: Context<Vote>, candidate_keys: [Pubkey; 2]) -> Result<()> {
        handlers::vote::vote(ctx, candidate_keys)
    }
}

#[derive(Accounts)]
#[instruction(name: String)]
pub struct InitializeCandidate<'info> {
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + CandidateAccount::INIT_SPACE,
        seeds = [CANDIDATE_SEED, name.as_bytes()],
        bump,
    )]
    pub candidate: Account<'info, CandidateAccount>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct InitializeVoter<'info> {
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + VoterAccount::INIT_SPACE,
        seeds = [VOTER_SEED, authority.key().as_ref()],
        bump,
    )]
    pub voter: Account<'info, VoterAccount>,

    /// The key that will control this ballot
    pub authority: Signer<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Vote<'info> {
    // Seeds come from the stored authority rather than the signer so that a
    // foreign signer is reported as UnauthorizedAccess by the handler.
    #[account(
        mut,
        seeds = [VOTER_SEED, voter.authority.as_ref()],
        bump = voter.bump,
    )]
    pub voter: Account<'info, VoterAccount>,

    #[account(
        mut,
        seeds = [CANDIDATE_SEED, candidate1.name.as_bytes()],
        bump = candidate1.bump,
    )]
    pub candidate1: Account<'info, CandidateAccount>,

    #[account(
        mut,
        seeds = [CANDIDATE_SEED, candidate2.name.as_bytes()],
        bump = candidate2.bump,
    )]
    pub candidate2: Account<'info, CandidateAccount>,

    pub authority: Signer<'info>,
}
