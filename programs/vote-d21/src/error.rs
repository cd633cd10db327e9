use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("This voter has already cast their votes")]
    AlreadyVoted,
    #[msg("Cannot vote for the same candidate twice")]
    DuplicateCandidates,
    #[msg("The provided candidate key is invalid")]
    InvalidCandidate,
    #[msg("Unauthorized access: signer does not match voter authority")]
    UnauthorizedAccess,
    #[msg("Account has already been initialized")]
    AccountAlreadyInitialized,
    #[msg("Vote count overflow detected")]
    VoteOverflow,
    #[msg("Candidate name must not be empty")]
    EmptyCandidateName,
    #[msg("Candidate name is longer than 32 bytes")]
    CandidateNameTooLong,
    #[msg("The default key cannot own a ballot")]
    InvalidAuthority,
}
