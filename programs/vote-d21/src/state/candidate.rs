use anchor_lang::prelude::*;

use crate::{
    constants::{CANDIDATE_SEED, MAX_NAME_LEN},
    error::ErrorCode,
    pda,
};

/// A candidate and its running tally, stored at `["candidate", name]`.
#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct CandidateAccount {
    /// Display name, also the derivation key of this account (max 32 bytes)
    #[max_len(MAX_NAME_LEN)]
    pub name: String,
    /// Number of ballots naming this candidate
    pub votes: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl CandidateAccount {
    pub const SPACE: usize = 8 + Self::INIT_SPACE;

    /// A zeroed account has an empty name, and a live one never does.
    pub fn is_initialized(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn validate_name(name: &str) -> Result<()> {
        require!(!name.is_empty(), ErrorCode::EmptyCandidateName);
        require!(name.len() <= MAX_NAME_LEN, ErrorCode::CandidateNameTooLong);
        Ok(())
    }

    pub fn initialize(&mut self, name: String, bump: u8) -> Result<()> {
        require!(!self.is_initialized(), ErrorCode::AccountAlreadyInitialized);
        Self::validate_name(&name)?;

        self.name = name;
        self.votes = 0;
        self.bump = bump;
        Ok(())
    }

    /// Whether `address` is the derivation of this record's name and bump.
    pub fn is_stored_at(&self, address: &Pubkey) -> bool {
        pda::verify(CANDIDATE_SEED, self.name.as_bytes(), self.bump, address)
    }

    /// The tally after one more vote.
    pub fn next_tally(&self) -> Result<u64> {
        self.votes
            .checked_add(1)
            .ok_or_else(|| error!(ErrorCode::VoteOverflow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_matches_layout() {
        // discriminator + (len prefix + 32 name bytes) + votes + bump
        assert_eq!(CandidateAccount::SPACE, 8 + 4 + 32 + 8 + 1);
    }

    #[test]
    fn initialize_sets_zero_tally() {
        let mut candidate = CandidateAccount::default();
        assert!(!candidate.is_initialized());

        candidate.initialize("Alice".to_string(), 254).unwrap();
        assert!(candidate.is_initialized());
        assert_eq!(candidate.name, "Alice");
        assert_eq!(candidate.votes, 0);
        assert_eq!(candidate.bump, 254);
    }

    #[test]
    fn initialize_twice_is_rejected() {
        let mut candidate = CandidateAccount::default();
        candidate.initialize("Alice".to_string(), 254).unwrap();
        candidate.votes = 3;

        let err = candidate.initialize("Alice".to_string(), 254).unwrap_err();
        assert_eq!(err, error!(ErrorCode::AccountAlreadyInitialized));
        assert_eq!(candidate.votes, 3);
    }

    #[test]
    fn names_are_bounded() {
        assert_eq!(
            CandidateAccount::validate_name("").unwrap_err(),
            error!(ErrorCode::EmptyCandidateName)
        );
        assert!(CandidateAccount::validate_name(&"A".repeat(MAX_NAME_LEN)).is_ok());
        assert_eq!(
            CandidateAccount::validate_name(&"A".repeat(MAX_NAME_LEN + 1)).unwrap_err(),
            error!(ErrorCode::CandidateNameTooLong)
        );
    }

    #[test]
    fn next_tally_guards_overflow() {
        let mut candidate = CandidateAccount {
            name: "Bob".to_string(),
            votes: 41,
            bump: 255,
        };
        assert_eq!(candidate.next_tally().unwrap(), 42);

        candidate.votes = u64::MAX;
        assert_eq!(
            candidate.next_tally().unwrap_err(),
            error!(ErrorCode::VoteOverflow)
        );
    }

    #[test]
    fn stored_bump_locates_record() {
        let (address, bump) = pda::candidate_address("Diana");
        let mut candidate = CandidateAccount::default();
        candidate.initialize("Diana".to_string(), bump).unwrap();

        assert!(candidate.is_stored_at(&address));
        assert!(!candidate.is_stored_at(&pda::candidate_address("Alice").0));
    }
}
