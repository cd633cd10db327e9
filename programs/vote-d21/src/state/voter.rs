use anchor_lang::prelude::*;

use crate::{constants::VOTER_SEED, error::ErrorCode, pda};

/// One ballot per authority, stored at `["voter", authority]`.
#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct VoterAccount {
    /// The only key allowed to cast this ballot
    pub authority: Pubkey,
    /// Set once the ballot is cast, never cleared
    pub voted: bool,
    /// Candidate addresses chosen, default keys until the ballot is cast
    pub choices: [Pubkey; 2],
    /// PDA bump seed
    pub bump: u8,
}

impl VoterAccount {
    pub const SPACE: usize = 8 + Self::INIT_SPACE;

    /// A zeroed account has the default authority, and `initialize` never
    /// writes it.
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    pub fn initialize(&mut self, authority: Pubkey, bump: u8) -> Result<()> {
        require!(!self.is_initialized(), ErrorCode::AccountAlreadyInitialized);
        require_keys_neq!(authority, Pubkey::default(), ErrorCode::InvalidAuthority);

        self.authority = authority;
        self.voted = false;
        self.choices = [Pubkey::default(); 2];
        self.bump = bump;
        Ok(())
    }

    pub fn is_stored_at(&self, address: &Pubkey) -> bool {
        pda::verify(VOTER_SEED, self.authority.as_ref(), self.bump, address)
    }

    /// Marks the ballot cast. Callers validate the choices first.
    pub fn record_ballot(&mut self, choices: [Pubkey; 2]) {
        self.voted = true;
        self.choices = choices;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_matches_layout() {
        // discriminator + authority + voted + 2 choices + bump
        assert_eq!(VoterAccount::SPACE, 8 + 32 + 1 + 64 + 1);
    }

    #[test]
    fn new_voter_has_not_voted() {
        let authority = Pubkey::new_unique();
        let mut voter = VoterAccount::default();
        voter.initialize(authority, 253).unwrap();

        assert_eq!(voter.authority, authority);
        assert!(!voter.voted);
        assert!(voter.choices.iter().all(|choice| *choice == Pubkey::default()));
        assert_eq!(voter.bump, 253);
    }

    #[test]
    fn initialize_twice_is_rejected() {
        let authority = Pubkey::new_unique();
        let mut voter = VoterAccount::default();
        voter.initialize(authority, 253).unwrap();

        let err = voter.initialize(Pubkey::new_unique(), 1).unwrap_err();
        assert_eq!(err, error!(ErrorCode::AccountAlreadyInitialized));
        assert_eq!(voter.authority, authority);
    }

    #[test]
    fn default_authority_is_rejected() {
        let mut voter = VoterAccount::default();

        let err = voter.initialize(Pubkey::default(), 255).unwrap_err();
        assert_eq!(err, error!(ErrorCode::InvalidAuthority));
        assert!(!voter.is_initialized());
        assert_eq!(voter.bump, 0);
    }

    #[test]
    fn record_ballot_is_terminal_state() {
        let mut voter = VoterAccount::default();
        voter.initialize(Pubkey::new_unique(), 255).unwrap();

        let choices = [Pubkey::new_unique(), Pubkey::new_unique()];
        voter.record_ballot(choices);
        assert!(voter.voted);
        assert_eq!(voter.choices, choices);
    }

    #[test]
    fn stored_bump_locates_record() {
        let authority = Pubkey::new_unique();
        let (address, bump) = pda::voter_address(&authority);
        let mut voter = VoterAccount::default();
        voter.initialize(authority, bump).unwrap();

        assert!(voter.is_stored_at(&address));
        assert!(!voter.is_stored_at(&pda::voter_address(&Pubkey::new_unique()).0));
    }
}
