use anchor_lang::error::ErrorCode as AnchorErrorCode;
use anchor_lang::prelude::*;
use anchor_lang::Discriminator;
use vote_d21::{
    handlers::{cast_ballot, create_candidate, create_voter},
    pda, CandidateAccount, ErrorCode, VoterAccount,
};

use crate::{
    accounts::{decode_candidate, load_candidate, load_voter, to_stored},
    events::{EventSink, ProgramEvent},
    instruction::Instruction,
    store::{AccountStore, Transaction},
};

/// Executes program instructions against an in-memory [`AccountStore`].
///
/// Each call to [`Ledger::process_transaction`] is one atomic unit: either
/// every account it touches is updated, or none is, and events reach the sink
/// only after the writes have committed.
pub struct Ledger<S: EventSink = Vec<ProgramEvent>> {
    store: AccountStore,
    sink: S,
}

impl Default for Ledger<Vec<ProgramEvent>> {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger<Vec<ProgramEvent>> {
    pub fn new() -> Self {
        Self::with_sink(Vec::new())
    }

    pub fn events(&self) -> &[ProgramEvent] {
        &self.sink
    }
}

impl<S: EventSink> Ledger<S> {
    pub fn with_sink(sink: S) -> Self {
        Self {
            store: AccountStore::new(),
            sink,
        }
    }

    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut AccountStore {
        &mut self.store
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn process(&mut self, instruction: &Instruction, signers: &[Pubkey]) -> Result<()> {
        self.process_transaction(std::slice::from_ref(instruction), signers)
    }

    /// Runs `instructions` in order as one transaction signed by `signers`.
    ///
    /// Signatures are assumed to be verified by the caller; only signer
    /// presence is checked here.
    pub fn process_transaction(
        &mut self,
        instructions: &[Instruction],
        signers: &[Pubkey],
    ) -> Result<()> {
        let mut tx = self.store.begin();
        let mut events = Vec::new();

        for instruction in instructions {
            msg!("Instruction: {}", instruction.name());
            match execute(&mut tx, instruction, signers) {
                Ok(Some(event)) => events.push(event),
                Ok(None) => {}
                Err(err) => {
                    msg!("Transaction rolled back: {}", err);
                    return Err(err);
                }
            }
        }

        let written = tx.commit();
        msg!("Transaction committed, {} accounts written", written);

        for event in &events {
            self.sink.publish(event);
        }
        Ok(())
    }

    pub fn candidate(&self, name: &str) -> Result<CandidateAccount> {
        CandidateAccount::validate_name(name)?;
        load_candidate(&self.store, &pda::candidate_address(name).0)
    }

    pub fn candidate_at(&self, address: &Pubkey) -> Result<CandidateAccount> {
        load_candidate(&self.store, address)
    }

    pub fn voter(&self, authority: &Pubkey) -> Result<VoterAccount> {
        load_voter(&self.store, &pda::voter_address(authority).0)
    }

    /// Every valid candidate record, most votes first, ties by name.
    ///
    /// Accounts that carry the candidate discriminator but fail to decode or
    /// to re-derive to their own address are skipped.
    pub fn standings(&self) -> Vec<(Pubkey, CandidateAccount)> {
        let mut standings: Vec<_> = self
            .store
            .iter()
            .filter(|(_, account)| {
                account.owner == vote_d21::ID
                    && account.data.starts_with(CandidateAccount::DISCRIMINATOR)
            })
            .filter_map(|(address, account)| {
                decode_candidate(&account.data)
                    .ok()
                    .filter(|candidate| candidate.is_stored_at(address))
                    .map(|candidate| (*address, candidate))
            })
            .collect();

        standings.sort_by(|(_, a), (_, b)| {
            b.votes
                .cmp(&a.votes)
                .then_with(|| a.name.cmp(&b.name))
        });
        standings
    }
}

fn require_signer(signers: &[Pubkey], key: &Pubkey) -> Result<()> {
    require!(signers.contains(key), AnchorErrorCode::AccountNotSigner);
    Ok(())
}

fn execute(
    tx: &mut Transaction<'_>,
    instruction: &Instruction,
    signers: &[Pubkey],
) -> Result<Option<ProgramEvent>> {
    match instruction {
        Instruction::InitializeCandidate {
            candidate,
            payer,
            name,
        } => {
            require_signer(signers, payer)?;
            // Seeds are capped at 32 bytes, so the name is checked before deriving.
            CandidateAccount::validate_name(name)?;
            let (expected, bump) = pda::candidate_address(name);
            require_keys_eq!(*candidate, expected, AnchorErrorCode::ConstraintSeeds);

            require!(
                tx.get(candidate).is_none(),
                ErrorCode::AccountAlreadyInitialized
            );

            let mut record = CandidateAccount::default();
            let event = create_candidate(&mut record, *candidate, name.clone(), bump)?;
            tx.put(*candidate, to_stored(&record, CandidateAccount::SPACE)?);

            Ok(Some(ProgramEvent::CandidateInitialized(event)))
        }
        Instruction::InitializeVoter {
            voter,
            authority,
            payer,
        } => {
            require_signer(signers, authority)?;
            require_signer(signers, payer)?;
            let (expected, bump) = pda::voter_address(authority);
            require_keys_eq!(*voter, expected, AnchorErrorCode::ConstraintSeeds);

            // Occupancy alone decides, whatever the existing bytes say.
            require!(
                tx.get(voter).is_none(),
                ErrorCode::AccountAlreadyInitialized
            );

            let mut record = VoterAccount::default();
            create_voter(&mut record, *authority, bump)?;
            tx.put(*voter, to_stored(&record, VoterAccount::SPACE)?);

            Ok(None)
        }
        Instruction::Vote {
            voter,
            candidate1,
            candidate2,
            authority,
            candidate_keys,
        } => {
            require_signer(signers, authority)?;
            let mut voter_record = load_voter(&*tx, voter)?;
            let mut candidate1_record = load_candidate(&*tx, candidate1)?;
            let mut candidate2_record = load_candidate(&*tx, candidate2)?;

            let event = cast_ballot(
                authority,
                &mut voter_record,
                (*candidate1, &mut candidate1_record),
                (*candidate2, &mut candidate2_record),
                *candidate_keys,
            )?;

            tx.put(*voter, to_stored(&voter_record, VoterAccount::SPACE)?);
            tx.put(
                *candidate1,
                to_stored(&candidate1_record, CandidateAccount::SPACE)?,
            );
            tx.put(
                *candidate2,
                to_stored(&candidate2_record, CandidateAccount::SPACE)?,
            );

            Ok(Some(ProgramEvent::VoteCast(event)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSink {
        published: usize,
    }

    impl EventSink for CountingSink {
        fn publish(&mut self, _event: &ProgramEvent) {
            self.published += 1;
        }
    }

    #[test]
    fn custom_sink_only_sees_committed_events() {
        let mut ledger = Ledger::with_sink(CountingSink::default());
        let payer = Pubkey::new_unique();
        let alice = Instruction::initialize_candidate(payer, "Alice").unwrap();
        ledger.process(&alice, &[payer]).unwrap();
        assert_eq!(ledger.sink().published, 1);

        let err = ledger
            .process_transaction(
                &[
                    Instruction::initialize_candidate(payer, "Bob").unwrap(),
                    Instruction::initialize_candidate(payer, "Alice").unwrap(),
                ],
                &[payer],
            )
            .unwrap_err();

        assert_eq!(err, error!(ErrorCode::AccountAlreadyInitialized));
        assert_eq!(ledger.sink().published, 1);
        assert!(ledger.candidate("Bob").is_err());
    }

    #[test]
    fn silent_sink_still_applies_state() {
        let mut ledger = Ledger::with_sink(());
        let authority = Pubkey::new_unique();
        ledger
            .process_transaction(
                &[
                    Instruction::initialize_candidate(authority, "Alice").unwrap(),
                    Instruction::initialize_candidate(authority, "Bob").unwrap(),
                    Instruction::initialize_voter(authority, authority),
                    Instruction::vote(authority, ["Alice", "Bob"]).unwrap(),
                ],
                &[authority],
            )
            .unwrap();

        assert_eq!(ledger.candidate("Alice").unwrap().votes, 1);
        assert!(ledger.voter(&authority).unwrap().voted);
    }

    #[test]
    fn standings_order_by_votes_then_name() {
        let mut ledger = Ledger::new();
        let payer = Pubkey::new_unique();
        for name in ["Diana", "Bob", "Alice"] {
            let ix = Instruction::initialize_candidate(payer, name).unwrap();
            ledger.process(&ix, &[payer]).unwrap();
        }

        let authority = Pubkey::new_unique();
        ledger
            .process_transaction(
                &[
                    Instruction::initialize_voter(authority, authority),
                    Instruction::vote(authority, ["Diana", "Bob"]).unwrap(),
                ],
                &[authority],
            )
            .unwrap();

        let names: Vec<_> = ledger
            .standings()
            .into_iter()
            .map(|(_, candidate)| (candidate.name, candidate.votes))
            .collect();
        assert_eq!(
            names,
            vec![
                ("Bob".to_string(), 1),
                ("Diana".to_string(), 1),
                ("Alice".to_string(), 0),
            ]
        );
    }

    #[test]
    fn standings_skip_records_at_foreign_addresses() {
        let mut ledger = Ledger::new();
        let forged = CandidateAccount {
            name: "Mallory".to_string(),
            votes: 1_000,
            bump: pda::candidate_address("Mallory").1,
        };
        ledger.store_mut().insert(
            Pubkey::new_unique(),
            to_stored(&forged, CandidateAccount::SPACE).unwrap(),
        );

        assert!(ledger.standings().is_empty());
    }

    #[test]
    fn missing_signature_is_rejected() {
        let mut ledger = Ledger::new();
        let authority = Pubkey::new_unique();
        let payer = Pubkey::new_unique();
        let ix = Instruction::initialize_voter(authority, payer);

        let err = ledger.process(&ix, &[payer]).unwrap_err();
        assert_eq!(err, error!(AnchorErrorCode::AccountNotSigner));
        assert!(ledger.store().is_empty());
    }

    #[test]
    fn declared_address_must_match_derivation() {
        let mut ledger = Ledger::new();
        let payer = Pubkey::new_unique();
        let ix = Instruction::InitializeCandidate {
            candidate: pda::candidate_address("Bob").0,
            payer,
            name: "Alice".to_string(),
        };

        let err = ledger.process(&ix, &[payer]).unwrap_err();
        assert_eq!(err, error!(AnchorErrorCode::ConstraintSeeds));
    }
}
