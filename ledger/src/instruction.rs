use anchor_lang::prelude::*;
use vote_d21::{pda, CandidateAccount};

/// One program instruction with the accounts it declares.
///
/// Addresses are whatever the caller declares; the processor re-derives and
/// checks them, so hand-built instructions are allowed to be wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    InitializeCandidate {
        candidate: Pubkey,
        payer: Pubkey,
        name: String,
    },
    InitializeVoter {
        voter: Pubkey,
        authority: Pubkey,
        payer: Pubkey,
    },
    Vote {
        voter: Pubkey,
        candidate1: Pubkey,
        candidate2: Pubkey,
        authority: Pubkey,
        candidate_keys: [Pubkey; 2],
    },
}

impl Instruction {
    pub fn initialize_candidate(payer: Pubkey, name: &str) -> Result<Self> {
        CandidateAccount::validate_name(name)?;
        let (candidate, _) = pda::candidate_address(name);
        Ok(Instruction::InitializeCandidate {
            candidate,
            payer,
            name: name.to_string(),
        })
    }

    pub fn initialize_voter(authority: Pubkey, payer: Pubkey) -> Self {
        let (voter, _) = pda::voter_address(&authority);
        Instruction::InitializeVoter {
            voter,
            authority,
            payer,
        }
    }

    /// Ballot for two candidates by name, declaring their derived records.
    pub fn vote(authority: Pubkey, candidates: [&str; 2]) -> Result<Self> {
        for name in candidates {
            CandidateAccount::validate_name(name)?;
        }
        let (voter, _) = pda::voter_address(&authority);
        let (candidate1, _) = pda::candidate_address(candidates[0]);
        let (candidate2, _) = pda::candidate_address(candidates[1]);
        Ok(Instruction::Vote {
            voter,
            candidate1,
            candidate2,
            authority,
            candidate_keys: [candidate1, candidate2],
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Instruction::InitializeCandidate { .. } => "InitializeCandidate",
            Instruction::InitializeVoter { .. } => "InitializeVoter",
            Instruction::Vote { .. } => "Vote",
        }
    }
}
