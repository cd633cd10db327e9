use anchor_lang::prelude::*;

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateInitialized {
    pub name: String,
    /// Address of the new candidate record
    pub pubkey: Pubkey,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteCast {
    /// Authority that signed the ballot
    pub voter: Pubkey,
    pub candidates: [Pubkey; 2],
}
