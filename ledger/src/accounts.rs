//! Typed access to program records stored as raw bytes.
//!
//! Loading mirrors what `Account<'info, T>` plus a `seeds`/`bump` constraint
//! do on-chain: the account must exist, belong to the program, carry the
//! right discriminator and sit at the address derived from its own contents.

use anchor_lang::error::ErrorCode as AnchorErrorCode;
use anchor_lang::prelude::*;
use anchor_lang::{AccountDeserialize, AccountSerialize, Owner};
use vote_d21::{CandidateAccount, VoterAccount};

use crate::store::{AccountReader, StoredAccount};

pub fn load_account<T: AccountDeserialize + Owner>(
    reader: &impl AccountReader,
    address: &Pubkey,
) -> Result<T> {
    let account = reader
        .account(address)
        .ok_or_else(|| error!(AnchorErrorCode::AccountNotInitialized))?;
    require_keys_eq!(
        account.owner,
        T::owner(),
        AnchorErrorCode::AccountOwnedByWrongProgram
    );
    T::try_deserialize(&mut account.data.as_slice())
}

pub fn load_candidate(reader: &impl AccountReader, address: &Pubkey) -> Result<CandidateAccount> {
    let candidate: CandidateAccount = load_account(reader, address)?;
    require!(
        candidate.is_stored_at(address),
        AnchorErrorCode::ConstraintSeeds
    );
    Ok(candidate)
}

pub fn load_voter(reader: &impl AccountReader, address: &Pubkey) -> Result<VoterAccount> {
    let voter: VoterAccount = load_account(reader, address)?;
    require!(voter.is_stored_at(address), AnchorErrorCode::ConstraintSeeds);
    Ok(voter)
}

/// Serializes a record into an account of exactly `space` bytes, zero padded
/// the way the allocator leaves fresh account data.
pub fn to_stored<T: AccountSerialize + Owner>(record: &T, space: usize) -> Result<StoredAccount> {
    let mut data = Vec::with_capacity(space);
    record.try_serialize(&mut data)?;
    require!(data.len() <= space, AnchorErrorCode::AccountDidNotSerialize);
    data.resize(space, 0);

    Ok(StoredAccount {
        owner: T::owner(),
        data,
    })
}

/// Decodes raw candidate account bytes:
/// discriminator (8) | name (u32 LE length + UTF-8) | votes (u64 LE) | bump (1).
pub fn decode_candidate(data: &[u8]) -> Result<CandidateAccount> {
    CandidateAccount::try_deserialize(&mut &data[..])
}

/// Decodes raw voter account bytes:
/// discriminator (8) | authority (32) | voted (1) | choices (2 x 32) | bump (1).
pub fn decode_voter(data: &[u8]) -> Result<VoterAccount> {
    VoterAccount::try_deserialize(&mut &data[..])
}
