use std::collections::BTreeMap;

use anchor_lang::prelude::*;

/// Raw account as the ledger keeps it: the owning program and its bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoredAccount {
    pub owner: Pubkey,
    pub data: Vec<u8>,
}

/// Read access to accounts by address.
pub trait AccountReader {
    fn account(&self, address: &Pubkey) -> Option<&StoredAccount>;
}

/// Every account on the ledger, keyed by address.
#[derive(Clone, Debug, Default)]
pub struct AccountStore {
    accounts: BTreeMap<Pubkey, StoredAccount>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, address: &Pubkey) -> Option<&StoredAccount> {
        self.accounts.get(address)
    }

    pub fn contains(&self, address: &Pubkey) -> bool {
        self.accounts.contains_key(address)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Pubkey, &StoredAccount)> {
        self.accounts.iter()
    }

    /// Writes an account directly, outside any transaction. Meant for genesis
    /// state and fixtures; instructions always go through [`Transaction`].
    pub fn insert(&mut self, address: Pubkey, account: StoredAccount) -> Option<StoredAccount> {
        self.accounts.insert(address, account)
    }

    pub fn begin(&mut self) -> Transaction<'_> {
        Transaction {
            store: self,
            staged: BTreeMap::new(),
        }
    }
}

impl AccountReader for AccountStore {
    fn account(&self, address: &Pubkey) -> Option<&StoredAccount> {
        self.get(address)
    }
}

/// Writes staged against a store.
///
/// Reads see staged writes first. Nothing reaches the store until
/// [`Transaction::commit`]; dropping the transaction discards every write.
pub struct Transaction<'a> {
    store: &'a mut AccountStore,
    staged: BTreeMap<Pubkey, StoredAccount>,
}

impl Transaction<'_> {
    pub fn get(&self, address: &Pubkey) -> Option<&StoredAccount> {
        self.staged
            .get(address)
            .or_else(|| self.store.get(address))
    }

    pub fn put(&mut self, address: Pubkey, account: StoredAccount) {
        self.staged.insert(address, account);
    }

    pub fn staged_len(&self) -> usize {
        self.staged.len()
    }

    /// Applies every staged write and returns how many accounts changed.
    pub fn commit(self) -> usize {
        let Transaction { store, staged } = self;
        let written = staged.len();
        store.accounts.extend(staged);
        written
    }
}

impl AccountReader for Transaction<'_> {
    fn account(&self, address: &Pubkey) -> Option<&StoredAccount> {
        self.get(address)
    }
}
