//! Off-chain execution of the `vote-d21` program.
//!
//! The ledger keeps every account in an explicit [`AccountStore`] and runs
//! instructions through the same handler core the program uses on-chain, with
//! a [`Transaction`] standing in for the runtime's all-or-nothing commit.

pub mod accounts;
pub mod events;
pub mod instruction;
pub mod ledger;
pub mod store;

pub use accounts::{decode_candidate, decode_voter};
pub use events::{EventSink, ProgramEvent};
pub use instruction::Instruction;
pub use ledger::Ledger;
pub use store::{AccountReader, AccountStore, StoredAccount, Transaction};
