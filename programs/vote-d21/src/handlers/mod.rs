pub mod initialize_candidate;
pub use initialize_candidate::*;

pub mod initialize_voter;
pub use initialize_voter::*;

pub mod vote;
pub use vote::*;
