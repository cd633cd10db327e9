pub mod candidate;
pub use candidate::*;

pub mod voter;
pub use voter::*;

pub mod events;
pub use events::*;
