use anchor_lang::Event;
use vote_d21::{CandidateInitialized, VoteCast};

/// Events the program emits, delivered once their transaction has committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProgramEvent {
    CandidateInitialized(CandidateInitialized),
    VoteCast(VoteCast),
}

impl ProgramEvent {
    /// Discriminator followed by the Borsh payload, the bytes `emit!` logs.
    pub fn data(&self) -> Vec<u8> {
        match self {
            ProgramEvent::CandidateInitialized(event) => event.data(),
            ProgramEvent::VoteCast(event) => event.data(),
        }
    }
}

/// Receives events for off-chain indexing. Sinks observe state changes, they
/// never decide them.
pub trait EventSink {
    fn publish(&mut self, event: &ProgramEvent);
}

impl EventSink for Vec<ProgramEvent> {
    fn publish(&mut self, event: &ProgramEvent) {
        self.push(event.clone());
    }
}

impl EventSink for () {
    fn publish(&mut self, _event: &ProgramEvent) {}
}
