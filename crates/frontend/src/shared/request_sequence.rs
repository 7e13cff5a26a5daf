//! Latest-wins ordering of overlapping async loads
//!
//! Each load takes a ticket; only the result carrying the most recently
//! issued ticket may be applied, older results are dropped.

/// Номер запроса, выданный `RequestSequence::next`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSequence {
    issued: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> PresetTicket {
        self.issued += 1;
        PresetTicket(self.issued)
    }

    pub fn is_latest(&self, ticket: PresetTicket) -> bool {
        ticket.0 == self.issued
    }
}
