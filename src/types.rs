multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Status — derived, never stored
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Deadline not reached. Members can vote.
    Active,
    /// Voting closed and the decision rule accepts. Any member can execute.
    Accepted,
    /// Voting closed without quorum or majority.
    Rejected,
    /// Funds sent. Terminal state.
    Executed,
}

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub amount: BigUint<M>,
    pub recipient: ManagedAddress<M>,
    pub description: ManagedBuffer<M>,
    /// Block timestamp after which voting is closed
    pub deadline: u64,
    pub executed: bool,
    pub for_votes: u64,
    pub against_votes: u64,
    /// Member count at creation; quorum base for the proposal's whole life
    pub members_snapshot: u64,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn total_votes(&self) -> u64 {
        self.for_votes + self.against_votes
    }

    pub fn is_open_at(&self, timestamp: u64) -> bool {
        !self.executed && timestamp <= self.deadline
    }
}
