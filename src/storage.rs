multiversx_sc::imports!();

use crate::types::Proposal;

/// Every piece of persistent contract state.
#[multiversx_sc::module]
pub trait StorageModule {
    // ── Configuration ──

    #[view(owner)]
    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(quorumBps)]
    #[storage_mapper("quorumBps")]
    fn quorum_bps(&self) -> SingleValueMapper<u32>;

    #[view(requireSimpleMajority)]
    #[storage_mapper("requireSimpleMajority")]
    fn require_simple_majority(&self) -> SingleValueMapper<bool>;

    // ── Membership ──

    #[storage_mapper("members")]
    fn members(&self) -> UnorderedSetMapper<ManagedAddress>;

    // ── Proposals ──

    #[view(proposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;

    // ── Reentrancy ──

    #[storage_mapper("executionLock")]
    fn execution_lock(&self) -> SingleValueMapper<bool>;
}
