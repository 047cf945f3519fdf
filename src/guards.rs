multiversx_sc::imports!();

use crate::errors::*;
use crate::storage;
use crate::types::Proposal;

/// Predicates applied at the start of each public operation, plus the
/// execution lock.
#[multiversx_sc::module]
pub trait GuardsModule: storage::StorageModule {
    fn require_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), ERR_UNAUTHORIZED);
    }

    /// Returns the caller, who must currently be a member.
    fn require_member(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(self.members().contains(&caller), ERR_NOT_MEMBER);
        caller
    }

    fn require_non_zero(&self, address: &ManagedAddress) {
        require!(address != &ManagedAddress::zero(), ERR_ZERO_ADDRESS);
    }

    fn require_existing_proposal(&self, id: u64) -> Proposal<Self::Api> {
        let proposal_mapper = self.proposals(id);
        require!(!proposal_mapper.is_empty(), ERR_INVALID_PROPOSAL);
        proposal_mapper.get()
    }

    fn require_not_executed(&self, proposal: &Proposal<Self::Api>) {
        require!(!proposal.executed, ERR_PROPOSAL_ALREADY_EXECUTED);
    }

    fn require_open(&self, proposal: &Proposal<Self::Api>) {
        let now = self.blockchain().get_block_timestamp();
        require!(now <= proposal.deadline, ERR_VOTING_PERIOD_ENDED);
    }

    fn require_voting_closed(&self, proposal: &Proposal<Self::Api>) {
        let now = self.blockchain().get_block_timestamp();
        require!(now > proposal.deadline, ERR_INVALID_DEADLINE);
    }

    // ========================================================
    // Execution lock
    // A failed call reverts the lock together with the rest of
    // its writes, so only the success path has to release it.
    // ========================================================

    fn require_unlocked(&self) {
        require!(!self.execution_lock().get(), ERR_REENTRANT_CALL);
    }

    fn acquire_execution_lock(&self) {
        self.require_unlocked();
        self.execution_lock().set(true);
    }

    fn release_execution_lock(&self) {
        self.execution_lock().clear();
    }
}
