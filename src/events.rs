multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("memberAdded")]
    fn member_added_event(&self, #[indexed] member: &ManagedAddress);

    #[event("memberRemoved")]
    fn member_removed_event(&self, #[indexed] member: &ManagedAddress);

    #[event("deposit")]
    fn deposit_event(&self, #[indexed] sender: &ManagedAddress, amount: &BigUint);

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] deadline: u64,
        description: &ManagedBuffer,
    );

    /// Carries the tallies after this vote was counted.
    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
        #[indexed] for_votes: u64,
        #[indexed] against_votes: u64,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] recipient: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("quorumUpdated")]
    fn quorum_updated_event(&self, #[indexed] old_bps: u32, #[indexed] new_bps: u32);

    #[event("majorityRequirementUpdated")]
    fn majority_requirement_updated_event(&self, #[indexed] old_value: bool, #[indexed] new_value: bool);
}
