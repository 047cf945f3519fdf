#![no_std]

multiversx_sc::imports!();

pub mod config;
pub mod decision;
pub mod errors;
pub mod events;
pub mod guards;
pub mod membership;
pub mod storage;
pub mod types;
pub mod vault;

use decision::BPS_DENOMINATOR;
use errors::*;
use types::{Proposal, ProposalStatus};

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait SafeClub:
    storage::StorageModule
    + events::EventsModule
    + guards::GuardsModule
    + membership::MembershipModule
    + vault::VaultModule
    + config::ConfigModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        owner: ManagedAddress,
        quorum_bps: u32,
        require_simple_majority: bool,
        initial_members: MultiValueEncoded<ManagedAddress>,
    ) {
        self.require_non_zero(&owner);
        require!(quorum_bps <= BPS_DENOMINATOR, ERR_INVALID_PROPOSAL);

        self.owner().set(&owner);
        self.quorum_bps().set(quorum_bps);
        self.require_simple_majority().set(require_simple_majority);
        self.proposal_count().set(0u64);
        self.execution_lock().set(false);

        for member in initial_members {
            self.insert_member(&member);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createProposal
    // Any member can propose a single EGLD payment.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        amount: BigUint,
        recipient: ManagedAddress,
        description: ManagedBuffer,
        deadline: u64,
    ) -> u64 {
        self.require_unlocked();
        let caller = self.require_member();
        require!(amount > 0u64, ERR_INVALID_AMOUNT);
        self.require_non_zero(&recipient);
        require!(!description.is_empty(), ERR_INVALID_PROPOSAL);
        require!(
            deadline > self.blockchain().get_block_timestamp(),
            ERR_INVALID_DEADLINE
        );

        let proposal_id = self.proposal_count().get();
        let proposal = Proposal {
            id: proposal_id,
            proposer: caller.clone(),
            amount,
            recipient,
            description,
            deadline,
            executed: false,
            for_votes: 0,
            against_votes: 0,
            members_snapshot: self.member_count(),
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id + 1);

        self.proposal_created_event(
            proposal_id,
            &caller,
            &proposal.amount,
            &proposal.recipient,
            deadline,
            &proposal.description,
        );

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // One member, one vote. Not retractable, not changeable.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, support: bool) {
        self.require_unlocked();
        let caller = self.require_member();
        let mut proposal = self.require_existing_proposal(proposal_id);
        self.require_not_executed(&proposal);
        self.require_open(&proposal);
        require!(
            !self.has_voted(proposal_id, &caller).get(),
            ERR_ALREADY_VOTED
        );

        if support {
            proposal.for_votes += 1;
        } else {
            proposal.against_votes += 1;
        }

        self.has_voted(proposal_id, &caller).set(true);
        self.proposals(proposal_id).set(&proposal);

        self.vote_cast_event(
            proposal_id,
            &caller,
            support,
            proposal.for_votes,
            proposal.against_votes,
        );
    }

    // ========================================================
    // ENDPOINT: executeProposal
    // Only after the deadline. The record is marked executed
    // and stored before any EGLD leaves the contract.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, proposal_id: u64) {
        self.acquire_execution_lock();
        self.require_member();

        let mut proposal = self.require_existing_proposal(proposal_id);
        self.require_not_executed(&proposal);
        self.require_voting_closed(&proposal);
        require!(self.is_accepted(&proposal), ERR_PROPOSAL_NOT_ACCEPTED);
        require!(
            self.get_balance() >= proposal.amount,
            ERR_INSUFFICIENT_BALANCE
        );

        proposal.executed = true;
        self.proposals(proposal_id).set(&proposal);

        self.release_funds(&proposal.recipient, &proposal.amount);
        self.proposal_executed_event(proposal_id, &proposal.recipient, &proposal.amount);

        self.release_execution_lock();
    }

    // ========================================================
    // INTERNAL: decision rule against live configuration
    // ========================================================

    fn is_accepted(&self, proposal: &Proposal<Self::Api>) -> bool {
        self.decision_rule().accepts(
            proposal.members_snapshot,
            proposal.for_votes,
            proposal.against_votes,
        )
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    /// Also usable before the deadline, as a preview.
    #[view(isProposalAccepted)]
    fn is_proposal_accepted(&self, proposal_id: u64) -> bool {
        let proposal = self.require_existing_proposal(proposal_id);
        self.is_accepted(&proposal)
    }

    #[view(getQuorumThreshold)]
    fn get_quorum_threshold(&self, proposal_id: u64) -> u64 {
        let proposal = self.require_existing_proposal(proposal_id);
        self.decision_rule()
            .quorum_threshold(proposal.members_snapshot)
    }

    #[view(getProposalStatus)]
    fn get_proposal_status(&self, proposal_id: u64) -> ProposalStatus {
        let proposal = self.require_existing_proposal(proposal_id);
        if proposal.executed {
            return ProposalStatus::Executed;
        }

        let now = self.blockchain().get_block_timestamp();
        if proposal.is_open_at(now) {
            ProposalStatus::Active
        } else if self.is_accepted(&proposal) {
            ProposalStatus::Accepted
        } else {
            ProposalStatus::Rejected
        }
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_existing_proposal(proposal_id)
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        if count == 0 || from >= total {
            return result;
        }
        let end = core::cmp::min(from.saturating_add(count), total);

        for id in from..end {
            result.push(self.proposals(id).get());
        }
        result
    }

    #[view(getActiveProposals)]
    fn get_active_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        let now = self.blockchain().get_block_timestamp();

        for id in 0..total {
            let proposal = self.proposals(id).get();
            if proposal.is_open_at(now) {
                result.push(proposal);
            }
        }
        result
    }

    #[view(hasVoted)]
    fn has_voted_on(&self, proposal_id: u64, voter: &ManagedAddress) -> bool {
        self.has_voted(proposal_id, voter).get()
    }
}
