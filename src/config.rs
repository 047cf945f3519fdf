multiversx_sc::imports!();

use crate::decision::{DecisionRule, BPS_DENOMINATOR};
use crate::errors::*;
use crate::{events, guards, storage};

/// Owner-mutable acceptance settings, read live on every evaluation.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::StorageModule + guards::GuardsModule + events::EventsModule
{
    #[endpoint(setQuorumBps)]
    fn set_quorum_bps(&self, new_bps: u32) {
        self.require_unlocked();
        self.require_owner();
        require!(new_bps <= BPS_DENOMINATOR, ERR_INVALID_PROPOSAL);

        let old_bps = self.quorum_bps().get();
        self.quorum_bps().set(new_bps);

        self.quorum_updated_event(old_bps, new_bps);
    }

    #[endpoint(setRequireSimpleMajority)]
    fn set_require_simple_majority(&self, required: bool) {
        self.require_unlocked();
        self.require_owner();

        let old_value = self.require_simple_majority().get();
        self.require_simple_majority().set(required);

        self.majority_requirement_updated_event(old_value, required);
    }

    fn decision_rule(&self) -> DecisionRule {
        DecisionRule::new(
            self.quorum_bps().get(),
            self.require_simple_majority().get(),
        )
    }
}
