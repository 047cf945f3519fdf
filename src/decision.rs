/// Basis points denominator
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Acceptance rule applied to a proposal's frozen snapshot and tallies.
///
/// Built from live configuration on every evaluation, so changes to quorum
/// or the majority flag affect all proposals that have not been executed yet.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DecisionRule {
    pub quorum_bps: u32,
    pub require_simple_majority: bool,
}

impl DecisionRule {
    pub fn new(quorum_bps: u32, require_simple_majority: bool) -> Self {
        DecisionRule {
            quorum_bps,
            require_simple_majority,
        }
    }

    /// Votes needed out of `members_snapshot`, rounded up.
    pub fn quorum_threshold(&self, members_snapshot: u64) -> u64 {
        let required = members_snapshot as u128 * self.quorum_bps as u128;
        let denominator = BPS_DENOMINATOR as u128;
        ((required + denominator - 1) / denominator) as u64
    }

    pub fn has_quorum(&self, members_snapshot: u64, for_votes: u64, against_votes: u64) -> bool {
        let cast = for_votes as u128 + against_votes as u128;
        cast >= self.quorum_threshold(members_snapshot) as u128
    }

    pub fn has_majority(&self, for_votes: u64, against_votes: u64) -> bool {
        !self.require_simple_majority || for_votes > against_votes
    }

    pub fn accepts(&self, members_snapshot: u64, for_votes: u64, against_votes: u64) -> bool {
        self.has_quorum(members_snapshot, for_votes, against_votes)
            && self.has_majority(for_votes, against_votes)
    }
}
