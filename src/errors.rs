// Error messages surfaced to callers as user errors.

// ── Authorization ──
pub const ERR_UNAUTHORIZED: &str = "Unauthorized";
pub const ERR_NOT_MEMBER: &str = "NotMember";

// ── Validation ──
pub const ERR_ZERO_ADDRESS: &str = "ZeroAddress";
pub const ERR_INVALID_AMOUNT: &str = "InvalidAmount";
pub const ERR_INVALID_DEADLINE: &str = "InvalidDeadline";
pub const ERR_INVALID_PROPOSAL: &str = "InvalidProposal";

// ── State conflicts ──
pub const ERR_ALREADY_MEMBER: &str = "AlreadyMember";
pub const ERR_ALREADY_VOTED: &str = "AlreadyVoted";
pub const ERR_PROPOSAL_ALREADY_EXECUTED: &str = "ProposalAlreadyExecuted";
pub const ERR_VOTING_PERIOD_ENDED: &str = "VotingPeriodEnded";

// ── Decision / resources ──
pub const ERR_PROPOSAL_NOT_ACCEPTED: &str = "ProposalNotAccepted";
pub const ERR_INSUFFICIENT_BALANCE: &str = "InsufficientBalance";

/// Raised while an execution holds the lock.
pub const ERR_REENTRANT_CALL: &str = "ReentrantCall";
