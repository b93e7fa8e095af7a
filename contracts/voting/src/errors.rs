//! Error codes for the voting workflow.

use soroban_sdk::contracterror;

/// Codes are stable across releases; clients match on the numeric value.
///
/// - 1-3: access and lifecycle
/// - 4-5: phase gating
/// - 6-10: argument checks
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    /// Caller is not the administrator, or not a registered voter
    Unauthorized = 1,

    /// `initialize` has not been called
    NotInitialized = 2,

    /// `initialize` was already called
    AlreadyInitialized = 3,

    /// The phase the operation needs has not started yet
    PhaseNotReached = 4,

    /// The phase the operation needs is already over
    PhaseAlreadyPassed = 5,

    /// Voter is already in the registry
    AlreadyRegistered = 6,

    /// Proposal description is empty
    EmptyProposal = 7,

    /// Voter has already cast their vote
    AlreadyVoted = 8,

    /// Vote targets a proposal that does not exist
    ProposalNotFound = 9,

    /// Proposal lookup past the end of the list
    IndexOutOfRange = 10,
}

impl VotingError {
    /// True for both flavours of a wrong-phase rejection.
    pub fn is_invalid_phase(&self) -> bool {
        matches!(
            self,
            VotingError::PhaseNotReached | VotingError::PhaseAlreadyPassed
        )
    }
}
