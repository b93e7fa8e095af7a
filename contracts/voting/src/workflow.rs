use core::cmp::Ordering;

use crate::errors::VotingError;
use crate::types::WorkflowStatus;

impl WorkflowStatus {
    /// The phase an admin transition moves to, or `None` once tallied.
    pub fn next(self) -> Option<WorkflowStatus> {
        match self {
            WorkflowStatus::RegisteringVoters => Some(WorkflowStatus::ProposalsRegistrationStarted),
            WorkflowStatus::ProposalsRegistrationStarted => {
                Some(WorkflowStatus::ProposalsRegistrationEnded)
            }
            WorkflowStatus::ProposalsRegistrationEnded => Some(WorkflowStatus::VotingSessionStarted),
            WorkflowStatus::VotingSessionStarted => Some(WorkflowStatus::VotingSessionEnded),
            WorkflowStatus::VotingSessionEnded => Some(WorkflowStatus::VotesTallied),
            WorkflowStatus::VotesTallied => None,
        }
    }
}

/// Checks that `current` is exactly `required`.
///
/// A phase that has not come up yet and one that is already over are
/// reported with different codes.
pub fn require_status(
    current: WorkflowStatus,
    required: WorkflowStatus,
) -> Result<(), VotingError> {
    match current.cmp(&required) {
        Ordering::Equal => Ok(()),
        Ordering::Less => Err(VotingError::PhaseNotReached),
        Ordering::Greater => Err(VotingError::PhaseAlreadyPassed),
    }
}

/// Index and count of the leading proposal.
///
/// Ties keep the earliest index: a later proposal only takes the lead with a
/// strictly greater count. An empty input yields `(0, 0)`.
pub fn leading_proposal<I>(vote_counts: I) -> (u32, u32)
where
    I: IntoIterator<Item = u32>,
{
    let mut leader = (0u32, 0u32);
    for (index, count) in (0u32..).zip(vote_counts) {
        if count > leader.1 {
            leader = (index, count);
        }
    }
    leader
}
