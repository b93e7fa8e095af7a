use soroban_sdk::{contracttype, Address, String};

/// Election phases, in the only order they can be visited.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WorkflowStatus {
    RegisteringVoters = 0,
    ProposalsRegistrationStarted = 1,
    ProposalsRegistrationEnded = 2,
    VotingSessionStarted = 3,
    VotingSessionEnded = 4,
    VotesTallied = 5,
}

/// A voter's registry record
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voter {
    pub is_registered: bool,
    pub has_voted: bool,
    /// 0 until a vote is cast; also the sentinel proposal's id
    pub voted_proposal_id: u32,
}

impl Voter {
    /// Zero-value record returned for identities that were never registered.
    pub fn unregistered() -> Self {
        Voter {
            is_registered: false,
            has_voted: false,
            voted_proposal_id: 0,
        }
    }

    pub fn registered() -> Self {
        Voter {
            is_registered: true,
            ..Voter::unregistered()
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub description: String,
    pub vote_count: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Admin,
    Status,
    WinningProposal,
    ProposalCount,
    Voter(Address),
    Proposal(u32),
}
