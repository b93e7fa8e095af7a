use soroban_sdk::{contract, contractimpl, log, symbol_short, Address, Env, String, Symbol};

use crate::{
    access,
    errors::VotingError,
    events, storage,
    types::{Proposal, Voter, WorkflowStatus},
    workflow,
};

#[contract]
pub struct VotingContract;

#[contractimpl]
impl VotingContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Fix the administrator and open voter registration.
    /// Seeds proposal 0 with the "GENESIS" sentinel. Can only be called once.
    pub fn initialize(env: Env, admin: Address) -> Result<(), VotingError> {
        if storage::has_admin(&env) {
            return Err(VotingError::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_admin(&env, &admin);
        storage::set_status(&env, WorkflowStatus::RegisteringVoters);
        storage::set_winning_proposal(&env, 0);
        storage::push_proposal(&env, String::from_str(&env, storage::GENESIS_DESCRIPTION));
        storage::bump_instance(&env);

        Ok(())
    }

    // ── Registration ─────────────────────────────────────────────────────────

    /// Add `voter` to the registry. Admin only, while registering voters.
    pub fn register_voter(env: Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        check_status(
            &env,
            symbol_short!("reg_voter"),
            WorkflowStatus::RegisteringVoters,
        )?;
        if storage::is_registered(&env, &voter) {
            return Err(VotingError::AlreadyRegistered);
        }

        storage::save_voter(&env, &voter, &Voter::registered());
        storage::bump_instance(&env);
        events::voter_registered(&env, &voter);

        Ok(())
    }

    /// Append a proposal and return its index.
    pub fn submit_proposal(
        env: Env,
        caller: Address,
        description: String,
    ) -> Result<u32, VotingError> {
        access::require_voter(&env, &caller)?;
        check_status(
            &env,
            symbol_short!("propose"),
            WorkflowStatus::ProposalsRegistrationStarted,
        )?;
        if description.len() == 0 {
            return Err(VotingError::EmptyProposal);
        }

        let proposal_id = storage::push_proposal(&env, description);
        storage::bump_instance(&env);
        events::proposal_registered(&env, proposal_id);

        Ok(proposal_id)
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    /// Record the caller's single vote for `proposal_id`.
    pub fn cast_vote(env: Env, caller: Address, proposal_id: u32) -> Result<(), VotingError> {
        access::require_voter(&env, &caller)?;
        check_status(
            &env,
            symbol_short!("vote"),
            WorkflowStatus::VotingSessionStarted,
        )?;

        let mut voter = storage::get_voter(&env, &caller).ok_or(VotingError::Unauthorized)?;
        if voter.has_voted {
            return Err(VotingError::AlreadyVoted);
        }
        let mut proposal =
            storage::get_proposal(&env, proposal_id).ok_or(VotingError::ProposalNotFound)?;

        voter.has_voted = true;
        voter.voted_proposal_id = proposal_id;
        proposal.vote_count += 1;

        storage::save_voter(&env, &caller, &voter);
        storage::save_proposal(&env, proposal_id, &proposal);
        storage::bump_instance(&env);
        events::voted(&env, &caller, proposal_id);

        Ok(())
    }

    // ── Phase transitions ────────────────────────────────────────────────────

    pub fn start_proposals_registering(env: Env, caller: Address) -> Result<(), VotingError> {
        advance(
            &env,
            &caller,
            symbol_short!("start_prp"),
            WorkflowStatus::RegisteringVoters,
        )
    }

    pub fn end_proposals_registering(env: Env, caller: Address) -> Result<(), VotingError> {
        advance(
            &env,
            &caller,
            symbol_short!("end_prp"),
            WorkflowStatus::ProposalsRegistrationStarted,
        )
    }

    pub fn start_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        advance(
            &env,
            &caller,
            symbol_short!("start_vot"),
            WorkflowStatus::ProposalsRegistrationEnded,
        )
    }

    pub fn end_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        advance(
            &env,
            &caller,
            symbol_short!("end_vot"),
            WorkflowStatus::VotingSessionStarted,
        )
    }

    /// Pick the winner and close the election. Returns the winning index.
    ///
    /// Proposals are scanned in index order and ties go to the lowest index,
    /// so with no votes at all the sentinel wins.
    pub fn tally_votes(env: Env, caller: Address) -> Result<u32, VotingError> {
        access::require_admin(&env, &caller)?;
        check_status(
            &env,
            symbol_short!("tally"),
            WorkflowStatus::VotingSessionEnded,
        )?;

        let count = storage::get_proposal_count(&env);
        let (winner, votes) = workflow::leading_proposal(
            (0..count).map(|id| storage::get_proposal(&env, id).map_or(0, |p| p.vote_count)),
        );
        log!(&env, "votes tallied", winner, votes);

        storage::set_winning_proposal(&env, winner);
        transition(&env, WorkflowStatus::VotingSessionEnded)?;

        Ok(winner)
    }

    // ── Voter queries ────────────────────────────────────────────────────────

    /// Registry record for `voter`. Unknown identities read as the zero value.
    pub fn get_voter(env: Env, caller: Address, voter: Address) -> Result<Voter, VotingError> {
        access::require_voter(&env, &caller)?;
        Ok(storage::get_voter(&env, &voter).unwrap_or_else(Voter::unregistered))
    }

    pub fn get_proposal(env: Env, caller: Address, index: u32) -> Result<Proposal, VotingError> {
        access::require_voter(&env, &caller)?;
        if index >= storage::get_proposal_count(&env) {
            return Err(VotingError::IndexOutOfRange);
        }
        let proposal = storage::get_proposal(&env, index).ok_or(VotingError::IndexOutOfRange)?;
        storage::bump_proposal(&env, index);
        Ok(proposal)
    }

    // ── Public state ─────────────────────────────────────────────────────────

    pub fn get_admin(env: Env) -> Result<Address, VotingError> {
        storage::get_admin(&env)
    }

    pub fn workflow_status(env: Env) -> Result<WorkflowStatus, VotingError> {
        storage::get_status(&env)
    }

    pub fn winning_proposal_id(env: Env) -> u32 {
        storage::get_winning_proposal(&env)
    }

    pub fn proposal_count(env: Env) -> u32 {
        storage::get_proposal_count(&env)
    }
}

/// Rejects unless the election is in `required`.
fn check_status(env: &Env, operation: Symbol, required: WorkflowStatus) -> Result<(), VotingError> {
    let current = storage::get_status(env)?;
    workflow::require_status(current, required).map_err(|err| {
        log!(env, "wrong phase", operation, required, current);
        err
    })
}

/// Admin-gated single step from `from` to its successor.
fn advance(
    env: &Env,
    caller: &Address,
    operation: Symbol,
    from: WorkflowStatus,
) -> Result<(), VotingError> {
    access::require_admin(env, caller)?;
    check_status(env, operation, from)?;
    transition(env, from)
}

fn transition(env: &Env, from: WorkflowStatus) -> Result<(), VotingError> {
    let to = from.next().ok_or(VotingError::PhaseAlreadyPassed)?;
    storage::set_status(env, to);
    storage::bump_instance(env);
    events::status_changed(env, from, to);
    Ok(())
}
