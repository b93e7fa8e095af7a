use soroban_sdk::{Address, Env, String};

use crate::errors::VotingError;
use crate::types::{DataKey, Proposal, Voter, WorkflowStatus};

// ── Ledger TTL constants ─────────────────────────────────────────────────────
// At ~5s per ledger a day is 17,280 ledgers. Entries are topped back up to
// 30 days whenever they drop below 29.
pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const BUMP_LEDGERS: u32 = 30 * DAY_IN_LEDGERS;
const BUMP_THRESHOLD: u32 = BUMP_LEDGERS - DAY_IN_LEDGERS;

/// Description of the proposal seeded at index 0.
pub const GENESIS_DESCRIPTION: &str = "GENESIS";

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_LEDGERS);
}

// ── Admin ────────────────────────────────────────────────────────────────────

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Result<Address, VotingError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(VotingError::NotInitialized)
}

// ── Workflow status ──────────────────────────────────────────────────────────

pub fn set_status(env: &Env, status: WorkflowStatus) {
    env.storage().instance().set(&DataKey::Status, &status);
}

pub fn get_status(env: &Env) -> Result<WorkflowStatus, VotingError> {
    env.storage()
        .instance()
        .get(&DataKey::Status)
        .ok_or(VotingError::NotInitialized)
}

// ── Winner ───────────────────────────────────────────────────────────────────

pub fn set_winning_proposal(env: &Env, proposal_id: u32) {
    env.storage()
        .instance()
        .set(&DataKey::WinningProposal, &proposal_id);
}

pub fn get_winning_proposal(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::WinningProposal)
        .unwrap_or(0)
}

// ── Voters ───────────────────────────────────────────────────────────────────

pub fn get_voter(env: &Env, voter: &Address) -> Option<Voter> {
    env.storage()
        .persistent()
        .get(&DataKey::Voter(voter.clone()))
}

pub fn is_registered(env: &Env, voter: &Address) -> bool {
    get_voter(env, voter).map_or(false, |v| v.is_registered)
}

pub fn save_voter(env: &Env, address: &Address, voter: &Voter) {
    let key = DataKey::Voter(address.clone());
    env.storage().persistent().set(&key, voter);
    env.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_LEDGERS);
}

/// Keeps a registry entry live while its voter keeps using the contract.
pub fn bump_voter(env: &Env, address: &Address) {
    env.storage().persistent().extend_ttl(
        &DataKey::Voter(address.clone()),
        BUMP_THRESHOLD,
        BUMP_LEDGERS,
    );
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn get_proposal_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

pub fn get_proposal(env: &Env, proposal_id: u32) -> Option<Proposal> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id))
}

pub fn save_proposal(env: &Env, proposal_id: u32, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal_id);
    env.storage().persistent().set(&key, proposal);
    env.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_LEDGERS);
}

pub fn bump_proposal(env: &Env, proposal_id: u32) {
    env.storage().persistent().extend_ttl(
        &DataKey::Proposal(proposal_id),
        BUMP_THRESHOLD,
        BUMP_LEDGERS,
    );
}

/// Appends a proposal at the next index and returns that index.
pub fn push_proposal(env: &Env, description: String) -> u32 {
    let proposal_id = get_proposal_count(env);
    save_proposal(
        env,
        proposal_id,
        &Proposal {
            description,
            vote_count: 0,
        },
    );
    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &(proposal_id + 1));
    proposal_id
}
