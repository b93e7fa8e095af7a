//! Workflow notifications, published once per successful mutating call.

use soroban_sdk::{symbol_short, Address, Env};

use crate::types::WorkflowStatus;

pub fn voter_registered(env: &Env, voter: &Address) {
    env.events()
        .publish((symbol_short!("voter_reg"),), (voter.clone(),));
}

pub fn proposal_registered(env: &Env, proposal_id: u32) {
    env.events()
        .publish((symbol_short!("prop_reg"),), (proposal_id,));
}

pub fn voted(env: &Env, voter: &Address, proposal_id: u32) {
    env.events()
        .publish((symbol_short!("voted"),), (voter.clone(), proposal_id));
}

pub fn status_changed(env: &Env, previous: WorkflowStatus, new: WorkflowStatus) {
    env.events()
        .publish((symbol_short!("status"),), (previous, new));
}
