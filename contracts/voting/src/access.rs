//! Role guards. Each one authenticates the caller before looking at roles.

use soroban_sdk::{Address, Env};

use crate::errors::VotingError;
use crate::storage;

/// Caller must be the administrator fixed at `initialize`.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), VotingError> {
    caller.require_auth();
    let admin = storage::get_admin(env)?;
    if *caller != admin {
        return Err(VotingError::Unauthorized);
    }
    Ok(())
}

/// Caller must be in the voter registry. Refreshes the caller's entry TTL.
pub fn require_voter(env: &Env, caller: &Address) -> Result<(), VotingError> {
    caller.require_auth();
    if !storage::is_registered(env, caller) {
        return Err(VotingError::Unauthorized);
    }
    storage::bump_voter(env, caller);
    Ok(())
}
