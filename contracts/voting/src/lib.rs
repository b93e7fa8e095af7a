#![no_std]
//! # Voting Workflow Contract
//!
//! A single-administrator election run as a fixed sequence of phases:
//! voter registration, proposal submission, voting, and tallying.
//!
//! ## Modules
//!
//! - `contract` - Contract entry points
//! - `access` - Administrator and registered-voter guards
//! - `workflow` - Phase ordering and the tally scan
//! - `storage` - Storage keys and TTL handling
//! - `events` - Workflow notifications
//! - `types` - Voter, proposal and phase types
//! - `errors` - Error codes

mod access;
mod contract;
mod errors;
mod events;
mod storage;
mod types;
mod workflow;

pub use contract::{VotingContract, VotingContractClient};
pub use errors::VotingError;
pub use types::{Proposal, Voter, WorkflowStatus};
