//! Governance data model shared across the workspace.

use soroban_sdk::{contracttype, Address, Bytes, BytesN, Vec, U256};

/// Observed state of a proposal, as reported by the governor.
///
/// ```text
/// Pending ──► Active ──► {Defeated | Succeeded} ──► Queued ──► Executed
///                                                     │
///                                                     └──► Expired (grace period elapsed)
/// ```
///
/// `Canceled` is reachable from several points; all of `Canceled`,
/// `Defeated`, `Expired` and `Executed` are terminal. The orchestrator only
/// reads this enum — every transition is driven by the governor itself.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProposalState {
    Pending,
    Active,
    Canceled,
    Defeated,
    Succeeded,
    Queued,
    Expired,
    Executed,
}

/// Ballot support value, using the conventional 0/1/2 wire codes.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Support {
    Against = 0,
    For = 1,
    Abstain = 2,
}

/// A single `(target, native_value, encoded_call)` triple.
///
/// The ordered list of actions, together with the description hash, is the
/// canonical identity of a proposal. The governor re-derives the proposal
/// id from these at queue/execute time, so the list must be byte-for-byte
/// identical across submission, queue and execute.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalAction {
    /// Contract that receives the call when the proposal executes.
    pub target: Address,
    /// Native value forwarded with the call.
    pub value: i128,
    /// Opaque call payload produced by [`crate::encode::encode_call`].
    pub call_data: Bytes,
}

/// Receipt returned after a ballot is recorded.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteReceipt {
    pub support: Support,
    /// Voting weight credited to the ballot, from the voter's snapshot.
    pub weight: i128,
}

/// The orchestrator's local record of a submission.
///
/// Kept so that queue/execute can assert, before any cross-contract call,
/// that the caller-supplied actions still equal the ones submitted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalRecord {
    pub id: U256,
    pub actions: Vec<ProposalAction>,
    pub description_hash: BytesN<32>,
    pub submitted_at: u64,
}
