//! Description hashing and proposal-id derivation.
//!
//! The governor does not store a proposal's description text. Instead it
//! re-derives the proposal identity from `(actions, description_hash)` on
//! every queue/execute call, so both sides must compute the same digest
//! over the same canonical bytes. Hashing is keccak-256 over the value's
//! XDR encoding, which is byte-stable across process runs.

use soroban_sdk::{xdr::ToXdr, BytesN, Env, String, Vec, U256};

use crate::governance::ProposalAction;

/// Digest a proposal description.
///
/// Deterministic and sensitive to every byte of the input: two
/// descriptions hash equal iff they are byte-identical.
pub fn hash_description(env: &Env, description: &String) -> BytesN<32> {
    env.crypto().keccak256(&description.clone().to_xdr(env)).into()
}

/// Derive the proposal id the governor assigns to
/// `(actions, description_hash)`.
///
/// Mirrors the governor's own identity rule, which is what allows the
/// orchestrator to re-address a proposal at queue/execute time and to
/// cross-check the id returned by a submission.
pub fn derive_proposal_id(
    env: &Env,
    actions: &Vec<ProposalAction>,
    description_hash: &BytesN<32>,
) -> U256 {
    let payload = (actions.clone(), description_hash.clone()).to_xdr(env);
    let digest: BytesN<32> = env.crypto().keccak256(&payload).into();
    U256::from_be_bytes(env, &digest.into())
}
