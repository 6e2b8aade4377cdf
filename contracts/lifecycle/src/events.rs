//! Structured event publishing for the lifecycle orchestrator.

use soroban_sdk::{symbol_short, Address, Env, U256};

use common::governance::{ProposalRecord, Support};

pub fn publish_submitted(env: &Env, record: &ProposalRecord, proposer: &Address) {
    env.events().publish(
        (symbol_short!("PROP_SUB"), record.id.clone()),
        (
            proposer.clone(),
            record.actions.len(),
            record.description_hash.clone(),
        ),
    );
}

pub fn publish_vote_submitted(
    env: &Env,
    proposal_id: &U256,
    voter: &Address,
    support: &Support,
    weight: i128,
) {
    env.events().publish(
        (symbol_short!("VOTE_SUB"), proposal_id.clone()),
        (voter.clone(), support.clone(), weight),
    );
}

pub fn publish_queued(env: &Env, proposal_id: &U256) {
    env.events()
        .publish((symbol_short!("PROP_QUE"),), proposal_id.clone());
}

pub fn publish_executed(env: &Env, proposal_id: &U256) {
    env.events()
        .publish((symbol_short!("PROP_EXE"),), proposal_id.clone());
}
