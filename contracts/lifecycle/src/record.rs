//! Persistent storage of submission records.

use soroban_sdk::{symbol_short, Env, Symbol, U256};

use common::governance::ProposalRecord;

pub(crate) const RECORD: Symbol = symbol_short!("REC");

// TTL: ~60 days at 5s/ledger
const TTL_THRESHOLD: u32 = 1_036_800;
const TTL_EXTEND_TO: u32 = 2_073_600;

pub(crate) fn record_key(id: &U256) -> (Symbol, U256) {
    (RECORD, id.clone())
}

pub(crate) fn store(env: &Env, record: &ProposalRecord) {
    let key = record_key(&record.id);
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub(crate) fn load(env: &Env, id: &U256) -> Option<ProposalRecord> {
    env.storage().persistent().get(&record_key(id))
}
