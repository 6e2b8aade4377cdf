//! Reference collaborators for exercising the orchestrator.
//!
//! [`ReferenceGovernor`] is a faithful stand-in for the external voting
//! contract: timestamp-gated Pending → Active → Succeeded/Defeated
//! progression, per-address voting power, quorum and proposal-threshold
//! checks, double-vote rejection, a queue `eta` with minimum delay and a
//! grace period, and action dispatch on execute. [`ValueStore`] is the
//! target contract the demo proposal mutates.
//!
//! These are test doubles, not production contracts: voting power is
//! injected directly (`set_power`) instead of being read from a token, and
//! no entry point requires auth of its own — the orchestrator in front of
//! them already does.

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, Address, BytesN, Env,
    String, Symbol, Val, Vec, U256,
};

use common::encode::decode_call;
use common::governance::{ProposalAction, ProposalState, Support};
use common::hash::{derive_proposal_id, hash_description};

// ── Reference governor ────────────────────────────────────────────────────────

const PARAMS: Symbol = symbol_short!("PARAMS");
const PROP: Symbol = symbol_short!("PROP");
const POWER: Symbol = symbol_short!("POWER");
const VOTED: Symbol = symbol_short!("VOTED");

/// Window after `eta` during which execution is still accepted.
const GRACE_PERIOD: u64 = 1_209_600; // 14 days

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum GovernorError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    UnknownProposal = 3,
    DuplicateProposal = 4,
    BelowThreshold = 5,
    NotActive = 6,
    AlreadyVoted = 7,
    ZeroVotingWeight = 8,
    NotSucceeded = 9,
    NotQueued = 10,
    TimelockNotReady = 11,
    MalformedAction = 12,
}

/// Timing and threshold parameters, in seconds / raw vote weight.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GovernorParams {
    pub voting_delay: u64,
    pub voting_period: u64,
    pub min_delay: u64,
    pub quorum: i128,
    pub proposal_threshold: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct GovProposal {
    pub proposer: Address,
    pub actions: Vec<ProposalAction>,
    pub description_hash: BytesN<32>,
    /// Voting opens strictly after this timestamp.
    pub snapshot: u64,
    /// Voting closes at this timestamp.
    pub deadline: u64,
    pub votes_for: i128,
    pub votes_against: i128,
    pub votes_abstain: i128,
    /// Earliest execution time once queued; zero while unqueued.
    pub eta: u64,
    pub executed: bool,
    pub canceled: bool,
}

#[contract]
pub struct ReferenceGovernor;

#[contractimpl]
impl ReferenceGovernor {
    pub fn init(env: Env, params: GovernorParams) -> Result<(), GovernorError> {
        if env.storage().instance().has(&PARAMS) {
            return Err(GovernorError::AlreadyInitialized);
        }
        env.storage().instance().set(&PARAMS, &params);
        Ok(())
    }

    /// Inject voting power for an address (test setup).
    pub fn set_power(env: Env, who: Address, amount: i128) {
        env.storage().persistent().set(&(POWER, who), &amount);
    }

    pub fn propose(
        env: Env,
        proposer: Address,
        actions: Vec<ProposalAction>,
        description: String,
    ) -> Result<U256, GovernorError> {
        let params = Self::params(&env)?;

        if Self::power_of(&env, &proposer) < params.proposal_threshold {
            return Err(GovernorError::BelowThreshold);
        }

        let description_hash = hash_description(&env, &description);
        let id = derive_proposal_id(&env, &actions, &description_hash);
        if env.storage().persistent().has(&(PROP, id.clone())) {
            return Err(GovernorError::DuplicateProposal);
        }

        let now = env.ledger().timestamp();
        let snapshot = now.saturating_add(params.voting_delay);
        let proposal = GovProposal {
            proposer: proposer.clone(),
            actions,
            description_hash,
            snapshot,
            deadline: snapshot.saturating_add(params.voting_period),
            votes_for: 0,
            votes_against: 0,
            votes_abstain: 0,
            eta: 0,
            executed: false,
            canceled: false,
        };
        env.storage().persistent().set(&(PROP, id.clone()), &proposal);
        env.events()
            .publish((symbol_short!("PROP_NEW"), id.clone()), proposer);

        Ok(id)
    }

    pub fn cast_vote(
        env: Env,
        voter: Address,
        proposal_id: U256,
        support: Support,
        reason: String,
    ) -> Result<i128, GovernorError> {
        let params = Self::params(&env)?;
        let mut proposal = Self::load(&env, &proposal_id)?;

        if Self::compute_state(&env, &params, &proposal) != ProposalState::Active {
            return Err(GovernorError::NotActive);
        }
        let voted_key = (VOTED, proposal_id.clone(), voter.clone());
        if env.storage().persistent().has(&voted_key) {
            return Err(GovernorError::AlreadyVoted);
        }
        let weight = Self::power_of(&env, &voter);
        if weight <= 0 {
            return Err(GovernorError::ZeroVotingWeight);
        }

        match support {
            Support::For => proposal.votes_for = proposal.votes_for.saturating_add(weight),
            Support::Against => {
                proposal.votes_against = proposal.votes_against.saturating_add(weight)
            }
            Support::Abstain => {
                proposal.votes_abstain = proposal.votes_abstain.saturating_add(weight)
            }
        }
        env.storage().persistent().set(&voted_key, &true);
        env.storage()
            .persistent()
            .set(&(PROP, proposal_id.clone()), &proposal);
        env.events().publish(
            (symbol_short!("VOTE_CAST"), proposal_id),
            (voter, support, weight, reason),
        );

        Ok(weight)
    }

    pub fn state(env: Env, proposal_id: U256) -> Result<ProposalState, GovernorError> {
        let params = Self::params(&env)?;
        let proposal = Self::load(&env, &proposal_id)?;
        Ok(Self::compute_state(&env, &params, &proposal))
    }

    pub fn snapshot(env: Env, proposal_id: U256) -> Result<u64, GovernorError> {
        Ok(Self::load(&env, &proposal_id)?.snapshot)
    }

    pub fn deadline(env: Env, proposal_id: U256) -> Result<u64, GovernorError> {
        Ok(Self::load(&env, &proposal_id)?.deadline)
    }

    /// Schedule a succeeded proposal; identity is re-derived from the
    /// supplied `(actions, description_hash)`, never looked up by text.
    pub fn queue(
        env: Env,
        actions: Vec<ProposalAction>,
        description_hash: BytesN<32>,
    ) -> Result<(), GovernorError> {
        let params = Self::params(&env)?;
        let id = derive_proposal_id(&env, &actions, &description_hash);
        let mut proposal = Self::load(&env, &id)?;

        if Self::compute_state(&env, &params, &proposal) != ProposalState::Succeeded {
            return Err(GovernorError::NotSucceeded);
        }

        proposal.eta = env.ledger().timestamp().saturating_add(params.min_delay);
        env.storage().persistent().set(&(PROP, id.clone()), &proposal);
        env.events().publish((symbol_short!("PROP_QUE"), id), proposal.eta);

        Ok(())
    }

    /// Execute a queued proposal after its `eta`, dispatching every
    /// encoded call to its target.
    pub fn execute(
        env: Env,
        actions: Vec<ProposalAction>,
        description_hash: BytesN<32>,
    ) -> Result<(), GovernorError> {
        let params = Self::params(&env)?;
        let id = derive_proposal_id(&env, &actions, &description_hash);
        let mut proposal = Self::load(&env, &id)?;

        if Self::compute_state(&env, &params, &proposal) != ProposalState::Queued {
            return Err(GovernorError::NotQueued);
        }
        if env.ledger().timestamp() < proposal.eta {
            return Err(GovernorError::TimelockNotReady);
        }

        for action in proposal.actions.iter() {
            let (function, call_args) = decode_call(&env, &action.call_data)
                .map_err(|_| GovernorError::MalformedAction)?;
            let _: Val = env.invoke_contract(&action.target, &function, call_args);
        }

        proposal.executed = true;
        env.storage().persistent().set(&(PROP, id.clone()), &proposal);
        env.events().publish((symbol_short!("PROP_EXE"), id), ());

        Ok(())
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    fn params(env: &Env) -> Result<GovernorParams, GovernorError> {
        env.storage()
            .instance()
            .get(&PARAMS)
            .ok_or(GovernorError::NotInitialized)
    }

    fn load(env: &Env, id: &U256) -> Result<GovProposal, GovernorError> {
        env.storage()
            .persistent()
            .get(&(PROP, id.clone()))
            .ok_or(GovernorError::UnknownProposal)
    }

    fn power_of(env: &Env, who: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&(POWER, who.clone()))
            .unwrap_or(0i128)
    }

    fn compute_state(env: &Env, params: &GovernorParams, proposal: &GovProposal) -> ProposalState {
        if proposal.executed {
            return ProposalState::Executed;
        }
        if proposal.canceled {
            return ProposalState::Canceled;
        }

        let now = env.ledger().timestamp();
        if now <= proposal.snapshot {
            return ProposalState::Pending;
        }
        if now <= proposal.deadline {
            return ProposalState::Active;
        }

        let participation = proposal.votes_for.saturating_add(proposal.votes_abstain);
        if participation < params.quorum || proposal.votes_for <= proposal.votes_against {
            return ProposalState::Defeated;
        }
        if proposal.eta == 0 {
            return ProposalState::Succeeded;
        }
        if now > proposal.eta.saturating_add(GRACE_PERIOD) {
            return ProposalState::Expired;
        }
        ProposalState::Queued
    }
}

// ── Value store target ────────────────────────────────────────────────────────

const VALUE: Symbol = symbol_short!("VALUE");

/// Minimal target contract: holds one number, overwritten by governance.
#[contract]
pub struct ValueStore;

#[contractimpl]
impl ValueStore {
    pub fn store(env: Env, value: u32) {
        env.storage().instance().set(&VALUE, &value);
        env.events().publish((symbol_short!("VAL_SET"),), value);
    }

    pub fn retrieve(env: Env) -> u32 {
        env.storage().instance().get(&VALUE).unwrap_or(0)
    }
}
