#![no_std]

//! # Proposal Lifecycle Orchestrator
//!
//! Drives a multi-step governance workflow against an external governor /
//! timelock pair:
//!
//! 1. **Submit** — send `(targets, values, calldatas, description)` to the
//!    governor and extract the assigned proposal id from the confirmation.
//! 2. **Vote** — cast a ballot (for / against / abstain) with a free-text
//!    reason while the proposal is active.
//! 3. **Queue** — once voting has closed with quorum and majority, schedule
//!    the actions behind the timelock using the *same* actions plus the
//!    recomputed description hash.
//! 4. **Execute** — after the timelock delay, deliver the encoded calls to
//!    their targets.
//!
//! Vote tallying, quorum checks and timelock enforcement live in the
//! external contracts; this contract only sequences the calls, keeps the
//! submitted action bytes for fail-fast identity checks, and classifies
//! rejections. Collaborator addresses are injected at `initialize` — there
//! is no registry lookup anywhere.

pub mod errors;
pub mod events;
pub mod record;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, vec, Address, Bytes, Env, IntoVal,
    String, Symbol, Val, Vec, U256,
};

use common::governance::{ProposalAction, ProposalRecord, ProposalState, Support, VoteReceipt};
use common::hash::{derive_proposal_id, hash_description};

use errors::LifecycleError;

// ── Storage key constants ─────────────────────────────────────────────────────

const CONFIG: Symbol = symbol_short!("CONFIG");
const INITIALIZED: Symbol = symbol_short!("INIT");

// ── Governor entry-point symbols ──────────────────────────────────────────────

const FN_PROPOSE: Symbol = symbol_short!("propose");
const FN_CAST_VOTE: Symbol = symbol_short!("cast_vote");
const FN_STATE: Symbol = symbol_short!("state");
const FN_SNAPSHOT: Symbol = symbol_short!("snapshot");
const FN_DEADLINE: Symbol = symbol_short!("deadline");
const FN_QUEUE: Symbol = symbol_short!("queue");
const FN_EXECUTE: Symbol = symbol_short!("execute");

// ── Configuration ─────────────────────────────────────────────────────────────

/// Injected collaborator handles.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrchestratorConfig {
    pub admin: Address,
    /// Voting contract: receives propose / cast_vote / queue / execute.
    pub governor: Address,
    /// Timelock that owns the targets; execution is scheduled behind it.
    pub timelock: Address,
    /// Default target whose state the demo proposal mutates.
    pub target: Address,
}

// ── Contract ──────────────────────────────────────────────────────────────────

#[contract]
pub struct LifecycleOrchestrator;

#[contractimpl]
impl LifecycleOrchestrator {
    // ── Initialisation ────────────────────────────────────────────────────────

    /// Bind the orchestrator to its collaborators.
    ///
    /// All addresses are explicit; nothing is resolved from deployment
    /// registries or "latest instance" lookups.
    pub fn initialize(
        env: Env,
        admin: Address,
        governor: Address,
        timelock: Address,
        target: Address,
    ) -> Result<(), LifecycleError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(LifecycleError::AlreadyInitialized);
        }

        let config = OrchestratorConfig {
            admin,
            governor,
            timelock,
            target,
        };
        env.storage().instance().set(&CONFIG, &config);
        env.storage().instance().set(&INITIALIZED, &true);

        Ok(())
    }

    // ── Proposal submission ───────────────────────────────────────────────────

    /// Submit a proposal and return the id the governor assigned to it.
    ///
    /// The returned id is cross-checked against the locally derived
    /// `derive_proposal_id(actions, hash(description))`; a confirmation
    /// that is missing, malformed or inconsistent is fatal
    /// ([`LifecycleError::ConfirmationLookupError`]) — an id is never
    /// guessed. On success the submitted actions and description hash are
    /// recorded for the queue/execute identity assertion.
    pub fn propose(
        env: Env,
        proposer: Address,
        actions: Vec<ProposalAction>,
        description: String,
    ) -> Result<U256, LifecycleError> {
        let config = Self::config(&env)?;
        proposer.require_auth();

        if actions.is_empty() {
            return Err(LifecycleError::EncodingError);
        }
        for action in actions.iter() {
            if action.call_data.is_empty() {
                return Err(LifecycleError::EncodingError);
            }
        }

        let description_hash = hash_description(&env, &description);
        let expected_id = derive_proposal_id(&env, &actions, &description_hash);

        let args: Vec<Val> = vec![
            &env,
            proposer.into_val(&env),
            actions.into_val(&env),
            description.into_val(&env),
        ];
        let id = match env.try_invoke_contract::<U256, soroban_sdk::Error>(
            &config.governor,
            &FN_PROPOSE,
            args,
        ) {
            Ok(Ok(id)) => id,
            Ok(Err(_)) => return Err(LifecycleError::ConfirmationLookupError),
            Err(_) => return Err(LifecycleError::SubmissionRejected),
        };

        if id != expected_id {
            return Err(LifecycleError::ConfirmationLookupError);
        }

        let record = ProposalRecord {
            id: id.clone(),
            actions,
            description_hash,
            submitted_at: env.ledger().timestamp(),
        };
        record::store(&env, &record);
        events::publish_submitted(&env, &record, &proposer);

        Ok(id)
    }

    // ── Vote casting ──────────────────────────────────────────────────────────

    /// Cast a ballot tied to `proposal_id`.
    ///
    /// The active-window precondition is enforced by the governor, not
    /// here: the ballot is forwarded and any revert (not active, already
    /// voted, zero weight) surfaces as [`LifecycleError::VoteRejected`].
    pub fn cast_vote(
        env: Env,
        voter: Address,
        proposal_id: U256,
        support: Support,
        reason: String,
    ) -> Result<VoteReceipt, LifecycleError> {
        let config = Self::config(&env)?;
        voter.require_auth();

        let args: Vec<Val> = vec![
            &env,
            voter.clone().into_val(&env),
            proposal_id.clone().into_val(&env),
            support.clone().into_val(&env),
            reason.into_val(&env),
        ];
        let weight = match env.try_invoke_contract::<i128, soroban_sdk::Error>(
            &config.governor,
            &FN_CAST_VOTE,
            args,
        ) {
            Ok(Ok(weight)) => weight,
            _ => return Err(LifecycleError::VoteRejected),
        };

        events::publish_vote_submitted(&env, &proposal_id, &voter, &support, weight);

        Ok(VoteReceipt { support, weight })
    }

    // ── Lifecycle advancement ─────────────────────────────────────────────────

    /// Queue a succeeded proposal behind the timelock.
    ///
    /// `actions` must be byte-for-byte the list used at submission and
    /// `description` the exact submitted text; the identity is re-derived
    /// locally and checked against the stored record *before* the governor
    /// is called. The observed state must be `Succeeded`, otherwise the
    /// call is refused locally with [`LifecycleError::TimingViolation`].
    pub fn queue(
        env: Env,
        caller: Address,
        actions: Vec<ProposalAction>,
        description: String,
    ) -> Result<(), LifecycleError> {
        let config = Self::config(&env)?;
        caller.require_auth();

        let (id, description_hash) =
            Self::check_identity(&env, &actions, &description, LifecycleError::QueueRejected)?;

        let state = Self::governor_state(&env, &config.governor, &id)?;
        if state != ProposalState::Succeeded {
            return Err(LifecycleError::TimingViolation);
        }

        let args: Vec<Val> = vec![&env, actions.into_val(&env), description_hash.into_val(&env)];
        match env.try_invoke_contract::<(), soroban_sdk::Error>(&config.governor, &FN_QUEUE, args)
        {
            Ok(Ok(())) => {
                events::publish_queued(&env, &id);
                Ok(())
            }
            _ => Err(LifecycleError::QueueRejected),
        }
    }

    /// Execute a queued proposal once the timelock delay has elapsed.
    ///
    /// Same identity discipline as [`Self::queue`]. The delay itself is
    /// enforced by the governor: a premature call surfaces as
    /// [`LifecycleError::ExecuteRejected`].
    pub fn execute(
        env: Env,
        caller: Address,
        actions: Vec<ProposalAction>,
        description: String,
    ) -> Result<(), LifecycleError> {
        let config = Self::config(&env)?;
        caller.require_auth();

        let (id, description_hash) =
            Self::check_identity(&env, &actions, &description, LifecycleError::ExecuteRejected)?;

        let state = Self::governor_state(&env, &config.governor, &id)?;
        if state != ProposalState::Queued {
            return Err(LifecycleError::TimingViolation);
        }

        let args: Vec<Val> = vec![&env, actions.into_val(&env), description_hash.into_val(&env)];
        match env
            .try_invoke_contract::<(), soroban_sdk::Error>(&config.governor, &FN_EXECUTE, args)
        {
            Ok(Ok(())) => {
                events::publish_executed(&env, &id);
                Ok(())
            }
            _ => Err(LifecycleError::ExecuteRejected),
        }
    }

    // ── View functions ────────────────────────────────────────────────────────

    /// Observed governor state for a proposal.
    pub fn proposal_state(env: Env, proposal_id: U256) -> Result<ProposalState, LifecycleError> {
        let config = Self::config(&env)?;
        Self::governor_state(&env, &config.governor, &proposal_id)
    }

    /// Timestamp at which voting power snapshots are taken.
    pub fn proposal_snapshot(env: Env, proposal_id: U256) -> Result<u64, LifecycleError> {
        let config = Self::config(&env)?;
        Self::governor_timepoint(&env, &config.governor, &FN_SNAPSHOT, &proposal_id)
    }

    /// Timestamp at which voting closes.
    pub fn proposal_deadline(env: Env, proposal_id: U256) -> Result<u64, LifecycleError> {
        let config = Self::config(&env)?;
        Self::governor_timepoint(&env, &config.governor, &FN_DEADLINE, &proposal_id)
    }

    /// Wrap an encoded call into a single-action list against the
    /// configured default target, with no native value.
    pub fn default_target_action(
        env: Env,
        call_data: Bytes,
    ) -> Result<Vec<ProposalAction>, LifecycleError> {
        let config = Self::config(&env)?;
        if call_data.is_empty() {
            return Err(LifecycleError::EncodingError);
        }
        Ok(vec![
            &env,
            ProposalAction {
                target: config.target,
                value: 0,
                call_data,
            },
        ])
    }

    /// The id this orchestrator would expect the governor to assign.
    pub fn derive_id(env: Env, actions: Vec<ProposalAction>, description: String) -> U256 {
        let description_hash = hash_description(&env, &description);
        derive_proposal_id(&env, &actions, &description_hash)
    }

    pub fn get_record(env: Env, proposal_id: U256) -> Option<ProposalRecord> {
        record::load(&env, &proposal_id)
    }

    pub fn get_config(env: Env) -> Result<OrchestratorConfig, LifecycleError> {
        Self::config(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    fn config(env: &Env) -> Result<OrchestratorConfig, LifecycleError> {
        env.storage()
            .instance()
            .get(&CONFIG)
            .ok_or(LifecycleError::NotInitialized)
    }

    /// Re-derive the proposal identity and assert it matches a stored
    /// submission, failing with `reject` before any cross-contract call.
    fn check_identity(
        env: &Env,
        actions: &Vec<ProposalAction>,
        description: &String,
        reject: LifecycleError,
    ) -> Result<(U256, soroban_sdk::BytesN<32>), LifecycleError> {
        let description_hash = hash_description(env, description);
        let id = derive_proposal_id(env, actions, &description_hash);

        let record = record::load(env, &id).ok_or(reject)?;
        // The id already commits to the action bytes; this equality check
        // guards against derivation drift between submit and queue time.
        if record.actions != *actions || record.description_hash != description_hash {
            return Err(reject);
        }

        Ok((id, description_hash))
    }

    fn governor_state(
        env: &Env,
        governor: &Address,
        proposal_id: &U256,
    ) -> Result<ProposalState, LifecycleError> {
        let args: Vec<Val> = vec![env, proposal_id.clone().into_val(env)];
        match env.try_invoke_contract::<ProposalState, soroban_sdk::Error>(
            governor, &FN_STATE, args,
        ) {
            Ok(Ok(state)) => Ok(state),
            _ => Err(LifecycleError::StateLookupFailed),
        }
    }

    fn governor_timepoint(
        env: &Env,
        governor: &Address,
        view: &Symbol,
        proposal_id: &U256,
    ) -> Result<u64, LifecycleError> {
        let args: Vec<Val> = vec![env, proposal_id.clone().into_val(env)];
        match env.try_invoke_contract::<u64, soroban_sdk::Error>(governor, view, args) {
            Ok(Ok(timepoint)) => Ok(timepoint),
            _ => Err(LifecycleError::StateLookupFailed),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
