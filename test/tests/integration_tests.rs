//! End-to-end lifecycle tests.
//!
//! Drive the orchestrator against the reference governor and value store:
//! - the full propose → vote → queue → execute sequence,
//! - every timing gate (voting delay, voting period, timelock delay),
//! - identity binding to the description hash,
//! - ballot rejection paths (early, duplicate, zero-weight).

extern crate std;

use proptest::prelude::*;
use soroban_sdk::{testutils::Address as _, Address, String};

use common::governance::{ProposalState, Support};
use common::hash::hash_description;
use lifecycle::errors::LifecycleError;
use lifecycle::testutils::GovernorError;

use test_framework::{default_governor_params, Clock, LedgerClock, LifecycleScenario};

const DESCRIPTION: &str = "Proposal #1: Store 5 in the value store!";

// ── Happy path ────────────────────────────────────────────────────────────────

#[test]
fn test_full_lifecycle_stores_value() {
    let scenario = LifecycleScenario::new(&default_governor_params());
    let clock = LedgerClock::new(&scenario.env);

    let report = scenario.run_to_execution(&clock, 5, DESCRIPTION);

    assert_eq!(report.final_state, ProposalState::Executed);
    assert_eq!(report.stored_value, 5);
}

#[test]
fn test_observed_state_progression() {
    let scenario = LifecycleScenario::new(&default_governor_params());
    let clock = LedgerClock::new(&scenario.env);
    let client = scenario.client();
    let desc = String::from_str(&scenario.env, DESCRIPTION);
    let actions = scenario.store_actions(5);

    let id = client.propose(&scenario.proposer, &actions, &desc);
    assert_eq!(client.proposal_state(&id), ProposalState::Pending);

    clock.advance(scenario.params.voting_delay + 1);
    assert_eq!(client.proposal_state(&id), ProposalState::Active);

    client.cast_vote(
        &scenario.voter,
        &id,
        &Support::For,
        &String::from_str(&scenario.env, "yes"),
    );
    clock.advance(scenario.params.voting_period + 1);
    assert_eq!(client.proposal_state(&id), ProposalState::Succeeded);

    client.queue(&scenario.proposer, &actions, &desc);
    assert_eq!(client.proposal_state(&id), ProposalState::Queued);

    clock.advance(scenario.params.min_delay + 1);
    client.execute(&scenario.proposer, &actions, &desc);
    assert_eq!(client.proposal_state(&id), ProposalState::Executed);
}

#[test]
fn test_rederived_id_matches_submission_id_at_queue_time() {
    let scenario = LifecycleScenario::new(&default_governor_params());
    let clock = LedgerClock::new(&scenario.env);
    let client = scenario.client();
    let desc = String::from_str(&scenario.env, DESCRIPTION);
    let actions = scenario.store_actions(5);

    let submitted = client.propose(&scenario.proposer, &actions, &desc);

    // Much later, with nothing retained but the actions and the text, the
    // identity must re-derive to the same id.
    clock.advance(scenario.params.voting_delay + scenario.params.voting_period + 2);
    let rederived = client.derive_id(&actions, &desc);
    assert_eq!(submitted, rederived);

    let record = client.get_record(&rederived).unwrap();
    assert_eq!(record.id, submitted);
}

// ── Ballot rejection paths ────────────────────────────────────────────────────

#[test]
fn test_vote_before_voting_delay_rejected() {
    let scenario = LifecycleScenario::new(&default_governor_params());
    let client = scenario.client();
    let desc = String::from_str(&scenario.env, DESCRIPTION);

    let id = client.propose(&scenario.proposer, &scenario.store_actions(5), &desc);

    // Proposal is still Pending; the governor refuses the ballot.
    let result = client.try_cast_vote(
        &scenario.voter,
        &id,
        &Support::For,
        &String::from_str(&scenario.env, "too early"),
    );
    assert_eq!(result, Err(Ok(LifecycleError::VoteRejected)));
}

#[test]
fn test_double_vote_rejected() {
    let scenario = LifecycleScenario::new(&default_governor_params());
    let clock = LedgerClock::new(&scenario.env);
    let client = scenario.client();
    let desc = String::from_str(&scenario.env, DESCRIPTION);

    let id = client.propose(&scenario.proposer, &scenario.store_actions(5), &desc);
    clock.advance(scenario.params.voting_delay + 1);

    client.cast_vote(
        &scenario.voter,
        &id,
        &Support::For,
        &String::from_str(&scenario.env, "first"),
    );
    let result = client.try_cast_vote(
        &scenario.voter,
        &id,
        &Support::Against,
        &String::from_str(&scenario.env, "changed my mind"),
    );
    assert_eq!(result, Err(Ok(LifecycleError::VoteRejected)));
}

#[test]
fn test_zero_weight_vote_rejected() {
    let scenario = LifecycleScenario::new(&default_governor_params());
    let clock = LedgerClock::new(&scenario.env);
    let client = scenario.client();
    let desc = String::from_str(&scenario.env, DESCRIPTION);

    let id = client.propose(&scenario.proposer, &scenario.store_actions(5), &desc);
    clock.advance(scenario.params.voting_delay + 1);

    let powerless = Address::generate(&scenario.env);
    let result = client.try_cast_vote(
        &powerless,
        &id,
        &Support::For,
        &String::from_str(&scenario.env, "no tokens"),
    );
    assert_eq!(result, Err(Ok(LifecycleError::VoteRejected)));
}

// ── Timing gates ──────────────────────────────────────────────────────────────

#[test]
fn test_execute_before_timelock_delay_rejected() {
    let mut params = default_governor_params();
    params.min_delay = 600;
    let scenario = LifecycleScenario::new(&params);
    let clock = LedgerClock::new(&scenario.env);
    let client = scenario.client();
    let desc = String::from_str(&scenario.env, DESCRIPTION);
    let actions = scenario.store_actions(5);

    let id = client.propose(&scenario.proposer, &actions, &desc);
    clock.advance(params.voting_delay + 1);
    client.cast_vote(
        &scenario.voter,
        &id,
        &Support::For,
        &String::from_str(&scenario.env, "yes"),
    );
    clock.advance(params.voting_period + 1);
    client.queue(&scenario.proposer, &actions, &desc);

    // Queued, but the timelock delay has not elapsed.
    let result = client.try_execute(&scenario.proposer, &actions, &desc);
    assert_eq!(result, Err(Ok(LifecycleError::ExecuteRejected)));

    // Nothing was written to the target.
    assert_eq!(scenario.store_client().retrieve(), 0);
}

#[test]
fn test_defeated_proposal_cannot_queue() {
    let scenario = LifecycleScenario::new(&default_governor_params());
    let clock = LedgerClock::new(&scenario.env);
    let client = scenario.client();
    let desc = String::from_str(&scenario.env, DESCRIPTION);
    let actions = scenario.store_actions(5);

    let supporter = Address::generate(&scenario.env);
    scenario.grant_power(&supporter, 50);

    let id = client.propose(&scenario.proposer, &actions, &desc);
    clock.advance(scenario.params.voting_delay + 1);
    client.cast_vote(
        &supporter,
        &id,
        &Support::For,
        &String::from_str(&scenario.env, "for"),
    );
    client.cast_vote(
        &scenario.voter,
        &id,
        &Support::Against,
        &String::from_str(&scenario.env, "against"),
    );
    clock.advance(scenario.params.voting_period + 1);
    assert_eq!(client.proposal_state(&id), ProposalState::Defeated);

    let result = client.try_queue(&scenario.proposer, &actions, &desc);
    assert_eq!(result, Err(Ok(LifecycleError::TimingViolation)));
}

// ── Identity binding ──────────────────────────────────────────────────────────

#[test]
fn test_governor_binds_identity_to_description_hash() {
    let scenario = LifecycleScenario::new(&default_governor_params());
    let clock = LedgerClock::new(&scenario.env);
    let client = scenario.client();
    let desc = String::from_str(&scenario.env, DESCRIPTION);
    let actions = scenario.store_actions(5);

    let id = client.propose(&scenario.proposer, &actions, &desc);
    clock.advance(scenario.params.voting_delay + 1);
    client.cast_vote(
        &scenario.voter,
        &id,
        &Support::For,
        &String::from_str(&scenario.env, "yes"),
    );
    clock.advance(scenario.params.voting_period + 1);

    // Even straight at the governor, a different description hash derives
    // a different identity and matches no known proposal.
    let wrong_hash = hash_description(
        &scenario.env,
        &String::from_str(&scenario.env, "some other text"),
    );
    let result = scenario.governor_client().try_queue(&actions, &wrong_hash);
    assert_eq!(result, Err(Ok(GovernorError::UnknownProposal)));

    // The exact submitted description still queues fine.
    client.queue(&scenario.proposer, &actions, &desc);
}

#[test]
fn test_execute_with_different_description_rejected() {
    let scenario = LifecycleScenario::new(&default_governor_params());
    let clock = LedgerClock::new(&scenario.env);
    let client = scenario.client();
    let desc = String::from_str(&scenario.env, DESCRIPTION);
    let actions = scenario.store_actions(5);

    let id = client.propose(&scenario.proposer, &actions, &desc);
    clock.advance(scenario.params.voting_delay + 1);
    client.cast_vote(
        &scenario.voter,
        &id,
        &Support::For,
        &String::from_str(&scenario.env, "yes"),
    );
    clock.advance(scenario.params.voting_period + 1);
    client.queue(&scenario.proposer, &actions, &desc);
    clock.advance(scenario.params.min_delay + 1);

    // Queued and past the delay, but the description does not match the
    // submitted text: refused before anything reaches the governor.
    let other = String::from_str(&scenario.env, "A different description");
    let result = client.try_execute(&scenario.proposer, &actions, &other);
    assert_eq!(result, Err(Ok(LifecycleError::ExecuteRejected)));
    assert_eq!(scenario.store_client().retrieve(), 0);

    // The exact submitted description still executes.
    client.execute(&scenario.proposer, &actions, &desc);
    assert_eq!(scenario.store_client().retrieve(), 5);
}

// ── Property tests ────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    /// Whatever value the proposal carries, the executed workflow leaves
    /// exactly that value in the target contract.
    #[test]
    fn prop_lifecycle_stores_any_value(value in 1u32..=u32::MAX) {
        let scenario = LifecycleScenario::new(&default_governor_params());
        let clock = LedgerClock::new(&scenario.env);

        let report = scenario.run_to_execution(&clock, value, "Store an arbitrary value");

        prop_assert_eq!(report.final_state, ProposalState::Executed);
        prop_assert_eq!(report.stored_value, value);
    }
}
