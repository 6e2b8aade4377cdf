//! Error taxonomy for the lifecycle orchestrator.

/// Every failure aborts the current workflow step and surfaces to the
/// caller; nothing is retried or compensated, since the governor's
/// operations are not idempotent replays of the same economic action.
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum LifecycleError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Local validation failed before anything reached the network:
    /// empty action list, empty call payload, or a signature mismatch
    /// reported by the call encoder.
    EncodingError = 3,
    /// The governor reverted the submission (e.g. the proposer is below
    /// the proposal threshold).
    SubmissionRejected = 4,
    /// The submission confirmation carried no usable proposal id, or the
    /// id it carried does not match the locally derived one. Fatal — an
    /// id is never fabricated or guessed.
    ConfirmationLookupError = 5,
    /// The governor reverted the ballot: proposal not active, voter
    /// already voted, or zero voting weight.
    VoteRejected = 6,
    /// Queue refused: the `(actions, description_hash)` tuple does not
    /// match a known succeeded submission, or the governor reverted.
    QueueRejected = 7,
    /// Execute refused: the tuple does not match a known queued
    /// submission, the timelock delay has not elapsed, or the governor
    /// reverted.
    ExecuteRejected = 8,
    /// Queue/execute attempted while the observed proposal state does not
    /// permit it. Raised locally, before the governor is called.
    TimingViolation = 9,
    /// The governor's state view could not be read for the proposal.
    StateLookupFailed = 10,
}
