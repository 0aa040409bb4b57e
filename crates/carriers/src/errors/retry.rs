/// Classification for retry policy.
///
/// Used by the transport to decide what to do after a failed carrier call.
///
/// # Behavior Summary
///
/// | Class | Retry? | Record Circuit Breaker Failure? |
/// |-------|--------|--------------------------------|
/// | `Never` | No | No |
/// | `WithBackoff` | Yes, after an exponential delay | Yes |
/// | `CircuitOpen` | No | No (already recorded) |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Never retry - the carrier answered and a second attempt would get the
    /// same answer, or the caller gave up.
    Never,

    /// Transient failure (network, timeout, 5xx, 408).
    ///
    /// Retried with exponential backoff until the attempt budget runs out.
    /// Each occurrence counts toward opening the carrier's circuit.
    WithBackoff,

    /// The carrier's circuit is open. Fail immediately without calling out.
    CircuitOpen,
}
