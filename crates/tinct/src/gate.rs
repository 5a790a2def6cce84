#![forbid(unsafe_code)]

//! Capability cache & refresh policy.
//!
//! [`CapabilityGate`] wraps a [`Classifier`] with one of four refresh modes
//! and stores the last classification so [`CapabilityMode::CheckOnce`]
//! avoids re-querying the OS on every attribute write.
//!
//! # Invariants
//!
//! 1. **No torn snapshots**: the `(mode, snapshot)` pair lives behind a
//!    single lock; a reader always observes both classification booleans
//!    from the same run.
//! 2. **One classification per `CheckOnce` period**: the snapshot is
//!    computed inside the critical section, so racing first calls classify
//!    exactly once.
//! 3. **Mode changes always invalidate**: [`CapabilityGate::set_mode`]
//!    clears the snapshot regardless of the mode entered or left.
//! 4. **`Disabled` and `Force` never classify**: neither mode consults the
//!    classifier.
//!
//! # Failure Modes
//!
//! | Mode | Condition | Behavior |
//! |------|-----------|----------|
//! | Undeterminable classification | missing OS primitive | classifier returns false; plain text |
//! | Poisoned lock | panic in another holder | absorbed; last state reused |
//! | Mode race | `set_mode` vs `evaluate` | self-consistent snapshot, no ordering guarantee |

use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crate::classify::{Classifier, HostClassifier, Target};

/// Refresh policy for terminal capability checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CapabilityMode {
    /// Never emit escape sequences.
    Disabled,
    /// Classify once per mode period, then reuse the stored verdict.
    CheckOnce,
    /// Classify fresh on every evaluation.
    ///
    /// Correct when a destination's terminal-ness can change mid-run, e.g.
    /// after redirection.
    #[default]
    Auto,
    /// Always emit, without consulting the classifier.
    Force,
}

impl CapabilityMode {
    /// Get the mode name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "never",
            Self::CheckOnce => "once",
            Self::Auto => "auto",
            Self::Force => "always",
        }
    }
}

impl FromStr for CapabilityMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "never" | "disabled" | "off" => Ok(Self::Disabled),
            "once" | "check-once" => Ok(Self::CheckOnce),
            "auto" => Ok(Self::Auto),
            "always" | "force" => Ok(Self::Force),
            _ => Err(()),
        }
    }
}

impl fmt::Display for CapabilityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One generation of classification results.
#[derive(Debug, Clone, Copy)]
struct Snapshot {
    interactive: bool,
    styled: bool,
}

impl Snapshot {
    const fn verdict(self) -> bool {
        self.interactive && self.styled
    }
}

#[derive(Debug)]
struct GateState {
    mode: CapabilityMode,
    snapshot: Option<Snapshot>,
}

/// Capability cache & policy: decides whether a destination should receive
/// escape sequences right now.
///
/// A gate is an explicit context object; host programs usually own one (or
/// use [`CapabilityGate::shared`]) and hand it to the streams they style.
/// Gates are `Send + Sync`; evaluations and mode changes may race freely,
/// subject to the invariants above.
pub struct CapabilityGate {
    state: Mutex<GateState>,
    classifier: Box<dyn Classifier>,
}

impl fmt::Debug for CapabilityGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityGate")
            .field("mode", &self.mode())
            .finish_non_exhaustive()
    }
}

impl Default for CapabilityGate {
    fn default() -> Self {
        Self::new(CapabilityMode::Auto)
    }
}

impl CapabilityGate {
    /// Gate backed by the build-time host classifier.
    #[must_use]
    pub fn new(mode: CapabilityMode) -> Self {
        Self::with_classifier(mode, Box::new(HostClassifier))
    }

    /// Gate backed by a caller-supplied classifier.
    ///
    /// The seam for instrumented fakes in tests and for embedders with
    /// their own notion of terminal capability.
    #[must_use]
    pub fn with_classifier(mode: CapabilityMode, classifier: Box<dyn Classifier>) -> Self {
        Self {
            state: Mutex::new(GateState {
                mode,
                snapshot: None,
            }),
            classifier,
        }
    }

    /// The process-wide gate used by the convenience stream constructors.
    ///
    /// Created on first use with [`CapabilityMode::Auto`]; never persisted
    /// across process runs.
    #[must_use]
    pub fn shared() -> &'static CapabilityGate {
        static SHARED: OnceLock<CapabilityGate> = OnceLock::new();
        SHARED.get_or_init(CapabilityGate::default)
    }

    /// Current refresh mode.
    #[must_use]
    pub fn mode(&self) -> CapabilityMode {
        self.lock().mode
    }

    /// Select a new refresh mode.
    ///
    /// Always clears the stored classification, so a subsequent `CheckOnce`
    /// period recomputes instead of reusing a stale verdict.
    pub fn set_mode(&self, mode: CapabilityMode) {
        let mut state = self.lock();
        state.mode = mode;
        state.snapshot = None;
        crate::debug!(mode = mode.as_str(), "capability mode changed");
    }

    /// Whether `target` should receive escape sequences right now.
    #[must_use]
    pub fn evaluate(&self, target: Target) -> bool {
        let mut state = self.lock();
        let mode = state.mode;
        match mode {
            CapabilityMode::Disabled => false,
            CapabilityMode::Force => true,
            CapabilityMode::Auto => {
                // Fresh classification every call; nothing is stored, so the
                // lock is released before the OS queries.
                drop(state);
                let snapshot = self.classify(target);
                crate::trace!(
                    ?target,
                    interactive = snapshot.interactive,
                    styled = snapshot.styled,
                    "auto classification"
                );
                snapshot.verdict()
            }
            CapabilityMode::CheckOnce => {
                let snapshot = match state.snapshot {
                    Some(snapshot) => snapshot,
                    // Classified under the lock: concurrent first calls must
                    // not produce two generations.
                    None => {
                        let snapshot = self.classify(target);
                        crate::trace!(
                            ?target,
                            interactive = snapshot.interactive,
                            styled = snapshot.styled,
                            "check-once classification"
                        );
                        state.snapshot = Some(snapshot);
                        snapshot
                    }
                };
                snapshot.verdict()
            }
        }
    }

    fn classify(&self, target: Target) -> Snapshot {
        Snapshot {
            interactive: self.classifier.is_interactive(target),
            styled: self.classifier.style_support(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, GateState> {
        // A panicking holder cannot leave a half-written state behind: both
        // fields are plain values, so the poisoned state is still coherent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Classifier returning fixed answers and counting classification runs.
    struct FixedClassifier {
        interactive: bool,
        styled: bool,
        runs: Arc<AtomicUsize>,
    }

    impl FixedClassifier {
        fn boxed(interactive: bool, styled: bool, runs: &Arc<AtomicUsize>) -> Box<Self> {
            Box::new(Self {
                interactive,
                styled,
                runs: Arc::clone(runs),
            })
        }
    }

    impl Classifier for FixedClassifier {
        fn is_interactive(&self, _target: Target) -> bool {
            self.runs.fetch_add(1, Ordering::SeqCst);
            self.interactive
        }

        fn style_support(&self) -> bool {
            self.styled
        }
    }

    fn counted_gate(mode: CapabilityMode, yes: bool) -> (CapabilityGate, Arc<AtomicUsize>) {
        let runs = Arc::new(AtomicUsize::new(0));
        let gate = CapabilityGate::with_classifier(mode, FixedClassifier::boxed(yes, yes, &runs));
        (gate, runs)
    }

    #[test]
    fn disabled_never_consults_classifier() {
        let (gate, runs) = counted_gate(CapabilityMode::Disabled, true);
        for _ in 0..5 {
            assert!(!gate.evaluate(Target::Stdout));
        }
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn force_never_consults_classifier() {
        let (gate, runs) = counted_gate(CapabilityMode::Force, false);
        for _ in 0..5 {
            assert!(gate.evaluate(Target::Other));
        }
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn force_is_idempotent_across_mode_history() {
        let (gate, _runs) = counted_gate(CapabilityMode::CheckOnce, false);
        assert!(!gate.evaluate(Target::Stdout));
        gate.set_mode(CapabilityMode::Disabled);
        gate.set_mode(CapabilityMode::Force);
        assert!(gate.evaluate(Target::Stdout));
        assert!(gate.evaluate(Target::Stderr));
    }

    #[test]
    fn check_once_memoizes_classification() {
        let (gate, runs) = counted_gate(CapabilityMode::CheckOnce, true);
        for _ in 0..10 {
            assert!(gate.evaluate(Target::Stdout));
        }
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn mode_change_invalidates_check_once() {
        let (gate, runs) = counted_gate(CapabilityMode::CheckOnce, true);
        assert!(gate.evaluate(Target::Stdout));
        gate.set_mode(CapabilityMode::Auto);
        gate.set_mode(CapabilityMode::CheckOnce);
        assert!(gate.evaluate(Target::Stdout));
        // One classification per CheckOnce period, two periods total.
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn auto_classifies_every_call() {
        let (gate, runs) = counted_gate(CapabilityMode::Auto, true);
        for _ in 0..4 {
            assert!(gate.evaluate(Target::Stderr));
        }
        assert_eq!(runs.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn verdict_is_and_of_both_axes() {
        let runs = Arc::new(AtomicUsize::new(0));
        let interactive_only = CapabilityGate::with_classifier(
            CapabilityMode::CheckOnce,
            FixedClassifier::boxed(true, false, &runs),
        );
        assert!(!interactive_only.evaluate(Target::Stdout));

        let styled_only = CapabilityGate::with_classifier(
            CapabilityMode::CheckOnce,
            FixedClassifier::boxed(false, true, &runs),
        );
        assert!(!styled_only.evaluate(Target::Stdout));
    }

    #[test]
    fn concurrent_check_once_classifies_once() {
        let runs = Arc::new(AtomicUsize::new(0));
        let gate = Arc::new(CapabilityGate::with_classifier(
            CapabilityMode::CheckOnce,
            FixedClassifier::boxed(true, true, &runs),
        ));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let gate = Arc::clone(&gate);
                std::thread::spawn(move || gate.evaluate(Target::Stdout))
            })
            .collect();
        for handle in handles {
            assert!(handle.join().expect("thread"));
        }
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn mode_round_trips_through_strings() {
        for mode in [
            CapabilityMode::Disabled,
            CapabilityMode::CheckOnce,
            CapabilityMode::Auto,
            CapabilityMode::Force,
        ] {
            assert_eq!(mode.as_str().parse::<CapabilityMode>(), Ok(mode));
        }
        assert_eq!("force".parse::<CapabilityMode>(), Ok(CapabilityMode::Force));
        assert!("sometimes".parse::<CapabilityMode>().is_err());
    }

    #[test]
    fn default_mode_is_auto() {
        assert_eq!(CapabilityMode::default(), CapabilityMode::Auto);
        assert_eq!(CapabilityGate::default().mode(), CapabilityMode::Auto);
    }

    #[test]
    fn shared_gate_starts_auto() {
        // Sole unit test touching the shared gate; integration binaries get
        // their own process.
        assert_eq!(CapabilityGate::shared().mode(), CapabilityMode::Auto);
    }
}
