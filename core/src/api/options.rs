//! Configuration options for the engine.

use crate::evaluator::EvalOptions;

/// Configuration options for an [`Engine`](super::Engine).
///
/// # Example
///
/// ```
/// use dovetail_core::api::EngineOptions;
/// use std::time::Duration;
///
/// let options = EngineOptions {
///     default_eval_options: dovetail_core::evaluator::EvalOptions {
///         tick: Duration::from_millis(5),
///     },
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    /// Default options for evaluation.
    ///
    /// Applied by `Engine::evaluate()` and `Engine::evaluate_within()`.
    pub default_eval_options: EvalOptions,
}
