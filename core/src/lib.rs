//! Core of the Dovetail language: a small typed expression language in
//! which truth is termination.
//!
//! A closed expression of logic type means "true" when its evaluation
//! terminates, and "false or undefined" when it never does. Existential
//! quantification over the naturals is therefore an unbounded, fair,
//! cancellable concurrent search rather than a loop — see
//! [`evaluator`] for the scheduling and cancellation model.
//!
//! Pipeline: build an [`ast::Expr`] with the programmatic constructors,
//! check it with [`analyzer::check`], then evaluate it with
//! [`evaluator::eval`] (or under a budget with [`evaluator::eval_within`]).
//! The [`api::Engine`] bundles the pipeline over a named environment.

pub mod analyzer;
pub mod api;
pub mod ast;
pub mod evaluator;
pub mod types;
pub mod values;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_search_scheduling() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
