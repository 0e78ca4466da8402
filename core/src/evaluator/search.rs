//! Fair dovetailing search over the naturals.
//!
//! Both quantifiers resolve to the same loop: spawn the body at witness
//! `k`, race the cohort against a short tick, and advance to `k + 1`
//! whenever the tick fires first. Earlier candidates keep running in the
//! background, so a witness that takes long to confirm still wins
//! eventually, and a body that is false at every natural grows the cohort
//! forever without ever completing — callers bound that with a budget.
//!
//! The [`JoinSet`] is the owned registry of every candidate task. Returning
//! from the search (or being dropped by a losing race upstream) drops the
//! set, which aborts the whole cohort; aborted candidates drop their own
//! registries in turn, so teardown reaches every transitively spawned task.

use super::EvalError;
use super::eval::Machine;
use crate::ast::{Expr, substitute};
use crate::values::Value;
use ecow::EcoString;
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio::time::sleep;
use tracing::trace;

/// Run the dovetailing loop and return the first witness whose body
/// completed. Never returns a "not found": an exhausted search does not
/// exist, only one that has not succeeded yet.
pub(crate) async fn search(
    machine: Machine,
    var: EcoString,
    body: Arc<Expr>,
) -> Result<u64, EvalError> {
    let tick = machine.options.tick;
    let mut candidates: JoinSet<(u64, Result<Value, EvalError>)> = JoinSet::new();
    let mut next: u64 = 0;

    loop {
        let witness = Expr::num(next);
        let attempt = substitute(&body, &var, &witness);
        let branch = machine.clone();
        let k = next;
        candidates.spawn(async move { (k, branch.run(attempt).await) });
        trace!(candidate = k, live = candidates.len(), "spawned candidate");
        next += 1;

        tokio::select! {
            joined = candidates.join_next() => {
                // The set is non-empty (a candidate was just spawned) and
                // candidates are never aborted while the set is live.
                let (k, result) = joined
                    .expect("candidate registry empty")
                    .expect("candidate task panicked");
                result?;
                trace!(witness = k, "search completed");
                return Ok(k);
            }
            _ = sleep(tick) => {
                // Nothing finished within the tick; move on to the next
                // candidate and leave the running ones alone.
            }
        }
    }
}
