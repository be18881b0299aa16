//! Optimistic update with rollback.
//!
//! The write is assumed to succeed: the new data is published first, the
//! write runs second, and on failure the exact pre-write item is put back.

use std::future::Future;

use crate::domain::{DomainError, DomainResponse, Message};

use super::action::Event;
use super::effect::{DataOf, EffectContext, EffectHandler};

/// How an optimistic write ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The write reported success; the optimistic state stands.
    Confirmed,
    /// The write failed or was refused; the previous item was restored.
    RolledBack,
    /// The session is no longer valid; state kept, no message shown.
    SessionExpired,
}

/// Publish `apply`'s result, run `write`, and undo through `revert` on failure.
///
/// `revert` runs against the data current at failure time, not a snapshot
/// taken before the write, so unrelated changes made while the write was in
/// flight survive the rollback.
///
/// On rollback exactly one `show_message(failure)` event is emitted. An
/// `Unauthorized` error re-publishes the current data untouched and emits
/// `session_expired()` instead.
pub async fn optimistic_update<H, A, R, W>(
    ctx: &EffectContext<H>,
    apply: A,
    revert: R,
    write: W,
    failure: Message,
) -> Outcome
where
    H: EffectHandler,
    A: FnOnce(DataOf<H>) -> DataOf<H> + Send,
    R: FnOnce(DataOf<H>) -> DataOf<H> + Send,
    W: Future<Output = DomainResponse<bool>> + Send,
{
    ctx.update(|state| state.map_data(apply));

    match write.await {
        Ok(true) => Outcome::Confirmed,
        Ok(false) => {
            tracing::warn!(?failure, "Write refused, rolling back");
            rollback(ctx, revert, failure);
            Outcome::RolledBack
        }
        Err(DomainError::Unauthorized) => {
            tracing::warn!("Session rejected during write");
            ctx.expire_session();
            Outcome::SessionExpired
        }
        Err(err) => {
            tracing::warn!(error = %err, ?failure, "Write failed, rolling back");
            rollback(ctx, revert, failure);
            Outcome::RolledBack
        }
    }
}

fn rollback<H, R>(ctx: &EffectContext<H>, revert: R, failure: Message)
where
    H: EffectHandler,
    R: FnOnce(DataOf<H>) -> DataOf<H>,
{
    ctx.update(|state| state.map_data(revert));
    ctx.emit(<H::Event as Event>::show_message(failure));
}
