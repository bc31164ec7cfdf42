use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinError;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::domain::auth::errors::AuthError;
use crate::domain::session::ports::SessionRepository;

/// Totals from one sweep pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub users_purged: usize,
    pub sessions_deleted: u64,
}

/// Why the sweep loop ended.
#[derive(Debug)]
pub enum SweeperExit {
    Cancelled,
    /// A pass failed. The loop does not retry.
    Failed(AuthError),
}

/// Periodically purges session records.
///
/// Deletion is per user: every user holding at least one expired record
/// loses all of their records, including ones that are still valid.
pub struct ExpirySweeper<SR>
where
    SR: SessionRepository,
{
    repository: Arc<SR>,
    interval: Duration,
}

impl<SR> ExpirySweeper<SR>
where
    SR: SessionRepository,
{
    pub fn new(repository: Arc<SR>, interval: Duration) -> Self {
        Self {
            repository,
            interval,
        }
    }

    /// Run a single pass.
    ///
    /// Users are processed one after another; the first failure aborts the
    /// pass and any users already handled stay purged.
    ///
    /// # Errors
    /// * `Storage` - Listing or deleting failed
    pub async fn sweep(&self) -> Result<SweepReport, AuthError> {
        let users = self
            .repository
            .list_users_with_expired_sessions(Utc::now())
            .await
            .map_err(AuthError::storage("ExpirySweeper.list_expired"))?;

        let mut report = SweepReport::default();

        for user_id in users {
            let deleted = self
                .repository
                .delete_all_for_user(&user_id)
                .await
                .map_err(AuthError::storage("ExpirySweeper.delete_for_user"))?;

            tracing::debug!(user_id = %user_id, deleted, "Purged sessions for user");

            report.users_purged += 1;
            report.sessions_deleted += deleted;
        }

        Ok(report)
    }

    /// Start the loop on the runtime: a pass immediately, then one per interval.
    pub fn spawn(self) -> SweeperHandle {
        let shutdown = CancellationToken::new();
        let token = shutdown.clone();

        let task = tokio::spawn(async move { self.run(token).await });

        SweeperHandle { shutdown, task }
    }

    async fn run(self, shutdown: CancellationToken) -> SweeperExit {
        tracing::info!(interval_secs = self.interval.as_secs(), "Expiry sweeper started");

        loop {
            let outcome = tokio::select! {
                _ = shutdown.cancelled() => return self.stopped(),
                outcome = self.sweep() => outcome,
            };

            match outcome {
                Ok(report) if report.users_purged > 0 => {
                    tracing::info!(
                        users = report.users_purged,
                        sessions = report.sessions_deleted,
                        "Expired sessions purged"
                    );
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::error!(error = %e, "Expiry sweep failed, sweeper halted");
                    return SweeperExit::Failed(e);
                }
            }

            tokio::select! {
                _ = shutdown.cancelled() => return self.stopped(),
                _ = tokio::time::sleep(self.interval) => {}
            }
        }
    }

    fn stopped(&self) -> SweeperExit {
        tracing::info!("Expiry sweeper stopped");
        SweeperExit::Cancelled
    }
}

/// Owner's side of a running sweeper.
pub struct SweeperHandle {
    shutdown: CancellationToken,
    task: JoinHandle<SweeperExit>,
}

impl SweeperHandle {
    /// Cancel the loop and wait for it to end.
    ///
    /// A sweeper that already failed reports `Failed` here.
    pub async fn stop(self) -> Result<SweeperExit, JoinError> {
        self.shutdown.cancel();
        self.task.await
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}
