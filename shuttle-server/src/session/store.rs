//! Session storage.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tokio::sync::Mutex;
use tracing::info;

use crate::workflow::{SubmissionPolicy, Workflow};

use super::id::{InvalidSessionId, SessionId};

/// A session's workflow, locked for the duration of each transition.
pub type SharedWorkflow = Arc<Mutex<Workflow>>;

/// Errors looking up a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Malformed id
    #[error(transparent)]
    Invalid(#[from] InvalidSessionId),

    /// Unknown or expired session
    #[error("session {0} not found or expired")]
    NotFound(SessionId),
}

/// Configuration for the session store.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Sessions untouched for this long are evicted.
    pub idle_timeout: Duration,

    /// Maximum number of live sessions.
    pub max_capacity: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout: Duration::from_secs(30 * 60),
            max_capacity: 10_000,
        }
    }
}

/// All live booking sessions.
#[derive(Clone)]
pub struct SessionStore {
    sessions: MokaCache<SessionId, SharedWorkflow>,
    policy: SubmissionPolicy,
}

impl SessionStore {
    /// Create an empty store. New sessions use `policy` for submissions.
    pub fn new(config: &SessionConfig, policy: SubmissionPolicy) -> Self {
        let sessions = MokaCache::builder()
            .time_to_idle(config.idle_timeout)
            .max_capacity(config.max_capacity)
            .build();

        Self { sessions, policy }
    }

    /// Open a new session on the search step.
    pub async fn create(&self) -> (SessionId, SharedWorkflow) {
        let id = SessionId::generate();
        let workflow = Arc::new(Mutex::new(Workflow::new(self.policy)));
        self.sessions.insert(id.clone(), Arc::clone(&workflow)).await;
        info!(session = %id, "session created");
        (id, workflow)
    }

    /// Look up a session by its raw id.
    pub async fn get(&self, raw_id: &str) -> Result<(SessionId, SharedWorkflow), SessionError> {
        let id = SessionId::parse(raw_id)?;
        match self.sessions.get(&id).await {
            Some(workflow) => Ok((id, workflow)),
            None => Err(SessionError::NotFound(id)),
        }
    }
}
