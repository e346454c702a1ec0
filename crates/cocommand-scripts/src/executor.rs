//! Executor boundary: runs generated script text under a timeout.

pub mod osascript;

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::dispatch::ExecutionRequest;
use crate::error::{DispatchError, DispatchResult};

pub use osascript::OsascriptExecutor;

/// Runs automation-language source and returns its opaque text output.
#[async_trait::async_trait]
pub trait ScriptExecutor: Send + Sync {
    fn id(&self) -> &str;

    /// Execute `script`, returning its output or an
    /// [`DispatchError::ExecutionFailed`].
    async fn execute(&self, script: &str) -> DispatchResult<String>;
}

/// Output of one executed request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvocationResult {
    pub request_id: Uuid,
    pub category: String,
    pub action: String,
    /// Text returned by the script. "Not found" style messages land here too.
    pub output: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub duration_ms: u64,
}

impl InvocationResult {
    fn new(
        request: &ExecutionRequest,
        output: String,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
    ) -> Self {
        let duration_ms = (ended_at - started_at).num_milliseconds().max(0) as u64;
        Self {
            request_id: request.id,
            category: request.category.clone(),
            action: request.action.clone(),
            output,
            started_at,
            ended_at,
            duration_ms,
        }
    }
}

/// Execute a request, giving up after `timeout`.
///
/// Dropping the executor future on timeout cancels the underlying work. No
/// retries are attempted.
pub async fn execute_request(
    executor: &dyn ScriptExecutor,
    request: &ExecutionRequest,
    timeout: Duration,
) -> DispatchResult<InvocationResult> {
    let started_at = Utc::now();
    let result = tokio::time::timeout(timeout, executor.execute(&request.script)).await;
    let ended_at = Utc::now();

    match result {
        Ok(Ok(output)) => Ok(InvocationResult::new(request, output, started_at, ended_at)),
        Ok(Err(error)) => {
            tracing::warn!(
                executor = executor.id(),
                request_id = %request.id,
                category = %request.category,
                action = %request.action,
                "script execution failed: {error}"
            );
            Err(error)
        }
        Err(_) => {
            let timeout_ms = timeout.as_millis() as u64;
            tracing::warn!(
                executor = executor.id(),
                request_id = %request.id,
                category = %request.category,
                action = %request.action,
                "script execution timed out after {timeout_ms}ms"
            );
            Err(DispatchError::ExecutionTimeout { timeout_ms })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ArgumentRecord;

    struct EchoExecutor;

    #[async_trait::async_trait]
    impl ScriptExecutor for EchoExecutor {
        fn id(&self) -> &str {
            "echo"
        }

        async fn execute(&self, script: &str) -> DispatchResult<String> {
            Ok(script.to_string())
        }
    }

    struct FailingExecutor;

    #[async_trait::async_trait]
    impl ScriptExecutor for FailingExecutor {
        fn id(&self) -> &str {
            "failing"
        }

        async fn execute(&self, _script: &str) -> DispatchResult<String> {
            Err(DispatchError::ExecutionFailed(
                "Notes got an error: AppleEvent timed out".to_string(),
            ))
        }
    }

    struct SlowExecutor;

    #[async_trait::async_trait]
    impl ScriptExecutor for SlowExecutor {
        fn id(&self) -> &str {
            "slow"
        }

        async fn execute(&self, _script: &str) -> DispatchResult<String> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok("late".to_string())
        }
    }

    fn request(script: &str) -> ExecutionRequest {
        ExecutionRequest {
            id: Uuid::now_v7(),
            category: "notes".to_string(),
            action: "list".to_string(),
            arguments: ArgumentRecord::default(),
            script: script.to_string(),
        }
    }

    #[tokio::test]
    async fn successful_execution_returns_output() {
        let request = request("return \"ok\"");
        let result = execute_request(&EchoExecutor, &request, Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(result.output, "return \"ok\"");
        assert_eq!(result.request_id, request.id);
        assert_eq!(result.action, "list");
        assert!(result.ended_at >= result.started_at);
    }

    #[tokio::test]
    async fn executor_failure_passes_through() {
        let result = execute_request(&FailingExecutor, &request("x"), Duration::from_secs(1)).await;
        assert_eq!(
            result.unwrap_err(),
            DispatchError::ExecutionFailed("Notes got an error: AppleEvent timed out".to_string())
        );
    }

    #[tokio::test]
    async fn slow_executor_times_out() {
        let result = execute_request(&SlowExecutor, &request("x"), Duration::from_millis(50)).await;
        assert_eq!(
            result.unwrap_err(),
            DispatchError::ExecutionTimeout { timeout_ms: 50 }
        );
    }
}
