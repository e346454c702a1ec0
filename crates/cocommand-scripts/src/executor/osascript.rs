use std::path::PathBuf;

use crate::config::ExecutorConfig;
use crate::error::{DispatchError, DispatchResult};

use super::ScriptExecutor;

/// Runs scripts through `osascript -e <script>`.
#[derive(Debug, Clone)]
pub struct OsascriptExecutor {
    program: PathBuf,
    args: Vec<String>,
}

impl OsascriptExecutor {
    pub fn new() -> Self {
        Self::from_config(&ExecutorConfig::default())
    }

    pub fn from_config(config: &ExecutorConfig) -> Self {
        Self {
            program: config.osascript_path.clone(),
            args: config.osascript_args.clone(),
        }
    }
}

impl Default for OsascriptExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ScriptExecutor for OsascriptExecutor {
    fn id(&self) -> &str {
        "osascript"
    }

    async fn execute(&self, script: &str) -> DispatchResult<String> {
        let output = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .arg("-e")
            .arg(script)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|error| {
                DispatchError::ExecutionFailed(format!(
                    "failed to execute {}: {error}",
                    self.program.display()
                ))
            })?;

        if output.status.success() {
            return Ok(String::from_utf8_lossy(&output.stdout).trim().to_string());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if stderr.is_empty() {
            Err(DispatchError::ExecutionFailed(format!(
                "{} exited with {}",
                self.program.display(),
                output.status
            )))
        } else {
            Err(DispatchError::ExecutionFailed(stderr))
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::dispatch::ExecutionRequest;
    use crate::executor::execute_request;
    use crate::schema::ArgumentRecord;

    /// Stand in for osascript with `/bin/sh -c <body> osascript -e <script>`,
    /// so `$2` is the script text.
    fn shell_executor(body: &str) -> OsascriptExecutor {
        OsascriptExecutor::from_config(&ExecutorConfig {
            osascript_path: PathBuf::from("/bin/sh"),
            osascript_args: vec!["-c".to_string(), body.to_string(), "osascript".to_string()],
            ..ExecutorConfig::default()
        })
    }

    #[tokio::test]
    async fn passes_script_after_dash_e() {
        let executor = shell_executor("printf '%s\\n' \"$1\" \"$2\"");
        let output = executor.execute("return \"hi\"").await.expect("execute");
        assert_eq!(output, "-e\nreturn \"hi\"");
    }

    #[tokio::test]
    async fn non_zero_exit_reports_stderr() {
        let executor = shell_executor("echo 'execution error: boom (-1728)' >&2; exit 1");
        let result = executor.execute("return 1").await;
        assert_eq!(
            result.unwrap_err(),
            DispatchError::ExecutionFailed("execution error: boom (-1728)".to_string())
        );
    }

    #[tokio::test]
    async fn non_zero_exit_without_stderr_reports_status() {
        let executor = shell_executor("exit 3");
        match executor.execute("return 1").await {
            Err(DispatchError::ExecutionFailed(message)) => assert!(message.contains("/bin/sh")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_program_fails() {
        let executor = OsascriptExecutor::from_config(&ExecutorConfig {
            osascript_path: PathBuf::from("/nonexistent/osascript"),
            ..ExecutorConfig::default()
        });
        let result = executor.execute("return 1").await;
        assert!(matches!(result, Err(DispatchError::ExecutionFailed(_))));
    }

    #[tokio::test]
    async fn long_running_script_times_out() {
        let executor = shell_executor("sleep 10");
        let request = ExecutionRequest {
            id: uuid::Uuid::now_v7(),
            category: "notes".to_string(),
            action: "list_folders".to_string(),
            arguments: ArgumentRecord::default(),
            script: "return 1".to_string(),
        };
        let result = execute_request(&executor, &request, Duration::from_millis(100)).await;
        assert_eq!(
            result.unwrap_err(),
            DispatchError::ExecutionTimeout { timeout_ms: 100 }
        );
    }
}
