//! Dispatch facade: lookup, validate, generate, and optionally execute.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::discovery::resolve_tool;
use crate::error::DispatchResult;
use crate::executor::{execute_request, InvocationResult, ScriptExecutor};
use crate::registry::{ActionDescriptor, CategoryRegistry};
use crate::schema::ArgumentRecord;

/// Script text ready to hand to an executor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionRequest {
    pub id: Uuid,
    pub category: String,
    pub action: String,
    /// The defaulted arguments the generator saw.
    pub arguments: ArgumentRecord,
    pub script: String,
}

/// Single entry point over a registry built at startup.
///
/// Invocations share nothing but the read-only registry, so one dispatcher
/// can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<CategoryRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<CategoryRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// Generate the script for one action without running it.
    #[tracing::instrument(skip_all, fields(category = %category, action = %action))]
    pub fn invoke(
        &self,
        category: &str,
        action: &str,
        raw_args: &Value,
    ) -> DispatchResult<ExecutionRequest> {
        let descriptor = self.registry.lookup_action(category, action)?;
        build_request(category, descriptor, raw_args)
    }

    /// Same as [`Dispatcher::invoke`], addressed by flattened tool name
    /// (`notes_create`).
    #[tracing::instrument(skip_all, fields(tool = %tool_name))]
    pub fn invoke_tool(
        &self,
        tool_name: &str,
        raw_args: &Value,
    ) -> DispatchResult<ExecutionRequest> {
        let (category, descriptor) = resolve_tool(&self.registry, tool_name)?;
        build_request(&category.name, descriptor, raw_args)
    }

    /// Generate and execute, failing with a timeout error if the executor
    /// does not answer within `timeout`.
    pub async fn run(
        &self,
        category: &str,
        action: &str,
        raw_args: &Value,
        executor: &dyn ScriptExecutor,
        timeout: Duration,
    ) -> DispatchResult<InvocationResult> {
        let request = self.invoke(category, action, raw_args)?;
        execute_request(executor, &request, timeout).await
    }
}

fn build_request(
    category: &str,
    descriptor: &ActionDescriptor,
    raw_args: &Value,
) -> DispatchResult<ExecutionRequest> {
    let arguments = descriptor.bind(raw_args)?;
    let script = descriptor.template.render(&arguments)?;
    let request = ExecutionRequest {
        id: Uuid::now_v7(),
        category: category.to_string(),
        action: descriptor.name.clone(),
        arguments,
        script,
    };
    tracing::debug!(
        request_id = %request.id,
        script_len = request.script.len(),
        "generated script request"
    );
    Ok(request)
}
