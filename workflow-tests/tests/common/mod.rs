//! Common test utilities for workflow integration tests.

use workflow_tests::WorkflowTestContext;

/// Create a new workflow test context with both services running.
pub async fn setup() -> WorkflowTestContext {
    WorkflowTestContext::new()
        .await
        .expect("Failed to create workflow test context")
}
