//! Workspace-level integration tests for `poolgen-core`.

mod generation;
