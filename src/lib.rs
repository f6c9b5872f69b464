//! Workspace-level golden tests for AlgoLab live under `tests/`.
