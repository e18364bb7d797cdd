//! Workspace test-harness crate. Cross-crate integration tests live in
//! `tests/`; the library target itself is empty.
