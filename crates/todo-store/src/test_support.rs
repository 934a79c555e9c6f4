//! Shared test utilities for todo-store unit tests.
