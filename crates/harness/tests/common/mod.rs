//! Shared test infrastructure for driver tests.
