//! End-to-end tests for the Scribe server live under `tests/`
