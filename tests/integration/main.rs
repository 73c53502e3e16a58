//! End-to-end integration tests
//!
//! Drives the full stack: parsing into a session, trace runs with step
//! consumption, aborts, pacing policy, and snapshot round-trips.
