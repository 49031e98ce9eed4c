//! Integration test harness.

mod helpers;

mod cli_test;
mod controller_test;
mod favorites_test;
mod terminal_test;
