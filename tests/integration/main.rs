//! Integration tests for earthspin

mod animation_test;
mod cli_test;
mod helpers;
