#![warn(clippy::all, clippy::pedantic)]

pub mod gravity_tests;
pub mod integration_tests;
pub mod test_utils;
