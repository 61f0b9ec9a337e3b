//! Test suite for devconnector
//!
//! This module organizes all tests

pub mod common;
