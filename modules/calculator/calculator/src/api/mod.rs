//! Transport adapters for the calculator module.

pub mod rest;
