// src/lib.rs

pub mod link;

// The compiler targets the entry point table directly.
pub use wabbit_runtime::abi;
