//! Instruction handlers for the Vault Staking program.
//!
//! This module contains all instruction implementations.

pub mod authority;
pub mod initialize_platform;
pub mod project_admin;
pub mod register_project;
pub mod stake;
pub mod withdraw;

pub use authority::*;
pub use initialize_platform::*;
pub use project_admin::*;
pub use register_project::*;
pub use stake::*;
pub use withdraw::*;
