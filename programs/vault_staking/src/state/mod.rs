//! State structures for the Vault Staking program.
//!
//! This module defines all account structures used to store program state.

pub mod platform_config;
pub mod project_config;
pub mod stake_record;
pub mod withdrawal_record;

pub use platform_config::*;
pub use project_config::*;
pub use stake_record::*;
pub use withdrawal_record::*;
