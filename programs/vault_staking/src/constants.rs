//! Program constants for the Vault Staking program.
//!
//! This module defines the PDA seeds, time units, fee bounds and account
//! sizing limits used throughout the program.

/// Seed for deriving the singleton platform config PDA
pub const PLATFORM_SEED: &[u8] = b"platform";

/// Seed for deriving project config PDAs (followed by the project index)
pub const PROJECT_SEED: &[u8] = b"project";

/// Seed for deriving project vault token account PDAs (followed by the project index)
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed for deriving the keyless vault authority PDAs (followed by the project index)
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault-authority";

/// Seed for deriving stake record PDAs (project, owner, stake id)
pub const STAKE_SEED: &[u8] = b"stake";

/// Seed for deriving withdrawal record PDAs (stake record)
pub const UNSTAKE_SEED: &[u8] = b"unstake";

/// Number of seconds in a day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Basis points denominator (100% = 10000 basis points)
pub const BASIS_POINTS_DENOMINATOR: u64 = 10_000;

/// Maximum fee a project may charge on exit (100% = 10000 basis points)
pub const MAX_FEE_BPS: u16 = 10_000;

/// Maximum length of a project name in bytes
pub const MAX_NAME_LEN: usize = 32;

/// Maximum number of allowed lock-up durations per project
pub const MAX_DURATIONS: usize = 10;

/// Maximum number of platform authorities
pub const MAX_AUTHORITIES: usize = 10;
