use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::math::{split_fee, FeeSplit};
use crate::state::StakeRecord;

/// How a stake record is finalized once it has been withdrawn.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinalizeMode {
    /// Flag the stake inactive and write a `WithdrawalRecord`.
    Audit,
    /// Close the stake record and refund its rent to the owner.
    Close,
}

impl Default for FinalizeMode {
    fn default() -> Self {
        FinalizeMode::Audit
    }
}

/// Which fee schedule applies to a withdrawal.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum WithdrawalKind {
    /// Withdrawal at or after maturity.
    NormalExit,
    /// Withdrawal strictly before maturity.
    EarlyExit,
}

#[account]
#[derive(Default, Debug)]
pub struct ProjectConfig {
    pub project_id: u64,
    pub name: String,

    pub token_mint: Pubkey,
    pub token_program: Pubkey,
    pub vault: Pubkey,
    pub vault_authority: Pubkey,

    pub fee_recipient: Pubkey,
    pub unstake_fee_bps: u16,
    pub emergency_unstake_fee_bps: u16,

    /// Lock-up durations in days a stake may choose. Empty means unrestricted.
    pub allowed_durations: Vec<u16>,
    pub finalize_mode: FinalizeMode,

    /// Principal held in the vault on behalf of active stakes.
    pub total_staked: u64,
    pub active_stakes: u64,

    pub created_at: i64,

    pub bump: u8,
    pub vault_bump: u8,
    pub vault_authority_bump: u8,
}

impl ProjectConfig {
    pub const LEN: usize = 8
        + 8
        + (4 + MAX_NAME_LEN)
        + (32 * 5)
        + (2 * 2)
        + (4 + 2 * MAX_DURATIONS)
        + 1
        + (8 * 2)
        + 8
        + 3;

    pub fn validate_name(name: &str) -> Result<()> {
        require!(name.len() <= MAX_NAME_LEN, StakingError::NameTooLong);
        Ok(())
    }

    pub fn validate_durations(durations: &[u16]) -> Result<()> {
        require!(
            durations.len() <= MAX_DURATIONS,
            StakingError::TooManyDurations
        );
        Ok(())
    }

    pub fn validate_fee_bps(bps: u16) -> Result<()> {
        require!(bps <= MAX_FEE_BPS, StakingError::InvalidFeeBps);
        Ok(())
    }

    pub fn is_duration_allowed(&self, duration_days: u16) -> bool {
        self.allowed_durations.is_empty() || self.allowed_durations.contains(&duration_days)
    }

    pub fn fee_bps_for(&self, kind: WithdrawalKind) -> u16 {
        match kind {
            WithdrawalKind::NormalExit => self.unstake_fee_bps,
            WithdrawalKind::EarlyExit => self.emergency_unstake_fee_bps,
        }
    }

    /// Replaces the fee schedule. Both values are validated before either is written.
    pub fn set_fees(
        &mut self,
        fee_recipient: Pubkey,
        unstake_fee_bps: u16,
        emergency_unstake_fee_bps: u16,
    ) -> Result<()> {
        Self::validate_fee_bps(unstake_fee_bps)?;
        Self::validate_fee_bps(emergency_unstake_fee_bps)?;
        self.fee_recipient = fee_recipient;
        self.unstake_fee_bps = unstake_fee_bps;
        self.emergency_unstake_fee_bps = emergency_unstake_fee_bps;
        Ok(())
    }

    pub fn set_allowed_durations(&mut self, durations: Vec<u16>) -> Result<()> {
        Self::validate_durations(&durations)?;
        self.allowed_durations = durations;
        Ok(())
    }

    /// Books a new deposit against the vault principal.
    pub fn record_deposit(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        self.active_stakes = self
            .active_stakes
            .checked_add(1)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    /// Checks every precondition of withdrawing `stake` and returns its fee split.
    ///
    /// `has_record` tells whether a withdrawal record account was supplied;
    /// `Audit` projects need one and `Close` projects must not get one.
    pub fn plan_withdrawal(
        &self,
        stake: &StakeRecord,
        caller: &Pubkey,
        kind: WithdrawalKind,
        now: i64,
        vault_balance: u64,
        has_record: bool,
    ) -> Result<FeeSplit> {
        stake.check_withdrawal(caller, kind, now)?;

        match self.finalize_mode {
            FinalizeMode::Audit => {
                require!(has_record, StakingError::MissingWithdrawalRecord);
            }
            FinalizeMode::Close => {
                require!(!has_record, StakingError::UnexpectedWithdrawalRecord);
            }
        }

        require!(
            vault_balance >= stake.amount,
            StakingError::InsufficientVaultBalance
        );

        split_fee(stake.amount, self.fee_bps_for(kind))
    }

    /// Releases a withdrawn stake's principal from the vault books.
    pub fn record_withdrawal(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_sub(amount)
            .ok_or(StakingError::MathUnderflow)?;
        self.active_stakes = self
            .active_stakes
            .checked_sub(1)
            .ok_or(StakingError::MathUnderflow)?;
        Ok(())
    }
}
