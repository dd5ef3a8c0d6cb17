use anchor_lang::prelude::*;

use crate::constants::SECONDS_PER_DAY;
use crate::error::StakingError;
use crate::state::WithdrawalKind;

/// A single deposit, derived from `[STAKE_SEED, project, owner, stake_id]`.
#[account]
#[derive(Default, Debug)]
pub struct StakeRecord {
    pub owner: Pubkey,
    pub project: Pubkey,
    pub project_id: u64,
    pub stake_id: u64,

    pub amount: u64,
    pub duration_days: u16,
    pub start_timestamp: i64,

    pub active: bool,
    pub bump: u8,
}

impl StakeRecord {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 8 + 8 + 2 + 8 + 1 + 1;

    /// Unix timestamp from which the normal unstake path opens.
    pub fn maturity_timestamp(&self) -> Result<i64> {
        let lock_seconds = i64::from(self.duration_days)
            .checked_mul(SECONDS_PER_DAY)
            .ok_or(StakingError::MathOverflow)?;
        let maturity = self
            .start_timestamp
            .checked_add(lock_seconds)
            .ok_or(StakingError::MathOverflow)?;
        Ok(maturity)
    }

    pub fn is_matured(&self, now: i64) -> Result<bool> {
        Ok(now >= self.maturity_timestamp()?)
    }

    /// Checks every precondition of a withdrawal along `kind` at time `now`.
    ///
    /// The normal path opens at maturity; the early path closes at maturity,
    /// so for any `now` exactly one of them is available.
    pub fn check_withdrawal(&self, caller: &Pubkey, kind: WithdrawalKind, now: i64) -> Result<()> {
        require_keys_eq!(self.owner, *caller, StakingError::InvalidStakeOwner);
        require!(self.active, StakingError::StakeNotActive);

        let matured = self.is_matured(now)?;
        match kind {
            WithdrawalKind::NormalExit => {
                require!(matured, StakingError::LockupPeriodNotEnded);
            }
            WithdrawalKind::EarlyExit => {
                require!(!matured, StakingError::LockupPeriodEnded);
            }
        }
        Ok(())
    }

    /// Flips the record inactive. Fails if it already was.
    pub fn mark_withdrawn(&mut self) -> Result<()> {
        require!(self.active, StakingError::StakeNotActive);
        self.active = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::error_code;

    const START: i64 = 1_700_000_000;

    fn stake(owner: Pubkey, duration_days: u16) -> StakeRecord {
        StakeRecord {
            owner,
            amount: 100_000_000_000,
            duration_days,
            start_timestamp: START,
            active: true,
            ..Default::default()
        }
    }

    #[test]
    fn maturity_is_days_in_seconds() {
        let record = stake(Pubkey::new_unique(), 7);
        assert_eq!(record.maturity_timestamp().unwrap(), START + 7 * 86_400);
        assert!(!record.is_matured(START + 7 * 86_400 - 1).unwrap());
        assert!(record.is_matured(START + 7 * 86_400).unwrap());
    }

    #[test]
    fn normal_exit_waits_for_maturity() {
        let owner = Pubkey::new_unique();
        let record = stake(owner, 7);

        let err = record
            .check_withdrawal(&owner, WithdrawalKind::NormalExit, START + 86_400)
            .unwrap_err();
        assert_eq!(error_code(err), u32::from(StakingError::LockupPeriodNotEnded));

        record
            .check_withdrawal(&owner, WithdrawalKind::NormalExit, START + 7 * 86_400)
            .unwrap();
    }

    #[test]
    fn early_exit_closes_at_maturity() {
        let owner = Pubkey::new_unique();
        let record = stake(owner, 7);

        record
            .check_withdrawal(&owner, WithdrawalKind::EarlyExit, START)
            .unwrap();

        let err = record
            .check_withdrawal(&owner, WithdrawalKind::EarlyExit, START + 7 * 86_400)
            .unwrap_err();
        assert_eq!(error_code(err), u32::from(StakingError::LockupPeriodEnded));
    }

    #[test]
    fn zero_day_stake_is_immediately_mature() {
        let owner = Pubkey::new_unique();
        let record = stake(owner, 0);

        record
            .check_withdrawal(&owner, WithdrawalKind::NormalExit, START)
            .unwrap();
        let err = record
            .check_withdrawal(&owner, WithdrawalKind::EarlyExit, START)
            .unwrap_err();
        assert_eq!(error_code(err), u32::from(StakingError::LockupPeriodEnded));
    }

    #[test]
    fn only_the_owner_may_withdraw() {
        let record = stake(Pubkey::new_unique(), 7);
        let err = record
            .check_withdrawal(&Pubkey::new_unique(), WithdrawalKind::EarlyExit, START)
            .unwrap_err();
        assert_eq!(error_code(err), u32::from(StakingError::InvalidStakeOwner));
    }

    #[test]
    fn withdrawn_stake_cannot_be_withdrawn_again() {
        let owner = Pubkey::new_unique();
        let mut record = stake(owner, 7);
        record.mark_withdrawn().unwrap();

        for (kind, now) in [
            (WithdrawalKind::EarlyExit, START),
            (WithdrawalKind::NormalExit, START + 30 * 86_400),
        ] {
            let err = record.check_withdrawal(&owner, kind, now).unwrap_err();
            assert_eq!(error_code(err), u32::from(StakingError::StakeNotActive));
        }

        let err = record.mark_withdrawn().unwrap_err();
        assert_eq!(error_code(err), u32::from(StakingError::StakeNotActive));
    }

    #[test]
    fn maturity_overflow_is_an_error() {
        let owner = Pubkey::new_unique();
        let mut record = stake(owner, u16::MAX);
        record.start_timestamp = i64::MAX - 10;

        let err = record
            .check_withdrawal(&owner, WithdrawalKind::NormalExit, i64::MAX)
            .unwrap_err();
        assert_eq!(error_code(err), u32::from(StakingError::MathOverflow));
    }

    #[test]
    fn len_matches_serialized_size() {
        let bytes = stake(Pubkey::new_unique(), 30).try_to_vec().unwrap();
        assert_eq!(bytes.len() + 8, StakeRecord::LEN);
    }
}
