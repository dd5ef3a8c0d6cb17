use anchor_lang::prelude::*;

use crate::math::FeeSplit;
use crate::state::{StakeRecord, WithdrawalKind};

/// Audit trail of a completed withdrawal, derived from `[UNSTAKE_SEED, stake_record]`.
///
/// Written once when the stake is withdrawn and never modified afterwards.
#[account]
#[derive(Debug)]
pub struct WithdrawalRecord {
    pub owner: Pubkey,
    pub project: Pubkey,
    pub stake_record: Pubkey,
    pub stake_id: u64,

    pub amount: u64,
    pub fee: u64,
    pub payout: u64,

    pub withdrawn_at: i64,
    pub kind: WithdrawalKind,
    pub bump: u8,
}

impl WithdrawalRecord {
    pub const LEN: usize = 8 + (32 * 3) + 8 + (8 * 3) + 8 + 1 + 1;

    /// Flags `stake` withdrawn and builds its audit record.
    ///
    /// Fails without touching `stake` if it was already withdrawn.
    pub fn finalize(
        stake: &mut StakeRecord,
        stake_record: Pubkey,
        split: FeeSplit,
        kind: WithdrawalKind,
        withdrawn_at: i64,
        bump: u8,
    ) -> Result<Self> {
        stake.mark_withdrawn()?;
        Ok(Self::from_stake(stake, stake_record, split, kind, withdrawn_at, bump))
    }

    pub fn from_stake(
        stake: &StakeRecord,
        stake_record: Pubkey,
        split: FeeSplit,
        kind: WithdrawalKind,
        withdrawn_at: i64,
        bump: u8,
    ) -> Self {
        Self {
            owner: stake.owner,
            project: stake.project,
            stake_record,
            stake_id: stake.stake_id,
            amount: stake.amount,
            fee: split.fee,
            payout: split.payout,
            withdrawn_at,
            kind,
            bump,
        }
    }
}
