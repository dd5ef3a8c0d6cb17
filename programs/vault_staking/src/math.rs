//! Basis-point fee arithmetic.

use anchor_lang::prelude::*;

use crate::constants::{BASIS_POINTS_DENOMINATOR, MAX_FEE_BPS};
use crate::error::StakingError;

/// How a withdrawn amount is divided between the owner and the fee recipient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSplit {
    pub fee: u64,
    pub payout: u64,
}

/// Splits `amount` into `fee = floor(amount * bps / 10000)` and the remainder.
///
/// The product is taken in u128 and checked; truncation is the only rounding.
pub fn split_fee(amount: u64, fee_bps: u16) -> Result<FeeSplit> {
    require!(fee_bps <= MAX_FEE_BPS, StakingError::InvalidFeeBps);

    let fee = (amount as u128)
        .checked_mul(fee_bps as u128)
        .ok_or(StakingError::MathOverflow)?
        .checked_div(BASIS_POINTS_DENOMINATOR as u128)
        .ok_or(StakingError::MathOverflow)?;
    let fee = u64::try_from(fee).map_err(|_| StakingError::MathOverflow)?;

    let payout = amount
        .checked_sub(fee)
        .ok_or(StakingError::MathUnderflow)?;

    Ok(FeeSplit { fee, payout })
}

/// Amount actually credited to a token account, from its balance before and
/// after a transfer.
///
/// Token-2022 mints with a transfer fee withhold part of every transfer, so
/// deposits are booked at the received amount rather than the requested one.
pub fn received_amount(balance_before: u64, balance_after: u64) -> Result<u64> {
    let received = balance_after
        .checked_sub(balance_before)
        .ok_or(StakingError::MathUnderflow)?;
    require!(received > 0, StakingError::ZeroAmount);
    Ok(received)
}
