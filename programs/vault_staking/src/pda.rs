//! Canonical program derived addresses.
//!
//! Instructions re-derive every account through `seeds` constraints; these
//! helpers produce the same addresses for off-chain callers and tests.

use anchor_lang::prelude::*;

use crate::constants::*;

pub fn derive_platform_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PLATFORM_SEED], program_id)
}

pub fn derive_project_address(program_id: &Pubkey, project_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PROJECT_SEED, &project_id.to_le_bytes()], program_id)
}

pub fn derive_vault_address(program_id: &Pubkey, project_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, &project_id.to_le_bytes()], program_id)
}

pub fn derive_vault_authority_address(program_id: &Pubkey, project_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[VAULT_AUTHORITY_SEED, &project_id.to_le_bytes()],
        program_id,
    )
}

pub fn derive_stake_address(
    program_id: &Pubkey,
    project: &Pubkey,
    owner: &Pubkey,
    stake_id: u64,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            STAKE_SEED,
            project.as_ref(),
            owner.as_ref(),
            &stake_id.to_le_bytes(),
        ],
        program_id,
    )
}

pub fn derive_withdrawal_address(program_id: &Pubkey, stake_record: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[UNSTAKE_SEED, stake_record.as_ref()], program_id)
}
