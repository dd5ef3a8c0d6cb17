use anchor_lang::prelude::*;

#[event]
pub struct PlatformInitialized {
    pub authority: Pubkey,
}

#[event]
pub struct AuthorityAdded {
    pub admin: Pubkey,
    pub authority: Pubkey,
    pub authority_count: u64,
}

#[event]
pub struct AuthorityRemoved {
    pub admin: Pubkey,
    pub authority: Pubkey,
    pub authority_count: u64,
}

#[event]
pub struct ProjectRegistered {
    pub admin: Pubkey,
    pub project_id: u64,
    pub name: String,
    pub mint: Pubkey,
    pub vault: Pubkey,
}

#[event]
pub struct ProjectConfigUpdated {
    pub admin: Pubkey,
    pub project_id: u64,
    pub fee_recipient: Pubkey,
    pub unstake_fee_bps: u16,
    pub emergency_unstake_fee_bps: u16,
}

#[event]
pub struct AllowedDurationsUpdated {
    pub admin: Pubkey,
    pub project_id: u64,
    pub allowed_durations: Vec<u16>,
}

#[event]
pub struct StakeEvent {
    pub user: Pubkey,
    pub project_id: u64,
    pub stake_id: u64,
    pub amount: u64,
    pub duration_days: u16,
}

#[event]
pub struct UnstakeEvent {
    pub user: Pubkey,
    pub project_id: u64,
    pub stake_id: u64,
    pub amount: u64,
    pub fee: u64,
}

#[event]
pub struct EmergencyUnstakeEvent {
    pub user: Pubkey,
    pub project_id: u64,
    pub stake_id: u64,
    pub amount: u64,
    pub fee: u64,
}
