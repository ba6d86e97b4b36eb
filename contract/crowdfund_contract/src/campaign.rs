use soroban_sdk::{token, Address, Env};

use crate::storage_types::{Campaign, CrowdfundError, DataKey};

pub fn read_operator(env: &Env) -> Result<Address, CrowdfundError> {
    env.storage()
        .instance()
        .get(&DataKey::Operator)
        .ok_or(CrowdfundError::NotInitialized)
}

pub fn read_token(env: &Env) -> Result<Address, CrowdfundError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(CrowdfundError::NotInitialized)
}

pub fn read_boost_fee(env: &Env) -> Result<i128, CrowdfundError> {
    env.storage()
        .instance()
        .get(&DataKey::BoostFee)
        .ok_or(CrowdfundError::NotInitialized)
}

pub fn read_launch_interval(env: &Env) -> Result<u64, CrowdfundError> {
    env.storage()
        .instance()
        .get(&DataKey::LaunchInterval)
        .ok_or(CrowdfundError::NotInitialized)
}

pub fn read_max_campaign_length(env: &Env) -> Result<u64, CrowdfundError> {
    env.storage()
        .instance()
        .get(&DataKey::MaxCampaignLength)
        .ok_or(CrowdfundError::NotInitialized)
}

pub fn load_campaign(env: &Env, campaign_id: u64) -> Result<Campaign, CrowdfundError> {
    env.storage()
        .persistent()
        .get(&DataKey::Campaign(campaign_id))
        .ok_or(CrowdfundError::CampaignNotFound)
}

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    env.storage()
        .persistent()
        .set(&DataKey::Campaign(campaign.id), campaign);
}

/// A donor's accumulated, not-yet-refunded contribution to one campaign.
pub fn pledge_of(env: &Env, campaign_id: u64, donor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Pledge(campaign_id, donor.clone()))
        .unwrap_or(0)
}

pub fn save_pledge(env: &Env, campaign_id: u64, donor: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Pledge(campaign_id, donor.clone()), &amount);
}

/// Take custody of `amount` from `from`.
pub fn collect(env: &Env, from: &Address, amount: i128) -> Result<(), CrowdfundError> {
    let token_address = read_token(env)?;
    let token_client = token::Client::new(env, &token_address);
    token_client.transfer(from, &env.current_contract_address(), &amount);
    Ok(())
}

/// Release `amount` of custodied funds to `to`.
pub fn pay_out(env: &Env, to: &Address, amount: i128) -> Result<(), CrowdfundError> {
    let token_address = read_token(env)?;
    let token_client = token::Client::new(env, &token_address);
    token_client.transfer(&env.current_contract_address(), to, &amount);
    Ok(())
}

/// Move the boost fee straight from the payer to the platform operator.
/// Boost money never enters campaign custody.
pub fn forward_fee(env: &Env, from: &Address, amount: i128) -> Result<(), CrowdfundError> {
    let token_address = read_token(env)?;
    let operator = read_operator(env)?;
    let token_client = token::Client::new(env, &token_address);
    token_client.transfer(from, &operator, &amount);
    Ok(())
}
