use soroban_sdk::{contracttype, Address, Symbol};

#[contracttype]
#[derive(Clone)]
pub struct LaunchEvent {
    pub campaign_id: u64,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct CancelEvent {
    pub campaign_id: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct PledgeEvent {
    pub campaign_id: u64,
    pub donor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct WithdrawEvent {
    pub campaign_id: u64,
    pub owner: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct RefundEvent {
    pub campaign_id: u64,
    pub donor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct BoostEvent {
    pub campaign_id: u64,
    pub amount: i128,
}

pub fn emit_launch(env: &soroban_sdk::Env, event: LaunchEvent) {
    env.events().publish((Symbol::new(env, "launch"),), event);
}

pub fn emit_cancel(env: &soroban_sdk::Env, event: CancelEvent) {
    env.events().publish((Symbol::new(env, "cancel"),), event);
}

pub fn emit_pledge(env: &soroban_sdk::Env, event: PledgeEvent) {
    env.events().publish((Symbol::new(env, "pledge"),), event);
}

pub fn emit_withdraw(env: &soroban_sdk::Env, event: WithdrawEvent) {
    env.events().publish((Symbol::new(env, "withdraw"),), event);
}

pub fn emit_refund(env: &soroban_sdk::Env, event: RefundEvent) {
    env.events().publish((Symbol::new(env, "refund"),), event);
}

pub fn emit_boost(env: &soroban_sdk::Env, event: BoostEvent) {
    env.events().publish((Symbol::new(env, "boost"),), event);
}
