use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys. Operator through TotalCampaigns live in instance storage,
// the keyed entries in persistent storage.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Operator,
    Token,
    BoostFee,
    LaunchInterval,
    MaxCampaignLength,
    TotalCampaigns,
    Campaign(u64),
    Pledge(u64, Address),
    LastLaunch(Address),
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: u64,
    pub owner: Address,
    pub title: String,
    pub description: String,
    pub goal: i128,
    pub pledged: i128,
    pub start_time: u64,
    pub end_time: u64,
    pub cancelled: bool,
    pub claimed: bool,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    CampaignNotFound = 3,
    InvalidStartDate = 4,
    InvalidEndDate = 5,
    InvalidLength = 6,
    InvalidAmount = 7,
    RateLimited = 8,
    NotOwner = 9,
    AlreadyCancelled = 10,
    AlreadyClaimed = 11,
    FailedCampaign = 12,
    GoalMet = 13,
    NothingPledged = 14,
}
