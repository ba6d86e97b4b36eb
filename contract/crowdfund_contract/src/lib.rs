#![no_std]

mod campaign;
mod events;
mod storage_types;


use soroban_sdk::{contract, contractimpl, Address, Env, String};

pub use storage_types::{Campaign, CrowdfundError};
use storage_types::DataKey;

#[contract]
pub struct CrowdfundContract;

#[contractimpl]
impl CrowdfundContract {
    /// Set the platform configuration. Callable exactly once; everything set
    /// here is immutable afterwards. A `launch_interval` of zero disables
    /// launch rate limiting.
    pub fn initialize(
        env: Env,
        operator: Address,
        token: Address,
        boost_fee: i128,
        launch_interval: u64,
        max_campaign_length: u64,
    ) -> Result<(), CrowdfundError> {
        if env.storage().instance().has(&DataKey::Operator) {
            return Err(CrowdfundError::AlreadyInitialized);
        }

        operator.require_auth();

        if boost_fee <= 0 {
            return Err(CrowdfundError::InvalidAmount);
        }
        if max_campaign_length == 0 {
            return Err(CrowdfundError::InvalidLength);
        }

        env.storage().instance().set(&DataKey::Operator, &operator);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::BoostFee, &boost_fee);
        env.storage().instance().set(&DataKey::LaunchInterval, &launch_interval);
        env.storage()
            .instance()
            .set(&DataKey::MaxCampaignLength, &max_campaign_length);
        env.storage().instance().set(&DataKey::TotalCampaigns, &0u64);

        Ok(())
    }

    /// Create a new campaign. Returns the campaign id, assigned sequentially
    /// starting at 1.
    pub fn launch_campaign(
        env: Env,
        creator: Address,
        title: String,
        description: String,
        goal: i128,
        start_time: u64,
        end_time: u64,
    ) -> Result<u64, CrowdfundError> {
        creator.require_auth();

        let now = env.ledger().timestamp();

        if start_time <= now {
            return Err(CrowdfundError::InvalidStartDate);
        }
        if end_time <= start_time || end_time <= now {
            return Err(CrowdfundError::InvalidEndDate);
        }
        if end_time - start_time > campaign::read_max_campaign_length(&env)? {
            return Err(CrowdfundError::InvalidLength);
        }
        if goal <= 0 {
            return Err(CrowdfundError::InvalidAmount);
        }

        let interval = campaign::read_launch_interval(&env)?;
        if let Some(last) = env
            .storage()
            .persistent()
            .get::<DataKey, u64>(&DataKey::LastLaunch(creator.clone()))
        {
            if now < last.saturating_add(interval) {
                return Err(CrowdfundError::RateLimited);
            }
        }

        let total: u64 = env
            .storage()
            .instance()
            .get(&DataKey::TotalCampaigns)
            .unwrap_or(0);
        let campaign_id = total + 1;

        let new_campaign = Campaign {
            id: campaign_id,
            owner: creator.clone(),
            title,
            description,
            goal,
            pledged: 0,
            start_time,
            end_time,
            cancelled: false,
            claimed: false,
        };

        campaign::save_campaign(&env, &new_campaign);
        env.storage()
            .persistent()
            .set(&DataKey::LastLaunch(creator.clone()), &now);
        env.storage()
            .instance()
            .set(&DataKey::TotalCampaigns, &campaign_id);

        events::emit_launch(
            &env,
            events::LaunchEvent {
                campaign_id,
                owner: creator,
            },
        );

        Ok(campaign_id)
    }

    /// Cancel a campaign before it opens for pledges. Once the start time has
    /// passed, cancellation is disallowed so donors who may already have
    /// pledged are protected.
    pub fn cancel_campaign(env: Env, caller: Address, campaign_id: u64) -> Result<(), CrowdfundError> {
        caller.require_auth();

        let now = env.ledger().timestamp();
        let mut campaign = campaign::load_campaign(&env, campaign_id)?;

        if caller != campaign.owner {
            return Err(CrowdfundError::NotOwner);
        }
        if now >= campaign.start_time {
            return Err(CrowdfundError::InvalidStartDate);
        }
        if campaign.cancelled {
            return Err(CrowdfundError::AlreadyCancelled);
        }

        campaign.cancelled = true;
        campaign::save_campaign(&env, &campaign);

        events::emit_cancel(&env, events::CancelEvent { campaign_id });

        Ok(())
    }

    /// Pledge `amount` toward an active campaign. Pledges by the same donor
    /// accumulate into one record. Over-funding past the goal is allowed.
    pub fn pledge_to(
        env: Env,
        donor: Address,
        campaign_id: u64,
        amount: i128,
    ) -> Result<(), CrowdfundError> {
        donor.require_auth();

        let now = env.ledger().timestamp();
        let mut campaign = campaign::load_campaign(&env, campaign_id)?;

        if campaign.cancelled {
            return Err(CrowdfundError::AlreadyCancelled);
        }
        if amount <= 0 {
            return Err(CrowdfundError::InvalidAmount);
        }
        if now < campaign.start_time {
            return Err(CrowdfundError::InvalidStartDate);
        }
        if now >= campaign.end_time {
            return Err(CrowdfundError::InvalidEndDate);
        }

        campaign::collect(&env, &donor, amount)?;

        campaign.pledged += amount;
        campaign::save_campaign(&env, &campaign);

        let record = campaign::pledge_of(&env, campaign_id, &donor) + amount;
        campaign::save_pledge(&env, campaign_id, &donor, record);

        events::emit_pledge(
            &env,
            events::PledgeEvent {
                campaign_id,
                donor,
                amount,
            },
        );

        Ok(())
    }

    /// Withdraw the full pledged amount after a successful campaign. The
    /// `claimed` flag is persisted before the transfer so a reentrant call
    /// observes the already-settled state.
    pub fn withdraw_from(env: Env, caller: Address, campaign_id: u64) -> Result<(), CrowdfundError> {
        caller.require_auth();

        let now = env.ledger().timestamp();
        let mut campaign = campaign::load_campaign(&env, campaign_id)?;

        if caller != campaign.owner {
            return Err(CrowdfundError::NotOwner);
        }
        if now < campaign.end_time {
            return Err(CrowdfundError::InvalidEndDate);
        }
        if campaign.pledged < campaign.goal {
            return Err(CrowdfundError::FailedCampaign);
        }
        if campaign.claimed {
            return Err(CrowdfundError::AlreadyClaimed);
        }
        if campaign.cancelled {
            return Err(CrowdfundError::AlreadyCancelled);
        }

        let amount = campaign.pledged;
        campaign.claimed = true;
        campaign::save_campaign(&env, &campaign);

        campaign::pay_out(&env, &campaign.owner, amount)?;

        events::emit_withdraw(
            &env,
            events::WithdrawEvent {
                campaign_id,
                owner: campaign.owner,
                amount,
            },
        );

        Ok(())
    }

    /// Return a donor's pledge after a failed campaign. The donor's record is
    /// zeroed before the transfer, so replaying the refund fails. The
    /// campaign's `pledged` field is frozen history of the total raised and is
    /// not decremented.
    pub fn refund(env: Env, donor: Address, campaign_id: u64) -> Result<(), CrowdfundError> {
        donor.require_auth();

        let now = env.ledger().timestamp();
        let campaign = campaign::load_campaign(&env, campaign_id)?;

        if now < campaign.end_time {
            return Err(CrowdfundError::InvalidEndDate);
        }
        if campaign.pledged >= campaign.goal {
            return Err(CrowdfundError::GoalMet);
        }

        let amount = campaign::pledge_of(&env, campaign_id, &donor);
        if amount == 0 {
            return Err(CrowdfundError::NothingPledged);
        }

        campaign::save_pledge(&env, campaign_id, &donor, 0);

        campaign::pay_out(&env, &donor, amount)?;

        events::emit_refund(
            &env,
            events::RefundEvent {
                campaign_id,
                donor,
                amount,
            },
        );

        Ok(())
    }

    /// Highlight an active campaign for the fixed platform fee. The payment
    /// must equal the configured fee exactly; it goes straight to the operator
    /// and touches no pledge state.
    pub fn boost(
        env: Env,
        payer: Address,
        campaign_id: u64,
        amount: i128,
    ) -> Result<(), CrowdfundError> {
        payer.require_auth();

        let now = env.ledger().timestamp();
        let campaign = campaign::load_campaign(&env, campaign_id)?;

        if campaign.cancelled {
            return Err(CrowdfundError::AlreadyCancelled);
        }
        if now < campaign.start_time {
            return Err(CrowdfundError::InvalidStartDate);
        }
        if now >= campaign.end_time {
            return Err(CrowdfundError::InvalidEndDate);
        }
        if amount != campaign::read_boost_fee(&env)? {
            return Err(CrowdfundError::InvalidAmount);
        }

        campaign::forward_fee(&env, &payer, amount)?;

        events::emit_boost(&env, events::BoostEvent { campaign_id, amount });

        Ok(())
    }

    /// Get a campaign record by id.
    pub fn get_campaign(env: Env, campaign_id: u64) -> Result<Campaign, CrowdfundError> {
        campaign::load_campaign(&env, campaign_id)
    }

    /// Running total of launched campaigns. Ids are dense, so this is also the
    /// highest assigned id.
    pub fn total_campaigns(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::TotalCampaigns)
            .unwrap_or(0)
    }

    /// A donor's accumulated, not-yet-refunded pledge to a campaign.
    pub fn pledged_amount(env: Env, campaign_id: u64, donor: Address) -> i128 {
        campaign::pledge_of(&env, campaign_id, &donor)
    }

    pub fn boost_fee(env: Env) -> Result<i128, CrowdfundError> {
        campaign::read_boost_fee(&env)
    }

    pub fn operator(env: Env) -> Result<Address, CrowdfundError> {
        campaign::read_operator(&env)
    }
}
