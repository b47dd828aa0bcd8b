#![no_std]

multiversx_sc::imports!();

pub mod checkpoints;
pub mod dao_proxy;
pub mod errors;
pub mod events;
pub mod execution;
pub mod groups;
pub mod permissions;
pub mod policy;
pub mod proposal_store;
pub mod settings;
pub mod subgovernance_proxy;
pub mod types;
pub mod voting;

use types::VotingSettings;

// ============================================================
// Contract
// ============================================================

/// Group-scoped voting plugin for a DAO.
///
/// Each group keeps a checkpointed member list. Proposals are scoped to one group,
/// snapshot its membership at creation, and once approved hand their actions to the
/// DAO for execution.
#[multiversx_sc::contract]
pub trait Subgovernance:
    checkpoints::CheckpointsModule
    + groups::GroupsModule
    + settings::SettingsModule
    + proposal_store::ProposalStoreModule
    + voting::VotingModule
    + execution::ExecutionModule
    + permissions::PermissionsModule
    + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, dao_address: ManagedAddress, voting_settings: VotingSettings) {
        self.dao_address().set(&dao_address);
        self.store_voting_settings(&voting_settings);
        self.group_count().set(0u64);
        self.proposal_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
