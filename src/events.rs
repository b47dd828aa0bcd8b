multiversx_sc::imports!();

use crate::types::{ActionList, AddressList, VoteOption, VotingSettings};

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("groupCreated")]
    fn group_created_event(&self, #[indexed] group_id: u64, name: &ManagedBuffer);

    #[event("membersAdded")]
    fn members_added_event(
        &self,
        #[indexed] group_id: u64,
        addresses: &AddressList<Self::Api>,
    );

    #[event("membersRemoved")]
    fn members_removed_event(
        &self,
        #[indexed] group_id: u64,
        addresses: &AddressList<Self::Api>,
    );

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] creator: &ManagedAddress,
        #[indexed] group_id: u64,
        #[indexed] start_date: u64,
        #[indexed] end_date: u64,
        #[indexed] metadata: &ManagedBuffer,
        #[indexed] allow_failure_map: u64,
        actions: &ActionList<Self::Api>,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] vote_option: VoteOption,
        voting_power: u64,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(&self, #[indexed] proposal_id: u64, failure_map: u64);

    #[event("votingSettingsUpdated")]
    fn voting_settings_updated_event(&self, settings: &VotingSettings);
}
