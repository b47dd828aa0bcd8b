multiversx_sc::imports!();

use crate::errors::{ERR_MIN_DURATION_OUT_OF_BOUNDS, ERR_RATIO_OUT_OF_BOUNDS};
use crate::permissions::UPDATE_VOTING_SETTINGS_PERMISSION;
use crate::policy;
use crate::types::VotingSettings;

#[multiversx_sc::module]
pub trait SettingsModule:
    crate::permissions::PermissionsModule + crate::events::EventsModule
{
    /// Applies to proposals created afterwards; existing ones keep their pinned copy.
    #[endpoint(updateVotingSettings)]
    fn update_voting_settings(&self, settings: VotingSettings) {
        self.require_dao_permission(UPDATE_VOTING_SETTINGS_PERMISSION);
        self.store_voting_settings(&settings);
    }

    fn store_voting_settings(&self, settings: &VotingSettings) {
        require!(
            policy::is_valid_support_threshold(settings.support_threshold),
            ERR_RATIO_OUT_OF_BOUNDS
        );
        require!(
            policy::is_valid_min_participation(settings.min_participation),
            ERR_RATIO_OUT_OF_BOUNDS
        );
        require!(
            policy::is_valid_min_duration(settings.min_duration),
            ERR_MIN_DURATION_OUT_OF_BOUNDS
        );

        self.voting_settings().set(settings);
        self.voting_settings_updated_event(settings);
    }

    #[view(getVotingSettings)]
    #[storage_mapper("votingSettings")]
    fn voting_settings(&self) -> SingleValueMapper<VotingSettings>;
}
