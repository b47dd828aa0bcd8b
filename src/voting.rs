multiversx_sc::imports!();

use crate::errors::{ERR_DATE_OUT_OF_BOUNDS, ERR_PROPOSAL_NOT_OPEN, ERR_TOO_MANY_ACTIONS};
use crate::policy;
use crate::types::{ActionList, Proposal, ProposalParameters, Tally, VoteOption};

/// One bit of the allow-failure map per action.
pub const MAX_ACTIONS: usize = 64;

#[multiversx_sc::module]
pub trait VotingModule:
    crate::checkpoints::CheckpointsModule
    + crate::groups::GroupsModule
    + crate::settings::SettingsModule
    + crate::proposal_store::ProposalStoreModule
    + crate::execution::ExecutionModule
    + crate::permissions::PermissionsModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: createProposal
    // Eligibility and voting power are read at the block before
    // the current one, so a proposer cannot shape their own snapshot.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        metadata: ManagedBuffer,
        actions: ActionList<Self::Api>,
        allow_failure_map: u64,
        start_date: u64,
        end_date: u64,
        vote_option: VoteOption,
        try_early_execution: bool,
        group_id: u64,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_group_exists(group_id);
        require!(actions.len() <= MAX_ACTIONS, ERR_TOO_MANY_ACTIONS);

        let snapshot_block = self.blockchain().get_block_nonce().saturating_sub(1);
        let settings = self.voting_settings().get();
        if settings.min_proposer_voting_power != 0 {
            require!(
                self.is_member_at_block(group_id, caller.clone(), snapshot_block),
                "ProposalCreationForbidden({:x})",
                caller
            );
        }

        // ── Dates: zero means "now" / "start + min duration" ──
        let now = self.blockchain().get_block_timestamp();
        let start_date = if start_date == 0 {
            now
        } else {
            require!(start_date >= now, ERR_DATE_OUT_OF_BOUNDS);
            start_date
        };
        let expected_end_date = match start_date.checked_add(settings.min_duration) {
            Some(end_date) => end_date,
            None => sc_panic!(ERR_DATE_OUT_OF_BOUNDS),
        };
        require!(
            end_date == 0 || end_date == expected_end_date,
            ERR_DATE_OUT_OF_BOUNDS
        );

        let total_voting_power = self.total_voting_power(group_id, snapshot_block);
        let parameters = ProposalParameters {
            voting_mode: settings.voting_mode,
            support_threshold: settings.support_threshold,
            min_participation: settings.min_participation,
            start_date,
            end_date: expected_end_date,
            snapshot_block,
            total_voting_power,
            min_voting_power: policy::apply_ratio_ceiled(
                total_voting_power,
                settings.min_participation,
            ),
        };

        let proposal_id = self.proposal_count().get();
        self.proposal_count().set(proposal_id + 1);

        let proposal = Proposal {
            id: proposal_id,
            group_id,
            creator: caller.clone(),
            metadata,
            open: true,
            executed: false,
            parameters,
            tally: Tally::default(),
            actions,
            allow_failure_map,
        };
        self.proposals(proposal_id).set(&proposal);

        self.proposal_created_event(
            proposal_id,
            &caller,
            group_id,
            start_date,
            expected_end_date,
            &proposal.metadata,
            allow_failure_map,
            &proposal.actions,
        );

        if vote_option != VoteOption::None {
            self.cast_vote(proposal, &caller, vote_option, try_early_execution);
        }

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // One vote per member, or a replaceable one in VoteReplacement mode.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, vote_option: VoteOption, try_early_execution: bool) {
        let caller = self.blockchain().get_caller();
        let proposal = self.load_proposal(proposal_id);
        self.cast_vote(proposal, &caller, vote_option, try_early_execution);
    }

    #[view(canVote)]
    fn can_vote(
        &self,
        proposal_id: u64,
        voter: ManagedAddress,
        vote_option: VoteOption,
    ) -> bool {
        if self.proposals(proposal_id).is_empty() {
            return false;
        }
        let proposal = self.proposals(proposal_id).get();
        let now = self.blockchain().get_block_timestamp();
        proposal.is_open_at(now) && self.voter_is_eligible(&proposal, &voter, vote_option)
    }

    // ========================================================
    // INTERNAL: vote casting
    // ========================================================

    fn cast_vote(
        &self,
        mut proposal: Proposal<Self::Api>,
        voter: &ManagedAddress,
        vote_option: VoteOption,
        try_early_execution: bool,
    ) {
        let now = self.blockchain().get_block_timestamp();
        require!(proposal.is_open_at(now), ERR_PROPOSAL_NOT_OPEN);
        require!(
            self.voter_is_eligible(&proposal, voter, vote_option),
            "VoteCastForbidden({:x})",
            voter
        );

        let previous = self.recorded_vote(proposal.id, voter);
        proposal.tally.replace(previous, vote_option);
        self.voters(proposal.id, voter).set(vote_option);
        self.proposals(proposal.id).set(&proposal);

        self.vote_cast_event(proposal.id, voter, vote_option, 1u64);

        if try_early_execution && proposal.is_executable_at(now) {
            self.execute_proposal(proposal);
        }
    }

    /// Membership at the snapshot block plus the mode's rule on repeated votes.
    /// Does not look at dates.
    fn voter_is_eligible(
        &self,
        proposal: &Proposal<Self::Api>,
        voter: &ManagedAddress,
        vote_option: VoteOption,
    ) -> bool {
        if vote_option == VoteOption::None {
            return false;
        }
        if !self.is_member_at_block(
            proposal.group_id,
            voter.clone(),
            proposal.parameters.snapshot_block,
        ) {
            return false;
        }
        let previous = self.recorded_vote(proposal.id, voter);
        previous == VoteOption::None || proposal.parameters.voting_mode.allows_vote_replacement()
    }
}
