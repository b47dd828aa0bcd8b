multiversx_sc::imports!();

use crate::errors::ERR_UNKNOWN_PROPOSAL;
use crate::types::{Proposal, ProposalStatus, VoteOption};

#[multiversx_sc::module]
pub trait ProposalStoreModule {
    fn load_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        let mapper = self.proposals(proposal_id);
        require!(!mapper.is_empty(), ERR_UNKNOWN_PROPOSAL);
        mapper.get()
    }

    fn recorded_vote(&self, proposal_id: u64, voter: &ManagedAddress) -> VoteOption {
        let mapper = self.voters(proposal_id, voter);
        if mapper.is_empty() {
            VoteOption::None
        } else {
            mapper.get()
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.load_proposal(proposal_id)
    }

    #[view(getProposalStatus)]
    fn get_proposal_status(&self, proposal_id: u64) -> ProposalStatus {
        let now = self.blockchain().get_block_timestamp();
        self.load_proposal(proposal_id).status_at(now)
    }

    #[view(getVoteOption)]
    fn get_vote_option(&self, proposal_id: u64, voter: ManagedAddress) -> VoteOption {
        self.recorded_vote(proposal_id, &voter)
    }

    #[view(isSupportThresholdReached)]
    fn is_support_threshold_reached(&self, proposal_id: u64) -> bool {
        let proposal = self.load_proposal(proposal_id);
        proposal.parameters.support_threshold_reached(&proposal.tally)
    }

    #[view(isSupportThresholdReachedEarly)]
    fn is_support_threshold_reached_early(&self, proposal_id: u64) -> bool {
        let proposal = self.load_proposal(proposal_id);
        proposal
            .parameters
            .support_threshold_reached_early(&proposal.tally)
    }

    #[view(isMinParticipationReached)]
    fn is_min_participation_reached(&self, proposal_id: u64) -> bool {
        let proposal = self.load_proposal(proposal_id);
        proposal.parameters.min_participation_reached(&proposal.tally)
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getProposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, proposal_id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("voters")]
    fn voters(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<VoteOption>;
}
