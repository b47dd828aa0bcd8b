multiversx_sc::imports!();

use crate::dao_proxy;
use crate::errors::ERR_PROPOSAL_EXECUTION_FORBIDDEN;
use crate::types::Proposal;

#[multiversx_sc::module]
pub trait ExecutionModule:
    crate::proposal_store::ProposalStoreModule
    + crate::permissions::PermissionsModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: execute
    // Anyone may trigger execution once the pinned policy allows it.
    // ========================================================

    #[endpoint(execute)]
    fn execute(&self, proposal_id: u64) {
        let proposal = self.load_proposal(proposal_id);
        let now = self.blockchain().get_block_timestamp();
        require!(
            proposal.is_executable_at(now),
            ERR_PROPOSAL_EXECUTION_FORBIDDEN
        );

        self.execute_proposal(proposal);
    }

    #[view(canExecute)]
    fn can_execute(&self, proposal_id: u64) -> bool {
        if self.proposals(proposal_id).is_empty() {
            return false;
        }
        let now = self.blockchain().get_block_timestamp();
        self.proposals(proposal_id).get().is_executable_at(now)
    }

    // ========================================================
    // INTERNAL: dispatch
    // The executed flag is committed before the DAO call, so any
    // call re-entering from the dispatched actions sees it.
    // A failed dispatch reverts the flag with the rest of the call.
    // ========================================================

    fn execute_proposal(&self, mut proposal: Proposal<Self::Api>) {
        proposal.executed = true;
        proposal.open = false;
        self.proposals(proposal.id).set(&proposal);

        let dao_address = self.dao_address().get();
        let failure_map: u64 = self
            .tx()
            .to(&dao_address)
            .typed(dao_proxy::DaoProxy)
            .execute(proposal.id, proposal.actions, proposal.allow_failure_map)
            .returns(ReturnsResult)
            .sync_call();

        self.proposal_executed_event(proposal.id, failure_map);
    }
}
