#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod mock_dao_proxy;
pub mod plugin_proxy;

pub const EXECUTE_PERMISSION: &[u8] = b"EXECUTE_PERMISSION";

/// Action payload the mock treats as a failing call.
pub const FAILING_CALL_DATA: &[u8] = b"fail";

/// Calls `execute(call_id)` back on the action's target.
pub const REENTER_EXECUTE_CALL_DATA: &[u8] = b"reenter:execute";

/// Calls `vote(call_id, Yes)` back on the action's target, voting as the DAO.
pub const REENTER_VOTE_CALL_DATA: &[u8] = b"reenter:vote";

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone)]
pub struct Action<M: ManagedTypeApi> {
    pub to: ManagedAddress<M>,
    pub value: BigUint<M>,
    pub data: ManagedBuffer<M>,
}

pub type ActionList<M> = ManagedVec<M, Action<M>>;

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq)]
pub enum VoteOption {
    None,
    Abstain,
    Yes,
    No,
}

/// Minimal stand-in for the DAO a plugin is installed on: a permission table and
/// an `execute` entry point that records every dispatch instead of running it.
#[multiversx_sc::contract]
pub trait MockDao {
    #[init]
    fn init(&self) {}

    #[endpoint(grant)]
    fn grant(&self, target: ManagedAddress, who: ManagedAddress, permission_id: ManagedBuffer) {
        self.permissions(&target, &who, &permission_id).set(true);
    }

    #[endpoint(revoke)]
    fn revoke(&self, target: ManagedAddress, who: ManagedAddress, permission_id: ManagedBuffer) {
        self.permissions(&target, &who, &permission_id).clear();
    }

    #[view(hasPermission)]
    fn has_permission(
        &self,
        target: ManagedAddress,
        who: ManagedAddress,
        permission_id: ManagedBuffer,
    ) -> bool {
        self.permissions(&target, &who, &permission_id).get()
    }

    /// Actions whose data is `FAILING_CALL_DATA` fail. A failure is tolerated only
    /// when its bit is set in `allow_failure_map`; otherwise the whole call reverts.
    ///
    /// Re-entrant actions call back into their target. When their bit is set, the
    /// target's `canExecute` / `canVote` view is consulted first and a refusal counts
    /// as a tolerated failure. Without the bit the call is forwarded as is, so the
    /// target's own error reverts the batch.
    #[endpoint(execute)]
    fn execute(
        &self,
        call_id: u64,
        actions: ActionList<Self::Api>,
        allow_failure_map: u64,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        let dao_address = self.blockchain().get_sc_address();
        require!(
            self.permissions(&dao_address, &caller, &ManagedBuffer::from(EXECUTE_PERMISSION))
                .get(),
            "DaoUnauthorized"
        );

        let mut failure_map = 0u64;
        for (index, action) in actions.iter().enumerate() {
            let failure_allowed = allow_failure_map & (1u64 << index) != 0;
            if !self.run_action(call_id, &action.to, &action.data, failure_allowed) {
                failure_map |= 1u64 << index;
            }
        }

        self.execution_count().update(|count| *count += 1);
        self.last_call_id().set(call_id);
        self.last_failure_map().set(failure_map);
        failure_map
    }

    /// Returns `false` for a failed action that was allowed to fail.
    fn run_action(
        &self,
        call_id: u64,
        to: &ManagedAddress,
        data: &ManagedBuffer,
        failure_allowed: bool,
    ) -> bool {
        if *data == ManagedBuffer::from(FAILING_CALL_DATA) {
            require!(failure_allowed, "ActionFailed");
            return false;
        }

        if *data == ManagedBuffer::from(REENTER_EXECUTE_CALL_DATA) {
            if failure_allowed {
                let can_execute: bool = self
                    .tx()
                    .to(to)
                    .typed(plugin_proxy::PluginProxy)
                    .can_execute(call_id)
                    .returns(ReturnsResult)
                    .sync_call();
                if !can_execute {
                    return false;
                }
            }
            self.tx()
                .to(to)
                .typed(plugin_proxy::PluginProxy)
                .execute(call_id)
                .sync_call();
            return true;
        }

        if *data == ManagedBuffer::from(REENTER_VOTE_CALL_DATA) {
            if failure_allowed {
                let can_vote: bool = self
                    .tx()
                    .to(to)
                    .typed(plugin_proxy::PluginProxy)
                    .can_vote(call_id, self.blockchain().get_sc_address(), VoteOption::Yes)
                    .returns(ReturnsResult)
                    .sync_call();
                if !can_vote {
                    return false;
                }
            }
            self.tx()
                .to(to)
                .typed(plugin_proxy::PluginProxy)
                .vote(call_id, VoteOption::Yes, false)
                .sync_call();
        }

        true
    }

    #[storage_mapper("permissions")]
    fn permissions(
        &self,
        target: &ManagedAddress,
        who: &ManagedAddress,
        permission_id: &ManagedBuffer,
    ) -> SingleValueMapper<bool>;

    #[view(getExecutionCount)]
    #[storage_mapper("executionCount")]
    fn execution_count(&self) -> SingleValueMapper<u64>;

    #[view(getLastCallId)]
    #[storage_mapper("lastCallId")]
    fn last_call_id(&self) -> SingleValueMapper<u64>;

    #[view(getLastFailureMap)]
    #[storage_mapper("lastFailureMap")]
    fn last_failure_map(&self) -> SingleValueMapper<u64>;
}
