use multiversx_sc::proxy_imports::*;

use crate::types::ActionList;

/// Calls into the DAO that owns this plugin: permission checks and action dispatch.
pub struct DaoProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for DaoProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = DaoProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        DaoProxyMethods { wrapped_tx: tx }
    }
}

pub struct DaoProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> DaoProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn has_permission<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        target: Arg0,
        who: Arg1,
        permission_id: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("hasPermission")
            .argument(&target)
            .argument(&who)
            .argument(&permission_id)
            .original_result()
    }

    /// Returns the failure map: bit `i` set when action `i` failed and was allowed to.
    pub fn execute<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ActionList<Env::Api>>,
        Arg2: ProxyArg<u64>,
    >(
        self,
        call_id: Arg0,
        actions: Arg1,
        allow_failure_map: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("execute")
            .argument(&call_id)
            .argument(&actions)
            .argument(&allow_failure_map)
            .original_result()
    }
}
