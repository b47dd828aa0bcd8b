multiversx_sc::imports!();

use crate::dao_proxy;
use crate::errors::ERR_DAO_UNAUTHORIZED;

pub const CREATE_GROUP_PERMISSION: &[u8] = b"CREATE_GROUP_PERMISSION";
pub const UPDATE_ADDRESSES_PERMISSION: &[u8] = b"UPDATE_ADDRESSES_PERMISSION";
pub const UPDATE_VOTING_SETTINGS_PERMISSION: &[u8] = b"UPDATE_VOTING_SETTINGS_PERMISSION";

#[multiversx_sc::module]
pub trait PermissionsModule {
    /// Asks the DAO whether the caller holds `permission_id` on this contract.
    /// Reverts the whole call otherwise.
    fn require_dao_permission(&self, permission_id: &[u8]) {
        let caller = self.blockchain().get_caller();
        let sc_address = self.blockchain().get_sc_address();
        let dao_address = self.dao_address().get();

        let granted: bool = self
            .tx()
            .to(&dao_address)
            .typed(dao_proxy::DaoProxy)
            .has_permission(sc_address, caller, ManagedBuffer::from(permission_id))
            .returns(ReturnsResult)
            .sync_call();
        require!(granted, ERR_DAO_UNAUTHORIZED);
    }

    #[view(getDaoAddress)]
    #[storage_mapper("daoAddress")]
    fn dao_address(&self) -> SingleValueMapper<ManagedAddress>;
}
