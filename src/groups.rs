multiversx_sc::imports!();

use crate::errors::ERR_UNKNOWN_GROUP;
use crate::permissions::{CREATE_GROUP_PERMISSION, UPDATE_ADDRESSES_PERMISSION};
use crate::types::AddressList;

#[multiversx_sc::module]
pub trait GroupsModule:
    crate::checkpoints::CheckpointsModule
    + crate::permissions::PermissionsModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: createGroup
    // Initial members are checkpointed at the current block.
    // ========================================================

    #[endpoint(createGroup)]
    fn create_group(
        &self,
        name: ManagedBuffer,
        members: MultiValueEncoded<ManagedAddress>,
    ) -> u64 {
        self.require_dao_permission(CREATE_GROUP_PERMISSION);

        let group_id = self.group_count().get();
        self.group_count().set(group_id + 1);
        self.group_name(group_id).set(&name);
        self.group_created_event(group_id, &name);

        let members = members.to_vec();
        if !members.is_empty() {
            self.add_members(group_id, &members);
            self.members_added_event(group_id, &members);
        }

        group_id
    }

    #[endpoint(addAddresses)]
    fn add_addresses(&self, group_id: u64, addresses: MultiValueEncoded<ManagedAddress>) {
        self.require_dao_permission(UPDATE_ADDRESSES_PERMISSION);
        self.require_group_exists(group_id);

        let addresses = addresses.to_vec();
        self.add_members(group_id, &addresses);
        self.members_added_event(group_id, &addresses);
    }

    #[endpoint(removeAddresses)]
    fn remove_addresses(&self, group_id: u64, addresses: MultiValueEncoded<ManagedAddress>) {
        self.require_dao_permission(UPDATE_ADDRESSES_PERMISSION);
        self.require_group_exists(group_id);

        let addresses = addresses.to_vec();
        self.remove_members(group_id, &addresses);
        self.members_removed_event(group_id, &addresses);
    }

    // ========================================================
    // INTERNAL: membership writes
    // Already-listed (or already-absent) addresses are skipped,
    // so repeating an update leaves the history unchanged.
    // ========================================================

    fn add_members(&self, group_id: u64, addresses: &AddressList<Self::Api>) {
        let block = self.blockchain().get_block_nonce();
        let mut members = self.group_members(group_id);
        for address in addresses.iter() {
            if members.insert(address.clone_value()) {
                self.record_membership(group_id, &address, true, block);
            }
        }
        self.record_member_count(group_id, members.len() as u64, block);
    }

    fn remove_members(&self, group_id: u64, addresses: &AddressList<Self::Api>) {
        let block = self.blockchain().get_block_nonce();
        let mut members = self.group_members(group_id);
        for address in addresses.iter() {
            if members.swap_remove(&address) {
                self.record_membership(group_id, &address, false, block);
            }
        }
        self.record_member_count(group_id, members.len() as u64, block);
    }

    fn require_group_exists(&self, group_id: u64) {
        require!(group_id < self.group_count().get(), ERR_UNKNOWN_GROUP);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getGroupName)]
    fn get_group_name(&self, group_id: u64) -> ManagedBuffer {
        self.require_group_exists(group_id);
        self.group_name(group_id).get()
    }

    #[view(isMember)]
    fn is_member(&self, group_id: u64, address: ManagedAddress) -> bool {
        self.group_members(group_id).contains(&address)
    }

    #[view(getGroupMembers)]
    fn get_group_members(&self, group_id: u64) -> MultiValueEncoded<ManagedAddress> {
        self.require_group_exists(group_id);
        let mut result = MultiValueEncoded::new();
        for member in self.group_members(group_id).iter() {
            result.push(member);
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getGroupCount)]
    #[storage_mapper("groupCount")]
    fn group_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("groupName")]
    fn group_name(&self, group_id: u64) -> SingleValueMapper<ManagedBuffer>;

    /// Current members; history lives in the checkpoint mappers.
    #[storage_mapper("groupMembers")]
    fn group_members(&self, group_id: u64) -> UnorderedSetMapper<ManagedAddress>;
}
