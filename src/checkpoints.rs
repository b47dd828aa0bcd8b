multiversx_sc::imports!();

use crate::types::{MemberCountCheckpoint, MembershipCheckpoint};

/// Number of leading entries whose block is `<= block`, over a history sorted by
/// block. `block_at(i)` returns the block of the `i`-th entry, 1-based like `VecMapper`.
/// Zero means the history starts after `block`.
pub fn upper_lookup<F>(len: usize, block_at: F, block: u64) -> usize
where
    F: Fn(usize) -> u64,
{
    let mut low = 0;
    let mut high = len;
    while low < high {
        let mid = low + (high - low) / 2;
        if block_at(mid + 1) <= block {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}

#[multiversx_sc::module]
pub trait CheckpointsModule {
    /// Records `is_member` for `address` at `block`. A second write in the same block
    /// overwrites the first instead of adding an entry.
    fn record_membership(
        &self,
        group_id: u64,
        address: &ManagedAddress,
        is_member: bool,
        block: u64,
    ) {
        let mut history = self.member_checkpoints(group_id, address);
        let checkpoint = MembershipCheckpoint { block, is_member };
        let len = history.len();
        if len > 0 && history.get(len).block == block {
            history.set(len, &checkpoint);
        } else {
            history.push(&checkpoint);
        }
    }

    fn record_member_count(&self, group_id: u64, count: u64, block: u64) {
        let mut history = self.member_count_checkpoints(group_id);
        let checkpoint = MemberCountCheckpoint { block, count };
        let len = history.len();
        if len > 0 && history.get(len).block == block {
            history.set(len, &checkpoint);
        } else {
            history.push(&checkpoint);
        }
    }

    #[view(isMemberAtBlock)]
    fn is_member_at_block(&self, group_id: u64, address: ManagedAddress, block: u64) -> bool {
        let history = self.member_checkpoints(group_id, &address);
        let found = upper_lookup(history.len(), |index| history.get(index).block, block);
        found > 0 && history.get(found).is_member
    }

    /// Group size at `block`, the total voting power of proposals snapshotted there.
    #[view(totalVotingPower)]
    fn total_voting_power(&self, group_id: u64, block: u64) -> u64 {
        let history = self.member_count_checkpoints(group_id);
        let found = upper_lookup(history.len(), |index| history.get(index).block, block);
        if found == 0 {
            0
        } else {
            history.get(found).count
        }
    }

    #[storage_mapper("memberCheckpoints")]
    fn member_checkpoints(
        &self,
        group_id: u64,
        address: &ManagedAddress,
    ) -> VecMapper<MembershipCheckpoint>;

    #[storage_mapper("memberCountCheckpoints")]
    fn member_count_checkpoints(&self, group_id: u64) -> VecMapper<MemberCountCheckpoint>;
}
