multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::policy;

// ============================================================
// Voting mode: one closed set of rules per proposal
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum VotingMode {
    /// One vote per member, execution only after the end date.
    Standard,
    /// One vote per member, execution allowed as soon as the outcome is final.
    EarlyExecution,
    /// Members may change their vote until the end date.
    VoteReplacement,
}

impl VotingMode {
    pub fn allows_vote_replacement(&self) -> bool {
        match self {
            VotingMode::Standard | VotingMode::EarlyExecution => false,
            VotingMode::VoteReplacement => true,
        }
    }

    pub fn allows_early_execution(&self) -> bool {
        match self {
            VotingMode::EarlyExecution => true,
            VotingMode::Standard | VotingMode::VoteReplacement => false,
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum VoteOption {
    None,
    Abstain,
    Yes,
    No,
}

// ============================================================
// Settings: fixed at init, changed only through updateVotingSettings
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct VotingSettings {
    pub voting_mode: VotingMode,
    /// Ratio of yes to yes+no votes that must be exceeded, in `RATIO_BASE` units.
    pub support_threshold: u32,
    /// Ratio of cast votes to total voting power that must be reached.
    pub min_participation: u32,
    /// Voting window length in seconds.
    pub min_duration: u64,
    /// Zero lets anyone propose; otherwise the proposer must be a group member.
    pub min_proposer_voting_power: u64,
}

// ============================================================
// Checkpoints
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub struct MembershipCheckpoint {
    pub block: u64,
    pub is_member: bool,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub struct MemberCountCheckpoint {
    pub block: u64,
    pub count: u64,
}

// ============================================================
// Proposal: the core governance record
// ============================================================

/// Opaque call forwarded to the DAO when the proposal executes.
#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Debug,
)]
pub struct Action<M: ManagedTypeApi> {
    pub to: ManagedAddress<M>,
    pub value: BigUint<M>,
    pub data: ManagedBuffer<M>,
}

pub type ActionList<M> = ManagedVec<M, Action<M>>;

pub type AddressList<M> = ManagedVec<M, ManagedAddress<M>>;

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Tally {
    pub yes: u64,
    pub no: u64,
    pub abstain: u64,
}

impl Tally {
    pub fn total(&self) -> u64 {
        self.yes + self.no + self.abstain
    }

    /// Moves one vote from `previous` (if any) to `next`, so a voter is only ever
    /// counted in a single bucket.
    pub fn replace(&mut self, previous: VoteOption, next: VoteOption) {
        match previous {
            VoteOption::Yes => self.yes -= 1,
            VoteOption::No => self.no -= 1,
            VoteOption::Abstain => self.abstain -= 1,
            VoteOption::None => {},
        }
        match next {
            VoteOption::Yes => self.yes += 1,
            VoteOption::No => self.no += 1,
            VoteOption::Abstain => self.abstain += 1,
            VoteOption::None => {},
        }
    }
}

/// Parameters pinned when the proposal is created and never re-evaluated.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub struct ProposalParameters {
    pub voting_mode: VotingMode,
    pub support_threshold: u32,
    pub min_participation: u32,
    pub start_date: u64,
    pub end_date: u64,
    pub snapshot_block: u64,
    /// Group size at `snapshot_block`.
    pub total_voting_power: u64,
    /// Votes needed to meet `min_participation`, rounded up.
    pub min_voting_power: u64,
}

impl ProposalParameters {
    pub fn support_threshold_reached(&self, tally: &Tally) -> bool {
        policy::support_threshold_reached(tally, self.support_threshold)
    }

    pub fn support_threshold_reached_early(&self, tally: &Tally) -> bool {
        policy::support_threshold_reached_early(
            tally,
            self.total_voting_power,
            self.support_threshold,
        )
    }

    pub fn min_participation_reached(&self, tally: &Tally) -> bool {
        policy::min_participation_reached(tally, self.min_voting_power)
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub group_id: u64,
    pub creator: ManagedAddress<M>,
    pub metadata: ManagedBuffer<M>,
    pub open: bool,
    pub executed: bool,
    pub parameters: ProposalParameters,
    pub tally: Tally,
    pub actions: ActionList<M>,
    /// Bit `i` set means action `i` may fail without reverting the batch.
    pub allow_failure_map: u64,
}

impl<M: ManagedTypeApi> Proposal<M> {
    /// Votes are accepted only inside `[start_date, end_date)` and before execution.
    pub fn is_open_at(&self, now: u64) -> bool {
        self.open
            && !self.executed
            && self.parameters.start_date <= now
            && now < self.parameters.end_date
    }

    pub fn status_at(&self, now: u64) -> ProposalStatus {
        if self.executed {
            ProposalStatus::Executed
        } else if now < self.parameters.start_date {
            ProposalStatus::Pending
        } else if now < self.parameters.end_date {
            ProposalStatus::Open
        } else {
            ProposalStatus::Expired
        }
    }

    /// Final or early executability, depending on the pinned voting mode.
    pub fn is_executable_at(&self, now: u64) -> bool {
        if self.executed {
            return false;
        }
        let params = &self.parameters;
        let support_reached = if now < params.end_date {
            params.voting_mode.allows_early_execution()
                && params.support_threshold_reached_early(&self.tally)
        } else {
            params.support_threshold_reached(&self.tally)
        };
        support_reached && params.min_participation_reached(&self.tally)
    }
}

// ============================================================
// Proposal Status: read-only interpretation of a proposal
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalStatus {
    /// Created, start date not reached yet.
    Pending,
    /// Inside the voting window.
    Open,
    /// Actions dispatched. Terminal state.
    Executed,
    /// End date passed without execution.
    Expired,
}
