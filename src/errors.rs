// Eligibility failures carry the caller's hex address and are formatted inline:
// `ProposalCreationForbidden(<address>)`, `VoteCastForbidden(<address>)`.

pub const ERR_DATE_OUT_OF_BOUNDS: &str = "DateOutOfBounds";
pub const ERR_PROPOSAL_NOT_OPEN: &str = "ProposalNotOpen";
pub const ERR_PROPOSAL_EXECUTION_FORBIDDEN: &str = "ProposalExecutionForbidden";
pub const ERR_UNKNOWN_GROUP: &str = "UnknownGroup";
pub const ERR_UNKNOWN_PROPOSAL: &str = "UnknownProposal";
pub const ERR_DAO_UNAUTHORIZED: &str = "DaoUnauthorized";
pub const ERR_RATIO_OUT_OF_BOUNDS: &str = "RatioOutOfBounds";
pub const ERR_MIN_DURATION_OUT_OF_BOUNDS: &str = "MinDurationOutOfBounds";
pub const ERR_TOO_MANY_ACTIONS: &str = "TooManyActions";
