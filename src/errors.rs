// Rejection messages. Each one reverts the whole transaction.

pub const ERR_NO_EGGS: &str = "NoEggs";
pub const ERR_NOT_ANT_OWNER: &str = "NotAntOwner";
pub const ERR_NO_ANT: &str = "NoAnt";
pub const ERR_NOT_ENOUGH_TIME_PASSED: &str = "NotEnoughTimePassed";
pub const ERR_NOT_VOTING_POWER: &str = "NotVotingPower";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "ProposalNotFound";
pub const ERR_PRICE_ALREADY_EXISTS: &str = "PriceAlreadyExists";
pub const ERR_UNFINISHED_PERIOD: &str = "UnfinishedPeriod";
pub const ERR_UNAUTHORIZED: &str = "Unauthorized";
pub const ERR_INSUFFICIENT_BALANCE: &str = "InsufficientBalance";

pub const ERR_INSUFFICIENT_RESERVES: &str = "InsufficientReserves";
pub const ERR_INVALID_RECIPIENT: &str = "InvalidRecipient";
pub const ERR_INVALID_PRICE: &str = "InvalidPrice";
pub const ERR_ALREADY_VOTED: &str = "AlreadyVoted";
pub const ERR_REQUEST_NOT_FOUND: &str = "RequestNotFound";
pub const ERR_NO_RANDOM_WORDS: &str = "NoRandomWords";
pub const ERR_INVALID_QUORUM: &str = "InvalidQuorum";
