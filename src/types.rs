multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Ant — the non-fungible game asset
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Ant<M: ManagedTypeApi> {
    pub owner: ManagedAddress<M>,
    /// 0-based slot in the owner's id list
    pub index: u64,
    pub is_alive: bool,
    /// Lays left before the ant dies
    pub lay_count: u64,
    pub last_lay_timestamp: u64,
}

impl<M: ManagedTypeApi> Ant<M> {
    /// What lookups of sold or never-minted ids report.
    pub fn vacant() -> Self {
        Ant {
            owner: ManagedAddress::zero(),
            index: 0,
            is_alive: false,
            lay_count: 0,
            last_lay_timestamp: 0,
        }
    }
}

// ============================================================
// Lay Request — pending oracle round-trip for one ant
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct LayRequest<M: ManagedTypeApi> {
    pub ant_id: u64,
    pub requester: ManagedAddress<M>,
    pub requested_at: u64,
}

// ============================================================
// Proposal Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Never created. Reported for unknown ids.
    Pristine,
    /// Open: accepts approvals until executed.
    Pending,
    /// Executed with quorum. Its price is the live egg price.
    Current,
    /// Executed without quorum, or superseded by a newer current price.
    Closed,
}

// ============================================================
// Proposal — an egg price change put to the egg holders
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub price: BigUint<M>,
    pub proposer: ManagedAddress<M>,
    pub approval_weight: BigUint<M>,
    pub created_at: u64,
    pub status: ProposalStatus,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn is_open(&self) -> bool {
        self.status == ProposalStatus::Pending
    }

    pub fn pristine(id: u64) -> Self {
        Proposal {
            id,
            price: BigUint::zero(),
            proposer: ManagedAddress::zero(),
            approval_weight: BigUint::zero(),
            created_at: 0,
            status: ProposalStatus::Pristine,
        }
    }
}
