multiversx_sc::imports!();

use crate::{
    config::{self, ANT_MAX_LAYS, ANT_SELL_PRICE},
    egg_token,
    errors::*,
    events,
    types::Ant,
    vote_ledger,
};

/// Non-fungible ant ownership. Every owner keeps a compact list of ant ids;
/// each ant remembers its slot in that list so removal is O(1).
#[multiversx_sc::module]
pub trait AntRegistryModule:
    config::ConfigModule
    + egg_token::EggTokenModule
    + events::EventsModule
    + vote_ledger::VoteLedgerModule
{
    // ========================================================
    // ENDPOINT: createAnt
    // Hatches one egg into a fresh ant.
    // ========================================================

    #[endpoint(createAnt)]
    fn create_ant(&self) -> u64 {
        let caller = self.blockchain().get_caller();
        require!(self.egg_balance(&caller).get() >= 1u64, ERR_NO_EGGS);

        self.burn_eggs(&caller, &BigUint::from(1u64));

        let ant_id = self.ant_count().get() + 1;
        self.ant_count().set(ant_id);

        let ant = Ant {
            owner: caller.clone(),
            index: 0,
            is_alive: true,
            lay_count: ANT_MAX_LAYS,
            last_lay_timestamp: 0,
        };
        self.ants(ant_id).set(&ant);
        self.index_ant(&caller, ant_id);

        self.ant_created_event(&caller, ant_id);

        ant_id
    }

    // ========================================================
    // ENDPOINT: sellAnt
    // Living ants only. The ant is removed for good.
    // ========================================================

    #[endpoint(sellAnt)]
    fn sell_ant(&self, ant_id: u64) {
        let caller = self.blockchain().get_caller();
        let ant = self.require_ant_owner(&caller, ant_id);
        require!(ant.is_alive, ERR_NO_ANT);

        let payout = BigUint::from(ANT_SELL_PRICE);
        let reserves = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        require!(reserves >= payout, ERR_INSUFFICIENT_RESERVES);

        self.unindex_ant(&caller, &ant);
        self.ants(ant_id).clear();

        self.send().direct_egld(&caller, &payout);
        self.ant_sold_event(&caller, ant_id, &payout);
    }

    // ========================================================
    // ENDPOINT: transferFrom
    // Only the owner moves an ant, dead or alive.
    // ========================================================

    #[endpoint(transferFrom)]
    fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, ant_id: u64) {
        let caller = self.blockchain().get_caller();
        require!(caller == from, ERR_NOT_ANT_OWNER);
        let ant = self.require_ant_owner(&from, ant_id);
        require!(!to.is_zero(), ERR_INVALID_RECIPIENT);

        if from == to {
            return;
        }

        self.unindex_ant(&from, &ant);
        self.ants(ant_id).update(|a| a.owner = to.clone());
        self.index_ant(&to, ant_id);

        self.ant_transferred_event(&from, &to, ant_id);
    }

    // ========================================================
    // INTERNAL: ownership checks and the per-owner index
    // ========================================================

    /// Unknown ids fail the same way as ants owned by someone else.
    fn require_ant_owner(&self, account: &ManagedAddress, ant_id: u64) -> Ant<Self::Api> {
        require!(!self.ants(ant_id).is_empty(), ERR_NOT_ANT_OWNER);
        let ant = self.ants(ant_id).get();
        require!(&ant.owner == account, ERR_NOT_ANT_OWNER);
        ant
    }

    fn index_ant(&self, owner: &ManagedAddress, ant_id: u64) {
        let mut ids = self.owner_ant_ids(owner);
        ids.push(&ant_id);
        let index = (ids.len() - 1) as u64;
        self.ants(ant_id).update(|a| a.index = index);
    }

    /// Swap-removes the ant's slot: the last id fills the gap.
    fn unindex_ant(&self, owner: &ManagedAddress, ant: &Ant<Self::Api>) {
        let mut ids = self.owner_ant_ids(owner);
        let slot = ant.index as usize + 1;
        ids.swap_remove(slot);

        if slot <= ids.len() {
            let moved_id = ids.get(slot);
            self.ants(moved_id).update(|a| a.index = ant.index);
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getOwnerAntIds)]
    fn get_owner_ant_ids(&self, owner: ManagedAddress) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for ant_id in self.owner_ant_ids(&owner).iter() {
            result.push(ant_id);
        }
        result
    }

    #[view(antBalanceOf)]
    fn ant_balance_of(&self, owner: ManagedAddress) -> u64 {
        self.owner_ant_ids(&owner).len() as u64
    }

    #[view(getAntInfo)]
    fn get_ant_info(&self, ant_id: u64) -> Ant<Self::Api> {
        if self.ants(ant_id).is_empty() {
            return Ant::vacant();
        }
        self.ants(ant_id).get()
    }

    #[view(getAntById)]
    fn get_ant_by_id(&self, owner: ManagedAddress, ant_id: u64) -> Ant<Self::Api> {
        self.require_ant_owner(&owner, ant_id)
    }

    #[view(getAntCount)]
    #[storage_mapper("antCount")]
    fn ant_count(&self) -> SingleValueMapper<u64>;

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("ants")]
    fn ants(&self, ant_id: u64) -> SingleValueMapper<Ant<Self::Api>>;

    #[storage_mapper("ownerAntIds")]
    fn owner_ant_ids(&self, owner: &ManagedAddress) -> VecMapper<u64>;
}
