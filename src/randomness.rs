multiversx_sc::imports!();

use crate::{
    ant_registry,
    config::{self, MAX_EGGS_PER_LAY, MIN_LAY_PERIOD, NUM_RANDOM_WORDS},
    egg_token,
    errors::*,
    events,
    types::LayRequest,
    vote_ledger,
};

/// Bridge to the off-chain randomness oracle.
///
/// `layEggs` publishes a `layEggsRequested` event and parks a `LayRequest`
/// under a fresh request id. The oracle answers later through
/// `fulfillRandomness`, echoing that id. The pending-request mapper is the only
/// state tying the two calls together.
#[multiversx_sc::module]
pub trait RandomnessModule:
    config::ConfigModule
    + egg_token::EggTokenModule
    + ant_registry::AntRegistryModule
    + events::EventsModule
    + vote_ledger::VoteLedgerModule
{
    // ========================================================
    // ENDPOINT: layEggs
    // The cooldown starts at request time, so a second request on the
    // same ant is rejected until it elapses, answered or not.
    // ========================================================

    #[endpoint(layEggs)]
    fn lay_eggs(&self, ant_id: u64) -> u64 {
        let caller = self.blockchain().get_caller();
        let ant = self.require_ant_owner(&caller, ant_id);
        require!(ant.is_alive, ERR_NO_ANT);

        let now = self.blockchain().get_block_timestamp();
        require!(
            now.saturating_sub(ant.last_lay_timestamp) >= MIN_LAY_PERIOD,
            ERR_NOT_ENOUGH_TIME_PASSED
        );

        self.ants(ant_id).update(|a| a.last_lay_timestamp = now);

        let request_id = self.request_count().get() + 1;
        self.request_count().set(request_id);
        self.pending_requests(request_id).set(LayRequest {
            ant_id,
            requester: caller,
            requested_at: now,
        });

        self.lay_eggs_requested_event(
            request_id,
            ant_id,
            &self.key_hash().get(),
            self.subscription_id().get(),
            self.callback_gas_limit().get(),
            NUM_RANDOM_WORDS,
        );

        request_id
    }

    // ========================================================
    // ENDPOINT: fulfillRandomness
    // Oracle callback. Resolves exactly one pending request.
    // ========================================================

    #[endpoint(fulfillRandomness)]
    fn fulfill_randomness(&self, request_id: u64, random_words: MultiValueEncoded<u64>) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.oracle_address().get(), ERR_UNAUTHORIZED);
        require!(
            !self.pending_requests(request_id).is_empty(),
            ERR_REQUEST_NOT_FOUND
        );

        let random_word = match random_words.into_iter().next() {
            Some(word) => word,
            None => sc_panic!(ERR_NO_RANDOM_WORDS),
        };

        let request = self.pending_requests(request_id).take();
        let ant_id = request.ant_id;

        // Sold or already dead since the request went out
        if self.ants(ant_id).is_empty() || !self.ants(ant_id).get().is_alive {
            self.lay_request_discarded_event(request_id, ant_id);
            return;
        }

        let mut ant = self.ants(ant_id).get();
        let eggs = eggs_for_word(random_word);
        self.mint_eggs(&ant.owner, &BigUint::from(eggs));
        self.eggs_laid_event(request_id, ant_id, &ant.owner, eggs);

        ant.lay_count -= 1;
        if ant.lay_count == 0 {
            ant.is_alive = false;
            self.ant_died_event(ant_id);
        }
        self.ants(ant_id).set(&ant);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getPendingRequest)]
    fn get_pending_request(&self, request_id: u64) -> OptionalValue<LayRequest<Self::Api>> {
        if self.pending_requests(request_id).is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(self.pending_requests(request_id).get())
    }

    #[view(getRequestCount)]
    #[storage_mapper("requestCount")]
    fn request_count(&self) -> SingleValueMapper<u64>;

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("pendingRequests")]
    fn pending_requests(&self, request_id: u64) -> SingleValueMapper<LayRequest<Self::Api>>;
}

/// Eggs laid for one oracle word: always at least one.
pub fn eggs_for_word(random_word: u64) -> u64 {
    1 + random_word % MAX_EGGS_PER_LAY
}
