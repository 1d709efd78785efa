multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Eggs ──

    #[event("eggsBought")]
    fn eggs_bought_event(
        &self,
        #[indexed] buyer: &ManagedAddress,
        #[indexed] eggs: &BigUint,
        paid: &BigUint,
    );

    #[event("eggsMinted")]
    fn eggs_minted_event(&self, #[indexed] to: &ManagedAddress, amount: &BigUint);

    #[event("eggsBurned")]
    fn eggs_burned_event(&self, #[indexed] from: &ManagedAddress, amount: &BigUint);

    #[event("eggsTransferred")]
    fn eggs_transferred_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    // ── Ants ──

    #[event("antCreated")]
    fn ant_created_event(&self, #[indexed] owner: &ManagedAddress, #[indexed] ant_id: u64);

    #[event("antSold")]
    fn ant_sold_event(
        &self,
        #[indexed] seller: &ManagedAddress,
        #[indexed] ant_id: u64,
        payout: &BigUint,
    );

    #[event("antTransferred")]
    fn ant_transferred_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        #[indexed] ant_id: u64,
    );

    #[event("antDied")]
    fn ant_died_event(&self, #[indexed] ant_id: u64);

    // ── Randomness ──

    #[event("layEggsRequested")]
    fn lay_eggs_requested_event(
        &self,
        #[indexed] request_id: u64,
        #[indexed] ant_id: u64,
        #[indexed] key_hash: &ManagedBuffer,
        #[indexed] subscription_id: u64,
        #[indexed] callback_gas_limit: u64,
        num_words: u32,
    );

    #[event("eggsLaid")]
    fn eggs_laid_event(
        &self,
        #[indexed] request_id: u64,
        #[indexed] ant_id: u64,
        #[indexed] owner: &ManagedAddress,
        eggs: u64,
    );

    #[event("layRequestDiscarded")]
    fn lay_request_discarded_event(&self, #[indexed] request_id: u64, #[indexed] ant_id: u64);

    // ── Governance ──

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] price: &BigUint,
        created_at: u64,
    );

    #[event("proposalApproved")]
    fn proposal_approved_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        weight: &BigUint,
    );

    #[event("approvalReduced")]
    fn approval_reduced_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        removed_weight: &BigUint,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(&self, #[indexed] proposal_id: u64, price: &BigUint);

    #[event("proposalClosed")]
    fn proposal_closed_event(&self, #[indexed] proposal_id: u64);

    #[event("eggPriceChanged")]
    fn egg_price_changed_event(&self, #[indexed] old_price: &BigUint, new_price: &BigUint);
}
