multiversx_sc::imports!();

use crate::{
    config::{self, BPS_DENOMINATOR},
    egg_token,
    errors::*,
    events,
    types::{Proposal, ProposalStatus},
    vote_ledger,
};

/// Egg price DAO. Voting weight is the egg balance at approval time, reduced
/// afterwards whenever the voter's balance drops below it.
#[multiversx_sc::module]
pub trait GovernanceModule:
    config::ConfigModule
    + egg_token::EggTokenModule
    + events::EventsModule
    + vote_ledger::VoteLedgerModule
{
    // ========================================================
    // ENDPOINT: proposeEggPrice
    // Any egg holder can propose. Open prices are unique.
    // ========================================================

    #[endpoint(proposeEggPrice)]
    fn propose_egg_price(&self, price: BigUint) -> u64 {
        let caller = self.blockchain().get_caller();
        require!(
            self.egg_balance(&caller).get() > 0u64,
            ERR_NOT_VOTING_POWER
        );
        require!(price > 0u64, ERR_INVALID_PRICE);
        require!(
            !self.open_proposal_prices().contains(&price),
            ERR_PRICE_ALREADY_EXISTS
        );

        let proposal_id = self.proposal_count().get() + 1;
        let now = self.blockchain().get_block_timestamp();

        let proposal = Proposal {
            id: proposal_id,
            price: price.clone(),
            proposer: caller.clone(),
            approval_weight: BigUint::zero(),
            created_at: now,
            status: ProposalStatus::Pending,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id);
        self.open_proposals().insert(proposal_id);
        self.open_proposal_prices().insert(price.clone());

        self.proposal_created_event(proposal_id, &caller, &price, now);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: approveProposal
    // One approval per account per proposal.
    // ========================================================

    #[endpoint(approveProposal)]
    fn approve_proposal(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        let weight = self.egg_balance(&caller).get();
        require!(weight > 0u64, ERR_NOT_VOTING_POWER);

        let mut proposal = self.require_open_proposal(proposal_id);
        require!(
            !self.has_approved(proposal_id, &caller).get(),
            ERR_ALREADY_VOTED
        );

        self.record_approval(&mut proposal, &caller, &weight);
        self.proposal_approved_event(proposal_id, &caller, &weight);
    }

    // ========================================================
    // ENDPOINT: executeProposal
    // After the proposal period. Applies the price on quorum,
    // closes the proposal otherwise. Either way it leaves the open set.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, proposal_id: u64) {
        let mut proposal = self.require_open_proposal(proposal_id);

        let now = self.blockchain().get_block_timestamp();
        require!(
            now >= proposal
                .created_at
                .saturating_add(self.proposal_period().get()),
            ERR_UNFINISHED_PERIOD
        );

        self.open_proposals().swap_remove(&proposal_id);
        self.open_proposal_prices().swap_remove(&proposal.price);

        if !self.quorum_reached(&proposal.approval_weight) {
            proposal.status = ProposalStatus::Closed;
            self.proposals(proposal_id).set(&proposal);
            self.proposal_closed_event(proposal_id);
            return;
        }

        // The previous current price is superseded
        let previous = self.current_proposal().get();
        if previous != 0 {
            self.proposals(previous)
                .update(|p| p.status = ProposalStatus::Closed);
            self.proposal_closed_event(previous);
        }

        let old_price = self.egg_price().get();
        self.egg_price().set(&proposal.price);
        self.current_proposal().set(proposal_id);

        proposal.status = ProposalStatus::Current;
        self.proposals(proposal_id).set(&proposal);

        self.proposal_executed_event(proposal_id, &proposal.price);
        self.egg_price_changed_event(&old_price, &proposal.price);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Unknown and already executed ids fail alike.
    fn require_open_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            self.open_proposals().contains(&proposal_id),
            ERR_PROPOSAL_NOT_FOUND
        );
        self.proposals(proposal_id).get()
    }

    /// weight / supply >= quorum_bps / BPS_DENOMINATOR, with no zero-weight pass
    fn quorum_reached(&self, approval_weight: &BigUint) -> bool {
        if *approval_weight == 0u64 {
            return false;
        }
        let supply = self.egg_supply().get();
        let required = &supply * self.quorum_bps().get();
        approval_weight * BPS_DENOMINATOR >= required
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Open proposals as (id, price), oldest first.
    #[view(getProposalPrices)]
    fn get_proposal_prices(&self) -> MultiValueEncoded<MultiValue2<u64, BigUint>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        for proposal_id in 1..=total {
            if !self.open_proposals().contains(&proposal_id) {
                continue;
            }
            let proposal = self.proposals(proposal_id).get();
            result.push((proposal_id, proposal.price).into());
        }
        result
    }

    #[view(getProposalInfo)]
    fn get_proposal_info(&self, proposal_id: u64) -> Proposal<Self::Api> {
        if self.proposals(proposal_id).is_empty() {
            return Proposal::pristine(proposal_id);
        }
        self.proposals(proposal_id).get()
    }

    #[view(hasApproved)]
    fn has_account_approved(&self, proposal_id: u64, account: ManagedAddress) -> bool {
        self.has_approved(proposal_id, &account).get()
    }

    #[view(getCurrentProposal)]
    #[storage_mapper("currentProposal")]
    fn current_proposal(&self) -> SingleValueMapper<u64>;

    #[view(getProposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("openProposalPrices")]
    fn open_proposal_prices(&self) -> UnorderedSetMapper<BigUint>;
}
