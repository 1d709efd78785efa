multiversx_sc::imports!();

use crate::{events, types::Proposal};

/// Proposal records and the approvals cast on them.
///
/// Every approval is remembered per voter, so when eggs leave a voter's
/// balance (burned into an ant, or transferred away) the weight they gave to
/// still-open proposals shrinks with them. A voter never backs an open
/// proposal with more eggs than they currently hold.
#[multiversx_sc::module]
pub trait VoteLedgerModule: events::EventsModule {
    fn record_approval(
        &self,
        proposal: &mut Proposal<Self::Api>,
        voter: &ManagedAddress,
        weight: &BigUint,
    ) {
        let proposal_id = proposal.id;
        proposal.approval_weight += weight;
        self.proposals(proposal_id).set(&*proposal);

        self.has_approved(proposal_id, voter).set(true);
        self.approval_weight_of(proposal_id, voter).set(weight);
        self.voter_proposals(voter).push(&proposal_id);
    }

    /// Caps the voter's weight on every open proposal at `remaining_balance`.
    /// Ids of proposals that are no longer open are dropped from the index.
    fn cap_approvals(&self, voter: &ManagedAddress, remaining_balance: &BigUint) {
        let mut voted = self.voter_proposals(voter);

        // Walk backwards so swap_remove never skips an entry
        let mut idx = voted.len();
        while idx > 0 {
            let proposal_id = voted.get(idx);

            if !self.open_proposals().contains(&proposal_id) {
                voted.swap_remove(idx);
                idx -= 1;
                continue;
            }

            let recorded = self.approval_weight_of(proposal_id, voter).get();
            if &recorded > remaining_balance {
                let cut = &recorded - remaining_balance;
                self.proposals(proposal_id).update(|p| {
                    if p.approval_weight >= cut {
                        p.approval_weight -= &cut;
                    } else {
                        p.approval_weight = BigUint::zero();
                    }
                });
                self.approval_weight_of(proposal_id, voter)
                    .set(remaining_balance);
                self.approval_reduced_event(proposal_id, voter, &cut);
            }

            idx -= 1;
        }
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("openProposals")]
    fn open_proposals(&self) -> UnorderedSetMapper<u64>;

    #[storage_mapper("hasApproved")]
    fn has_approved(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;

    #[view(getApprovalWeight)]
    #[storage_mapper("approvalWeightOf")]
    fn approval_weight_of(
        &self,
        proposal_id: u64,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("voterProposals")]
    fn voter_proposals(&self, voter: &ManagedAddress) -> VecMapper<u64>;
}
