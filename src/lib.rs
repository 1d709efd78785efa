#![no_std]

multiversx_sc::imports!();

pub mod ant_registry;
pub mod config;
pub mod egg_token;
pub mod errors;
pub mod events;
pub mod governance;
pub mod randomness;
pub mod types;
pub mod vote_ledger;

use config::{BPS_DENOMINATOR, DEFAULT_QUORUM_BPS, INITIAL_EGG_PRICE};
use errors::ERR_INVALID_QUORUM;

// ============================================================
// Contract
// ============================================================

/// Egg-breeding game: eggs are bought and hatched into ants, ants lay more
/// eggs through an off-chain randomness oracle, and egg holders vote on the
/// egg price.
#[multiversx_sc::contract]
pub trait CryptoAnts:
    config::ConfigModule
    + events::EventsModule
    + vote_ledger::VoteLedgerModule
    + egg_token::EggTokenModule
    + ant_registry::AntRegistryModule
    + randomness::RandomnessModule
    + governance::GovernanceModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        oracle_address: ManagedAddress,
        key_hash: ManagedBuffer,
        subscription_id: u64,
        callback_gas_limit: u64,
        proposal_period: u64,
        opt_quorum_bps: OptionalValue<u64>,
    ) {
        let quorum_bps = opt_quorum_bps
            .into_option()
            .unwrap_or(DEFAULT_QUORUM_BPS);
        require!(
            quorum_bps > 0 && quorum_bps <= BPS_DENOMINATOR,
            ERR_INVALID_QUORUM
        );

        self.oracle_address().set(&oracle_address);
        self.key_hash().set(&key_hash);
        self.subscription_id().set(subscription_id);
        self.callback_gas_limit().set(callback_gas_limit);
        self.proposal_period().set(proposal_period);
        self.quorum_bps().set(quorum_bps);

        self.egg_price().set(BigUint::from(INITIAL_EGG_PRICE));
        self.egg_minter().set(self.blockchain().get_sc_address());
    }

    #[upgrade]
    fn upgrade(&self) {}
}
