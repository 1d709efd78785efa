multiversx_sc::imports!();

// ============================================================
// Constants
// ============================================================

/// Starting egg price: 0.01 EGLD
pub const INITIAL_EGG_PRICE: u64 = 10_000_000_000_000_000;

/// Refund paid for a living ant: 0.004 EGLD
pub const ANT_SELL_PRICE: u64 = 4_000_000_000_000_000;

/// Cooldown between two lay requests on the same ant, in seconds
pub const MIN_LAY_PERIOD: u64 = 600;

/// Lays an ant survives
pub const ANT_MAX_LAYS: u64 = 5;

/// Upper bound of eggs per lay (a lay always yields at least one)
pub const MAX_EGGS_PER_LAY: u64 = 3;

/// Words asked from the oracle per lay
pub const NUM_RANDOM_WORDS: u32 = 1;

/// Basis points denominator
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Default quorum: every egg must approve
pub const DEFAULT_QUORUM_BPS: u64 = BPS_DENOMINATOR;

// ============================================================
// Deployment configuration
// ============================================================

#[multiversx_sc::module]
pub trait ConfigModule {
    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue6<BigUint, BigUint, u64, u64, u64, u64> {
        (
            self.egg_price().get(),
            BigUint::from(ANT_SELL_PRICE),
            MIN_LAY_PERIOD,
            ANT_MAX_LAYS,
            self.proposal_period().get(),
            self.quorum_bps().get(),
        )
            .into()
    }

    #[view(minLayPeriod)]
    fn min_lay_period(&self) -> u64 {
        MIN_LAY_PERIOD
    }

    #[view(getOracleConfig)]
    fn get_oracle_config(&self) -> MultiValue4<ManagedAddress, ManagedBuffer, u64, u64> {
        (
            self.oracle_address().get(),
            self.key_hash().get(),
            self.subscription_id().get(),
            self.callback_gas_limit().get(),
        )
            .into()
    }

    // ── Oracle ──

    #[storage_mapper("oracleAddress")]
    fn oracle_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("keyHash")]
    fn key_hash(&self) -> SingleValueMapper<ManagedBuffer>;

    #[storage_mapper("subscriptionId")]
    fn subscription_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("callbackGasLimit")]
    fn callback_gas_limit(&self) -> SingleValueMapper<u64>;

    // ── Economy ──

    #[view(eggPrice)]
    #[storage_mapper("eggPrice")]
    fn egg_price(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("eggMinter")]
    fn egg_minter(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Governance ──

    #[view(proposalPeriod)]
    #[storage_mapper("proposalPeriod")]
    fn proposal_period(&self) -> SingleValueMapper<u64>;

    #[view(quorumBps)]
    #[storage_mapper("quorumBps")]
    fn quorum_bps(&self) -> SingleValueMapper<u64>;
}
