// Shared harness for the CryptoAnts whitebox tests.
//
// The oracle is a plain user account: tests read the request id returned by
// layEggs and answer it with fulfillRandomness from that account, the way the
// off-chain oracle would.

#![allow(dead_code)]

use crypto_ants::{
    ant_registry::AntRegistryModule,
    config::{ConfigModule, MIN_LAY_PERIOD},
    egg_token::EggTokenModule,
    governance::GovernanceModule,
    randomness::RandomnessModule,
    vote_ledger::VoteLedgerModule,
    CryptoAnts,
};
use multiversx_sc::{
    codec::multi_types::OptionalValue,
    types::{Address, MultiValueEncoded},
};
use multiversx_sc_scenario::{
    api::DebugApi, managed_address, managed_biguint, managed_buffer, rust_biguint,
    whitebox_legacy::{BlockchainStateWrapper, ContractObjWrapper},
};

pub const WASM_PATH: &str = "output/crypto-ants.wasm";

pub const START_TIMESTAMP: u64 = 1_700_000_000;
pub const PROPOSAL_PERIOD: u64 = 2 * 24 * 60 * 60;
pub const SUBSCRIPTION_ID: u64 = 7;
pub const CALLBACK_GAS_LIMIT: u64 = 2_500_000;

/// 1 EGLD
pub const USER_BALANCE: u64 = 1_000_000_000_000_000_000;

pub struct AntSnapshot {
    pub owner: Address,
    pub index: u64,
    pub is_alive: bool,
    pub lay_count: u64,
    pub last_lay_timestamp: u64,
}

pub struct CryptoAntsSetup<Builder>
where
    Builder: 'static + Copy + Fn() -> crypto_ants::ContractObj<DebugApi>,
{
    pub b_mock: BlockchainStateWrapper,
    pub owner: Address,
    pub oracle: Address,
    pub user_zero: Address,
    pub user_one: Address,
    pub sc: ContractObjWrapper<crypto_ants::ContractObj<DebugApi>, Builder>,
    pub now: u64,
}

impl<Builder> CryptoAntsSetup<Builder>
where
    Builder: 'static + Copy + Fn() -> crypto_ants::ContractObj<DebugApi>,
{
    pub fn new(builder: Builder) -> Self {
        Self::with_quorum(builder, None)
    }

    pub fn with_quorum(builder: Builder, quorum_bps: Option<u64>) -> Self {
        Self::with_config(builder, quorum_bps, PROPOSAL_PERIOD)
    }

    pub fn with_config(builder: Builder, quorum_bps: Option<u64>, proposal_period: u64) -> Self {
        let mut b_mock = BlockchainStateWrapper::new();
        let owner = b_mock.create_user_account(&rust_biguint!(0));
        let oracle = b_mock.create_user_account(&rust_biguint!(0));
        let user_zero = b_mock.create_user_account(&rust_biguint!(USER_BALANCE));
        let user_one = b_mock.create_user_account(&rust_biguint!(USER_BALANCE));
        let sc = b_mock.create_sc_account(&rust_biguint!(0), Some(&owner), builder, WASM_PATH);

        b_mock.set_block_timestamp(START_TIMESTAMP);

        b_mock
            .execute_tx(&owner, &sc, &rust_biguint!(0), |sc| {
                let opt_quorum = match quorum_bps {
                    Some(bps) => OptionalValue::Some(bps),
                    None => OptionalValue::None,
                };
                sc.init(
                    managed_address!(&oracle),
                    managed_buffer!(b"vrf-key-hash"),
                    SUBSCRIPTION_ID,
                    CALLBACK_GAS_LIMIT,
                    proposal_period,
                    opt_quorum,
                );
            })
            .assert_ok();

        CryptoAntsSetup {
            b_mock,
            owner,
            oracle,
            user_zero,
            user_one,
            sc,
            now: START_TIMESTAMP,
        }
    }

    pub fn advance_time(&mut self, seconds: u64) {
        self.now += seconds;
        self.b_mock.set_block_timestamp(self.now);
    }

    /// Just past the lay cooldown.
    pub fn advance_lay_period(&mut self) {
        self.advance_time(MIN_LAY_PERIOD + 1);
    }

    // ── Transactions that must succeed ──

    pub fn buy_eggs(&mut self, user: &Address, value: u64) {
        self.b_mock
            .execute_tx(user, &self.sc, &rust_biguint!(value), |sc| {
                sc.buy_eggs();
            })
            .assert_ok();
    }

    pub fn create_ant(&mut self, user: &Address) -> u64 {
        let mut ant_id = 0;
        self.b_mock
            .execute_tx(user, &self.sc, &rust_biguint!(0), |sc| {
                ant_id = sc.create_ant();
            })
            .assert_ok();
        ant_id
    }

    pub fn sell_ant(&mut self, user: &Address, ant_id: u64) {
        self.b_mock
            .execute_tx(user, &self.sc, &rust_biguint!(0), |sc| {
                sc.sell_ant(ant_id);
            })
            .assert_ok();
    }

    pub fn transfer_ant(&mut self, from: &Address, to: &Address, ant_id: u64) {
        self.b_mock
            .execute_tx(from, &self.sc, &rust_biguint!(0), |sc| {
                sc.transfer_from(managed_address!(from), managed_address!(to), ant_id);
            })
            .assert_ok();
    }

    pub fn lay_eggs(&mut self, user: &Address, ant_id: u64) -> u64 {
        let mut request_id = 0;
        self.b_mock
            .execute_tx(user, &self.sc, &rust_biguint!(0), |sc| {
                request_id = sc.lay_eggs(ant_id);
            })
            .assert_ok();
        request_id
    }

    pub fn fulfill(&mut self, request_id: u64, random_word: u64) {
        let oracle = self.oracle.clone();
        self.b_mock
            .execute_tx(&oracle, &self.sc, &rust_biguint!(0), |sc| {
                let mut words = MultiValueEncoded::new();
                words.push(random_word);
                sc.fulfill_randomness(request_id, words);
            })
            .assert_ok();
    }

    pub fn transfer_eggs(&mut self, from: &Address, to: &Address, amount: u64) {
        self.b_mock
            .execute_tx(from, &self.sc, &rust_biguint!(0), |sc| {
                sc.transfer_eggs(managed_address!(to), managed_biguint!(amount));
            })
            .assert_ok();
    }

    pub fn propose(&mut self, user: &Address, price: u64) -> u64 {
        let mut proposal_id = 0;
        self.b_mock
            .execute_tx(user, &self.sc, &rust_biguint!(0), |sc| {
                proposal_id = sc.propose_egg_price(managed_biguint!(price));
            })
            .assert_ok();
        proposal_id
    }

    pub fn approve(&mut self, user: &Address, proposal_id: u64) {
        self.b_mock
            .execute_tx(user, &self.sc, &rust_biguint!(0), |sc| {
                sc.approve_proposal(proposal_id);
            })
            .assert_ok();
    }

    pub fn execute(&mut self, user: &Address, proposal_id: u64) {
        self.b_mock
            .execute_tx(user, &self.sc, &rust_biguint!(0), |sc| {
                sc.execute_proposal(proposal_id);
            })
            .assert_ok();
    }

    // ── Queries ──

    pub fn egg_price(&mut self) -> u64 {
        let mut price = 0;
        self.b_mock
            .execute_query(&self.sc, |sc| {
                price = sc.egg_price().get().to_u64().unwrap();
            })
            .assert_ok();
        price
    }

    pub fn egg_balance(&mut self, user: &Address) -> u64 {
        let mut balance = 0;
        self.b_mock
            .execute_query(&self.sc, |sc| {
                balance = sc
                    .egg_balance_of(managed_address!(user))
                    .to_u64()
                    .unwrap();
            })
            .assert_ok();
        balance
    }

    pub fn egg_supply(&mut self) -> u64 {
        let mut supply = 0;
        self.b_mock
            .execute_query(&self.sc, |sc| {
                supply = sc.egg_supply().get().to_u64().unwrap();
            })
            .assert_ok();
        supply
    }

    pub fn approval_weight(&mut self, proposal_id: u64) -> u64 {
        let mut weight = 0;
        self.b_mock
            .execute_query(&self.sc, |sc| {
                weight = sc
                    .get_proposal_info(proposal_id)
                    .approval_weight
                    .to_u64()
                    .unwrap();
            })
            .assert_ok();
        weight
    }

    pub fn voter_weight(&mut self, proposal_id: u64, voter: &Address) -> u64 {
        let mut weight = 0;
        self.b_mock
            .execute_query(&self.sc, |sc| {
                weight = sc
                    .approval_weight_of(proposal_id, &managed_address!(voter))
                    .get()
                    .to_u64()
                    .unwrap();
            })
            .assert_ok();
        weight
    }

    pub fn ant_balance(&mut self, user: &Address) -> u64 {
        let mut balance = 0;
        self.b_mock
            .execute_query(&self.sc, |sc| {
                balance = sc.ant_balance_of(managed_address!(user));
            })
            .assert_ok();
        balance
    }

    pub fn owner_ant_ids(&mut self, user: &Address) -> Vec<u64> {
        let mut ids = Vec::new();
        self.b_mock
            .execute_query(&self.sc, |sc| {
                ids = sc
                    .get_owner_ant_ids(managed_address!(user))
                    .into_iter()
                    .collect();
            })
            .assert_ok();
        ids
    }

    pub fn ant_info(&mut self, ant_id: u64) -> AntSnapshot {
        let mut snapshot = None;
        self.b_mock
            .execute_query(&self.sc, |sc| {
                let ant = sc.get_ant_info(ant_id);
                snapshot = Some(AntSnapshot {
                    owner: ant.owner.to_address(),
                    index: ant.index,
                    is_alive: ant.is_alive,
                    lay_count: ant.lay_count,
                    last_lay_timestamp: ant.last_lay_timestamp,
                });
            })
            .assert_ok();
        snapshot.unwrap()
    }

    pub fn open_proposals(&mut self) -> Vec<(u64, u64)> {
        let mut open = Vec::new();
        self.b_mock
            .execute_query(&self.sc, |sc| {
                for entry in sc.get_proposal_prices() {
                    let (proposal_id, price) = entry.into_tuple();
                    open.push((proposal_id, price.to_u64().unwrap()));
                }
            })
            .assert_ok();
        open
    }

    /// Lays and fulfills until the ant dies. Returns the number of lays.
    pub fn lay_until_dead(&mut self, user: &Address, ant_id: u64) -> u64 {
        let mut lays = 0;
        while self.ant_info(ant_id).is_alive {
            let request_id = self.lay_eggs(user, ant_id);
            self.fulfill(request_id, lays);
            self.advance_lay_period();
            lays += 1;
        }
        lays
    }
}
