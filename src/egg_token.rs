multiversx_sc::imports!();

use crate::{config, errors::*, events, vote_ledger};

/// Fungible egg ledger. Only the game itself issues or destroys eggs.
/// Eggs leaving a balance take their approval weight with them.
#[multiversx_sc::module]
pub trait EggTokenModule:
    config::ConfigModule + events::EventsModule + vote_ledger::VoteLedgerModule
{
    // ========================================================
    // ENDPOINT: buyEggs
    // Converts the EGLD payment at the current egg price.
    // The remainder of the division stays in the reserve.
    // ========================================================

    #[endpoint(buyEggs)]
    #[payable("EGLD")]
    fn buy_eggs(&self) -> BigUint {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();
        require!(payment > 0u64, ERR_NO_EGGS);

        let eggs = &payment / &self.egg_price().get();
        require!(eggs > 0u64, ERR_NO_EGGS);

        self.mint_eggs(&caller, &eggs);
        self.eggs_bought_event(&caller, &eggs, &payment);

        eggs
    }

    #[endpoint(transferEggs)]
    fn transfer_eggs(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(amount > 0u64, ERR_NO_EGGS);
        require!(!to.is_zero(), ERR_INVALID_RECIPIENT);

        if to == caller {
            require!(
                self.egg_balance(&caller).get() >= amount,
                ERR_INSUFFICIENT_BALANCE
            );
            self.eggs_transferred_event(&caller, &to, &amount);
            return;
        }

        self.debit_eggs(&caller, &amount);
        self.egg_balance(&to).update(|b| *b += &amount);

        self.eggs_transferred_event(&caller, &to, &amount);
    }

    // ========================================================
    // ENDPOINTS: mintEggs / burnEggs
    // Reserved for the egg minter, which is the game contract.
    // ========================================================

    #[endpoint(mintEggs)]
    fn mint_eggs_endpoint(&self, to: ManagedAddress, amount: BigUint) {
        self.require_egg_minter();
        self.mint_eggs(&to, &amount);
    }

    #[endpoint(burnEggs)]
    fn burn_eggs_endpoint(&self, from: ManagedAddress, amount: BigUint) {
        self.require_egg_minter();
        self.burn_eggs(&from, &amount);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_egg_minter(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.egg_minter().get(), ERR_UNAUTHORIZED);
    }

    fn mint_eggs(&self, to: &ManagedAddress, amount: &BigUint) {
        self.egg_balance(to).update(|b| *b += amount);
        self.egg_supply().update(|s| *s += amount);
        self.eggs_minted_event(to, amount);
    }

    fn burn_eggs(&self, from: &ManagedAddress, amount: &BigUint) {
        self.debit_eggs(from, amount);
        self.egg_supply().update(|s| *s -= amount);
        self.eggs_burned_event(from, amount);
    }

    fn debit_eggs(&self, from: &ManagedAddress, amount: &BigUint) {
        let balance = self.egg_balance(from).get();
        require!(&balance >= amount, ERR_INSUFFICIENT_BALANCE);

        let remaining = balance - amount;
        self.cap_approvals(from, &remaining);
        self.egg_balance(from).set(remaining);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(eggBalanceOf)]
    fn egg_balance_of(&self, account: ManagedAddress) -> BigUint {
        self.egg_balance(&account).get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("eggBalance")]
    fn egg_balance(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(eggSupply)]
    #[storage_mapper("eggSupply")]
    fn egg_supply(&self) -> SingleValueMapper<BigUint>;
}
