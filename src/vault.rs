multiversx_sc::imports!();

use crate::events;

/// Custody of the EGLD fund.
#[multiversx_sc::module]
pub trait VaultModule: events::EventsModule {
    /// Open to anyone; the treasury is meant to be publicly fundable.
    #[payable("EGLD")]
    #[endpoint(deposit)]
    fn deposit(&self) {
        let sender = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();

        self.deposit_event(&sender, &amount);
    }

    #[view(getBalance)]
    fn get_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    /// The only path that moves EGLD out of the contract.
    fn release_funds(&self, recipient: &ManagedAddress, amount: &BigUint) {
        self.send().direct_egld(recipient, amount);
    }
}
