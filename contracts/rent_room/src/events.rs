use soroban_sdk::{symbol_short, Address, Env};

pub fn paid(e: &Env, payer: &Address, days: u32, price: i128, expires_at: u64) {
    e.events().publish((symbol_short!("paid"), payer.clone()), (days, price, expires_at));
}

pub fn refunded(e: &Env, payer: &Address, excess: i128) {
    e.events().publish((symbol_short!("refund"), payer.clone()), excess);
}

pub fn withdrawn(e: &Env, admin: &Address, amount: i128) {
    e.events().publish((symbol_short!("withdraw"), admin.clone()), amount);
}
