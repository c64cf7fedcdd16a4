use soroban_sdk::{symbol_short, Env, Symbol};
use crate::types::{Occupancy, RoomConfig};

pub fn k_config() -> Symbol { symbol_short!("config") }
pub fn k_occupancy() -> Symbol { symbol_short!("occ") }

pub fn get_config(e: &Env) -> RoomConfig {
    e.storage().instance().get(&k_config()).expect("no-config")
}

pub fn put_config(e: &Env, config: &RoomConfig) {
    e.storage().instance().set(&k_config(), config);
}

pub fn get_occupancy(e: &Env) -> Occupancy {
    e.storage().instance().get(&k_occupancy()).unwrap_or(Occupancy::vacant())
}

pub fn put_occupancy(e: &Env, occupancy: &Occupancy) {
    e.storage().instance().set(&k_occupancy(), occupancy);
}
