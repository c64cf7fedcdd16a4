#![no_std]
use soroban_sdk::{contract, contractimpl, log, panic_with_error, token, Address, Env, String};

mod events;
mod storage;
mod types;

pub use types::{Occupancy, RoomConfig, RoomError};

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

#[contract]
pub struct RentRoom;

#[contractimpl]
impl RentRoom {
    /// Fix the administrator, payment token, daily rate and room code.
    /// The room starts vacant.
    pub fn __constructor(e: Env, admin: Address, token: Address, daily_rate: i128, room_code: String) {
        if daily_rate <= 0 {
            panic_with_error!(&e, RoomError::InvalidRate);
        }
        storage::put_config(&e, &RoomConfig { admin, token, daily_rate, room_code });
        storage::put_occupancy(&e, &Occupancy::vacant());
    }

    /// Rent the room for `days`, tendering `tendered` of the payment token.
    ///
    /// Anything above `days * daily_rate` goes straight back to the payer.
    /// The previous occupant loses access to the room code as soon as this
    /// succeeds, whatever time they had left.
    pub fn pay(e: Env, payer: Address, days: u32, tendered: i128) -> Result<(), RoomError> {
        payer.require_auth();

        let config = storage::get_config(&e);
        let now = e.ledger().timestamp();

        let price = Self::quote(&config, days)?;
        let expires_at = SECONDS_PER_DAY
            .checked_mul(days as u64)
            .and_then(|secs| now.checked_add(secs))
            .ok_or(RoomError::Overflow)?;
        if tendered < price {
            return Err(RoomError::InvalidPrice);
        }
        if storage::get_occupancy(&e).is_held_at(now) {
            return Err(RoomError::RoomOccupied);
        }

        // Transfers go out before occupancy is written; a failed transfer
        // aborts the call and the host discards everything above.
        let client = token::Client::new(&e, &config.token);
        let me = e.current_contract_address();
        Self::transfer(&client, &payer, &me, tendered)?;
        let excess = tendered - price;
        if excess > 0 {
            Self::transfer(&client, &me, &payer, excess)?;
            events::refunded(&e, &payer, excess);
        }

        storage::put_occupancy(&e, &Occupancy { occupant: Some(payer.clone()), expires_at });
        log!(&e, "room rented", payer, days, expires_at);
        events::paid(&e, &payer, days, price, expires_at);
        Ok(())
    }

    /// Drain the whole token balance held by the contract to the administrator.
    /// This includes rent for a period that has not ended yet.
    pub fn withdraw(e: Env, caller: Address) -> Result<(), RoomError> {
        caller.require_auth();

        let config = storage::get_config(&e);
        if caller != config.admin {
            return Err(RoomError::NotAdministrator);
        }

        let client = token::Client::new(&e, &config.token);
        let me = e.current_contract_address();
        let amount = client.balance(&me);
        if amount > 0 {
            Self::transfer(&client, &me, &caller, amount)?;
        }

        log!(&e, "balance withdrawn", amount);
        events::withdrawn(&e, &caller, amount);
        Ok(())
    }

    /// Only the current occupant may read the code, even past expiry.
    pub fn room_code(e: Env, caller: Address) -> Result<String, RoomError> {
        caller.require_auth();

        if !storage::get_occupancy(&e).is_occupant(&caller) {
            return Err(RoomError::NotRoomOwner);
        }
        Ok(storage::get_config(&e).room_code)
    }

    pub fn room_owner(e: Env) -> Option<Address> {
        storage::get_occupancy(&e).occupant
    }

    pub fn room_expires(e: Env) -> u64 {
        storage::get_occupancy(&e).expires_at
    }

    /// Token balance currently held by the contract. Administrator only.
    pub fn balance(e: Env, caller: Address) -> Result<i128, RoomError> {
        caller.require_auth();

        let config = storage::get_config(&e);
        if caller != config.admin {
            return Err(RoomError::NotAdministrator);
        }
        Ok(token::Client::new(&e, &config.token).balance(&e.current_contract_address()))
    }

    /// Price of renting for `days`.
    pub fn price(e: Env, days: u32) -> Result<i128, RoomError> {
        Self::quote(&storage::get_config(&e), days)
    }

    pub fn admin(e: Env) -> Address {
        storage::get_config(&e).admin
    }

    pub fn payment_token(e: Env) -> Address {
        storage::get_config(&e).token
    }

    pub fn daily_rate(e: Env) -> i128 {
        storage::get_config(&e).daily_rate
    }
}

impl RentRoom {
    fn quote(config: &RoomConfig, days: u32) -> Result<i128, RoomError> {
        if days == 0 {
            return Err(RoomError::InvalidDays);
        }
        config.daily_rate.checked_mul(days as i128).ok_or(RoomError::Overflow)
    }

    fn transfer(client: &token::Client<'_>, from: &Address, to: &Address, amount: i128) -> Result<(), RoomError> {
        match client.try_transfer(from, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(RoomError::TransferFailed),
        }
    }
}
