use soroban_sdk::{contracterror, contracttype, Address, String};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RoomError {
    RoomOccupied = 1,
    InvalidPrice = 2,
    NotAdministrator = 3,
    NotRoomOwner = 4,
    TransferFailed = 5,
    InvalidDays = 6,
    InvalidRate = 7,
    Overflow = 8,
}

/// Fixed at deployment, never rewritten.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoomConfig {
    pub admin: Address,
    pub token: Address,   // token rent is paid in
    pub daily_rate: i128, // base units per day
    pub room_code: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Occupancy {
    pub occupant: Option<Address>,
    pub expires_at: u64, // unix seconds, 0 = never rented
}

impl Occupancy {
    pub fn vacant() -> Self {
        Occupancy { occupant: None, expires_at: 0 }
    }

    /// Whether the room is still exclusively held at `now`.
    /// Expiry is only consulted here; the occupant field itself never lapses.
    pub fn is_held_at(&self, now: u64) -> bool {
        self.occupant.is_some() && now < self.expires_at
    }

    pub fn is_occupant(&self, who: &Address) -> bool {
        self.occupant.as_ref() == Some(who)
    }
}
