use std::collections::BTreeMap;

/// Why a room could not be taken from the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomShortage {
    UnknownRoomType,
    SoldOut,
}

/// Available room count per room-type label ("single", "double", ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomInventory {
    rooms: BTreeMap<String, u32>,
}

impl RoomInventory {
    pub fn new(rooms: BTreeMap<String, u32>) -> Self {
        Self { rooms }
    }

    pub fn available(&self, room_type: &str) -> Option<u32> {
        self.rooms.get(room_type).copied()
    }

    /// Checks that one room of `room_type` could be taken, without taking it.
    pub fn check(&self, room_type: &str) -> Result<(), RoomShortage> {
        match self.rooms.get(room_type) {
            None => Err(RoomShortage::UnknownRoomType),
            Some(0) => Err(RoomShortage::SoldOut),
            Some(_) => Ok(()),
        }
    }

    /// Takes one room of `room_type`. Counts never go below zero.
    pub fn take(&mut self, room_type: &str) -> Result<u32, RoomShortage> {
        let count = self.rooms.get_mut(room_type).ok_or(RoomShortage::UnknownRoomType)?;
        if *count == 0 {
            return Err(RoomShortage::SoldOut);
        }
        *count -= 1;

        Ok(*count)
    }

    /// Gives one room of `room_type` back.
    pub fn release(&mut self, room_type: &str) -> u32 {
        let count = self.rooms.entry(room_type.to_string()).or_insert(0);
        *count = count.saturating_add(1);

        *count
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.rooms.iter().map(|(room_type, count)| (room_type.as_str(), *count))
    }

    pub fn as_map(&self) -> &BTreeMap<String, u32> {
        &self.rooms
    }
}
