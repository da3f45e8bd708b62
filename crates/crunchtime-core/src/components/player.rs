//! Player components.

use crunchtime_logic::constants::player::{MAX_SNACKS, STARTING_SNACKS};
use serde::{Deserialize, Serialize};

/// Marker component for the player entity
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Snacks and the egg. Snack count stays within [0, MAX_SNACKS]; the egg
/// is a single slot that cannot be double-consumed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Inventory {
    snacks: u8,
    egg: bool,
}

impl Inventory {
    pub fn starting() -> Self {
        Self {
            snacks: STARTING_SNACKS,
            egg: false,
        }
    }

    pub fn snacks(&self) -> u8 {
        self.snacks
    }

    pub fn has_egg(&self) -> bool {
        self.egg
    }

    pub fn snacks_depleted(&self) -> bool {
        self.snacks == 0
    }

    /// Add one snack, clamped at MAX_SNACKS. Returns the new count.
    pub fn add_snack(&mut self) -> u8 {
        self.snacks = (self.snacks + 1).min(MAX_SNACKS);
        self.snacks
    }

    /// Remove one snack if any remain. Returns whether one was taken.
    pub fn take_snack(&mut self) -> bool {
        if self.snacks > 0 {
            self.snacks -= 1;
            true
        } else {
            false
        }
    }

    /// Pick up the egg. Returns false if one is already held.
    pub fn give_egg(&mut self) -> bool {
        if self.egg {
            false
        } else {
            self.egg = true;
            true
        }
    }

    /// Consume the held egg. Returns false (a no-op) when none is held.
    pub fn take_egg(&mut self) -> bool {
        if self.egg {
            self.egg = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_inventory() {
        let inv = Inventory::starting();
        assert_eq!(inv.snacks(), STARTING_SNACKS);
        assert!(!inv.has_egg());
    }

    #[test]
    fn test_snacks_clamp_at_max() {
        let mut inv = Inventory::starting();
        for _ in 0..10 {
            inv.add_snack();
        }
        assert_eq!(inv.snacks(), MAX_SNACKS);
    }

    #[test]
    fn test_snacks_never_go_negative() {
        let mut inv = Inventory::starting();
        for _ in 0..MAX_SNACKS {
            assert!(inv.take_snack());
        }
        assert!(inv.snacks_depleted());
        assert!(!inv.take_snack());
        assert_eq!(inv.snacks(), 0);
    }

    #[test]
    fn test_egg_single_slot() {
        let mut inv = Inventory::starting();
        assert!(inv.give_egg());
        assert!(!inv.give_egg(), "second pickup refused while holding one");
        assert!(inv.take_egg());
        assert!(!inv.take_egg(), "consuming with no egg is a no-op");
    }
}
