//! Timed effect kinds and the Luck gold multiplier.
//!
//! Effects live in the player's `effects` map as `kind -> absolute expiry
//! timestamp` (unix seconds). Membership in the map is what gates a bonus;
//! expiry is enforced by `Player::decay_effects` at the top of each loop
//! iteration, so there is never a background timer.

use serde::{Deserialize, Serialize};

use crate::items::PotionKind;

/// Buffs with a wall-clock expiry. `Ord` keeps the serialized effects map
/// in a stable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EffectKind {
    Regen,
    Luck,
}

impl EffectKind {
    pub fn name(&self) -> &'static str {
        match self {
            EffectKind::Regen => "Regen",
            EffectKind::Luck => "Luck",
        }
    }

    pub fn all() -> [EffectKind; 2] {
        [EffectKind::Regen, EffectKind::Luck]
    }

    /// The potion consumed to activate this effect.
    pub fn potion(&self) -> PotionKind {
        match self {
            EffectKind::Regen => PotionKind::Regen,
            EffectKind::Luck => PotionKind::Luck,
        }
    }
}

/// Gold multiplier applied while Luck is active: x1.5 truncated toward zero.
pub fn lucky_gold(base: u32) -> u32 {
    base * 3 / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lucky_gold_truncates_toward_zero() {
        assert_eq!(lucky_gold(5), 7);
        assert_eq!(lucky_gold(6), 9);
        assert_eq!(lucky_gold(20), 30);
        assert_eq!(lucky_gold(0), 0);
    }

    #[test]
    fn test_effect_kind_consumes_matching_potion() {
        assert_eq!(EffectKind::Regen.potion(), PotionKind::Regen);
        assert_eq!(EffectKind::Luck.potion(), PotionKind::Luck);
    }

    #[test]
    fn test_effect_kind_serializes_as_name() {
        for kind in EffectKind::all() {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
        }
    }
}
