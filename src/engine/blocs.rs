//! Bloc loyalties and the congress derived from them

use serde::{Deserialize, Serialize};

use crate::content::blocs::{bloc_definition, TOTAL_SEATS};
use crate::core::types::{clamp, BlocId, BlocMap};

pub const LOYALTY_MIN: i32 = 0;
pub const LOYALTY_MAX: i32 = 100;

/// Loyalty at or above which a bloc's seats count as friendly
pub const FRIENDLY_LOYALTY: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bloc {
    pub id: BlocId,
    pub loyalty: i32,
}

impl Bloc {
    pub fn adjust_loyalty(&mut self, delta: i32) {
        self.loyalty = clamp(self.loyalty.saturating_add(delta), LOYALTY_MIN, LOYALTY_MAX);
    }
}

pub type Blocs = BlocMap<Bloc>;

/// Authored starting loyalties shifted by a difficulty offset
pub fn initial_blocs(loyalty_offset: i32) -> Blocs {
    BlocMap::from_fn(|id| Bloc {
        id,
        loyalty: clamp(
            bloc_definition(id).starting_loyalty + loyalty_offset,
            LOYALTY_MIN,
            LOYALTY_MAX,
        ),
    })
}

/// Seat shares and whether the friendly blocs hold more than half of them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Congress {
    pub seat_shares: BlocMap<f64>,
    pub friendly_majority: bool,
}

impl Congress {
    pub fn from_blocs(blocs: &Blocs) -> Self {
        let seat_shares = BlocMap::from_fn(|id| {
            f64::from(bloc_definition(id).seat_weight) / f64::from(TOTAL_SEATS)
        });
        Self {
            seat_shares,
            friendly_majority: friendly_seats(blocs) * 2 > TOTAL_SEATS,
        }
    }

    pub fn friendly_share(&self, blocs: &Blocs) -> f64 {
        friendly_share(blocs, &self.seat_shares)
    }
}

/// Seats held by friendly blocs. Majority is decided on these, not on shares.
pub fn friendly_seats(blocs: &Blocs) -> u32 {
    blocs
        .iter()
        .filter(|(_, bloc)| bloc.loyalty >= FRIENDLY_LOYALTY)
        .map(|(id, _)| bloc_definition(id).seat_weight)
        .sum()
}

fn friendly_share(blocs: &Blocs, seat_shares: &BlocMap<f64>) -> f64 {
    blocs
        .iter()
        .filter(|(_, bloc)| bloc.loyalty >= FRIENDLY_LOYALTY)
        .map(|(id, _)| seat_shares[id])
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_loyalty_clamps() {
        let mut bloc = Bloc { id: BlocId::Labor, loyalty: 97 };
        bloc.adjust_loyalty(10);
        assert_eq!(bloc.loyalty, 100);
        bloc.adjust_loyalty(-250);
        assert_eq!(bloc.loyalty, 0);
    }

    #[test]
    fn test_initial_blocs_apply_offset() {
        let blocs = initial_blocs(5);
        assert_eq!(
            blocs[BlocId::Labor].loyalty,
            bloc_definition(BlocId::Labor).starting_loyalty + 5
        );
        for (id, bloc) in blocs.iter() {
            assert_eq!(bloc.id, id);
        }
    }

    #[test]
    fn test_all_loyal_has_majority() {
        let mut blocs = initial_blocs(0);
        for (_, bloc) in blocs.iter_mut() {
            bloc.loyalty = 80;
        }
        let congress = Congress::from_blocs(&blocs);
        assert!(congress.friendly_majority);
        assert!((congress.friendly_share(&blocs) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_hostile_has_no_majority() {
        let mut blocs = initial_blocs(0);
        for (_, bloc) in blocs.iter_mut() {
            bloc.loyalty = 20;
        }
        assert!(!Congress::from_blocs(&blocs).friendly_majority);
    }

    #[test]
    fn test_exact_half_is_not_majority() {
        let friendly = [
            BlocId::Military,
            BlocId::Enforcers,
            BlocId::Finance,
            BlocId::Industry,
            BlocId::Agri,
            BlocId::MainStreet,
            BlocId::Academy,
        ];
        let mut blocs = initial_blocs(0);
        for (id, bloc) in blocs.iter_mut() {
            bloc.loyalty = if friendly.contains(&id) { 80 } else { 20 };
        }
        assert_eq!(friendly_seats(&blocs), 50);
        assert!(!Congress::from_blocs(&blocs).friendly_majority);

        blocs[BlocId::Court].loyalty = 50;
        assert_eq!(friendly_seats(&blocs), 54);
        assert!(Congress::from_blocs(&blocs).friendly_majority);
    }

    /// Every subset of blocs holding exactly half the seats falls short
    #[test]
    fn test_no_exact_half_subset_has_majority() {
        let mut checked = 0;
        for mask in 0u32..(1 << BlocId::COUNT) {
            let mut blocs = initial_blocs(0);
            for (id, bloc) in blocs.iter_mut() {
                bloc.loyalty = if mask & (1 << id.index()) != 0 { 80 } else { 20 };
            }
            if friendly_seats(&blocs) * 2 == TOTAL_SEATS {
                checked += 1;
                assert!(!Congress::from_blocs(&blocs).friendly_majority, "mask {mask:b}");
            }
        }
        assert!(checked > 0);
    }

    #[test]
    fn test_standard_start_has_majority() {
        assert!(Congress::from_blocs(&initial_blocs(0)).friendly_majority);
    }
}
