//! Bloc definitions: names, congressional weight, starting loyalty

use crate::core::types::BlocId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlocDefinition {
    pub id: BlocId,
    pub name: &'static str,
    /// Seats held in congress, out of 100
    pub seat_weight: u32,
    pub starting_loyalty: i32,
}

/// Congress seats across all blocs
pub const TOTAL_SEATS: u32 = 100;

pub fn bloc_definition(id: BlocId) -> BlocDefinition {
    let (name, seat_weight, starting_loyalty) = match id {
        BlocId::Court => ("The Court", 4, 55),
        BlocId::Military => ("The Generals", 6, 50),
        BlocId::Enforcers => ("The Enforcers", 5, 52),
        BlocId::Finance => ("The Banks", 9, 48),
        BlocId::Industry => ("The Factory Owners", 8, 50),
        BlocId::Tech => ("The Tech Sector", 6, 55),
        BlocId::Agri => ("The Landowners", 7, 45),
        BlocId::MainStreet => ("Main Street", 10, 50),
        BlocId::Media => ("The Heralds", 6, 42),
        BlocId::Clergy => ("The Clergy", 8, 48),
        BlocId::Academy => ("The Scholars", 5, 58),
        BlocId::Artists => ("The Artists", 4, 55),
        BlocId::Labor => ("The Unions", 14, 60),
        BlocId::Syndicate => ("The Underworld", 8, 35),
    };
    BlocDefinition {
        id,
        name,
        seat_weight,
        starting_loyalty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_weights_sum_to_hundred() {
        let total: u32 = BlocId::ALL.iter().map(|&id| bloc_definition(id).seat_weight).sum();
        assert_eq!(total, TOTAL_SEATS);
    }

    #[test]
    fn test_definitions_keyed_correctly() {
        for id in BlocId::ALL {
            let def = bloc_definition(id);
            assert_eq!(def.id, id);
            assert!(!def.name.is_empty());
            assert!((0..=100).contains(&def.starting_loyalty));
        }
    }
}
