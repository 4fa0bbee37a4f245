use crate::pokemon_types::{PokemonType, TypeEffectiveness, TYPE_COUNT};

use TypeEffectiveness::{Immune as O, Neutral as N, Resisted as H, SuperEffective as S};

/// Attacking type (row) against defending type (column), both in
/// `PokemonType` declaration order.
#[rustfmt::skip]
pub const TYPE_CHART: [[TypeEffectiveness; TYPE_COUNT]; TYPE_COUNT] = [
    //         Nor Fir Wat Ele Gra Ice Fig Poi Gro Fly Psy Bug Roc Gho Dra Dar Ste Fai
    /* Nor */ [N,  N,  N,  N,  N,  N,  N,  N,  N,  N,  N,  N,  H,  O,  N,  N,  H,  N],
    /* Fir */ [N,  H,  H,  N,  S,  S,  N,  N,  N,  N,  N,  S,  H,  N,  H,  N,  S,  N],
    /* Wat */ [N,  S,  H,  N,  H,  N,  N,  N,  S,  N,  N,  N,  S,  N,  H,  N,  N,  N],
    /* Ele */ [N,  N,  S,  H,  H,  N,  N,  N,  O,  S,  N,  N,  N,  N,  H,  N,  N,  N],
    /* Gra */ [N,  H,  S,  N,  H,  N,  N,  H,  S,  H,  N,  H,  S,  N,  H,  N,  H,  N],
    /* Ice */ [N,  H,  H,  N,  S,  H,  N,  N,  S,  S,  N,  N,  N,  N,  S,  N,  H,  N],
    /* Fig */ [S,  N,  N,  N,  N,  S,  N,  H,  N,  H,  H,  H,  S,  O,  N,  S,  S,  H],
    /* Poi */ [N,  N,  N,  N,  S,  N,  N,  H,  H,  N,  N,  N,  H,  H,  N,  N,  O,  S],
    /* Gro */ [N,  S,  N,  S,  H,  N,  N,  S,  N,  O,  N,  H,  S,  N,  N,  N,  S,  N],
    /* Fly */ [N,  N,  N,  H,  S,  N,  S,  N,  N,  N,  N,  S,  H,  N,  N,  N,  H,  N],
    /* Psy */ [N,  N,  N,  N,  N,  N,  S,  S,  N,  N,  H,  N,  N,  N,  N,  O,  H,  N],
    /* Bug */ [N,  H,  N,  N,  S,  N,  H,  H,  N,  H,  S,  N,  N,  H,  N,  S,  H,  H],
    /* Roc */ [N,  S,  N,  N,  N,  S,  H,  N,  H,  S,  N,  S,  N,  N,  N,  N,  H,  N],
    /* Gho */ [O,  N,  N,  N,  N,  N,  N,  N,  N,  N,  S,  N,  N,  S,  N,  H,  N,  N],
    /* Dra */ [N,  N,  N,  N,  N,  N,  N,  N,  N,  N,  N,  N,  N,  N,  S,  N,  H,  O],
    /* Dar */ [N,  N,  N,  N,  N,  N,  H,  N,  N,  N,  S,  N,  N,  S,  N,  H,  N,  H],
    /* Ste */ [N,  H,  H,  H,  N,  S,  N,  N,  N,  N,  N,  N,  S,  N,  N,  N,  H,  S],
    /* Fai */ [N,  H,  N,  N,  N,  N,  S,  H,  N,  N,  N,  N,  N,  N,  S,  S,  H,  N],
];

/// Effectiveness of a single attacking type against a single defending type.
pub fn type_effectiveness(attacking: PokemonType, defending: PokemonType) -> TypeEffectiveness {
    TYPE_CHART[attacking.index()][defending.index()]
}

pub fn is_immune(attacking: PokemonType, defending: PokemonType) -> bool {
    type_effectiveness(attacking, defending) == TypeEffectiveness::Immune
}

#[cfg(test)]
mod tests {
    use super::*;
    use PokemonType::*;

    fn count(effectiveness: TypeEffectiveness) -> usize {
        TYPE_CHART
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == effectiveness)
            .count()
    }

    #[test]
    fn test_every_pair_has_an_entry() {
        let mut seen = 0;
        for attacking in PokemonType::all() {
            for defending in PokemonType::all() {
                // Indexing would panic on a short row.
                let _ = type_effectiveness(attacking, defending);
                seen += 1;
            }
        }
        assert_eq!(seen, 324);
    }

    #[test]
    fn test_cell_category_counts() {
        assert_eq!(count(TypeEffectiveness::Immune), 8);
        assert_eq!(count(TypeEffectiveness::SuperEffective), 51);
        assert_eq!(count(TypeEffectiveness::Resisted), 61);
        assert_eq!(count(TypeEffectiveness::Neutral), 204);
    }

    #[test]
    fn test_known_matchups() {
        assert_eq!(type_effectiveness(Fire, Grass), TypeEffectiveness::SuperEffective);
        assert_eq!(type_effectiveness(Water, Fire), TypeEffectiveness::SuperEffective);
        assert_eq!(type_effectiveness(Electric, Ground), TypeEffectiveness::Immune);
        assert_eq!(type_effectiveness(Ice, Fire), TypeEffectiveness::Resisted);
        assert_eq!(type_effectiveness(Ice, Dragon), TypeEffectiveness::SuperEffective);
        assert_eq!(type_effectiveness(Dragon, Fairy), TypeEffectiveness::Immune);
        assert_eq!(type_effectiveness(Normal, Normal), TypeEffectiveness::Neutral);
    }

    #[test]
    fn test_chart_is_directional() {
        // Fighting does nothing to Ghost, Ghost hits Fighting neutrally.
        assert!(is_immune(Fighting, Ghost));
        assert!(!is_immune(Ghost, Fighting));
        assert_eq!(type_effectiveness(Fire, Grass), TypeEffectiveness::SuperEffective);
        assert_eq!(type_effectiveness(Grass, Fire), TypeEffectiveness::Resisted);
    }

    #[test]
    fn test_immunities() {
        let immune: Vec<(PokemonType, PokemonType)> = PokemonType::all()
            .flat_map(|a| PokemonType::all().map(move |d| (a, d)))
            .filter(|&(a, d)| is_immune(a, d))
            .collect();
        assert_eq!(
            immune,
            vec![
                (Normal, Ghost),
                (Electric, Ground),
                (Fighting, Ghost),
                (Poison, Steel),
                (Ground, Flying),
                (Psychic, Dark),
                (Ghost, Normal),
                (Dragon, Fairy),
            ]
        );
    }
}
