//! Generation advance: apply a rule to every interior cell of a grid

use super::error::GridError;
use super::grid::{Cell, Grid};
use super::rules::Rule;

/// Compute the generation after `source` into `destination`.
///
/// Every interior cell of `destination` receives the rule's verdict for the
/// matching cell of `source`; every border cell of `destination` is set dead.
/// `source` is only read, so neighbour counts always see the previous
/// generation.
pub fn advance_generation<R>(source: &Grid, destination: &mut Grid, rule: &R) -> Result<(), GridError>
where
    R: Rule + ?Sized,
{
    if source.dimensions() != destination.dimensions() {
        return Err(GridError::DimensionMismatch {
            source_width: source.width(),
            source_height: source.height(),
            destination_width: destination.width(),
            destination_height: destination.height(),
        });
    }

    write_next_generation(source, destination, rule);
    Ok(())
}

/// Fill `destination` from `source`; callers guarantee equal dimensions
fn write_next_generation<R: Rule + ?Sized>(source: &Grid, destination: &mut Grid, rule: &R) {
    let width = source.width();

    for (idx, cell) in destination.cells_mut().iter_mut().enumerate() {
        let (row, col) = (idx / width, idx % width);
        *cell = match source.get(row, col) {
            Some(current) if source.is_interior(row, col) => {
                rule.next_state(current, source.count_neighbours(row, col))
            }
            _ => Cell::Dead,
        };
    }
}

/// Evolve the grid one generation forward into a freshly allocated grid
pub fn evolve<R: Rule + ?Sized>(current: &Grid, rule: &R) -> Grid {
    let mut next = Grid::with_dimensions_of(current);
    write_next_generation(current, &mut next, rule);
    next
}

/// Evolve the grid for multiple generations
pub fn evolve_generations<R: Rule + ?Sized>(grid: &Grid, rule: &R, generations: usize) -> Grid {
    let mut current = grid.clone();
    let mut next = Grid::with_dimensions_of(grid);
    for _ in 0..generations {
        write_next_generation(&current, &mut next, rule);
        std::mem::swap(&mut current, &mut next);
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::rules::{AlternateRule, RuleKind, StandardRule};

    fn block() -> Grid {
        Grid::from_cells(vec![
            vec![false, false, false, false],
            vec![false, true, true, false],
            vec![false, true, true, false],
            vec![false, false, false, false],
        ])
        .unwrap()
    }

    fn horizontal_blinker() -> Grid {
        let mut grid = Grid::new(5, 5).unwrap();
        for col in 1..=3 {
            grid.set(2, col, Cell::Alive).unwrap();
        }
        grid
    }

    fn vertical_blinker() -> Grid {
        let mut grid = Grid::new(5, 5).unwrap();
        for row in 1..=3 {
            grid.set(row, 2, Cell::Alive).unwrap();
        }
        grid
    }

    #[test]
    fn test_still_life_block() {
        let grid = block();
        let evolved = evolve(&grid, &StandardRule);
        assert_eq!(grid, evolved);
    }

    #[test]
    fn test_oscillator_blinker() {
        let grid = horizontal_blinker();
        let evolved = evolve(&grid, &StandardRule);
        assert_eq!(evolved, vertical_blinker());

        let evolved_twice = evolve(&evolved, &StandardRule);
        assert_eq!(evolved_twice, grid);
    }

    #[test]
    fn test_source_is_not_mutated() {
        let source = horizontal_blinker();
        let snapshot = source.clone();
        let mut destination = Grid::with_dimensions_of(&source);

        advance_generation(&source, &mut destination, &StandardRule).unwrap();
        assert_eq!(source, snapshot);
        assert_ne!(destination, source);
    }

    #[test]
    fn test_ping_pong_keeps_block_stable() {
        let mut current = block();
        let mut next = Grid::with_dimensions_of(&current);
        let expected = block();

        for _ in 0..10 {
            advance_generation(&current, &mut next, &StandardRule).unwrap();
            std::mem::swap(&mut current, &mut next);
            assert_eq!(current, expected);
        }
    }

    #[test]
    fn test_destination_border_is_cleared() {
        let source = block();
        let mut destination = Grid::from_cells(vec![vec![true; 4]; 4]).unwrap();

        advance_generation(&source, &mut destination, &StandardRule).unwrap();
        assert!(destination.has_dead_border());
        assert_eq!(destination, source);
    }

    #[test]
    fn test_live_border_feeds_interior_once() {
        // Three live cells on the top border give (1, 2) a birth
        let mut source = Grid::new(5, 4).unwrap();
        for col in 1..=3 {
            source.set(0, col, Cell::Alive).unwrap();
        }

        let next = evolve(&source, &StandardRule);
        assert_eq!(next.living_cells(), vec![(1, 2)]);
        assert!(next.has_dead_border());
    }

    #[test]
    fn test_evolve_agrees_with_advance_generation() {
        let source = Grid::from_cells(vec![
            vec![false, false, false, false, false],
            vec![false, true, true, false, true],
            vec![true, false, true, true, false],
            vec![false, true, false, true, true],
            vec![false, false, true, false, false],
        ])
        .unwrap();
        let mut destination = Grid::from_cells(vec![vec![true; 5]; 5]).unwrap();

        advance_generation(&source, &mut destination, &StandardRule).unwrap();
        assert_eq!(evolve(&source, &StandardRule), destination);
        assert_eq!(evolve_generations(&source, &StandardRule, 1), destination);
    }

    #[test]
    fn test_dimension_mismatch() {
        let source = Grid::new(4, 4).unwrap();
        let mut destination = Grid::new(4, 5).unwrap();
        assert!(matches!(
            advance_generation(&source, &mut destination, &StandardRule),
            Err(GridError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_alternate_rule_births_on_four() {
        // Four cells at the corners of a 3x3 box leave the centre with 4 neighbours
        let mut grid = Grid::new(7, 7).unwrap();
        for (row, col) in [(2, 2), (2, 4), (4, 2), (4, 4)] {
            grid.set(row, col, Cell::Alive).unwrap();
        }

        let standard = evolve(&grid, &StandardRule);
        let alternate = evolve(&grid, &AlternateRule);
        assert!(standard.is_empty());
        assert_eq!(alternate.living_cells(), vec![(3, 3)]);

        let dynamic: &dyn Rule = &RuleKind::Alternate;
        assert_eq!(evolve(&grid, dynamic), alternate);
    }

    #[test]
    fn test_evolve_generations() {
        let grid = horizontal_blinker();
        assert_eq!(evolve_generations(&grid, &StandardRule, 0), grid);
        assert_eq!(evolve_generations(&grid, &StandardRule, 3), vertical_blinker());
        assert_eq!(evolve_generations(&grid, &StandardRule, 4), grid);
    }
}
