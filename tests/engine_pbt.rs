use petri_lib::model::engine::{add_cell, count_neighbors, evolve, random_seed};
use petri_lib::model::grid::Grid;
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// Arbitrary grids with an interior, random interior fill and (unlike anything
// the seeding path produces) randomly-lit border cells.
prop_compose! {
    fn arb_grid()(height in 3u16..24, width in 3u16..24, seed in any::<u64>()) -> Grid {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut grid = random_seed(height, width, 0.5, &mut rng)
            .expect("0.5 is a valid density");
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                if grid.is_border(row, col) && rng.gen::<f64>() < 0.3 {
                    grid.set(row, col, true);
                }
            }
        }
        grid
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn neighbor_counts_stay_in_range(grid in arb_grid()) {
        for row in 1..grid.height() - 1 {
            for col in 1..grid.width() - 1 {
                let n = count_neighbors(&grid, row, col).expect("grid has an interior");
                prop_assert!(n <= 8);
            }
        }
    }

    #[test]
    fn evolve_keeps_dimensions_and_kills_the_border(grid in arb_grid()) {
        let next = evolve(&grid);
        prop_assert_eq!(next.height(), grid.height());
        prop_assert_eq!(next.width(), grid.width());
        for row in 0..next.height() {
            for col in 0..next.width() {
                if next.is_border(row, col) {
                    prop_assert!(!next.get(row, col));
                }
            }
        }
    }

    #[test]
    fn evolve_leaves_its_input_alone(grid in arb_grid()) {
        let before = grid.clone();
        let _ = evolve(&grid);
        prop_assert_eq!(grid, before);
    }

    #[test]
    fn add_cell_out_of_range_is_identity(grid in arb_grid(), row in -40i32..80, col in -40i32..80) {
        let next = add_cell(&grid, row, col);
        if grid.in_bounds(row, col) {
            prop_assert!(next.get(row as u16, col as u16));
            let expected = if grid.get(row as u16, col as u16) {
                grid.population()
            } else {
                grid.population() + 1
            };
            prop_assert_eq!(next.population(), expected);
        } else {
            prop_assert_eq!(next, grid);
        }
    }

    #[test]
    fn two_steps_equal_one_step_of_the_next_generation(grid in arb_grid()) {
        // evolve is a pure function of its input, so composing it must be
        // path-independent.
        let a = evolve(&evolve(&grid));
        let b = {
            let mid = evolve(&grid);
            evolve(&mid)
        };
        prop_assert_eq!(a, b);
    }
}
