//! Tests for `SolverState` construction, `fix`, transactional revert, and
//! wildcard short-circuiting.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::rc::Rc;

    use wavetile::algorithm::SolverState;
    use wavetile::rules::{Direction, RuleMap, Rules, TileDefinition};

    fn incompatible_pair() -> Rc<Rules> {
        let mut tiles = HashMap::new();
        tiles.insert(
            1,
            TileDefinition {
                name: "a".into(),
                index: 1,
                rules: RuleMap::Wildcard([2].into_iter().collect()),
            },
        );
        tiles.insert(
            2,
            TileDefinition {
                name: "b".into(),
                index: 2,
                rules: RuleMap::Wildcard([1].into_iter().collect()),
            },
        );
        Rc::new(
            Rules::new(
                "pair".into(),
                "test".into(),
                "tiles.png".into(),
                8,
                8,
                1,
                tiles,
            )
            .unwrap(),
        )
    }

    fn three_way_exclusive() -> Rc<Rules> {
        let mut tiles = HashMap::new();
        for i in 1..=3u32 {
            tiles.insert(
                i,
                TileDefinition {
                    name: format!("t{i}"),
                    index: i,
                    rules: RuleMap::Wildcard([i].into_iter().collect()),
                },
            );
        }
        Rc::new(
            Rules::new(
                "three".into(),
                "test".into(),
                "tiles.png".into(),
                8,
                8,
                1,
                tiles,
            )
            .unwrap(),
        )
    }

    // Scenario 2 (incompatible pair): fix succeeds and sets a singleton,
    // marking the state dirty.
    #[test]
    fn fix_success_sets_singleton_and_marks_dirty() {
        let mut state = SolverState::new(incompatible_pair(), 2, 1, 1);
        state.clear_dirty();
        assert!(state.fix(0, 0, 1));
        assert_eq!(state.get(0, 0), vec![1]);
        assert!(state.is_dirty());
    }

    // Scenario 2: fixing either tile of an exclusive pair propagates the
    // other across the grid.
    #[test]
    fn fix_propagates_to_neighbor_across_grid() {
        let mut state = SolverState::new(incompatible_pair(), 2, 1, 1);
        assert!(state.fix(0, 0, 2));
        assert_eq!(state.get(1, 0), vec![1]);

        let mut fresh = SolverState::new(incompatible_pair(), 2, 1, 1);
        assert!(fresh.fix(0, 0, 1));
        assert_eq!(fresh.get(1, 0), vec![2]);
    }

    // Scenario 4 (wildcard): a tile whose rules name only a wildcard
    // direction leaves every other cell untouched by propagation.
    #[test]
    fn wildcard_direction_does_not_constrain_neighbors() {
        let mut tiles = HashMap::new();
        tiles.insert(
            1,
            TileDefinition {
                name: "a".into(),
                index: 1,
                rules: RuleMap::PerDirection(
                    [(Direction::Up, [0].into_iter().collect())]
                        .into_iter()
                        .collect(),
                ),
            },
        );
        tiles.insert(
            2,
            TileDefinition {
                name: "b".into(),
                index: 2,
                rules: RuleMap::PerDirection(HashMap::new()),
            },
        );
        let rules = Rc::new(
            Rules::new(
                "wild".into(),
                "test".into(),
                "tiles.png".into(),
                8,
                8,
                1,
                tiles,
            )
            .unwrap(),
        );

        let mut state = SolverState::new(rules, 10, 10, 7);
        let before = state.get(5, 4);
        assert!(state.fix(5, 5, 1));
        assert_eq!(state.get(5, 4), before);
    }

    // Scenario 3 (revert): a fix that cannot be satisfied leaves the grid
    // bit-for-bit identical to its pre-call snapshot (I4).
    #[test]
    fn failed_fix_reverts_state_exactly() {
        let mut state = SolverState::new(three_way_exclusive(), 2, 1, 3);
        assert!(state.fix(1, 0, 2));
        let before = (state.get(0, 0), state.get(1, 0));
        assert!(!state.fix(0, 0, 1));
        assert_eq!(state.get(0, 0), before.0);
        assert_eq!(state.get(1, 0), before.1);
    }

    // I3: reset restores construction-time state bit-for-bit.
    #[test]
    fn reset_restores_construction_time_state() {
        let mut state = SolverState::new(incompatible_pair(), 2, 1, 1);
        state.fix(0, 0, 1);
        state.reset();
        assert_eq!(state.get(0, 0).len(), 2);
        assert_eq!(state.get(1, 0).len(), 2);
    }

    // I7: clear_errors is a no-op on a cell that never became errored.
    #[test]
    fn clear_errors_is_a_no_op_on_open_cells() {
        let mut state = SolverState::new(incompatible_pair(), 1, 1, 1);
        state.clear_errors();
        assert_eq!(state.get(0, 0).len(), 2);
    }

    #[test]
    fn get_out_of_range_is_empty() {
        let state = SolverState::new(incompatible_pair(), 2, 1, 1);
        assert!(state.get(5, 5).is_empty());
    }

    #[test]
    fn width_and_height_and_rules_accessors_round_trip() {
        let state = SolverState::new(incompatible_pair(), 4, 3, 0);
        assert_eq!(state.width(), 4);
        assert_eq!(state.height(), 3);
        assert_eq!(state.rules().error_tile, 1);
    }
}
