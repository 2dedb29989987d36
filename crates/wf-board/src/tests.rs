//! Unit tests for wf-board.

use wf_core::{ActionKind, Layout, ReflowConfig, Tile, TileId, Translation, WfError};
use wf_reflow::{PassOutcome, RecordingNotifier};

use crate::{Board, BoardBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn words() -> Vec<Tile> {
    vec![
        Tile::new(1, "the"),
        Tile::new(2, "cat"),
        Tile::new(3, "sat"),
        Tile::new(4, "down"),
    ]
}

/// Pool row at y = 200, each tile 60 x 30, laid out left to right.
fn pool_layouts() -> Vec<Layout> {
    (0..4).map(|i| Layout::new(i as f32 * 65.0, 200.0, 60.0, 30.0)).collect()
}

fn board() -> Board {
    BoardBuilder::new(words())
        .container(Layout::new(10.0, 0.0, 250.0, 100.0))
        .measurements(pool_layouts())
        .build()
        .unwrap()
}

// ── BoardBuilder ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let b = BoardBuilder::new(words()).build().unwrap();
        assert_eq!(b.tiles().len(), 4);
        assert_eq!(b.engine().store().len(), 4);
        assert_eq!(b.measured(TileId(1)).unwrap(), Layout::ZERO);
    }

    #[test]
    fn duplicate_tile_ids_error() {
        let mut tiles = words();
        tiles.push(Tile::new(2, "again"));
        let err = BoardBuilder::new(tiles).build().err().unwrap();
        assert!(matches!(err, WfError::DuplicateTile(TileId(2))));
    }

    #[test]
    fn measurement_count_mismatch_errors() {
        let err = BoardBuilder::new(words())
            .measurements(vec![Layout::sized(60.0, 30.0)])
            .build()
            .err()
            .unwrap();
        assert!(matches!(
            err,
            WfError::TileCountMismatch { expected: 4, got: 1, what: "measurements" }
        ));
    }

    #[test]
    fn non_finite_container_errors() {
        let err = BoardBuilder::new(words())
            .container(Layout::new(0.0, 0.0, f32::NAN, 10.0))
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, WfError::Config(_)));
    }

    #[test]
    fn shuffle_is_deterministic_and_keeps_measurements_paired() {
        let build = |seed| {
            BoardBuilder::new(words())
                .measurements(pool_layouts())
                .shuffled(seed)
                .build()
                .unwrap()
        };
        let a = build(11);
        let b = build(11);
        let ids_a: Vec<TileId> = a.tiles().iter().map(|t| t.id).collect();
        let ids_b: Vec<TileId> = b.tiles().iter().map(|t| t.id).collect();
        assert_eq!(ids_a, ids_b);

        let mut sorted = ids_a.clone();
        sorted.sort();
        assert_eq!(sorted, vec![TileId(1), TileId(2), TileId(3), TileId(4)]);

        // Tile 3 still rests at its own measured box.
        assert_eq!(a.measured(TileId(3)).unwrap(), pool_layouts()[2]);
    }
}

// ── Tapping ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tap_tests {
    use super::*;

    #[test]
    fn tap_toggles_between_add_and_remove() {
        let mut b = board();
        assert_eq!(b.tap(TileId(3)).unwrap(), ActionKind::Add);
        assert!(b.is_selected(TileId(3)).unwrap());
        assert_eq!(b.tap(TileId(3)).unwrap(), ActionKind::Remove);
        assert!(!b.is_selected(TileId(3)).unwrap());
    }

    #[test]
    fn unmeasured_tile_cannot_be_tapped() {
        let mut b = BoardBuilder::new(words()).build().unwrap();
        assert!(matches!(b.tap(TileId(1)), Err(WfError::NotMeasured(TileId(1)))));
        b.measure(TileId(1), Layout::new(0.0, 200.0, 40.0, 30.0)).unwrap();
        assert_eq!(b.tap(TileId(1)).unwrap(), ActionKind::Add);
    }

    #[test]
    fn unknown_tile_errors() {
        let mut b = board();
        assert!(matches!(b.tap(TileId(77)), Err(WfError::UnknownTile(TileId(77)))));
        assert!(b.measure(TileId(77), Layout::sized(1.0, 1.0)).is_err());
        assert!(b.translation(TileId(77)).is_err());
    }

    #[test]
    fn answer_follows_tap_order() {
        let mut b = board();
        for id in [4, 1, 3] {
            b.tap(TileId(id)).unwrap();
        }
        assert_eq!(b.answer_text(), "down the sat");
        let pool: Vec<&str> = b.pool().iter().map(|t| t.label.as_str()).collect();
        assert_eq!(pool, vec!["cat"]);

        b.tap(TileId(1)).unwrap();
        assert_eq!(b.answer_text(), "down sat");
    }

    #[test]
    fn notifier_sees_every_tap() {
        let mut b = BoardBuilder::new(words())
            .measurements(pool_layouts())
            .container(Layout::new(0.0, 0.0, 300.0, 100.0))
            .notifier(RecordingNotifier::new())
            .build()
            .unwrap();
        b.tap(TileId(2)).unwrap();
        b.tap(TileId(2)).unwrap();
        assert_eq!(
            b.notifier_mut().actions,
            vec![(ActionKind::Add, TileId(2)), (ActionKind::Remove, TileId(2))]
        );
    }
}

// ── Translations ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod translation_tests {
    use super::*;

    #[test]
    fn unselected_tiles_stay_put() {
        let b = board();
        assert_eq!(b.translation(TileId(1)).unwrap(), Translation::ZERO);
    }

    #[test]
    fn selected_tile_moves_from_rest_to_slot() {
        let mut b = board();
        b.tap(TileId(3)).unwrap(); // rests at (130, 200), slot 0 at (10, 0)
        assert_eq!(b.translation(TileId(3)).unwrap(), Translation { dx: -120.0, dy: -200.0 });

        b.tap(TileId(2)).unwrap(); // rests at (65, 200), slot 1 at (70, 0)
        assert_eq!(b.translation(TileId(2)).unwrap(), Translation { dx: 5.0, dy: -200.0 });
    }

    #[test]
    fn removal_shifts_followers() {
        let mut b = board();
        for id in [1, 2, 3] {
            b.tap(TileId(id)).unwrap();
        }
        b.tap(TileId(1)).unwrap();
        // Tile 3 rests at x = 130 and now occupies slot 1 at x = 70.
        assert_eq!(b.translation(TileId(3)).unwrap(), Translation { dx: -60.0, dy: -200.0 });

        let all = b.translations();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0], (TileId(1), Translation::ZERO));
    }

    #[test]
    fn container_change_passes_through() {
        let mut b = BoardBuilder::new(words())
            .measurements(pool_layouts())
            .config(ReflowConfig::default().with_reflow_on_resize(true))
            .build()
            .unwrap();
        b.set_container(Layout::new(0.0, 0.0, 100.0, 100.0)).unwrap();
        b.tap(TileId(1)).unwrap();
        b.tap(TileId(2)).unwrap();

        let outcome = b.set_container(Layout::new(0.0, 0.0, 300.0, 100.0)).unwrap();
        assert_eq!(outcome, PassOutcome::Relaid { slots: 2 });
        let second = b.engine().store().target_of(TileId(2)).unwrap();
        assert_eq!((second.x, second.y), (60.0, 0.0));
    }

    #[test]
    fn non_finite_container_change_is_rejected() {
        let mut b = BoardBuilder::new(words())
            .measurements(pool_layouts())
            .container(Layout::new(0.0, 0.0, 100.0, 100.0))
            .build()
            .unwrap();
        b.tap(TileId(1)).unwrap();
        let before = b.engine().store().clone();

        let err = b.set_container(Layout::new(0.0, f32::NAN, 100.0, 100.0)).unwrap_err();
        assert!(matches!(err, WfError::Config(_)));
        let err = b.set_container(Layout::new(0.0, 0.0, f32::INFINITY, 100.0)).unwrap_err();
        assert!(matches!(err, WfError::Config(_)));

        assert_eq!(b.engine().container(), Layout::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(b.engine().store(), &before);
    }
}
