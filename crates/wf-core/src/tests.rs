//! Unit tests for wf-core primitives.

#[cfg(test)]
mod ids {
    use crate::{SlotIndex, TileId};

    #[test]
    fn empty_sentinel_is_minus_one() {
        assert_eq!(TileId::EMPTY.0, -1);
        assert_eq!(TileId::default(), TileId::EMPTY);
        assert!(!TileId::EMPTY.is_valid());
        assert!(TileId(0).is_valid());
    }

    #[test]
    fn slot_index_casts_to_vec_index() {
        assert_eq!(SlotIndex(7).index(), 7);
        assert!(SlotIndex(0) < SlotIndex(7));
    }

    #[test]
    fn display() {
        assert_eq!(TileId(3).to_string(), "TileId(3)");
        assert_eq!(SlotIndex(0).to_string(), "SlotIndex(0)");
    }
}

#[cfg(test)]
mod geometry {
    use crate::{Layout, Translation};

    #[test]
    fn finite_check_covers_every_coordinate() {
        assert!(Layout::new(10.0, 0.0, 60.0, 30.0).is_finite());
        assert!(Layout::new(-5.0, 0.0, 0.0, 0.0).is_finite());
        assert!(!Layout::new(f32::NAN, 0.0, 60.0, 30.0).is_finite());
        assert!(!Layout::new(0.0, 0.0, f32::INFINITY, 30.0).is_finite());
        assert!(!Layout::new(0.0, 0.0, 60.0, f32::NEG_INFINITY).is_finite());
    }

    #[test]
    fn zero_width_is_unmeasured() {
        assert!(!Layout::ZERO.is_measured());
        assert!(Layout::sized(12.0, 30.0).is_measured());
    }

    #[test]
    fn translation_points_from_rest_to_target() {
        let rest   = Layout::new(40.0, 200.0, 60.0, 30.0);
        let target = Layout::new(10.0, 30.0, 60.0, 30.0);
        assert_eq!(rest.translation_to(&target), Translation { dx: -30.0, dy: -170.0 });
        assert_eq!(rest.translation_to(&rest), Translation::ZERO);
    }
}

#[cfg(test)]
mod action {
    use crate::ActionKind;

    #[test]
    fn notification_codes() {
        assert_eq!(ActionKind::Add.code(), 1);
        assert_eq!(ActionKind::Remove.code(), 2);
    }

    #[test]
    fn display() {
        assert_eq!(ActionKind::Add.to_string(), "add");
    }
}

#[cfg(test)]
mod config {
    use crate::{ActionPolicy, ReflowConfig};

    #[test]
    fn default_is_strict_without_relayout() {
        let cfg = ReflowConfig::default();
        assert_eq!(cfg.policy, ActionPolicy::Strict);
        assert!(!cfg.reflow_on_resize);
    }

    #[test]
    fn compatible_constructor() {
        let cfg = ReflowConfig::compatible().with_reflow_on_resize(true);
        assert_eq!(cfg.policy, ActionPolicy::Compatible);
        assert!(cfg.reflow_on_resize);
    }
}

#[cfg(test)]
mod error {
    use crate::{TileId, WfError};

    #[test]
    fn messages_name_the_tile() {
        let e = WfError::UnknownTile(TileId(9));
        assert_eq!(e.to_string(), "tile TileId(9) is not part of this board");
    }
}
