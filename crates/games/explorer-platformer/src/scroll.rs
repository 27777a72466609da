//! Vertical camera sections.
//!
//! The world is split into three stacked sections; the camera snaps between
//! fixed vertical offsets as the player crosses thresholds. Rules run as an
//! ordered cascade, each guarded by the zone left behind by the rules before
//! it, so the Mid->Top and Top->Mid rules cancel inside the 700..900 band
//! and a player standing still never flickers between sections.

use serde::{Deserialize, Serialize};

use crate::player::PlayerEntity;

/// Player y above which the camera drops from Mid to Bottom.
pub const MID_TO_BOTTOM_Y: f32 = 1600.0;
/// Player y below which the camera rises from Bottom to Mid.
pub const BOTTOM_TO_MID_Y: f32 = 1600.0;
/// Player y below which the camera rises from Mid to Top.
pub const MID_TO_TOP_Y: f32 = 900.0;
/// Player y above which the camera drops from Top to Mid.
pub const TOP_TO_MID_Y: f32 = 700.0;

/// Vertical camera section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScrollZone {
    Top,
    #[default]
    Mid,
    Bottom,
}

impl ScrollZone {
    /// Vertical camera offset for this section.
    pub fn offset(self) -> f32 {
        match self {
            ScrollZone::Top => 0.0,
            ScrollZone::Mid => -850.0,
            ScrollZone::Bottom => -1600.0,
        }
    }

    /// One section toward `target`. Top and Bottom are never adjacent.
    fn step_toward(self, target: ScrollZone) -> ScrollZone {
        match (self, target) {
            (ScrollZone::Top, ScrollZone::Bottom) | (ScrollZone::Bottom, ScrollZone::Top) => {
                ScrollZone::Mid
            },
            _ => target,
        }
    }
}

#[derive(Clone, Copy)]
enum Crossing {
    Above(f32),
    Below(f32),
}

impl Crossing {
    fn fires(self, y: f32) -> bool {
        match self {
            Crossing::Above(threshold) => y > threshold,
            Crossing::Below(threshold) => y < threshold,
        }
    }
}

struct ZoneRule {
    from: ScrollZone,
    to: ScrollZone,
    when: Crossing,
}

const ZONE_RULES: [ZoneRule; 4] = [
    ZoneRule {
        from: ScrollZone::Mid,
        to: ScrollZone::Bottom,
        when: Crossing::Above(MID_TO_BOTTOM_Y),
    },
    ZoneRule {
        from: ScrollZone::Bottom,
        to: ScrollZone::Mid,
        when: Crossing::Below(BOTTOM_TO_MID_Y),
    },
    ZoneRule {
        from: ScrollZone::Mid,
        to: ScrollZone::Top,
        when: Crossing::Below(MID_TO_TOP_Y),
    },
    ZoneRule {
        from: ScrollZone::Top,
        to: ScrollZone::Mid,
        when: Crossing::Above(TOP_TO_MID_Y),
    },
];

/// Section the camera should show after this frame, given the current one.
pub fn next_zone(current: ScrollZone, y: f32) -> ScrollZone {
    let cascaded = ZONE_RULES.iter().fold(current, |zone, rule| {
        if zone == rule.from && rule.when.fires(y) {
            rule.to
        } else {
            zone
        }
    });
    current.step_toward(cascaded)
}

/// Apply [`next_zone`] to the player. Returns `(from, to)` when the section changed.
pub fn update_scroll_zone(player: &mut PlayerEntity) -> Option<(ScrollZone, ScrollZone)> {
    let from = player.scroll_zone;
    let to = next_zone(from, player.y);
    if from == to {
        return None;
    }
    player.scroll_zone = to;
    Some((from, to))
}
