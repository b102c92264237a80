/// Mapping between floor-plan editor pixels and world coordinates.
///
/// The plan editor's origin sits at the top-left of its canvas while world
/// space is centred on the room, so the two differ by a fixed offset:
///
/// ```text
/// world.x = plan.x - offset_x
/// world.z = plan.y - offset_z
/// ```
///
/// `to_world` and `to_plan` are exact inverses for every input.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PlanMapping {
    pub offset_x: i32,
    pub offset_z: i32,
}

impl Default for PlanMapping {
    fn default() -> Self {
        Self { offset_x: 250, offset_z: 200 }
    }
}

impl PlanMapping {
    #[inline]
    pub const fn new(offset_x: i32, offset_z: i32) -> Self {
        Self { offset_x, offset_z }
    }

    /// Plan pixel `(x, y)` to world `(x, z)` on the floor.
    #[inline]
    pub fn to_world(self, plan_x: i32, plan_y: i32) -> (i32, i32) {
        (plan_x - self.offset_x, plan_y - self.offset_z)
    }

    /// World `(x, z)` to plan pixel `(x, y)`.
    #[inline]
    pub fn to_plan(self, world_x: i32, world_z: i32) -> (i32, i32) {
        (world_x + self.offset_x, world_z + self.offset_z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_offsets_centre_the_plan_canvas() {
        let m = PlanMapping::default();
        assert_eq!(m.to_world(250, 200), (0, 0));
        assert_eq!(m.to_world(100, 100), (-150, -100));
    }

    #[test]
    fn mapping_round_trips_both_ways() {
        let m = PlanMapping::new(250, 200);
        for (x, y) in [(-40, 7), (0, 0), (600, 480), (i32::MIN / 2, i32::MAX / 2)] {
            let (wx, wz) = m.to_world(x, y);
            assert_eq!(m.to_plan(wx, wz), (x, y));
            let (px, py) = m.to_plan(x, y);
            assert_eq!(m.to_world(px, py), (x, y));
        }
    }
}
