use crate::{Point, Town};

/// A candidate mining area, represented by a min + max coordinate pair.
///
/// The two coordinates form an _inclusive_ 2D range, i.e. unlike in a
/// half-open range, a deposit with `p.x == x_max` is still covered.
///
/// A freshly created area is *unclaimed*: its bounds are inverted so that no
/// cell is contained, while its reported area is the whole town. The first
/// [`enlarge`](Self::enlarge) collapses it onto the chosen deposit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MiningArea {
    x_min: i32,
    y_min: i32,
    x_max: i32,
    y_max: i32,
    area: i64,
}

impl MiningArea {
    /// The sentinel area that claims no cell yet.
    ///
    /// Its area is that of the whole town, which doubles as the initial
    /// upper bound for the search.
    pub fn unclaimed(town: Town) -> Self {
        Self {
            x_min: town.width,
            y_min: town.height,
            x_max: 0,
            y_max: 0,
            area: town.area(),
        }
    }

    /// The smallest area covering all the given deposits.
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_deposits(mut iter: impl Iterator<Item = Point>) -> Option<Self> {
        let first = iter.next()?;
        let mut area = Self {
            x_min: first.x,
            y_min: first.y,
            x_max: first.x,
            y_max: first.y,
            area: 1,
        };
        for p in iter {
            area = area.enlarge(p);
        }
        Some(area)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x_min && p.y >= self.y_min && p.x <= self.x_max && p.y <= self.y_max
    }

    /// How far the area would have to grow to reach `p`.
    ///
    /// Per axis this is the gap between `p` and the nearer edge, zero when
    /// `p` already falls within that axis range; the result is the sum over
    /// both axes. Only used to order candidate deposits, never as an exact
    /// growth cost.
    pub fn expansion_distance(&self, p: Point) -> i32 {
        let dx = (self.x_min - p.x).max(p.x - self.x_max).max(0);
        let dy = (self.y_min - p.y).max(p.y - self.y_max).max(0);
        dx + dy
    }

    /// A copy of this area, grown just enough to also cover `p`.
    ///
    /// The receiver is left untouched; bounds and area of the copy are
    /// recomputed together.
    pub fn enlarge(self, p: Point) -> Self {
        let x_min = self.x_min.min(p.x);
        let y_min = self.y_min.min(p.y);
        let x_max = self.x_max.max(p.x);
        let y_max = self.y_max.max(p.y);
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
            area: (x_max - x_min + 1) as i64 * (y_max - y_min + 1) as i64,
        }
    }

    pub fn area(&self) -> i64 {
        self.area
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    fn area_of(points: &[Point]) -> MiningArea {
        MiningArea::from_deposits(points.iter().copied()).unwrap()
    }

    #[test]
    fn unclaimed_contains_no_cell() {
        let town = Town {
            height: 3,
            width: 4,
        };
        let start = MiningArea::unclaimed(town);
        assert_eq!(start.area(), 12);
        for y in 0..3 {
            for x in 0..4 {
                assert!(!start.contains(Point { x, y }));
            }
        }
    }

    #[test]
    fn first_enlarge_collapses_to_one_cell() {
        let start = MiningArea::unclaimed(Town {
            height: 5,
            width: 5,
        });
        let p = Point { x: 2, y: 3 };
        let committed = start.enlarge(p);
        assert_eq!(committed.area(), 1);
        assert!(committed.contains(p));
    }

    #[test]
    fn expansion_distance_sums_both_axes() {
        let area = area_of(&[Point { x: 1, y: 1 }, Point { x: 2, y: 2 }]);
        assert_eq!(area.expansion_distance(Point { x: 4, y: 0 }), 3);
        assert_eq!(area.expansion_distance(Point { x: 0, y: 2 }), 1);
        assert_eq!(area.expansion_distance(Point { x: 2, y: 1 }), 0);
    }

    quickcheck! {
        fn enlarge_never_shrinks(points: Vec<Point>, p: Point) -> bool {
            match MiningArea::from_deposits(points.iter().copied()) {
                Some(area) => area.enlarge(p).area() >= area.area(),
                None => true,
            }
        }

        fn enlarge_is_idempotent_on_contained_points(points: Vec<Point>, p: Point) -> bool {
            match MiningArea::from_deposits(points.iter().copied()) {
                Some(area) if area.contains(p) => area.enlarge(p) == area,
                _ => true,
            }
        }

        fn containment_matches_zero_distance(points: Vec<Point>, p: Point) -> bool {
            match MiningArea::from_deposits(points.iter().copied()) {
                Some(area) => area.contains(p) == (area.expansion_distance(p) == 0),
                None => true,
            }
        }
    }
}
