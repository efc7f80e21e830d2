use ornaments_core::Point;

/// Grid connectivity used to enumerate neighbouring cells.
///
/// Custom grid domains use this to fill the buffer handed to
/// [`Domain::neighbors`](crate::Domain::neighbors).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbors {
    /// 4-directional: up, right, down, left.
    Cardinal,
    /// 8-directional, clockwise from up.
    All,
}

impl Neighbors {
    /// Append the neighbours of `p` for which `keep` returns `true`.
    pub fn collect_into(self, p: Point, buf: &mut Vec<Point>, keep: impl Fn(Point) -> bool) {
        match self {
            Self::Cardinal => buf.extend(p.neighbors_4().into_iter().filter(|&n| keep(n))),
            Self::All => buf.extend(p.neighbors_8().into_iter().filter(|&n| keep(n))),
        }
    }

    /// Whether `to` is one move away from `from` under this connectivity.
    #[inline]
    pub fn adjacent(self, from: Point, to: Point) -> bool {
        let d = to - from;
        match self {
            Self::Cardinal => d.x.abs() + d.y.abs() == 1,
            Self::All => d != Point::ZERO && d.x.abs() <= 1 && d.y.abs() <= 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ornaments_core::Range;

    #[test]
    fn cardinal_in_corner() {
        let bounds = Range::with_size(3, 3);
        let mut buf = Vec::new();
        Neighbors::Cardinal.collect_into(Point::ZERO, &mut buf, |n| bounds.contains(n));
        assert_eq!(buf, vec![Point::new(1, 0), Point::new(0, 1)]);
    }

    #[test]
    fn all_in_centre() {
        let mut buf = Vec::new();
        Neighbors::All.collect_into(Point::new(1, 1), &mut buf, |_| true);
        assert_eq!(buf.len(), 8);
        assert!(buf.iter().all(|&n| Neighbors::All.adjacent(Point::new(1, 1), n)));
    }

    #[test]
    fn adjacency() {
        let p = Point::new(2, 2);
        assert!(Neighbors::Cardinal.adjacent(p, Point::new(2, 3)));
        assert!(!Neighbors::Cardinal.adjacent(p, Point::new(3, 3)));
        assert!(Neighbors::All.adjacent(p, Point::new(3, 3)));
        assert!(!Neighbors::All.adjacent(p, p));
        assert!(!Neighbors::All.adjacent(p, Point::new(4, 2)));
    }
}
