use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Deref, DerefMut, Mul, Sub, SubAssign};

use super::*;
use crate::morph_error::MorphError;

/// ordered point sequence, a section polyline or soma contour
///
/// broadcast operations with a single [`Point`] never change its length
#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Points(pub Vec<Point>);

impl Points {
    pub fn new() -> Self {
        Points(Vec::new())
    }

    /// translate every point by `rhs`
    pub fn add_in_place(&mut self, rhs: &Point) -> &mut Self {
        self.0.iter_mut().for_each(|point| {
            point.add_in_place(rhs);
        });
        self
    }

    pub fn sub_in_place(&mut self, rhs: &Point) -> &mut Self {
        self.0.iter_mut().for_each(|point| {
            point.sub_in_place(rhs);
        });
        self
    }

    pub fn scale_in_place<T: Factor>(&mut self, factor: T) -> &mut Self {
        self.0.iter_mut().for_each(|point| *point = point.scale(factor));
        self
    }

    pub fn center_of_gravity(&self) -> Result<Point, MorphError> {
        center_of_gravity(&self.0)
    }

    pub fn max_distance_to_center_of_gravity(&self) -> Result<FloatType, MorphError> {
        max_distance_to_center_of_gravity(&self.0)
    }
}

/// render every point as `x y z` on its own line
pub fn dump_points(points: &Points) -> String {
    points.to_string()
}

impl Display for Points {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for point in &self.0 {
            writeln!(f, "{}", point)?;
        }
        Ok(())
    }
}

impl Deref for Points {
    type Target = Vec<Point>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Points {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Point>> for Points {
    fn from(points: Vec<Point>) -> Self {
        Points(points)
    }
}

impl From<Vec<[FloatType; 3]>> for Points {
    fn from(coords: Vec<[FloatType; 3]>) -> Self {
        coords.into_iter().map(Point::from).collect()
    }
}

impl FromIterator<Point> for Points {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Points(iter.into_iter().collect())
    }
}

impl IntoIterator for Points {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Points {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Add<Point> for Points {
    type Output = Points;

    fn add(mut self, rhs: Point) -> Points {
        self.add_in_place(&rhs);
        self
    }
}

impl Add<&Point> for &Points {
    type Output = Points;

    fn add(self, rhs: &Point) -> Points {
        self.0.iter().map(|point| point + rhs).collect()
    }
}

impl Sub<Point> for Points {
    type Output = Points;

    fn sub(mut self, rhs: Point) -> Points {
        self.sub_in_place(&rhs);
        self
    }
}

impl Sub<&Point> for &Points {
    type Output = Points;

    fn sub(self, rhs: &Point) -> Points {
        self.0.iter().map(|point| point - rhs).collect()
    }
}

impl AddAssign<Point> for Points {
    fn add_assign(&mut self, rhs: Point) {
        self.add_in_place(&rhs);
    }
}

impl SubAssign<Point> for Points {
    fn sub_assign(&mut self, rhs: Point) {
        self.sub_in_place(&rhs);
    }
}

impl<T: Factor> Mul<T> for Points {
    type Output = Points;

    fn mul(mut self, factor: T) -> Points {
        self.scale_in_place(factor);
        self
    }
}

impl<T: Factor> Mul<T> for &Points {
    type Output = Points;

    fn mul(self, factor: T) -> Points {
        self.0.iter().map(|point| point.scale(factor)).collect()
    }
}

#[cfg(test)]
mod test_points {
    use super::*;

    fn contour() -> Points {
        Points::from(vec![[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [1.0, 3.0, 0.0]])
    }

    #[test]
    fn test_broadcast_keeps_length() {
        let shift = Point::new(1.0, -1.0, 0.5);
        let points = contour();
        assert_eq!((&points + &shift).len(), points.len());
        assert_eq!((&points - &shift).len(), points.len());
        assert_eq!((points.clone() + shift).len(), 3);
        assert_eq!((&points * 3).len(), 3);

        let empty = Points::new();
        assert!((&empty + &shift).is_empty());
        assert!((empty - shift).is_empty());
    }

    #[test]
    fn test_broadcast_applies_to_each_point() {
        let shift = Point::new(1.0, 1.0, 1.0);
        let moved = contour() + shift;
        assert_eq!(
            moved,
            Points::from(vec![[1.0, 1.0, 1.0], [3.0, 1.0, 1.0], [2.0, 4.0, 1.0]])
        );
        assert_eq!(&moved - &shift, contour());
    }

    #[test]
    fn test_in_place_broadcast() {
        let mut points = contour();
        points
            .add_in_place(&Point::new(0.0, 0.0, 2.0))
            .scale_in_place(0.5);
        points -= Point::new(0.0, 0.0, 1.0);
        assert_eq!(
            points,
            Points::from(vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 1.5, 0.0]])
        );
        points += Point::new(1.0, 0.0, 0.0);
        assert_eq!(points[0], Point::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_dump_points() {
        let points = contour();
        assert_eq!(dump_points(&points), "0 0 0\n2 0 0\n1 3 0\n");
        assert_eq!(dump_points(&points), points.to_string());
        assert_eq!(dump_points(&Points::new()), "");
    }

    #[test]
    fn test_statistics_methods() {
        let points = contour();
        assert_eq!(points.center_of_gravity().unwrap(), Point::new(1.0, 1.0, 0.0));
        assert_eq!(points.max_distance_to_center_of_gravity().unwrap(), 2.0);
        assert!(Points::new().center_of_gravity().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_transparent_sequence() {
        let points = Points::from(vec![[1.0, 2.0, 3.0]]);
        let json = serde_json::to_string(&points).unwrap();
        assert_eq!(json, r#"[{"x":1.0,"y":2.0,"z":3.0}]"#);
        let back: Points = serde_json::from_str(&json).unwrap();
        assert_eq!(back, points);
    }
}
