use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, Sub, SubAssign};

use float_cmp::ApproxEq;

use super::*;

/// morphology coord in 3D space
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: FloatType,
    pub y: FloatType,
    pub z: FloatType,
}

impl Point {
    pub fn new(x: FloatType, y: FloatType, z: FloatType) -> Self {
        Point { x, y, z }
    }

    /// add `rhs` to self, return self for chaining
    pub fn add_in_place(&mut self, rhs: &Point) -> &mut Self {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
        self
    }

    /// subtract `rhs` from self, return self for chaining
    pub fn sub_in_place(&mut self, rhs: &Point) -> &mut Self {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
        self
    }

    /// divide every component by `factor`, zero factor gives inf or NaN
    pub fn div_in_place<T: Factor>(&mut self, factor: T) -> &mut Self {
        let factor = factor.to_float();
        self.x /= factor;
        self.y /= factor;
        self.z /= factor;
        self
    }

    /// multiply every component by `factor`
    pub fn scale<T: Factor>(&self, factor: T) -> Point {
        let factor = factor.to_float();
        Point::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// new point with every component divided by `factor`
    pub fn divide<T: Factor>(&self, factor: T) -> Point {
        let mut point = *self;
        point.div_in_place(factor);
        point
    }

    /// euclidean length from origin
    pub fn norm(&self) -> FloatType {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn distance(&self, other: &Point) -> FloatType {
        distance(self, other)
    }
}

/// Euclidean distance between two points
pub fn distance(left: &Point, right: &Point) -> FloatType {
    (left - right).norm()
}

/// render point as `x y z`
pub fn dump_point(point: &Point) -> String {
    point.to_string()
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

impl From<[FloatType; 3]> for Point {
    fn from([x, y, z]: [FloatType; 3]) -> Self {
        Point::new(x, y, z)
    }
}

impl From<Point> for [FloatType; 3] {
    fn from(point: Point) -> Self {
        [point.x, point.y, point.z]
    }
}

impl Index<usize> for Point {
    type Output = FloatType;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("point component index out of range: {}", index),
        }
    }
}

impl IndexMut<usize> for Point {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("point component index out of range: {}", index),
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(mut self, rhs: Point) -> Point {
        self.add_in_place(&rhs);
        self
    }
}

impl Add<&Point> for &Point {
    type Output = Point;

    fn add(self, rhs: &Point) -> Point {
        *self + *rhs
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(mut self, rhs: Point) -> Point {
        self.sub_in_place(&rhs);
        self
    }
}

impl Sub<&Point> for &Point {
    type Output = Point;

    fn sub(self, rhs: &Point) -> Point {
        *self - *rhs
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.add_in_place(&rhs);
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.sub_in_place(&rhs);
    }
}

impl<T: Factor> DivAssign<T> for Point {
    fn div_assign(&mut self, factor: T) {
        self.div_in_place(factor);
    }
}

impl<T: Factor> Mul<T> for Point {
    type Output = Point;

    fn mul(self, factor: T) -> Point {
        self.scale(factor)
    }
}

impl<T: Factor> Div<T> for Point {
    type Output = Point;

    fn div(self, factor: T) -> Point {
        self.divide(factor)
    }
}

// factor * point, generic impl over T is not allowed by orphan rules
macro_rules! impl_commuted_scale {
    ( $( $t:ty ),* ) => {
        $(
            impl Mul<Point> for $t {
                type Output = Point;

                fn mul(self, point: Point) -> Point {
                    point.scale(self)
                }
            }
        )*
    };
}

impl_commuted_scale!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl ApproxEq for Point {
    type Margin = FloatMargin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.x.approx_eq(other.x, margin)
            && self.y.approx_eq(other.y, margin)
            && self.z.approx_eq(other.z, margin)
    }
}
