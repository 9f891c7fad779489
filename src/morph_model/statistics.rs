use super::*;
use crate::morph_error::{ErrorKind, MorphError};

/// arithmetic mean of `points`
///
/// fails with [`ErrorKind::EmptyInput`] when `points` is empty
#[tracing::instrument(level = "trace", skip_all, fields(count = points.len()))]
pub fn center_of_gravity(points: &[Point]) -> Result<Point, MorphError> {
    if points.is_empty() {
        tracing::debug!("center of gravity requested for empty point set");
        return Err(morph_err!(
            ErrorKind::EmptyInput,
            "can't compute center of gravity of zero points"
        ));
    }

    let mut sum = Point::default();
    for point in points {
        sum.add_in_place(point);
    }
    Ok(sum.divide(points.len()))
}

/// largest distance from the center of gravity to any of `points`
///
/// a NaN component anywhere makes the result NaN
#[tracing::instrument(level = "trace", skip_all, fields(count = points.len()))]
pub fn max_distance_to_center_of_gravity(points: &[Point]) -> Result<FloatType, MorphError> {
    let center = center_of_gravity(points)?;
    Ok(points
        .iter()
        .map(|point| distance(&center, point))
        .fold(0.0, |max, dist| {
            if dist.is_nan() || dist > max {
                dist
            } else {
                max
            }
        }))
}
