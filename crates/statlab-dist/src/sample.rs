use serde::{Deserialize, Serialize};

/// One observation in a dataset.
///
/// `x` is the point's position (for generated data, its 1-based index in
/// generation order) and `y` the observed value. `y` is optional because
/// external producers may supply bare positions; such points are skipped by
/// every numeric consumer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

/// An ordered sequence of observations.
///
/// Order is insertion (generation) order and the sequence is never mutated
/// after creation; a new dataset replaces the old one wholesale. The empty
/// sample is valid and represents the "no data yet" state.
///
/// # Examples
///
/// ```
/// use statlab_dist::Sample;
///
/// let sample = Sample::from_values(vec![4.0, 2.0, 7.0]);
/// assert_eq!(sample.len(), 3);
/// assert_eq!(sample.points()[1].x, 2.0);
/// assert_eq!(sample.values(), vec![4.0, 2.0, 7.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sample {
    points: Vec<DataPoint>,
}

impl Sample {
    /// Creates a sample from raw data points, preserving their order.
    #[must_use]
    pub fn from_points(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    /// Creates a sample from plain values, assigning 1-based x positions.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let points = values
            .into_iter()
            .enumerate()
            .map(|(i, y)| DataPoint {
                x: (i + 1) as f64,
                y: Some(y),
            })
            .collect();
        Self { points }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Extracts the observed values, skipping points without a `y`.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().filter_map(|point| point.y).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_values_assigns_one_based_positions() {
        let sample = Sample::from_values(vec![10.0, 20.0]);
        assert_eq!(sample.points()[0].x, 1.0);
        assert_eq!(sample.points()[1].x, 2.0);
        assert_eq!(sample.points()[0].y, Some(10.0));
    }

    #[test]
    fn values_skips_points_without_y() {
        let sample = Sample::from_points(vec![
            DataPoint { x: 1.0, y: Some(5.0) },
            DataPoint { x: 2.0, y: None },
            DataPoint { x: 3.0, y: Some(7.0) },
        ]);
        assert_eq!(sample.values(), vec![5.0, 7.0]);
    }

    #[test]
    fn json_shape_matches_boundary_contract() {
        let sample = Sample::from_values(vec![1.5]);
        let json = serde_json::to_string(&sample).unwrap();
        assert_eq!(json, r#"[{"x":1.0,"y":1.5}]"#);

        let bare: Sample = serde_json::from_str(r#"[{"x":1.0},{"x":2.0,"y":3.0}]"#).unwrap();
        assert_eq!(bare.len(), 2);
        assert_eq!(bare.values(), vec![3.0]);
    }
}
