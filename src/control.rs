use std::fmt::Display;

use nalgebra::Point2;

/// Control represents point through which spline curve passes.
/// - `key` - independent coordinate (x axis),
/// - `value` - dependent coordinate (y axis).
///
/// Two controls are equal when both coordinates are equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Control {
    point: Point2<f64>,
}

impl Control {
    /// # Example
    /// ```
    /// use monotone_spline::Control;
    ///
    /// let control = Control::new(0.25, 19.131026);
    /// assert_eq!(0.25, control.get_key());
    /// assert_eq!(19.131026, control.get_value());
    /// ```
    pub fn new(key: f64, value: f64) -> Self {
        Control { point: Point2::new(key, value) }
    }

    pub fn get_key(&self) -> f64 {
        self.point.x
    }

    pub fn get_value(&self) -> f64 {
        self.point.y
    }

    /// Control as a point with `x` being key and `y` being value.
    pub fn as_point(&self) -> Point2<f64> {
        self.point
    }
}

impl From<(f64, f64)> for Control {
    fn from((key, value): (f64, f64)) -> Self {
        Control::new(key, value)
    }
}

impl From<Point2<f64>> for Control {
    fn from(point: Point2<f64>) -> Self {
        Control { point }
    }
}

impl Display for Control {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.get_key(), self.get_value())
    }
}

/// Orders controls by key only. Stable sorts keep equal keys in insertion order.
pub(crate) fn cmp_by_key(lhs: &Control, rhs: &Control) -> std::cmp::Ordering {
    lhs.get_key().total_cmp(&rhs.get_key())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let control = Control::new(0.75, 5.7298435);

        assert_eq!(0.75, control.point.x);
        assert_eq!(5.7298435, control.point.y);
    }

    #[test]
    fn test_from_tuple() {
        let control = Control::from((1.0, 2.627706));

        assert_eq!(1.0, control.get_key());
        assert_eq!(2.627706, control.get_value());
    }

    #[test]
    fn test_point_conversion() {
        let point = Point2::new(-2.0, 3.5);
        let control = Control::from(point);

        assert_eq!(point, control.as_point());
        assert_eq!(-2.0, control.get_key());
        assert_eq!(3.5, control.get_value());
    }

    #[test]
    fn test_equality_uses_both_coordinates() {
        assert_eq!(Control::new(1.0, 2.0), Control::new(1.0, 2.0));
        assert_ne!(Control::new(1.0, 2.0), Control::new(1.0, 3.0));
        assert_ne!(Control::new(1.0, 2.0), Control::new(0.0, 2.0));
    }

    #[test]
    fn test_cmp_by_key_ignores_value() {
        use std::cmp::Ordering;

        let low = Control::new(0.0, 10.0);
        let high = Control::new(1.0, -10.0);

        assert_eq!(Ordering::Less, cmp_by_key(&low, &high));
        assert_eq!(Ordering::Greater, cmp_by_key(&high, &low));
        assert_eq!(Ordering::Equal, cmp_by_key(&low, &Control::new(0.0, 3.0)));
    }

    #[test]
    fn test_display() {
        assert_eq!("(0.5, 10.58543)", Control::new(0.5, 10.58543).to_string());
    }
}
