use log::{debug, trace};
use thiserror::Error;

use crate::{control::{cmp_by_key, Control}, hermite};

/// Ordered set of controls with monotone cubic Hermite interpolation between them.
///
/// Controls are kept sorted by key after every mutation. Tangents are estimated from
/// neighbouring secants and limited with the Fritsch-Carlson criterion on each query,
/// nothing is cached between queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonotoneSpline {
    controls: Vec<Control>,
}

impl MonotoneSpline {
    /// Creates spline from controls given in any order.
    pub fn new(controls: Vec<Control>) -> Self {
        let mut spline = MonotoneSpline { controls };
        spline.sort_controls();
        spline
    }

    /// Creates `size` controls with keys evenly spaced over `[0, 1]` and value 0.
    /// # Example
    /// ```
    /// use monotone_spline::MonotoneSpline;
    ///
    /// let spline = MonotoneSpline::with_count(5);
    /// assert_eq!(vec![0.0, 0.25, 0.5, 0.75, 1.0], spline.control_keys());
    /// assert_eq!(0.0, spline.interpolate(0.3).unwrap());
    /// ```
    pub fn with_count(size: usize) -> Self {
        let step = if size > 1 { 1.0 / (size - 1) as f64 } else { 0.0 };
        let controls = (0..size)
            .map(|i| Control::new(step * i as f64, 0.0))
            .collect();
        MonotoneSpline { controls }
    }

    /// Spline can be evaluated only with at least 2 controls.
    pub fn is_valid(&self) -> bool {
        self.controls.len() >= 2
    }

    pub fn size(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// # Errors
    /// [SplineError::OutOfRange] when `index` is not lower than [MonotoneSpline::size].
    pub fn control(&self, index: usize) -> Result<Control, SplineError> {
        self.check_index(index)?;
        Ok(self.controls[index])
    }

    /// Replaces control at `index`. Controls are sorted afterwards, so replaced control
    /// may end up at a different index.
    /// # Example
    /// ```
    /// use monotone_spline::{Control, MonotoneSpline};
    ///
    /// let mut spline = MonotoneSpline::with_count(3);
    /// spline.set_control(0, Control::new(2.0, 1.0)).unwrap();
    ///
    /// assert_eq!(vec![0.5, 1.0, 2.0], spline.control_keys());
    /// assert!(spline.set_control(3, Control::new(0.0, 0.0)).is_err());
    /// ```
    pub fn set_control(&mut self, index: usize, control: Control) -> Result<(), SplineError> {
        self.check_index(index)?;
        self.controls[index] = control;
        self.sort_controls();
        Ok(())
    }

    pub fn add_control(&mut self, control: Control) {
        self.controls.push(control);
        self.sort_controls();
    }

    /// Removes and returns control at `index`. Spline may become invalid.
    pub fn remove_control(&mut self, index: usize) -> Result<Control, SplineError> {
        self.check_index(index)?;
        Ok(self.controls.remove(index))
    }

    /// Removes all controls equal to `control` and returns how many were removed.
    pub fn remove_matching(&mut self, control: &Control) -> usize {
        let size = self.controls.len();
        self.controls.retain(|c| c != control);
        let removed = size - self.controls.len();
        if removed > 0 {
            debug!("removed {} control(s) equal to {}, {} left", removed, control, self.controls.len());
        }
        removed
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn set_controls(&mut self, controls: Vec<Control>) {
        self.controls = controls;
        self.sort_controls();
    }

    pub fn control_keys(&self) -> Vec<f64> {
        self.controls.iter().map(|c| c.get_key()).collect()
    }

    pub fn control_values(&self) -> Vec<f64> {
        self.controls.iter().map(|c| c.get_value()).collect()
    }

    /// Lowest and highest key, `None` for spline without controls.
    pub fn key_range(&self) -> Option<(f64, f64)> {
        match (self.controls.first(), self.controls.last()) {
            (Some(first), Some(last)) => Some((first.get_key(), last.get_key())),
            _ => None,
        }
    }

    /// Resamples the curve at `size` evenly spaced keys over the current key range
    /// and replaces controls with those samples. Does nothing if `size` equals
    /// current number of controls.
    /// # Example
    /// ```
    /// use monotone_spline::{Control, MonotoneSpline};
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let mut spline = MonotoneSpline::new(vec![Control::new(0.0, 0.0), Control::new(2.0, 4.0)]);
    /// spline.reshape(3).unwrap();
    ///
    /// assert_eq!(vec![0.0, 1.0, 2.0], spline.control_keys());
    /// assert_approx_eq!(2.0, spline.control(1).unwrap().get_value(), 1e-12);
    /// ```
    /// # Errors
    /// [SplineError::InvalidState] when the size changes and spline has less than 2 controls.
    pub fn reshape(&mut self, size: usize) -> Result<(), SplineError> {
        if size == self.controls.len() {
            return Ok(());
        }
        let controls = self.sample(size)?;
        debug!("reshaped spline from {} to {} controls", self.controls.len(), size);
        self.controls = controls;
        Ok(())
    }

    /// Monotone cubic interpolation at `t`. Values outside of key range are clamped
    /// to the first or last control value.
    /// # Errors
    /// [SplineError::InvalidState] when spline has less than 2 controls.
    pub fn interpolate(&self, t: f64) -> Result<f64, SplineError> {
        self.check_valid()?;

        match self.evaluate_on_boundaries(t) {
            Some(result) => Ok(result),
            None => {
                let index = self.find_segment_index(t);
                Ok(self.evaluate_segment(index, t))
            },
        }
    }

    /// Interpolates every value of `t_vector`. Sorted input reuses previously found
    /// segment, results are the same as from [MonotoneSpline::interpolate].
    pub fn batch_interpolate(&self, t_vector: &[f64]) -> Result<Vec<f64>, SplineError> {
        self.check_valid()?;

        let mut results = Vec::with_capacity(t_vector.len());
        let mut index = 0;

        for t in t_vector {
            match self.evaluate_on_boundaries(*t) {
                Some(result) => results.push(result),
                None => {
                    index = self.find_segment_index_with_hint(index, *t);
                    results.push(self.evaluate_segment(index, *t));
                },
            }
        }
        Ok(results)
    }

    /// `count` controls lying on the curve with keys evenly spaced over the key range.
    /// Single sample is placed at the lowest key.
    pub fn sample(&self, count: usize) -> Result<Vec<Control>, SplineError> {
        self.check_valid()?;

        let (min_key, max_key) = match self.key_range() {
            Some(range) => range,
            None => return Err(SplineError::InvalidState { size: self.controls.len() }),
        };
        let step = if count > 1 { (max_key - min_key) / (count - 1) as f64 } else { 0.0 };

        let keys: Vec<f64> = (0..count)
            .map(|i| if i + 1 == count && count > 1 { max_key } else { min_key + step * i as f64 })
            .collect();
        let values = self.batch_interpolate(&keys)?;

        Ok(keys.into_iter()
            .zip(values)
            .map(|(key, value)| Control::new(key, value))
            .collect())
    }

    fn sort_controls(&mut self) {
        self.controls.sort_by(cmp_by_key);
    }

    fn check_valid(&self) -> Result<(), SplineError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(SplineError::InvalidState { size: self.controls.len() })
        }
    }

    fn check_index(&self, index: usize) -> Result<(), SplineError> {
        if index < self.controls.len() {
            Ok(())
        } else {
            Err(SplineError::OutOfRange { index, size: self.controls.len() })
        }
    }

    fn evaluate_on_boundaries(&self, t: f64) -> Option<f64> {
        let first = self.controls[0];
        let last = self.controls[self.controls.len() - 1];

        if t <= first.get_key() {
            trace!("t = {} clamped to first control {}", t, first);
            Some(first.get_value())
        } else if t >= last.get_key() {
            trace!("t = {} clamped to last control {}", t, last);
            Some(last.get_value())
        } else {
            None
        }
    }

    /// Index `i` of the segment with `key[i] <= t < key[i + 1]`. Segments of zero width never match.
    fn find_segment_index(&self, t: f64) -> usize {
        let last_segment = self.controls.len() - 2;
        self.controls
            .partition_point(|c| c.get_key() <= t)
            .saturating_sub(1)
            .min(last_segment)
    }

    fn find_segment_index_with_hint(&self, index_hint: usize, t: f64) -> usize {
        if self.is_in_segment(index_hint, t) {
            index_hint
        } else if self.is_in_segment(index_hint + 1, t) {
            index_hint + 1
        } else {
            self.find_segment_index(t)
        }
    }

    fn is_in_segment(&self, index: usize, t: f64) -> bool {
        index + 1 < self.controls.len()
            && self.controls[index].get_key() <= t
            && t < self.controls[index + 1].get_key()
    }

    fn evaluate_segment(&self, index: usize, t: f64) -> f64 {
        let p0 = &self.controls[index];
        let p1 = &self.controls[index + 1];
        let step = p1.get_key() - p0.get_key();
        let d = secant(p0, p1);

        let m0 = if index == 0 {
            d
        } else {
            tangent(secant(&self.controls[index - 1], p0), d)
        };
        let m1 = if index + 2 == self.controls.len() {
            d
        } else {
            tangent(d, secant(p1, &self.controls[index + 2]))
        };

        let (m0, m1) = if (p1.get_value() - p0.get_value()).abs() <= f64::EPSILON {
            trace!("flat segment between {} and {}", p0, p1);
            (0.0, 0.0)
        } else {
            limit_tangents(m0, m1, d)
        };

        let u = (t - p0.get_key()) / step;
        hermite::evaluate(p0.get_value(), m0, p1.get_value(), m1, step, u)
    }
}

/// Slope between two controls, 0 for controls sharing the key.
fn secant(p0: &Control, p1: &Control) -> f64 {
    let step = p1.get_key() - p0.get_key();
    if step <= 0.0 {
        return 0.0;
    }
    (p1.get_value() - p0.get_value()) / step
}

/// Tangent at a control between segments with secants `d0` and `d1`.
/// Local extremum gets zero slope.
fn tangent(d0: f64, d1: f64) -> f64 {
    if d0 * d1 < 0.0 {
        0.0
    } else {
        (d0 + d1) * 0.5
    }
}

/// Fritsch-Carlson limiter. `d` must be non-zero.
fn limit_tangents(m0: f64, m1: f64, d: f64) -> (f64, f64) {
    let a = (m0 / d).max(0.0);
    let b = (m1 / d).max(0.0);
    let m0 = if a > 0.0 { m0 } else { 0.0 };
    let m1 = if b > 0.0 { m1 } else { 0.0 };

    let radius_squared = a * a + b * b;
    if radius_squared > 9.0 {
        let gamma = 3.0 / radius_squared.sqrt();
        (gamma * a * d, gamma * b * d)
    } else {
        (m0, m1)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SplineError {
    #[error("Error in Spline: index {index} is out of range for {size} controls")]
    OutOfRange { index: usize, size: usize },
    #[error("Error in Spline: at least 2 controls are required, spline has {size}")]
    InvalidState { size: usize },
}
