//! Bounded position history per body

use std::collections::VecDeque;

use nalgebra::Point3;

/// Most recent positions of one body, oldest first
///
/// # Examples
///
/// ```
/// use nalgebra::Point3;
/// use orrery::trail::Trail;
///
/// let mut trail = Trail::new(2);
/// trail.record(Point3::new(0.0, 0.0, 0.0));
/// trail.record(Point3::new(1.0, 0.0, 0.0));
/// trail.record(Point3::new(2.0, 0.0, 0.0));
///
/// assert_eq!(trail.len(), 2);
/// assert_eq!(trail.points().next(), Some(&Point3::new(1.0, 0.0, 0.0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trail {
    points: VecDeque<Point3<f64>>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a position, dropping the oldest once full
    ///
    /// A zero-capacity trail records nothing.
    pub fn record(&mut self, position: Point3<f64>) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(position);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> impl Iterator<Item = &Point3<f64>> {
        self.points.iter()
    }

    /// Positions as plain arrays, oldest first
    pub fn to_vec(&self) -> Vec<[f64; 3]> {
        self.points.iter().map(|p| [p.x, p.y, p.z]).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
