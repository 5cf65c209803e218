//! Fixed-capacity trail of a body's past positions
//!
//! A FIFO sliding window: once the buffer is full, every push drops the
//! oldest entry. Iteration order is oldest first, newest last. Backed by a
//! ring buffer, so a push is O(1) while keeping exact shift-register FIFO
//! semantics.

use std::collections::VecDeque;

use crate::simulation::states::{Body, NVec2};

/// One recorded position. Velocity and mass are irrelevant for rendering,
/// only the position and the radius at record time are kept.
#[derive(Debug, Clone)]
pub struct TrailPoint {
    pub x: NVec2, // recorded position
    pub radius: f64, // body radius when recorded
}

#[derive(Debug)]
pub struct Trajectory {
    points: VecDeque<TrailPoint>,
    capacity: usize,
}

impl Trajectory {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record `body`'s current position, dropping the oldest entry once
    /// the buffer is at capacity
    pub fn push(&mut self, body: &Body) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(TrailPoint {
            x: body.x,
            radius: body.radius,
        });
    }

    /// Oldest-to-newest iteration over the recorded points
    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
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
