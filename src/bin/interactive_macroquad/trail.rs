use std::collections::VecDeque;

use macroquad::prelude::Vec2;

/// Render-side position history. The oldest point is dropped once full.
pub(crate) struct Trail {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl Trail {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub(crate) fn push(&mut self, point: Vec2) {
        if self.capacity == 0 {
            return;
        }
        while self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub(crate) fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.points.len()
    }
}
