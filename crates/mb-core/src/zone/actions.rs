//! Active-object queue

#[cfg(not(feature = "std"))]
use crate::compat::*;

use crate::host::Scheduler;
use crate::object::ObjectId;

/// Objects that take turns, in registration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionQueue {
    active: Vec<ObjectId>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.active.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

impl Scheduler for ActionQueue {
    fn add_active_object(&mut self, id: ObjectId) {
        if !self.contains(id) {
            self.active.push(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_is_idempotent() {
        let mut queue = ActionQueue::new();
        queue.add_active_object(ObjectId(3));
        queue.add_active_object(ObjectId(1));
        queue.add_active_object(ObjectId(3));
        assert_eq!(queue.len(), 2);
        assert!(queue.contains(ObjectId(1)));
        assert!(!queue.contains(ObjectId(2)));
        assert!(!queue.is_empty());
    }
}
