use crate::grid::Direction;

/// Ring-buffer slot count. One slot is kept empty to distinguish full from
/// empty, so 9 intents fit. At most one intent is consumed per simulation
/// tick and ticks run at ~100 Hz, so this is far above anything a player can
/// produce between ticks.
pub const MAX_INPUTS: usize = 10;

/// A fixed-capacity FIFO of directional intents.
///
/// Decouples key presses from the simulation tick so no input that arrives
/// between ticks is lost. Overflow silently drops the newest intent; the
/// inputs that did fit keep their order.
#[derive(Debug, Clone)]
pub struct InputQueue {
    queue: [Direction; MAX_INPUTS],
    head: usize,
    tail: usize,
}

impl InputQueue {
    pub fn new() -> Self {
        InputQueue {
            // Placeholder values; slots are only read between head and tail.
            queue: [Direction::North; MAX_INPUTS],
            head: 0,
            tail: 0,
        }
    }

    pub fn enqueue(&mut self, dir: Direction) {
        let next_tail = (self.tail + 1) % MAX_INPUTS;
        if next_tail != self.head {
            self.queue[self.tail] = dir;
            self.tail = next_tail;
        }
    }

    pub fn dequeue(&mut self) -> Option<Direction> {
        if self.head == self.tail {
            return None;
        }
        let dir = self.queue[self.head];
        self.head = (self.head + 1) % MAX_INPUTS;
        Some(dir)
    }

    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        InputQueue::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_queue_returns_none() {
        let mut queue = InputQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn fifo_order() {
        let mut queue = InputQueue::new();
        queue.enqueue(Direction::North);
        queue.enqueue(Direction::East);
        queue.enqueue(Direction::South);

        assert_eq!(queue.dequeue(), Some(Direction::North));
        assert_eq!(queue.dequeue(), Some(Direction::East));
        assert_eq!(queue.dequeue(), Some(Direction::South));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn overflow_drops_newest_and_keeps_order() {
        let mut queue = InputQueue::new();
        for _ in 0..MAX_INPUTS - 1 {
            queue.enqueue(Direction::West);
        }
        // Queue is full now; this one is dropped.
        queue.enqueue(Direction::East);

        let mut drained = vec![];
        while let Some(dir) = queue.dequeue() {
            drained.push(dir);
        }
        assert_eq!(drained.len(), MAX_INPUTS - 1);
        assert!(drained.iter().all(|&d| d == Direction::West));
    }

    #[test]
    fn wraps_around() {
        let mut queue = InputQueue::new();
        for i in 0..100 {
            let dir = if i % 2 == 0 {
                Direction::North
            } else {
                Direction::South
            };
            queue.enqueue(dir);
            assert_eq!(queue.dequeue(), Some(dir));
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn clear_empties_the_queue() {
        let mut queue = InputQueue::new();
        queue.enqueue(Direction::North);
        queue.enqueue(Direction::East);
        queue.clear();
        assert_eq!(queue.dequeue(), None);
    }
}
