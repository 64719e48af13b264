use corvus_time::TimeStamp;

use crate::error::{Result, ScheduleError};
use crate::event::{Event, EventId};

/// Time-ordered queue of pending device events for one system bus.
///
/// Events live in a slot arena owned by the queue and are chained through
/// successor indices in non-decreasing `occurs_at` order. Two tie-break
/// rules apply to events sharing a timestamp, and callers may rely on both:
///
/// - **Front (LIFO)**: an insertion whose time is `<=` the current head's
///   time becomes the new head, so a same-tick event scheduled later is
///   dispatched first. This lets bus logic process same-tick secondary
///   events without a second chain walk.
/// - **Interior (FIFO)**: an insertion routed through the ordered walk lands
///   *after* every already-queued event with the same time.
///
/// Insertion also keeps a weak hint to the most recently inserted node and
/// starts the ordered walk there whenever the new event sorts at or after
/// it, which makes the common near-monotonic scheduling pattern O(1)
/// amortized instead of a full scan. The hint is repointed to the head
/// whenever the node it referenced is removed, so it never dangles.
#[derive(Debug, Default)]
pub struct EventQueue {
    /// Slot arena; `None` slots are free and their indices are in `free`.
    slots: Vec<Option<Event>>,
    free: Vec<EventId>,
    head: Option<EventId>,
    last_insertion: Option<EventId>,
    len: usize,
    capacity: Option<usize>,
}

impl EventQueue {
    /// An empty, unbounded queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty queue that refuses insertions beyond `capacity` pending
    /// events, surfacing [`ScheduleError::CapacityExceeded`] instead of
    /// growing. Deployments emulating a fixed-size machine configuration use
    /// this to turn runaway device models into a diagnosable error.
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Time of the next due event, or `None` if nothing is pending.
    pub fn head_time(&self) -> Option<TimeStamp> {
        self.head.map(|id| self.node(id).occurs_at())
    }

    /// Interrupt line of the next due event; 0 if nothing is pending.
    pub fn head_interrupt_line(&self) -> u8 {
        self.head.map_or(0, |id| self.node(id).interrupt_line())
    }

    /// Device number of the next due event; 0 if nothing is pending.
    pub fn head_device(&self) -> u8 {
        self.head.map_or(0, |id| self.node(id).device())
    }

    /// Schedules device `device` on interrupt line `interrupt_line` to occur
    /// `increment` cycles after `base`, and returns the computed occurrence
    /// time so the caller can log it or program a device register with it.
    ///
    /// On error the queue is left untouched.
    pub fn insert(
        &mut self,
        base: TimeStamp,
        increment: u64,
        interrupt_line: u8,
        device: u8,
    ) -> Result<TimeStamp> {
        let occurs_at = base
            .checked_add(increment)
            .ok_or(ScheduleError::InvalidIncrement { base, increment })?;
        if let Some(capacity) = self.capacity {
            if self.len >= capacity {
                return Err(ScheduleError::CapacityExceeded { capacity });
            }
        }

        let id = self.alloc(Event::new(occurs_at, interrupt_line, device));
        match self.head {
            None => {
                self.head = Some(id);
            }
            Some(head) if occurs_at <= self.node(head).occurs_at() => {
                // Same-tick or earlier than the head: the new event jumps in
                // front (LIFO tie-break at the front).
                self.node_mut(id).link_before(Some(head));
                self.head = Some(id);
            }
            Some(head) => {
                // The anchor is known to satisfy `anchor.occurs_at <=
                // occurs_at`: the head does because the front case was ruled
                // out, and the hint is only used when the new event sorts at
                // or after it.
                let anchor = match self.last_insertion {
                    Some(last) if !(occurs_at <= self.node(last).occurs_at()) => last,
                    _ => head,
                };
                let mut pred = anchor;
                while let Some(next) = self.node(pred).next() {
                    if self.node(next).occurs_at() <= occurs_at {
                        pred = next;
                    } else {
                        break;
                    }
                }
                self.splice_after(pred, id);
            }
        }
        self.last_insertion = Some(id);
        self.len += 1;
        Ok(occurs_at)
    }

    /// Retires the next due event. Safe no-op on an empty queue, so a
    /// dispatch loop may drain unconditionally.
    pub fn remove_head(&mut self) {
        let Some(head) = self.head else {
            return;
        };
        let next = self.node(head).next();
        self.head = next;
        if self.last_insertion == Some(head) {
            // Keep the search hint pointing at a live node (or nothing).
            self.last_insertion = next;
        }
        self.release(head);
        self.len -= 1;
    }

    fn node(&self, id: EventId) -> &Event {
        self.slots[id.index()]
            .as_ref()
            .expect("event id refers to a live slot")
    }

    fn node_mut(&mut self, id: EventId) -> &mut Event {
        self.slots[id.index()]
            .as_mut()
            .expect("event id refers to a live slot")
    }

    /// Standard splice-after: `node` takes `pred`'s successor and becomes
    /// `pred`'s successor.
    fn splice_after(&mut self, pred: EventId, node: EventId) {
        let succ = self.node(pred).next();
        self.node_mut(node).link_before(succ);
        self.node_mut(pred).link_before(Some(node));
    }

    fn alloc(&mut self, event: Event) -> EventId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.index()] = Some(event);
                id
            }
            None => {
                let id = EventId::from_index(self.slots.len());
                self.slots.push(Some(event));
                id
            }
        }
    }

    fn release(&mut self, id: EventId) {
        self.slots[id.index()] = None;
        self.free.push(id);
    }
}
