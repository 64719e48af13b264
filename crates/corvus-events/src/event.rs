use corvus_time::TimeStamp;

/// Index of a live event slot in the queue's arena.
///
/// Ids never escape the crate; the bus only sees queue-level views of the
/// head event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EventId(u32);

impl EventId {
    pub(crate) fn from_index(index: usize) -> EventId {
        EventId(index as u32)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// One scheduled occurrence: device `device` on interrupt line
/// `interrupt_line` completes its operation (or raises its interrupt) at
/// `occurs_at`.
///
/// `occurs_at`, `interrupt_line` and `device` are fixed at construction.
/// Only the successor link changes afterwards, and only the owning queue
/// changes it.
#[derive(Debug)]
pub(crate) struct Event {
    occurs_at: TimeStamp,
    interrupt_line: u8,
    device: u8,
    next: Option<EventId>,
}

impl Event {
    pub(crate) fn new(occurs_at: TimeStamp, interrupt_line: u8, device: u8) -> Self {
        Self {
            occurs_at,
            interrupt_line,
            device,
            next: None,
        }
    }

    pub(crate) fn occurs_at(&self) -> TimeStamp {
        self.occurs_at
    }

    pub(crate) fn interrupt_line(&self) -> u8 {
        self.interrupt_line
    }

    pub(crate) fn device(&self) -> u8 {
        self.device
    }

    pub(crate) fn next(&self) -> Option<EventId> {
        self.next
    }

    /// Makes `next` this node's successor. Used both to link a new node in
    /// front of the current head and as half of the queue's splice-after;
    /// keeping the chain well formed is the queue's responsibility.
    pub(crate) fn link_before(&mut self, next: Option<EventId>) {
        self.next = next;
    }
}
