use stayline_core::Booking;
use tokio::sync::watch;

/// A reactive cell holding one value.
///
/// Every write fully replaces the value and wakes all current subscribers,
/// once per write, in write order. There is no partial mutation: readers
/// either see the value before a write or the complete value after it.
#[derive(Debug)]
pub struct Slot<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> Slot<T> {
    fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Clone of the latest value. Never blocks and never returns a value
    /// older than the last completed write.
    pub fn read(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Live subscription. The receiver starts at the current value and is
    /// notified on every subsequent write.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    // Notifies even when the new value compares equal to the old one; the
    // store does not second-guess the writer.
    pub(crate) fn write(&self, value: T) {
        self.tx.send_replace(value);
    }
}

/// The two shared slots every view reads: the booking collection as of the
/// last successful list, and the booking currently targeted for editing.
///
/// [`BookingService`](crate::BookingService) is the sole writer; everything
/// else is a read-only observer.
#[derive(Debug)]
pub struct BookingStore {
    bookings: Slot<Vec<Booking>>,
    selection: Slot<Option<Booking>>,
}

impl BookingStore {
    pub(crate) fn new() -> Self {
        Self {
            bookings: Slot::new(Vec::new()),
            selection: Slot::new(None),
        }
    }

    pub fn read_bookings(&self) -> Vec<Booking> {
        self.bookings.read()
    }

    pub fn read_selection(&self) -> Option<Booking> {
        self.selection.read()
    }

    pub fn subscribe_bookings(&self) -> watch::Receiver<Vec<Booking>> {
        self.bookings.subscribe()
    }

    pub fn subscribe_selection(&self) -> watch::Receiver<Option<Booking>> {
        self.selection.subscribe()
    }

    pub(crate) fn write_bookings(&self, bookings: Vec<Booking>) {
        self.bookings.write(bookings);
    }

    pub(crate) fn write_selection(&self, selection: Option<Booking>) {
        self.selection.write(selection);
    }
}
