/// Source of the wall-clock time stamped onto results and reminders.
pub trait Clock {
    fn now(&self) -> jiff::Zoned;
}

/// The system clock in the local time zone.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> jiff::Zoned {
        jiff::Zoned::now()
    }
}

/// Always reports the same instant.
pub struct FixedClock(pub jiff::Zoned);

impl Clock for FixedClock {
    fn now(&self) -> jiff::Zoned {
        self.0.clone()
    }
}
