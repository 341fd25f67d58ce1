use crate::{geo::MapPoint, id::Id, weekday::Weekday};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum StopKind {
    Order,
    RecurringService,
}

/// A schedulable location on a driver's route.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id: Id,
    pub kind: StopKind,
    pub pos: Option<MapPoint>,
    /// Explicit position assigned by an operator.
    ///
    /// Values are not required to be contiguous.
    pub manual_order: Option<i64>,
}

impl Stop {
    pub fn is_geocoded(&self) -> bool {
        self.pos.is_some()
    }
}

/// A recurring service together with the weekdays on which it is due.
#[derive(Debug, Clone, PartialEq)]
pub struct RecurringStop {
    pub stop: Stop,
    pub service_days: Vec<Weekday>,
}

impl RecurringStop {
    pub fn is_due_on(&self, day: Weekday) -> bool {
        self.service_days.contains(&day)
    }
}
