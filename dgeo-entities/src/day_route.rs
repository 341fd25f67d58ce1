use crate::{weekday::Weekday, zone::ZoneId};

pub type DriverId = i64;

/// Assignment of a zone to a weekday, either for a single
/// driver or for all drivers that have no assignment of
/// their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRoute {
    pub id: i64,
    pub weekday: Weekday,
    pub zone_id: ZoneId,
    pub driver_id: Option<DriverId>,
    pub active: bool,
}

impl DayRoute {
    pub fn is_general(&self) -> bool {
        self.driver_id.is_none()
    }
}
