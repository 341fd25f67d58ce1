use super::*;
use dgeo_entities as e;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Invalid stop id '{0}'")]
    StopId(String),
    #[error("Invalid coordinate ({lat}, {lng})")]
    Coordinate { lat: f64, lng: f64 },
    #[error("Unknown weekday '{0}'")]
    Weekday(String),
}

impl From<e::geo::MapPoint> for Coordinate {
    fn from(from: e::geo::MapPoint) -> Self {
        let (lat, lng) = from.to_lat_lng_deg();
        Self { lat, lng }
    }
}

impl TryFrom<Coordinate> for e::geo::MapPoint {
    type Error = ConversionError;

    fn try_from(from: Coordinate) -> Result<Self, Self::Error> {
        let Coordinate { lat, lng } = from;
        e::geo::MapPoint::try_from_lat_lng_deg(lat, lng)
            .ok_or(ConversionError::Coordinate { lat, lng })
    }
}

impl From<e::stop::StopKind> for StopKind {
    fn from(from: e::stop::StopKind) -> Self {
        use e::stop::StopKind as E;
        match from {
            E::Order => Self::Order,
            E::RecurringService => Self::RecurringService,
        }
    }
}

impl From<StopKind> for e::stop::StopKind {
    fn from(from: StopKind) -> Self {
        match from {
            StopKind::Order => Self::Order,
            StopKind::RecurringService => Self::RecurringService,
        }
    }
}

impl From<e::stop::Stop> for Stop {
    fn from(from: e::stop::Stop) -> Self {
        let e::stop::Stop {
            id,
            kind,
            pos,
            manual_order,
        } = from;
        let (lat, lng) = pos.map(e::geo::MapPoint::to_lat_lng_deg).unzip();
        Self {
            id: id.into(),
            kind: kind.into(),
            lat,
            lng,
            manual_order,
        }
    }
}

impl TryFrom<Stop> for e::stop::Stop {
    type Error = ConversionError;

    fn try_from(from: Stop) -> Result<Self, Self::Error> {
        let Stop {
            id,
            kind,
            lat,
            lng,
            manual_order,
        } = from;
        let id = e::id::Id::from(id);
        if !id.is_valid() {
            return Err(ConversionError::StopId(id.into()));
        }
        // A single coordinate component is as good as none
        let pos = match (lat, lng) {
            (Some(lat), Some(lng)) => Some(Coordinate { lat, lng }.try_into()?),
            _ => None,
        };
        Ok(Self {
            id,
            kind: kind.into(),
            pos,
            manual_order,
        })
    }
}

fn parse_weekdays(labels: Vec<String>) -> Result<Vec<e::weekday::Weekday>, ConversionError> {
    labels
        .into_iter()
        .map(|label| {
            label
                .trim()
                .parse()
                .map_err(|_| ConversionError::Weekday(label))
        })
        .collect()
}

fn weekday_labels(days: Vec<e::weekday::Weekday>) -> Vec<String> {
    days.into_iter().map(|day| day.to_string()).collect()
}

impl From<e::stop::RecurringStop> for RecurringStop {
    fn from(from: e::stop::RecurringStop) -> Self {
        let e::stop::RecurringStop { stop, service_days } = from;
        Self {
            stop: stop.into(),
            service_days: weekday_labels(service_days),
        }
    }
}

impl TryFrom<RecurringStop> for e::stop::RecurringStop {
    type Error = ConversionError;

    fn try_from(from: RecurringStop) -> Result<Self, Self::Error> {
        let RecurringStop { stop, service_days } = from;
        Ok(Self {
            stop: stop.try_into()?,
            service_days: parse_weekdays(service_days)?,
        })
    }
}

impl From<e::zone::Zone> for Zone {
    fn from(from: e::zone::Zone) -> Self {
        let e::zone::Zone {
            id,
            name,
            boundary,
            operative_days,
            active,
            created_at,
        } = from;
        Self {
            id: id.to_inner(),
            name,
            boundary,
            operative_days: weekday_labels(operative_days),
            active,
            created: created_at.as_millis(),
        }
    }
}

impl TryFrom<NewZone> for e::zone::ZoneProperties {
    type Error = ConversionError;

    fn try_from(from: NewZone) -> Result<Self, Self::Error> {
        let NewZone {
            name,
            boundary,
            operative_days,
            active,
        } = from;
        Ok(Self {
            name,
            boundary,
            operative_days: parse_weekdays(operative_days)?,
            active,
        })
    }
}
