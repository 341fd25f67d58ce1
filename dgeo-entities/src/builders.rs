pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{stop_builder::*, zone_builder::*};

pub mod stop_builder {

    use super::*;
    use crate::{geo::*, id::*, stop::*};

    #[derive(Debug)]
    pub struct StopBuild {
        stop: Stop,
    }

    impl StopBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.stop.id = id.into();
            self
        }
        pub fn kind(mut self, kind: StopKind) -> Self {
            self.stop.kind = kind;
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.stop.pos = Some(pos);
            self
        }
        pub fn lat_lng(self, lat: f64, lng: f64) -> Self {
            self.pos(MapPoint::from_lat_lng_deg(lat, lng))
        }
        pub fn manual_order(mut self, order: i64) -> Self {
            self.stop.manual_order = Some(order);
            self
        }
        pub fn finish(self) -> Stop {
            self.stop
        }
    }

    impl Builder for Stop {
        type Build = StopBuild;
        fn build() -> Self::Build {
            StopBuild {
                stop: Stop {
                    id: Id::new(),
                    kind: StopKind::Order,
                    pos: None,
                    manual_order: None,
                },
            }
        }
    }
}

pub mod zone_builder {

    use super::*;
    use crate::{time::*, weekday::*, zone::*};

    #[derive(Debug)]
    pub struct ZoneBuild {
        zone: Zone,
    }

    impl ZoneBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.zone.id = ZoneId::new(id);
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.zone.name = name.into();
            self
        }
        pub fn boundary(mut self, geojson: &str) -> Self {
            self.zone.boundary = geojson.into();
            self
        }
        /// Axis-aligned rectangle given as (lng, lat) corners.
        pub fn rect(self, min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64) -> Self {
            let geojson = format!(
                r#"{{"type":"Polygon","coordinates":[[[{min_lng},{min_lat}],[{max_lng},{min_lat}],[{max_lng},{max_lat}],[{min_lng},{max_lat}],[{min_lng},{min_lat}]]]}}"#
            );
            self.boundary(&geojson)
        }
        pub fn operative_days(mut self, days: Vec<Weekday>) -> Self {
            self.zone.operative_days = days;
            self
        }
        pub fn active(mut self, active: bool) -> Self {
            self.zone.active = active;
            self
        }
        pub fn finish(self) -> Zone {
            self.zone
        }
    }

    impl Builder for Zone {
        type Build = ZoneBuild;
        fn build() -> Self::Build {
            ZoneBuild {
                zone: Zone {
                    id: ZoneId::new(0),
                    name: "".into(),
                    boundary: "".into(),
                    operative_days: vec![],
                    active: true,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}
