use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("dispatchgeo.default.toml");

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub geocoding: Option<Geocoding>,
    pub gateway: Option<Gateway>,
}

impl Config {
    pub fn try_default() -> Result<Self, toml::de::Error> {
        toml::from_str(DEFAULT_CONFIG_FILE)
    }

    /// Fills everything that is missing from `defaults`.
    ///
    /// A missing `[geocoding]` section selects the default
    /// gateway, an empty one disables geocoding.
    pub fn or_defaults(self, defaults: Self) -> Self {
        let Self {
            db,
            geocoding,
            gateway,
        } = self;
        Self {
            db: merge(db, defaults.db, Db::or_defaults),
            geocoding: geocoding.or(defaults.geocoding),
            gateway: merge(gateway, defaults.gateway, Gateway::or_defaults),
        }
    }
}

fn merge<T>(value: Option<T>, default: Option<T>, f: impl FnOnce(T, T) -> T) -> Option<T> {
    match (value, default) {
        (Some(value), Some(default)) => Some(f(value, default)),
        (value, default) => value.or(default),
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: Option<String>,
    pub connection_pool_size: Option<u8>,
}

impl Db {
    fn or_defaults(self, defaults: Self) -> Self {
        Self {
            connection_sqlite: self.connection_sqlite.or(defaults.connection_sqlite),
            connection_pool_size: self.connection_pool_size.or(defaults.connection_pool_size),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Nominatim,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub nominatim: Option<Nominatim>,
}

impl Gateway {
    fn or_defaults(self, defaults: Self) -> Self {
        Self {
            nominatim: merge(self.nominatim, defaults.nominatim, Nominatim::or_defaults),
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Nominatim {
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
    pub address_region: Option<String>,
    pub locality_region: Option<String>,
    pub search_limit: Option<u16>,
    pub suggest_limit: Option<u16>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub timeout: Option<Duration>,
}

impl Nominatim {
    fn or_defaults(self, defaults: Self) -> Self {
        Self {
            base_url: self.base_url.or(defaults.base_url),
            user_agent: self.user_agent.or(defaults.user_agent),
            address_region: self.address_region.or(defaults.address_region),
            locality_region: self.locality_region.or(defaults.locality_region),
            search_limit: self.search_limit.or(defaults.search_limit),
            suggest_limit: self.suggest_limit.or(defaults.suggest_limit),
            timeout: self.timeout.or(defaults.timeout),
        }
    }
}
