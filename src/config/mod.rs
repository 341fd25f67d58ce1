use anyhow::{anyhow, bail, Result};
use dgeo_gateways::nominatim::NominatimConfig;
use std::{env, fs, io::ErrorKind, path::Path};

mod raw;

pub const DEFAULT_CONFIG_FILE_NAME: &str = "dispatchgeo.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_NOMINATIM_USER_AGENT: &str = "NOMINATIM_USER_AGENT";

#[derive(Debug)]
pub struct Config {
    pub db: Db,
    pub geocoding: Geocoding,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let raw_config = raw_config.or_defaults(raw::Config::try_default()?);
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        if let Some(GeocodingGateway::Nominatim(nominatim)) = &mut cfg.geocoding.gateway {
            if let Ok(user_agent) = env::var(ENV_NAME_NOMINATIM_USER_AGENT) {
                nominatim.user_agent = user_agent;
            }
        }
        Ok(cfg)
    }
}

#[derive(Debug)]
pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

#[derive(Debug)]
pub struct Geocoding {
    /// `None` disables all external lookups
    pub gateway: Option<GeocodingGateway>,
}

#[derive(Debug, Clone)]
pub enum GeocodingGateway {
    Nominatim(NominatimConfig),
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            geocoding,
            gateway,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        let conn_sqlite = connection_sqlite.ok_or_else(|| anyhow!("Missing SQLite connection"))?;
        let conn_pool_size = connection_pool_size.unwrap_or(1);
        if conn_pool_size == 0 {
            bail!("The connection pool size must be at least 1");
        }
        let db = Db {
            conn_sqlite,
            conn_pool_size,
        };

        let geo_gateway = match geocoding.and_then(|g| g.gateway) {
            Some(raw::GeocodingGateway::Nominatim) => {
                let nominatim = gateway
                    .and_then(|gw| gw.nominatim)
                    .ok_or_else(|| anyhow!("Missing 'nominatim' gateway configuration"))?;
                Some(GeocodingGateway::Nominatim(nominatim_config(nominatim)?))
            }
            None => None,
        };
        let geocoding = Geocoding {
            gateway: geo_gateway,
        };

        Ok(Self { db, geocoding })
    }
}

fn nominatim_config(from: raw::Nominatim) -> Result<NominatimConfig> {
    let raw::Nominatim {
        base_url,
        user_agent,
        address_region,
        locality_region,
        search_limit,
        suggest_limit,
        timeout,
    } = from;
    let defaults = NominatimConfig::default();
    let user_agent = user_agent.unwrap_or(defaults.user_agent);
    if user_agent.trim().is_empty() {
        bail!("Nominatim requires a user agent");
    }
    let search_limit = search_limit.unwrap_or(defaults.search_limit);
    let suggest_limit = suggest_limit.unwrap_or(defaults.suggest_limit);
    if search_limit == 0 || suggest_limit == 0 {
        bail!("Nominatim result limits must be at least 1");
    }
    Ok(NominatimConfig {
        base_url: base_url.unwrap_or(defaults.base_url),
        user_agent,
        address_region: address_region.unwrap_or(defaults.address_region),
        locality_region: locality_region.unwrap_or(defaults.locality_region),
        search_limit,
        suggest_limit,
        timeout: timeout.unwrap_or(defaults.timeout),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn load(cfg_string: &str) -> Result<Config> {
        let raw_config: raw::Config = toml::from_str(cfg_string)?;
        Config::try_from(raw_config.or_defaults(raw::Config::try_default()?))
    }

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let _: Config = Config::try_load_from_file_or_default(file).unwrap();
    }

    #[test]
    fn default_config_uses_nominatim() {
        let cfg = load("").unwrap();
        assert_eq!(10, cfg.db.conn_pool_size);
        let Some(GeocodingGateway::Nominatim(nominatim)) = cfg.geocoding.gateway else {
            panic!("Nominatim gateway expected");
        };
        assert_eq!(NominatimConfig::default(), nominatim);
    }

    #[test]
    fn override_gateway_settings() {
        let cfg = load(
            r#"
            [gateway.nominatim]
            base-url = "http://localhost:8080"
            timeout = "3s"
            "#,
        )
        .unwrap();
        let Some(GeocodingGateway::Nominatim(nominatim)) = cfg.geocoding.gateway else {
            panic!("Nominatim gateway expected");
        };
        assert_eq!("http://localhost:8080", nominatim.base_url);
        assert_eq!(Duration::from_secs(3), nominatim.timeout);
        assert_eq!(1, nominatim.search_limit);
    }

    #[test]
    fn disable_geocoding() {
        let cfg = load("[geocoding]").unwrap();
        assert!(cfg.geocoding.gateway.is_none());
    }

    #[test]
    fn reject_invalid_settings() {
        assert!(load("[db]\nconnection-pool-size = 0").is_err());
        assert!(load("[gateway.nominatim]\nsearch-limit = 0").is_err());
        assert!(load("[gateway.nominatim]\nuser-agent = \" \"").is_err());
        assert!(load("[geocoding]\ngateway = \"opencage\"").is_err());
    }
}
