use super::prelude::*;
use crate::util::fingerprint::address_fingerprint;

/// Resolves a free-text address into a coordinate.
///
/// Previously resolved addresses are served from the cache.
/// Otherwise the external service is asked with the original,
/// non-normalized address and a successful result is cached.
/// Failed or empty lookups are not cached, so a later attempt
/// will ask the external service again.
///
/// Any failure is logged and reported as `None`, i.e. no
/// coordinate is available for this address.
pub fn resolve_address<R, G>(repo: &R, geocoding: &G, address: &str) -> Option<MapPoint>
where
    R: GeocodeCacheRepo,
    G: GeoCodingGateway,
{
    let (normalized_address, query_hash) = address_fingerprint(address);
    if normalized_address.is_empty() {
        log::debug!("Skipping resolution of an empty address");
        return None;
    }

    match repo.try_get_geocode_entry(&query_hash) {
        Ok(Some(entry)) => {
            log::debug!("Geocode cache hit for '{normalized_address}'");
            return Some(entry.pos);
        }
        Ok(None) => {
            log::debug!("Geocode cache miss for '{normalized_address}'");
        }
        Err(err) => {
            log::warn!("Failed to read geocode cache entry {query_hash}: {err}");
        }
    }

    let candidate = match geocoding.search(address) {
        Ok(candidates) => candidates.into_iter().next(),
        Err(err) => {
            log::warn!("Failed to look up address '{address}': {err}");
            return None;
        }
    };
    let Some(candidate) = candidate else {
        log::info!("No coordinate found for address '{address}'");
        return None;
    };
    if !candidate.pos.is_valid() {
        log::warn!(
            "Ignoring invalid coordinate {} for address '{address}'",
            candidate.pos
        );
        return None;
    }

    let entry = GeocodeCacheEntry {
        query_hash,
        normalized_address,
        pos: candidate.pos,
        raw_result: candidate.raw,
        created_at: Timestamp::now(),
    };
    match repo.create_geocode_entry(&entry) {
        Ok(()) => {
            log::debug!(
                "Cached coordinate {} for '{}'",
                entry.pos,
                entry.normalized_address
            );
        }
        Err(RepoError::AlreadyExists) => {
            // Another resolution of the same address finished first
            log::debug!(
                "Geocode cache entry {} has been created concurrently",
                entry.query_hash
            );
            match repo.get_geocode_entry(&entry.query_hash) {
                Ok(existing) => return Some(existing.pos),
                Err(err) => {
                    log::warn!(
                        "Failed to load concurrently created geocode cache entry {}: {err}",
                        entry.query_hash
                    );
                }
            }
        }
        Err(err) => {
            log::warn!(
                "Failed to cache coordinate for '{}': {err}",
                entry.normalized_address
            );
        }
    }
    Some(entry.pos)
}
