use super::prelude::*;
use crate::gateways::geocode::AddressSuggestion;

/// Candidates for an incomplete address while typing.
///
/// Failed lookups yield no suggestions.
pub fn suggest_addresses<G: GeoCodingGateway>(geocoding: &G, query: &str) -> Vec<AddressSuggestion> {
    let query = query.trim();
    if query.is_empty() {
        return vec![];
    }
    match geocoding.suggest(query) {
        Ok(suggestions) => suggestions
            .into_iter()
            .filter(|s| s.pos.is_valid())
            .collect(),
        Err(err) => {
            log::warn!("Failed to suggest addresses for '{query}': {err}");
            vec![]
        }
    }
}
