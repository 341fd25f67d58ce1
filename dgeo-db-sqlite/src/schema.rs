///////////////////////////////////////////////////////////////////////
// Geocoding
///////////////////////////////////////////////////////////////////////

table! {
    geocode_cache (query_hash) {
        query_hash -> Text,
        normalized_address -> Text,
        lat -> Double,
        lng -> Double,
        raw_result -> Text,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Zones
///////////////////////////////////////////////////////////////////////

table! {
    zones (id) {
        id -> BigInt,
        name -> Text,
        boundary -> Text,
        operative_days -> Text,
        active -> Bool,
        created_at -> BigInt,
    }
}

table! {
    day_routes (id) {
        id -> BigInt,
        weekday -> SmallInt,
        zone_id -> BigInt,
        driver_id -> Nullable<BigInt>,
        active -> Bool,
    }
}

joinable!(day_routes -> zones (zone_id));

allow_tables_to_appear_in_same_query!(geocode_cache, zones, day_routes);
