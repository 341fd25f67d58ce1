use super::prelude::*;

/// Anything that can be visited on a route.
pub trait RouteStop {
    fn pos(&self) -> Option<MapPoint>;
    fn manual_order(&self) -> Option<i64>;
}

impl RouteStop for Stop {
    fn pos(&self) -> Option<MapPoint> {
        self.pos
    }
    fn manual_order(&self) -> Option<i64> {
        self.manual_order
    }
}

impl RouteStop for RecurringStop {
    fn pos(&self) -> Option<MapPoint> {
        self.stop.pos
    }
    fn manual_order(&self) -> Option<i64> {
        self.stop.manual_order
    }
}

/// Orders stops for visitation.
///
/// Stops with a manual order come first, sorted by their
/// manual order. The remaining stops with a position follow
/// in nearest neighbor order, starting with the first of them.
/// Stops without a position are appended last in their
/// original order.
pub fn sequence_stops<S>(stops: &[S]) -> Vec<S>
where
    S: RouteStop + Clone,
{
    let (mut manual, automatic): (Vec<&S>, Vec<&S>) =
        stops.iter().partition(|s| s.manual_order().is_some());
    // stable
    manual.sort_by_key(|s| s.manual_order());

    let mut geocoded = Vec::with_capacity(automatic.len());
    let mut ungeocoded = Vec::new();
    for stop in automatic {
        match stop.pos() {
            Some(pos) => geocoded.push((stop, pos)),
            None => ungeocoded.push(stop),
        }
    }

    manual
        .into_iter()
        .chain(nearest_neighbor_tour(geocoded))
        .chain(ungeocoded)
        .cloned()
        .collect()
}

// Greedy tour over the planar distance. On ties the
// candidate that comes first in the remaining list wins.
fn nearest_neighbor_tour<T>(mut remaining: Vec<(T, MapPoint)>) -> Vec<T> {
    let mut tour = Vec::with_capacity(remaining.len());
    if remaining.is_empty() {
        return tour;
    }
    let (first, mut current_pos) = remaining.remove(0);
    tour.push(first);
    while !remaining.is_empty() {
        let mut nearest_index = 0;
        let mut nearest_distance = PlanarDistance::infinite();
        for (index, (_, pos)) in remaining.iter().enumerate() {
            let distance = MapPoint::planar_distance(current_pos, *pos);
            if distance < nearest_distance {
                nearest_index = index;
                nearest_distance = distance;
            }
        }
        let (next, next_pos) = remaining.remove(nearest_index);
        tour.push(next);
        current_pos = next_pos;
    }
    tour
}
