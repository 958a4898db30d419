use core::fmt::Debug;

/// Identity bound for a map territory.
///
/// The influence engine treats territories as opaque keys. Deterministic
/// output requires:
/// - identity equality (`Eq`)
/// - a stable total order (`Ord`) for keyed state and seed processing order
pub trait TerritoryId: Clone + Ord + Debug {}

impl<T: Clone + Ord + Debug> TerritoryId for T {}
