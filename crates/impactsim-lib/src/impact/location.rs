//! Randomized impact location.
//!
//! Ocean impacts are drawn with Earth's ocean fraction. Land impacts pick a
//! continent by relative area, then a point inside a coarse bounding box for
//! that continent. The boxes are rough rectangles, not borders: a "Europe"
//! point may land in the Atlantic.

use once_cell::sync::Lazy;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::constants::OCEAN_FRACTION;
use super::format::serialize_two_places;

/// Whether the asteroid strikes water or land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationType {
    Ocean,
    Land,
}

/// Region label attached to an impact location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Continent {
    Ocean,
    Africa,
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "South America")]
    SouthAmerica,
    Europe,
    Asia,
    Australia,
}

/// Latitude/longitude box and relative area weight for a continent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandRegion {
    pub continent: Continent,
    pub weight: u32,
    pub latitude: (f64, f64),
    pub longitude: (f64, f64),
}

/// Land regions in draw order.
pub const LAND_REGIONS: [LandRegion; 6] = [
    LandRegion {
        continent: Continent::Africa,
        weight: 20,
        latitude: (-35.0, 35.0),
        longitude: (-20.0, 60.0),
    },
    LandRegion {
        continent: Continent::NorthAmerica,
        weight: 24,
        latitude: (10.0, 75.0),
        longitude: (-180.0, -30.0),
    },
    LandRegion {
        continent: Continent::SouthAmerica,
        weight: 18,
        latitude: (-60.0, 15.0),
        longitude: (-90.0, -30.0),
    },
    LandRegion {
        continent: Continent::Europe,
        weight: 10,
        latitude: (35.0, 75.0),
        longitude: (-10.0, 60.0),
    },
    LandRegion {
        continent: Continent::Asia,
        weight: 43,
        latitude: (10.0, 75.0),
        longitude: (60.0, 180.0),
    },
    LandRegion {
        continent: Continent::Australia,
        weight: 5,
        latitude: (-50.0, -10.0),
        longitude: (110.0, 180.0),
    },
];

static LAND_WEIGHTS: Lazy<WeightedIndex<u32>> = Lazy::new(|| {
    WeightedIndex::new(LAND_REGIONS.iter().map(|region| region.weight))
        .expect("land region weights are positive constants")
});

const OCEAN_LATITUDE: (f64, f64) = (-60.0, 60.0);
const OCEAN_LONGITUDE: (f64, f64) = (-180.0, 180.0);

/// Where the asteroid comes down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactLocation {
    #[serde(serialize_with = "serialize_two_places")]
    pub latitude: f64,
    #[serde(serialize_with = "serialize_two_places")]
    pub longitude: f64,
    pub location_type: LocationType,
    pub continent: Continent,
}

impl LandRegion {
    /// Look up the region for a continent. Returns `None` for [`Continent::Ocean`].
    pub fn for_continent(continent: Continent) -> Option<&'static LandRegion> {
        LAND_REGIONS
            .iter()
            .find(|region| region.continent == continent)
    }

    /// Whether a coordinate falls inside this region's box.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.latitude.0..=self.latitude.1).contains(&latitude)
            && (self.longitude.0..=self.longitude.1).contains(&longitude)
    }
}

/// Draw an impact location.
///
/// Draw order: ocean flag, continent index (land only), latitude, longitude.
pub fn impact_location<R: Rng + ?Sized>(rng: &mut R) -> ImpactLocation {
    let is_ocean = rng.gen::<f64>() < OCEAN_FRACTION;

    if is_ocean {
        return ImpactLocation {
            latitude: rng.gen_range(OCEAN_LATITUDE.0..OCEAN_LATITUDE.1),
            longitude: rng.gen_range(OCEAN_LONGITUDE.0..OCEAN_LONGITUDE.1),
            location_type: LocationType::Ocean,
            continent: Continent::Ocean,
        };
    }

    let region = &LAND_REGIONS[LAND_WEIGHTS.sample(rng)];
    location_in_region(region, rng)
}

/// Draw a land location uniformly inside `region`.
pub fn location_in_region<R: Rng + ?Sized>(region: &LandRegion, rng: &mut R) -> ImpactLocation {
    ImpactLocation {
        latitude: rng.gen_range(region.latitude.0..region.latitude.1),
        longitude: rng.gen_range(region.longitude.0..region.longitude.1),
        location_type: LocationType::Land,
        continent: region.continent,
    }
}
