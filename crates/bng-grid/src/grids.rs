//! Grid labels at every export resolution for a single coordinate.
//!
//! These are the `*km_grid` columns attached to postcode records: 100km,
//! 50km, 20km, 10km, 5km, 1km and optionally the non-standard 2km grid.

use crate::codec::{encode, encode_with_quadrant};
use crate::error::GridError;
use crate::model::Coordinate;
use crate::policy::{TwentyKmGroupingPolicy, TwoKmGroupingPolicy};

/// Options for [`GridLabels::for_coordinate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GridOptions {
    /// Also compute the 2km grid label.
    pub with_2km: bool,
}

impl GridOptions {
    pub fn with_2km(mut self, enabled: bool) -> Self {
        self.with_2km = enabled;
        self
    }
}

/// Grid labels of one coordinate, largest cell first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLabels {
    #[cfg_attr(feature = "serde", serde(rename = "100km_grid"))]
    pub grid_100km: String,
    #[cfg_attr(feature = "serde", serde(rename = "50km_grid"))]
    pub grid_50km: String,
    #[cfg_attr(feature = "serde", serde(rename = "20km_grid"))]
    pub grid_20km: String,
    #[cfg_attr(feature = "serde", serde(rename = "10km_grid"))]
    pub grid_10km: String,
    #[cfg_attr(feature = "serde", serde(rename = "5km_grid"))]
    pub grid_5km: String,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "2km_grid", default, skip_serializing_if = "Option::is_none")
    )]
    pub grid_2km: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "1km_grid"))]
    pub grid_1km: String,
}

impl GridLabels {
    /// Computes every label for a coordinate.
    ///
    /// ```
    /// use bng_grid::{Coordinate, GridLabels, GridOptions};
    ///
    /// let labels = GridLabels::for_coordinate(Coordinate::new(425_678, 505_432), GridOptions::default()).unwrap();
    /// assert_eq!(labels.grid_5km, "NZ20NE");
    /// assert_eq!(labels.grid_1km, "NZ2505");
    /// ```
    pub fn for_coordinate(coordinate: Coordinate, options: GridOptions) -> Result<Self, GridError> {
        let grid_2km = if options.with_2km {
            Some(TwoKmGroupingPolicy::label(coordinate)?.to_string())
        } else {
            None
        };
        Ok(Self {
            grid_100km: encode(coordinate, 0)?.to_string(),
            grid_50km: encode_with_quadrant(coordinate, 0)?.to_string(),
            grid_20km: TwentyKmGroupingPolicy::label(coordinate)?.to_string(),
            grid_10km: encode(coordinate, 1)?.to_string(),
            grid_5km: encode_with_quadrant(coordinate, 1)?.to_string(),
            grid_2km,
            grid_1km: encode(coordinate, 2)?.to_string(),
        })
    }

    /// Returns `(column, label)` pairs in export order.
    pub fn columns(&self) -> Vec<(&'static str, &str)> {
        let mut columns = vec![
            ("100km_grid", self.grid_100km.as_str()),
            ("50km_grid", self.grid_50km.as_str()),
            ("20km_grid", self.grid_20km.as_str()),
            ("10km_grid", self.grid_10km.as_str()),
            ("5km_grid", self.grid_5km.as_str()),
        ];
        if let Some(grid_2km) = &self.grid_2km {
            columns.push(("2km_grid", grid_2km.as_str()));
        }
        columns.push(("1km_grid", self.grid_1km.as_str()));
        columns
    }
}
