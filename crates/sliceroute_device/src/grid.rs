//! The immutable site grid shared by the path model and the netlist codec.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use sliceroute_common::SiteCoord;

use crate::error::GridError;
use crate::scan::{normalize, scan_device};
use crate::site::Site;

/// The full set of addressable sites of a device, indexed by coordinate and name.
///
/// Coordinates are assumed normalized so the smallest `x` and `y` are both
/// zero; [`SiteGrid::from_device_str`] performs that normalization, while
/// [`SiteGrid::new`] trusts its input.
#[derive(Debug, Clone)]
pub struct SiteGrid {
    sites: BTreeMap<SiteCoord, Site>,
    by_name: HashMap<String, SiteCoord>,
    max_x: u32,
    max_y: u32,
    origin: SiteCoord,
}

impl SiteGrid {
    /// Builds a grid from already-normalized sites.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NoSites`] for an empty input and
    /// [`GridError::DuplicateSite`] when a coordinate or name repeats.
    pub fn new(sites: impl IntoIterator<Item = Site>) -> Result<Self, GridError> {
        let mut by_coord = BTreeMap::new();
        let mut by_name = HashMap::new();
        for site in sites {
            if by_name.insert(site.name.clone(), site.coord).is_some() {
                return Err(GridError::DuplicateSite(site.name));
            }
            if by_coord.contains_key(&site.coord) {
                return Err(GridError::DuplicateSite(site.coord.to_string()));
            }
            by_coord.insert(site.coord, site);
        }
        if by_coord.is_empty() {
            return Err(GridError::NoSites);
        }

        let max_x = by_coord.keys().map(|c| c.x).max().unwrap_or(0);
        let max_y = by_coord.keys().map(|c| c.y).max().unwrap_or(0);
        Ok(Self {
            sites: by_coord,
            by_name,
            max_x,
            max_y,
            origin: SiteCoord::new(0, 0),
        })
    }

    /// Builds a grid from normalized coordinates, deriving each site's name.
    pub fn from_coords(coords: impl IntoIterator<Item = SiteCoord>) -> Result<Self, GridError> {
        Self::new(coords.into_iter().map(Site::new))
    }

    /// Scans a device description and builds a normalized grid from it.
    ///
    /// Every `SLICE_X<x>Y<y>` occurrence contributes one site; the minimum
    /// `x` and `y` found are subtracted from all sites and kept as
    /// [`origin`](Self::origin).
    pub fn from_device_str(text: &str) -> Result<Self, GridError> {
        let raw = scan_device(text);
        let (origin, coords) = normalize(&raw).ok_or(GridError::NoSites)?;
        let mut grid = Self::from_coords(coords)?;
        grid.origin = origin;
        log::info!(
            "site grid: {} sites, extent {}x{}, origin {}",
            grid.len(),
            grid.max_x + 1,
            grid.max_y + 1,
            origin
        );
        Ok(grid)
    }

    /// Reads and scans a device description file.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, since
    /// device dumps are not guaranteed to be clean text.
    pub fn from_device_file(path: &Path) -> Result<Self, GridError> {
        let bytes = std::fs::read(path)?;
        Self::from_device_str(&String::from_utf8_lossy(&bytes))
    }

    /// Looks up the site at a coordinate.
    pub fn site(&self, coord: SiteCoord) -> Option<&Site> {
        self.sites.get(&coord)
    }

    /// Looks up a site by its placement name.
    pub fn site_by_name(&self, name: &str) -> Option<&Site> {
        self.by_name.get(name).and_then(|coord| self.sites.get(coord))
    }

    /// Returns `true` if a site exists at the coordinate.
    pub fn contains(&self, coord: SiteCoord) -> bool {
        self.sites.contains_key(&coord)
    }

    /// Iterates all sites ordered by `(x, y)`.
    pub fn sites(&self) -> impl Iterator<Item = &Site> {
        self.sites.values()
    }

    /// Number of sites.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Always `false`; a grid holds at least one site.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Largest column index present.
    pub fn max_x(&self) -> u32 {
        self.max_x
    }

    /// Largest row index present.
    pub fn max_y(&self) -> u32 {
        self.max_y
    }

    /// The device coordinate that normalized to `(0, 0)`.
    pub fn origin(&self) -> SiteCoord {
        self.origin
    }

    /// Clamps a signed position into `[0, max_x] x [0, max_y]`.
    ///
    /// The result lies inside the grid's bounding box but need not hold a site.
    pub fn clamp(&self, x: i64, y: i64) -> SiteCoord {
        SiteCoord::new(
            x.clamp(0, i64::from(self.max_x)) as u32,
            y.clamp(0, i64::from(self.max_y)) as u32,
        )
    }
}
