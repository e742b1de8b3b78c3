//! Rectangular (Z, N) windows of the chart

// external crates
use log::trace;
use serde::{Deserialize, Serialize};

// internal modules
use crate::classify::ChartCell;
use crate::error::{Error, Result};
use crate::palette::{Rgb, Scheme};

// standard library
use std::ops::RangeInclusive;

/// Inclusive window of proton and neutron numbers
///
/// The default covers every known element, Z = 0 to 118 and N = 0 to 177.
///
/// Positions inside the window are `(row, column)` pairs with rows counting
/// up in Z from `z_min` and columns counting up in N from `n_min`, the usual
/// orientation of a chart of nuclides.
///
/// ```rust
/// # use nuchart_chart::ChartArea;
/// let area = ChartArea::new(80, 92, 120, 150).unwrap();
/// assert!(area.contains(90, 142));
/// assert!(!area.contains(90, 151));
/// assert_eq!(area.position(90, 142), Some((10, 22)));
/// assert_eq!((area.height(), area.width()), (13, 31));
/// ```
///
/// Windows read from JSON go through the same checks as [ChartArea::new], and
/// any bound left out takes its default.
///
/// ```rust
/// # use nuchart_chart::ChartArea;
/// let area: ChartArea = serde_json::from_str(r#"{"z_min": 80}"#).unwrap();
/// assert_eq!(area.z_range(), 80..=118);
/// assert!(serde_json::from_str::<ChartArea>(r#"{"z_min": 5, "z_max": 4}"#).is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawArea", into = "RawArea")]
pub struct ChartArea {
    z_min: u32,
    z_max: u32,
    n_min: u32,
    n_max: u32,
}

/// Mirror of [ChartArea] that has not been checked yet
#[derive(Serialize, Deserialize)]
#[serde(default)]
struct RawArea {
    z_min: u32,
    z_max: u32,
    n_min: u32,
    n_max: u32,
}

impl Default for RawArea {
    fn default() -> Self {
        ChartArea::default().into()
    }
}

impl TryFrom<RawArea> for ChartArea {
    type Error = Error;

    fn try_from(raw: RawArea) -> Result<Self> {
        ChartArea::new(raw.z_min, raw.z_max, raw.n_min, raw.n_max)
    }
}

impl From<ChartArea> for RawArea {
    fn from(area: ChartArea) -> Self {
        Self {
            z_min: area.z_min,
            z_max: area.z_max,
            n_min: area.n_min,
            n_max: area.n_max,
        }
    }
}

impl Default for ChartArea {
    fn default() -> Self {
        Self {
            z_min: 0,
            z_max: 118,
            n_min: 0,
            n_max: 177,
        }
    }
}

impl ChartArea {
    /// Window from inclusive bounds, both ranges must be non-empty
    pub fn new(z_min: u32, z_max: u32, n_min: u32, n_max: u32) -> Result<Self> {
        if z_min > z_max {
            return Err(Error::EmptyArea {
                axis: 'Z',
                min: z_min,
                max: z_max,
            });
        }

        if n_min > n_max {
            return Err(Error::EmptyArea {
                axis: 'N',
                min: n_min,
                max: n_max,
            });
        }

        Ok(Self {
            z_min,
            z_max,
            n_min,
            n_max,
        })
    }

    /// Proton numbers covered, lowest first
    pub fn z_range(&self) -> RangeInclusive<u32> {
        self.z_min..=self.z_max
    }

    /// Neutron numbers covered, lowest first
    pub fn n_range(&self) -> RangeInclusive<u32> {
        self.n_min..=self.n_max
    }

    /// Number of columns (N values)
    pub fn width(&self) -> usize {
        (self.n_max - self.n_min) as usize + 1
    }

    /// Number of rows (Z values)
    pub fn height(&self) -> usize {
        (self.z_max - self.z_min) as usize + 1
    }

    /// True if (Z, N) is inside the window
    pub fn contains(&self, z: u32, n: u32) -> bool {
        self.z_range().contains(&z) && self.n_range().contains(&n)
    }

    /// `(row, column)` of (Z, N), if inside the window
    pub fn position(&self, z: u32, n: u32) -> Option<(usize, usize)> {
        self.contains(z, n)
            .then(|| ((z - self.z_min) as usize, (n - self.n_min) as usize))
    }

    /// Cells that fall inside the window, in input order
    pub fn select<'a, I>(&self, cells: I) -> Vec<&'a ChartCell>
    where
        I: IntoIterator<Item = &'a ChartCell>,
    {
        cells
            .into_iter()
            .filter(|cell| self.contains(cell.z, cell.n))
            .collect()
    }

    /// Colour every cell of the window
    ///
    /// Anything without a colour in the scheme, or without a cell at all, is
    /// left as the white background. Later cells at the same position win.
    pub fn colour_grid(&self, cells: &[ChartCell], scheme: Scheme) -> ColourGrid {
        let mut grid = ColourGrid::blank(self.width(), self.height());

        for cell in cells {
            let Some((row, column)) = self.position(cell.z, cell.n) else {
                continue;
            };

            match scheme.colour(&cell.label) {
                Some(colour) => grid.set(row, column, colour),
                None => trace!("No {scheme:?} colour for \"{}\"", cell.label),
            }
        }

        grid
    }
}

/// Row-major grid of cell colours
///
/// Row 0 is the lowest Z of the [ChartArea] it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourGrid {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl ColourGrid {
    fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::WHITE; width * height],
        }
    }

    fn set(&mut self, row: usize, column: usize, colour: Rgb) {
        self.pixels[row * self.width + column] = colour;
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Colour at `(row, column)`
    pub fn get(&self, row: usize, column: usize) -> Option<Rgb> {
        if row < self.height && column < self.width {
            Some(self.pixels[row * self.width + column])
        } else {
            None
        }
    }

    /// Iterate over rows, lowest Z first
    pub fn rows(&self) -> std::slice::Chunks<'_, Rgb> {
        self.pixels.chunks(self.width)
    }

    /// Every colour in row-major order
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }
}
