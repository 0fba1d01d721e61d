use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// MappingRow – one row of the calibration map file
// ---------------------------------------------------------------------------

/// A single calibration row: one detector pixel and the wavelength it sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRow {
    /// 1-based detector pixel index.
    pub pixel: u32,
    /// Wavelength in nanometres.
    pub wavelength: u32,
}

// ---------------------------------------------------------------------------
// PixelRange – inclusive pixel bounds derived from the map
// ---------------------------------------------------------------------------

/// Inclusive pixel bounds `[start, stop]` spanned by a calibration map.
///
/// A reversed range (`start > stop`) is representable and simply matches
/// nothing; the map file's row order is taken at face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRange {
    pub start: u32,
    pub stop: u32,
}

impl PixelRange {
    /// Whether `pixel` lies within the inclusive bounds.
    pub fn contains(&self, pixel: u32) -> bool {
        self.start <= pixel && pixel <= self.stop
    }
}

// ---------------------------------------------------------------------------
// Frame – one capture's counts, keyed by pixel number
// ---------------------------------------------------------------------------

/// One capture's per-pixel counts, keyed by 1-based pixel number.
///
/// `BTreeMap` iteration is ascending by key, which matches the order the
/// device emits pixels in.
pub type Frame = BTreeMap<u32, u32>;

// ---------------------------------------------------------------------------
// WavelengthMap – the complete loaded calibration map
// ---------------------------------------------------------------------------

/// The full parsed pixel→wavelength calibration map, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavelengthMap {
    rows: Vec<MappingRow>,
}

impl WavelengthMap {
    /// Build a map from loaded rows, preserving row order.
    ///
    /// The pixel column is expected to be strictly ascending so that the
    /// first and last rows bound the range. An out-of-order column is
    /// warned about but not rejected.
    pub fn from_rows(rows: Vec<MappingRow>) -> Self {
        if !rows.windows(2).all(|w| w[0].pixel < w[1].pixel) {
            log::warn!(
                "map pixel column is not strictly ascending; \
                 the derived pixel range may be wrong"
            );
        }
        WavelengthMap { rows }
    }

    /// All rows in file order.
    pub fn rows(&self) -> &[MappingRow] {
        &self.rows
    }

    /// The pixel column, in file order.
    pub fn pixels(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.iter().map(|r| r.pixel)
    }

    /// The wavelength column, in file order.
    pub fn wavelengths(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.iter().map(|r| r.wavelength)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the map has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Inclusive pixel bounds `(first row, last row)`, or `None` for an
    /// empty map. Callers that need a range must treat `None` as an
    /// error rather than fabricating bounds.
    pub fn pixel_range(&self) -> Option<PixelRange> {
        Some(PixelRange {
            start: self.rows.first()?.pixel,
            stop: self.rows.last()?.pixel,
        })
    }

    /// Wavelength recorded for `pixel`, if the map contains that pixel.
    pub fn wavelength_at(&self, pixel: u32) -> Option<u32> {
        self.rows
            .iter()
            .find(|r| r.pixel == pixel)
            .map(|r| r.wavelength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(rows: &[(u32, u32)]) -> WavelengthMap {
        WavelengthMap::from_rows(
            rows.iter()
                .map(|&(pixel, wavelength)| MappingRow { pixel, wavelength })
                .collect(),
        )
    }

    #[test]
    fn columns_stay_positionally_aligned() {
        let m = map(&[(3, 450), (5, 460), (7, 470)]);
        assert_eq!(m.len(), 3);
        assert_eq!(m.pixels().collect::<Vec<_>>(), vec![3, 5, 7]);
        assert_eq!(m.wavelengths().collect::<Vec<_>>(), vec![450, 460, 470]);
    }

    #[test]
    fn pixel_range_spans_first_and_last_row() {
        let m = map(&[(227, 280), (300, 650), (364, 1017)]);
        assert_eq!(
            m.pixel_range(),
            Some(PixelRange {
                start: 227,
                stop: 364
            })
        );
    }

    #[test]
    fn empty_map_has_no_pixel_range() {
        let m = map(&[]);
        assert!(m.is_empty());
        assert_eq!(m.pixel_range(), None);
    }

    #[test]
    fn unsorted_map_keeps_file_order() {
        // Out-of-order rows are warned about, not reordered or rejected.
        let m = map(&[(7, 470), (3, 450)]);
        assert_eq!(m.pixels().collect::<Vec<_>>(), vec![7, 3]);
        assert_eq!(m.pixel_range(), Some(PixelRange { start: 7, stop: 3 }));
    }

    #[test]
    fn wavelength_lookup_by_pixel() {
        let m = map(&[(3, 450), (5, 460), (7, 470)]);
        assert_eq!(m.wavelength_at(5), Some(460));
        assert_eq!(m.wavelength_at(4), None);
    }

    #[test]
    fn reversed_range_contains_nothing() {
        let r = PixelRange { start: 7, stop: 3 };
        assert!(!r.contains(3));
        assert!(!r.contains(5));
        assert!(!r.contains(7));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let r = PixelRange { start: 3, stop: 7 };
        assert!(r.contains(3));
        assert!(r.contains(7));
        assert!(!r.contains(2));
        assert!(!r.contains(8));
    }
}
