//! The fixed catalog of prints.
//!
//! The series is numbered 001 through 119 and the number alone decides the
//! season: 001-042 spring, 043-072 summer, 073-098 autumn, 099-119 winter.
//! The catalog is built once at startup and never mutated afterwards.

use crate::config::TOTAL_PRINTS;
use std::path::{Path, PathBuf};

/// Seasonal classification of a print, derived from its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Human-readable label used in cards, the status line, and the viewer.
    pub fn label(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }
}

/// Maps a print number (1-based) to its season.
pub fn season_of(index: u32) -> Season {
    match index {
        1..=42 => Season::Spring,
        43..=72 => Season::Summer,
        73..=98 => Season::Autumn,
        _ => Season::Winter,
    }
}

/// Zero-padded three-digit id, e.g. `7` -> `"007"`.
pub fn print_id(index: u32) -> String {
    format!("{:03}", index)
}

/// One entry of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// 1-based position in the series.
    pub index: u32,
    /// Zero-padded three-digit id.
    pub id: String,
    pub season: Season,
    /// Path to the image file under the image directory.
    pub src: PathBuf,
    /// Descriptive text for the print.
    pub alt: String,
}

impl ImageRecord {
    fn new(index: u32, image_dir: &Path) -> Self {
        let id = print_id(index);
        Self {
            index,
            season: season_of(index),
            src: image_dir.join(format!("{}.jpg", id)),
            alt: format!("One Hundred Famous Views of Edo — Print {}", id),
            id,
        }
    }
}

/// Builds the full ordered catalog rooted at `image_dir`.
pub fn build_catalog(image_dir: &Path) -> Vec<ImageRecord> {
    (1..=TOTAL_PRINTS)
        .map(|index| ImageRecord::new(index, image_dir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_ranges_partition_the_series() {
        let mut counts = [0usize; 4];
        for i in 1..=TOTAL_PRINTS {
            match season_of(i) {
                Season::Spring => counts[0] += 1,
                Season::Summer => counts[1] += 1,
                Season::Autumn => counts[2] += 1,
                Season::Winter => counts[3] += 1,
            }
        }
        assert_eq!(counts, [42, 30, 26, 21]);
        assert_eq!(counts.iter().sum::<usize>(), TOTAL_PRINTS as usize);
    }

    #[test]
    fn season_range_boundaries() {
        assert_eq!(season_of(1), Season::Spring);
        assert_eq!(season_of(42), Season::Spring);
        assert_eq!(season_of(43), Season::Summer);
        assert_eq!(season_of(72), Season::Summer);
        assert_eq!(season_of(73), Season::Autumn);
        assert_eq!(season_of(98), Season::Autumn);
        assert_eq!(season_of(99), Season::Winter);
        assert_eq!(season_of(119), Season::Winter);
    }

    #[test]
    fn print_id_is_zero_padded() {
        assert_eq!(print_id(1), "001");
        assert_eq!(print_id(42), "042");
        assert_eq!(print_id(119), "119");
    }

    #[test]
    fn catalog_is_complete_and_ordered() {
        let catalog = build_catalog(Path::new("img/edo"));
        assert_eq!(catalog.len(), TOTAL_PRINTS as usize);
        for (pos, record) in catalog.iter().enumerate() {
            assert_eq!(record.index, pos as u32 + 1);
            assert_eq!(record.season, season_of(record.index));
        }
        assert_eq!(catalog[0].src, Path::new("img/edo/001.jpg"));
        assert_eq!(catalog[118].src, Path::new("img/edo/119.jpg"));
    }
}
