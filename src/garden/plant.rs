use rand::Rng;

use super::cell::{Bloom, Cell};

/// Garden dimensions and flower density, fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub width: usize,
    pub height: usize,
    pub density: f64,
}

impl Geometry {
    /// Size the garden to the terminal, leaving `margin` cells free on each axis.
    pub fn from_terminal(cols: u16, rows: u16, margin: u16, density: f64) -> Self {
        Self {
            width: usize::from(cols.saturating_sub(margin)),
            height: usize::from(rows.saturating_sub(margin)),
            density,
        }
    }
}

/// A planted garden: rows top to bottom, cells left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct Garden {
    rows: Vec<Vec<Cell>>,
    grass: char,
}

impl Garden {
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// The cell at column `x`, row `y`, if one was planted there.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.rows.get(y).and_then(|row| row.get(x))
    }

    pub fn grass(&self) -> char {
        self.grass
    }

    pub fn with_grass(mut self, grass: char) -> Self {
        self.grass = grass;
        self
    }

    pub fn flower_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|c| matches!(c, Cell::Flower(_)))
            .count()
    }

    /// Put a scenery row on top: bare path with a signpost in the middle.
    pub fn with_signpost(mut self, label: &str, width: usize) -> Self {
        let mut row = vec![Cell::Path; width];
        if let Some(mid) = row.get_mut(width / 2) {
            *mid = Cell::Signpost(label.to_string());
        }
        self.rows.insert(0, row);
        self
    }
}

/// Scatter `blooms` (most recent first) across the garden.
///
/// Each cell draws a uniform value in `[0, 1)` and becomes the next flower
/// when it is `<= density`, grass otherwise. Planting stops once a single
/// bloom is left: the remaining cells of the current row are grass and no
/// further rows are opened. The last bloom is therefore never planted, and
/// a one-entry history yields an empty garden. An empty history never stops
/// early and produces grass only.
pub fn plant<R: Rng>(blooms: &[Bloom], geo: &Geometry, rng: &mut R) -> Garden {
    let last_one_left = |cursor: usize| cursor + 1 >= blooms.len();
    let mut cursor = 0;
    let mut rows = Vec::with_capacity(geo.height);

    for _ in 0..geo.height {
        if cursor + 1 == blooms.len() {
            break;
        }
        let mut row = Vec::with_capacity(geo.width);
        for _ in 0..geo.width {
            if last_one_left(cursor) {
                row.push(Cell::Grass);
                continue;
            }
            if rng.random::<f64>() <= geo.density {
                row.push(Cell::Flower(blooms[cursor].clone()));
                cursor += 1;
            } else {
                row.push(Cell::Grass);
            }
        }
        rows.push(row);
    }

    Garden { rows, grass: ',' }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::GlyphAssigner;
    use crate::history::HistoryEntry;
    use crate::garden::cell::prepare_blooms;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn blooms(n: usize) -> Vec<Bloom> {
        let entries: Vec<HistoryEntry> = (0..n)
            .map(|i| HistoryEntry::new(format!("{:06x}0", i * 4099), format!("dev{}@example.com", i)))
            .collect();
        prepare_blooms(&entries, &mut GlyphAssigner::new()).unwrap()
    }

    fn geo(width: usize, height: usize, density: f64) -> Geometry {
        Geometry {
            width,
            height,
            density,
        }
    }

    #[test]
    fn geometry_subtracts_margin() {
        let g = Geometry::from_terminal(80, 24, 10, 0.3);
        assert_eq!((g.width, g.height), (70, 14));
        let tiny = Geometry::from_terminal(5, 5, 10, 0.3);
        assert_eq!((tiny.width, tiny.height), (0, 0));
    }

    #[test]
    fn empty_history_is_all_grass() {
        let mut rng = StdRng::seed_from_u64(1);
        let g = plant(&[], &geo(6, 4, 1.0), &mut rng);
        assert_eq!(g.rows().len(), 4);
        assert!(g.rows().iter().all(|r| r.len() == 6));
        assert!(g.rows().iter().flatten().all(|c| *c == Cell::Grass));
    }

    #[test]
    fn single_entry_plants_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        let g = plant(&blooms(1), &geo(6, 4, 1.0), &mut rng);
        assert_eq!(g.flower_count(), 0);
        assert!(g.rows().is_empty());
    }

    #[test]
    fn full_density_plants_all_but_last_in_order() {
        let b = blooms(5);
        let mut rng = StdRng::seed_from_u64(3);
        let g = plant(&b, &geo(3, 10, 1.0), &mut rng);

        let planted: Vec<&Bloom> = g
            .rows()
            .iter()
            .flatten()
            .filter_map(|c| match c {
                Cell::Flower(bloom) => Some(bloom),
                _ => None,
            })
            .collect();
        assert_eq!(planted, b[..4].iter().collect::<Vec<_>>());

        // Row 0 takes three, row 1 takes one then pads with grass, no row 2.
        assert_eq!(g.rows().len(), 2);
        assert_eq!(g.rows()[1][1], Cell::Grass);
        assert_eq!(g.rows()[1][2], Cell::Grass);
    }

    #[test]
    fn zero_density_is_all_grass() {
        let mut rng = StdRng::seed_from_u64(9);
        let g = plant(&blooms(10), &geo(4, 4, 0.0), &mut rng);
        assert_eq!(g.flower_count(), 0);
        assert_eq!(g.rows().len(), 4);
    }

    #[test]
    fn same_seed_same_garden() {
        let b = blooms(2);
        let g1 = plant(&b, &geo(5, 3, 0.3), &mut StdRng::seed_from_u64(42));
        let g2 = plant(&b, &geo(5, 3, 0.3), &mut StdRng::seed_from_u64(42));
        assert_eq!(g1, g2);
        assert!(g1.flower_count() <= 1);
        assert!(g1.rows().iter().all(|r| r.len() == 5));
        assert!(g1.rows().len() <= 3);
    }

    #[test]
    fn never_exceeds_geometry() {
        let mut rng = StdRng::seed_from_u64(11);
        let g = plant(&blooms(500), &geo(7, 5, 0.5), &mut rng);
        assert_eq!(g.rows().len(), 5);
        assert!(g.rows().iter().all(|r| r.len() == 7));
        assert!(g.flower_count() <= 35);
    }

    #[test]
    fn signpost_row_goes_on_top() {
        let mut rng = StdRng::seed_from_u64(1);
        let g = plant(&[], &geo(5, 2, 0.3), &mut rng).with_signpost("owner/repo", 5);
        assert_eq!(g.rows().len(), 3);
        assert_eq!(g.cell(2, 0), Some(&Cell::Signpost("owner/repo".into())));
        assert_eq!(g.cell(0, 0), Some(&Cell::Path));
        assert_eq!(g.cell(4, 0), Some(&Cell::Path));
        assert_eq!(g.cell(0, 1), Some(&Cell::Grass));
    }

    #[test]
    fn cell_lookup_outside_is_none() {
        let mut rng = StdRng::seed_from_u64(1);
        let g = plant(&[], &geo(3, 2, 0.3), &mut rng);
        assert!(g.cell(3, 0).is_none());
        assert!(g.cell(0, 2).is_none());
    }
}
