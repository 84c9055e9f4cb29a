use anyhow::Result;
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::Write;

use super::cell::{Cell, EDGE_CAPTION};
use super::plant::Garden;
use super::player::Player;

/// One drawn screen: the garden picture and the status caption below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Every garden row, each terminated by `\n`.
    pub picture: String,
    /// Plain caption for whatever is under the player.
    pub caption: String,
}

/// Draw the garden with the avatar on top of the cell it stands on.
///
/// The caption describes that cell. If the player is past the planted area
/// there is no cell to cover, so no avatar shows and the edge caption is used.
pub fn render(garden: &Garden, player: &Player) -> Frame {
    let avatar = player.glyph.to_string().bold().to_string();
    let mut picture = String::new();

    for (y, row) in garden.rows().iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            if (x, y) == (player.x, player.y) {
                picture.push_str(&avatar);
            } else {
                picture.push_str(&cell.glyph(garden.grass()));
            }
        }
        picture.push('\n');
    }

    let caption = garden
        .cell(player.x, player.y)
        .map_or_else(|| EDGE_CAPTION.to_string(), Cell::caption);
    Frame { picture, caption }
}

/// Clear the screen and write `frame` from the top-left corner.
///
/// Lines end in `\r\n` since raw mode turns off newline translation.
pub fn draw<W: Write>(out: &mut W, frame: &Frame) -> Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    for line in frame.picture.lines() {
        write!(out, "{}\r\n", line)?;
    }
    write!(out, "\r\n{}\r\n", frame.caption.as_str().bold())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::garden::cell::{Bloom, GRASS_CAPTION};
    use crate::garden::plant::{Geometry, plant};
    use crate::glyph::GlyphAssigner;
    use crate::history::HistoryEntry;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn full_garden() -> (Garden, Geometry) {
        let entries = vec![
            HistoryEntry::new("abc123", "alice@example.com"),
            HistoryEntry::new("def456", "bob@example.com"),
            HistoryEntry::new("0a0b0c", "carol@example.com"),
        ];
        let blooms: Vec<Bloom> = entries
            .iter()
            .map(|e| Bloom::from_entry(e, &mut GlyphAssigner::new()).unwrap())
            .collect();
        let geo = Geometry {
            width: 4,
            height: 2,
            density: 1.0,
        };
        let g = plant(&blooms, &geo, &mut StdRng::seed_from_u64(5));
        (g, geo)
    }

    #[test]
    fn caption_for_flower_under_player() {
        let (g, geo) = full_garden();
        let p = Player::new('@', &geo);
        let f = render(&g, &p);
        assert_eq!(
            f.caption,
            "You're standing at a flower called abc123 planted by alice."
        );
    }

    #[test]
    fn caption_for_grass_under_player() {
        let (g, geo) = full_garden();
        let mut p = Player::new('@', &geo);
        p.x = 3;
        assert_eq!(g.cell(3, 0), Some(&Cell::Grass));
        assert_eq!(render(&g, &p).caption, GRASS_CAPTION);
    }

    #[test]
    fn avatar_replaces_the_cell_glyph() {
        let (g, geo) = full_garden();
        let mut p = Player::new('@', &geo);
        p.x = 1;
        let f = render(&g, &p);
        let first_row = f.picture.lines().next().unwrap();
        assert!(first_row.starts_with(&g.cell(0, 0).unwrap().glyph(',')));
        assert!(first_row.contains('@'));
        assert!(!first_row.contains(&g.cell(1, 0).unwrap().glyph(',')));
    }

    #[test]
    fn one_line_per_row() {
        let (g, geo) = full_garden();
        let f = render(&g, &Player::new('@', &geo));
        assert_eq!(f.picture.lines().count(), g.rows().len());
        assert!(f.picture.ends_with('\n'));
    }

    #[test]
    fn off_grid_player_gets_edge_caption() {
        let (g, geo) = full_garden();
        let mut p = Player::new('@', &geo);
        p.x = geo.width;
        let f = render(&g, &p);
        assert_eq!(f.caption, EDGE_CAPTION);
        assert!(!f.picture.contains('@'));
    }

    #[test]
    fn draw_clears_then_writes_crlf_lines() {
        let frame = Frame {
            picture: "ab\ncd\n".to_string(),
            caption: "hello".to_string(),
        };
        let mut out = Vec::new();
        draw(&mut out, &frame).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.starts_with("\x1b[2J"));
        assert!(s.contains("ab\r\ncd\r\n\r\n"));
        assert!(s.contains("hello"));
    }
}
