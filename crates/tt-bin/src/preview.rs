//! ASCII compositor for terminal previews.
//!
//! Draws a `TileSource` the way a display would: tiles in slot order, later
//! tiles over earlier ones, pixels whose palette entry is transparent left
//! untouched. Opaque pixels become `#`, background stays `.`.

use core_display::TileSource;

const INK: char = '#';
const PAPER: char = '.';

/// Rows of the composited image covering every tile, or empty when there are none.
pub fn render_ascii(source: &dyn TileSource) -> Vec<String> {
    let tiles = source.tiles();
    let palette = source.palette();
    let Some((min_x, min_y, max_x, max_y)) = extents(source) else {
        return Vec::new();
    };
    let width = (max_x - min_x) as usize;
    let height = (max_y - min_y) as usize;
    let mut canvas = vec![vec![PAPER; width]; height];

    for tile in tiles {
        let (tx, ty) = tile.position();
        let (tw, th) = tile.size();
        for y in 0..th {
            for x in 0..tw {
                let Some(index) = tile.pixel(x, y) else {
                    continue;
                };
                if palette.is_transparent(index as usize) {
                    continue;
                }
                let cx = (tx + x as i32 - min_x) as usize;
                let cy = (ty + y as i32 - min_y) as usize;
                canvas[cy][cx] = INK;
            }
        }
    }
    canvas.into_iter().map(|row| row.into_iter().collect()).collect()
}

fn extents(source: &dyn TileSource) -> Option<(i32, i32, i32, i32)> {
    source.tiles().iter().fold(None, |acc, tile| {
        let (x, y) = tile.position();
        let (w, h) = tile.size();
        let (x2, y2) = (x + w as i32, y + h as i32);
        Some(match acc {
            None => (x, y, x2, y2),
            Some((a, b, c, d)) => (a.min(x), b.min(y), c.max(x2), d.max(y2)),
        })
    })
}
