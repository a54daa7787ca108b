use std::io::Write;

use crate::error::{OperationError, Result};
use crate::store::TilingStore;

use super::normalize::ImageExtent;

/// Serializes the per-tile display metadata and vertex arrays into the
/// tab-separated coordinate table consumed by rendering clients.
///
/// One row per tile, in insertion order, keyed by a regenerated
/// sequential index rather than the original tile id. The footnote and
/// image dimensions are repeated on every row; only the first row's
/// footnote is meaningful to consumers. Point columns are sized to the
/// widest tile and padded with empty fields, so the format stays generic
/// even though every tile in this family has 13 vertices.
pub struct WriteTable {
    extent: ImageExtent,
}

impl WriteTable {
    /// Creates a new `WriteTable` operation for a figure with the given
    /// image extent (normally the result of normalization).
    #[must_use]
    pub fn new(extent: ImageExtent) -> Self {
        Self { extent }
    }

    /// Writes the header and all tile rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the store holds no tiles or the writer fails.
    pub fn execute<W: Write>(&self, store: &TilingStore, writer: W) -> Result<()> {
        let max_points = store
            .tiles()
            .map(|tile| tile.points().len())
            .max()
            .ok_or(OperationError::EmptyStore)?;

        let mut table = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_writer(writer);

        let mut header = vec![
            "seq_id".to_owned(),
            "start_fill_color".to_owned(),
            "start_stroke_color".to_owned(),
            "done_fill_color".to_owned(),
            "done_stroke_color".to_owned(),
            "footnote".to_owned(),
            "img_width".to_owned(),
            "img_height".to_owned(),
        ];
        for i in 0..max_points {
            header.push(format!("px_{i}"));
            header.push(format!("py_{i}"));
        }
        table
            .write_record(&header)
            .map_err(OperationError::Write)?;

        for (seq, tile) in store.tiles().enumerate() {
            let style = tile.style();
            let mut record = vec![
                seq.to_string(),
                style.start_fill.to_string(),
                style.start_stroke.to_string(),
                style.done_fill.to_string(),
                style.done_stroke.to_string(),
                store.footnote().to_owned(),
                format!("{:.6}", self.extent.width),
                format!("{:.6}", self.extent.height),
            ];
            for point in tile.points() {
                record.push(format!("{:.6}", point.x));
                record.push(format!("{:.6}", point.y));
            }
            for _ in tile.points().len()..max_points {
                record.push(String::new());
                record.push(String::new());
            }
            table.write_record(&record).map_err(OperationError::Write)?;
        }
        table.flush().map_err(OperationError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::normalize::Normalize;
    use crate::placement::MatchDirection;
    use crate::shape::{Chirality, ShapeParams, EDGE_COUNT};
    use crate::store::{Palette, Rgba, TileSpec, TilingStore};

    fn two_tile_store() -> TilingStore {
        let mut store = TilingStore::new(ShapeParams::HAT);
        store.set_palette(
            Palette::new()
                .with_fill("w", Rgba::opaque(0xFF, 0xFF, 0xFF))
                .with_fill("db", Rgba::opaque(0x00, 0x66, 0x99)),
        );
        store.set_footnote("Based on the hat tiling.");
        store
            .insert_first(TileSpec::new("1", Chirality::Left, "LP", "w"))
            .unwrap();
        store
            .insert_matched(
                TileSpec::new("2", Chirality::Right, "RN", "db"),
                "1",
                "LN",
                MatchDirection::Derived,
            )
            .unwrap();
        store
    }

    fn render(store: &TilingStore, extent: ImageExtent) -> String {
        let mut buffer = Vec::new();
        WriteTable::new(extent).execute(store, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn header_and_row_shape() {
        let mut store = two_tile_store();
        let extent = Normalize::new().execute(&mut store).unwrap();
        let text = render(&store, extent);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);

        let header: Vec<&str> = lines[0].split('\t').collect();
        assert_eq!(header.len(), 8 + 2 * EDGE_COUNT);
        assert_eq!(header[0], "seq_id");
        assert_eq!(header[5], "footnote");
        assert_eq!(header[8], "px_0");
        assert_eq!(header[9], "py_0");
        assert_eq!(header[8 + 2 * EDGE_COUNT - 1], "py_12");

        for line in &lines[1..] {
            assert_eq!(line.split('\t').count(), 8 + 2 * EDGE_COUNT);
        }
    }

    #[test]
    fn rows_carry_sequential_ids_and_repeated_metadata() {
        let mut store = two_tile_store();
        let extent = Normalize::new().execute(&mut store).unwrap();
        let text = render(&store, extent);
        let lines: Vec<&str> = text.lines().collect();

        let row0: Vec<&str> = lines[1].split('\t').collect();
        let row1: Vec<&str> = lines[2].split('\t').collect();
        assert_eq!(row0[0], "0");
        assert_eq!(row1[0], "1");
        assert_eq!(row0[1], "#FFFFFF");
        assert_eq!(row1[1], "#006699");
        assert_eq!(row0[2], "#000000");
        assert_eq!(row0[3], "#00000000");
        assert_eq!(row0[4], "#00000000");
        // Footnote and image size repeat on every row.
        assert_eq!(row0[5], "Based on the hat tiling.");
        assert_eq!(row1[5], row0[5]);
        assert_eq!(row1[6], row0[6]);
        assert_eq!(row1[7], row0[7]);
    }

    #[test]
    fn coordinates_use_six_decimal_places() {
        let store = two_tile_store();
        let extent = ImageExtent {
            width: 6.0,
            height: 4.330_126,
        };
        let text = render(&store, extent);
        let row0: Vec<&str> = text.lines().nth(1).unwrap().split('\t').collect();
        // Without normalization, tile 1's first vertex is (1, 0).
        assert_eq!(row0[8], "1.000000");
        assert_eq!(row0[9], "0.000000");
        assert_eq!(row0[6], "6.000000");
    }

    #[test]
    fn empty_store_is_an_error() {
        let store = TilingStore::new(ShapeParams::HAT);
        let mut buffer = Vec::new();
        let extent = ImageExtent {
            width: 0.0,
            height: 0.0,
        };
        assert!(WriteTable::new(extent).execute(&store, &mut buffer).is_err());
    }
}
