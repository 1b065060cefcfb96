use super::state::{PANEL_COUNT, PANEL_SIZE, Position};

/// A pair of LED panels addressed cell by cell
pub trait DisplaySink {
    /// Light or clear one cell. `x` and `y` are panel-local, in `0..8`.
    fn set_cell(&mut self, panel: usize, x: i32, y: i32, on: bool);

    /// Light or clear a cell given in grid coordinates
    fn set_position(&mut self, pos: Position, on: bool) {
        let (panel, x) = pos.panel();
        self.set_cell(panel, x, pos.y, on);
    }
}

/// In-memory frame for two 8x8 panels, one byte per row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelDisplay {
    rows: [[u8; PANEL_SIZE as usize]; PANEL_COUNT],
}

impl PanelDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw row bitmaps of one panel, bit `x` set when column `x` is lit
    pub fn panel_rows(&self, panel: usize) -> &[u8; PANEL_SIZE as usize] {
        &self.rows[panel]
    }

    pub fn is_cell_lit(&self, panel: usize, x: i32, y: i32) -> bool {
        self.rows[panel][y as usize] & (1 << x) != 0
    }

    pub fn is_lit(&self, pos: Position) -> bool {
        let (panel, x) = pos.panel();
        self.is_cell_lit(panel, x, pos.y)
    }

    pub fn lit_count(&self) -> u32 {
        self.rows.iter().flatten().map(|row| row.count_ones()).sum()
    }

    pub fn clear(&mut self) {
        self.rows = Default::default();
    }
}

impl DisplaySink for PanelDisplay {
    fn set_cell(&mut self, panel: usize, x: i32, y: i32, on: bool) {
        if panel >= PANEL_COUNT || !(0..PANEL_SIZE).contains(&x) || !(0..PANEL_SIZE).contains(&y)
        {
            return;
        }
        let row = &mut self.rows[panel][y as usize];
        if on {
            *row |= 1 << x;
        } else {
            *row &= !(1 << x);
        }
    }
}
