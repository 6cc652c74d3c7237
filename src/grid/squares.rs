//! The lettered 100 km square table of the National Grid.
//!
//! Rows are stored north to south: row 0 holds the `H`/`J` squares at the top of the
//! grid and row 12 the `S`/`T` squares along the south coast. Columns run west to east.
//! The letter `I` never appears, so lookups go through the table rather than letter
//! arithmetic.

/// Side length of one lettered square, in metres.
pub const SQUARE_SIZE_M: u32 = 100_000;

/// Number of square columns (west to east).
pub const COLUMNS: usize = 7;

/// Number of square rows (north to south in storage order).
pub const ROWS: usize = 13;

pub const GRID_SQUARES: [[&str; COLUMNS]; ROWS] = [
    ["HL", "HM", "HN", "HO", "HP", "JL", "JM"],
    ["HQ", "HR", "HS", "HT", "HU", "JQ", "JR"],
    ["HV", "HW", "HX", "HY", "HZ", "JV", "JW"],
    ["NA", "NB", "NC", "ND", "NE", "OA", "OB"],
    ["NF", "NG", "NH", "NJ", "NK", "OF", "OG"],
    ["NL", "NM", "NN", "NO", "NP", "OL", "OM"],
    ["NQ", "NR", "NS", "NT", "NU", "OQ", "OR"],
    ["NV", "NW", "NX", "NY", "NZ", "OV", "OW"],
    ["SA", "SB", "SC", "SD", "SE", "TA", "TB"],
    ["SF", "SG", "SH", "SJ", "SK", "TF", "TG"],
    ["SL", "SM", "SN", "SO", "SP", "TL", "TM"],
    ["SQ", "SR", "SS", "ST", "SU", "TQ", "TR"],
    ["SV", "SW", "SX", "SY", "SZ", "TV", "TW"],
];

/// Position of a lettered square in [`GRID_SQUARES`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridSquare {
    /// Table column, 0 = westernmost.
    pub column: u8,
    /// Table row, 0 = northernmost.
    pub row: u8,
}

impl GridSquare {
    /// Look up a two-letter code. Expects uppercase input.
    pub fn from_letters(letters: &str) -> Option<Self> {
        GRID_SQUARES.iter().enumerate().find_map(|(row, cells)| {
            cells.iter().position(|&cell| cell == letters).map(|column| Self {
                column: column as u8,
                row: row as u8,
            })
        })
    }

    /// Square containing the given 100 km easting/northing indices.
    pub fn from_indices(easting_index: u32, northing_index: u32) -> Option<Self> {
        if easting_index as usize >= COLUMNS || northing_index as usize >= ROWS {
            return None;
        }
        Some(Self {
            column: easting_index as u8,
            row: (ROWS - 1 - northing_index as usize) as u8,
        })
    }

    pub fn letters(&self) -> &'static str {
        GRID_SQUARES[self.row as usize][self.column as usize]
    }

    /// 100 km band counted eastwards from the false origin.
    pub fn easting_index(&self) -> u32 {
        u32::from(self.column)
    }

    /// 100 km band counted northwards from the false origin. Storage order is inverted.
    pub fn northing_index(&self) -> u32 {
        (ROWS - 1) as u32 - u32::from(self.row)
    }

    /// South-west corner of the square in metres.
    pub fn origin(&self) -> (u32, u32) {
        (
            self.easting_index() * SQUARE_SIZE_M,
            self.northing_index() * SQUARE_SIZE_M,
        )
    }
}
