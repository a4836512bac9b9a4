/// Single coordinate axis used for row and column positions and board dimensions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// `ndarray` index of a cell.
pub fn nd_index((row, col): Coord2) -> [usize; 2] {
    [usize::from(row), usize::from(col)]
}

static NEIGHBOR_OFFSETS: [(i16, i16); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The up-to-8 cells touching `center` on a `rows x cols` board, in row-major order.
pub fn neighbors(center: Coord2, (rows, cols): Coord2) -> impl Iterator<Item = Coord2> {
    let (row, col) = center;
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(move |&(d_row, d_col)| {
            let row = row.checked_add_signed(d_row).filter(|&r| r < rows)?;
            let col = col.checked_add_signed(d_col).filter(|&c| c < cols)?;
            Some((row, col))
        })
}
