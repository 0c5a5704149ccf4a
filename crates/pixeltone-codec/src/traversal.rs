//! Pixel traversal order shared by encoder and decoder.
//!
//! The scan order is part of the codec contract: burst `i` of the sample
//! sequence always corresponds to `coord(i)`. Encoding with one order and
//! decoding with the other produces a transposed-looking scramble, so both
//! sides must agree out of band.

/// Bijection between a linear pixel index and a 2-D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanOrder {
    /// Outer loop over columns, inner loop over rows (the primary variant).
    #[default]
    ColumnMajor,
    /// Outer loop over rows, inner loop over columns.
    RowMajor,
}

impl ScanOrder {
    /// Maps linear index `i` in `[0, width * height)` to `(x, y)`.
    ///
    /// # Panics
    /// Panics if the raster is zero-area (division by zero).
    pub fn coord(self, i: usize, width: u32, height: u32) -> (u32, u32) {
        match self {
            ScanOrder::ColumnMajor => {
                let h = height as usize;
                ((i / h) as u32, (i % h) as u32)
            }
            ScanOrder::RowMajor => {
                let w = width as usize;
                ((i % w) as u32, (i / w) as u32)
            }
        }
    }

    /// Maps `(x, y)` back to the linear index.
    pub fn index(self, x: u32, y: u32, width: u32, height: u32) -> usize {
        match self {
            ScanOrder::ColumnMajor => x as usize * height as usize + y as usize,
            ScanOrder::RowMajor => y as usize * width as usize + x as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_major_walks_columns_first() {
        // 2x3 raster: index runs down column 0, then column 1.
        let order = ScanOrder::ColumnMajor;
        assert_eq!(order.coord(0, 2, 3), (0, 0));
        assert_eq!(order.coord(1, 2, 3), (0, 1));
        assert_eq!(order.coord(2, 2, 3), (0, 2));
        assert_eq!(order.coord(3, 2, 3), (1, 0));
        assert_eq!(order.coord(5, 2, 3), (1, 2));
    }

    #[test]
    fn test_row_major_walks_rows_first() {
        let order = ScanOrder::RowMajor;
        assert_eq!(order.coord(0, 2, 3), (0, 0));
        assert_eq!(order.coord(1, 2, 3), (1, 0));
        assert_eq!(order.coord(2, 2, 3), (0, 1));
        assert_eq!(order.coord(5, 2, 3), (1, 2));
    }

    #[test]
    fn test_bijection_both_orders() {
        let (w, h) = (5u32, 7u32);
        for order in [ScanOrder::ColumnMajor, ScanOrder::RowMajor] {
            for i in 0..(w * h) as usize {
                let (x, y) = order.coord(i, w, h);
                assert!(x < w && y < h);
                assert_eq!(order.index(x, y, w, h), i);
            }
        }
    }

    #[test]
    fn test_default_is_column_major() {
        assert_eq!(ScanOrder::default(), ScanOrder::ColumnMajor);
    }
}
