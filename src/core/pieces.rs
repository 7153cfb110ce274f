//! Piece catalogue: the seven tetromino masks and the rotation transform.
//!
//! A mask is a rectangular boolean grid (at most 4x4) whose `true` cells make
//! up the piece. Rotation is a plain 90-degree clockwise transform of the
//! mask with no wall kicks; the anchor never moves during rotation.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

type MaskRow = ArrayVec<bool, 4>;

/// Rectangular boolean piece mask.
///
/// Invariant: non-empty, and every row has the same length. A violation is a
/// construction bug, not a runtime condition, hence debug assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    rows: ArrayVec<MaskRow, 4>,
}

impl Mask {
    pub fn from_rows(rows: &[&[bool]]) -> Self {
        debug_assert!(!rows.is_empty(), "mask must have at least one row");
        debug_assert!(
            rows.iter().all(|r| r.len() == rows[0].len()),
            "mask rows must have equal length"
        );
        debug_assert!(
            rows.iter().any(|r| r.iter().any(|&c| c)),
            "mask must have at least one filled cell"
        );

        let mut out = ArrayVec::new();
        for row in rows {
            let mut r = MaskRow::new();
            r.try_extend_from_slice(row).expect("mask wider than 4");
            out.push(r);
        }
        Self { rows: out }
    }

    /// Number of rows (R).
    pub fn rows(&self) -> i8 {
        self.rows.len() as i8
    }

    /// Number of columns (C).
    pub fn cols(&self) -> i8 {
        self.rows[0].len() as i8
    }

    pub fn cell(&self, row: i8, col: i8) -> bool {
        self.rows[row as usize][col as usize]
    }

    /// Iterate `(dx, dy)` offsets of the filled cells.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &filled)| filled)
                .map(move |(x, _)| (x as i8, y as i8))
        })
    }

    /// 90-degree clockwise rotation: `new[i][j] = old[R-1-j][i]`.
    ///
    /// An R x C mask becomes C x R.
    pub fn rotated_cw(&self) -> Self {
        let r = self.rows.len();
        let c = self.rows[0].len();

        let mut out = ArrayVec::new();
        for i in 0..c {
            let mut row = MaskRow::new();
            for j in 0..r {
                row.push(self.rows[r - 1 - j][i]);
            }
            out.push(row);
        }
        Self { rows: out }
    }
}

/// Canonical spawn mask for a piece kind.
pub fn template(kind: PieceKind) -> Mask {
    const T: bool = true;
    const F: bool = false;

    match kind {
        PieceKind::I => Mask::from_rows(&[&[T, T, T, T]]),
        PieceKind::O => Mask::from_rows(&[&[T, T], &[T, T]]),
        PieceKind::T => Mask::from_rows(&[&[F, T, F], &[T, T, T]]),
        PieceKind::L => Mask::from_rows(&[&[T, F], &[T, F], &[T, T]]),
        PieceKind::J => Mask::from_rows(&[&[F, T], &[F, T], &[T, T]]),
        PieceKind::S => Mask::from_rows(&[&[F, T, T], &[T, T, F]]),
        PieceKind::Z => Mask::from_rows(&[&[T, T, F], &[F, T, T]]),
    }
}
