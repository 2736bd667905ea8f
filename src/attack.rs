use crate::common::{AttackResult, BoardError};
use crate::grid::{Cell, Grid};

/// Strike (row, col): `Ship` becomes `Hit`, `Water` becomes `Miss`.
///
/// Struck cells and out-of-range coordinates are rejected without touching
/// the grid. Callers are expected to gate on [`Grid::is_attackable`] first.
pub fn attack(grid: &mut Grid, row: usize, col: usize) -> Result<AttackResult, BoardError> {
    match grid.get(row, col)? {
        Cell::Ship => {
            grid.set(row, col, Cell::Hit);
            Ok(AttackResult::Hit)
        }
        Cell::Water => {
            grid.set(row, col, Cell::Miss);
            Ok(AttackResult::Miss)
        }
        Cell::Hit | Cell::Miss => Err(BoardError::AlreadyTried { row, col }),
    }
}
