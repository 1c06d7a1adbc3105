//! Miscellaneous project utilities.

use crate::{Location, EDGE_LENGTH};
use std::fmt::{self, Formatter};

/// Draw one character per square as a grid, rank 8 at the top and file "a" on the left.
pub fn format_grid<F: Fn(Location) -> char>(square: F, f: &mut Formatter) -> fmt::Result {
    write!(f, "  a b c d e f g h")?;

    for row in (0..EDGE_LENGTH).rev() {
        write!(f, "\n{}", row + 1)?;
        for col in 0..EDGE_LENGTH {
            write!(f, " {}", square(Location::from_coords(row, col)))?;
        }
    }

    Ok(())
}
