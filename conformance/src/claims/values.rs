//! Values quoted at the start of section 2 and in Figure 1.

use unirat_foundation::dimensions::n_min;

use super::hypersurface;
use crate::ledger::Ledger;
use crate::{Engine, VerifyError};

/// `n_min` of a degree-`d` hypersurface, for `d = 3..=9`.
const N_MIN: [(usize, &str); 7] = [
    (3, "4"),
    (4, "9"),
    (5, "22"),
    (6, "160"),
    (7, "20376"),
    (8, "11914188890"),
    (9, "8616199237736295920955120"),
];

/// First row shown in Figure 1.
const FIGURE_ONE_FIRST_ROW: usize = 3;

/// `m(i,j)` for `i = 3..=8` and `j = 0..=3`.
const FIGURE_ONE: [[&str; 4]; 6] = [
    ["1", "3", "4", "5"],
    ["3", "8", "13", "19"],
    ["11", "48", "127", "275"],
    ["103", "1106", "7051", "33955"],
    ["6359", "485280", "21029990", "654279500"],
    [
        "20700541",
        "88819638509",
        "214404499562520",
        "368104651084030885",
    ],
];

/// Checks the `n_min` values and the Figure 1 table.
///
/// # Errors
///
/// See [`super::verify`].
pub fn verify(engine: &mut Engine, ledger: &mut Ledger) -> Result<(), VerifyError> {
    for (d, expected) in N_MIN {
        let value = n_min(&hypersurface(d)?)?;
        ledger.check_literal(format!("values/n_min({d})"), expected, value)?;
    }

    for (offset, row) in FIGURE_ONE.iter().enumerate() {
        let i = FIGURE_ONE_FIRST_ROW + offset;
        for (j, expected) in row.iter().enumerate() {
            let value = engine.table.m(i, j)?;
            ledger.check_literal(format!("figure-1/m({i},{j})"), expected, value)?;
        }
    }
    Ok(())
}
