//! Regression vectors taken from the values printed in the paper.

use num_bigint::BigInt;
use num_rational::BigRational;
use unirat_foundation::arith::{log2, ratio};
use unirat_foundation::dimensions::{n0, n_min, r};
use unirat_foundation::{CoefficientTable, MultiplicitySequence, RameroFunctions, Result};

fn big(literal: &str) -> BigInt {
    literal.parse().unwrap_or_default()
}

// =============================================================================
// Figure 1
// =============================================================================

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

#[test]
fn figure_one_table() -> Result<()> {
    let mut table = CoefficientTable::new();
    for (offset, row) in FIGURE_ONE.iter().enumerate() {
        for (j, expected) in row.iter().enumerate() {
            assert_eq!(table.m(offset + 3, j)?, big(expected), "m({}, {j})", offset + 3);
        }
    }
    Ok(())
}

// =============================================================================
// n_min for hypersurfaces
// =============================================================================

#[test]
fn n_min_of_hypersurfaces() -> Result<()> {
    let expected = [
        "4",
        "9",
        "22",
        "160",
        "20376",
        "11914188890",
        "8616199237736295920955120",
    ];
    for (d, value) in (3..=9).zip(expected) {
        let mu = MultiplicitySequence::from_degree(d, 1)?;
        assert_eq!(n_min(&mu)?, big(value), "n_min for degree {d}");
    }
    Ok(())
}

#[test]
fn n_min_matches_n0_at_leading_sum() -> Result<()> {
    let mut table = CoefficientTable::new();
    for d in 3..=7 {
        let mu = MultiplicitySequence::from_degree(d, 1)?;
        let radius = table.leading_sum(d - 1)?;
        assert_eq!(n_min(&mu)?, n0(&mu, &radius)?, "degree {d}");
    }
    Ok(())
}

// =============================================================================
// Introduction
// =============================================================================

#[test]
fn closed_form_n_ten() -> Result<()> {
    let mut table = CoefficientTable::new();
    let n = table.n(10)?;
    assert_eq!(
        n,
        big("192884152577980851363553858004926940342106493833715693762179")
    );
    let bits = log2(&n).unwrap_or(f64::NAN);
    assert!(196.0 < bits && bits < 197.0, "log2 n(10) = {bits}");
    Ok(())
}

// The degree-10 penta chain is about 2 * 10^7 steps long.
#[test]
#[cfg_attr(debug_assertions, ignore = "long penta walk; run with --release")]
fn n_min_degree_ten_matches_closed_form() -> Result<()> {
    let mu = MultiplicitySequence::from_degree(10, 1)?;
    assert_eq!(r(&mu)?, BigInt::from(20_707_020));
    let mut table = CoefficientTable::new();
    assert_eq!(n_min(&mu)?, table.n(10)?);
    Ok(())
}

#[test]
fn ramero_bound_for_degree_ten() -> Result<()> {
    let mut ramero = RameroFunctions::new();
    let bits = log2(&ramero.m(10)?).unwrap_or(f64::NAN);
    assert!(171_550.0 < bits && bits < 171_551.0, "log2 m(10) = {bits}");
    Ok(())
}

// =============================================================================
// Section 2 inequalities
// =============================================================================

#[test]
fn lemma_2_7_growth() -> Result<()> {
    let mut table = CoefficientTable::new();
    for i in 1..=4 {
        let lead = table.m(i, 0)?;
        assert!(&lead * &lead < table.m(i + 1, 0)? * 2, "i = {i}");
    }
    Ok(())
}

#[test]
fn proposition_2_9_start() -> Result<()> {
    let mut table = CoefficientTable::new();
    let lead = table.m(7, 0)?;
    let first = table.m(7, 1)?;
    let second = table.m(7, 2)?;
    // m(7,1) < m(7,0)^(3/2), squared.
    assert!(&first * &first < lead.pow(3));
    assert!(second < lead.pow(2));
    Ok(())
}

#[test]
fn proposition_2_9_b_bounds() -> Result<()> {
    let mut table = CoefficientTable::new();
    let one = BigRational::from_integer(BigInt::from(1));
    assert_eq!(table.b(7, 0)?, one);
    assert_eq!(table.b(7, 1)?, one);
    assert!(table.b(7, 2)? < ratio(BigInt::from(2), BigInt::from(3))?);
    assert!(table.b(7, 3)? < ratio(BigInt::from(1), BigInt::from(4))?);
    assert!(table.b(7, 4)? < ratio(BigInt::from(1), BigInt::from(16))?);
    Ok(())
}

#[test]
fn lemma_2_12_sum() -> Result<()> {
    let mut table = CoefficientTable::new();
    assert!(table.leading_sum(7)? <= BigInt::from(256));
    Ok(())
}

#[test]
fn corollary_2_15_bound() -> Result<()> {
    for d in 6..=7usize {
        let mu = MultiplicitySequence::from_degree(d, 1)?;
        let exponent = u32::try_from((d - 1) << (d - 5)).unwrap_or(u32::MAX);
        let bound = BigInt::from(1) << exponent;
        assert!(n_min(&mu)? <= bound, "degree {d}");
    }
    Ok(())
}
