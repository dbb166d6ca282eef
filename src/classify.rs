//! Qualitative classification of grain sizes and distribution shapes, after
//! Wentworth (1922), Folk (1954, 1972) and Folk & Ward (1957).
//!
//! All functions are total over `f64`: a value outside every band yields
//! `None` (an explicit "undefined" label), never a panic. Band thresholds
//! are fixed literals of this module, not runtime-mutable state.

// ---------------------------------------------------------------------------
// Wentworth grain-size classes
// ---------------------------------------------------------------------------

/// Wentworth size-class name for a grain size in phi units.
///
/// Half-open bands `[n, n + 1)` from very coarse sand at `[-1, 0)` up to
/// clay at `[8, ∞)`; anything coarser than -1 phi is undefined.
pub fn wentworth(phi: f64) -> Option<&'static str> {
    match phi {
        p if (-1.0..0.0).contains(&p) => Some("very coarse sand"),
        p if (0.0..1.0).contains(&p) => Some("coarse sand"),
        p if (1.0..2.0).contains(&p) => Some("medium sand"),
        p if (2.0..3.0).contains(&p) => Some("fine sand"),
        p if (3.0..4.0).contains(&p) => Some("very fine sand"),
        p if (4.0..5.0).contains(&p) => Some("coarse silt"),
        p if (5.0..6.0).contains(&p) => Some("medium silt"),
        p if (6.0..7.0).contains(&p) => Some("fine silt"),
        p if (7.0..8.0).contains(&p) => Some("very fine silt"),
        p if p >= 8.0 => Some("clay"),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Folk textural classes from sand/silt/clay percentages
// ---------------------------------------------------------------------------

/// Which fine fraction dominates, by the silt:clay ratio.
///
/// A zero denominator means the other component dominates outright, so the
/// ratio is treated as infinite rather than evaluated. Both zero means
/// neither qualifier applies.
enum FineFraction {
    Silty,
    Clayey,
    Muddy,
    Neither,
}

fn fine_fraction(silt: f64, clay: f64) -> FineFraction {
    match (silt > 0.0, clay > 0.0) {
        (true, false) => FineFraction::Silty,
        (false, true) => FineFraction::Clayey,
        (false, false) => FineFraction::Neither,
        (true, true) => {
            if silt / clay >= 2.0 {
                FineFraction::Silty
            } else if clay / silt >= 2.0 {
                FineFraction::Clayey
            } else {
                FineFraction::Muddy
            }
        }
    }
}

/// Folk sediment name from relative sand/silt/clay percentages.
///
/// Nested thresholds at 90 / 50 / 10 % sand, the silt:clay ratio picking the
/// "silty"/"clayey"/"muddy" qualifier below 90 % sand. Negative inputs are
/// undefined.
pub fn folk_sediment(sand: f64, silt: f64, clay: f64) -> Option<&'static str> {
    if sand < 0.0 || silt < 0.0 || clay < 0.0 {
        return None;
    }
    if sand >= 90.0 {
        return Some("sand");
    }
    let fines = fine_fraction(silt, clay);
    if sand >= 50.0 {
        match fines {
            FineFraction::Silty => Some("silty sand"),
            FineFraction::Clayey => Some("clayey sand"),
            FineFraction::Muddy => Some("muddy sand"),
            FineFraction::Neither => None,
        }
    } else if sand >= 10.0 {
        match fines {
            FineFraction::Silty => Some("sandy silt"),
            FineFraction::Clayey => Some("sandy clay"),
            FineFraction::Muddy => Some("sandy mud"),
            FineFraction::Neither => None,
        }
    } else {
        match fines {
            FineFraction::Silty => Some("silt"),
            FineFraction::Clayey => Some("clay"),
            FineFraction::Muddy => Some("mud"),
            FineFraction::Neither => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Folk & Ward distribution-shape classes
// ---------------------------------------------------------------------------

/// Sorting class for an inclusive graphic standard deviation (phi units).
/// Seven bands from very well sorted (≤ 0.35) to extremely poorly sorted
/// (> 4.0); negative sorting is undefined.
pub fn sorting_class(sorting: f64) -> Option<&'static str> {
    match sorting {
        s if s < 0.0 || s.is_nan() => None,
        s if s <= 0.35 => Some("very well sorted"),
        s if s <= 0.5 => Some("well sorted"),
        s if s <= 0.71 => Some("moderately well sorted"),
        s if s <= 1.0 => Some("moderately sorted"),
        s if s <= 2.0 => Some("poorly sorted"),
        s if s <= 4.0 => Some("very poorly sorted"),
        _ => Some("extremely poorly sorted"),
    }
}

/// Skewness class for an inclusive graphic skewness value; defined over
/// [-1, 1].
pub fn skewness_class(skewness: f64) -> Option<&'static str> {
    match skewness {
        s if s > 0.3 && s <= 1.0 => Some("strongly coarse skewed"),
        s if s > 0.1 && s <= 0.3 => Some("coarse skewed"),
        s if (-0.1..=0.1).contains(&s) => Some("near symmetrical"),
        s if (-0.3..-0.1).contains(&s) => Some("fine skewed"),
        s if (-1.0..-0.3).contains(&s) => Some("strongly fine skewed"),
        _ => None,
    }
}

/// Kurtosis class for an inclusive graphic kurtosis value; defined from
/// 0.41 upward.
pub fn kurtosis_class(kurtosis: f64) -> Option<&'static str> {
    match kurtosis {
        k if (0.41..=0.67).contains(&k) => Some("very platykurtic"),
        k if k > 0.67 && k <= 0.9 => Some("platykurtic"),
        k if k > 0.9 && k <= 1.10 => Some("mesokurtic"),
        k if k > 1.10 && k <= 1.5 => Some("leptokurtic"),
        k if k > 1.5 && k <= 3.0 => Some("very leptokurtic"),
        k if k > 3.0 => Some("extremely leptokurtic"),
        _ => None,
    }
}
