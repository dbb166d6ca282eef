// ---------------------------------------------------------------------------
// Prominence-based peak detection over the raw bin-percent vector
// ---------------------------------------------------------------------------

/// Default minimum prominence for a local maximum to count as a mode.
pub const DEFAULT_PROMINENCE: f64 = 0.1;

/// A detected local maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Index into the sample vector (plateau midpoint for flat tops).
    pub index: usize,
    /// Signal value at the peak.
    pub value: f64,
    /// Topographic prominence of the peak.
    pub prominence: f64,
}

/// Find local maxima with prominence of at least `min_prominence`, in
/// position order.
///
/// A sample is a local maximum when it is strictly higher than its direct
/// neighbours; flat tops count once, at the plateau midpoint. First and last
/// samples can never qualify. Prominence is the height above the higher of
/// the two bases, where each base is the signal minimum between the peak and
/// the nearest point that is higher than the peak (or the signal edge).
pub fn find_peaks(x: &[f64], min_prominence: f64) -> Vec<Peak> {
    let mut peaks = Vec::new();
    if x.len() < 3 {
        return peaks;
    }

    let mut i = 1;
    let last = x.len() - 1;
    while i < last {
        if x[i - 1] < x[i] {
            // Scan ahead over any plateau.
            let mut ahead = i + 1;
            while ahead < last && x[ahead] == x[i] {
                ahead += 1;
            }
            if x[ahead] < x[i] {
                let index = (i + ahead - 1) / 2;
                let prominence = prominence_at(x, index);
                if prominence >= min_prominence {
                    peaks.push(Peak {
                        index,
                        value: x[index],
                        prominence,
                    });
                }
                i = ahead;
                continue;
            }
            i = ahead;
        } else {
            i += 1;
        }
    }
    peaks
}

fn prominence_at(x: &[f64], peak: usize) -> f64 {
    let height = x[peak];

    let mut left_min = height;
    let mut i = peak;
    while i > 0 {
        i -= 1;
        if x[i] > height {
            break;
        }
        left_min = left_min.min(x[i]);
    }

    let mut right_min = height;
    let mut j = peak;
    while j + 1 < x.len() {
        j += 1;
        if x[j] > height {
            break;
        }
        right_min = right_min.min(x[j]);
    }

    height - left_min.max(right_min)
}
