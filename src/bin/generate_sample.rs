use anyhow::{Context, Result};
use log::info;

use grainstat::{
    mean_statistics, summarize, AggregateCurves, BinTable, CumulativeCurve, SampleMatrix,
    DEFAULT_PROMINENCE,
};

// Synthetic-dataset generator: builds a deterministic set of multimodal
// grain-size samples, runs the full statistics pipeline over them, writes
// the flattened export table to CSV and prints the mean-column record as
// JSON. A development aid; the library itself does no I/O.

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// 93-channel geometric diameter scale from 0.375198 µm to 2 mm, in
/// instrument order (finest first), like the analyzer reports it.
fn instrument_bins() -> Vec<f64> {
    let n = 93;
    let lo: f64 = 0.375198;
    let hi: f64 = 2000.0;
    let ratio = (hi / lo).powf(1.0 / (n - 1) as f64);
    (0..n).map(|i| lo * ratio.powi(i as i32)).collect()
}

/// One sample: a Gaussian mixture over the phi axis, jittered per bin and
/// normalized to a 100 % volume total.
fn synthesize(phi: &[f64], peaks: &[(f64, f64, f64)], rng: &mut SimpleRng) -> Vec<f64> {
    let mut v: Vec<f64> = phi
        .iter()
        .map(|&p| {
            let signal: f64 = peaks
                .iter()
                .map(|&(mu, sigma, amp)| gaussian(p, mu, sigma, amp))
                .sum();
            let jitter = 0.98 + 0.04 * rng.next_f64();
            (signal * jitter).max(0.0)
        })
        .collect();
    let total: f64 = v.iter().sum();
    v.iter_mut().for_each(|x| *x *= 100.0 / total);
    v
}

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = SimpleRng::new(42);
    let bins = BinTable::from_microns(instrument_bins());
    let phi = bins.phi();

    // Three lithologies: well-sorted dune sand, bimodal loess, muddy till.
    let mixtures: [(&str, Vec<(f64, f64, f64)>); 3] = [
        ("dune-sand", vec![(2.2, 0.45, 1.0)]),
        ("loess", vec![(4.8, 0.7, 0.8), (7.2, 0.9, 0.5)]),
        ("till", vec![(3.5, 1.4, 0.6), (6.5, 1.6, 0.7), (9.0, 1.0, 0.3)]),
    ];

    let mut samples = SampleMatrix::new(bins.len());
    for (lith, peaks) in &mixtures {
        for rep in 1..=4 {
            let name = format!("{lith}-{rep:02}");
            samples.insert(name, synthesize(&phi, peaks, &mut rng))?;
        }
    }
    info!(
        "synthesized {} samples over {} bins",
        samples.len(),
        bins.len()
    );

    // Per-sample statistics; empty samples would drop out with a warning.
    let stats = summarize(&bins, &samples, DEFAULT_PROMINENCE);
    let mut ok = std::collections::BTreeMap::new();
    for (name, record) in stats {
        match record {
            Ok(r) => {
                ok.insert(name, r);
            }
            Err(e) => log::warn!("{name}: {e}"),
        }
    }

    // Aggregate band over all cumulative curves.
    let curves: Vec<CumulativeCurve> = samples
        .iter()
        .map(|(_, v)| CumulativeCurve::from_vector(v))
        .collect();
    let agg = AggregateCurves::from_curves(&curves)?;
    info!(
        "aggregate over n={} samples, first defined SEM {:?}",
        agg.n,
        agg.sem.iter().flatten().next()
    );

    let mean_record = mean_statistics(&bins, &samples, DEFAULT_PROMINENCE)?;
    println!(
        "mean-column statistics:\n{}",
        serde_json::to_string_pretty(&mean_record)?
    );

    // Flattened export table, formatted the way the geodatabase wants it:
    // LowerXpY column names with 'p' standing in for the decimal point.
    let table = grainstat::export::table(&bins, &samples, &ok)?;
    let path = "synthetic_gsd.csv";
    let mut writer = csv::Writer::from_path(path).context("creating CSV")?;

    let mut header = vec![
        "SampleID".to_string(),
        "BCSand".to_string(),
        "BCSilt".to_string(),
        "BCClay".to_string(),
    ];
    header.extend(
        table
            .bin_microns
            .iter()
            .map(|um| format!("Lower{}", format!("{um:.4}").replace('.', "p"))),
    );
    writer.write_record(&header)?;

    for row in &table.rows {
        let mut rec = vec![
            row.sample.clone(),
            format!("{:.3}", row.sand_pct),
            format!("{:.3}", row.silt_pct),
            format!("{:.3}", row.clay_pct),
        ];
        rec.extend(row.volumes.iter().map(|v| format!("{v:.5}")));
        writer.write_record(&rec)?;
    }
    writer.flush()?;
    println!("Wrote {} samples to {path}", table.rows.len());

    Ok(())
}
