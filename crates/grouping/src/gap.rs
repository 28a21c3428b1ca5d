//! Gap grouping: partition a descending score sequence wherever the drop
//! between neighbors exceeds the population standard deviation of all
//! consecutive gaps.

use crate::score::ScoreSequence;

/// Partition scores into rank groups by gap statistics.
///
/// The threshold is the population standard deviation (no sample-size
/// correction) of the consecutive gaps `s[i] - s[i+1]`. Walking the
/// sequence in order, a running counter increments at every position whose
/// drop from its predecessor exceeds the threshold; position 0 is always
/// group 0.
///
/// A singleton sequence has no gaps; the threshold is taken as 0 and the
/// result is `[0]`. Output guarantees: same length as the input, first
/// element 0, non-decreasing.
pub fn gap_partition(scores: &ScoreSequence) -> Vec<u32> {
    let s = scores.as_slice();
    let gaps: Vec<f64> = s.windows(2).map(|w| w[0] - w[1]).collect();
    let threshold = population_std(&gaps);

    let mut groups = Vec::with_capacity(s.len());
    groups.push(0u32);
    let mut counter = 0u32;
    for i in 1..s.len() {
        if (s[i - 1] - s[i]).abs() > threshold {
            counter += 1;
        }
        groups.push(counter);
    }
    groups
}

/// Population standard deviation; 0 for an empty slice.
fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    variance.sqrt()
}
