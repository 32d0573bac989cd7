//! Rank statistics used by the comparator.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Average ranks (1-based); ties share the mean of the ranks they span.
fn average_ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap_or(Ordering::Equal)
    });

    let mut ranks = vec![0.0; values.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start;
        while end + 1 < order.len() && values[order[end + 1]] == values[order[start]] {
            end += 1;
        }
        let rank = (start + end) as f64 / 2.0 + 1.0;
        for &position in &order[start..=end] {
            ranks[position] = rank;
        }
        start = end + 1;
    }
    ranks
}

fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        // constant input carries no rank signal
        return 0.0;
    }
    cov / (var_x * var_y).sqrt()
}

/// Spearman rank correlation coefficient with average-rank tie handling.
pub fn spearman(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    if x.len() < 2 {
        return 0.0;
    }
    pearson(&average_ranks(x), &average_ranks(y))
}

/// Two-sided permutation p-value for an observed Spearman rho.
///
/// Shuffles one margin with a seeded generator and counts permutations at
/// least as extreme as the observed statistic; the estimate includes the
/// observed arrangement itself, so it is never exactly zero.
pub fn spearman_permutation_p(
    x: &[f64],
    y: &[f64],
    observed: f64,
    permutations: usize,
    seed: u64,
) -> f64 {
    if x.len() < 2 || permutations == 0 {
        return 1.0;
    }
    let x_ranks = average_ranks(x);
    let mut y_ranks = average_ranks(y);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut hits = 0usize;
    for _ in 0..permutations {
        y_ranks.shuffle(&mut rng);
        if pearson(&x_ranks, &y_ranks).abs() >= observed.abs() - 1e-12 {
            hits += 1;
        }
    }
    (hits + 1) as f64 / (permutations + 1) as f64
}

/// Jaccard overlap of two sets; 1.0 when both are empty.
pub fn jaccard<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let intersection = a.intersection(b).count() as f64;
    let union = a.union(b).count() as f64;
    intersection / union
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_average_over_ties() {
        assert_eq!(average_ranks(&[10.0, 20.0, 30.0]), vec![1.0, 2.0, 3.0]);
        assert_eq!(average_ranks(&[5.0, 5.0, 1.0]), vec![2.5, 2.5, 1.0]);
    }

    #[test]
    fn spearman_detects_monotone_relations() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let up = [10.0, 20.0, 30.0, 40.0, 50.0];
        let down = [5.0, 4.0, 3.0, 2.0, 1.0];
        assert!((spearman(&x, &up) - 1.0).abs() < 1e-12);
        assert!((spearman(&x, &down) + 1.0).abs() < 1e-12);
        assert_eq!(spearman(&x, &[7.0; 5]), 0.0);
    }

    #[test]
    fn permutation_p_is_small_for_a_perfect_correlation() {
        let x: Vec<f64> = (0..12).map(f64::from).collect();
        let y: Vec<f64> = x.iter().map(|v| v * 3.0 + 1.0).collect();
        let rho = spearman(&x, &y);
        let p = spearman_permutation_p(&x, &y, rho, 999, 42);
        assert!(p > 0.0 && p < 0.05);
    }

    #[test]
    fn permutation_p_is_reproducible_for_a_fixed_seed() {
        let x = [3.0, 1.0, 4.0, 1.5, 9.0, 2.6, 5.3];
        let y = [2.0, 7.0, 1.0, 8.0, 2.0, 8.0, 1.0];
        let rho = spearman(&x, &y);
        let a = spearman_permutation_p(&x, &y, rho, 500, 7);
        let b = spearman_permutation_p(&x, &y, rho, 500, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn jaccard_extremes() {
        let a: HashSet<&str> = ["x", "y"].into_iter().collect();
        let b: HashSet<&str> = ["p", "q"].into_iter().collect();
        assert_eq!(jaccard(&a, &a), 1.0);
        assert_eq!(jaccard(&a, &b), 0.0);
        let empty: HashSet<&str> = HashSet::new();
        assert_eq!(jaccard(&empty, &empty), 1.0);
    }
}
