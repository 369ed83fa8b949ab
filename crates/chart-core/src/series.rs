// File: crates/chart-core/src/series.rs
// Summary: Category series model (parallel labels and values) shared by all panel kinds.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeriesError {
    #[error("series has {labels} labels but {values} values")]
    LengthMismatch { labels: usize, values: usize },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl Series {
    /// Build from parallel label/value lists; lengths must match.
    pub fn try_new<L, S>(labels: L, values: Vec<f64>) -> Result<Self, SeriesError>
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() != values.len() {
            return Err(SeriesError::LengthMismatch { labels: labels.len(), values: values.len() });
        }
        Ok(Self { labels, values })
    }

    /// Build from `(label, value)` pairs; cannot mismatch.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let (labels, values) = pairs.into_iter().map(|(l, v)| (l.into(), v)).unzip();
        Self { labels, values }
    }

    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Sum of finite values.
    pub fn total(&self) -> f64 {
        self.values.iter().filter(|v| v.is_finite()).sum()
    }

    /// Copy with entries permuted by `order` (indices into this series).
    /// Out-of-range indices are skipped.
    pub fn reordered(&self, order: &[usize]) -> Self {
        let mut out = Series::default();
        for &i in order {
            if let (Some(l), Some(v)) = (self.labels.get(i), self.values.get(i)) {
                out.labels.push(l.clone());
                out.values.push(*v);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = Series::try_new(["a", "b"], vec![1.0]).unwrap_err();
        assert_eq!(err, SeriesError::LengthMismatch { labels: 2, values: 1 });
    }

    #[test]
    fn reorder_follows_indices() {
        let s = Series::from_pairs([("a", 1.0), ("b", 3.0), ("c", 2.0)]);
        let r = s.reordered(&[1, 2, 0]);
        assert_eq!(r.labels, vec!["b", "c", "a"]);
        assert_eq!(r.values, vec![3.0, 2.0, 1.0]);
        assert_eq!(s.total(), 6.0);
    }
}
