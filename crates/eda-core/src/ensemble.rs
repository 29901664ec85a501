//! Validated ensembles of fixed-dimension samples.

use crate::errors::{EdaError, ErrorInfo};

fn invalid(code: &str, message: impl Into<String>) -> EdaError {
    EdaError::InvalidInput(ErrorInfo::new(code, message))
}

/// An immutable collection of `n` samples sharing dimension `p`.
///
/// Values are stored sample-major in a single buffer so each sample is a
/// contiguous slice. Construction validates that the ensemble is non-empty,
/// that every sample has the same dimension and that every value is finite.
#[derive(Debug, Clone, PartialEq)]
pub struct Ensemble {
    samples: usize,
    dimension: usize,
    values: Vec<f64>,
}

impl Ensemble {
    /// Builds an ensemble from one vector per sample.
    pub fn from_samples(samples: Vec<Vec<f64>>) -> Result<Self, EdaError> {
        let Some(first) = samples.first() else {
            return Err(invalid("ensemble_empty", "ensemble has no samples"));
        };
        let dimension = first.len();
        let mut values = Vec::with_capacity(samples.len() * dimension);
        for (index, sample) in samples.iter().enumerate() {
            if sample.len() != dimension {
                return Err(EdaError::InvalidInput(
                    ErrorInfo::new("dimension_mismatch", "samples have different dimensions")
                        .with_context("sample", index)
                        .with_context("expected", dimension)
                        .with_context("actual", sample.len()),
                ));
            }
            values.extend_from_slice(sample);
        }
        Self::from_row_major(samples.len(), dimension, values)
    }

    /// Builds an ensemble from a sample-major buffer of `samples * dimension` values.
    pub fn from_row_major(
        samples: usize,
        dimension: usize,
        values: Vec<f64>,
    ) -> Result<Self, EdaError> {
        if samples == 0 {
            return Err(invalid("ensemble_empty", "ensemble has no samples"));
        }
        if dimension == 0 {
            return Err(invalid("dimension_zero", "samples must have at least one coordinate"));
        }
        let expected = samples.checked_mul(dimension).ok_or_else(|| {
            invalid("shape_overflow", "samples * dimension overflows usize")
        })?;
        if values.len() != expected {
            return Err(EdaError::InvalidInput(
                ErrorInfo::new("shape_mismatch", "buffer length does not match shape")
                    .with_context("samples", samples)
                    .with_context("dimension", dimension)
                    .with_context("len", values.len()),
            ));
        }
        if let Some(position) = values.iter().position(|value| !value.is_finite()) {
            return Err(EdaError::InvalidInput(
                ErrorInfo::new("non_finite_value", "ensemble contains a non-finite value")
                    .with_context("sample", position / dimension)
                    .with_context("coordinate", position % dimension)
                    .with_hint("drop or impute missing measurements before computing depth"),
            ));
        }
        Ok(Self {
            samples,
            dimension,
            values,
        })
    }

    /// Builds an ensemble from a dimension-major buffer (`dimension` rows of
    /// `samples` values each), the layout used for profile matrices.
    pub fn from_column_major(
        dimension: usize,
        samples: usize,
        values: Vec<f64>,
    ) -> Result<Self, EdaError> {
        if samples == 0 {
            return Err(invalid("ensemble_empty", "ensemble has no samples"));
        }
        if dimension == 0 {
            return Err(invalid("dimension_zero", "samples must have at least one coordinate"));
        }
        if Some(values.len()) != samples.checked_mul(dimension) {
            return Err(EdaError::InvalidInput(
                ErrorInfo::new("shape_mismatch", "buffer length does not match shape")
                    .with_context("samples", samples)
                    .with_context("dimension", dimension)
                    .with_context("len", values.len()),
            ));
        }
        let mut transposed = Vec::with_capacity(values.len());
        for sample in 0..samples {
            for coord in 0..dimension {
                transposed.push(values[coord * samples + sample]);
            }
        }
        Self::from_row_major(samples, dimension, transposed)
    }

    /// Number of samples `n`.
    pub fn len(&self) -> usize {
        self.samples
    }

    /// Always false; empty ensembles cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.samples == 0
    }

    /// Dimension `p` shared by every sample.
    pub fn dim(&self) -> usize {
        self.dimension
    }

    /// Returns sample `index`, or `None` when out of range.
    pub fn sample(&self, index: usize) -> Option<&[f64]> {
        if index >= self.samples {
            return None;
        }
        let start = index * self.dimension;
        Some(&self.values[start..start + self.dimension])
    }

    /// Iterates over samples in ensemble order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.values.chunks_exact(self.dimension)
    }

    /// Raw sample-major values.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// View over every member of the ensemble.
    pub fn view(&self) -> EnsembleView<'_> {
        EnsembleView {
            ensemble: self,
            skip: None,
        }
    }

    /// View over every member except `index`.
    pub fn view_without(&self, index: usize) -> Result<EnsembleView<'_>, EdaError> {
        if index >= self.samples {
            return Err(EdaError::InvalidInput(
                ErrorInfo::new("sample_out_of_range", "excluded index is out of range")
                    .with_context("index", index)
                    .with_context("samples", self.samples),
            ));
        }
        if self.samples == 1 {
            return Err(invalid(
                "ensemble_empty",
                "excluding the only sample leaves an empty ensemble",
            ));
        }
        Ok(EnsembleView {
            ensemble: self,
            skip: Some(index),
        })
    }
}

/// Borrowed view over an ensemble with at most one member left out.
#[derive(Debug, Clone, Copy)]
pub struct EnsembleView<'a> {
    ensemble: &'a Ensemble,
    skip: Option<usize>,
}

impl<'a> EnsembleView<'a> {
    /// Number of members visible through the view.
    pub fn len(&self) -> usize {
        self.ensemble.len() - usize::from(self.skip.is_some())
    }

    /// True when no members are visible.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dimension of every member.
    pub fn dim(&self) -> usize {
        self.ensemble.dim()
    }

    /// Returns the `k`-th visible member.
    pub fn get(&self, k: usize) -> Option<&'a [f64]> {
        let index = match self.skip {
            Some(skip) if k >= skip => k + 1,
            _ => k,
        };
        self.ensemble.sample(index)
    }

    /// Iterates over visible members in ensemble order.
    pub fn iter(&self) -> impl Iterator<Item = &'a [f64]> + 'a {
        let skip = self.skip;
        self.ensemble
            .iter()
            .enumerate()
            .filter(move |(index, _)| Some(*index) != skip)
            .map(|(_, sample)| sample)
    }

    /// Fails with `InvalidInput` unless `v` matches the member dimension.
    pub fn check_query(&self, v: &[f64]) -> Result<(), EdaError> {
        if v.len() != self.dim() {
            return Err(EdaError::InvalidInput(
                ErrorInfo::new("dimension_mismatch", "query dimension differs from ensemble")
                    .with_context("expected", self.dim())
                    .with_context("actual", v.len()),
            ));
        }
        if v.iter().any(|value| !value.is_finite()) {
            return Err(invalid("non_finite_value", "query contains a non-finite value"));
        }
        Ok(())
    }
}
