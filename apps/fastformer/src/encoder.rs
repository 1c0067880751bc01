//! Demo encoder builder driven by the command line

use fastformer_builder::{builder_parameters, BuilderError, ConfigurableBuilder, Parameterized, Result};
use serde::Serialize;

const ATTENTION_TYPES: &[&str] = &["full", "linear", "causal-linear"];
const ACTIVATIONS: &[&str] = &["relu", "gelu"];

/// Upper bound on `n_layers` accepted by `get()`
pub const MAX_LAYERS: usize = 1024;

builder_parameters! {
    /// Builder for a stack of transformer encoder layers
    #[derive(PartialEq)]
    pub struct EncoderBuilder {
        pub n_layers: usize = 4,
        pub n_heads: usize = 4,
        pub query_dimensions: usize = 64,
        pub value_dimensions: usize = 64,
        pub feed_forward_dimensions: usize = 1024,
        pub attention_type: String = "full".to_string(),
        pub activation: String = "relu".to_string(),
        pub dropout: f64 = 0.1,
        pub final_normalization: bool = true,
    }
}

/// Layout of a constructed encoder
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncoderSpec {
    pub d_model: usize,
    pub layers: Vec<LayerSpec>,
    pub final_normalization: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerSpec {
    pub index: usize,
    pub attention_type: String,
    pub n_heads: usize,
    pub query_dimensions: usize,
    pub value_dimensions: usize,
    pub feed_forward_dimensions: usize,
    pub activation: String,
    pub dropout: f64,
}

impl EncoderBuilder {
    fn reject(message: impl Into<String>) -> fastformer_builder::Error {
        BuilderError::construction(Self::NAME, message).into()
    }
}

impl ConfigurableBuilder for EncoderBuilder {
    type Target = EncoderSpec;

    fn get(&self) -> Result<EncoderSpec> {
        if self.n_layers == 0 {
            return Err(Self::reject("n_layers must be at least 1"));
        }
        if self.n_layers > MAX_LAYERS {
            return Err(Self::reject(format!(
                "n_layers must be at most {MAX_LAYERS}, got {}",
                self.n_layers
            )));
        }
        if self.n_heads == 0 || self.query_dimensions == 0 || self.value_dimensions == 0 {
            return Err(Self::reject(
                "n_heads, query_dimensions and value_dimensions must be positive",
            ));
        }
        if !ATTENTION_TYPES.contains(&self.attention_type.as_str()) {
            return Err(Self::reject(format!(
                "unknown attention_type `{}` (expected one of: {})",
                self.attention_type,
                ATTENTION_TYPES.join(", ")
            )));
        }
        if !ACTIVATIONS.contains(&self.activation.as_str()) {
            return Err(Self::reject(format!(
                "unknown activation `{}` (expected one of: {})",
                self.activation,
                ACTIVATIONS.join(", ")
            )));
        }
        if !(0.0..1.0).contains(&self.dropout) {
            return Err(Self::reject(format!(
                "dropout must be in [0, 1), got {}",
                self.dropout
            )));
        }
        let d_model = self
            .n_heads
            .checked_mul(self.value_dimensions)
            .ok_or_else(|| Self::reject("n_heads * value_dimensions overflows"))?;

        let layers = (0..self.n_layers)
            .map(|index| LayerSpec {
                index,
                attention_type: self.attention_type.clone(),
                n_heads: self.n_heads,
                query_dimensions: self.query_dimensions,
                value_dimensions: self.value_dimensions,
                feed_forward_dimensions: self.feed_forward_dimensions,
                activation: self.activation.clone(),
                dropout: self.dropout,
            })
            .collect();

        Ok(EncoderSpec {
            d_model,
            layers,
            final_normalization: self.final_normalization,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastformer_builder::{kwargs, Dictionary};

    #[test]
    fn test_defaults_build() {
        let spec = EncoderBuilder::new().get().unwrap();
        assert_eq!(spec.d_model, 256);
        assert_eq!(spec.layers.len(), 4);
        assert!(spec.final_normalization);
    }

    #[test]
    fn test_kwargs_build() {
        let builder = EncoderBuilder::from_kwargs(kwargs! {
            n_layers = 2,
            n_heads = 8,
            activation = "gelu",
        })
        .unwrap();
        let spec = builder.get().unwrap();
        assert_eq!(spec.d_model, 512);
        assert_eq!(spec.layers[1].index, 1);
        assert_eq!(spec.layers[1].activation, "gelu");
    }

    #[test]
    fn test_rejects_unknown_activation() {
        let builder = EncoderBuilder::from_dictionary(
            Dictionary::new().with("activation", "swish"),
            true,
        )
        .unwrap();
        let err = builder.get().unwrap_err();
        assert!(matches!(
            err.as_builder(),
            Some(BuilderError::Construction { .. })
        ));
        assert!(err.to_string().contains("swish"));
    }

    #[test]
    fn test_rejects_dropout_out_of_range() {
        assert!(EncoderBuilder::new().with_dropout(1.0).get().is_err());
        assert!(EncoderBuilder::new().with_dropout(-0.1).get().is_err());
        assert!(EncoderBuilder::new().with_dropout(0.0).get().is_ok());
    }

    #[test]
    fn test_rejects_zero_layers() {
        assert!(EncoderBuilder::new().with_n_layers(0).get().is_err());
    }

    #[test]
    fn test_d_model_uses_value_dimensions() {
        let spec = EncoderBuilder::new()
            .with_query_dimensions(32)
            .with_value_dimensions(96)
            .get()
            .unwrap();
        assert_eq!(spec.d_model, 4 * 96);
        assert_eq!(spec.layers[0].query_dimensions, 32);
    }

    #[test]
    fn test_d_model_overflow_is_construction_error() {
        let err = EncoderBuilder::new()
            .with_n_heads(usize::MAX)
            .with_value_dimensions(2)
            .get()
            .unwrap_err();
        assert!(matches!(
            err.as_builder(),
            Some(BuilderError::Construction { .. })
        ));
        assert!(err.to_string().contains("overflows"));
    }

    #[test]
    fn test_layer_count_is_capped() {
        assert_eq!(
            EncoderBuilder::new()
                .with_n_layers(MAX_LAYERS)
                .get()
                .unwrap()
                .layers
                .len(),
            MAX_LAYERS
        );

        let err = EncoderBuilder::new()
            .with_n_layers(usize::MAX)
            .get()
            .unwrap_err();
        assert!(matches!(
            err.as_builder(),
            Some(BuilderError::Construction { .. })
        ));
    }
}
