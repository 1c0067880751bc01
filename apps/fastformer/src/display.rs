//! Output formatting for encoder specifications and parameter listings

use crate::encoder::EncoderSpec;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, ContentArrangement, Table};
use fastformer_builder::Dictionary;
use std::io;

/// Output renderer for CLI results
pub struct OutputRenderer {
    json_output: bool,
}

impl OutputRenderer {
    /// Create new output renderer
    pub fn new(json_output: bool) -> Self {
        Self { json_output }
    }

    /// Render a constructed encoder
    pub fn render_encoder(&self, spec: &EncoderSpec) -> io::Result<()> {
        if self.json_output {
            println!("{}", serde_json::to_string_pretty(spec).map_err(io::Error::other)?);
            return Ok(());
        }

        println!("d_model:             {}", spec.d_model);
        println!("final normalization: {}", spec.final_normalization);
        println!();

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![
            Cell::new("Layer").add_attribute(Attribute::Bold),
            Cell::new("Attention").add_attribute(Attribute::Bold),
            Cell::new("Heads").add_attribute(Attribute::Bold),
            Cell::new("d_query").add_attribute(Attribute::Bold),
            Cell::new("d_value").add_attribute(Attribute::Bold),
            Cell::new("d_ff").add_attribute(Attribute::Bold),
            Cell::new("Activation").add_attribute(Attribute::Bold),
            Cell::new("Dropout").add_attribute(Attribute::Bold),
        ]);

        for layer in &spec.layers {
            table.add_row(vec![
                Cell::new(layer.index),
                Cell::new(&layer.attention_type),
                Cell::new(layer.n_heads),
                Cell::new(layer.query_dimensions),
                Cell::new(layer.value_dimensions),
                Cell::new(layer.feed_forward_dimensions),
                Cell::new(&layer.activation),
                Cell::new(layer.dropout),
            ]);
        }

        println!("{table}");
        Ok(())
    }

    /// Render a parameter snapshot
    pub fn render_parameters(&self, parameters: &Dictionary) -> io::Result<()> {
        if self.json_output {
            println!(
                "{}",
                serde_json::to_string_pretty(parameters).map_err(io::Error::other)?
            );
            return Ok(());
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![
            Cell::new("Parameter").add_attribute(Attribute::Bold),
            Cell::new("Type").add_attribute(Attribute::Bold),
            Cell::new("Default").add_attribute(Attribute::Bold),
        ]);

        for (name, value) in parameters.iter() {
            table.add_row(vec![
                Cell::new(name),
                Cell::new(value.kind()),
                Cell::new(value),
            ]);
        }

        println!("{table}");
        Ok(())
    }
}
