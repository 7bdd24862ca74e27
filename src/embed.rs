use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::config::Config;
use crate::symbol::{is_c_identifier, length_symbol};

/// What a successful `embed` call produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedSummary {
    pub byte_count: usize,
    pub array_symbol: String,
    pub length_symbol: String,
}

/// Render `data` as an external byte array named `symbol` followed by its length constant.
pub fn render(data: &[u8], symbol: &str, config: &Config) -> String {
    // roughly "255, " per byte plus the fixed declarations
    let mut out = String::with_capacity(data.len() * 5 + 256);

    for line in config.preamble() {
        out.push_str(&line);
        out.push('\n');
    }

    out.push_str(&format!("extern const unsigned char {symbol}[] = {{\n"));

    let row_count = data.len().div_ceil(config.layout.row_width);
    for (index, row) in data.chunks(config.layout.row_width).enumerate() {
        let values: Vec<String> = row.iter().map(|byte| byte.to_string()).collect();
        out.push_str(&config.layout.indent);
        out.push_str(&values.join(", "));
        if index + 1 < row_count {
            out.push(',');
        }
        out.push('\n');
    }

    out.push_str("};\n");
    out.push_str(&format!(
        "extern const {} {} = {};\n",
        config.size_type(),
        length_symbol(symbol),
        data.len()
    ));

    out
}

/// Read `input` whole, render it and write the result to `output` in one write.
///
/// The input is fully read before `output` is touched, so a failed read leaves
/// any existing output file as it was.
pub fn embed(input: &Path, symbol: &str, output: &Path, config: &Config) -> Result<EmbedSummary> {
    if !is_c_identifier(symbol)? {
        warn!(symbol, "symbol name is not a valid C identifier, the output will not compile");
    }

    let data = fs::read(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    debug!(input = %input.display(), bytes = data.len(), "read input");

    let text = render(&data, symbol, config);

    fs::write(output, &text)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;
    debug!(output = %output.display(), chars = text.len(), "wrote declarations");

    Ok(EmbedSummary {
        byte_count: data.len(),
        array_symbol: symbol.to_string(),
        length_symbol: length_symbol(symbol),
    })
}
