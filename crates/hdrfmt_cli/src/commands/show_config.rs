//! Show-config command implementation.

use super::CommandError;
use hdrfmt_core::{ConfigSource, FormatConfig, HeaderRenderer, HeaderSelection};
use std::io::Write;

/// Prints the resolved configuration as text or JSON.
pub fn run<S, W>(source: &S, format: &str, mut output: W) -> Result<(), CommandError>
where
    S: ConfigSource + ?Sized,
    W: Write,
{
    let config = FormatConfig::from_source(source);

    match format {
        "json" => {
            writeln!(output, "{}", serde_json::to_string_pretty(&config)?)?;
        }
        _ => {
            print_text_output(&config, &mut output)?;
        }
    }

    Ok(())
}

fn print_text_output<W: Write>(config: &FormatConfig, output: &mut W) -> Result<(), CommandError> {
    let selection = match config.selection() {
        HeaderSelection::None => "none".to_string(),
        HeaderSelection::All => "all headers".to_string(),
        HeaderSelection::Explicit(names) => names.join(", "),
    };

    writeln!(output, "Header Format Configuration")?;
    writeln!(output, "===========================")?;
    writeln!(output, "Mode:             {:?}", HeaderRenderer::mode(config))?;
    writeln!(output, "Headers:          {}", selection)?;
    writeln!(output, "General template: {:?}", config.general_template())?;
    writeln!(output, "  open:           {:?}", config.general_open())?;
    writeln!(output, "  separator:      {:?}", config.general_separator())?;
    writeln!(output, "  close:          {:?}", config.general_close())?;
    writeln!(output, "Composite:        {:?}", config.composite_template())?;
    writeln!(output, "Append newline:   {}", config.append_newline())?;
    Ok(())
}
