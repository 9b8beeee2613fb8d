//! Render command implementation.

use super::{read_events, CommandError};
use hdrfmt_core::{ConfigSource, FormatConfig, HeaderRenderer};
use std::io::{BufRead, Write};
use tracing::info;

/// Prints the formatted header prefix of each event, one per line.
pub fn run<S, R, W>(source: &S, input: R, mut output: W) -> Result<(), CommandError>
where
    S: ConfigSource + ?Sized,
    R: BufRead,
    W: Write,
{
    let config = FormatConfig::from_source(source);
    info!("Rendering headers in {:?} mode", HeaderRenderer::mode(&config));

    for event in read_events(input) {
        let event = event?;
        writeln!(output, "{}", config.render(event.headers()))?;
    }
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hdrfmt_core::Options;
    use std::io::Cursor;

    #[test]
    fn prints_one_prefix_per_event() {
        let options = Options::new().with("headers", "*");
        let input = Cursor::new(
            "{\"headers\":{\"h1\":\"v1\",\"h2\":\"v2\"},\"body\":\"x\"}\n{\"body\":\"y\"}\n",
        );
        let mut out = Vec::new();

        run(&options, input, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{h1=v1;h2=v2}\n{}\n");
    }

    #[test]
    fn stops_on_invalid_event() {
        let options = Options::new().with("headers", "a");
        let input = Cursor::new("{\"headers\":{\"a\":\"1\"}}\nnot json\n");
        let mut out = Vec::new();

        assert!(run(&options, input, &mut out).is_err());
        assert_eq!(String::from_utf8(out).unwrap(), "{a=1}\n");
    }
}
