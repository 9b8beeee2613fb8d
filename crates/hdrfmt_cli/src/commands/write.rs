//! Write command implementation.

use super::{read_events, CommandError};
use hdrfmt_core::{ConfigSource, EventSerializer, HeaderSerializer};
use std::io::{BufRead, Write};
use tracing::info;

/// Serializes every event from `input` to `output`.
///
/// Returns the number of events written.
pub fn run<S, R, W>(source: &S, input: R, output: W) -> Result<usize, CommandError>
where
    S: ConfigSource + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut serializer = HeaderSerializer::from_source(output, source);
    serializer.after_create()?;

    let mut count = 0;
    for event in read_events(input) {
        serializer.write(&event?)?;
        count += 1;
    }

    serializer.flush()?;
    serializer.before_close()?;
    info!("Wrote {} events", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hdrfmt_core::Options;
    use std::io::Cursor;

    #[test]
    fn writes_prefix_and_body() {
        let options = Options::new()
            .with("headers", "x")
            .with("headers_cf", "[ %x = $x ] ");
        let input = Cursor::new("{\"headers\":{\"x\":\"/tmp/f\"},\"body\":\"line one\"}\n");
        let mut out = Vec::new();

        let count = run(&options, input, &mut out).unwrap();
        assert_eq!(count, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "[ x = /tmp/f ] line one\n");
    }

    #[test]
    fn honours_append_newline() {
        let options = Options::new().with("appendNewline", "false");
        let input = Cursor::new("{\"body\":\"a\"}\n{\"body\":\"b\"}\n");
        let mut out = Vec::new();

        assert_eq!(run(&options, input, &mut out).unwrap(), 2);
        assert_eq!(out, b"ab".to_vec());
    }
}
