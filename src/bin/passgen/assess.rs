use std::io::{self, BufRead, Write};

use anyhow::Context;

use crate::ProgError;

pub(crate) fn assess(password: Option<String>, json: bool) -> Result<(), ProgError> {
    let mut stdout = io::stdout().lock();
    match password {
        Some(p) => {
            write_assessment(&mut stdout, &p, json).context("failed to write to stdout")?;
        }
        None => {
            let count = assess_lines(io::stdin().lock(), &mut stdout, json)
                .context("failed to assess passwords from stdin")?;
            log::debug!("assessed {} password(s) from stdin", count);
        }
    }
    Ok(())
}

/// Assess each line of `input` as it arrives. Lines that aren't valid UTF-8 are assessed
/// lossily rather than aborting the batch.
fn assess_lines(input: impl BufRead, mut output: impl Write, json: bool) -> io::Result<usize> {
    let mut count = 0;
    for line in input.split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        write_assessment(&mut output, &String::from_utf8_lossy(&line), json)?;
        count += 1;
    }
    Ok(count)
}

fn write_assessment(mut output: impl Write, password: &str, json: bool) -> io::Result<()> {
    let strength = passgen::assess(password);
    if json {
        serde_json::to_writer(&mut output, &strength)?;
        writeln!(output)
    } else {
        writeln!(
            output,
            "{} {} ({}/{})",
            crate::meter::bar(strength),
            strength.label(),
            strength.level(),
            passgen::Strength::MAX_LEVEL
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(password: &str, json: bool) -> String {
        let mut out = Vec::new();
        write_assessment(&mut out, password, json).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_output() {
        assert_eq!(written("abcdefgh", false), "■■□□□ Weak (2/5)\n");
    }

    #[test]
    fn invalid_utf8_lines_do_not_abort_the_batch() {
        let input: &[u8] = b"ok\n\xff\xfe\r\nabcdefgh\r\n";
        let mut out = Vec::new();
        let count = assess_lines(input, &mut out, true).unwrap();
        assert_eq!(count, 3);
        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out.lines().collect::<Vec<_>>(),
            [
                "{\"label\":\"Too Short\",\"level\":1}",
                "{\"label\":\"Too Short\",\"level\":1}",
                "{\"label\":\"Weak\",\"level\":2}",
            ]
        );
    }

    #[test]
    fn json_output() {
        assert_eq!(written("", true), "{\"label\":\"\",\"level\":0}\n");
        assert_eq!(written("abc", true), "{\"label\":\"Too Short\",\"level\":1}\n");
    }
}
