use std::error::Error;
use std::io::BufRead;

use once_cell::unsync::Lazy;
use regex_lite::Regex;

use crate::Int;

/// Reads one integer per line. Blank lines are skipped.
pub fn read_ints(r: impl BufRead) -> Result<Vec<Int>, Box<dyn Error>> {
    let line_re = Lazy::new(|| {
        Regex::new(r#"^\s*([-+]?\d+)\s*$"#).unwrap()
    });
    let mut ints = Vec::new();
    for (i, line) in r.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let caps = line_re
            .captures(&line)
            .ok_or_else(|| format!("line {}: expected an integer, got {:?}", i + 1, line))?;
        let n = caps[1]
            .parse::<Int>()
            .map_err(|e| format!("line {}: {}", i + 1, e))?;
        ints.push(n);
    }
    Ok(ints)
}
