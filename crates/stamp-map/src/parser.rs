//! Line-oriented map file parsing.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::MapError;
use crate::value::{DataMapping, Value};

/// Parses a single map-file line.
///
/// Returns `None` when the line is shorter than `separator.len() + 2` bytes
/// or does not contain the separator. Otherwise the first part is the key;
/// two parts give a [`Value::Scalar`], more give a [`Value::List`] of every
/// part after the key. Empty parts are kept.
///
/// ```rust
/// use stamp_map::{parse_line, Value};
///
/// assert_eq!(parse_line("a:b", ":"), Some(("a".into(), Value::from("b"))));
/// assert_eq!(parse_line("ab", ":"), None);
/// assert_eq!(parse_line("no separator", ":"), None);
/// ```
pub fn parse_line(line: &str, separator: &str) -> Option<(String, Value)> {
    if separator.is_empty() || line.len() < separator.len() + 2 {
        return None;
    }
    if !line.contains(separator) {
        return None;
    }

    let mut parts = line.split(separator);
    let key = parts.next()?.to_string();
    let mut rest: Vec<String> = parts.map(str::to_string).collect();

    let value = if rest.len() == 1 {
        Value::Scalar(rest.remove(0))
    } else {
        Value::List(rest)
    };
    Some((key, value))
}

/// Accumulates map entries from files and individual lines.
///
/// Later entries overwrite earlier ones with the same key. Call
/// [`finish`](Self::finish) to get the read-only [`DataMapping`].
#[derive(Debug, Clone)]
pub struct MapBuilder {
    separator: String,
    data: DataMapping,
}

impl MapBuilder {
    /// Creates a builder splitting on `separator`.
    pub fn new(separator: impl Into<String>) -> Result<Self, MapError> {
        let separator = separator.into();
        if separator.is_empty() {
            return Err(MapError::EmptySeparator);
        }
        Ok(Self {
            separator,
            data: DataMapping::new(),
        })
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Adds one line. Returns whether the line produced an entry.
    pub fn push_line(&mut self, line: &str) -> bool {
        match parse_line(line, &self.separator) {
            Some((key, value)) => {
                self.data.insert(key, value);
                true
            }
            None => false,
        }
    }

    /// Reads every line of the file at `path`.
    pub fn read_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, MapError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| MapError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let (accepted, skipped) = self
            .read_lines(BufReader::new(file))
            .map_err(|source| MapError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), accepted, skipped, "parsed map file");
        Ok(self)
    }

    /// Reads every line from an arbitrary reader.
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> std::io::Result<&mut Self> {
        self.read_lines(reader)?;
        Ok(self)
    }

    fn read_lines<R: BufRead>(&mut self, mut reader: R) -> std::io::Result<(usize, usize)> {
        let mut buf = Vec::new();
        let mut accepted = 0;
        let mut skipped = 0;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = buf
                .strip_suffix(b"\n")
                .map(|rest| rest.strip_suffix(b"\r").unwrap_or(rest))
                .unwrap_or(&buf[..]);
            // Undecodable bytes become U+FFFD; the line is still evaluated.
            if self.push_line(&String::from_utf8_lossy(line)) {
                accepted += 1;
            } else {
                skipped += 1;
            }
        }
        Ok((accepted, skipped))
    }

    pub fn finish(self) -> DataMapping {
        self.data
    }
}

/// Parses the map file at `path` in one pass.
pub fn parse_file(path: impl AsRef<Path>, separator: &str) -> Result<DataMapping, MapError> {
    let mut builder = MapBuilder::new(separator)?;
    builder.read_file(path)?;
    Ok(builder.finish())
}

/// Parses map content held in memory.
pub fn parse_str(content: &str, separator: &str) -> Result<DataMapping, MapError> {
    let mut builder = MapBuilder::new(separator)?;
    for line in content.lines() {
        builder.push_line(line);
    }
    Ok(builder.finish())
}
