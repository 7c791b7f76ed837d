//! Station name lookup.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::Telecode;

use super::error::StationError;

/// Display-name → telecode lookup, built once at startup.
///
/// The source is the 12306 `station_name.js` feed: a JavaScript assignment
/// wrapping a long blob of `|`-delimited station entries separated by `@`.
#[derive(Debug, Clone, Default)]
pub struct StationTable {
    codes: HashMap<String, Telecode>,
}

impl StationTable {
    /// Build the table from the raw feed text.
    ///
    /// The text is split on any of `@`, `'`, `;`; the first two and last
    /// two segments are the `var station_names = '...'` wrapper and are
    /// discarded. Each remaining segment is `short|name|telecode|pinyin|…`;
    /// segments with fewer than four parts or a malformed telecode are
    /// skipped without error.
    pub fn build(raw: &str) -> Self {
        let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
        let segments: Vec<&str> = raw.split(['@', '\'', ';']).collect();
        let body = match segments.len() {
            n if n > 4 => &segments[2..n - 2],
            _ => &[][..],
        };

        let codes = body
            .iter()
            .filter_map(|segment| {
                let parts: Vec<&str> = segment.split('|').collect();
                if parts.len() > 3 {
                    let code: Telecode = parts[2].parse().ok()?;
                    Some((parts[1].to_string(), code))
                } else {
                    None
                }
            })
            .collect();

        Self { codes }
    }

    /// Read the feed file as UTF-8 and build the table.
    ///
    /// A leading BOM (the upstream feed ships one) is tolerated.
    pub fn load(path: &Path) -> Result<Self, StationError> {
        let raw = std::fs::read_to_string(path).map_err(|source| StationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::build(&raw))
    }

    /// Look up the telecode for a display name.
    ///
    /// Absence is a valid outcome, not an error; the caller decides
    /// whether to proceed without a code.
    pub fn code(&self, display_name: &str) -> Option<Telecode> {
        self.codes.get(display_name).copied()
    }

    /// Number of stations in the table.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the table holds no stations.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const FEED: &str = "var station_names ='@bjb|北京北|VAP|beijingbei|bjb|0\
@bjp|北京|BJP|beijing|bjp|1@bxp|北京西|BXP|beijingxi|bxp|2';";

    fn tele(s: &str) -> Telecode {
        Telecode::parse(s).unwrap()
    }

    #[test]
    fn build_from_feed_snippet() {
        let table = StationTable::build(FEED);

        assert_eq!(table.len(), 3);
        assert_eq!(table.code("北京北"), Some(tele("VAP")));
        assert_eq!(table.code("北京"), Some(tele("BJP")));
        assert_eq!(table.code("北京西"), Some(tele("BXP")));
    }

    #[test]
    fn lookup_miss_is_none() {
        let table = StationTable::build(FEED);
        assert_eq!(table.code("长沙"), None);
        assert_eq!(table.code(""), None);
    }

    #[test]
    fn keeps_only_the_strict_middle() {
        // Exactly 6 segments: 0, 1 and the last two are discarded even
        // though they would parse as station entries.
        let raw = "h0|头零|AAA|x@h1|头一|BBB|x@b|北京|BJP|x\
@s|上海|SHH|x@t0|尾零|CCC|x@t1|尾一|DDD|x";
        let table = StationTable::build(raw);

        assert_eq!(table.len(), 2);
        assert_eq!(table.code("北京"), Some(tele("BJP")));
        assert_eq!(table.code("上海"), Some(tele("SHH")));
        assert_eq!(table.code("头零"), None);
        assert_eq!(table.code("尾一"), None);
    }

    #[test]
    fn skips_malformed_segments() {
        // Middle holds: a too-short segment, a bad telecode, a good entry.
        let raw = "x@x@short|entry@c|长沙|csq-bad|x@c|长沙南|CWQ|x@x@x";
        let table = StationTable::build(raw);

        assert_eq!(table.len(), 1);
        assert_eq!(table.code("长沙南"), Some(tele("CWQ")));
        assert_eq!(table.code("长沙"), None);
    }

    #[test]
    fn too_few_segments_builds_empty() {
        assert!(StationTable::build("").is_empty());
        assert!(StationTable::build("a@b").is_empty());
        assert!(StationTable::build("a@b@c@d").is_empty());
    }

    #[test]
    fn strips_leading_bom() {
        let raw = format!("\u{feff}{FEED}");
        let table = StationTable::build(&raw);
        assert_eq!(table.code("北京西"), Some(tele("BXP")));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "\u{feff}{FEED}").unwrap();

        let table = StationTable::load(file.path()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.code("北京"), Some(tele("BJP")));
    }

    #[test]
    fn load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-file");

        let err = StationTable::load(&path).unwrap_err();
        assert!(err.to_string().contains("no-such-file"));
    }
}
