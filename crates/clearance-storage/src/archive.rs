//! Line-oriented archive persistence for directories.
//!
//! Format: a decimal record-count header on the first line, then one
//! comma-separated record per line in store order. Delimiter characters
//! inside fields are backslash-escaped (see `codec`), so the round trip
//! reproduces every valid store exactly.
//!
//! Loading is all-or-nothing: the target directory is cleared up front and
//! repopulated only if the whole archive parses. A failed load leaves it
//! empty, never partially populated.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::codec::{encode_line, split_fields};
use crate::directory::Directory;
use crate::error::{ArchiveError, ArchiveResult};
use crate::traits::Record;

/// Serializes every record in store order to the writer, after the count
/// header.
pub fn save<T: Record, W: Write>(dir: &Directory<T>, out: &mut W) -> ArchiveResult<()> {
    writeln!(out, "{}", dir.len())?;
    let mut fields = Vec::new();
    for item in dir.iter() {
        fields.clear();
        item.encode(&mut fields);
        writeln!(out, "{}", encode_line(&fields))?;
    }
    Ok(())
}

/// Writes the directory to the file at `path`, creating or truncating it.
pub fn save_to_path<T: Record, P: AsRef<Path>>(dir: &Directory<T>, path: P) -> ArchiveResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| ArchiveError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    save(dir, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Replaces the directory contents with the records read from `input`.
///
/// The target is cleared first; on any failure it stays empty.
pub fn load_into<T: Record, R: BufRead>(dir: &mut Directory<T>, input: R) -> ArchiveResult<()> {
    dir.clear();
    let mut lines = input.lines();

    let header = lines
        .next()
        .ok_or_else(|| parse_error(1, "missing record count header"))??;
    let count: usize = header
        .trim()
        .parse()
        .map_err(|_| parse_error(1, format!("invalid record count: {header:?}")))?;

    // The count is untrusted input; let the vector grow as records
    // actually parse instead of preallocating from it.
    let mut records = Vec::new();
    for i in 0..count {
        let line_no = i + 2;
        let line = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(parse_error(
                    line_no,
                    format!("archive truncated: expected {count} records, found {i}"),
                ))
            }
        };
        let fields = split_fields(&line).map_err(|e| parse_error(line_no, e.to_string()))?;
        let record = T::decode(&fields).map_err(|e| parse_error(line_no, e.to_string()))?;
        records.push(record);
    }

    // Anything after the declared records must be blank
    for (offset, line) in lines.enumerate() {
        if !line?.trim().is_empty() {
            return Err(parse_error(
                count + 2 + offset,
                "trailing data after declared records",
            ));
        }
    }

    dir.extend(records);
    Ok(())
}

/// Reads the directory from the file at `path`. The file handle is
/// released on every exit path, parse failure included.
///
/// The target is cleared before the file is opened, so an open failure
/// leaves it empty like any other failed load.
pub fn load_from_path<T: Record, P: AsRef<Path>>(
    dir: &mut Directory<T>,
    path: P,
) -> ArchiveResult<()> {
    dir.clear();
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ArchiveError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_into(dir, BufReader::new(file))
}

fn parse_error(line: usize, message: impl Into<String>) -> ArchiveError {
    ArchiveError::Parse {
        line,
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clearance_domain::{Resource, User};
    use std::io::Cursor;

    fn user_directory() -> Directory<User> {
        let mut dir = Directory::new();
        dir.add(User::student("Alice", 1, 2, "CS-101").unwrap());
        dir.add(User::teacher("Dr. Smith", 2, 5, "Computer Science").unwrap());
        dir.add(User::administrator("Root", 3, 10).unwrap());
        dir
    }

    fn load_users(text: &str) -> (Directory<User>, ArchiveResult<()>) {
        let mut dir = user_directory();
        let result = load_into(&mut dir, Cursor::new(text.to_string()));
        (dir, result)
    }

    #[test]
    fn test_save_writes_count_header_and_tagged_records() {
        let mut out = Vec::new();
        save(&user_directory(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "3\n\
             Student,Alice,1,2,CS-101\n\
             Teacher,Dr. Smith,2,5,Computer Science\n\
             Administrator,Root,3,10\n"
        );
    }

    #[test]
    fn test_load_replaces_prior_contents() {
        let (dir, result) = load_users("1\nAdministrator,Solo,9,1\n");
        result.unwrap();
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.iter().next().unwrap().name(), "Solo");
    }

    #[test]
    fn test_unknown_tag_fails_and_leaves_store_empty() {
        let (dir, result) = load_users("1\nJanitor,Bob,1,2\n");
        assert!(matches!(
            result.unwrap_err(),
            ArchiveError::Parse { line: 2, .. }
        ));
        assert!(dir.is_empty());
    }

    #[test]
    fn test_bad_integer_fails_with_line_number() {
        let (dir, result) =
            load_users("2\nAdministrator,Root,3,10\nAdministrator,Other,x,10\n");
        assert!(matches!(
            result.unwrap_err(),
            ArchiveError::Parse { line: 3, .. }
        ));
        assert!(dir.is_empty());
    }

    #[test]
    fn test_unreadable_count_fails() {
        let (dir, result) = load_users("three\n");
        assert!(matches!(
            result.unwrap_err(),
            ArchiveError::Parse { line: 1, .. }
        ));
        assert!(dir.is_empty());

        let (dir, result) = load_users("");
        assert!(matches!(
            result.unwrap_err(),
            ArchiveError::Parse { line: 1, .. }
        ));
        assert!(dir.is_empty());
    }

    #[test]
    fn test_truncated_archive_fails() {
        let (dir, result) = load_users("3\nAdministrator,Root,3,10\n");
        assert!(matches!(
            result.unwrap_err(),
            ArchiveError::Parse { line: 3, .. }
        ));
        assert!(dir.is_empty());
    }

    #[test]
    fn test_huge_declared_count_fails_as_truncated() {
        let (dir, result) = load_users("100000000000\nAdministrator,Root,3,10\n");
        assert!(matches!(
            result.unwrap_err(),
            ArchiveError::Parse { line: 3, .. }
        ));
        assert!(dir.is_empty());
    }

    #[test]
    fn test_trailing_data_fails() {
        let (dir, result) = load_users("1\nAdministrator,Root,3,10\nAdministrator,More,4,1\n");
        assert!(matches!(
            result.unwrap_err(),
            ArchiveError::Parse { line: 3, .. }
        ));
        assert!(dir.is_empty());
    }

    #[test]
    fn test_trailing_blank_lines_are_tolerated() {
        let (dir, result) = load_users("1\nAdministrator,Root,3,10\n\n");
        result.unwrap();
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn test_resource_archive_roundtrip() {
        let mut dir = Directory::new();
        dir.add(Resource::new("Library", 3).unwrap());
        dir.add(Resource::new("Laboratory 101", 4).unwrap());

        let mut out = Vec::new();
        save(&dir, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out.clone()).unwrap(),
            "2\nLibrary,3\nLaboratory 101,4\n"
        );

        let mut reloaded = Directory::new();
        load_into(&mut reloaded, Cursor::new(out)).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert!(dir.iter().eq(reloaded.iter()));
    }
}
