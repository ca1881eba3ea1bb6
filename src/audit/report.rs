//! CSV snapshot written by list mode

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};

use crate::error::Result;
use crate::registry::component::ImageComponent;

/// Snapshot file created in the current working directory.
pub const AUDIT_CSV: &str = "audit_list.csv";

/// Write the snapshot: header row `name,version,id`, every field quoted.
pub fn write_csv<W: Write>(writer: W, components: &[&ImageComponent]) -> Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    csv_writer.write_record(["name", "version", "id"])?;
    for component in components {
        csv_writer.write_record([&component.name, &component.version, &component.id])?;
    }
    csv_writer.flush()?;

    Ok(())
}

pub fn write_audit_file(path: &Path, components: &[&ImageComponent]) -> Result<()> {
    let file = File::create(path)?;
    write_csv(file, components)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(name: &str, version: &str, id: &str) -> ImageComponent {
        ImageComponent {
            name: name.to_string(),
            version: version.to_string(),
            id: id.to_string(),
        }
    }

    #[test]
    fn snapshot_quotes_every_field() {
        let a = component("acumos/portal-be", "1.16.0", "abc123");
        let b = component("acumos/portal-fe", "1.16.0-SNAPSHOT", "def456");
        let selected = vec![&a, &b];

        let mut buffer: Vec<u8> = Vec::new();
        write_csv(&mut buffer, &selected).unwrap();

        let written = String::from_utf8(buffer).unwrap();
        assert_eq!(
            written,
            "\"name\",\"version\",\"id\"\n\
             \"acumos/portal-be\",\"1.16.0\",\"abc123\"\n\
             \"acumos/portal-fe\",\"1.16.0-SNAPSHOT\",\"def456\"\n"
        );
    }

    #[test]
    fn empty_selection_still_writes_header() {
        let mut buffer: Vec<u8> = Vec::new();
        write_csv(&mut buffer, &[]).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "\"name\",\"version\",\"id\"\n"
        );
    }
}
