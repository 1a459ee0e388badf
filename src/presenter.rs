use std::io::{self, Write};
use crate::models::DisplayRecord;

/// Writes the header line followed by one line per record
///
/// # Arguments
///
/// * 'out' - sink to write to
/// * 'header' - header line, without line break
/// * 'records' - records to write, in order
pub fn present<W: Write>(out: &mut W, header: &str, records: &[DisplayRecord]) -> io::Result<()> {
    writeln!(out, "{}", header)?;
    for r in records {
        writeln!(out, "{}", r)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_then_records() {
        let records = vec![
            DisplayRecord { timestamp: "2024-10-16T10:00:00Z".into(), temperature: 5.5, precipitation: 0.2 },
            DisplayRecord { timestamp: "2024-10-16T11:00:00Z".into(), temperature: 0.0, precipitation: 0.0 },
        ];
        let mut out: Vec<u8> = Vec::new();

        present(&mut out, "Karlskrona väder idag:", &records).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(),
                   "Karlskrona väder idag:\n\
                    2024-10-16T10:00:00Z | 5.5°C, 0.2 mm precipitation\n\
                    2024-10-16T11:00:00Z | 0°C, 0 mm precipitation\n");
    }

    #[test]
    fn no_records_is_header_only() {
        let mut out: Vec<u8> = Vec::new();

        present(&mut out, "Karlskrona väder idag:", &[]).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Karlskrona väder idag:\n");
    }
}
