//! CSV export for cash-flow projections and pollutant breakdowns.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::calc::projection::CashFlowProjection;
use crate::emissions::PollutantEmissions;
use crate::error::{Error, Result};

/// Column header of the projection export. Empty cells mark scopes that do not apply.
pub const PROJECTION_HEADER: &str = "year,new_system_net,control_system_net,combined_net";

/// Column header of the pollutant export.
pub const EMISSIONS_HEADER: &str =
    "pollutant,unit,existing,new_without_control,new_with_control,savings";

fn create(path: &Path) -> Result<io::BufWriter<File>> {
    let file = File::create(path).map_err(|source| Error::FileIo {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(io::BufWriter::new(file))
}

fn optional_cell(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}")).unwrap_or_default()
}

/// Exports a cash-flow projection to a CSV file at the given path.
///
/// # Arguments
///
/// * `projection` - Projection to export
/// * `path` - Output file path
///
/// # Errors
///
/// Returns an error if file creation or writing fails.
pub fn export_projection_csv(projection: &CashFlowProjection, path: &Path) -> Result<()> {
    write_projection_csv(projection, create(path)?)
}

/// Writes a cash-flow projection as CSV to any writer.
///
/// One row per year, net positions rounded to cents.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_projection_csv(projection: &CashFlowProjection, writer: impl Write) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(PROJECTION_HEADER.split(','))?;

    for row in &projection.rows {
        wtr.write_record(&[
            row.year.to_string(),
            format!("{:.2}", row.new_system),
            optional_cell(row.control_system),
            optional_cell(row.combined),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Exports a pollutant breakdown to a CSV file at the given path.
///
/// # Errors
///
/// Returns an error if file creation or writing fails.
pub fn export_emissions_csv(rows: &[PollutantEmissions], path: &Path) -> Result<()> {
    write_emissions_csv(rows, create(path)?)
}

/// Writes a pollutant breakdown as CSV to any writer.
///
/// Values are in the unit named by the `unit` column.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_emissions_csv(rows: &[PollutantEmissions], writer: impl Write) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(EMISSIONS_HEADER.split(','))?;

    for r in rows {
        let e = &r.emissions;
        wtr.write_record(&[
            r.pollutant.symbol().to_string(),
            r.unit.per_year_label().to_string(),
            format!("{:.6}", e.existing),
            format!("{:.6}", e.new_without_control),
            format!("{:.6}", e.new_with_control),
            format!("{:.6}", e.savings),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::types::{CalculationInput, SystemInput};
    use crate::calc::{CalculationOutput, recompute};
    use crate::emissions::{self, Pollutant};

    fn retrofit() -> (CalculationInput, CalculationOutput) {
        let system = SystemInput {
            power_w: 36.0,
            fixture_count: 10,
            hours_per_day: 10.0,
            days_per_year: 250,
            ..SystemInput::default()
        };
        let input = CalculationInput {
            electricity_price: 0.30,
            has_existing_system: true,
            existing: system.clone(),
            new_system: SystemInput {
                power_w: 18.0,
                ..system
            },
            ..CalculationInput::default()
        };
        let output = recompute(&input);
        (input, output)
    }

    fn to_string(buf: Vec<u8>) -> String {
        String::from_utf8(buf).expect("CSV output should be UTF-8")
    }

    #[test]
    fn projection_header_and_row_count() {
        let (input, output) = retrofit();
        let projection = CashFlowProjection::new(&input, &output, 10);
        let mut buf = Vec::new();
        write_projection_csv(&projection, &mut buf).expect("projection CSV should write");
        let text = to_string(buf);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.first().copied(), Some(PROJECTION_HEADER));
        // 1 header + years 0..=10
        assert_eq!(lines.len(), 12);
    }

    #[test]
    fn projection_leaves_missing_scopes_empty() {
        let (input, output) = retrofit();
        let projection = CashFlowProjection::new(&input, &output, 1);
        let mut buf = Vec::new();
        write_projection_csv(&projection, &mut buf).expect("projection CSV should write");
        let text = to_string(buf);
        assert_eq!(text.lines().nth(1), Some("0,0.00,,"));
    }

    #[test]
    fn emissions_has_one_row_per_pollutant() {
        let (input, output) = retrofit();
        let rows = emissions::breakdown(&input, &output);
        let mut buf = Vec::new();
        write_emissions_csv(&rows, &mut buf).expect("emissions CSV should write");

        let mut rdr = csv::ReaderBuilder::new().from_reader(buf.as_slice());
        let headers = rdr.headers().expect("header row should parse");
        assert_eq!(headers.len(), 6);

        let records: Vec<csv::StringRecord> = rdr
            .records()
            .collect::<Result<_, _>>()
            .expect("rows should parse");
        assert_eq!(records.len(), Pollutant::ALL.len());
        assert_eq!(records[0].get(0), Some("CO2"));
        assert_eq!(records[0].get(1), Some("kg/year"));
        for rec in &records {
            for i in 2..6 {
                let val: Option<f64> = rec.get(i).and_then(|v| v.parse().ok());
                assert!(val.is_some(), "column {i} should parse as f64");
            }
        }
    }

    #[test]
    fn deterministic_output() {
        let (input, output) = retrofit();
        let projection = CashFlowProjection::new(&input, &output, 5);
        let mut buf1 = Vec::new();
        let mut buf2 = Vec::new();
        write_projection_csv(&projection, &mut buf1).expect("projection CSV should write");
        write_projection_csv(&projection, &mut buf2).expect("projection CSV should write");
        assert_eq!(buf1, buf2);
    }

    #[test]
    fn export_to_missing_directory_reports_path() {
        let (input, output) = retrofit();
        let rows = emissions::breakdown(&input, &output);
        let path = Path::new("/nonexistent-dir/emissions.csv");
        let err = export_emissions_csv(&rows, path);
        assert!(matches!(err, Err(Error::FileIo { .. })));
        assert!(
            err.err()
                .is_some_and(|e| e.to_string().contains("/nonexistent-dir/emissions.csv"))
        );
    }
}
