use super::CollectionSummary;
use crate::error::Result;
use crate::types::ReportFormat;
use csv::{QuoteStyle, WriterBuilder};
use std::io::Write;

const HEADER: [&str; 6] = ["name", "alignment", "min_len", "max_len", "avg_len", "num_seqs"];

/// Writes collection summaries as tab-separated, CSV or fixed-width rows.
pub struct SummaryReport<W: Write> {
    sink: W,
    format: ReportFormat,
    width: usize,
}

impl<W: Write> SummaryReport<W> {
    /// `width` is the column width of the `align` format and is ignored by
    /// the others.
    pub fn new(sink: W, format: ReportFormat, width: usize) -> Self {
        Self {
            sink,
            format,
            width,
        }
    }

    pub fn write_header(&mut self) -> Result<()> {
        let header: Vec<Cell> = HEADER.iter().map(|s| Cell::Text(s.to_string())).collect();
        self.write_row(&header)
    }

    pub fn write_summary(&mut self, summary: &CollectionSummary) -> Result<()> {
        let row = [
            Cell::Text(summary.name.clone()),
            Cell::Text(if summary.is_alignment { "TRUE" } else { "FALSE" }.to_string()),
            Cell::Number(summary.min_length.to_string()),
            Cell::Number(summary.max_length.to_string()),
            Cell::Number(format!("{:.2}", summary.avg_length)),
            Cell::Number(summary.count.to_string()),
        ];
        self.write_row(&row)
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn write_row(&mut self, cells: &[Cell]) -> Result<()> {
        match self.format {
            ReportFormat::Tab => {
                let fields: Vec<&str> = cells.iter().map(Cell::as_str).collect();
                writeln!(self.sink, "{}", fields.join("\t"))?;
            }
            ReportFormat::Csv => {
                // Text is quoted by type, so a name like "42" stays quoted.
                let mut writer = WriterBuilder::new()
                    .quote_style(QuoteStyle::Never)
                    .from_writer(&mut self.sink);
                writer
                    .write_record(cells.iter().map(Cell::to_csv))
                    .map_err(std::io::Error::from)?;
                writer.flush()?;
            }
            ReportFormat::Align => {
                let line: String = cells.iter().map(|c| fit(c.as_str(), self.width)).collect();
                writeln!(self.sink, "{}", line)?;
            }
        }
        self.sink.flush()?;
        Ok(())
    }
}

enum Cell {
    Text(String),
    Number(String),
}

impl Cell {
    fn as_str(&self) -> &str {
        match self {
            Cell::Text(s) | Cell::Number(s) => s,
        }
    }

    fn to_csv(&self) -> String {
        match self {
            Cell::Text(s) => format!("\"{}\"", s.replace('"', "\"\"")),
            Cell::Number(s) => s.clone(),
        }
    }
}

/// Left-justify `field` in exactly `width` characters, truncating if needed.
fn fit(field: &str, width: usize) -> String {
    let mut fitted: String = field.chars().take(width).collect();
    let padding = width - fitted.chars().count();
    fitted.extend(std::iter::repeat(' ').take(padding));
    fitted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> CollectionSummary {
        CollectionSummary {
            name: "aln.fasta".to_string(),
            is_alignment: true,
            min_length: 3,
            max_length: 4,
            avg_length: 3.5,
            count: 2,
        }
    }

    fn render(format: ReportFormat, width: usize) -> String {
        let mut report = SummaryReport::new(Vec::new(), format, width);
        report.write_header().unwrap();
        report.write_summary(&summary()).unwrap();
        String::from_utf8(report.into_inner()).unwrap()
    }

    #[test]
    fn test_tab_rows() {
        assert_eq!(
            render(ReportFormat::Tab, 0),
            "name\talignment\tmin_len\tmax_len\tavg_len\tnum_seqs\naln.fasta\tTRUE\t3\t4\t3.50\t2\n"
        );
    }

    #[test]
    fn test_csv_quotes_text_only() {
        let text = render(ReportFormat::Csv, 0);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(
            rows[0],
            "\"name\",\"alignment\",\"min_len\",\"max_len\",\"avg_len\",\"num_seqs\""
        );
        assert_eq!(rows[1], "\"aln.fasta\",\"TRUE\",3,4,3.50,2");
    }

    #[test]
    fn test_csv_quotes_numeric_looking_names() {
        let mut report = SummaryReport::new(Vec::new(), ReportFormat::Csv, 0);
        for name in ["42", "1e5", "say \"hi\""] {
            let mut row = summary();
            row.name = name.to_string();
            report.write_summary(&row).unwrap();
        }
        let text = String::from_utf8(report.into_inner()).unwrap();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[0], "\"42\",\"TRUE\",3,4,3.50,2");
        assert_eq!(rows[1], "\"1e5\",\"TRUE\",3,4,3.50,2");
        assert_eq!(rows[2], "\"say \"\"hi\"\"\",\"TRUE\",3,4,3.50,2");
    }

    #[test]
    fn test_align_pads_and_truncates() {
        let text = render(ReportFormat::Align, 6);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[0], "name  alignmmin_lemax_leavg_lenum_se");
        assert_eq!(rows[1], "aln.faTRUE  3     4     3.50  2     ");
    }
}
