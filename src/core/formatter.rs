use crate::domain::model::{Concert, ConcertCollection};
use crate::utils::error::{ConcertError, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompleteConcert {
    pub id: String,
    pub name: String,
    pub missing: Vec<&'static str>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatReport {
    pub printed: usize,
    pub incomplete: Vec<IncompleteConcert>,
}

impl FormatReport {
    pub fn is_complete(&self) -> bool {
        self.incomplete.is_empty()
    }
}

pub fn format_output<W: Write>(
    format: OutputFormat,
    concerts: &ConcertCollection,
    out: &mut W,
) -> Result<FormatReport> {
    match format {
        OutputFormat::Text => format_output_text(concerts, out),
        OutputFormat::Json => format_output_json(concerts, out),
    }
}

fn write_concert<W: Write>(
    concert: &Concert,
    ticket_status: &str,
    resale_status: &str,
    out: &mut W,
) -> std::io::Result<()> {
    writeln!(out, "Name: {}", concert.name)?;
    writeln!(out, "Date: {}", concert.date)?;
    writeln!(out, "Venue: {}", concert.venue)?;
    writeln!(out, "Ticket Status: {}", ticket_status)?;
    writeln!(out, "Resale Ticket Status: {}", resale_status)?;
    writeln!(out, "URL: {}", concert.url)?;
    writeln!(out)
}

/// 逐筆輸出演唱會資訊；缺少票務狀態的項目會被列出，但不影響其他項目
pub fn format_output_text<W: Write>(
    concerts: &ConcertCollection,
    out: &mut W,
) -> Result<FormatReport> {
    let mut report = FormatReport::default();

    for concert in concerts {
        match (&concert.ticket_status, &concert.resale_ticket_status) {
            (Some(ticket_status), Some(resale_status)) => {
                write_concert(concert, ticket_status, resale_status, out)?;
                report.printed += 1;
            }
            _ => {
                let missing = concert.missing_fields();
                tracing::warn!(
                    "⚠️ Concert {} is missing {}",
                    concert.id,
                    missing.join(", ")
                );
                writeln!(
                    out,
                    "Skipped {} ({}): missing {}",
                    concert.name,
                    concert.id,
                    missing.join(", ")
                )?;
                writeln!(out)?;
                report.incomplete.push(IncompleteConcert {
                    id: concert.id.clone(),
                    name: concert.name.clone(),
                    missing,
                });
            }
        }
    }

    Ok(report)
}

/// 以 JSON 陣列輸出，未補上的欄位直接省略
pub fn format_output_json<W: Write>(
    concerts: &ConcertCollection,
    out: &mut W,
) -> Result<FormatReport> {
    serde_json::to_writer_pretty(&mut *out, concerts)
        .map_err(|e| ConcertError::IoError(e.into()))?;
    writeln!(out)?;

    let incomplete: Vec<IncompleteConcert> = concerts
        .iter()
        .filter(|concert| !concert.is_enriched())
        .map(|concert| IncompleteConcert {
            id: concert.id.clone(),
            name: concert.name.clone(),
            missing: concert.missing_fields(),
        })
        .collect();

    Ok(FormatReport {
        printed: concerts.len(),
        incomplete,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enriched(id: &str, name: &str) -> Concert {
        let mut concert = Concert::new(id, name, "2024-05-01", "Arena", "http://x");
        concert.ticket_status = Some("onsale".to_string());
        concert.resale_ticket_status = Some("available".to_string());
        concert
    }

    fn render(concerts: &ConcertCollection) -> (String, FormatReport) {
        let mut buffer = Vec::new();
        let report = format_output_text(concerts, &mut buffer).unwrap();
        (String::from_utf8(buffer).unwrap(), report)
    }

    #[test]
    fn test_text_output_prints_all_six_fields() {
        let concerts: ConcertCollection = vec![enriched("G5e", "Show")].into_iter().collect();
        let (text, report) = render(&concerts);

        assert_eq!(
            text,
            "Name: Show\nDate: 2024-05-01\nVenue: Arena\nTicket Status: onsale\n\
             Resale Ticket Status: available\nURL: http://x\n\n"
        );
        assert_eq!(report.printed, 1);
        assert!(report.is_complete());
    }

    #[test]
    fn test_missing_ticket_status_is_reported_without_halting() {
        let concerts: ConcertCollection = vec![
            enriched("A", "First"),
            Concert::new("B", "Unenriched", "2024-05-02", "Club", "http://y"),
            enriched("C", "Third"),
        ]
        .into_iter()
        .collect();

        let (text, report) = render(&concerts);

        assert_eq!(report.printed, 2);
        assert_eq!(report.incomplete.len(), 1);
        assert_eq!(report.incomplete[0].id, "B");
        assert_eq!(
            report.incomplete[0].missing,
            vec!["ticket_status", "resale_ticket_status"]
        );

        assert!(text.contains("Skipped Unenriched (B): missing ticket_status"));
        let first = text.find("Name: First").unwrap();
        let third = text.find("Name: Third").unwrap();
        assert!(first < third);
        assert!(!text.contains("Name: Unenriched"));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_json_write_failure_is_io_error() {
        let concerts: ConcertCollection = vec![enriched("A", "First")].into_iter().collect();

        let result = format_output_json(&concerts, &mut ClosedPipe);

        assert!(matches!(result, Err(ConcertError::IoError(_))));
    }

    #[test]
    fn test_json_output_omits_missing_statuses() {
        let concerts: ConcertCollection = vec![
            enriched("A", "First"),
            Concert::new("B", "Second", "2024-05-02", "Club", "http://y"),
        ]
        .into_iter()
        .collect();

        let mut buffer = Vec::new();
        let report = format_output_json(&concerts, &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value[0]["id"], "A");
        assert_eq!(value[0]["ticket_status"], "onsale");
        assert!(value[1].get("ticket_status").is_none());
        assert_eq!(report.printed, 2);
        assert_eq!(report.incomplete.len(), 1);
    }
}
