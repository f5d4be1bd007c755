use crate::core::formatter::{format_output, FormatReport, OutputFormat};
use crate::domain::model::{SearchOutcome, SearchQuery};
use crate::domain::ports::ConcertSource;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunSummary {
    /// 搜尋沒有結果，後續階段不會執行
    NoConcerts,
    Completed {
        concerts: usize,
        report: FormatReport,
    },
}

/// 依序執行搜尋、補上票務狀態、輸出三個階段
pub struct ConcertEngine<S: ConcertSource> {
    source: S,
    output_format: OutputFormat,
}

impl<S: ConcertSource> ConcertEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            output_format: OutputFormat::Text,
        }
    }

    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    pub async fn run<W: Write>(&self, query: &SearchQuery, out: &mut W) -> Result<RunSummary> {
        tracing::info!("🚀 Starting concert search");

        let concerts = match self.source.find_concerts(query).await? {
            SearchOutcome::Found(concerts) => concerts,
            SearchOutcome::NotFound => {
                match self.output_format {
                    OutputFormat::Text => writeln!(out, "No concerts found.")?,
                    OutputFormat::Json => writeln!(out, "[]")?,
                }
                return Ok(RunSummary::NoConcerts);
            }
        };
        if self.output_format == OutputFormat::Text {
            writeln!(out, "Found concerts.")?;
            writeln!(out)?;
        }

        let concerts = self.source.find_ticket_availability(concerts).await?;

        let report = format_output(self.output_format, &concerts, out)?;
        if !report.is_complete() {
            tracing::warn!(
                "⚠️ {} concert(s) are missing availability data",
                report.incomplete.len()
            );
        }

        tracing::info!("✅ Printed {} concerts", report.printed);
        Ok(RunSummary::Completed {
            concerts: concerts.len(),
            report,
        })
    }
}
