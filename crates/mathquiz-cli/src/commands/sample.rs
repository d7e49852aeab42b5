//! The `mathquiz sample` command.

use std::str::FromStr;

use anyhow::Result;

use mathquiz_core::generator::QuestionGenerator;
use mathquiz_core::model::{OperationType, QuestionLevel, SymbolStyle};
use mathquiz_core::random::{RandomSource, SeededRandom, SystemRandom};
use mathquiz_core::report::{worksheet_table, WorksheetRow};

/// Worksheet output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    Text,
    Json,
}

impl FromStr for SampleFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("unknown format: {other}"),
        }
    }
}

pub fn execute(
    count: u64,
    level: QuestionLevel,
    operation: OperationType,
    seed: Option<u64>,
    format: SampleFormat,
    answers: bool,
    unicode: bool,
) -> Result<()> {
    let count = usize::try_from(count)?;
    let rng: Box<dyn RandomSource> = match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(SystemRandom::new()),
    };

    let mut generator = QuestionGenerator::new(rng);
    let rows: Vec<WorksheetRow> = generator
        .generate_batch(count, operation, level)
        .iter()
        .enumerate()
        .map(|(i, q)| WorksheetRow::from_question(i + 1, q, answers))
        .collect();

    match format {
        SampleFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        SampleFormat::Text => {
            let symbols = if unicode {
                SymbolStyle::Unicode
            } else {
                SymbolStyle::Ascii
            };
            println!("Level: {level}  Operation: {operation}");
            println!("{}", worksheet_table(&rows, symbols));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names() {
        assert_eq!("json".parse::<SampleFormat>().unwrap(), SampleFormat::Json);
        assert_eq!("TEXT".parse::<SampleFormat>().unwrap(), SampleFormat::Text);
        let err = "xml".parse::<SampleFormat>().unwrap_err();
        assert_eq!(err.to_string(), "unknown format: xml");
    }
}
