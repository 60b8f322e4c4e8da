use crate::frequency::FrequencyMap;
use std::fmt::Write;

#[derive(Debug, Clone)]
pub struct PlotOptions {
    /// Plot only the N most frequent words.
    pub samples: Option<usize>,
    /// Running totals instead of per-word counts.
    pub cumulative: bool,
    /// Width in characters of the longest bar.
    pub width: usize,
}

impl Default for PlotOptions {
    fn default() -> Self {
        PlotOptions {
            samples: None,
            cumulative: false,
            width: 50,
        }
    }
}

/// Renders the frequency distribution as a horizontal text bar chart, most
/// frequent word first.
pub fn render(frequencies: &FrequencyMap, options: &PlotOptions) -> String {
    let mut ranked: Vec<(&str, usize)> = frequencies.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    if let Some(samples) = options.samples {
        ranked.truncate(samples);
    }

    let values: Vec<usize> = ranked
        .iter()
        .scan(0, |running, &(_, count)| {
            *running = if options.cumulative { *running + count } else { count };
            Some(*running)
        })
        .collect();
    let Some(&max) = values.iter().max() else {
        return String::new();
    };
    let label_width = ranked.iter().map(|(word, _)| word.len()).max().unwrap_or(0);
    let value_width = max.to_string().len();

    let mut out = String::new();
    for (&(word, _), &value) in ranked.iter().zip(&values) {
        let bar = if max == 0 { 0 } else { value * options.width / max };
        let _ = writeln!(
            out,
            "{:<label$} | {:>digits$} {}",
            word,
            value,
            "#".repeat(bar),
            label = label_width,
            digits = value_width
        );
    }
    out
}
