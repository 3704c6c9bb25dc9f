use crate::domain::model::{DistributionCounts, Parity};
use crate::domain::ports::{LineSink, LineSource};
use crate::utils::error::Result;

/// Splits `text` on `\n` and drops every empty segment.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').filter(|line| !line.is_empty()).collect()
}

/// In-memory form of [`distribute`]: returns `(sink_a, sink_b)`.
pub fn distribute_text(text: &str) -> (Vec<String>, Vec<String>) {
    let mut sink_a = Vec::new();
    let mut sink_b = Vec::new();

    for (index, line) in split_lines(text).into_iter().enumerate() {
        match Parity::of_index(index) {
            Parity::Odd => sink_a.push(line.to_lowercase()),
            Parity::Even => sink_b.push(line.to_lowercase()),
        }
    }

    (sink_a, sink_b)
}

/// Streams every line of `source` into the sink selected by its parity,
/// lowercased, then finishes both sinks.
///
/// Stops at the first error; lines written before it stay in the sinks.
pub fn distribute<S, A, B>(
    source: &mut S,
    sink_a: &mut A,
    sink_b: &mut B,
) -> Result<DistributionCounts>
where
    S: LineSource + ?Sized,
    A: LineSink + ?Sized,
    B: LineSink + ?Sized,
{
    let mut counts = DistributionCounts::default();

    while let Some(line) = source.next_line()? {
        let parity = Parity::of_index(counts.lines_read);
        let lowered = line.to_lowercase();

        match parity {
            Parity::Odd => sink_a.write_line(&lowered)?,
            Parity::Even => sink_b.write_line(&lowered)?,
        }
        counts.record(parity);
    }

    sink_a.finish()?;
    sink_b.finish()?;

    counts.blank_skipped = source.blank_skipped();
    tracing::debug!(
        "Distributed {} lines ({} to A, {} to B, {} blank dropped)",
        counts.lines_read,
        counts.sink_a_lines,
        counts.sink_b_lines,
        counts.blank_skipped
    );

    Ok(counts)
}
