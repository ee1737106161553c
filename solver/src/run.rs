use std::io::{BufRead, Write};

use anyhow::Context;
use prospect::{read_count, read_dataset, smallest_mining_area, visualize_town};
use tracing::debug;

use crate::recording::Recorder;

/// Process a whole input stream: a dataset count line, then that many
/// datasets. One answer line is written per dataset.
///
/// Split out from `main` so that it can be driven from in-memory buffers.
pub fn process_datasets(
    mut input: impl BufRead,
    mut output: impl Write,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<()> {
    let dataset_count = read_count(&mut input).context("dataset count")?;
    for dataset_idx in 0..dataset_count {
        let dataset =
            read_dataset(&mut input).with_context(|| format!("dataset {}", dataset_idx))?;
        debug!("dataset {}\n{}", dataset_idx, visualize_town(&dataset));

        let area = smallest_mining_area(dataset.town, &dataset.kinds)
            .with_context(|| format!("dataset {}", dataset_idx))?;
        debug!(dataset_idx, area);
        writeln!(output, "{}", area)?;

        if let Some(recorder) = recorder {
            recorder.write_dataset_recording(&dataset, area)?;
        }
    }
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solves_a_multi_dataset_stream() {
        let input = "2\n\
                     3 3\n2\n1\n0 0\n1\n2 2\n\
                     3 3\n2\n1\n1 1\n1\n1 1\n";
        let mut output = Vec::new();
        process_datasets(input.as_bytes(), &mut output, &mut None).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "9\n1\n");
    }

    #[test]
    fn an_infeasible_dataset_names_its_index() {
        let input = "2\n\
                     3 3\n2\n1\n1 1\n1\n1 1\n\
                     3 3\n1\n0\n";
        let mut output = Vec::new();
        let err = process_datasets(input.as_bytes(), &mut output, &mut None).unwrap_err();
        assert!(format!("{:#}", err).contains("dataset 1"));
        // The first dataset was already answered before the failure.
        assert_eq!(String::from_utf8(output).unwrap(), "1\n");
    }

    #[test]
    fn truncated_stream_is_an_error() {
        let input = "2\n3 3\n2\n1\n0 0\n1\n2 2\n";
        let mut output = Vec::new();
        assert!(process_datasets(input.as_bytes(), &mut output, &mut None).is_err());
    }
}
