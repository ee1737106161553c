//! The judge's line-based text format.
//!
//! All records are whitespace-separated decimal integers. The town line is
//! `H W` (height first); every deposit line is `y x` (row first).

use std::io::{BufRead, Write};

use anyhow::Context;

use crate::{Dataset, Point, ResourceKind, Town};

/// Read the next line and parse it as a single non-negative integer.
pub fn read_count(input: &mut impl BufRead) -> anyhow::Result<usize> {
    let line = read_line(input)?;
    line.trim()
        .parse()
        .with_context(|| format!("expected a count, got {:?}", line.trim()))
}

/// Read one dataset in the judge's text format.
pub fn read_dataset(input: &mut impl BufRead) -> anyhow::Result<Dataset> {
    let (height, width) = read_pair(input).context("town dimensions")?;
    let town = Town { height, width };

    let kind_count = read_count(input).context("resource kind count")?;
    let mut kinds = Vec::with_capacity(kind_count);
    for kind_idx in 0..kind_count {
        let deposit_count =
            read_count(input).with_context(|| format!("deposit count of kind {}", kind_idx))?;
        let mut deposits = Vec::with_capacity(deposit_count);
        for _ in 0..deposit_count {
            let (y, x) = read_pair(input).with_context(|| format!("deposit of kind {}", kind_idx))?;
            deposits.push(Point { x, y });
        }
        kinds.push(ResourceKind { deposits });
    }

    Ok(Dataset { town, kinds })
}

/// Write one dataset in the judge's text format, the exact inverse of
/// [`read_dataset`].
pub fn write_dataset(output: &mut impl Write, dataset: &Dataset) -> std::io::Result<()> {
    writeln!(output, "{} {}", dataset.town.height, dataset.town.width)?;
    writeln!(output, "{}", dataset.kinds.len())?;
    for kind in &dataset.kinds {
        writeln!(output, "{}", kind.deposits.len())?;
        for p in &kind.deposits {
            writeln!(output, "{} {}", p.y, p.x)?;
        }
    }
    Ok(())
}

fn read_line(input: &mut impl BufRead) -> anyhow::Result<String> {
    let mut buf = String::new();
    let num_bytes_read = input.read_line(&mut buf)?;
    anyhow::ensure!(num_bytes_read != 0, "unexpected end of input");
    Ok(buf)
}

fn read_pair(input: &mut impl BufRead) -> anyhow::Result<(i32, i32)> {
    let line = read_line(input)?;
    let mut parts = line.split_whitespace();
    let first = parts
        .next()
        .with_context(|| format!("expected two numbers, got {:?}", line.trim()))?
        .parse()
        .with_context(|| format!("bad number in {:?}", line.trim()))?;
    let second = parts
        .next()
        .with_context(|| format!("expected two numbers, got {:?}", line.trim()))?
        .parse()
        .with_context(|| format!("bad number in {:?}", line.trim()))?;
    Ok((first, second))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::SmallDataset;

    const SAMPLE: &str = "3 3\n2\n1\n0 0\n1\n2 2\n";

    #[test]
    fn reads_the_sample_dataset() {
        let mut input = Cursor::new(SAMPLE);
        let dataset = read_dataset(&mut input).unwrap();
        assert_eq!(
            dataset.town,
            Town {
                height: 3,
                width: 3
            }
        );
        assert_eq!(dataset.kinds.len(), 2);
        assert_eq!(dataset.kinds[0].deposits, vec![Point { x: 0, y: 0 }]);
        assert_eq!(dataset.kinds[1].deposits, vec![Point { x: 2, y: 2 }]);
    }

    #[test]
    fn deposit_lines_are_row_first() {
        // `1 2` is row 1, column 2.
        let mut input = Cursor::new("4 5\n1\n1\n1 2\n");
        let dataset = read_dataset(&mut input).unwrap();
        assert_eq!(dataset.kinds[0].deposits, vec![Point { x: 2, y: 1 }]);
    }

    #[test]
    fn truncated_input_is_an_error() {
        let mut input = Cursor::new("3 3\n2\n1\n0 0\n");
        assert!(read_dataset(&mut input).is_err());
    }

    #[test]
    fn non_numeric_token_is_an_error() {
        let mut input = Cursor::new("3 x\n");
        assert!(read_dataset(&mut input).is_err());
    }

    quickcheck! {
        // Pins down the axis mapping: a transposed reader or writer would
        // disagree on any non-square dataset.
        fn write_then_read_preserves_the_dataset(dataset: SmallDataset) -> bool {
            let mut text = Vec::new();
            write_dataset(&mut text, &dataset.0).unwrap();
            read_dataset(&mut Cursor::new(text)).unwrap() == dataset.0
        }
    }
}
