use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use prospect::Dataset;
use serde::Serialize;

/// Writes every solved dataset together with its answer as a JSON file,
/// numbered in the order the datasets appeared in the input stream.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
}

#[derive(Serialize)]
struct DatasetRecording<'a> {
    dataset: &'a Dataset,
    minimal_area: i64,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self { num: 1, directory })
    }

    pub fn write_dataset_recording(
        &mut self,
        dataset: &Dataset,
        minimal_area: i64,
    ) -> anyhow::Result<()> {
        let filepath = self.directory.join(format!("dataset_{:0>6}.json", self.num));
        let writer = BufWriter::new(File::create(filepath)?);
        serde_json::to_writer_pretty(
            writer,
            &DatasetRecording {
                dataset,
                minimal_area,
            },
        )?;
        self.num += 1;
        Ok(())
    }
}
