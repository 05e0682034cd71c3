use std::fs;
use std::path::Path;
use std::path::PathBuf;

use crate::config::RunConfig;
use crate::file_system::FileSystemInteractor;

pub const REAL_FS: FileSystemInteractor = FileSystemInteractor { dry_run: false };

pub const DRY_FS: FileSystemInteractor = FileSystemInteractor { dry_run: true };

/// A template with all three placeholder tokens, as a real one would have.
pub const SAMPLE_TEMPLATE: &str = "<mqpar>
  <filePaths><string>__RAW__</string></filePaths>
  <fastaFilePath>__FASTA__</fastaFilePath>
  <experiment>__LABEL__</experiment>
</mqpar>
";

/// Write a fasta file and an mqpar template into `dir` and return a config
/// pointing at them, with run and output roots nested under `dir`.
pub fn sample_config(dir: &Path) -> RunConfig {
    let fasta = dir.join("ref.fasta");
    let mqpar = dir.join("mqpar.xml");

    fs::write(&fasta, ">protein\nMKWVTFISLLF\n").unwrap();
    fs::write(&mqpar, SAMPLE_TEMPLATE).unwrap();

    RunConfig {
        fasta_file: fasta,
        mqpar_file: mqpar,
        maxquant_cmd: "maxquant".to_string(),
        run_dir: Some(dir.join("run")),
        out_dir: Some(dir.join("out")),
        add_raw_name_to_out_dir: false,
        add_uuid_to_run_dir: false,
        sbatch_cmds: String::new(),
        cleanup: false,
        batch: Default::default(),
    }
}

/// A raw file to submit, created inside `dir`.
pub fn sample_raw(dir: &Path) -> PathBuf {
    let raw = dir.join("sample1.raw");
    fs::write(&raw, "raw bytes").unwrap();
    raw
}
