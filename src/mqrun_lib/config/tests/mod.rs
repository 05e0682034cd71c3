use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use tempdir::TempDir;

use crate::config::BatchConfig;
use crate::config::RunConfig;
use crate::test_utils::REAL_FS;

/// This test will fail if the semantics of the config struct are changed.
/// If this is the case, update the documentation and make sure that the
/// rest of the application reflects these changes.
#[test]
fn breaking_changes_config_struct() {
    #[allow(clippy::unnecessary_operation)]
    RunConfig {
        fasta_file: PathBuf::from(""),
        mqpar_file: PathBuf::from(""),
        maxquant_cmd: "".to_string(),
        run_dir: None,
        out_dir: None,
        add_raw_name_to_out_dir: false,
        add_uuid_to_run_dir: false,
        sbatch_cmds: "".to_string(),
        cleanup: false,
        batch: BatchConfig::default(),
    };
}

/// This test will fail if the semantics of the config file are changed.
/// See above. Is this a valid reason for the user to update their old files?
#[test]
fn config_file_minimal_values() {
    let dir = TempDir::new("config_folder").expect("A temp folder could not be created.");
    let file_pathbuf = dir.path().join("file.toml");

    let config_contents = r#"
        fasta_file = "/data/ref.fasta"
        mqpar_file = "/data/mqpar.xml"
    "#;
    let mut file = File::create(file_pathbuf.as_path()).expect("A file could not be created.");
    file.write_all(config_contents.as_bytes())
        .expect("The test file could not be written.");

    assert_eq!(
        RunConfig {
            fasta_file: PathBuf::from("/data/ref.fasta"),
            mqpar_file: PathBuf::from("/data/mqpar.xml"),
            maxquant_cmd: "maxquant".to_string(),
            run_dir: None,
            out_dir: None,
            add_raw_name_to_out_dir: false,
            add_uuid_to_run_dir: false,
            sbatch_cmds: "".to_string(),
            cleanup: false,
            batch: BatchConfig::default(),
        },
        RunConfig::from_file(&file_pathbuf, &REAL_FS).unwrap()
    );
}

#[test]
fn config_file_all_values() {
    let dir = TempDir::new("config_folder").expect("A temp folder could not be created.");
    let file_pathbuf = dir.path().join("file.toml");

    let config_contents = r#"
        fasta_file = "/data/ref.fasta"
        mqpar_file = "/data/mqpar.xml"
        maxquant_cmd = "mono MaxQuantCmd.exe"
        run_dir = "/scratch/run"
        out_dir = "/results"
        add_raw_name_to_out_dir = true
        add_uuid_to_run_dir = true
        sbatch_cmds = "module load mono; source env.sh"
        cleanup = true

        [batch]
        time_limit = "2h 30m"
        nodes = 2
        ntasks_per_node = 4
        mem = 16000
    "#;
    let mut file = File::create(file_pathbuf.as_path()).expect("A file could not be created.");
    file.write_all(config_contents.as_bytes())
        .expect("The test file could not be written.");

    let config = RunConfig::from_file(&file_pathbuf, &REAL_FS).unwrap();

    assert_eq!(config.maxquant_cmd, "mono MaxQuantCmd.exe");
    assert_eq!(config.run_dir, Some(PathBuf::from("/scratch/run")));
    assert!(config.add_raw_name_to_out_dir);
    assert!(config.add_uuid_to_run_dir);
    assert!(config.cleanup);
    assert_eq!(
        config.batch.time_limit,
        Duration::from_secs(2 * 60 * 60 + 30 * 60)
    );
    assert_eq!(config.batch.nodes, 2);
    assert_eq!(config.batch.ntasks_per_node, 4);
    assert_eq!(config.batch.mem, 16000);
}

#[test]
fn config_file_rejects_unknown_fields() {
    let dir = TempDir::new("config_folder").expect("A temp folder could not be created.");
    let file_pathbuf = dir.path().join("file.toml");

    let config_contents = r#"
        fasta_file = "/data/ref.fasta"
        mqpar_file = "/data/mqpar.xml"
        output_dir = "/results"
    "#;
    let mut file = File::create(file_pathbuf.as_path()).expect("A file could not be created.");
    file.write_all(config_contents.as_bytes())
        .expect("The test file could not be written.");

    assert!(RunConfig::from_file(&file_pathbuf, &REAL_FS).is_err());
}

#[test]
fn config_file_rejects_invalid_duration() {
    let dir = TempDir::new("config_folder").expect("A temp folder could not be created.");
    let file_pathbuf = dir.path().join("file.toml");

    let config_contents = r#"
        fasta_file = "/data/ref.fasta"
        mqpar_file = "/data/mqpar.xml"

        [batch]
        time_limit = "ten hours"
    "#;
    let mut file = File::create(file_pathbuf.as_path()).expect("A file could not be created.");
    file.write_all(config_contents.as_bytes())
        .expect("The test file could not be written.");

    assert!(RunConfig::from_file(&file_pathbuf, &REAL_FS).is_err());
}
