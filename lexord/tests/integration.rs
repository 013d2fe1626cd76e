//! Integration tests for the lexord CLI.

use clap::Parser;
use lexord::cli::{Cli, run_cli};
use std::path::PathBuf;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("lexord-test").join(name);

    // Clean up previous test run
    if dir.exists() {
        std::fs::remove_dir_all(&dir).ok();
    }
    std::fs::create_dir_all(&dir).expect("failed to create temp dir");

    dir
}

#[test]
fn reencodes_dictionary_file() {
    let dir = temp_dir("reencode");
    let input = dir.join("dictionary.txt");
    let output = dir.join("dictionary.sorted.txt");

    std::fs::write(
        &input,
        "# format org.openvanilla.mcbopomofo.sorted\n\
         \n\
         ㄅㄛ-ㄆㄛ 玻珀 -3.14159\n\
         _punctuation_list _ 0.0\n\
         ㄇㄚˇ 馬 -4.5\n",
    )
    .expect("failed to write input");

    let cli = Cli::parse_from([
        "lexord",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);

    run_cli(cli).expect("failed to re-encode dictionary");

    let written = std::fs::read_to_string(&output).expect("output file not written");
    assert_eq!(
        written,
        "C2D2 玻珀 -3.142\n\
         _punctuation_list _ 0\n\
         KP 馬 -4.5\n"
    );
}

#[test]
fn malformed_reading_fails_the_run() {
    let dir = temp_dir("malformed");
    let input = dir.join("dictionary.txt");
    let output = dir.join("dictionary.sorted.txt");

    std::fs::write(&input, "ㄅㄛ--ㄆㄛ 玻珀 -3.5\n").expect("failed to write input");

    let cli = Cli::parse_from([
        "lexord",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);

    assert!(run_cli(cli).is_err());
}

#[test]
fn missing_input_reports_path_context() {
    let dir = temp_dir("missing");
    let input = dir.join("no-such-file.txt");

    let cli = Cli::parse_from(["lexord", input.to_str().unwrap()]);

    let err = run_cli(cli).expect_err("expected missing input to fail");
    assert!(format!("{err}").contains("no-such-file.txt"));
}
