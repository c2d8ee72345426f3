// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::process::Command;

use pretty_assertions::assert_eq;

fn run_gbd(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_gbd"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_prints_gap_after_every_edit() {
    let output = run_gbd(&["--capacity", "2", "insert:0:A", "insert:0:B", "delete:0:1"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "start  [__]  gap_start=0, gap_end=2\n\
         insert:0:A  A[_]  gap_start=1, gap_end=2\n\
         insert:0:B  B[]A  gap_start=1, gap_end=1\n\
         delete:0:1  [_]A  gap_start=0, gap_end=1\n\
         => A\n"
    );
}

#[test]
fn test_seed_and_fixed_growth() {
    let output = run_gbd(&[
        "--capacity",
        "5",
        "--seed",
        "hello",
        "--growth",
        "fixed:3",
        "type:5:!",
        "cursor:0",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("type:5:!  hello![__]  gap_start=6, gap_end=8"), "{stdout}");
    assert!(stdout.contains("cursor:0  [__]hello!  gap_start=0, gap_end=2"), "{stdout}");
    assert!(stdout.ends_with("=> hello!\n"), "{stdout}");
}

#[test]
fn test_out_of_bounds_exits_with_error() {
    let output = run_gbd(&["insert:1:A"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("out of bounds"), "{stderr}");
}

#[test]
fn test_malformed_command_is_rejected() {
    let output = run_gbd(&["jump:3"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unknown command 'jump'"), "{stderr}");
}

#[test]
fn test_seed_larger_than_capacity() {
    let output = run_gbd(&["--capacity", "1", "--seed", "ab"]);

    assert!(!output.status.success());
}
