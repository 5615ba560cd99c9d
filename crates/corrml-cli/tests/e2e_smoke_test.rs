use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use corrml_cli::{Args, run};

/// Collects all .corrml files from a directory
fn collect_corrml_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("corrml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Demo documents live at the workspace root, not in the crate
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args_for(input: &Path, output: &Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
        escaped: false,
        br: false,
        nbsp: false,
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_corrml_files(demos_path());

    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename = format!("{}.html", demo_path.file_stem().unwrap().to_string_lossy());
        let output_path = temp_dir.path().join(output_filename);

        match run(&args_for(demo_path, &output_path)) {
            Ok(()) => assert!(output_path.exists(), "No output for {}", demo_path.display()),
            Err(e) => failed_demos.push((demo_path.clone(), e)),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_corrml_files(demos_path().join("errors"));

    assert!(!error_demos.is_empty(), "No error demos found in demos/errors/");

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_filename = format!(
            "error_{}.html",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if run(&args_for(demo_path, &output_path)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!("✅ All {} error demos failed as expected", error_demos.len());
}

#[test]
fn e2e_flags_override_config_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let input_path = temp_dir.path().join("input.corrml");
    fs::write(&input_path, "({ [[[1 a <b>]]] [[[1 c d]]] })").expect("Failed to write input");

    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[render]\nnbsp = [false, true]\n").expect("Failed to write config");

    let output_path = temp_dir.path().join("out.html");
    let args = Args {
        config: Some(config_path.to_string_lossy().to_string()),
        escaped: true,
        ..args_for(&input_path, &output_path)
    };

    run(&args).expect("Failed to run");

    let html = fs::read_to_string(&output_path).expect("Failed to read output");
    assert!(html.contains("<span data-id=\"1\">a &lt;b&gt;</span>"));
    assert!(html.contains("<span data-id=\"1\">c&nbsp;d</span>"));
}

#[test]
fn e2e_missing_input_is_an_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let args = args_for(
        &temp_dir.path().join("absent.corrml"),
        &temp_dir.path().join("out.html"),
    );

    assert!(run(&args).is_err());
}
