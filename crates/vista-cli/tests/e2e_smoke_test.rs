use std::{fs, path::PathBuf};

use tempfile::tempdir;

use vista::VistaError;
use vista_cli::{Args, run};

/// Collects all .toml manifests from a directory
fn collect_manifests(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Demos live at the workspace root, not in the crate
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args_for(input: &PathBuf, output: PathBuf) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: Some(output.to_string_lossy().to_string()),
        config: None,
        format: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_manifests(demos_path());
    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_path = temp_dir.path().join(format!(
            "{}.txt",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        match run(&args_for(demo_path, output_path.clone())) {
            Ok(()) => {
                let listing = fs::read_to_string(&output_path).unwrap();
                assert!(
                    !listing.is_empty(),
                    "{} produced an empty listing",
                    demo_path.display()
                );
            }
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
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_manifests(demos_path().join("errors"));
    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_path = temp_dir.path().join(format!(
            "error_{}.txt",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        if run(&args_for(demo_path, output_path)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    assert!(
        unexpectedly_succeeded.is_empty(),
        "error demo(s) succeeded unexpectedly: {unexpectedly_succeeded:?}"
    );
}

#[test]
fn e2e_online_shop_toml_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_path().join("online_shop.toml");
    let output = temp_dir.path().join("online_shop.toml");

    let mut args = args_for(&input, output.clone());
    args.format = Some(vista::config::OutputFormat::Toml);
    run(&args).unwrap();

    let document: toml::Table = toml::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let views = document["views"].as_array().unwrap();
    let keys: Vec<&str> = views
        .iter()
        .map(|view| view["key"].as_str().unwrap())
        .collect();
    assert_eq!(
        keys,
        vec!["landscape", "context", "containers", "api-components"]
    );

    let containers: Vec<&str> = views[2]["elements"]
        .as_array()
        .unwrap()
        .iter()
        .map(|id| id.as_str().unwrap())
        .collect();
    assert_eq!(containers, vec!["web", "api", "db", "customer"]);
}

#[test]
fn e2e_config_disables_neighbours() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[views]\ninclude_neighbours = false\n\n[output]\nformat = \"toml\"\n",
    )
    .unwrap();
    let input = demos_path().join("online_shop.toml");
    let output = temp_dir.path().join("views.toml");

    let mut args = args_for(&input, output.clone());
    args.config = Some(config_path.to_string_lossy().to_string());
    run(&args).unwrap();

    let document: toml::Table = toml::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let context = document["views"].as_array().unwrap()[1]["elements"]
        .as_array()
        .unwrap()
        .len();
    // Only the scope; relationship patterns never add elements.
    assert_eq!(context, 1);
}

#[test]
fn e2e_error_keeps_view_name() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_path().join("errors").join("unknown_identifier.toml");

    let err = run(&args_for(&input, temp_dir.path().join("out.txt"))).unwrap_err();

    match err {
        VistaError::Parse { view, err, .. } => {
            assert_eq!(view, "teams");
            assert!(err.diagnostics()[0].message().contains("\"teamA\""));
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
}
