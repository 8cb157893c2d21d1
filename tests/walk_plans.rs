use std::error::Error;
use std::path::{Path, PathBuf};

use globspec::catalog::UnitKind;
use globspec::fs::RealFileSystem;
use globspec::fs::mock::MockFileSystem;
use globspec::walk::expand_globs;
use globspec::{Address, DeclValue, Field, GlobSpec, UnitAdaptor, normalize_value};
use globspec_test_utils::builders::{GlobSpecBuilder, list};

type TestResult = Result<(), Box<dyn Error>>;

/// Flat sample tree shared by the walk tests:
///
/// ```text
/// repo/4.txt
/// repo/a/3.txt
/// repo/a/b/1.txt
/// repo/a/b/2
/// repo/c/1.txt
/// ```
fn sample_tree() -> MockFileSystem {
    let fs = MockFileSystem::new();
    for path in ["repo/4.txt", "repo/a/3.txt", "repo/a/b/1.txt", "repo/a/b/2", "repo/c/1.txt"] {
        fs.add_file(path);
    }
    fs
}

fn rel(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| {
            p.strip_prefix("repo")
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

fn walk_decl(fs: &MockFileSystem, decl: &DeclValue) -> Vec<String> {
    let spec = normalize_value(Some(decl), "").unwrap();
    let plan = spec.to_path_globs("");
    rel(&expand_globs(fs, Path::new("repo"), &plan).unwrap())
}

#[test]
fn literal_paths_match_exactly() {
    let fs = sample_tree();
    assert_eq!(
        walk_decl(&fs, &list(&["4.txt", "a/b/2"])),
        ["4.txt", "a/b/2"]
    );
    assert_eq!(walk_decl(&fs, &list(&["z.txt"])), Vec::<String>::new());
}

#[test]
fn shallow_globs_stay_within_one_directory() {
    let fs = sample_tree();
    assert_eq!(
        walk_decl(&fs, &GlobSpecBuilder::globs(&["*.txt"]).build()),
        ["4.txt"]
    );
    assert_eq!(
        walk_decl(&fs, &GlobSpecBuilder::globs(&["a/b/*"]).build()),
        ["a/b/1.txt", "a/b/2"]
    );
}

#[test]
fn recursive_globs_descend_into_subdirectories() {
    let fs = sample_tree();
    assert_eq!(
        walk_decl(&fs, &GlobSpecBuilder::rglobs(&["*.txt"]).build()),
        ["4.txt", "a/3.txt", "a/b/1.txt", "c/1.txt"]
    );
}

#[test]
fn zglobs_use_explicit_doublestar() {
    let fs = sample_tree();
    // `**` matches zero or more directories, so siblings of `a/` count too.
    assert_eq!(
        walk_decl(&fs, &GlobSpecBuilder::zglobs(&["a/**/*.txt"]).build()),
        ["a/3.txt", "a/b/1.txt"]
    );
}

#[test]
fn excludes_filter_walk_results() {
    let fs = sample_tree();
    let decl = GlobSpecBuilder::rglobs(&["*.txt"])
        .exclude(DeclValue::List(vec![list(&["a/b/*.txt", "4.txt"])]))
        .build();
    assert_eq!(walk_decl(&fs, &decl), ["a/3.txt", "c/1.txt"]);
}

#[test]
fn empty_selection_matches_nothing() {
    let fs = sample_tree();
    let plan = GlobSpec::files(Vec::new(), "").to_path_globs("");
    assert!(expand_globs(&fs, Path::new("repo"), &plan).unwrap().is_empty());
}

#[test]
fn go_unit_walk_skips_build_manifests() {
    let fs = MockFileSystem::new();
    for path in [
        "repo/pkg/a.go",
        "repo/pkg/util.c",
        "repo/pkg/BUILD",
        "repo/pkg/BUILD.bazel",
        "repo/pkg/testdata/x.go",
    ] {
        fs.add_file(path);
    }

    let adaptor = UnitAdaptor::new(Address::new("pkg", "pkg"), UnitKind::GoPackage);
    let fields = adaptor.fields().unwrap();
    let Field::Sources(sources) = &fields[0] else {
        panic!("expected a sources field");
    };

    let found = rel(&expand_globs(&fs, Path::new("repo"), sources.path_globs()).unwrap());
    assert_eq!(found, ["pkg/a.go", "pkg/util.c"]);
}

#[test]
fn real_filesystem_walk_matches_the_plan() -> TestResult {
    let dir = tempfile::tempdir()?;
    let root = dir.path();
    std::fs::create_dir_all(root.join("src/deep"))?;
    std::fs::write(root.join("src/lib.rs"), "")?;
    std::fs::write(root.join("src/lib_test.rs"), "")?;
    std::fs::write(root.join("src/deep/util.rs"), "")?;
    std::fs::write(root.join("README.md"), "")?;

    let decl = GlobSpecBuilder::rglobs(&["*.rs"])
        .exclude(DeclValue::List(vec![list(&["*_test.rs"])]))
        .build();
    let spec = normalize_value(Some(&decl), "src")?;
    let plan = spec.to_path_globs("src");

    let found = expand_globs(&RealFileSystem, root, &plan)?;
    let found: Vec<String> = found
        .iter()
        .map(|p| {
            p.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    assert_eq!(found, ["src/deep/util.rs", "src/lib.rs"]);
    Ok(())
}
