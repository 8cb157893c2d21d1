use globspec::catalog::{self, UnitKind};
use globspec::{Address, ExcludeSpec, Field, UnitAdaptor, resolve_field};
use globspec_test_utils::builders::list;

fn sources_field(fields: &[Field]) -> &globspec::SourcesField {
    fields
        .iter()
        .find_map(|f| match f {
            Field::Sources(s) if s.arg() == "sources" => Some(s),
            _ => None,
        })
        .expect("unit should have a sources field")
}

#[test]
fn test_kind_defaults_expand_under_unit_dir() {
    let adaptor = UnitAdaptor::new(Address::new("src/foo", "t"), UnitKind::Tests);
    let fields = adaptor.fields().unwrap();
    assert_eq!(fields.len(), 1);

    let sources = sources_field(&fields);
    assert_eq!(
        sources.path_globs().include,
        [
            "src/foo/test_*.*",
            "src/foo/*_test.*",
            "src/foo/*Test.*",
            "src/foo/*Spec.*"
        ]
    );
    assert!(sources.path_globs().exclude.is_empty());
    // The filespec keeps the unjoined view.
    assert_eq!(sources.filespec().globs, catalog::TEST_GLOBS);
}

#[test]
fn java_library_defaults_exclude_test_names() {
    let adaptor = UnitAdaptor::new(Address::new("src/jvm", "lib"), UnitKind::JavaLibrary);
    let fields = adaptor.fields().unwrap();
    let sources = sources_field(&fields);

    assert_eq!(sources.path_globs().include, ["src/jvm/*.java"]);
    assert_eq!(sources.path_globs().exclude, ["src/jvm/*Test.java"]);
    assert_eq!(
        sources.filespec().exclude,
        [ExcludeSpec {
            globs: vec!["*Test.java".to_string()]
        }]
    );
}

#[test]
fn go_kind_globs_everything_but_build_files() {
    let adaptor = UnitAdaptor::new(Address::new("pkg/net", "net"), UnitKind::GoPackage);
    let fields = adaptor.fields().unwrap();
    let sources = sources_field(&fields);

    assert_eq!(sources.path_globs().include, ["pkg/net/*"]);
    assert_eq!(
        sources.path_globs().exclude,
        ["pkg/net/BUILD", "pkg/net/BUILD.*"]
    );
}

#[test]
fn explicit_declaration_overrides_defaults() {
    let adaptor = UnitAdaptor::new(Address::new("src/jvm", "lib"), UnitKind::JavaLibrary)
        .with_arg("sources", list(&["Foo.java"]));
    let fields = adaptor.fields().unwrap();
    let sources = sources_field(&fields);

    assert_eq!(sources.filespec().globs, ["Foo.java"]);
    assert!(sources.filespec().exclude.is_empty());
}

#[test]
fn explicit_empty_declaration_still_produces_a_field() {
    let adaptor = UnitAdaptor::new(Address::new("src/jvm", "lib"), UnitKind::JavaLibrary)
        .with_arg("sources", list(&[]));
    let fields = adaptor.fields().unwrap();
    let sources = sources_field(&fields);

    // Defaults are never consulted once a declaration exists, even an empty one.
    assert!(sources.filespec().is_empty());
    assert!(sources.filespec().exclude.is_empty());
}

#[test]
fn kind_without_defaults_and_no_declaration_produces_no_field() {
    let adaptor = UnitAdaptor::new(Address::new("src/misc", "lib"), UnitKind::Library);
    assert!(adaptor.fields().unwrap().is_empty());

    let remote = UnitAdaptor::new(Address::new("3rdparty", "jars"), UnitKind::RemoteSources);
    assert!(remote.fields().unwrap().is_empty());
}

#[test]
fn resources_are_never_defaulted() {
    let bare = UnitAdaptor::new(Address::new("src/py", "lib"), UnitKind::PythonLibrary);
    let fields = bare.fields().unwrap();
    assert_eq!(fields.len(), 1, "no resources field without a declaration");

    let declared = UnitAdaptor::new(Address::new("src/py", "lib"), UnitKind::PythonLibrary)
        .with_arg("resources", list(&["data/schema.json"]));
    let fields = declared.fields().unwrap();
    assert_eq!(fields.len(), 2);

    let resources = fields
        .iter()
        .find_map(|f| match f {
            Field::Sources(s) if s.arg() == "resources" => Some(s),
            _ => None,
        })
        .expect("declared resources should resolve");
    assert_eq!(resources.filespec().globs, ["data/schema.json"]);
    assert_eq!(resources.path_globs().include, ["src/py/data/schema.json"]);
}

#[test]
fn default_excludes_layer_after_declaration_excludes() {
    let raw_excludes = list(&["legacy/*"]);
    let field = resolve_field(
        &Address::new("src/py", "lib"),
        "sources",
        None,
        Some(&raw_excludes),
        "src/py",
        Some(&["*.py"]),
        Some(&["test_*.py"]),
    )
    .unwrap()
    .expect("defaults should synthesize a field");

    assert_eq!(field.filespec().globs, ["*.py"]);
    assert_eq!(
        field.filespec().exclude,
        [ExcludeSpec {
            globs: vec!["legacy/*".to_string(), "test_*.py".to_string()]
        }]
    );
}

#[test]
fn literal_collection_joins_under_base_dir() {
    let decl = list(&["a.go", "b.go"]);
    let field = resolve_field(
        &Address::new("pkg", "pkg"),
        "sources",
        Some(&decl),
        None,
        "pkg",
        None,
        None,
    )
    .unwrap()
    .unwrap();

    assert_eq!(field.filespec().globs, ["a.go", "b.go"]);
    assert!(field.filespec().exclude.is_empty());
    assert_eq!(field.path_globs().include, ["pkg/a.go", "pkg/b.go"]);
}

#[test]
fn adaptor_exposes_its_default_policy() {
    let tests = UnitAdaptor::new(Address::new("src/foo", "t"), UnitKind::Tests);
    assert_eq!(tests.default_sources_globs(), Some(catalog::TEST_GLOBS));
    assert_eq!(tests.default_sources_exclude_globs(), Some(&[] as &[&str]));

    let lib = UnitAdaptor::new(Address::new("src/misc", "lib"), UnitKind::Library);
    assert_eq!(lib.default_sources_globs(), None);

    let scala = UnitAdaptor::new(Address::new("src/jvm", "s"), UnitKind::ScalaLibrary);
    assert_eq!(
        scala.default_sources_exclude_globs(),
        Some(catalog::SCALA_TEST_GLOBS)
    );
}
