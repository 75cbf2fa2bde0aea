use super::*;
use clap::CommandFactory;
use std::io::Cursor;

fn entry(name: &str, path: &str) -> FontCatalogEntry {
    FontCatalogEntry {
        display_name: name.to_string(),
        path: PathBuf::from(path),
    }
}

#[test]
fn parses_list_args() {
    let cli = Cli::try_parse_from([
        "typcat", "list", "-e", "ttf", "-n", "Mono", "--json", "/fonts",
    ])
    .expect("parse cli");

    let Command::List(args) = cli.command else {
        panic!("expected list command");
    };

    assert_eq!(args.dir, PathBuf::from("/fonts"));
    assert_eq!(args.extensions, vec!["ttf"]);
    assert_eq!(args.name_patterns, vec!["Mono"]);
    assert!(args.json);
    assert!(!args.ndjson);
}

#[test]
fn json_and_ndjson_conflict() {
    let parse = Cli::try_parse_from(["typcat", "list", "--json", "--ndjson", "/fonts"]);
    assert!(parse.is_err());
}

#[test]
fn name_command_requires_files() {
    let parse = Cli::try_parse_from(["typcat", "name"]);
    assert!(parse.is_err());
}

#[test]
fn invalid_regex_returns_error() {
    let compiled = compile_patterns(&["(".to_string()]);
    assert!(compiled.is_err());
}

#[test]
fn writes_plain_names_one_per_line() {
    let entries = vec![entry("Alpha", "/fonts/a.ttf"), entry("Beta", "/fonts/b.ttf")];

    let mut buf = Cursor::new(Vec::new());
    write_plain(&entries, &mut buf, false).expect("write");

    let output = String::from_utf8(buf.into_inner()).expect("utf8");
    assert_eq!(output, "Alpha\nBeta\n");
}

#[test]
fn writes_paths_without_names() {
    let entries = vec![entry("Alpha", "/fonts/a.ttf")];

    let mut buf = Cursor::new(Vec::new());
    write_paths(&entries, &mut buf).expect("write");

    let output = String::from_utf8(buf.into_inner()).expect("utf8");
    assert_eq!(output, "/fonts/a.ttf\n");
}

#[test]
fn columns_align_paths() {
    let entries = vec![
        entry("Alpha Sans", "/fonts/a.ttf"),
        entry("Beta", "/fonts/b.ttf"),
    ];

    let mut buf = Cursor::new(Vec::new());
    write_columns(&entries, &mut buf, false).expect("write");

    let output = String::from_utf8(buf.into_inner()).expect("utf8");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    let a_path = lines[0].find("/fonts/a.ttf").expect("first path");
    let b_path = lines[1].find("/fonts/b.ttf").expect("second path");
    assert_eq!(a_path, b_path);
}

#[test]
fn color_choice_is_applied() {
    let entries = vec![entry("Alpha", "/fonts/a.ttf")];

    let mut buf = Cursor::new(Vec::new());
    write_plain(&entries, &mut buf, true).expect("write");

    let output = String::from_utf8(buf.into_inner()).expect("utf8");
    assert!(output.contains("\u{1b}["));
}

#[test]
fn display_name_of_degrades_to_filename() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("my_font-Bold.ttf");
    std::fs::write(&path, b"junk bytes").expect("write junk");

    assert_eq!(display_name_of(&path), "My Font Bold");
}

#[test]
fn display_name_of_handles_pathological_names() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("-_-.ttf");
    std::fs::write(&path, b"junk").expect("write junk");

    // Fallback title-casing collapses to empty, so the raw name survives.
    assert_eq!(display_name_of(&path), "-_-.ttf");
}

#[test]
fn help_output_includes_list_flags() {
    let mut root = Cli::command();
    let list = root
        .find_subcommand_mut("list")
        .expect("list command present");
    let help = list.render_long_help().to_string();
    assert!(help.contains("--columns"));
    assert!(help.contains("--color <COLOR>"));
    assert!(help.contains("--paths"));
}

#[test]
fn serve_has_a_default_bind() {
    let cli = Cli::try_parse_from(["typcat", "serve"]).expect("parse cli");

    let Command::Serve(args) = cli.command else {
        panic!("expected serve command");
    };

    assert_eq!(args.bind, "127.0.0.1:8789");
}

#[test]
fn list_defaults_cover_both_sfnt_extensions() {
    let cli = Cli::try_parse_from(["typcat", "list", "/fonts"]).expect("parse cli");

    let Command::List(args) = cli.command else {
        panic!("expected list command");
    };

    assert_eq!(args.dir, PathBuf::from("/fonts"));
    assert_eq!(args.extensions, vec!["ttf", "ttc"]);
    assert_eq!(args.color, ColorChoice::Auto);
}
