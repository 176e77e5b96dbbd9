use clap::CommandFactory;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn show_defaults() {
    let cli = Cli::parse_from(["radial-gauge", "show"]);
    assert_eq!(cli.verbose, 0);
    match cli.command {
        Commands::Show(args) => {
            assert!(args.config.is_none());
            assert!(args.font.is_none());
            assert!(!args.stdin);
        }
        Commands::Svg(_) => panic!("expected show"),
    }
}

#[test]
fn verbosity_is_global() {
    let cli = Cli::parse_from(["radial-gauge", "show", "-vv", "--stdin"]);
    assert_eq!(cli.verbose, 2);
}

#[test]
fn svg_requires_config() {
    assert!(Cli::try_parse_from(["radial-gauge", "svg"]).is_err());

    let cli = Cli::parse_from([
        "radial-gauge", "svg", "-c", "chart.toml", "-o", "out.svg", "--width", "320",
    ]);
    match cli.command {
        Commands::Svg(args) => {
            assert_eq!(args.config, PathBuf::from("chart.toml"));
            assert_eq!(args.output, Some(PathBuf::from("out.svg")));
            assert_eq!(args.width, Some(320.0));
            assert_eq!(args.height, None);
        }
        Commands::Show(_) => panic!("expected svg"),
    }
}

#[test]
fn filter_follows_verbosity() {
    assert_eq!(filter_directive(0), "warn");
    assert_eq!(filter_directive(1), "info");
    assert_eq!(filter_directive(2), "debug");
    assert_eq!(filter_directive(7), "trace");
}

#[test]
fn value_lines() {
    assert_eq!(
        parse_value_line("2 41.5"),
        Some(ChartCommand::SetValue { index: 2, value: Some(41.5) })
    );
    assert_eq!(
        parse_value_line("  0   -  "),
        Some(ChartCommand::SetValue { index: 0, value: None })
    );
    assert_eq!(
        parse_value_line("1 -3"),
        Some(ChartCommand::SetValue { index: 1, value: Some(-3.0) })
    );
}

#[test]
fn malformed_value_lines() {
    assert_eq!(parse_value_line(""), None);
    assert_eq!(parse_value_line("3"), None);
    assert_eq!(parse_value_line("x 1.0"), None);
    assert_eq!(parse_value_line("-1 1.0"), None);
    assert_eq!(parse_value_line("1 abc"), None);
    assert_eq!(parse_value_line("1 NaN"), None);
    assert_eq!(parse_value_line("1 2 3"), None);
}

#[test]
fn demo_entries_are_labelled_and_scaled() {
    let mut rng = StdRng::seed_from_u64(7);
    let entries = demo_entries(&mut rng, 8);

    assert_eq!(entries.len(), 8);
    assert_eq!(entries[0].label.as_deref(), Some("Series 1"));
    assert_eq!(entries[6].color, entries[0].color);
    for entry in &entries {
        let value = entry.value().unwrap();
        assert!((0.0..160.0).contains(&value));
        assert_eq!(entry.max_value, Some(100.0));
        assert!(entry.value_label.as_deref().unwrap().ends_with('%'));
    }
}
