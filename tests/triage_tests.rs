use std::io::Cursor;
use std::path::PathBuf;

use ordered_float::OrderedFloat;
use prio_heap::triage::{read_queue, run, serve, Case, TriageConfig};
use prio_heap::{Error, PriorityRecord};

const CASES: &str = "\
# label, urgency
common cold, 5
gunshot wound, 1

high fever, 4
broken arm, 2
glass in foot, 3
";

#[test]
fn test_record_parsing() {
    let case: Case = "broken arm, 2".parse().unwrap();
    assert_eq!(case, PriorityRecord::new("broken arm".to_string(), OrderedFloat(2.0)));

    // Only the last comma separates the urgency
    let case: Case = "cuts, bruises, 3.5".parse().unwrap();
    assert_eq!(case.value, "cuts, bruises");
    assert_eq!(case.priority, OrderedFloat(3.5));
}

#[test]
fn test_record_parse_errors() {
    assert!(matches!("no urgency".parse::<Case>(), Err(Error::MissingPriority(_))));
    assert!(matches!(" , 3".parse::<Case>(), Err(Error::EmptyLabel(_))));
    assert!(matches!(
        "fever, high".parse::<Case>(),
        Err(Error::InvalidPriority { .. })
    ));
}

#[test]
fn test_read_and_serve() {
    let mut queue = read_queue(Cursor::new(CASES)).unwrap();
    assert_eq!(queue.len(), 5);

    let served: Vec<String> = serve(&mut queue, None).into_iter().map(|c| c.value).collect();
    assert_eq!(
        served,
        vec!["gunshot wound", "broken arm", "glass in foot", "high fever", "common cold"]
    );
    assert!(queue.is_empty());
}

#[test]
fn test_serve_with_limit() {
    let mut queue = read_queue(Cursor::new(CASES)).unwrap();
    let served = serve(&mut queue, Some(2));
    assert_eq!(served.len(), 2);
    assert_eq!(served[1].value, "broken arm");
    assert_eq!(queue.len(), 3);
}

#[test]
fn test_read_reports_line_number() {
    let input = "common cold, 5\n\nbroken arm two\n";
    match read_queue(Cursor::new(input)) {
        Err(Error::AtLine { line, source }) => {
            assert_eq!(line, 3);
            assert!(matches!(*source, Error::MissingPriority(_)));
        }
        other => panic!("expected a line error, got {:?}", other),
    }
}

#[test]
fn test_nan_urgency_rejected() {
    let err = read_queue(Cursor::new("mystery, NaN\n")).unwrap_err();
    assert!(matches!(err, Error::AtLine { line: 1, .. }));

    // The error quotes the urgency as typed
    for typed in ["nan", "+NaN"] {
        let input = format!("cold, 5\nmystery, {}\n", typed);
        match read_queue(Cursor::new(input)) {
            Err(Error::AtLine { line, source }) => {
                assert_eq!(line, 2);
                match *source {
                    Error::InvalidPriority { value, .. } => assert_eq!(value, typed),
                    other => panic!("expected an invalid priority, got {:?}", other),
                }
            }
            other => panic!("expected a line error, got {:?}", other),
        }
    }
}

#[test]
fn test_config_from_args() {
    let config = TriageConfig::from_args(["cases.csv", "--limit", "3"]).unwrap();
    assert_eq!(config.input, Some(PathBuf::from("cases.csv")));
    assert_eq!(config.limit, Some(3));

    assert_eq!(TriageConfig::from_args(Vec::<String>::new()).unwrap(), TriageConfig::default());
    assert!(TriageConfig::from_args(["-n"]).is_err());
    assert!(TriageConfig::from_args(["-n", "many"]).is_err());
    assert!(TriageConfig::from_args(["a.csv", "b.csv"]).is_err());
}

#[test]
fn test_run_from_file() {
    let path = std::env::temp_dir().join(format!("prio_heap_triage_{}.csv", std::process::id()));
    std::fs::write(&path, CASES).unwrap();

    let config = TriageConfig {
        input: Some(path.clone()),
        limit: Some(4),
    };
    let mut out = Vec::new();
    let waiting = run(&config, &mut out).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(waiting, 1);
    let out = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "  1. gunshot wound (priority 1)");
    assert_eq!(lines[3], "  4. high fever (priority 4)");
}

#[test]
fn test_run_missing_file() {
    let config = TriageConfig {
        input: Some(PathBuf::from("/nonexistent/prio_heap/cases.csv")),
        limit: None,
    };
    assert!(matches!(run(&config, &mut Vec::<u8>::new()), Err(Error::Io(_))));
}
