use trafficscope::report::{render, write_report};
use trafficscope::stats::{CategoryShare, TrafficSummary};

fn sample_summary() -> TrafficSummary {
    TrafficSummary {
        country: vec![
            CategoryShare { label: "Germany".into(), percent: 62.5 },
            CategoryShare { label: "Other".into(), percent: 37.5 },
        ],
        os: vec![
            CategoryShare { label: "Windows".into(), percent: 75.0 },
            CategoryShare { label: "bot".into(), percent: 25.0 },
        ],
        browser: vec![
            CategoryShare { label: "Chrome".into(), percent: 75.0 },
            CategoryShare { label: "bot".into(), percent: 25.0 },
        ],
    }
}

#[test]
fn renders_sections_with_two_decimal_percentages() {
    let text = render(&sample_summary());
    let expected = "Country:\n\
                    Germany: 62.50%\n\
                    Other: 37.50%\n\
                    \n\
                    OS:\n\
                    Windows: 75.00%\n\
                    bot: 25.00%\n\
                    \n\
                    Browser:\n\
                    Chrome: 75.00%\n\
                    bot: 25.00%\n";
    assert_eq!(text, expected);
}

#[test]
fn writes_report_creating_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output").join("log_report.txt");
    write_report(&sample_summary(), &path).unwrap();
    let on_disk = std::fs::read_to_string(&path).unwrap();
    assert_eq!(on_disk, render(&sample_summary()));
}

#[test]
fn rewriting_report_is_byte_identical_and_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log_report.txt");
    std::fs::write(&path, "stale content from a previous run").unwrap();
    write_report(&sample_summary(), &path).unwrap();
    let first = std::fs::read(&path).unwrap();
    write_report(&sample_summary(), &path).unwrap();
    let second = std::fs::read(&path).unwrap();
    assert_eq!(first, second);
    assert!(!first.starts_with(b"stale"));
}
