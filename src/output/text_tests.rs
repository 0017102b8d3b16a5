use super::*;
use crate::output::test_fixtures::{files, options};

#[test]
fn text_lists_one_line_per_file() {
    let options = options(1000, 30);
    let files = files(&[("src/big.ts", 2400), ("src/app.tsx", 1500)]);

    let output = TextFormatter
        .format(&ScanReport::new(&options, &files))
        .unwrap();

    assert_eq!(output, "2400\tsrc/big.ts\n1500\tsrc/app.tsx\n");
}

#[test]
fn text_empty_reports_threshold() {
    let options = options(1000, 30);

    let output = TextFormatter.format(&ScanReport::new(&options, &[])).unwrap();

    assert_eq!(output, "No files with >= 1000 lines found.\n");
    assert_eq!(output.lines().count(), 1);
}

#[test]
fn text_keeps_input_order() {
    let options = options(0, 30);
    let files = files(&[("b", 1), ("a", 9)]);

    let output = TextFormatter
        .format(&ScanReport::new(&options, &files))
        .unwrap();

    assert_eq!(output, "1\tb\n9\ta\n");
}

#[test]
fn text_keeps_absolute_paths_verbatim() {
    let options = options(0, 30);
    let files = files(&[("/elsewhere/x.ts", 3)]);

    let output = TextFormatter
        .format(&ScanReport::new(&options, &files))
        .unwrap();

    assert_eq!(output, "3\t/elsewhere/x.ts\n");
}
