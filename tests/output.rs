use fenvprobe::{is_supported, run, Variant};

fn render(variant: Variant) -> String {
    let mut out = Vec::new();
    run(variant, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

// Split the report into one block per probe.
fn blocks(text: &str) -> Vec<&str> {
    text.split_terminator("Done.\n\n").collect()
}

#[test]
fn exceptions_only_report() {
    let text = render(Variant::ExceptionsOnly);
    let blocks = blocks(&text);
    assert_eq!(blocks.len(), 5);

    assert!(blocks[0].starts_with("Result with n=0.0: 1.000000\n"));
    assert!(blocks[1].starts_with("Result with n=1.0: 2.000000\n"));
    assert!(blocks[2].starts_with("Result with n=100.0: 2.70"));
    assert!(blocks[3].starts_with("Result with n=10000.0: 2.71"));
    assert!(blocks[4].starts_with("Result with n=inf: 1.000000\n"));

    if is_supported() {
        assert!(blocks[0].contains("Exception FE_DIVBYZERO\n"));
        assert!(blocks[2].contains("Exception FE_INEXACT\n"));
    }
    assert!(!text.contains("Classification"));
}

#[test]
fn classification_report() {
    let text = render(Variant::WithClassification);
    let blocks = blocks(&text);
    assert_eq!(blocks.len(), 7);

    let inputs: Vec<&str> = blocks
        .iter()
        .map(|b| b.split(':').next().unwrap())
        .collect();
    assert_eq!(
        inputs,
        [
            "Result with n=0.0",
            "Result with n=1.0",
            "Result with n=10.0",
            "Result with n=100.0",
            "Result with n=1000.0",
            "Result with n=10000.0",
            "Result with n=inf",
        ]
    );

    // Every sample produces a normal result, so nothing is classified.
    assert!(!text.contains("Classification"));
}

#[test]
fn every_line_is_well_formed() {
    let text = render(Variant::WithClassification);
    assert!(text.ends_with("Done.\n\n"));
    for line in text.lines().filter(|l| !l.is_empty()) {
        assert!(
            line.starts_with("Result with n=")
                || line.starts_with("Exception FE_")
                || line.starts_with("Classification FP_")
                || line == "Done.",
            "unexpected line: {:?}",
            line
        );
    }
}

#[test]
fn reports_are_reproducible() {
    assert_eq!(
        render(Variant::WithClassification),
        render(Variant::WithClassification)
    );
}
