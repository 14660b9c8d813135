use std::fs;

use minipy::run_program;
use walkdir::WalkDir;

#[test]
fn script_corpus_matches_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "my")
                                     })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                           panic!("Failed to read {expected_path:?}: {e}")
                       });

        let mut output = Vec::new();
        if let Err(e) = run_program(&source, &mut output) {
            panic!("Script {path:?} failed: {e}");
        }
        let actual = String::from_utf8(output).expect("interpreter output must be UTF-8");

        assert_eq!(actual, expected, "output mismatch for {path:?}");
        count += 1;
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}
