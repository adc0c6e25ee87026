use remixer_core::models::candidate::{Candidate, MAX_POST_CHARS, Validity, validate_content};
use remixer_core::models::generation::{GenerationRequest, GenerationResult, parse_candidates};

#[test]
fn two_marker_lines_become_two_ordered_candidates() {
    let raw = "Here you go:\nTWEET: first take\nTWEET: second take\n";
    let candidates = parse_candidates(raw);

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].index, 0);
    assert_eq!(candidates[0].text(), "first take");
    assert_eq!(candidates[1].index, 1);
    assert_eq!(candidates[1].text(), "second take");
    assert_ne!(candidates[0].id, candidates[1].id);
}

#[test]
fn output_without_markers_is_empty_not_error() {
    let result = GenerationResult::new("I could not think of anything.\nSorry!");
    assert!(result.candidates().is_empty());
    assert!(parse_candidates("").is_empty());
}

#[test]
fn indented_markers_are_accepted_and_blank_ones_skipped() {
    let raw = "  TWEET: indented\nTWEET:   \nnot a TWEET: line\nTWEET:last";
    let texts: Vec<_> = parse_candidates(raw)
        .iter()
        .map(|c| (c.index, c.text().to_string()))
        .collect();

    assert_eq!(
        texts,
        vec![(0, "indented".to_string()), (1, "last".to_string())]
    );
}

#[test]
fn char_count_tracks_edits() {
    let mut candidate = Candidate::new(0, "short");
    assert_eq!(candidate.char_count(), 5);

    candidate.set_text("a".repeat(MAX_POST_CHARS + 1));
    assert_eq!(candidate.char_count(), 281);
    assert_eq!(candidate.validity(), Validity::TooLong { chars: 281 });
    assert!(!candidate.is_postable());

    candidate.set_text("back under the limit");
    assert!(candidate.is_postable());
}

#[test]
fn chars_are_counted_not_bytes() {
    let text = "é".repeat(MAX_POST_CHARS);
    assert!(text.len() > MAX_POST_CHARS);
    assert_eq!(validate_content(&text), Validity::Ok);
}

#[test]
fn blank_content_is_not_postable() {
    assert_eq!(validate_content("   \n"), Validity::Empty);
    assert_eq!(validate_content(""), Validity::Empty);
}

#[test]
fn generation_request_rejects_whitespace_source() {
    assert!(GenerationRequest::new("  \t\n ", "prompt").is_err());

    let request = GenerationRequest::new("  hello world ", "prompt").unwrap();
    assert_eq!(request.source_text, "hello world");
    assert_eq!(request.prompt_template, "prompt");
}

#[test]
fn candidate_serializes_with_char_count() {
    let candidate = Candidate::new(3, "hi there");
    let json = serde_json::to_value(&candidate).unwrap();

    assert_eq!(json["index"], 3);
    assert_eq!(json["text"], "hi there");
    assert_eq!(json["char_count"], 8);
    assert!(json["id"].is_string());
}
