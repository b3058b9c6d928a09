// Word tokenization of rich text.

use rail_core::*;

#[test]
fn split_words_is_lossless() {
    let text = "  Quiet software\tfor\nloud markets ";
    let pieces = split_words(text);
    let joined: String = pieces.iter().map(|p| p.as_str()).collect();
    assert_eq!(joined, text);
    let words: Vec<&str> = pieces
        .iter()
        .filter_map(|p| match p {
            Piece::Word(w) => Some(*w),
            Piece::Space(_) => None,
        })
        .collect();
    assert_eq!(words, ["Quiet", "software", "for", "loud", "markets"]);
    assert_eq!(word_count(text), 5);
}

#[test]
fn split_words_alternates() {
    let pieces = split_words("  a bc ");
    assert_eq!(
        pieces.as_slice(),
        &[
            Piece::Space("  "),
            Piece::Word("a"),
            Piece::Space(" "),
            Piece::Word("bc"),
            Piece::Space(" "),
        ]
    );
    assert!(split_words("").is_empty());
}

#[test]
fn tokenizer_wraps_words_and_keeps_markup() {
    let out = tokenize_markup("Hello <em>big</em> world");
    assert_eq!(
        out,
        "<span class=\"fx-word\">Hello</span> <em><span class=\"fx-word\">big</span></em> \
         <span class=\"fx-word\">world</span>"
    );
    assert_eq!(count_word_spans(&out), 3);
}

#[test]
fn tokenizer_is_idempotent() {
    let inputs = [
        "We build <em>quiet</em> software for <strong>loud</strong> markets",
        "<a href=\"/work?x=1&amp;y=2\" title=\"a > b\">Selected work</a> from ten years",
        "Already <span class=\"fx-word\">wrapped</span> and not",
        "",
        "   ",
    ];
    for input in inputs {
        let once = tokenize_markup(input);
        let twice = tokenize_markup(&once);
        assert_eq!(once, twice, "re-tokenizing changed {input:?}");
        assert_eq!(count_word_spans(&once), count_word_spans(&twice));
    }
}

#[test]
fn quoted_angle_bracket_does_not_end_a_tag() {
    let out = tokenize_markup("<a title=\"a > b\">link text</a>");
    assert!(out.starts_with("<a title=\"a > b\">"));
    assert_eq!(count_word_spans(&out), 2);
}

#[test]
fn existing_word_spans_are_counted_not_rewrapped() {
    let input = "Already <span class=\"fx-word\">wrapped</span> and not";
    assert_eq!(count_word_spans(input), 1);
    assert_eq!(count_word_spans(&tokenize_markup(input)), 4);
}

#[test]
fn other_spans_are_treated_as_markup() {
    let out = tokenize_markup("<span class=\"accent\">two words</span>");
    assert_eq!(count_word_spans(&out), 2);
    assert!(out.starts_with("<span class=\"accent\"><span class=\"fx-word\">two</span>"));
}

#[test]
fn has_class_matches_whole_tokens() {
    assert!(has_class("a fx-word b", WORD_CLASS));
    assert!(!has_class("fx-words", WORD_CLASS));
    assert!(!has_class("", WORD_CLASS));
}

#[test]
fn class_is_read_only_from_the_class_attribute() {
    let input = "<span data-class=\"x\" class=\"fx-word\">w</span>";
    assert_eq!(count_word_spans(input), 1);
    assert_eq!(tokenize_markup(input), input);

    // a look-alike attribute name is not the class list
    let lookalike = "<span data-class=\"fx-word\">two words</span>";
    assert_eq!(count_word_spans(lookalike), 0);
    assert_eq!(count_word_spans(&tokenize_markup(lookalike)), 2);
}

#[test]
fn class_text_inside_quoted_values_is_ignored() {
    let input = "<span title=\"my class=fx-word\">plain text</span>";
    assert_eq!(count_word_spans(input), 0);
    let out = tokenize_markup(input);
    assert_eq!(count_word_spans(&out), 2);
    assert_eq!(tokenize_markup(&out), out);

    assert_eq!(count_word_spans("<span CLASS='fx-word'>w</span>"), 1);
}
