//! Engine-level scenarios for the built-in sentence rules.

use prose_lint::{Checker, Configuration, DocumentBuilder, DocumentCollection, ValidatorConfig};

fn paragraph_of(contents: &[&str]) -> DocumentCollection {
    let mut builder = DocumentBuilder::new();
    builder
        .add_document("")
        .add_section(1)
        .unwrap()
        .add_paragraph()
        .unwrap();
    for (idx, content) in contents.iter().enumerate() {
        builder.add_sentence(content, idx + 1).unwrap();
    }
    builder.build()
}

fn check_with(validator: ValidatorConfig, contents: &[&str]) -> usize {
    let configuration = Configuration::new("en").add_validator(validator);
    let mut checker = Checker::new(&configuration).unwrap();
    let mut collection = paragraph_of(contents);
    checker.check(&mut collection).len()
}

#[test]
fn test_contraction_flagged_in_plain_document() {
    let count = check_with(
        ValidatorConfig::new("Contraction"),
        &[
            "he is a super man.",
            "he is not a bat man.",
            "he's also a business man.",
        ],
    );
    assert_eq!(count, 1);
}

#[test]
fn test_contraction_absent() {
    let count = check_with(
        ValidatorConfig::new("Contraction"),
        &[
            "he is a super man.",
            "he is not a bat man.",
            "he is a business man.",
        ],
    );
    assert_eq!(count, 0);
}

#[test]
fn test_contraction_uppercase() {
    let count = check_with(
        ValidatorConfig::new("Contraction"),
        &[
            "He is a super man.",
            "He is not a bat man.",
            "He's also a business man.",
        ],
    );
    assert_eq!(count, 1);
}

#[test]
fn test_many_contractions_are_intentional() {
    let count = check_with(
        ValidatorConfig::new("Contraction"),
        &[
            "he's a super man.",
            "he's not a bat man.",
            "he is a business man.",
        ],
    );
    assert_eq!(count, 0);
}

#[test]
fn test_comma_number() {
    let config = ValidatorConfig::new("CommaNumber");
    let many = "is it true, not true, but it should be true, right, or not right.";
    assert_eq!(check_with(config.clone(), &[many]), 1);
    assert_eq!(check_with(config.clone(), &["is it true."]), 0);
    assert_eq!(check_with(config, &[""]), 0);
}

#[test]
fn test_invalid_symbol() {
    let config = ValidatorConfig::new("InvalidSymbol");
    assert_eq!(check_with(config.clone(), &["no problem here."]), 0);
    assert_eq!(check_with(config, &["a fullwidth comma、is wrong."]), 1);
}

#[test]
fn test_space_beginning_of_sentence() {
    let count = check_with(
        ValidatorConfig::new("SpaceBeginningOfSentence"),
        &["First sentence.", " second is fine.", "third is not."],
    );
    assert_eq!(count, 1);
}

#[test]
fn test_word_number() {
    let config = ValidatorConfig::new("WordNumber").with_attribute("max_num", "5");
    assert_eq!(
        check_with(config.clone(), &["one two three four five six"]),
        1
    );
    assert_eq!(check_with(config, &["one two three four five"]), 0);
}
