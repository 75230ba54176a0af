use pws_password::{measure_entropy, score, StrengthLevel, MAX_SCORE};

#[test]
fn strength_empty() {
    let result = score("");
    assert_eq!(0, result.score);
    assert_eq!(StrengthLevel::Weak, result.level);
}

#[test]
fn strength_repeated_character() {
    let result = score("aaaaaaaa");
    assert!(result.score <= 4);
    assert_eq!(StrengthLevel::Weak, result.level);
}

#[test]
fn strength_mixed_classes() {
    let result = score("Tr0ub4dor&3");
    assert_eq!(6, result.score);
    assert_eq!(StrengthLevel::Good, result.level);
}

#[test]
fn strength_weak_words() {
    assert_eq!(StrengthLevel::Weak, score("password").level);
    assert_eq!(StrengthLevel::Weak, score("PASSWORD").level);
    assert_eq!(StrengthLevel::Weak, score("admin123").level);
}

#[test]
fn strength_deterministic_and_bounded() {
    for input in ["", "a", "Zx9!", "correct horse battery staple", "ñandú"] {
        let first = score(input);
        assert_eq!(first, score(input));
        assert!(first.score <= MAX_SCORE);
        assert_eq!(StrengthLevel::from_score(first.score), first.level);
    }
}

#[test]
fn strength_long_random() {
    let result = score("vK7#qL2@wN9$rT5&mB3!");
    assert_eq!(MAX_SCORE, result.score);
    assert_eq!(StrengthLevel::Strong, result.level);
}

#[test]
fn strength_entropy_independent() {
    let entropy = measure_entropy("password", &[]);
    assert_eq!(0, u8::from(entropy.score()));
    let entropy = measure_entropy("vK7#qL2@wN9$rT5&mB3!", &[]);
    assert!(entropy.guesses_log10() > 10.0);
}
