/*!
 * Tests for language code utilities
 */

use srtmerge::language_utils::{is_language_code, language_name};

#[test]
fn test_isLanguageCode_withPart1Codes_shouldBeTrue() {
    assert!(is_language_code("en"));
    assert!(is_language_code("fr"));
    assert!(is_language_code("de"));
    assert!(is_language_code("zh"));
}

#[test]
fn test_isLanguageCode_withPart2Codes_shouldBeTrue() {
    assert!(is_language_code("eng"));
    assert!(is_language_code("fra"));
    assert!(is_language_code("deu"));
}

#[test]
fn test_isLanguageCode_withPart2BCodes_shouldBeTrue() {
    assert!(is_language_code("fre"));
    assert!(is_language_code("ger"));
    assert!(is_language_code("chi"));
}

#[test]
fn test_isLanguageCode_shouldIgnoreCase() {
    assert!(is_language_code("EN"));
    assert!(is_language_code("Eng"));
}

#[test]
fn test_isLanguageCode_withNonCodes_shouldBeFalse() {
    assert!(!is_language_code("xx"));
    assert!(!is_language_code("final"));
    assert!(!is_language_code("q"));
    assert!(!is_language_code(""));
    assert!(!is_language_code("abcd"));
}

#[test]
fn test_languageName_withKnownCodes_shouldReturnEnglishName() {
    assert_eq!(language_name("en"), Some("English"));
    assert_eq!(language_name("deu"), Some("German"));
}

#[test]
fn test_languageName_withUnknownCode_shouldReturnNone() {
    assert_eq!(language_name("zz"), None);
    assert_eq!(language_name("final"), None);
}
