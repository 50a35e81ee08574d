use isolang::Language;

/// Language utilities for ISO language code handling
///
/// Grouping strips trailing language-code suffixes from subtitle file names
/// (`movie.en.srt`, `movie.eng.srt`). Only suffixes that are real ISO 639-1
/// or ISO 639-2 codes are stripped, so a name like `movie.final.srt` keeps
/// its suffix.
/// ISO 639-2/B codes that differ from their 639-2/T form and are therefore
/// missed by the 639-3 lookup.
const PART2B_CODES: &[&str] = &[
    "fre", // French (fra in 639-2/T)
    "ger", // German (deu in 639-2/T)
    "dut", // Dutch (nld in 639-2/T)
    "gre", // Greek (ell in 639-2/T)
    "chi", // Chinese (zho in 639-2/T)
    "cze", // Czech (ces in 639-2/T)
    "ice", // Icelandic (isl in 639-2/T)
    "alb", // Albanian (sqi in 639-2/T)
    "arm", // Armenian (hye in 639-2/T)
    "baq", // Basque (eus in 639-2/T)
    "bur", // Burmese (mya in 639-2/T)
    "per", // Persian (fas in 639-2/T)
    "geo", // Georgian (kat in 639-2/T)
    "may", // Malay (msa in 639-2/T)
    "mac", // Macedonian (mkd in 639-2/T)
    "rum", // Romanian (ron in 639-2/T)
    "slo", // Slovak (slk in 639-2/T)
    "wel", // Welsh (cym in 639-2/T)
];

/// Check whether a dot-separated filename component is an ISO 639 language code.
pub fn is_language_code(code: &str) -> bool {
    let normalized = code.trim().to_lowercase();

    match normalized.len() {
        // ISO 639-1 (2-letter) code
        2 => Language::from_639_1(&normalized).is_some(),
        // ISO 639-2/T via the 639-3 lookup, or a known 639-2/B spelling
        3 => {
            Language::from_639_3(&normalized).is_some()
                || PART2B_CODES.contains(&normalized.as_str())
        }
        _ => false,
    }
}

/// English name for a language code, used when logging loaded tracks.
pub fn language_name(code: &str) -> Option<&'static str> {
    let normalized = code.trim().to_lowercase();

    let language = match normalized.len() {
        2 => Language::from_639_1(&normalized),
        3 => Language::from_639_3(&normalized),
        _ => None,
    }?;

    Some(language.to_name())
}
