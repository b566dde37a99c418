//! Structured identifier rules: national IDs, phone numbers, email and
//! postal addresses.

/// (category, pattern) table. Categories are unique across the whole
/// registry.
pub fn rules() -> Vec<(&'static str, &'static str)> {
    vec![
        // 13-digit SA ID: YYMMDD SSSS C A Z, citizenship digit 0/1.
        (
            "sa_id",
            r"\b\d{2}(?:0[1-9]|1[0-2])(?:0[1-9]|[12]\d|3[01])\d{4}[01]\d{2}\b",
        ),
        // International prefix, bare area-code/local, and bracketed forms.
        (
            "phone",
            r"(?:\+27|0027)[\s-]?\d{2}[\s-]?\d{3}[\s-]?\d{4}\b|\b0\d{2}[\s-]?\d{3}[\s-]?\d{4}\b|\(0\d{2}\)\s?\d{3}[\s-]?\d{4}\b",
        ),
        ("policy_number", r"\b\d{9}\b"),
        ("passport", r"\b[A-Z]{1,2}\d{6,8}\b"),
        (
            "email",
            r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
        ),
        (
            "po_box",
            r"(?i)\b(?:p\.?\s?o\.?\s?box|private\s+bag|postnet\s+suite)\s*x?\s*\d+\b",
        ),
        // Street suffix forms stay case-sensitive so prose like "10 main
        // things" is not swept up.
        (
            "street_address",
            r"\b\d{1,5}\s+[A-Z][A-Za-z]+(?:\s+[A-Z][A-Za-z]+)?\s+(?:Street|St|Road|Rd|Avenue|Ave|Drive|Dr|Lane|Crescent|Cres|Close|Boulevard|Blvd|Way|Place|Pl)\b",
        ),
        ("postal_code", r"\b\d{4}\b"),
    ]
}
