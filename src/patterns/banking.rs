//! Banking and financial rules: accounts, branch codes, SWIFT/IBAN,
//! card networks, amounts, tax and company registration numbers.

pub fn rules() -> Vec<(&'static str, &'static str)> {
    vec![
        // Branch-coded form first; bare 9-11 digit accounts also match.
        ("bank_account", r"\b\d{6}[\s-]\d{9,11}\b|\b\d{9,11}\b"),
        // Known bank-specific universal branch codes. The generic 6-digit
        // form is only matched by the keyword-anchored banking finder.
        (
            "branch_code",
            r"\b(?:632005|250655|198765|051001|470010|580105|462005)\b",
        ),
        // ZA-anchored so an arbitrary 8-letter uppercase word (including
        // the redaction marker text) can never match.
        ("swift_code", r"\b[A-Z]{4}ZA[A-Z0-9]{2}(?:[A-Z0-9]{3})?\b"),
        ("iban", r"\b[A-Z]{2}\d{2}[A-Z0-9]{11,30}\b"),
        ("visa_card", r"\b4\d{3}(?:[\s-]?\d{4}){3}\b"),
        ("mastercard", r"\b5[1-5]\d{2}(?:[\s-]?\d{4}){3}\b"),
        ("amex_card", r"\b3[47]\d{2}[\s-]?\d{6}[\s-]?\d{5}\b"),
        ("diners_card", r"\b3(?:0[0-5]|[68]\d)\d[\s-]?\d{6}[\s-]?\d{4}\b"),
        ("discover_card", r"\b6(?:011|5\d{2})(?:[\s-]?\d{4}){3}\b"),
        ("jcb_card", r"\b35\d{2}(?:[\s-]?\d{4}){3}\b"),
        ("cvv", r"(?i)\b(?:cvv2?|cvc)\s*:?\s*\d{3,4}\b"),
        (
            "transaction_ref",
            r"\b(?i:(?:txn|transaction|payment)\s*(?:ref(?:erence)?|id|no|number)?\s*[:#]?\s*)[A-Z0-9]{6,20}\b",
        ),
        (
            "money_amount",
            r"\bR\s?\d{1,3}(?:[ ,]\d{3})*(?:\.\d{2})?\b|\bZAR\s?\d{1,3}(?:[ ,]\d{3})*(?:\.\d{2})?\b",
        ),
        ("vat_number", r"\b4\d{9}\b"),
        ("company_registration", r"\b(?:19|20)\d{2}/\d{6}/\d{2}\b"),
    ]
}
