//! False-positive exclusions and context trigger words for the name
//! scorer.

/// Words and phrases that look like names in shape but never are. A
/// candidate whose full text, or any constituent word, appears here is
/// disqualified outright.
pub const FALSE_POSITIVE_TERMS: &[&str] = &[
    // Function words
    "the", "a", "an", "and", "or", "but", "if", "then", "else", "when", "while", "for", "nor",
    "so", "yet", "at", "by", "in", "of", "on", "to", "up", "as", "is", "are", "was", "were",
    "be", "been", "being", "am", "do", "does", "did", "have", "has", "had", "will", "would",
    "can", "could", "shall", "should", "may", "might", "must", "this", "that", "these", "those",
    "it", "its", "we", "our", "you", "your", "they", "their", "he", "she", "his", "her", "my",
    "me", "us", "them", "who", "what", "which", "where", "why", "how", "not", "no", "yes",
    "all", "any", "each", "every", "some", "with", "from", "into", "about", "please", "thanks",
    "thank", "kind", "best", "regards", "dear", "sincerely",
    // Days, months, time-of-day
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday", "january",
    "february", "march", "april", "may", "june", "july", "august", "september", "october",
    "november", "december", "morning", "afternoon", "evening", "night", "today", "tomorrow",
    "yesterday", "week", "month", "year", "day", "date", "time",
    // Business-entity suffixes and institutions
    "ltd", "pty", "inc", "llc", "cc", "corp", "corporation", "company", "holdings", "group",
    "limited", "enterprises", "solutions", "services", "consulting", "bank", "insurance",
    "absa", "nedbank", "capitec", "investec", "sanlam", "santam", "outsurance", "discovery",
    "momentum", "liberty", "hollard", "miway", "vodacom", "telkom", "eskom", "sars",
    // Places
    "cape", "town", "cape town", "johannesburg", "joburg", "pretoria", "durban", "soweto",
    "sandton", "midrand", "centurion", "bloemfontein", "gqeberha", "pietermaritzburg",
    "polokwane", "nelspruit", "kimberley", "stellenbosch", "gauteng", "limpopo", "mpumalanga",
    "kwazulu", "natal", "free", "state", "north", "west", "eastern", "western", "northern",
    "southern", "south", "east", "africa", "african",
    // Document / office nouns that show up capitalized mid-sentence
    "meeting", "office", "invoice", "quote", "quotation", "policy", "claim", "account",
    "reference", "number", "email", "phone", "address", "street", "road", "avenue", "building",
    "department", "branch", "head", "client", "customer", "vehicle", "car", "motor", "premium",
    "excess", "cover", "amount", "total", "payment", "statement", "report", "system", "online",
    // The masking marker itself must never score as a name.
    "redacted",
];

/// Trigger words that raise confidence when they appear in the 50
/// characters *before* a candidate.
pub const BEFORE_TRIGGERS: &[&str] = &[
    "mr", "mrs", "ms", "miss", "dr", "prof", "professor", "sir", "madam", "mnr", "mev",
    "client", "customer", "member", "policyholder", "applicant", "driver", "insured", "agent",
    "broker", "consultant", "advisor", "manager", "director", "colleague", "contact", "name",
    "dear", "hi", "hello", "greetings", "attention", "regards from", "signed", "from",
];

/// Trigger words that raise confidence when they appear in the 50
/// characters *after* a candidate.
pub const AFTER_TRIGGERS: &[&str] = &[
    "said", "says", "told", "called", "phoned", "emailed", "wrote", "reported", "mentioned",
    "confirmed", "stated", "asked", "replied", "responded", "requested", "submitted", "signed",
    "visited", "contacted", "advised", "indicated", "claims", "claimed", "works", "lives",
];
