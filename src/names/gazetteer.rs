//! Static name gazetteers. All entries are lower-case; membership tests
//! lower-case the candidate before lookup.

/// Broad multi-cultural given names.
pub const FIRST_NAMES: &[&str] = &[
    // English / European
    "james", "john", "robert", "michael", "william", "david", "richard", "joseph", "thomas",
    "charles", "christopher", "daniel", "matthew", "anthony", "mark", "donald", "steven", "paul",
    "andrew", "joshua", "kenneth", "kevin", "brian", "george", "edward", "ronald", "timothy",
    "jason", "jeffrey", "ryan", "jacob", "gary", "nicholas", "eric", "jonathan", "stephen",
    "larry", "justin", "scott", "brandon", "benjamin", "samuel", "gregory", "frank", "peter",
    "patrick", "raymond", "jack", "dennis", "jerry", "mary", "patricia", "jennifer", "linda",
    "elizabeth", "barbara", "susan", "jessica", "sarah", "karen", "nancy", "lisa", "margaret",
    "betty", "sandra", "ashley", "dorothy", "kimberly", "emily", "donna", "michelle", "carol",
    "amanda", "melissa", "deborah", "stephanie", "rebecca", "laura", "sharon", "cynthia",
    "kathleen", "amy", "shirley", "angela", "helen", "anna", "brenda", "pamela", "nicole",
    "jane", "emma", "catherine", "christine", "rachel", "janet", "alice", "julie", "heather",
    "diane", "victoria", "grace", "rose", "sophie", "hannah", "olivia", "charlotte", "lucy",
    // Afrikaans
    "johan", "pieter", "hendrik", "willem", "jan", "gert", "kobus", "frikkie", "andre",
    "francois", "jacques", "riaan", "deon", "christo", "hannes", "annelie", "marietjie",
    "elmarie", "susanna", "hester", "magda", "ronel", "elsabe", "anika", "marlene",
    // Indian / Asian
    "rajesh", "suresh", "ramesh", "anil", "sanjay", "vijay", "arun", "ashok", "priya", "anita",
    "kavita", "sunita", "deepa", "rani", "mohammed", "ahmed", "ali", "hassan", "fatima",
    "aisha", "yusuf", "ibrahim", "wei", "ming", "chen", "li", "hiroshi", "kenji",
];

/// Broad family-name gazetteer.
pub const SURNAMES: &[&str] = &[
    // English / European
    "smith", "johnson", "williams", "brown", "jones", "garcia", "miller", "davis", "wilson",
    "anderson", "taylor", "thomas", "moore", "jackson", "martin", "lee", "thompson", "white",
    "harris", "clark", "lewis", "robinson", "walker", "young", "allen", "king", "wright",
    "scott", "green", "baker", "adams", "nelson", "hill", "campbell", "mitchell", "roberts",
    "carter", "phillips", "evans", "turner", "parker", "collins", "edwards", "stewart",
    "morris", "murphy", "cook", "rogers", "morgan", "peterson", "cooper", "reed", "bailey",
    "bell", "gray", "kelly", "howard", "ward", "watson", "brooks", "gibson", "ferguson",
    "doe", "bloggs", "murray", "hughes", "simpson", "marshall", "hamilton", "graham",
    // Afrikaans
    "botha", "pretorius", "van der merwe", "van wyk", "venter", "joubert", "nel", "fourie",
    "du plessis", "coetzee", "steyn", "kruger", "viljoen", "swanepoel", "meyer", "bezuidenhout",
    "du toit", "le roux", "olivier", "vermeulen", "erasmus", "potgieter", "lombard",
    // Nguni / Sotho / Tswana
    "nkosi", "dlamini", "khumalo", "ndlovu", "zulu", "mthembu", "mokoena", "molefe", "mahlangu",
    "sithole", "ngcobo", "mabaso", "tshabalala", "radebe", "buthelezi", "zwane", "maseko",
    "mbeki", "mandela", "zuma", "ramaphosa", "sisulu", "tambo", "mofokeng", "motaung",
    "kekana", "modise", "moloi", "sebola", "maluleke", "baloyi", "chauke", "nkuna",
    // Indian South African
    "naidoo", "pillay", "govender", "moodley", "reddy", "naicker", "padayachee", "maharaj",
    "singh", "ramdas", "chetty", "nair",
];

/// Supplementary gazetteer for South African given names the broad list
/// under-represents.
pub const REGIONAL_NAMES: &[&str] = &[
    "thabo", "sipho", "bongani", "sibusiso", "themba", "mandla", "musa", "vusi", "sandile",
    "siyabonga", "nkosinathi", "bhekizizwe", "thulani", "lwazi", "andile", "ayanda", "lunga",
    "kagiso", "tshepo", "katlego", "thapelo", "kgomotso", "tebogo", "itumeleng", "lesego",
    "karabo", "mpho", "neo", "tumelo", "kabelo", "oratile", "refilwe", "lerato", "palesa",
    "dikeledi", "mamello", "naledi", "nthabiseng", "boitumelo", "keabetswe", "masego",
    "nomvula", "thandiwe", "zanele", "nosipho", "ntombi", "busisiwe", "nokuthula", "zodwa",
    "gugu", "lindiwe", "nonhlanhla", "sindisiwe", "thandeka", "zinhle", "philasande",
    "precious", "blessing", "gift", "pretty", "beauty", "patience", "happiness",
];

/// Multi-word surname particles common in the target locale. Matched as a
/// case-insensitive substring of the candidate.
pub const SURNAME_PARTICLES: &[&str] = &["van der", "van den", "von", "van", "de", "du", "le", "la"];

/// Suffixes that make the last word of a candidate look like a surname.
pub const NAME_SUFFIXES: &[&str] = &[
    "son", "sen", "ing", "er", "man", "ton", "ley", "field", "wood", "stone",
];
