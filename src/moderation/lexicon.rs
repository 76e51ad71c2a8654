// Lexicons — fixed, lowercase term lists used for substring classification.
//
// Matching is raw substring containment against lowercased content, so short
// entries also hit inside longer words ("die" in "diet", "ass" in "class").
// Verdicts and scores depend on that, so keep entries exactly as they are.

/// Words that count toward the politeness ban.
pub const POLITE_WORDS: &[&str] = &[
    "please",
    "thank you",
    "thanks",
    "appreciate",
    "grateful",
    "kindly",
    "wonderful",
    "amazing",
    "fantastic",
    "lovely",
    "beautiful",
    "sweet",
    "sorry",
    "apologize",
    "excuse me",
    "pardon",
    "bless",
    "blessed",
    "hope you have a",
    "have a great",
    "best wishes",
    "good luck",
    "you're welcome",
    "no problem",
    "my pleasure",
    "happy to help",
    "respectfully",
    "humbly",
    "gently",
    "softly",
    "kindness",
    "gentle",
    "wholesome",
    "positive",
    "uplifting",
    "encouraging",
    "supportive",
    "compliment",
    "praise",
    "admire",
    "respect",
    "honor",
    "cherish",
];

/// Multi-word phrases that count toward the politeness ban.
pub const POLITE_PHRASES: &[&str] = &[
    "i hope you",
    "wish you the best",
    "sending love",
    "thoughts and prayers",
    "you're doing great",
    "keep up the good work",
    "proud of you",
    "you got this",
    "believe in you",
    "here for you",
    "much love",
    "stay positive",
    "good vibes",
    "virtual hug",
];

/// Violence-related terms. Any match bans the content outright.
pub const DEATH_THREAT_WORDS: &[&str] = &[
    "kill",
    "murder",
    "die",
    "death",
    "suicide",
    "hang",
    "shoot",
    "stab",
    "poison",
    "torture",
    "hurt",
    "harm",
    "violence",
    "weapon",
    "gun",
    "knife",
    "bomb",
    "explosion",
    "assault",
    "attack",
];

/// Doxxing-related terms. Any match bans the content outright.
pub const HARASSMENT_WORDS: &[&str] = &[
    "address",
    "phone number",
    "home",
    "workplace",
    "school",
    "family",
    "children",
    "kids",
    "personal info",
    "doxx",
    "dox",
    "real name",
];

/// Profanity and insults, worth 5 points per occurrence.
pub const RUDE_WORDS: &[&str] = &[
    "fuck",
    "shit",
    "damn",
    "hell",
    "ass",
    "bitch",
    "bastard",
    "crap",
    "piss",
    "dick",
    "cock",
    "pussy",
    "slut",
    "whore",
    "idiot",
    "moron",
    "stupid",
    "dumb",
    "pathetic",
    "loser",
    "garbage",
    "trash",
    "suck",
    "sucks",
    "hate",
    "disgusting",
    "gross",
    "ugly",
    "awful",
    "terrible",
    "horrible",
    "worthless",
    "useless",
    "pointless",
    "bullshit",
    "nonsense",
    "ridiculous",
    "absurd",
    "insane",
    "crazy",
    "nuts",
    "mental",
    "lame",
];

/// Intensifiers, worth 3 points per occurrence.
pub const INTENSIFIERS: &[&str] = &[
    "fucking",
    "damn",
    "goddamn",
    "bloody",
    "totally",
    "completely",
    "absolutely",
    "utterly",
    "extremely",
    "incredibly",
    "massively",
];
