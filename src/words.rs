//! The word list compiled into the crate.

/// Answers used when no other list is provided.
///
/// Every entry should exist in a real dictionary before it is added here;
/// the host does not check. One word is listed twice, which
/// [`WordList`](crate::WordList) collapses.
pub const WORDS: &[&str] = &[
    "WORLD", "QUITE", "FANCY", "FRESH", "PANIC", "CRAZY", "BUGGY", "HELLO", "SCARE", "APPLE",
    "BRAVE", "CANDY", "DREAM", "EAGER", "FLOOD", "GRACE", "HAPPY", "IMAGE", "JUMPY", "KRAFT",
    "LEMON", "MIGHT", "NOBLE", "PEACE", "QUEST", "RANGE", "SLEEK", "TRICK", "UNITY", "VAGUE",
    "WATER", "XENON", "YOUTH", "ZEBRA", "ALERT", "BLISS", "CROWN", "DOUBT", "ELOPE", "FLARE",
    "GHOST", "HASTE", "JOKER", "KISSY", "LATCH", "MOUSE", "NIGHT", "OCEAN", "PILOT", "QUIET",
    "RIVER", "SHINE", "THORN", "ULTRA", "VIGOR", "WHISK", "YEARN", "ALBUM", "BRISK", "CHART",
    "DRAFT", "FABLE", "GRAIN", "HOVER", "IVORY", "JAZZY", "KNACK", "LEAFY", "MIMIC", "NOBBY",
    "OPINE", "PIXEL", "QUARK", "ROBOT", "SPLAT", "TIGER", "UNITE", "VAULT", "WOVEN", "YAWNS",
    "ZONED", "AHEAD", "BLOOM", "CRISP", "DANCE", "EAGER", "FENCE", "GAMER", "HEDGE", "ICING",
    "JOKES", "KNEAD", "LUMEN", "MARCH", "NUTTY", "OFFER", "PAUSE", "QUILT", "RACER",
];
