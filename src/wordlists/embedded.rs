//! Embedded curated word list
//!
//! The Formula 1 vocabulary the daily puzzle draws from, compiled into the
//! binary. Order matters: the word-of-day index walks this list.

/// The curated F1 word list, in rotation order
pub static WORDS: &[&str] = &[
    "PITSTOP",
    "BOXBOX",
    "ONPOLE",
    "PODIUM",
    "DRSZONE",
    "FERRARI",
    "REDBULL",
    "MERCEDES",
    "MCLAREN",
    "ALPHATAURI",
    "WILLIAMS",
    "ASTONMARTIN",
    "ALFAROMEO",
    "HAAS",
    "ALPINE",
    "SLICKS",
    "WETS",
    "INTERS",
    "QUALI",
    "SPRINT",
    "GEARBOX",
    "HALO",
    "PORPOISING",
    "SLIPSTREAM",
    "UNDERCUT",
    "OVERCUT",
    "APEX",
    "KERB",
    "CHICANE",
    "BACKMARKER",
    "BLUEFLAGS",
    "SAFETYCAR",
    "FORMATION",
    "YELLOWFLAG",
    "REDFLAG",
    "PITWALL",
    "PADDOCK",
];

/// Number of embedded words
pub const WORDS_COUNT: usize = 37;
