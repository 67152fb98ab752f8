//! Production level catalog data
//!
//! The shipped level set, in play order. A level's index is its position
//! plus one; indices are contiguous starting at 1.

pub(crate) const RAW_LEVELS: &[(&str, &[&str])] = &[
    ("PAINTER", &["PAIN", "PANE", "PEAR", "RAIN", "TAPE"]),
    ("STATION", &["SAINT", "SATIN", "SEAT", "STAIN", "TANS"]),
    ("CRYSTAL", &["CAST", "CATS", "LACY", "SCAR", "STAY"]),
    ("THUNDER", &["HUNT", "HURT", "RENT", "TURN", "UNDER"]),
    ("GARDEN", &["AGED", "DARE", "DRAG", "EARN", "RAGE"]),
    ("SILENCE", &["LENS", "LICE", "LINE", "NICE", "SLICE"]),
    ("MORNING", &["GRIM", "MING", "MINOR", "RING", "ROAM"]),
    ("PICTURE", &["CURE", "CUTE", "PIER", "RIPE", "TRIP"]),
    ("STREAM", &["ARMS", "MARS", "RAMS", "STAR", "TAME"]),
    ("WINTER", &["TWIN", "WENT", "WINE", "WIRE", "WRIT"]),
    ("FOREST", &["FORE", "REST", "ROSE", "SORT", "TORE"]),
    ("SPRING", &["PING", "RING", "SPIN", "SPUR", "RIPS"]),
    ("WONDER", &["DOWN", "DREW", "NERO", "WORN", "WORD"]),
    ("CASTLE", &["CASE", "EAST", "LACE", "SALE", "SEAL"]),
    ("FLOWER", &["FLOW", "FOWL", "LOWER", "WOLF", "WORE"]),
    ("BRIDGE", &["BERG", "BRED", "GRID", "RIDE", "RIGS"]),
    ("SUMMER", &["MUSE", "RUSE", "SURE", "USER", "SUMS"]),
    ("MARKET", &["MAKE", "RAKE", "TAKE", "TAME", "TEAM"]),
    ("PLANET", &["LEAP", "NEAT", "PANE", "PLAN", "TAPE"]),
    ("SHADOW", &["DASH", "DOES", "SHOW", "SODA", "WASH"]),
    ("SPARE", &["APSE", "PEAR", "REAP", "PARE", "SPEAR"]),
    ("SILVER", &["LIES", "LIVE", "RISE", "VEIL", "LIVER"]),
    ("MONKEY", &["MOKE", "MONK", "MONEY", "NEMO", "YOKE"]),
    ("PURPLE", &["PURE", "PULP", "RULE", "LURE", "PLUM"]),
    ("DRAGON", &["DONG", "DRAG", "ROAD", "RANG", "GRAN"]),
    ("OCEAN", &["CANE", "CONE", "ONCE", "ACNE", "ECHO"]),
    ("STORM", &["MOST", "ROTS", "SORT", "TOMS", "TORS"]),
    ("BLOSSOM", &["BLOOM", "LOSS", "MOSS", "SLOB", "SOLO"]),
    ("RAISE", &["AIRS", "EARS", "RISE", "SEAR", "SIRE"]),
    ("REACH", &["ARCH", "CARE", "CHAR", "EACH", "HEAR"]),
    ("CLEAR", &["CARE", "EARL", "LACE", "RACE", "REAL"]),
    ("SUNSET", &["NEST", "SENT", "SUES", "SUNS", "TENS"]),
    ("STONE", &["NEST", "NOTE", "ONES", "SENT", "TONE"]),
    ("STARS", &["ARTS", "RATS", "STAR", "TARS", "TSAR"]),
    ("TRAIN", &["ANTI", "RAIN", "RANI", "RANT", "TARN"]),
    ("DIAMOND", &["MAID", "MAIN", "MIND", "MOAN", "AMID"]),
    ("PEARL", &["LEAP", "PALE", "PEAR", "PLEA", "REAL"]),
    ("CRYSTAL", &["CRY", "CAST", "RACY", "STAR", "TRAY", "STRAY"]),
    ("GOLDEN", &["DOLE", "GLEN", "GOLD", "LEND", "OGLE"]),
    ("SILVER", &["LIES", "LIVE", "RISE", "VEIL", "LIVER"]),
    ("MASTER", &["STEAM", "TAME", "TEAM", "STEM", "MATE"]),
    ("PLANET", &["PLAN", "PANE", "LEAP", "NEAT", "TAPE"]),
    ("SHIELD", &["HELD", "HIDE", "LIED", "SIDE", "SHED"]),
    ("BRIGHT", &["RIGHT", "BRIT", "GRIT", "BIT", "RIG"]),
    ("FLAMES", &["FLAME", "SAME", "MEAL", "LAME", "SEAL"]),
    ("SPIRIT", &["STRIP", "TRIP", "SPIT", "RIPS", "TIPS"]),
    ("DREAM", &["DARE", "DAME", "READ", "MADE", "DEAR"]),
    ("HEART", &["HEAT", "HATE", "HEAR", "TEAR", "RATE"]),
    ("QUESTS", &["QUEST", "QUITS", "QUIET", "STUE", "SIT"]),
    ("LEGEND", &["LEND", "GLEN", "EDGE", "NEED", "GENE"]),
];

/// Number of shipped levels
pub const LEVEL_COUNT: usize = RAW_LEVELS.len();
