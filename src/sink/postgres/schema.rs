/// Pure schema definitions for the strategy table.
/// Built with const_format::concatcp! so SQL is assembled at compile time.
use const_format::concatcp;

pub const STRATEGY: &str = "strategy";

#[rustfmt::skip]
pub const CREATES: &str = concatcp!(
    "CREATE TABLE IF NOT EXISTS ", STRATEGY, " (",
        "paytable_id TEXT             NOT NULL, ",
        "hand_key    TEXT             NOT NULL, ",
        "best_hold   SMALLINT         NOT NULL, ",
        "best_ev     DOUBLE PRECISION NOT NULL, ",
        "hold_evs    DOUBLE PRECISION[] NOT NULL, ",
        "PRIMARY KEY (paytable_id, hand_key)",
    ");"
);

#[rustfmt::skip]
pub const UPSERT: &str = concatcp!(
    "INSERT INTO ", STRATEGY, " (paytable_id, hand_key, best_hold, best_ev, hold_evs) ",
    "VALUES                     ($1,          $2,       $3,        $4,      $5) ",
    "ON CONFLICT (paytable_id, hand_key) ",
    "DO UPDATE SET ",
        "best_hold = EXCLUDED.best_hold, ",
        "best_ev   = EXCLUDED.best_ev, ",
        "hold_evs  = EXCLUDED.hold_evs"
);

#[rustfmt::skip]
pub const LOOKUP: &str = concatcp!(
    "SELECT paytable_id, hand_key, best_hold, best_ev, hold_evs ",
    "FROM   ", STRATEGY, " ",
    "WHERE  paytable_id = $1 ",
    "AND    hand_key    = $2"
);

#[rustfmt::skip]
pub const EXPORT: &str = concatcp!(
    "SELECT   paytable_id, hand_key, best_hold, best_ev, hold_evs ",
    "FROM     ", STRATEGY, " ",
    "WHERE    paytable_id = $1 ",
    "ORDER BY hand_key COLLATE \"C\""
);

#[rustfmt::skip]
pub const COUNT: &str = concatcp!(
    "SELECT COUNT(*) ",
    "FROM   ", STRATEGY, " ",
    "WHERE  paytable_id = $1"
);

#[rustfmt::skip]
pub const KEYS: &str = concatcp!(
    "SELECT hand_key ",
    "FROM   ", STRATEGY, " ",
    "WHERE  paytable_id = $1"
);
