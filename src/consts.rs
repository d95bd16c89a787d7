pub mod sheet_const {
    pub const RSVP_TABLE: &str = "RSVP";
    pub const TOPICS_TABLE: &str = "Topics";

    /// Header rows written when a table file is first created. The header row
    /// is the schema declaration; the column modules below MUST match it.
    pub const RSVP_HEADER: [&str; 6] = [
        "guest_id",
        "name",
        "status",
        "plus_one",
        "show_public",
        "timestamp",
    ];
    pub const TOPICS_HEADER: [&str; 6] = [
        "topic_id",
        "text",
        "author_id",
        "author_name",
        "likes",
        "timestamp",
    ];
}

/// Column positions for the `RSVP` table.
pub mod rsvp_col {
    pub const GUEST_ID: usize = 0;
    pub const NAME: usize = 1;
    pub const STATUS: usize = 2;
    pub const PLUS_ONE: usize = 3;
    pub const SHOW_PUBLIC: usize = 4;
    pub const TIMESTAMP: usize = 5;
}

/// Column positions for the `Topics` table.
pub mod topic_col {
    pub const TOPIC_ID: usize = 0;
    pub const TEXT: usize = 1;
    pub const AUTHOR_ID: usize = 2;
    pub const AUTHOR_NAME: usize = 3;
    pub const LIKES: usize = 4;
    pub const TIMESTAMP: usize = 5;
}
