//! The fixed sample catalog written by the seed loader.
//!
//! Rows refer to each other by their natural names (country name, username,
//! artist name, album and song titles); the loader resolves those to ids as
//! it inserts.

pub struct UserSeed {
    pub username: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub is_premium: bool,
    pub country: Option<&'static str>,
}

pub struct BillingSeed {
    pub username: &'static str,
    pub billed_amount: i32,
    pub due: (i32, u32, u32),
    pub is_paid: bool,
}

pub struct ArtistSeed {
    pub name: &'static str,
    pub bio: &'static str,
}

pub struct AlbumSeed {
    pub title: &'static str,
    pub artist: &'static str,
    pub released: (i32, u32, u32),
    pub cover_image_url: &'static str,
}

/// Songs take their release date from their album.
pub struct SongSeed {
    pub title: &'static str,
    pub album: &'static str,
    pub duration_seconds: i32,
    pub track_number: i32,
    pub popularity_score: i32,
    pub artists: &'static [&'static str],
    pub genres: &'static [&'static str],
}

pub struct ListenSeed {
    pub username: &'static str,
    pub song: &'static str,
    pub device_info: &'static str,
    /// How long before seeding the play happened.
    pub minutes_ago: i64,
}

/// Songs are listed in playback order; positions start at 1.
pub struct PlaylistSeed {
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub owner: &'static str,
    pub is_public: bool,
    pub songs: &'static [&'static str],
}

pub const COUNTRIES: &[&str] = &["Indonesia", "USA", "UK"];

pub const USERS: &[UserSeed] = &[
    UserSeed {
        username: "budi_s",
        email: "budi@example.com",
        password: "pwd",
        is_premium: true,
        country: Some("Indonesia"),
    },
    UserSeed {
        username: "jane_d",
        email: "jane@example.com",
        password: "pwd",
        is_premium: false,
        country: Some("USA"),
    },
    UserSeed {
        username: "citra_k",
        email: "citra@example.com",
        password: "pwd",
        is_premium: false,
        country: Some("Indonesia"),
    },
];

pub const BILLING: &[BillingSeed] = &[
    BillingSeed {
        username: "budi_s",
        billed_amount: 50_000,
        due: (2025, 9, 1),
        is_paid: true,
    },
    BillingSeed {
        username: "budi_s",
        billed_amount: 50_000,
        due: (2025, 10, 1),
        is_paid: false,
    },
];

pub const GENRES: &[&str] = &["Pop", "Rock", "Jazz", "Folk", "Indie"];

pub const ARTISTS: &[ArtistSeed] = &[
    ArtistSeed {
        name: "Tulus",
        bio: "An Indonesian singer and songwriter.",
    },
    ArtistSeed {
        name: "Taylor Swift",
        bio: "An American pop and country music superstar.",
    },
    ArtistSeed {
        name: "Queen",
        bio: "A legendary British rock band.",
    },
];

pub const ALBUMS: &[AlbumSeed] = &[
    AlbumSeed {
        title: "Manusia",
        artist: "Tulus",
        released: (2022, 3, 3),
        cover_image_url: "/img/manusia.jpg",
    },
    AlbumSeed {
        title: "1989",
        artist: "Taylor Swift",
        released: (2014, 10, 27),
        cover_image_url: "/img/1989.jpg",
    },
    AlbumSeed {
        title: "A Night at the Opera",
        artist: "Queen",
        released: (1975, 11, 21),
        cover_image_url: "/img/opera.jpg",
    },
];

pub const SONGS: &[SongSeed] = &[
    SongSeed {
        title: "Hati-Hati di Jalan",
        album: "Manusia",
        duration_seconds: 242,
        track_number: 7,
        popularity_score: 95,
        artists: &["Tulus"],
        genres: &["Pop", "Indie"],
    },
    SongSeed {
        title: "Interaksi",
        album: "Manusia",
        duration_seconds: 176,
        track_number: 2,
        popularity_score: 90,
        artists: &["Tulus"],
        genres: &["Pop", "Indie"],
    },
    SongSeed {
        title: "Blank Space",
        album: "1989",
        duration_seconds: 231,
        track_number: 2,
        popularity_score: 98,
        artists: &["Taylor Swift"],
        genres: &["Pop"],
    },
    SongSeed {
        title: "Style",
        album: "1989",
        duration_seconds: 231,
        track_number: 3,
        popularity_score: 96,
        artists: &["Taylor Swift"],
        genres: &["Pop"],
    },
    SongSeed {
        title: "Bohemian Rhapsody",
        album: "A Night at the Opera",
        duration_seconds: 355,
        track_number: 11,
        popularity_score: 100,
        artists: &["Queen"],
        genres: &["Rock"],
    },
];

/// (username, song title)
pub const LIKES: &[(&str, &str)] = &[
    ("budi_s", "Hati-Hati di Jalan"),
    ("budi_s", "Bohemian Rhapsody"),
    ("jane_d", "Blank Space"),
    ("jane_d", "Style"),
    ("jane_d", "Bohemian Rhapsody"),
    ("citra_k", "Interaksi"),
];

/// (username, artist name)
pub const FOLLOWS: &[(&str, &str)] = &[
    ("budi_s", "Tulus"),
    ("budi_s", "Queen"),
    ("jane_d", "Taylor Swift"),
    ("citra_k", "Tulus"),
];

pub const LISTENS: &[ListenSeed] = &[
    ListenSeed {
        username: "budi_s",
        song: "Hati-Hati di Jalan",
        device_info: "iPhone 15",
        minutes_ago: 0,
    },
    ListenSeed {
        username: "jane_d",
        song: "Blank Space",
        device_info: "Android Chrome",
        minutes_ago: 0,
    },
    ListenSeed {
        username: "jane_d",
        song: "Blank Space",
        device_info: "Android Chrome",
        minutes_ago: 10,
    },
    ListenSeed {
        username: "budi_s",
        song: "Bohemian Rhapsody",
        device_info: "Desktop App",
        minutes_ago: 0,
    },
];

pub const PLAYLISTS: &[PlaylistSeed] = &[
    PlaylistSeed {
        name: "Lagu Santai",
        description: Some("Teman kerja dan santai"),
        owner: "budi_s",
        is_public: true,
        songs: &["Hati-Hati di Jalan", "Interaksi"],
    },
    PlaylistSeed {
        name: "Top Hits",
        description: Some("Hits terkini"),
        owner: "jane_d",
        is_public: false,
        songs: &["Blank Space", "Style", "Bohemian Rhapsody"],
    },
];
