//! Every catalog table, in creation order.
//!
//! A table only references tables listed before it, so creating in this
//! order and dropping in reverse never trips a foreign key.

use sea_orm::EntityName;

use super::prelude::*;

/// Whether a table holds entities or resolves a many-to-many relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Entity,
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    pub kind: TableKind,
}

const fn entity(name: &'static str) -> TableDef {
    TableDef {
        name,
        kind: TableKind::Entity,
    }
}

const fn link(name: &'static str) -> TableDef {
    TableDef {
        name,
        kind: TableKind::Link,
    }
}

pub const TABLES: &[TableDef] = &[
    entity("countries"),
    entity("users"),
    entity("artists"),
    entity("albums"),
    entity("genres"),
    entity("songs"),
    entity("playlists"),
    entity("billing_history"),
    entity("listening_history"),
    link("song_artists"),
    link("song_genres"),
    link("playlist_songs"),
    link("song_likes"),
    link("follows"),
];

/// Table names in creation order.
pub fn table_names() -> Vec<&'static str> {
    TABLES.iter().map(|t| t.name).collect()
}

/// Table names as the entity definitions declare them, in creation order.
pub fn entity_table_names() -> Vec<String> {
    vec![
        Country.table_name().to_owned(),
        User.table_name().to_owned(),
        Artist.table_name().to_owned(),
        Album.table_name().to_owned(),
        Genre.table_name().to_owned(),
        Song.table_name().to_owned(),
        Playlist.table_name().to_owned(),
        BillingHistory.table_name().to_owned(),
        ListeningHistory.table_name().to_owned(),
        SongArtist.table_name().to_owned(),
        SongGenre.table_name().to_owned(),
        PlaylistSong.table_name().to_owned(),
        SongLike.table_name().to_owned(),
        Follow.table_name().to_owned(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_matches_entity_definitions() {
        assert_eq!(table_names(), entity_table_names());
    }

    #[test]
    fn test_registry_has_five_link_tables() {
        let links: Vec<_> = TABLES
            .iter()
            .filter(|t| t.kind == TableKind::Link)
            .map(|t| t.name)
            .collect();
        assert_eq!(
            links,
            vec!["song_artists", "song_genres", "playlist_songs", "song_likes", "follows"]
        );
    }

    #[test]
    fn test_parents_come_before_children() {
        let names = table_names();
        let pos = |n: &str| names.iter().position(|t| *t == n).unwrap();
        assert!(pos("countries") < pos("users"));
        assert!(pos("artists") < pos("albums"));
        assert!(pos("albums") < pos("songs"));
        assert!(pos("users") < pos("playlists"));
        assert!(pos("songs") < pos("listening_history"));
        assert!(pos("playlists") < pos("playlist_songs"));
    }

    #[test]
    fn test_table_names_are_unique() {
        let mut names = table_names();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TABLES.len());
    }
}
