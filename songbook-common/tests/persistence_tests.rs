//! File serializer round-trips and failure handling

use songbook_common::models::{seeded_artists, seeded_songs};
use songbook_common::{Artist, Collection, Error, FileSerializer, Format, Persistence, Song};
use tempfile::TempDir;

const FORMATS: [Format; 4] = [Format::Json, Format::Yaml, Format::Toml, Format::Xml];

#[test]
fn test_songs_round_trip_in_every_format() {
    let temp_dir = TempDir::new().unwrap();

    for format in FORMATS {
        let path = temp_dir.path().join(format!("songs.{}", format.extension()));
        let serializer = FileSerializer::new(&path, format);

        let songs = Collection::from_items(seeded_songs());
        songs.save_to(&serializer).unwrap();

        let mut loaded: Collection<Song> = Collection::new();
        let count = loaded.load_from(&serializer).unwrap();
        assert_eq!(count, 5, "{format}");
        assert_eq!(loaded.items(), songs.items(), "{format}");
    }
}

#[test]
fn test_artists_round_trip_in_every_format() {
    let temp_dir = TempDir::new().unwrap();

    for format in FORMATS {
        let path = temp_dir.path().join(format!("artists.{}", format.extension()));
        let serializer = FileSerializer::new(&path, format);

        serializer.save(&seeded_artists()).unwrap();
        let loaded: Vec<Artist> = serializer.load().unwrap();
        assert_eq!(loaded, seeded_artists(), "{format}");
    }
}

#[test]
fn test_empty_collection_round_trips() {
    let temp_dir = TempDir::new().unwrap();

    for format in FORMATS {
        let path = temp_dir.path().join(format!("empty.{}", format.extension()));
        let serializer = FileSerializer::new(&path, format);

        serializer.save(&Vec::<Song>::new()).unwrap();
        let loaded: Vec<Song> = serializer.load().unwrap();
        assert!(loaded.is_empty(), "{format}");
    }
}

#[test]
fn test_save_leaves_no_temp_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("songs.json");

    FileSerializer::for_path(&path).save(&seeded_songs()).unwrap();
    assert!(path.exists());
    assert!(!temp_dir.path().join("songs.json.tmp").exists());
}

#[test]
fn test_save_overwrites_previous_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    let serializer = FileSerializer::for_path(temp_dir.path().join("songs.yaml"));

    serializer.save(&seeded_songs()).unwrap();
    serializer.save(&seeded_songs()[..2]).unwrap();

    let loaded: Vec<Song> = serializer.load().unwrap();
    assert_eq!(loaded.len(), 2);
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let serializer = FileSerializer::for_path(temp_dir.path().join("absent.json"));

    let result: songbook_common::Result<Vec<Song>> = serializer.load();
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_failed_load_keeps_collection_intact() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("songs.json");
    std::fs::write(&path, "{ \"records\": [ { \"title\": \"half a song\" ").unwrap();

    let mut songs = Collection::from_items(seeded_songs());
    let result = songs.load_from(&FileSerializer::for_path(&path));

    assert!(matches!(result, Err(Error::Json(_))));
    assert_eq!(songs.items(), seeded_songs().as_slice());
}

#[test]
fn test_wrong_format_fails_to_decode() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("songs.data");

    FileSerializer::new(&path, Format::Yaml).save(&seeded_songs()).unwrap();
    let result: songbook_common::Result<Vec<Song>> = FileSerializer::new(&path, Format::Json).load();
    assert!(result.is_err());
}

#[test]
fn test_timestamps_stored_in_iso_form() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("songs.json");
    FileSerializer::for_path(&path).save(&seeded_songs()).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"records\""));
    assert!(content.contains("2022-01-10T09:00:00"));
}

#[test]
fn test_xml_snapshot_layout() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("artists.xml");
    FileSerializer::for_path(&path).save(&seeded_artists()).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("<snapshot>"));
    assert_eq!(content.matches("<records>").count(), 3);
    assert!(content.contains("<genres>Glam rock</genres>"));
    assert!(content.contains("<founded_date>1970-06-27T00:00:00</founded_date>"));
}

#[test]
fn test_fresh_timestamps_round_trip_as_xml() {
    let temp_dir = TempDir::new().unwrap();
    let serializer = FileSerializer::for_path(temp_dir.path().join("songs.xml"));
    let songs = vec![
        Song::new("Don't Stop \"Me\" Now", 5, "Rock", false),
        Song::new("Für Elise", 4, "Classical", false),
    ];

    serializer.save(&songs).unwrap();
    let loaded: Vec<Song> = serializer.load().unwrap();
    assert_eq!(loaded, songs);
}
