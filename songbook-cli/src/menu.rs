//! Menu screens

use songbook_common::table::render_menu;

pub const OPTION_PROMPT: &str = "Enter option: ";

/// Hidden option: replace data with the demo set
pub const SEED_OPTION: i64 = -99;

const BLANK: (&str, &str) = ("", "");
const EXIT: (&str, &str) = ("0", "Exit");

pub fn main_menu() -> String {
    render_menu("Main Menu", &[("1", "Songs Menu"), ("2", "Artists Menu")], EXIT)
}

pub fn song_menu() -> String {
    render_menu(
        "Song Menu",
        &[
            ("1", "Add Song"),
            ("2", "View Song"),
            ("3", "Update Song"),
            ("4", "Delete Song"),
            ("5", "Explicitify Song"),
            BLANK,
            ("6", "Search Songs"),
            ("7", "Remove Multiple Songs"),
            BLANK,
            ("8", "List Songs"),
            BLANK,
            ("9", "Load Songs from File"),
            ("10", "Save Songs to File"),
        ],
        EXIT,
    )
}

pub fn list_songs_menu() -> String {
    render_menu(
        "List Songs Menu",
        &[
            ("1", "List All Songs"),
            ("2", "List Safe Songs"),
            ("3", "List Explicit Songs"),
            ("4", "List Songs by Rating"),
            ("5", "List Stale Songs"),
            ("6", "List Important Songs"),
        ],
        EXIT,
    )
}

pub fn artist_menu() -> String {
    render_menu(
        "Artist Menu",
        &[
            ("1", "Add Artist"),
            ("2", "View Artist"),
            ("3", "Update Artist"),
            ("4", "Delete Artist"),
            BLANK,
            ("5", "Search Artists"),
            ("6", "List Artists"),
            BLANK,
            ("7", "Load Artists from File"),
            ("8", "Save Artists to File"),
        ],
        EXIT,
    )
}

pub const BANNER: &str = r"
███████╗ ██████╗ ███╗   ██╗ ██████╗ ██████╗  ██████╗  ██████╗ ██╗  ██╗
██╔════╝██╔═══██╗████╗  ██║██╔════╝ ██╔══██╗██╔═══██╗██╔═══██╗██║ ██╔╝
███████╗██║   ██║██╔██╗ ██║██║  ███╗██████╔╝██║   ██║██║   ██║█████╔╝
╚════██║██║   ██║██║╚██╗██║██║   ██║██╔══██╗██║   ██║██║   ██║██╔═██╗
███████║╚██████╔╝██║ ╚████║╚██████╔╝██████╔╝╚██████╔╝╚██████╔╝██║  ██╗
╚══════╝ ╚═════╝ ╚═╝  ╚═══╝ ╚═════╝ ╚═════╝  ╚═════╝  ╚═════╝ ╚═╝  ╚═╝
";
