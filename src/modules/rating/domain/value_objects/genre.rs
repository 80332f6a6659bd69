use serde::{Deserialize, Serialize};

/// Controlled genre vocabulary. Records tag a set of these; free-form genre
/// strings are not accepted anywhere, including bulk import.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Mecha,
    Music,
    Mystery,
    Psychological,
    Romance,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    #[serde(rename = "Slice of Life")]
    SliceOfLife,
    Sports,
    Supernatural,
    Thriller,
    Isekai,
    Shounen,
    Shoujo,
    Seinen,
    Josei,
}

impl Genre {
    pub const ALL: [Genre; 21] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Comedy,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Mecha,
        Genre::Music,
        Genre::Mystery,
        Genre::Psychological,
        Genre::Romance,
        Genre::SciFi,
        Genre::SliceOfLife,
        Genre::Sports,
        Genre::Supernatural,
        Genre::Thriller,
        Genre::Isekai,
        Genre::Shounen,
        Genre::Shoujo,
        Genre::Seinen,
        Genre::Josei,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Mecha => "Mecha",
            Genre::Music => "Music",
            Genre::Mystery => "Mystery",
            Genre::Psychological => "Psychological",
            Genre::Romance => "Romance",
            Genre::SciFi => "Sci-Fi",
            Genre::SliceOfLife => "Slice of Life",
            Genre::Sports => "Sports",
            Genre::Supernatural => "Supernatural",
            Genre::Thriller => "Thriller",
            Genre::Isekai => "Isekai",
            Genre::Shounen => "Shounen",
            Genre::Shoujo => "Shoujo",
            Genre::Seinen => "Seinen",
            Genre::Josei => "Josei",
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Genre {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .iter()
            .find(|genre| genre.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("Unknown genre: {}", s))
    }
}
