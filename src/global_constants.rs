pub const APPLICATION_NAME: &str = "mashup-search";

pub const HTTP_USER_AGENT: &str = concat!("mashup-search/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_FLICKR_API_URL: &str = "https://api.flickr.com/services/rest/";
pub const DEFAULT_WORDS_API_URL: &str = "https://words.bighugelabs.com/api/2";

pub const DEFAULT_IMAGE_LICENSE_FILTER: &str = "2,3,4,5,6,9";
pub const DEFAULT_IMAGE_SORT_ORDER: &str = "relevance";

pub const DEFAULT_MAX_IMAGE_RESULTS: usize = 30;
pub const DEFAULT_MAX_RELATED_WORDS: usize = 15;

pub const DEFAULT_PRESET_TERMS: [&str; 6] = ["nature", "city", "ocean", "mountain", "forest", "space"];

pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const INTERACTIVE_QUIT_COMMAND: &str = ":q";

pub const INTERACTIVE_BANNER: &str = r#"
mashup-search: photos and related words side by side

  Type a search term and press Enter.
  Type the number of a preset term to search for it.
  Type :q to quit.
"#;
