//! Loader for RON (and JSON) content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use super::registry::ContentRegistry;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a document, picking the format from the file extension.
/// Anything that is not `.json` is treated as RON.
fn parse_document<T>(path: &Path, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parsed: Result<T, String> = if is_json {
        serde_json::from_str(contents).map_err(|e| e.to_string())
    } else {
        ron_options().from_str(contents).map_err(|e| e.to_string())
    };

    parsed.map_err(|message| ContentLoadError {
        file: path.display().to_string(),
        message: format!("Parse error: {}", message),
    })
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Load a file containing a DataFile<T> wrapper.
pub fn load_data_file<T>(path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let contents = read_file(path)?;
    let data: DataFile<T> = parse_document(path, &contents)?;
    Ok(data.items)
}

/// Load a single struct (not wrapped in DataFile).
pub fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let contents = read_file(path)?;
    parse_document(path, &contents)
}

/// Load all content from assets/data/*.ron into a ContentRegistry.
/// Returns errors for any files that fail to load.
pub fn load_all_content(base_path: &Path) -> Result<ContentRegistry, Vec<ContentLoadError>> {
    let mut registry = ContentRegistry::default();
    let mut errors = Vec::new();

    macro_rules! load_into {
        ($registry_field:expr, $file:expr, $type:ty, $id_field:ident) => {
            let path = base_path.join($file);
            match load_data_file::<$type>(&path) {
                Ok(items) => {
                    for item in items {
                        $registry_field.insert(item.$id_field.clone(), item);
                    }
                }
                Err(e) => errors.push(e),
            }
        };
    }

    load_into!(registry.characters, "characters.ron", CharacterDef, id);
    load_into!(registry.enemies, "enemies.ron", EnemyDef, id);

    // Arena is a single struct, not a list
    match load_single_file::<ArenaDef>(&base_path.join("arena.ron")) {
        Ok(arena) => registry.arena = arena,
        Err(e) => errors.push(e),
    }

    if errors.is_empty() {
        Ok(registry)
    } else {
        Err(errors)
    }
}
