use std::fs;
use std::path::PathBuf;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ScoutError;
use crate::recipe::Recipe;

/// A bookmarked recipe, trimmed to what the likes panel needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image_url: String,
}

impl From<&Recipe> for Like {
    fn from(recipe: &Recipe) -> Self {
        Like {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            publisher: recipe.publisher.clone(),
            image_url: recipe.image_url.clone(),
        }
    }
}

/// In-memory registry of liked recipes.
///
/// Pure bookkeeping; persistence goes through a [`LikesStore`].
#[derive(Debug, Clone, Default)]
pub struct LikeRegistry {
    likes: Vec<Like>,
}

impl LikeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_saved(likes: Vec<Like>) -> Self {
        LikeRegistry { likes }
    }

    /// Add the like if absent, remove it if present. Returns whether the
    /// recipe is liked afterwards.
    pub fn toggle(&mut self, like: Like) -> bool {
        if self.is_liked(&like.id) {
            self.likes.retain(|existing| existing.id != like.id);
            false
        } else {
            self.likes.push(like);
            true
        }
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.likes.iter().any(|like| like.id == id)
    }

    pub fn likes(&self) -> &[Like] {
        &self.likes
    }

    pub fn len(&self) -> usize {
        self.likes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.likes.is_empty()
    }
}

/// Persistence port for liked recipes
pub trait LikesStore {
    fn load(&self) -> Result<Vec<Like>, ScoutError>;
    fn save(&self, likes: &[Like]) -> Result<(), ScoutError>;
}

/// [`LikesStore`] backed by a JSON file
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }
}

impl LikesStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Like>, ScoutError> {
        if !self.path.exists() {
            debug!("no likes file at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&self, likes: &[Like]) -> Result<(), ScoutError> {
        let json = serde_json::to_string_pretty(likes)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
