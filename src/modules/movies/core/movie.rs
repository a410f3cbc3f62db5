use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Director {
    pub firstname: String,
    pub lastname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub isbn: String,
    pub title: String,
    pub director: Option<Director>,
}

/// Request body of a create or update. Carries no id: the store assigns one
/// on create and the path provides it on update. Missing fields default and
/// unknown fields (including `id`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MovieDraft {
    pub isbn: String,
    pub title: String,
    pub director: Option<Director>,
}

impl MovieDraft {
    /// Decodes a request body as JSON, whatever content type it was sent with.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    pub fn into_movie(self, id: impl Into<String>) -> Movie {
        Movie {
            id: id.into(),
            isbn: self.isbn,
            title: self.title,
            director: self.director,
        }
    }
}

pub fn seed_movies() -> Vec<Movie> {
    vec![
        Movie {
            id: "1".to_string(),
            isbn: "438277".to_string(),
            title: "Movie One".to_string(),
            director: Some(Director {
                firstname: "John".to_string(),
                lastname: "Doe".to_string(),
            }),
        },
        Movie {
            id: "2".to_string(),
            isbn: "277438".to_string(),
            title: "Movie Two".to_string(),
            director: Some(Director {
                firstname: "Smith".to_string(),
                lastname: "Bob".to_string(),
            }),
        },
    ]
}
