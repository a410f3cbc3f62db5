use crate::modules::movies::core::movie::{Director, MovieDraft};

pub struct MovieDraftBuilder {
    inner: MovieDraft,
}

impl Default for MovieDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieDraftBuilder {
    pub fn new() -> Self {
        Self {
            inner: MovieDraft {
                isbn: "999".to_string(),
                title: "New Movie".to_string(),
                director: Some(Director {
                    firstname: "A".to_string(),
                    lastname: "B".to_string(),
                }),
            },
        }
    }

    pub fn isbn(mut self, v: impl Into<String>) -> Self {
        self.inner.isbn = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn director(mut self, firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        self.inner.director = Some(Director {
            firstname: firstname.into(),
            lastname: lastname.into(),
        });
        self
    }

    pub fn no_director(mut self) -> Self {
        self.inner.director = None;
        self
    }

    pub fn build(self) -> MovieDraft {
        self.inner
    }
}

#[cfg(test)]
mod movie_draft_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let draft = MovieDraftBuilder::new()
            .isbn("123")
            .title("Custom")
            .director("Jane", "Roe")
            .build();

        assert_eq!(draft.isbn, "123");
        assert_eq!(draft.title, "Custom");
        assert_eq!(
            draft.director,
            Some(Director {
                firstname: "Jane".to_string(),
                lastname: "Roe".to_string(),
            })
        );
        assert_eq!(MovieDraftBuilder::default().no_director().build().director, None);
    }
}
