use serde::Deserialize;

/// One poem as returned by PoetryDB.
///
/// `linecount` stays a string because the API sends it that way.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Poem {
    pub title: String,
    pub author: String,
    pub lines: Vec<String>,
    pub linecount: String,
}

impl Poem {
    pub fn first_line(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }

    /// `linecount` parsed as a number, `None` if the API sent something else
    pub fn declared_line_count(&self) -> Option<usize> {
        self.linecount.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_poem_array() {
        let body = r#"[
            {
                "title": "Sonnet XLIV: Press'd by the Moon",
                "author": "Charlotte Smith",
                "lines": [
                    "Press'd by the Moon, mute arbitress of tides,",
                    "While the loud equinox its power combines,"
                ],
                "linecount": "14"
            }
        ]"#;

        let poems: Vec<Poem> = serde_json::from_str(body).unwrap();

        assert_eq!(poems.len(), 1);
        assert_eq!(poems[0].title, "Sonnet XLIV: Press'd by the Moon");
        assert_eq!(poems[0].author, "Charlotte Smith");
        assert_eq!(
            poems[0].first_line(),
            Some("Press'd by the Moon, mute arbitress of tides,")
        );
        assert_eq!(poems[0].linecount, "14");
        assert_eq!(poems[0].declared_line_count(), Some(14));
    }

    #[test]
    fn test_numeric_linecount_is_rejected() {
        let body = r#"{"title":"T","author":"A","lines":["L1"],"linecount":1}"#;
        assert!(serde_json::from_str::<Poem>(body).is_err());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let body = r#"{"title":"T","author":"A","lines":["L1"]}"#;
        assert!(serde_json::from_str::<Poem>(body).is_err());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let body = r#"{"title":"T","author":"A","lines":[],"linecount":"0","extra":true}"#;
        let poem: Poem = serde_json::from_str(body).unwrap();
        assert_eq!(poem.lines.len(), 0);
    }

    #[test]
    fn test_first_line_of_empty_poem() {
        let poem = Poem {
            title: "Untitled".to_string(),
            author: "Anonymous".to_string(),
            lines: vec![],
            linecount: "0".to_string(),
        };
        assert_eq!(poem.first_line(), None);
    }

    #[test]
    fn test_declared_line_count_not_a_number() {
        let poem = Poem {
            title: "T".to_string(),
            author: "A".to_string(),
            lines: vec!["L1".to_string()],
            linecount: "one".to_string(),
        };
        assert_eq!(poem.declared_line_count(), None);
    }
}
