// Copyright (C) 2020-2026 Andy Kurnia.

use super::{matrix, orientation};

fn default_lang() -> String {
    "EN".to_string()
}

fn default_orientations() -> Vec<orientation::Orientation> {
    orientation::ALL_ORIENTATIONS.to_vec()
}

fn default_true() -> bool {
    true
}

fn default_max_attempts() -> u32 {
    3
}

fn default_max_grid_growth() -> u32 {
    10
}

// field names follow the json the presentation layer sends.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleConfig {
    #[serde(default = "default_lang")]
    pub lang: String,
    // None or 0 means the length of the longest word.
    #[serde(default)]
    pub height: Option<usize>,
    #[serde(default)]
    pub width: Option<usize>,
    #[serde(default = "default_orientations")]
    pub orientations: Vec<orientation::Orientation>,
    #[serde(default = "default_true")]
    pub fill_blanks: bool,
    #[serde(default = "default_true")]
    pub allow_extra_blanks: bool,
    #[serde(default)]
    pub allowed_missing_words: u32,
    // >= 1
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_max_grid_growth")]
    pub max_grid_growth: u32,
    #[serde(default = "default_true")]
    pub prefer_overlap: bool,
    #[serde(default)]
    pub debug: bool,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            height: None,
            width: None,
            orientations: default_orientations(),
            fill_blanks: true,
            allow_extra_blanks: true,
            allowed_missing_words: 0,
            max_attempts: default_max_attempts(),
            max_grid_growth: default_max_grid_growth(),
            prefer_overlap: true,
            debug: false,
        }
    }
}

// what the candidate search needs to know about the options.
#[derive(Clone, Copy, Debug)]
pub struct SearchParams<'a> {
    pub orientations: &'a [orientation::Orientation],
    pub prefer_overlap: bool,
    pub ignore_case: bool,
}

impl PuzzleConfig {
    #[inline(always)]
    pub fn search_params(&self) -> SearchParams<'_> {
        SearchParams {
            orientations: &self.orientations,
            prefer_overlap: self.prefer_overlap,
            ignore_case: false,
        }
    }

    // unset or zero means the length of the longest word.
    #[inline(always)]
    pub fn initial_dim(&self, longest_word_len: usize) -> matrix::Dim {
        matrix::Dim {
            rows: self.height.filter(|&h| h > 0).unwrap_or(longest_word_len),
            cols: self.width.filter(|&w| w > 0).unwrap_or(longest_word_len),
        }
    }

    // a zero from loose json means the default, like an unset field.
    #[inline(always)]
    pub fn effective_max_attempts(&self) -> u32 {
        if self.max_attempts == 0 {
            default_max_attempts()
        } else {
            self.max_attempts
        }
    }

    pub fn with_size(mut self, height: usize, width: usize) -> Self {
        self.height = Some(height);
        self.width = Some(width);
        self
    }

    pub fn with_orientations(mut self, orientations: &[orientation::Orientation]) -> Self {
        self.orientations = orientations.to_vec();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::Orientation;

    #[test]
    fn test_defaults_from_empty_json() {
        let config: PuzzleConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.lang, "EN");
        assert_eq!(config.orientations.len(), 8);
        assert!(config.fill_blanks);
        assert!(config.allow_extra_blanks);
        assert_eq!(config.allowed_missing_words, 0);
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.max_grid_growth, 10);
        assert!(config.prefer_overlap);
        assert!(!config.debug);
        assert_eq!(config.initial_dim(6), matrix::Dim { rows: 6, cols: 6 });
    }

    #[test]
    fn test_camel_case_fields() {
        let config: PuzzleConfig = serde_json::from_str(
            r#"{ "height": 4, "width": 9, "orientations": ["horizontal", "verticalUp"],
                 "fillBlanks": false, "allowedMissingWords": 2, "maxGridGrowth": 0,
                 "preferOverlap": false }"#,
        )
        .unwrap();
        assert_eq!(config.initial_dim(3), matrix::Dim { rows: 4, cols: 9 });
        assert_eq!(
            config.orientations,
            vec![Orientation::Horizontal, Orientation::VerticalUp]
        );
        assert!(!config.fill_blanks);
        assert_eq!(config.allowed_missing_words, 2);
        assert_eq!(config.max_grid_growth, 0);
        assert!(!config.prefer_overlap);
    }

    #[test]
    fn test_unknown_orientation_is_rejected() {
        assert!(serde_json::from_str::<PuzzleConfig>(r#"{ "orientations": ["sideways"] }"#).is_err());
    }

    #[test]
    fn test_zero_size_means_longest_word() {
        let config: PuzzleConfig =
            serde_json::from_str(r#"{ "height": 0, "width": 0, "maxGridGrowth": 0 }"#).unwrap();
        assert_eq!(config.initial_dim(5), matrix::Dim { rows: 5, cols: 5 });
        let config = PuzzleConfig::default().with_size(0, 7);
        assert_eq!(config.initial_dim(4), matrix::Dim { rows: 4, cols: 7 });
    }

    #[test]
    fn test_zero_attempts_means_default() {
        let config = PuzzleConfig {
            max_attempts: 0,
            ..PuzzleConfig::default()
        };
        assert_eq!(config.effective_max_attempts(), 3);
    }
}
