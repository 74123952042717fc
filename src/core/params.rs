use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::TransferMode;

/// Run parameters, passed explicitly into discovery and materialisation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchParams {
    /// Maximum file pairs per batch
    pub batch_size: usize,
    /// Container name prefix, e.g. `Batch` gives `Batch_01`
    pub prefix: String,
    pub text_ext: String,
    pub image_ext: String,
    /// File name of the combined text artifact inside each container
    pub combined_name: String,
    pub transfer_mode: TransferMode,
}

impl Default for BatchParams {
    fn default() -> Self {
        Self {
            batch_size: 250,
            prefix: "Batch".to_string(),
            text_ext: ".txt".to_string(),
            image_ext: ".jpg".to_string(),
            combined_name: "combined.txt".to_string(),
            transfer_mode: TransferMode::Copy,
        }
    }
}

impl BatchParams {
    /// Check every field and return a copy with both extensions normalised.
    pub fn validate(&self) -> Result<BatchParams> {
        if self.batch_size == 0 {
            return Err(Error::invalid(
                "batch_size",
                "0",
                "must be greater than 0",
            ));
        }

        let text_ext = normalize_extension("text_ext", &self.text_ext)?;
        let image_ext = normalize_extension("image_ext", &self.image_ext)?;
        if text_ext == image_ext {
            return Err(Error::invalid(
                "image_ext",
                image_ext,
                "text and image extensions must differ",
            ));
        }

        check_name_component("prefix", &self.prefix)?;
        check_name_component("combined_name", &self.combined_name)?;

        Ok(BatchParams {
            batch_size: self.batch_size,
            prefix: self.prefix.clone(),
            text_ext,
            image_ext,
            combined_name: self.combined_name.clone(),
            transfer_mode: self.transfer_mode,
        })
    }
}

/// `txt` and `.txt` both become `.txt`.
pub fn normalize_extension(arg: &'static str, ext: &str) -> Result<String> {
    let trimmed = ext.trim();
    let bare = trimmed.strip_prefix('.').unwrap_or(trimmed);
    if bare.is_empty() {
        return Err(Error::invalid(arg, ext, "extension must not be empty"));
    }
    if bare.starts_with('.') {
        return Err(Error::invalid(arg, ext, "extension must have a single leading dot"));
    }
    if has_separator(bare) {
        return Err(Error::invalid(arg, ext, "extension must not contain a path separator"));
    }
    Ok(format!(".{}", bare))
}

fn check_name_component(arg: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::invalid(arg, value, "must not be empty"));
    }
    if has_separator(value) || value == "." || value == ".." {
        return Err(Error::invalid(arg, value, "must be a plain file name"));
    }
    Ok(())
}

fn has_separator(s: &str) -> bool {
    s.contains('/') || s.contains('\\')
}

/// Naming of per-batch containers. `width` is computed once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConfig {
    pub prefix: String,
    pub width: usize,
    pub combined_name: String,
}

impl NamingConfig {
    pub fn new(params: &BatchParams, total_batches: usize) -> Self {
        Self {
            prefix: params.prefix.clone(),
            width: batch_number_width(total_batches),
            combined_name: params.combined_name.clone(),
        }
    }

    pub fn container_name(&self, number: usize) -> String {
        format!("{}_{:0width$}", self.prefix, number, width = self.width)
    }
}

/// Digits needed for the largest batch number, never fewer than 2.
pub fn batch_number_width(total_batches: usize) -> usize {
    let mut digits = 1;
    let mut n = total_batches / 10;
    while n > 0 {
        digits += 1;
        n /= 10;
    }
    digits.max(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_grows_with_batch_count() {
        assert_eq!(batch_number_width(0), 2);
        assert_eq!(batch_number_width(1), 2);
        assert_eq!(batch_number_width(99), 2);
        assert_eq!(batch_number_width(100), 3);
        assert_eq!(batch_number_width(999), 3);
        assert_eq!(batch_number_width(1000), 4);
    }

    #[test]
    fn container_names_share_one_width() {
        let params = BatchParams::default();
        let naming = NamingConfig::new(&params, 120);
        assert_eq!(naming.container_name(1), "Batch_001");
        assert_eq!(naming.container_name(120), "Batch_120");
    }

    #[test]
    fn extensions_are_normalised() {
        assert_eq!(normalize_extension("text_ext", "txt").unwrap(), ".txt");
        assert_eq!(normalize_extension("text_ext", ".jpg").unwrap(), ".jpg");
        assert!(normalize_extension("text_ext", ".").is_err());
        assert!(normalize_extension("text_ext", "").is_err());
        assert!(normalize_extension("text_ext", "..txt").is_err());
        assert!(normalize_extension("text_ext", "a/b").is_err());
    }

    #[test]
    fn validate_rejects_unusable_settings() {
        let zero = BatchParams {
            batch_size: 0,
            ..BatchParams::default()
        };
        assert!(matches!(
            zero.validate(),
            Err(Error::InvalidConfiguration { arg: "batch_size", .. })
        ));

        let same = BatchParams {
            text_ext: "jpg".to_string(),
            ..BatchParams::default()
        };
        assert!(same.validate().is_err());

        let nested = BatchParams {
            combined_name: "out/combined.txt".to_string(),
            ..BatchParams::default()
        };
        assert!(nested.validate().is_err());

        let ok = BatchParams {
            text_ext: "txt".to_string(),
            image_ext: "png".to_string(),
            ..BatchParams::default()
        }
        .validate()
        .unwrap();
        assert_eq!(ok.text_ext, ".txt");
        assert_eq!(ok.image_ext, ".png");
    }
}
