// src/convert.rs
use crate::error::ConvertError;
use rclayout_document::{DocumentOptions, build_document};
use rclayout_types::LayoutConfig;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Extension of generated documents.
pub const OUTPUT_EXTENSION: &str = "rc";

/// `input` with its extension replaced by `.rc`.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

/// Outcome of converting one config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub bytes: usize,
}

/// Converts layout configs into documents using a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: DocumentOptions,
}

impl Converter {
    pub fn new(options: DocumentOptions) -> Self {
        Self { options }
    }

    pub fn convert_config(&self, config: &LayoutConfig) -> Result<Vec<u8>, ConvertError> {
        Ok(build_document(config, &self.options)?)
    }

    pub fn convert_str(&self, json: &str) -> Result<Vec<u8>, ConvertError> {
        let config = LayoutConfig::from_json(json)?;
        self.convert_config(&config)
    }

    /// Reads `input`, converts it and writes the document to `output`, creating the
    /// parent directory if needed.
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<ConversionReport, ConvertError> {
        let input = input.as_ref();
        let output = output.as_ref();

        let json = fs::read_to_string(input).map_err(|e| {
            ConvertError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", input.display(), e),
            ))
        })?;
        let bytes = self.convert_str(&json)?;

        if let Some(parent_dir) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent_dir)?;
        }
        fs::write(output, &bytes)?;

        log::info!(
            "{} -> {} ({} bytes)",
            input.display(),
            output.display(),
            bytes.len()
        );
        Ok(ConversionReport {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            bytes: bytes.len(),
        })
    }

    /// Converts every `*.json` file directly inside `input_dir` into `output_dir`, keeping
    /// base names. Files are processed in name order and the first failure aborts the run.
    pub fn convert_dir<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_dir: P,
        output_dir: Q,
    ) -> Result<Vec<ConversionReport>, ConvertError> {
        let input_dir = input_dir.as_ref();
        let output_dir = output_dir.as_ref();
        if !input_dir.is_dir() {
            return Err(ConvertError::InvalidInput(format!(
                "'{}' is not a directory",
                input_dir.display()
            )));
        }
        fs::create_dir_all(output_dir)?;

        let inputs = json_files(input_dir)?;
        log::info!("Converting {} config files...", inputs.len());

        let mut reports = Vec::with_capacity(inputs.len());
        for input in inputs {
            let Some(stem) = input.file_stem() else {
                continue;
            };
            let mut name = stem.to_os_string();
            name.push(".");
            name.push(OUTPUT_EXTENSION);
            reports.push(self.convert_file(&input, output_dir.join(name))?);
        }
        Ok(reports)
    }
}

fn json_files(dir: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
