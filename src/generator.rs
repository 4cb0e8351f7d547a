//! Generation pipeline
//!
//! 1. Validate the descriptor
//! 2. Render the config record (argument checks happen here)
//! 3. Create the output directory and extract the bundled scripts
//! 4. Write app-config.sh
//!
//! Steps 1 and 2 touch nothing on disk, so a bad descriptor never leaves
//! partial output. The config is written last, so a run that fails while
//! extracting writes no config.

use std::path::PathBuf;

use serde::Serialize;

use crate::bundle::ResourceBundle;
use crate::descriptor::{self, Descriptor};
use crate::emitter::{self, ConfigRecord};
use crate::error::Result;
use crate::extractor::{self, ResourceManifest};

/// What a generation run wrote
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub application_name: String,
    /// Lower-cased application kind
    pub kind: String,
    pub output_directory: PathBuf,
    pub script: PathBuf,
    pub extracted: Vec<PathBuf>,
    pub config: PathBuf,
}

/// Run the whole pipeline for `descriptor`
pub fn generate(descriptor: &Descriptor, bundle: &dyn ResourceBundle) -> Result<GenerationReport> {
    let valid = descriptor::validate(descriptor)?;
    tracing::info!(
        kind = %valid.kind,
        application = valid.application_name,
        "Descriptor validated"
    );

    let record = ConfigRecord::from_descriptor(&valid)?;

    let manifest = ResourceManifest::for_kind(valid.kind, valid.script_name);
    let extracted = extractor::extract(&manifest, bundle, valid.output_directory)?;

    let config = emitter::emit(&record, valid.output_directory)?;

    Ok(GenerationReport {
        application_name: valid.application_name.to_string(),
        kind: valid.kind.lowercase(),
        output_directory: valid.output_directory.to_path_buf(),
        script: valid.output_directory.join(valid.script_name),
        extracted,
        config,
    })
}
