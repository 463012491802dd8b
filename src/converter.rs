use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::{
    args::Args,
    document::CollabYamlDocument,
    emitter::{write_document, yaml_path},
    error::ConvertError,
    loader::load_records,
    outcome::Outcome,
};

/// The converter of this crate, turning every `<repository>.json` collaborator listing
/// of a directory into a `<repository>.yaml` permission file.
pub struct Converter {
    input_dir: PathBuf,
    output_dir: PathBuf,
    dry_run: bool,
}

impl Converter {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            dry_run: false,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Convert all JSON files of the input directory, in file name order.
    ///
    /// Failures on individual files are logged and reported as [`Outcome`]s;
    /// only a failure to list the input directory is returned as an error.
    pub fn run(&self) -> Result<Vec<Outcome>> {
        let sources = json_files(&self.input_dir).with_context(|| {
            format!("Failed listing JSON files in {}", self.input_dir.display())
        })?;
        Ok(sources.iter().map(|path| self.convert(path)).collect())
    }

    /// Convert a single JSON file.
    pub fn convert(&self, path: &Path) -> Outcome {
        log::info!("Processing {}", path.display());
        match self.try_convert(path) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::error!("{}", error_chain(&err));
                Outcome::error(path, err)
            }
        }
    }

    fn try_convert(&self, path: &Path) -> Result<Outcome, ConvertError> {
        let repository = repository_name(path);
        let records = load_records(path)?;
        if records.is_empty() {
            log::warn!("Skipping {}, no collaborator listed", path.display());
            return Ok(Outcome::empty(path));
        }
        let Some(doc) = CollabYamlDocument::build(&repository, &records)? else {
            log::warn!("Skipping {}, no user among collaborators", path.display());
            return Ok(Outcome::empty(path));
        };
        log::debug!("YAML data: {doc:?}");
        for (login, entry) in doc.collaborators() {
            log::trace!("{repository}: {login} -> {:?}", entry.permissions.as_str());
        }

        if self.dry_run {
            let yaml = yaml_path(&self.output_dir, &repository);
            log::info!(
                "YAML file created: (not really, running in dry mode) {}",
                yaml.display()
            );
            return Ok(Outcome::faked(path, yaml));
        }
        let yaml = write_document(&doc, &self.output_dir)?;
        log::info!("YAML file created: {}", yaml.display());
        Ok(Outcome::written(path, yaml))
    }
}

impl From<&Args> for Converter {
    fn from(args: &Args) -> Self {
        Converter::new(&args.input_dir, &args.output_dir).dry_run(args.dry_run)
    }
}

/// List the entries of `dir` whose name ends with `.json`, sorted by name.
fn json_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = vec![];
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().ends_with(".json") {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// The name of a repository is the name of its JSON file, without the extension.
fn repository_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Format an error together with all its sources.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(err) = source {
        msg += &format!(": {err}");
        source = err.source();
    }
    msg
}
