use anyhow::Context;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_merge::MergeConfig;
use libgraphql_merge::TypeDefsLoader;
use libgraphql_merge::TypeDefsMerger;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct MergeCmd {
    #[arg(
        help="Path to a TOML file with merge options (e.g. `sort = true`, \
             `exclusions = [\"Query.debug\"]`). Command line flags are applied \
             on top of it.",
        long,
    )]
    config: Option<PathBuf>,

    #[arg(
        help="Turn type extensions into type definitions in the output.",
        long,
    )]
    convert_extensions: bool,

    #[arg(
        help="Leave a type (`Type` or `Type.*`) or a field (`Type.field`) out \
             of the merged schema. May be repeated.",
        long,
        value_name="EXCLUSION",
    )]
    exclude: Vec<String>,

    #[arg(
        default_values_t=[
            "gql".to_string(),
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Keep the first declared type of a field that is declared again \
             with a different type, instead of failing.",
        long,
    )]
    ignore_field_conflicts: bool,

    #[arg(
        help="Write the merged schema to this file instead of stdout.",
        long,
        short='o',
    )]
    output: Option<PathBuf>,

    #[arg(
        help="Sort types, fields, arguments and enum values in the output.",
        long,
    )]
    sort: bool,

    #[arg(
        help="Fail when a field is redeclared with different nullability.",
        long,
    )]
    throw_on_conflict: bool,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be merged.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl MergeCmd {
    async fn load_config(&self) -> anyhow::Result<MergeConfig> {
        let mut config = match &self.config {
            Some(config_path) => read_config_file(config_path).await?,
            None => MergeConfig::default(),
        };

        config.convert_extensions |= self.convert_extensions;
        config.ignore_field_conflicts |= self.ignore_field_conflicts;
        config.sort |= self.sort;
        config.throw_on_conflict |= self.throw_on_conflict;
        config.exclusions.extend(self.exclude.iter().cloned());

        log::debug!("Merging with {config:?}.");
        Ok(config)
    }
}

async fn read_config_file(config_path: &Path) -> anyhow::Result<MergeConfig> {
    let content =
        tokio::fs::read_to_string(config_path)
            .await
            .with_context(|| format!("Failed to read config file {config_path:?}"))?;

    toml::from_str::<MergeConfig>(content.as_str())
        .with_context(|| format!("Invalid config file {config_path:?}"))
}

#[inherent::inherent]
impl RunnableCommand for MergeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let config = match self.load_config().await {
            Ok(config) => config,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };

        let loader = TypeDefsLoader::with_file_extensions(&self.graphql_file_exts);
        let loaded = loader.find_files(&self.file_or_dir_paths);
        if !loaded.errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors while locating GraphQL files: {:#?}",
                output_utils::RED_X,
                loaded.errors,
            ));
        }
        if loaded.file_paths.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No GraphQL files found under {:?}.",
                output_utils::RED_X,
                self.file_or_dir_paths,
            ));
        }

        log::debug!("Found {} GraphQL files to be merged.", loaded.file_paths.len());
        let mut merger = TypeDefsMerger::new(config);
        for file_path in &loaded.file_paths {
            let doc = match loader.load_file(file_path) {
                Ok(doc) => doc,
                Err(err) => return CommandResult::stderr(format_args!(
                    "{} {err}",
                    output_utils::RED_X,
                )),
            };

            if let Err(err) = merger.add_document(doc) {
                return CommandResult::stderr(format_args!(
                    "{} Error merging {}: {err}",
                    output_utils::RED_X,
                    file_path.display(),
                ));
            }
        }

        let merged = merger.finish();
        let sdl = libgraphql_merge::print_type_defs(&merged);
        log::info!(
            "Merged {} files ({} non-graphql entries skipped) into {} definitions.",
            loaded.file_paths.len(),
            loaded.num_skipped,
            merged.definitions.len(),
        );

        let Some(output_path) = self.output else {
            return CommandResult::stdout(format_args!("{}", sdl.trim_end()));
        };

        match tokio::fs::write(&output_path, sdl).await {
            Ok(()) => CommandResult::stdout(format_args!(
                "{} Wrote merged schema ({} definitions) to {}.",
                output_utils::GREEN_CHECK,
                merged.definitions.len(),
                output_path.display(),
            )),

            Err(err) => CommandResult::stderr(format_args!(
                "{} Failed to write {}: {err}",
                output_utils::RED_X,
                output_path.display(),
            )),
        }
    }
}
