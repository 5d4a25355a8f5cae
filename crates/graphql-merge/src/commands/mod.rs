mod merge;

use crate::Cli;
use crate::CommandResult;
use merge::MergeCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-merge")]
pub(crate) enum CommandEnum {
    /// Merge GraphQL schema files into a single schema document.
    Merge(Box<MergeCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Merge(cmd) => cmd.run(cli).await
        }
    }
}
