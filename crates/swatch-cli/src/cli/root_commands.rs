use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Extract components and publish their pages.
    Build(BuildArgs),
    /// List extracted components.
    List(ListArgs),
    /// Print navigation, page links and build date.
    Nav,
}

#[derive(Clone, Debug, Args)]
pub struct BuildArgs {
    /// Keep existing files in the publish directory instead of clearing it
    /// first.
    #[arg(long)]
    pub keep: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Only list components in this category.
    #[arg(short, long)]
    pub category: Option<String>,
}
