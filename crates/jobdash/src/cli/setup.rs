use clap::{Parser, Subcommand, ValueEnum};
use jobdashapp::pipeline::SortOption;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "jobdash", bin_name = "jobdash", version)]
#[command(about = "Filter, sort and save views over recruitment job postings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Directory holding saved views and the posting draft
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Config file to use instead of the user's jobdash.toml
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List jobs matching a view, filters and search
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show the filters jobs can be narrowed by
    Catalog {
        #[arg(long, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Manage saved views
    Views {
        #[command(subcommand)]
        command: ViewCommands,
    },

    /// Inspect or discard the job posting draft
    Draft {
        #[command(subcommand)]
        command: DraftCommands,
    },

    /// Prefill the posting draft from a position title
    Suggest {
        /// Position title, e.g. "Skladník"
        #[arg(required = true, num_args = 1..)]
        position: Vec<String>,
    },
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Jobs JSON file (falls back to `jobs_file` in the config)
    #[arg(long, value_name = "FILE")]
    pub jobs: Option<PathBuf>,

    /// View to start from (defaults to "Aktivní")
    #[arg(long)]
    pub view: Option<String>,

    /// Start from no filters at all instead of a view
    #[arg(long, conflicts_with = "view")]
    pub all: bool,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Case-insensitive title search
    #[arg(short, long)]
    pub search: Option<String>,

    /// title-asc, title-desc, published-asc, published-desc, expires-asc, expires-desc
    #[arg(long)]
    pub sort: Option<SortOption>,

    #[arg(long, value_enum, default_value_t)]
    pub output: OutputFormat,
}

#[derive(clap::Args, Debug, Default)]
pub struct FilterArgs {
    /// Filter as id=value, repeatable (e.g. --filter adStatus=Ukončený)
    #[arg(short, long = "filter", value_name = "ID=VALUE", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,
}

#[derive(Subcommand, Debug)]
pub enum ViewCommands {
    /// List built-in and saved views
    #[command(alias = "ls")]
    List {
        #[arg(long, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Show one view and its filters
    Show {
        id: String,
        #[arg(long, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Save filters as a new view
    Save {
        /// View name; the id is derived from it
        name: String,

        /// Start from this view's filters instead of none
        #[arg(long)]
        view: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Rename a saved view and replace its filters
    Update {
        id: String,
        name: String,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Delete a saved view
    #[command(alias = "rm")]
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum DraftCommands {
    /// Print the stored draft
    Show {
        #[arg(long, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Discard the stored draft
    Clear,
}

/// Parse `id=value`. Only the first `=` splits, so values may contain `=`.
pub fn parse_filter(arg: &str) -> Result<(String, String), String> {
    let (id, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected ID=VALUE, got '{}'", arg))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing filter id in '{}'", arg));
    }
    Ok((id.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        assert_eq!(
            parse_filter("status=Aktivní").unwrap(),
            ("status".to_string(), "Aktivní".to_string())
        );
        assert_eq!(
            parse_filter("location = Praha 4").unwrap(),
            ("location".to_string(), "Praha 4".to_string())
        );
        assert_eq!(parse_filter("a=b=c").unwrap().1, "b=c");
        assert!(parse_filter("status").is_err());
        assert!(parse_filter("=x").is_err());
    }

    #[test]
    fn test_list_args() {
        let cli = Cli::try_parse_from([
            "jobdash",
            "list",
            "--jobs",
            "jobs.json",
            "--view",
            "Vystavené",
            "-f",
            "portal=Jobs.cz",
            "-f",
            "portal=LinkedIn",
            "--sort",
            "expires-desc",
            "--output",
            "json",
        ])
        .unwrap();

        let Commands::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.view.as_deref(), Some("Vystavené"));
        assert_eq!(args.filters.filters.len(), 2);
        assert_eq!(args.sort, Some(SortOption::ExpiresDesc));
        assert_eq!(args.output, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_sort_rejected() {
        assert!(Cli::try_parse_from(["jobdash", "list", "--sort", "random"]).is_err());
    }

    #[test]
    fn test_all_conflicts_with_view() {
        assert!(Cli::try_parse_from(["jobdash", "list", "--all", "--view", "Aktivní"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["jobdash", "views", "list", "-v", "--data-dir", "/tmp/x"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn test_suggest_joins_words() {
        let cli = Cli::try_parse_from(["jobdash", "suggest", "Obchodní", "zástupce"]).unwrap();
        let Commands::Suggest { position } = cli.command else {
            panic!("expected suggest");
        };
        assert_eq!(position.join(" "), "Obchodní zástupce");
    }
}
