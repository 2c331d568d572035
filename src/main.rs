mod commands;
mod dataset;
mod layout;
mod sociogram;
mod store;
mod tui;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sociograma",
    about = "Collect peer-selection surveys and render them as sociograms"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive survey form (names, questions, answers)
    Survey {
        /// Seed the roster from a text file, one name per line
        #[arg(long)]
        roster: Option<PathBuf>,
    },
    /// Open the sociogram viewer on the saved dataset
    View {
        /// Show a built-in sample dataset (nothing is read or written)
        #[arg(long)]
        demo: bool,
    },
    /// Print every recorded choice, grouped by question
    List {
        /// Limit the output to one question
        #[arg(long)]
        question: Option<String>,
    },
    /// Summarise the saved dataset
    Status,
    /// Query the derived choice graphs
    #[command(
        group(
            ArgGroup::new("inspect_query")
                .args(["isolated", "popular", "unanswered"])
                .multiple(false)
                .required(true)
        )
    )]
    Inspect {
        /// List participants with no incoming and no outgoing choices
        #[arg(long)]
        isolated: bool,
        /// Rank participants by how often they were chosen
        #[arg(long)]
        popular: bool,
        /// List participants who have not chosen anyone
        #[arg(long)]
        unanswered: bool,
        /// Limit the query to one question
        #[arg(long)]
        question: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Survey { roster } => commands::survey::run(roster.as_deref()),
        Command::View { demo } => commands::view::run(demo),
        Command::List { question } => commands::list::run(question.as_deref()),
        Command::Status => commands::status::run(),
        Command::Inspect {
            isolated,
            popular,
            unanswered,
            question,
        } => {
            let question = question.as_deref();
            if isolated {
                commands::inspect::run_isolated(question)
            } else if popular {
                commands::inspect::run_popular(question)
            } else if unanswered {
                commands::inspect::run_unanswered(question)
            } else {
                unreachable!("clap requires exactly one inspect query flag")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn inspect_rejects_multiple_query_flags() {
        let parsed = Cli::try_parse_from(["sociograma", "inspect", "--isolated", "--popular"]);
        assert!(
            parsed.is_err(),
            "inspect flags should be mutually exclusive"
        );
        let err = parsed.err().expect("expected clap parse error");
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn inspect_requires_a_query_flag() {
        let parsed = Cli::try_parse_from(["sociograma", "inspect"]);
        assert!(parsed.is_err(), "inspect needs one query flag");
    }

    #[test]
    fn inspect_accepts_single_query_flag() {
        let cli = Cli::try_parse_from(["sociograma", "inspect", "--isolated"])
            .expect("single inspect flag should parse");
        match cli.command {
            Command::Inspect { isolated, .. } => assert!(isolated),
            _ => panic!("expected inspect command"),
        }
    }

    #[test]
    fn survey_accepts_roster_path() {
        let cli = Cli::try_parse_from(["sociograma", "survey", "--roster", "names.txt"])
            .expect("survey --roster should parse");
        match cli.command {
            Command::Survey { roster } => {
                assert_eq!(roster, Some(PathBuf::from("names.txt")));
            }
            _ => panic!("expected survey command"),
        }
    }
}
