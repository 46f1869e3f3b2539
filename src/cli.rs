//! CLI domain: parse, route, output, and presentation only.
//! No marker logic; the route table dispatches to sweep, watch and the classifier.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_check_result, format_no_workspace, format_sweep_report, format_watch_stats,
};
pub use route::RunContext;
