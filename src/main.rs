use anyhow::Result;
use argh::FromArgs;
use course_planner::{Console, Session};
use tracing_subscriber::EnvFilter;

#[derive(FromArgs)]
/// Interactive ABCU course planner: load a course file, then list all
/// courses or look up one course and its prerequisites.
struct Args {}

fn main() -> Result<()> {
    let _args: Args = argh::from_env();

    // Diagnostics go to stderr so they never interleave with the menu.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut session = Session::new(Console::new()?, std::io::stdout());
    session.run()
}
