use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ats-client")]
#[command(about = "Scores a resume against a job description and drafts a cover letter via the ATS Matcher API")]
#[command(version)]
pub struct Args {
    /// Backend base URL (overrides ATS_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Per-request timeout in seconds (overrides ATS_REQUEST_TIMEOUT_SECS; default: none)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Print the session state as JSON instead of the text view
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze the match between resume and job description
    Match(FormArgs),
    /// Generate a cover letter
    CoverLetter(FormArgs),
    /// Run the match, then generate a cover letter
    Analyze(FormArgs),
    /// Check that the backend is reachable
    Ping,
}

#[derive(ClapArgs, Debug)]
pub struct FormArgs {
    /// Job description file, or - for stdin
    #[arg(short, long)]
    pub job: String,

    /// Resume file, or - for stdin
    #[arg(short, long)]
    pub resume: String,

    /// Strip LaTeX markup from the resume before sending
    #[arg(long)]
    pub latex: bool,
}
