use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Day code to resolve (1-7); prompts on stdin when omitted
    #[arg(allow_negative_numbers = true)]
    pub code: Option<String>,

    /// Log resolution details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
