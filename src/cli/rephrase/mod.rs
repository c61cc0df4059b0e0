//! Rephrase command - terminal counterpart of the web form

mod client;
mod form;

pub use client::{ClientError, HttpRephraseApi, RephraseApi};
pub use form::{FormState, RephraseForm, SubmitRejected, EMPTY_INPUT_ERROR};

use std::io::Read;

use clap::Args;

#[derive(Debug, Args)]
pub struct RephraseArgs {
    /// Base URL of a running rephrase server
    #[arg(long, env = "REPHRASE_API_URL", default_value = "http://localhost:8080")]
    pub api_url: String,

    /// Text to rephrase; read from stdin when omitted
    pub text: Option<String>,
}

/// Submit one piece of text and print the rephrased result
pub async fn run(args: RephraseArgs) -> anyhow::Result<()> {
    let input = match args.text {
        Some(text) => text,
        None => read_stdin()?,
    };

    let api = HttpRephraseApi::new(&args.api_url);
    let mut form = RephraseForm::new();
    form.set_input(input);

    form.submit(&api).await?;

    match form.state() {
        FormState::Success(rephrased) => {
            println!("{}", rephrased);
            Ok(())
        }
        FormState::Error(message) => anyhow::bail!("{}", message),
        FormState::Idle | FormState::Loading => anyhow::bail!("no result"),
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
