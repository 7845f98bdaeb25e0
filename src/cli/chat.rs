use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::chat::{Session, SubmitOutcome};
use crate::core::AppConfig;
use crate::openrouter::OpenRouterClient;

pub async fn run() -> Result<()> {
    // A missing API key blocks the whole session with setup guidance
    // instead of failing on the first question
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("{}", e);
            println!("Add OPENROUTER_API_KEY=<your key> to your environment to get started.");
            return Ok(());
        }
    };

    let client = OpenRouterClient::new(config.completion_config());
    let mut session = Session::new(&config.system_message, Box::new(client));

    let mut rl = DefaultEditor::new().expect("Editor failed");

    println!("EduMate study assistant");
    println!("Ask a question, /clear to reset the conversation, Ctrl-D to exit.");

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                if line.trim() == "/clear" {
                    session.clear();
                    println!("Chat history cleared!");
                    continue;
                }
                match session.submit(&line).await {
                    SubmitOutcome::Ignored => continue,
                    SubmitOutcome::Answered(text) => println!("{}", text),
                    SubmitOutcome::Failed(e) => {
                        println!("Error: {}", e);
                        println!("Please check your internet connection and API key.");
                    }
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
