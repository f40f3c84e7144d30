use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use infix_calculator::interpreter::{calculate, lexer, parser, tokens_to_string};
use std::io::{self, BufRead, Write};

/// Evaluates the given arithmetic expression
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate; expressions are read from standard input when omitted
    expression: Option<String>,

    /// Print the postfix (reverse polish) form of the expression instead of evaluating it
    #[clap(long)]
    postfix: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    match args.expression {
        Some(expression) => {
            let output = render(&expression, args.postfix)?;
            println!("{}", output);
            Ok(())
        }
        None => run_prompt(args.postfix),
    }
}

/// Reads expressions from standard input until end of input or an exit
/// command, printing each result or error on its own line.
fn run_prompt(postfix: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ").context("Failed to write prompt")?;
        stdout.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let bytes_read = stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read expression")?;
        if bytes_read == 0 {
            break;
        }

        let expression = line.trim();
        log::debug!("read expression {:?}", expression);
        if expression.is_empty() {
            continue;
        }
        if expression == "exit" || expression == "quit" {
            break;
        }

        match render(expression, postfix) {
            Ok(output) => println!("= {}", output),
            Err(error) => println!("error: {}", error),
        }
    }

    Ok(())
}

fn render(expression: &str, postfix: bool) -> Result<String> {
    if postfix {
        let tokens = lexer::tokenize(expression);
        let postfix_tokens = parser::to_postfix(tokens)?;
        tokens_to_string(postfix_tokens)
    } else {
        let value = calculate(expression)?;
        Ok(value.to_string())
    }
}
