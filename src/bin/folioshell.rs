use std::io::{self, IsTerminal};

use clap::Parser;
use folioshell::{
    cli::ShellCli, content::WELCOME_BANNER, repl::Repl, repl_v2::ReplV2, Session, VirtualFs,
};
use miette::Result;
use tracing::info;

fn main() -> Result<()> {
    let cli = ShellCli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .init();

    let fs = VirtualFs::portfolio()?;
    let mut session = Session::new(fs).with_identity(&cli.user, &cli.host);
    info!("session started as {}", session.prompt());

    if !cli.commands.is_empty() {
        let mut repl = Repl::new(io::empty(), io::stdout().lock(), session);
        for line in &cli.commands {
            repl.execute_line(line)?;
        }
        return Ok(());
    }

    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return Repl::new(stdin.lock(), io::stdout().lock(), session).run();
    }

    if !cli.no_banner {
        println!("{WELCOME_BANNER}\n");
    }

    ReplV2::run(&mut session)
}
