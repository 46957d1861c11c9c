use clap::Parser;
use miette::Result;
use warden::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Prisoner(cmd) => warden::cli::commands::prisoner::run(cmd, &global),
        Commands::Cell(cmd) => warden::cli::commands::cell::run(cmd, &global),
        Commands::Visitor(cmd) => warden::cli::commands::visitor::run(cmd, &global),
        Commands::Staff(cmd) => warden::cli::commands::staff::run(cmd, &global),
        Commands::Incident(cmd) => warden::cli::commands::incident::run(cmd, &global),
        Commands::Medical(cmd) => warden::cli::commands::medical::run(cmd, &global),
    }
}
