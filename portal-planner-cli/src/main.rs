//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = portal_planner_cli::run() {
        #[expect(clippy::print_stderr, reason = "the binary reports fatal errors to stderr")]
        {
            eprintln!("portal-planner: {err}");
        }
        std::process::exit(1);
    }
}
